pub mod a025_longview;
