pub mod a025_longview_subscription;
