pub mod breadcrumb;
pub mod documentation_button;
pub mod suspense_loader;
pub mod tab_bar;
