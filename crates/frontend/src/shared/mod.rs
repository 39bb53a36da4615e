pub mod api_request;
pub mod api_utils;
pub mod components;
pub mod icons;
pub mod lazy_view;
pub mod page_frame;
pub mod page_standard;
