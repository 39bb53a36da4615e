pub mod clients;
pub mod landing;
pub mod plans;
