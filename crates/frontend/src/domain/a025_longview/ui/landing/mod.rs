pub mod model;
mod page;

pub use page::{LongviewClientsView, LongviewLanding, LongviewPlansView};
