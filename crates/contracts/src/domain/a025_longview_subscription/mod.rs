pub mod aggregate;

pub use aggregate::{LongviewPrice, LongviewSubscription};
