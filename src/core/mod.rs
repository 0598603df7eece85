pub mod arith;
pub mod convert;
pub mod market;
pub mod preprocess;

pub use crate::domain::model::{TimeOfDay, TimestampFormat};
pub use crate::domain::ports::RawNumber;
pub use crate::utils::error::Result;
