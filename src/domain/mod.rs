// Domain layer: time-of-day value types and the raw-input port. Depends only on chrono/serde.

pub mod model;
pub mod ports;
