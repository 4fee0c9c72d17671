// Domain layer: profile data, contact models and ports (interfaces).
// No transport or framework types beyond serde.

pub mod model;
pub mod ports;
pub mod profile;
