// Domain layer: core models and ports (interfaces). No dependencies beyond serde/chrono/decimal.

pub mod model;
pub mod ports;
