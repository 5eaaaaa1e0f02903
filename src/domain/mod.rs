// Domain layer: core models, the sign reference table and ports (interfaces).

pub mod model;
pub mod ports;
pub mod signs;
