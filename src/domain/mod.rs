// Domain layer: value types, the command alphabet and the ports the readers depend on.

pub mod commands;
pub mod model;
pub mod ports;
