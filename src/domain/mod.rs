// Domain layer: catalog models and the ports they rely on.

pub mod model;
pub mod ports;
