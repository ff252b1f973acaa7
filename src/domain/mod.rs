// Domain layer: profile model, user input choices and ports. No I/O here.

pub mod model;
pub mod options;
pub mod ports;
