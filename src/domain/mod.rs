// Domain layer: recipe model, dietary rules and ports. No IO here.

pub mod dietary;
pub mod model;
pub mod ports;
