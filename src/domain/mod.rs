// Domain layer: geometry value types, entity models and ports
// (interfaces). No IO and no dependency on the adapters.

pub mod geometry;
pub mod model;
pub mod ports;
