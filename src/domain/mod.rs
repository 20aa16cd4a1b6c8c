// Domain layer: data model and ports. Only std/serde here; concrete I/O lives in adapters.

pub mod model;
pub mod ports;
