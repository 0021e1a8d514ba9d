// Domain layer: core models, ports (interfaces) and pure services.
// No I/O here; everything network- or disk-shaped sits behind a port.

pub mod model;
pub mod ports;
pub mod services;
pub mod timesum;
