// Adapters layer: concrete implementations of the domain ports
// (alert output, mount surface).

pub mod console;
pub mod screen;
