pub use glam::*;

pub mod color;
