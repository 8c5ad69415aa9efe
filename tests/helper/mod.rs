#[allow(dead_code)]
pub mod engine;

pub use engine::*;
