pub mod collision;
pub mod movement;
pub mod scoring;
pub mod serve;

pub use scoring::*;
