pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod snapshot;
pub mod systems;
pub mod vector;

pub use components::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;
pub use snapshot::*;
pub use vector::*;
