pub mod anchor;
pub mod camera;
pub mod compose;
pub mod constants;
pub mod engine;
pub mod error;
pub mod focus;
pub mod gravity;
pub mod nav;
pub mod scroll;

pub use anchor::*;
pub use camera::*;
pub use compose::*;
pub use constants::*;
pub use engine::*;
pub use error::EngineError;
pub use focus::*;
pub use gravity::*;
pub use nav::*;
pub use scroll::*;
