/// Configuration, types, and shared structures for lumatlas.
///
/// This crate contains the pixel buffers, the cell grid model, the
/// configuration logic, and the error types used across the lumatlas
/// workspace.

pub mod config;
pub mod error;
pub mod frame;
pub mod grid;

pub use config::ReorderConfig;
pub use error::CoreError;
pub use frame::{FrameBuffer, LumaPlane};
pub use grid::CellGrid;
