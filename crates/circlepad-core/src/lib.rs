//! Circlepad Core Library
//!
//! Shape-state management and geometry constraints for the Circlepad canvas
//! editor: the circle data model, the selection/update/delete protocol, and
//! the boundary-clamping rules that keep every circle fully on the canvas.

pub mod bounds;
pub mod shapes;
pub mod store;

pub use bounds::{CanvasBounds, MAX_RADIUS, MIN_RADIUS};
pub use shapes::{Circle, DEFAULT_RADIUS, ShapeId};
pub use store::ShapeStore;
