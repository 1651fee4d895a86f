//! Interaction and geometry engine for a circular dial picker.
//!
//! The dial lets a user choose an integer in `1..=count` by dragging a
//! handle around a ring. This crate owns the pointer-to-fraction mapping,
//! the drag/snap state machine and the vector geometry; painting is left
//! to a rendering collaborator consuming [`RenderFrame`] values.

pub mod angle;
pub mod controller;
pub mod geom;
pub mod label;
pub mod metrics;
pub mod shapes;
pub mod snap;

pub use controller::{DialController, DialOptions, DialState, HandleSpec, RenderFrame, ValueChanged};
pub use geom::Point;
pub use label::{UnitLabel, UnitLabels};
pub use metrics::DialMetrics;
pub use snap::SnapParams;
