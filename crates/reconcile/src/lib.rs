//! Map state reconciliation
//!
//! This crate provides:
//! - Annotation set differ (minimal add/remove delta by stable id)
//! - DisplayState snapshot owned by the caller
//! - MapMutation instruction set for map surfaces
//! - The reconciler folding updates into ordered mutation plans
//! - MapSurface capability trait + recording test double

pub mod diff;
pub mod mutation;
pub mod reconciler;
pub mod state;
pub mod surface;

// Re-exports
pub use diff::AnnotationDiff;
pub use mutation::MapMutation;
pub use reconciler::{
    Reconciler, ReconcilerConfig, Reconciliation, RouteChange, SelectionChange, Update,
};
pub use state::DisplayState;
pub use surface::{MapSurface, RecordingSurface};
