//! Markers: cheap boolean labels on vertices and edges, enumerable by label.

pub mod registry;
pub mod slots;

pub use registry::{MarkedElement, MarkerDescriptor, MarkerRegistry};
pub use slots::MarkerSlots;

use crate::types::MarkerId;

/// Anything that carries marker slots. Implemented by vertices and edges.
pub trait Marked {
    /// The entity's marker slots.
    fn markers(&self) -> &MarkerSlots;

    /// Whether marker `id` is set on this entity.
    fn has_marker(&self, id: MarkerId) -> bool {
        self.markers().contains(id)
    }
}
