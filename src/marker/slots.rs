//! Per-entity marker slots.

use crate::types::MarkerId;

/// The marker slots of one vertex or edge: one bit per marker id.
///
/// A set bit means the entity is a member of that marker's descriptor;
/// the registry keeps the two sides in step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerSlots {
    bits: u64,
}

impl MarkerSlots {
    /// All slots empty.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Whether the slot for `id` is occupied.
    pub fn contains(&self, id: MarkerId) -> bool {
        self.bits & Self::mask(id) != 0
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Occupied marker ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = MarkerId> + '_ {
        MarkerId::all().filter(move |id| self.contains(*id))
    }

    /// Occupy the slot. Returns false if it was already occupied.
    pub(crate) fn insert(&mut self, id: MarkerId) -> bool {
        let was_set = self.contains(id);
        self.bits |= Self::mask(id);
        !was_set
    }

    /// Empty the slot. Returns false if it was already empty.
    pub(crate) fn remove(&mut self, id: MarkerId) -> bool {
        let was_set = self.contains(id);
        self.bits &= !Self::mask(id);
        was_set
    }

    fn mask(id: MarkerId) -> u64 {
        1u64 << id.index()
    }
}
