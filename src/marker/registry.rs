//! The fixed pool of marker descriptors owned by a graph.

use serde::Serialize;

use crate::list::OrderedList;
use crate::types::{Entity, GraphError, GraphResult, MarkerId, MARKER_COUNT};

use super::MarkerSlots;

/// Membership record: `owner` carries `marker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MarkedElement {
    /// The marker being carried.
    pub marker: MarkerId,
    /// The vertex or edge carrying it.
    pub owner: Entity,
}

/// One marker id: whether it is handed out, and who carries it.
#[derive(Debug, Default)]
pub struct MarkerDescriptor {
    allocated: bool,
    members: OrderedList<Entity>,
}

impl MarkerDescriptor {
    /// Whether this marker id is currently allocated.
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    /// Entities carrying this marker, in the order the marker was set.
    pub fn members(&self) -> impl Iterator<Item = Entity> + '_ {
        self.members.keys()
    }

    /// Whether `owner` carries this marker.
    pub fn contains(&self, owner: Entity) -> bool {
        self.members.contains(&owner)
    }

    /// Number of entities carrying this marker.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no entity carries this marker.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Pool of [`MARKER_COUNT`] marker descriptors indexed by marker id.
pub struct MarkerRegistry {
    descriptors: [MarkerDescriptor; MARKER_COUNT],
}

impl MarkerRegistry {
    /// Create a registry with every marker unallocated.
    pub fn new() -> Self {
        Self {
            descriptors: std::array::from_fn(|_| MarkerDescriptor::default()),
        }
    }

    /// Hand out the lowest unallocated marker id.
    pub fn allocate(&mut self) -> GraphResult<MarkerId> {
        let id = MarkerId::all()
            .find(|id| !self.descriptors[id.index()].allocated)
            .ok_or(GraphError::MarkersExhausted(MARKER_COUNT))?;
        self.descriptors[id.index()].allocated = true;
        Ok(id)
    }

    /// Descriptor for `id`.
    pub fn descriptor(&self, id: MarkerId) -> &MarkerDescriptor {
        &self.descriptors[id.index()]
    }

    /// Whether `id` is currently allocated.
    pub fn is_allocated(&self, id: MarkerId) -> bool {
        self.descriptors[id.index()].allocated
    }

    /// Allocated marker ids, ascending.
    pub fn allocated(&self) -> impl Iterator<Item = MarkerId> + '_ {
        MarkerId::all().filter(move |id| self.is_allocated(*id))
    }

    /// Number of allocated marker ids.
    pub fn allocated_count(&self) -> usize {
        self.descriptors.iter().filter(|d| d.allocated).count()
    }

    /// Membership records of marker `id`, in the order the marker was set.
    pub fn members(&self, id: MarkerId) -> impl Iterator<Item = MarkedElement> + '_ {
        self.descriptors[id.index()]
            .members()
            .map(move |owner| MarkedElement { marker: id, owner })
    }

    /// Set marker `id` on `owner`, whose slots are `slots`.
    ///
    /// Returns `Ok(false)` when the marker was already set.
    pub(crate) fn attach(
        &mut self,
        slots: &mut MarkerSlots,
        owner: Entity,
        id: MarkerId,
    ) -> GraphResult<bool> {
        let descriptor = &mut self.descriptors[id.index()];
        if !descriptor.allocated {
            return Err(GraphError::MarkerNotAllocated(id));
        }
        if slots.contains(id) {
            return Ok(false);
        }
        descriptor.members.push_back(owner, ());
        slots.insert(id);
        Ok(true)
    }

    /// Clear marker `id` from `owner`. Returns false if it was not set.
    pub(crate) fn detach(&mut self, slots: &mut MarkerSlots, owner: Entity, id: MarkerId) -> bool {
        if !slots.remove(id) {
            return false;
        }
        self.descriptors[id.index()].members.remove(&owner);
        true
    }

    /// Clear every marker carried by `owner`. Returns how many were set.
    pub(crate) fn detach_all(&mut self, slots: &mut MarkerSlots, owner: Entity) -> usize {
        MarkerId::all()
            .filter(|&id| self.detach(slots, owner, id))
            .count()
    }

    /// Return marker `id` to the pool.
    ///
    /// Each member is detached from the descriptor before `clear_slot` is
    /// called for it, so the walk never revisits an element. Returns the
    /// number of entities that lost the marker; freeing an unallocated id
    /// returns 0.
    pub(crate) fn release(&mut self, id: MarkerId, mut clear_slot: impl FnMut(Entity)) -> usize {
        let descriptor = &mut self.descriptors[id.index()];
        if !descriptor.allocated {
            return 0;
        }
        let mut cleared = 0;
        while let Some((owner, ())) = descriptor.members.pop_front() {
            clear_slot(owner);
            cleared += 1;
        }
        descriptor.allocated = false;
        cleared
    }
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
