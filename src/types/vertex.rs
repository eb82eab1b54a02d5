//! The vertex struct.

use crate::list::OrderedList;
use crate::marker::{Marked, MarkerSlots};

use super::EdgeId;

/// A graph node: an integer payload plus its incident edges.
#[derive(Debug)]
pub struct Vertex {
    pub(crate) payload: u32,
    /// Edges whose target is this vertex, in attach order.
    pub(crate) incoming: OrderedList<EdgeId>,
    /// Edges whose source is this vertex, in attach order.
    pub(crate) outgoing: OrderedList<EdgeId>,
    pub(crate) markers: MarkerSlots,
}

impl Vertex {
    pub(crate) fn new(payload: u32) -> Self {
        Self {
            payload,
            incoming: OrderedList::new(),
            outgoing: OrderedList::new(),
            markers: MarkerSlots::new(),
        }
    }

    /// The integer payload given at creation.
    pub fn payload(&self) -> u32 {
        self.payload
    }

    /// Incoming edges in attach order.
    pub fn incoming(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.incoming.keys()
    }

    /// Outgoing edges in attach order.
    pub fn outgoing(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing.keys()
    }

    /// Number of incoming edges.
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Whether `edge` enters this vertex.
    pub fn has_incoming(&self, edge: EdgeId) -> bool {
        self.incoming.contains(&edge)
    }

    /// Whether `edge` leaves this vertex.
    pub fn has_outgoing(&self, edge: EdgeId) -> bool {
        self.outgoing.contains(&edge)
    }
}

impl Marked for Vertex {
    fn markers(&self) -> &MarkerSlots {
        &self.markers
    }
}
