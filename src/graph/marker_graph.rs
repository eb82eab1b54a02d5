//! Core graph structure: vertices, edges and the marker registry.

use crate::list::OrderedList;
use crate::marker::{MarkedElement, MarkerDescriptor, MarkerRegistry, MarkerSlots};
use crate::types::{Edge, EdgeId, Entity, GraphError, GraphResult, MarkerId, Vertex, VertexId};

/// A resolved marker owner: the handle together with the entity it names.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    /// A live vertex.
    Vertex(VertexId, &'a Vertex),
    /// A live edge.
    Edge(EdgeId, &'a Edge),
}

/// A directed graph whose vertices and edges can carry markers.
///
/// The graph owns every vertex, edge and marker descriptor. Removing a
/// vertex removes its incident edges, and removing any entity clears the
/// markers it carries, so no call leaves a marker member pointing at an
/// entity that no longer exists.
pub struct Graph {
    /// All vertices, in creation order.
    vertices: OrderedList<VertexId, Vertex>,
    /// All edges, in creation order.
    edges: OrderedList<EdgeId, Edge>,
    /// Marker pool.
    markers: MarkerRegistry,
    next_vertex: u64,
    next_edge: u64,
}

impl Graph {
    /// Create a new empty graph with every marker unallocated.
    pub fn new() -> Self {
        Self {
            vertices: OrderedList::new(),
            edges: OrderedList::new(),
            markers: MarkerRegistry::new(),
            next_vertex: 0,
            next_edge: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Whether `id` names a live vertex.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    /// Whether `id` names a live edge.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(&id)
    }

    /// All vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices.iter()
    }

    /// All edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter()
    }

    /// Edges entering `vertex`. Empty if the vertex does not exist.
    pub fn incoming(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices.get(&vertex).into_iter().flat_map(Vertex::incoming)
    }

    /// Edges leaving `vertex`. Empty if the vertex does not exist.
    pub fn outgoing(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices.get(&vertex).into_iter().flat_map(Vertex::outgoing)
    }

    /// First vertex, in creation order, carrying `payload`.
    pub fn find_vertex(&self, payload: u32) -> Option<VertexId> {
        self.vertices
            .iter()
            .find(|(_, v)| v.payload == payload)
            .map(|(id, _)| id)
    }

    /// First edge, in `source`'s outgoing order, that enters `target`.
    pub fn find_edge(&self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        self.outgoing(source)
            .find(|id| self.edges.get(id).is_some_and(|e| e.target == target))
    }

    /// Add a vertex, returns the assigned ID.
    pub fn add_vertex(&mut self, payload: u32) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.push_back(id, Vertex::new(payload));
        log::debug!("Created vertex {} (payload {})", id, payload);
        id
    }

    /// Add a directed edge from `source` to `target`.
    ///
    /// Both endpoints must be live vertices of this graph. A loop
    /// (`source == target`) is allowed.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> GraphResult<EdgeId> {
        if !self.vertices.contains(&source) {
            return Err(GraphError::VertexNotFound(source));
        }
        if !self.vertices.contains(&target) {
            return Err(GraphError::VertexNotFound(target));
        }

        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.push_back(id, Edge::new(source, target));
        if let Some(src) = self.vertices.get_mut(&source) {
            src.outgoing.push_back(id, ());
        }
        if let Some(dst) = self.vertices.get_mut(&target) {
            dst.incoming.push_back(id, ());
        }

        log::debug!("Created edge {} ({} -> {})", id, source, target);
        Ok(id)
    }

    /// Remove an edge, returning it. Removing an absent edge is a no-op.
    ///
    /// Every marker on the edge is cleared, and the edge is detached from
    /// its source's outgoing list and its target's incoming list.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let mut edge = self.edges.remove(&id)?;
        let cleared = self.markers.detach_all(&mut edge.markers, Entity::Edge(id));

        if let Some(src) = self.vertices.get_mut(&edge.source) {
            src.outgoing.remove(&id);
        }
        if let Some(dst) = self.vertices.get_mut(&edge.target) {
            dst.incoming.remove(&id);
        }

        log::debug!(
            "Removed edge {} ({} -> {}), cleared {} markers",
            id,
            edge.source,
            edge.target,
            cleared
        );
        Some(edge)
    }

    /// Remove a vertex and every edge that enters or leaves it.
    ///
    /// Markers are cleared from the vertex and from each removed edge.
    /// Removing an absent vertex is a no-op.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        let vertex = self.vertices.get_mut(&id)?;
        let cleared = self.markers.detach_all(&mut vertex.markers, Entity::Vertex(id));

        // A loop sits in both lists; its second removal is a no-op.
        let incident: Vec<EdgeId> = vertex.incoming.keys().chain(vertex.outgoing.keys()).collect();
        let removed_edges = incident
            .into_iter()
            .filter(|&edge| self.remove_edge(edge).is_some())
            .count();

        let vertex = self.vertices.remove(&id)?;
        log::debug!(
            "Removed vertex {} with {} incident edges, cleared {} markers",
            id,
            removed_edges,
            cleared
        );
        Some(vertex)
    }

    /// Move one or both endpoints of an edge.
    ///
    /// `None` leaves that endpoint unchanged. The edge keeps its markers.
    /// Redirecting an absent edge is a no-op; naming an absent vertex as a
    /// new endpoint is an error and changes nothing.
    pub fn redirect_edge(
        &mut self,
        id: EdgeId,
        new_source: Option<VertexId>,
        new_target: Option<VertexId>,
    ) -> GraphResult<()> {
        let Some(edge) = self.edges.get(&id) else {
            log::debug!("Redirect of absent edge {} ignored", id);
            return Ok(());
        };
        let (old_source, old_target) = (edge.source, edge.target);

        for vertex in new_source.iter().chain(new_target.iter()) {
            if !self.vertices.contains(vertex) {
                return Err(GraphError::VertexNotFound(*vertex));
            }
        }

        if let Some(source) = new_source {
            if let Some(v) = self.vertices.get_mut(&old_source) {
                v.outgoing.remove(&id);
            }
            if let Some(v) = self.vertices.get_mut(&source) {
                v.outgoing.push_back(id, ());
            }
            if let Some(e) = self.edges.get_mut(&id) {
                e.source = source;
            }
        }

        if let Some(target) = new_target {
            if let Some(v) = self.vertices.get_mut(&old_target) {
                v.incoming.remove(&id);
            }
            if let Some(v) = self.vertices.get_mut(&target) {
                v.incoming.push_back(id, ());
            }
            if let Some(e) = self.edges.get_mut(&id) {
                e.target = target;
            }
        }

        log::debug!(
            "Redirected edge {} from ({} -> {}) to ({} -> {})",
            id,
            old_source,
            old_target,
            new_source.unwrap_or(old_source),
            new_target.unwrap_or(old_target)
        );
        Ok(())
    }

    /// Tear down everything the graph holds.
    ///
    /// Markers are freed first, then edges, then vertices. Each step is
    /// idempotent against the ones before it: entity removal clears
    /// markers that are already gone as a no-op, and vertex removal finds
    /// no incident edges left to cascade into.
    pub fn clear(&mut self) {
        let freed: usize = MarkerId::all().map(|id| self.free_marker(id)).sum();

        for edge in self.edges.to_vec() {
            self.remove_edge(edge);
        }
        for vertex in self.vertices.to_vec() {
            self.remove_vertex(vertex);
        }

        log::debug!("Cleared graph ({} marker memberships freed)", freed);
    }

    /// Tear the graph down and release it.
    pub fn destroy(mut self) {
        self.clear();
    }

    // ==================== Markers ====================

    /// Allocate the lowest free marker id.
    pub fn allocate_marker(&mut self) -> GraphResult<MarkerId> {
        match self.markers.allocate() {
            Ok(id) => {
                log::debug!("Allocated marker {}", id);
                Ok(id)
            }
            Err(e) => {
                log::warn!("{}", e);
                Err(e)
            }
        }
    }

    /// Free marker `id`, clearing it from every entity that carries it.
    ///
    /// Returns the number of entities that lost the marker. Freeing an
    /// unallocated marker is a no-op returning 0.
    pub fn free_marker(&mut self, id: MarkerId) -> usize {
        if !self.markers.is_allocated(id) {
            return 0;
        }
        let vertices = &mut self.vertices;
        let edges = &mut self.edges;
        let cleared = self.markers.release(id, |owner| {
            if let Some(slots) = slots_mut(vertices, edges, owner) {
                slots.remove(id);
            }
        });
        log::debug!("Freed marker {} ({} entities cleared)", id, cleared);
        cleared
    }

    /// Set marker `id` on a vertex or edge.
    ///
    /// Returns `Ok(true)` if the marker was newly set and `Ok(false)` if it
    /// was already set. The entity must exist and the marker must be
    /// allocated.
    pub fn set_marker(&mut self, entity: impl Into<Entity>, id: MarkerId) -> GraphResult<bool> {
        let owner = entity.into();
        let slots = slots_mut(&mut self.vertices, &mut self.edges, owner).ok_or(match owner {
            Entity::Vertex(v) => GraphError::VertexNotFound(v),
            Entity::Edge(e) => GraphError::EdgeNotFound(e),
        })?;
        let newly_set = self.markers.attach(slots, owner, id)?;
        log::trace!("Set marker {} on {} (new: {})", id, owner, newly_set);
        Ok(newly_set)
    }

    /// Clear marker `id` from a vertex or edge.
    ///
    /// Returns false, changing nothing, if the marker was not set or the
    /// entity does not exist.
    pub fn unset_marker(&mut self, entity: impl Into<Entity>, id: MarkerId) -> bool {
        let owner = entity.into();
        let Some(slots) = slots_mut(&mut self.vertices, &mut self.edges, owner) else {
            return false;
        };
        let was_set = self.markers.detach(slots, owner, id);
        log::trace!("Unset marker {} on {} (was set: {})", id, owner, was_set);
        was_set
    }

    /// Whether marker `id` is set on a vertex or edge.
    pub fn check_marker(&self, entity: impl Into<Entity>, id: MarkerId) -> bool {
        self.slots(entity.into()).is_some_and(|s| s.contains(id))
    }

    /// Marker ids set on a vertex or edge, ascending.
    pub fn markers_of(&self, entity: impl Into<Entity>) -> Vec<MarkerId> {
        self.slots(entity.into())
            .map(|s| s.iter().collect())
            .unwrap_or_default()
    }

    /// Entities carrying marker `id`, in the order the marker was set.
    pub fn marker_members(&self, id: MarkerId) -> impl Iterator<Item = MarkedElement> + '_ {
        self.markers.members(id)
    }

    /// Descriptor of marker `id`.
    pub fn marker(&self, id: MarkerId) -> &MarkerDescriptor {
        self.markers.descriptor(id)
    }

    /// Whether marker `id` is allocated.
    pub fn is_marker_allocated(&self, id: MarkerId) -> bool {
        self.markers.is_allocated(id)
    }

    /// Allocated marker ids, ascending.
    pub fn allocated_markers(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.markers.allocated()
    }

    /// Resolve a marker owner to the live vertex or edge it names.
    pub fn resolve(&self, owner: Entity) -> Option<EntityRef<'_>> {
        match owner {
            Entity::Vertex(id) => self.vertices.get(&id).map(|v| EntityRef::Vertex(id, v)),
            Entity::Edge(id) => self.edges.get(&id).map(|e| EntityRef::Edge(id, e)),
        }
    }

    fn slots(&self, owner: Entity) -> Option<&MarkerSlots> {
        match owner {
            Entity::Vertex(id) => self.vertices.get(&id).map(|v| &v.markers),
            Entity::Edge(id) => self.edges.get(&id).map(|e| &e.markers),
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

fn slots_mut<'a>(
    vertices: &'a mut OrderedList<VertexId, Vertex>,
    edges: &'a mut OrderedList<EdgeId, Edge>,
    owner: Entity,
) -> Option<&'a mut MarkerSlots> {
    match owner {
        Entity::Vertex(id) => vertices.get_mut(&id).map(|v| &mut v.markers),
        Entity::Edge(id) => edges.get_mut(&id).map(|e| &mut e.markers),
    }
}
