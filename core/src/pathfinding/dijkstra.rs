use super::{PathResult, extend_path};
use crate::graph::{Graph, VertexId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

/// Two running distances within this absolute tolerance compare equal.
const DISTANCE_TOLERANCE: f64 = 0.001;

#[derive(Clone)]
struct QueueEntry {
    distance: f64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        (self.distance - other.distance).abs() < DISTANCE_TOLERANCE
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        if (self.distance - other.distance).abs() < DISTANCE_TOLERANCE {
            return Ordering::Equal;
        }
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        // Handle NaN by treating it as Equal
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
    }
}

struct DijkstraState {
    heap: BinaryHeap<QueueEntry>,
    queued: FxHashSet<VertexId>,
    visited: FxHashSet<VertexId>,
    distances: FxHashMap<VertexId, f64>,
    paths: FxHashMap<VertexId, Vec<VertexId>>,
}

impl DijkstraState {
    fn new(start: VertexId) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry {
            distance: 0.0,
            vertex: start,
        });

        let mut queued = FxHashSet::default();
        queued.insert(start);

        let mut distances = FxHashMap::default();
        distances.insert(start, 0.0);

        let mut paths = FxHashMap::default();
        paths.insert(start, vec![start]);

        Self {
            heap,
            queued,
            visited: FxHashSet::default(),
            distances,
            paths,
        }
    }

    /// Records the neighbor's distance and path, then queues it.
    ///
    /// Skipped when the neighbor is already queued or already finalized;
    /// there is no decrease-key, the distance written here is whatever the
    /// first reaching expansion computed.
    fn visit_neighbor(
        &mut self,
        neighbor: VertexId,
        edge_cost: f64,
        current_distance: f64,
        current_path: &[VertexId],
    ) {
        if self.queued.contains(&neighbor) || self.visited.contains(&neighbor) {
            return;
        }

        let distance = current_distance + edge_cost;
        self.distances.insert(neighbor, distance);
        self.paths.insert(neighbor, extend_path(current_path, neighbor));
        self.heap.push(QueueEntry {
            distance,
            vertex: neighbor,
        });
        self.queued.insert(neighbor);
    }
}

/// Dijkstra-style shortest-path search from `start` to `target`.
///
/// The cost of stepping from one cell to the next is the sum of both cells'
/// weights, so a path's total cost counts every crossing into a cell. With
/// non-negative weights the returned path is minimal under that model.
pub fn dijkstra_find_path(graph: &Graph, start: VertexId, target: VertexId) -> PathResult {
    let search_timer = Instant::now();
    let mut state = DijkstraState::new(start);

    while let Some(QueueEntry { distance, vertex }) = state.heap.pop() {
        state.queued.remove(&vertex);

        if vertex == target {
            let path = state.paths[&vertex].clone();
            return (
                Some(path),
                state.visited.len(),
                search_timer.elapsed().as_secs_f64(),
            );
        }

        if !state.visited.insert(vertex) {
            continue;
        }

        let current_path = state.paths[&vertex].clone();
        let current_weight = graph.vertex(vertex).weight();
        for &neighbor in graph.vertex(vertex).neighbors() {
            let edge_cost = current_weight + graph.vertex(neighbor).weight();
            state.visit_neighbor(neighbor, edge_cost, distance, &current_path);
        }
    }

    (
        None,
        state.visited.len(),
        search_timer.elapsed().as_secs_f64(),
    )
}
