use super::{PathResult, extend_path};
use crate::graph::{Graph, VertexId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{collections::VecDeque, time::Instant};

struct BfsState {
    queue: VecDeque<VertexId>,
    visited: FxHashSet<VertexId>,
    paths: FxHashMap<VertexId, Vec<VertexId>>,
}

impl BfsState {
    fn new(start: VertexId) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);

        let mut paths = FxHashMap::default();
        paths.insert(start, vec![start]);

        Self {
            queue,
            visited: FxHashSet::default(),
            paths,
        }
    }

    /// Enqueues the neighbor unless it is already waiting in the queue or
    /// was already visited.
    fn visit_neighbor(&mut self, neighbor: VertexId, current_path: &[VertexId]) {
        if self.visited.contains(&neighbor) || self.queue.contains(&neighbor) {
            return;
        }
        self.paths.insert(neighbor, extend_path(current_path, neighbor));
        self.queue.push_back(neighbor);
    }
}

/// Breadth-first search from `start` to `target`.
///
/// Returns a path minimal in edge count.
pub fn bfs_find_path(graph: &Graph, start: VertexId, target: VertexId) -> PathResult {
    let search_timer = Instant::now();
    let mut state = BfsState::new(start);

    while let Some(current) = state.queue.pop_front() {
        state.visited.insert(current);

        if current == target {
            let path = state.paths[&current].clone();
            return (
                Some(path),
                state.visited.len(),
                search_timer.elapsed().as_secs_f64(),
            );
        }

        let current_path = state.paths[&current].clone();
        for &neighbor in graph.vertex(current).neighbors() {
            state.visit_neighbor(neighbor, &current_path);
        }
    }

    (
        None,
        state.visited.len(),
        search_timer.elapsed().as_secs_f64(),
    )
}
