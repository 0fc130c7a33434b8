use super::{PathResult, extend_path};
use crate::graph::{Graph, VertexId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;

struct DfsState {
    stack: Vec<VertexId>,
    visited: FxHashSet<VertexId>,
    paths: FxHashMap<VertexId, Vec<VertexId>>,
}

impl DfsState {
    fn new(start: VertexId) -> Self {
        let mut paths = FxHashMap::default();
        paths.insert(start, vec![start]);

        Self {
            stack: vec![start],
            visited: FxHashSet::default(),
            paths,
        }
    }

    /// Records the neighbor's path and pushes it, with no visited or
    /// membership check: duplicates are filtered at pop time, and a later
    /// expansion overwrites the recorded path (last pusher wins).
    fn expand_neighbor(&mut self, neighbor: VertexId, current_path: &[VertexId]) {
        self.paths.insert(neighbor, extend_path(current_path, neighbor));
        self.stack.push(neighbor);
    }
}

/// Depth-first search from `start` to `target`.
///
/// Explores the last-added neighbor first. The returned path is valid but
/// not necessarily shortest.
pub fn dfs_find_path(graph: &Graph, start: VertexId, target: VertexId) -> PathResult {
    let search_timer = Instant::now();
    let mut state = DfsState::new(start);

    while let Some(current) = state.stack.pop() {
        if !state.visited.insert(current) {
            continue;
        }

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
            state.expand_neighbor(neighbor, &current_path);
        }
    }

    (
        None,
        state.visited.len(),
        search_timer.elapsed().as_secs_f64(),
    )
}
