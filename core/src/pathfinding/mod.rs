pub mod bfs;
pub mod dfs;
pub mod dijkstra;

// Re-export the public functions
pub use bfs::bfs_find_path;
pub use dfs::dfs_find_path;
pub use dijkstra::dijkstra_find_path;

use crate::graph::VertexId;

/// Result of one search call: the path from start to target (`None` when the
/// target is unreachable), how many vertices were visited, and the elapsed
/// time in seconds.
pub type PathResult = (Option<Vec<VertexId>>, usize, f64);

/// Builds the scratch path recorded for a neighbor: the expanding vertex's
/// path with the neighbor appended.
fn extend_path(current_path: &[VertexId], neighbor: VertexId) -> Vec<VertexId> {
    let mut path = Vec::with_capacity(current_path.len() + 1);
    path.extend_from_slice(current_path);
    path.push(neighbor);
    path
}
