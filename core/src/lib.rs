pub mod algorithm;
pub mod graph;
pub mod maze;
pub mod parsing;
pub mod pathfinding;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use graph::{Graph, Vertex, VertexId};
pub use maze::{MazeGraph, SearchOutcome, Weighting};
pub use parsing::{MazeGrid, parse_maze_file, parse_maze_str};
pub use pathfinding::{bfs_find_path, dfs_find_path, dijkstra_find_path};
