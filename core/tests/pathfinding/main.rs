mod dfs;
mod dijkstra;

use mazepath_core::{Algorithm, MazeGraph, Weighting, parse_maze_str};

// 5x5 maze: walled border, open 3x3 interior of weight 1.
//   a0 b0 c0 d0 e0
//   f0 g1 h1 i1 j0
//   k0 l1 m1 n1 o0
//   p0 q1 r1 s1 t0
//   u0 v0 w0 x0 y0
fn bordered_maze() -> MazeGraph {
    let grid = parse_maze_str(
        "5 a0 b0 c0 d0 e0 f0 g1 h1 i1 j0 k0 l1 m1 n1 o0 p0 q1 r1 s1 t0 u0 v0 w0 x0 y0",
    )
    .unwrap();
    MazeGraph::new(grid, Weighting::Weighted)
}

#[test]
fn test_bordered_maze_bfs_and_dijkstra_take_two_steps() {
    let maze = bordered_maze();

    for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra] {
        let outcome = maze.solve(algorithm, "m", "g").unwrap();
        let path = outcome.path.unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first().map(String::as_str), Some("m"));
        assert_eq!(path.last().map(String::as_str), Some("g"));
    }
}

#[test]
fn test_bordered_maze_dfs_reaches_target() {
    let maze = bordered_maze();
    let outcome = maze.solve(Algorithm::Dfs, "m", "g").unwrap();
    let path = outcome.path.unwrap();
    assert!(path.len() >= 3);
    assert_eq!(path.first().map(String::as_str), Some("m"));
    assert_eq!(path.last().map(String::as_str), Some("g"));
}

#[test]
fn test_searches_are_idempotent_across_algorithms() {
    let maze = bordered_maze();
    for algorithm in [Algorithm::Dfs, Algorithm::Bfs, Algorithm::Dijkstra] {
        let first = maze.solve(algorithm, "g", "s").unwrap();
        let second = maze.solve(algorithm, "g", "s").unwrap();
        assert_eq!(first.path, second.path);
        assert_eq!(first.vertices_visited, second.vertices_visited);
    }
}
