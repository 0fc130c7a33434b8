use mazepath_core::{Graph, dfs_find_path};

fn labels(graph: &Graph, path: &[usize]) -> Vec<String> {
    path.iter()
        .map(|&id| graph.vertex(id).label().to_string())
        .collect()
}

fn triangle_graph() -> Graph {
    let mut graph = Graph::new();
    for label in ["a", "b", "c"] {
        graph.add_vertex(label);
    }
    graph.add_edge("a", "b");
    graph.add_edge("a", "c");
    graph.add_edge("c", "b");
    graph
}

#[test]
fn test_dfs_explores_last_added_neighbor_first() {
    // "c" was pushed after "b", so the found path detours through it
    let graph = triangle_graph();
    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("b").unwrap();

    let (path, _, _) = dfs_find_path(&graph, start, target);
    assert_eq!(labels(&graph, &path.unwrap()), vec!["a", "c", "b"]);
}

#[test]
fn test_dfs_path_is_connected() {
    let graph = triangle_graph();
    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("b").unwrap();

    let (path, _, _) = dfs_find_path(&graph, start, target);
    let path = path.unwrap();
    for pair in path.windows(2) {
        let from = graph.vertex(pair[0]).label();
        let to = graph.vertex(pair[1]).label();
        assert!(graph.has_edge(from, to), "no edge between {from} and {to}");
    }
}

#[test]
fn test_dfs_start_equals_target() {
    let graph = triangle_graph();
    let start = graph.vertex_id("b").unwrap();

    let (path, visited, _) = dfs_find_path(&graph, start, start);
    assert_eq!(labels(&graph, &path.unwrap()), vec!["b"]);
    assert_eq!(visited, 1);
}

#[test]
fn test_dfs_no_path() {
    let mut graph = triangle_graph();
    graph.add_vertex("island");
    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("island").unwrap();

    let (path, visited, _) = dfs_find_path(&graph, start, target);
    assert!(path.is_none());
    assert_eq!(visited, 3);
}

#[test]
fn test_dfs_repeat_runs_match() {
    let graph = triangle_graph();
    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("b").unwrap();

    let (first, _, _) = dfs_find_path(&graph, start, target);
    let (second, _, _) = dfs_find_path(&graph, start, target);
    assert_eq!(first, second);
}

#[test]
fn test_dfs_survives_cycles() {
    let mut graph = Graph::new();
    for label in ["a", "b", "c", "d"] {
        graph.add_vertex(label);
    }
    // a ring: every vertex is reachable from every other
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");
    graph.add_edge("c", "d");
    graph.add_edge("d", "a");

    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("c").unwrap();
    let (path, _, _) = dfs_find_path(&graph, start, target);
    let path = labels(&graph, &path.unwrap());
    assert_eq!(path.first().map(String::as_str), Some("a"));
    assert_eq!(path.last().map(String::as_str), Some("c"));
}
