use mazepath_core::{Graph, bfs_find_path, dijkstra_find_path};

fn labels(graph: &Graph, path: &[usize]) -> Vec<String> {
    path.iter()
        .map(|&id| graph.vertex(id).label().to_string())
        .collect()
}

fn weighted_vertex(graph: &mut Graph, label: &str, weight: f64) {
    graph.add_vertex(label);
    graph.get_mut(label).unwrap().set_weight(weight);
}

// Two routes from a to d: two hops through an expensive cell, or three
// cheap hops.
//   a(1) - b(10) - d(1)
//   a(1) - c(1) - e(1) - d(1)
fn two_route_graph() -> Graph {
    let mut graph = Graph::new();
    weighted_vertex(&mut graph, "a", 1.0);
    weighted_vertex(&mut graph, "b", 10.0);
    weighted_vertex(&mut graph, "c", 1.0);
    weighted_vertex(&mut graph, "d", 1.0);
    weighted_vertex(&mut graph, "e", 1.0);
    graph.add_edge("a", "b");
    graph.add_edge("b", "d");
    graph.add_edge("a", "c");
    graph.add_edge("c", "e");
    graph.add_edge("e", "d");
    graph
}

#[test]
fn test_dijkstra_picks_cheapest_route_not_fewest_hops() {
    let graph = two_route_graph();
    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("d").unwrap();

    // step cost is the sum of both endpoint weights: the b route costs
    // (1+10) + (10+1) = 22, the long route (1+1)*3 = 6
    let (path, _, _) = dijkstra_find_path(&graph, start, target);
    assert_eq!(labels(&graph, &path.unwrap()), vec!["a", "c", "e", "d"]);

    // BFS on the same graph takes the two-hop route instead
    let (hops, _, _) = bfs_find_path(&graph, start, target);
    assert_eq!(labels(&graph, &hops.unwrap()), vec!["a", "b", "d"]);
}

#[test]
fn test_dijkstra_equal_weights_matches_hop_count() {
    let mut graph = Graph::new();
    for label in ["a", "b", "c", "d"] {
        weighted_vertex(&mut graph, label, 1.0);
    }
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");
    graph.add_edge("c", "d");

    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("d").unwrap();
    let (path, _, _) = dijkstra_find_path(&graph, start, target);
    assert_eq!(labels(&graph, &path.unwrap()), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_dijkstra_start_equals_target() {
    let graph = two_route_graph();
    let start = graph.vertex_id("b").unwrap();

    let (path, _, _) = dijkstra_find_path(&graph, start, start);
    assert_eq!(labels(&graph, &path.unwrap()), vec!["b"]);
}

#[test]
fn test_dijkstra_no_path() {
    let mut graph = two_route_graph();
    weighted_vertex(&mut graph, "island", 1.0);
    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("island").unwrap();

    let (path, visited, _) = dijkstra_find_path(&graph, start, target);
    assert!(path.is_none());
    assert_eq!(visited, 5);
}

#[test]
fn test_dijkstra_repeat_runs_match() {
    let graph = two_route_graph();
    let start = graph.vertex_id("a").unwrap();
    let target = graph.vertex_id("d").unwrap();

    let (first, first_visited, _) = dijkstra_find_path(&graph, start, target);
    let (second, second_visited, _) = dijkstra_find_path(&graph, start, target);
    assert_eq!(first, second);
    assert_eq!(first_visited, second_visited);
}
