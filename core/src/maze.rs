use crate::algorithm::Algorithm;
use crate::graph::{Graph, VertexId};
use crate::parsing::{MazeGrid, parse_maze_file};
use crate::pathfinding::{bfs_find_path, dfs_find_path, dijkstra_find_path};
use std::path::Path;

/// Whether cell weights carry into the graph or every open cell costs 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    Weighted,
    Unweighted,
}

/// Outcome of one solve call: the label path (`None` when the end cell is
/// unreachable), vertices visited, and search duration in seconds.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub path: Option<Vec<String>>,
    pub vertices_visited: usize,
    pub search_duration: f64,
}

/// A maze grid turned into an undirected graph, plus search dispatch.
#[derive(Debug, Clone)]
pub struct MazeGraph {
    graph: Graph,
    grid: MazeGrid,
}

impl MazeGraph {
    /// Builds the graph from a parsed grid.
    ///
    /// Every cell with a nonzero weight becomes a vertex; under
    /// [`Weighting::Unweighted`] all open cells get weight 1. Edges are then
    /// added from every interior cell to its four axis-aligned neighbors;
    /// `add_edge` drops any edge whose endpoint is a wall, since walls were
    /// never added as vertices.
    ///
    /// Boundary cells never originate edges, only receive them from interior
    /// cells: a maze whose open cells all sit on the boundary builds as
    /// isolated vertices. Known limitation of the edge pass.
    pub fn new(grid: MazeGrid, weighting: Weighting) -> Self {
        let mut graph = Graph::new();

        for row in 0..grid.size {
            for col in 0..grid.size {
                let distance = grid.distances[row][col];
                if distance == 0 {
                    continue;
                }
                let label = &grid.labels[row][col];
                graph.add_vertex(label);
                let weight = match weighting {
                    Weighting::Weighted => f64::from(distance),
                    Weighting::Unweighted => 1.0,
                };
                if let Some(vertex) = graph.get_mut(label) {
                    vertex.set_weight(weight);
                }
            }
        }

        for row in 1..grid.size.saturating_sub(1) {
            for col in 1..grid.size.saturating_sub(1) {
                let label = &grid.labels[row][col];
                graph.add_edge(label, &grid.labels[row - 1][col]);
                graph.add_edge(label, &grid.labels[row + 1][col]);
                graph.add_edge(label, &grid.labels[row][col - 1]);
                graph.add_edge(label, &grid.labels[row][col + 1]);
            }
        }

        Self { graph, grid }
    }

    /// Reads, parses, and builds a maze in one step.
    pub fn from_file(path: &Path, weighting: Weighting) -> Result<Self, String> {
        let grid = parse_maze_file(path)?;
        Ok(Self::new(grid, weighting))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Resolves a cell label to its vertex.
    ///
    /// Missing labels error here, at the boundary; the searches themselves
    /// assume both endpoints are valid.
    pub fn find_vertex(&self, label: &str) -> Result<VertexId, String> {
        self.graph
            .vertex_id(label)
            .ok_or_else(|| format!("Vertex '{label}' not found in maze"))
    }

    /// Runs the selected algorithm between two cell labels and maps the
    /// found vertex path back to labels.
    pub fn solve(
        &self,
        algorithm: Algorithm,
        start_label: &str,
        end_label: &str,
    ) -> Result<SearchOutcome, String> {
        let start = self.find_vertex(start_label)?;
        let end = self.find_vertex(end_label)?;

        let (path, vertices_visited, search_duration) = match algorithm {
            Algorithm::Dfs => dfs_find_path(&self.graph, start, end),
            Algorithm::Bfs => bfs_find_path(&self.graph, start, end),
            Algorithm::Dijkstra => dijkstra_find_path(&self.graph, start, end),
        };

        let path = path.map(|ids| {
            ids.into_iter()
                .map(|id| self.graph.vertex(id).label().to_string())
                .collect()
        });

        Ok(SearchOutcome {
            path,
            vertices_visited,
            search_duration,
        })
    }
}
