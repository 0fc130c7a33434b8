use serde::{Deserialize, Serialize};

/// Search algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    #[default]
    Bfs,
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    /// Full name for user-facing output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "depth-first search",
            Algorithm::Bfs => "breadth-first search",
            Algorithm::Dijkstra => "Dijkstra shortest path",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "dfs" => Algorithm::Dfs,
            "dijkstra" => Algorithm::Dijkstra,
            _ => Algorithm::Bfs,
        }
    }
}

impl From<String> for Algorithm {
    fn from(value: String) -> Self {
        Algorithm::from(value.as_str())
    }
}
