use clap::Parser;
use mazepath_core::{Algorithm, Weighting};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "mazepath")]
#[command(about = "Find paths through grid mazes with DFS, BFS, or Dijkstra")]
pub struct Args {
    /// Maze file to load
    pub maze_file: PathBuf,

    /// Start cell label (runs a single search; omit for the interactive shell)
    pub start: Option<String>,

    /// End cell label
    pub end: Option<String>,

    /// Search algorithm to use
    #[arg(short, long, default_value = "bfs", value_parser = ["dfs", "bfs", "dijkstra"])]
    pub algorithm: String,

    /// Ignore cell weights and treat every open cell as cost 1
    #[arg(short, long)]
    pub unweighted: bool,

    /// Print the graph adjacency listing after loading the maze
    #[arg(short = 'g', long)]
    pub show_graph: bool,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from(self.algorithm.as_str())
    }

    pub fn weighting(&self) -> Weighting {
        if self.unweighted {
            Weighting::Unweighted
        } else {
            Weighting::Weighted
        }
    }
}
