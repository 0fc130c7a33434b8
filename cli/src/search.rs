use mazepath_core::{Algorithm, MazeGraph};

use crate::args::Args;

pub struct SearchRequest {
    pub algorithm: Algorithm,
    pub start_label: String,
    pub end_label: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub path: Option<Vec<String>>,
    pub vertices_visited: usize,
    pub search_duration: f64,
    pub start_label: String,
    pub end_label: String,
    pub algorithm: Algorithm,
    pub display_options: Args,
}

/// Resolves both endpoint labels before any search runs, so every failure
/// surfaces here rather than mid-search.
pub fn create_search_request(args: Args, maze: &MazeGraph) -> Result<SearchRequest, String> {
    let start_label = args
        .start
        .clone()
        .ok_or_else(|| "Missing start cell label".to_string())?;
    let end_label = args
        .end
        .clone()
        .ok_or_else(|| "Missing end cell label".to_string())?;

    maze.find_vertex(&start_label)?;
    maze.find_vertex(&end_label)?;

    Ok(SearchRequest {
        algorithm: args.algorithm(),
        start_label,
        end_label,
        search_args: args,
    })
}

pub fn run_search(request: SearchRequest, maze: &MazeGraph) -> Result<SearchResult, String> {
    let outcome = maze.solve(request.algorithm, &request.start_label, &request.end_label)?;

    Ok(SearchResult {
        path: outcome.path,
        vertices_visited: outcome.vertices_visited,
        search_duration: outcome.search_duration,
        start_label: request.start_label,
        end_label: request.end_label,
        algorithm: request.algorithm,
        display_options: request.search_args,
    })
}
