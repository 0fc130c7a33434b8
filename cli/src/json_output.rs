use mazepath_core::{Algorithm, MazeGraph};
use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub algorithm: Algorithm,
    pub unweighted: bool,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonCell>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonCell {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub vertices_explored: usize,
}

pub fn create_json_output(result: &SearchResult, maze: &MazeGraph) -> JsonOutput {
    let json_path = result.path.as_ref().map(|path| {
        path.iter()
            .map(|label| JsonCell {
                label: label.clone(),
                weight: maze
                    .graph()
                    .get(label)
                    .map(|vertex| vertex.weight())
                    .filter(|weight| weight.is_finite()),
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: result.start_label.clone(),
            to: result.end_label.clone(),
            options: JsonOptions {
                algorithm: result.algorithm,
                unweighted: result.display_options.unweighted,
            },
        },
        result: JsonResult {
            found: result.path.is_some(),
            path: json_path,
        },
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            vertices_explored: result.vertices_visited,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{json_string}"),
        Err(e) => eprintln!("Error serializing to JSON: {e}"),
    }
}
