use mazepath_core::MazeGraph;

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🧭 Finding path from {} to {}",
        colors.cell_label(&format!("\"{}\"", request.start_label)),
        colors.cell_label(&format!("\"{}\"", request.end_label))
    );
    println!("⚙️  Using {}", request.algorithm.display_name());
    if request.search_args.unweighted {
        println!("⚖️  Treating every open cell as cost 1");
    }
    println!("🔍 Searching...");
}

pub fn display_graph(maze: &MazeGraph) {
    print!("{}", maze.graph());
}

pub fn display_search_results(result: &SearchResult, maze: &MazeGraph, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.path {
        Some(path) => {
            display_successful_path(path, &result.display_options, maze, colors);
            if is_verbose {
                display_search_statistics(result.vertices_visited, result.search_duration, colors);
            }
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.cell_label(&format!("\"{}\"", result.start_label)),
                colors.cell_label(&format!("\"{}\"", result.end_label))
            );
            if is_verbose {
                display_search_statistics(result.vertices_visited, result.search_duration, colors);
            }
        }
    }
}

fn display_successful_path(
    path: &[String],
    display_options: &Args,
    maze: &MazeGraph,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        let step_count = path.len() - 1;
        println!(
            "{} Found path with {} steps:\n",
            colors.success("✅"),
            colors.number(&step_count.to_string())
        );
    }

    // Show path flow first
    let path_flow = path
        .iter()
        .map(|label| colors.cell_label(&format!("\"{label}\"")).to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("{path_flow}");

    // Show detailed list only if not in quiet mode
    if !display_options.quiet {
        println!();
        for (step_index, label) in path.iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            let mut line = format!(
                "{:3} {}",
                colors.step_number(&step_number),
                colors.cell_label(&format!("\"{label}\""))
            );
            if !display_options.unweighted {
                if let Some(vertex) = maze.graph().get(label) {
                    line.push_str(&format!(
                        " [weight: {}]",
                        colors.weight(&vertex.weight().to_string())
                    ));
                }
            }
            println!("{line}");
        }
    }
}

fn display_search_statistics(vertices_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} vertices in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(vertices_visited)),
        colors.number(&format!("{search_duration:.3}"))
    );
}
