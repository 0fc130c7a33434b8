use clap::Parser;
use mazepath::app::MazePathApp;
use mazepath::args::Args;
use mazepath::colors::ColorScheme;
use mazepath::display::{display_graph, display_search_info, display_search_results};
use mazepath::json_output::{create_json_output, print_json_output};
use mazepath::search::{create_search_request, run_search};
use mazepath::shell;

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    let app = match MazePathApp::new(args.maze_file.clone()) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("❌ Error: {error}");
            std::process::exit(1);
        }
    };

    let maze = match app.load_maze(args.weighting()) {
        Ok(maze) => maze,
        Err(error) => {
            eprintln!("❌ Error: {error}");
            std::process::exit(1);
        }
    };

    if args.show_graph {
        display_graph(&maze);
    }

    if args.start.is_some() != args.end.is_some() {
        eprintln!("❌ Error: provide both start and end labels, or neither for the interactive shell");
        std::process::exit(1);
    }

    if args.start.is_none() {
        if let Err(error) = shell::run_shell(&maze, &colors) {
            eprintln!("❌ Error: {error}");
            std::process::exit(1);
        }
        return;
    }

    let request = match create_search_request(args, &maze) {
        Ok(request) => request,
        Err(message) => {
            eprintln!("❌ Error: {message}");
            std::process::exit(1);
        }
    };

    let show_info = !request.search_args.quiet && !request.search_args.json;
    if show_info {
        display_search_info(&request, &colors);
    }

    let result = match run_search(request, &maze) {
        Ok(result) => result,
        Err(message) => {
            eprintln!("❌ Error: {message}");
            std::process::exit(1);
        }
    };

    if result.display_options.json {
        print_json_output(&create_json_output(&result, &maze));
    } else {
        display_search_results(&result, &maze, &colors);
    }
}
