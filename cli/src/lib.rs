pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod search;
pub mod shell;
pub mod utils;

// Re-export commonly used items
pub use app::MazePathApp;
pub use args::Args;
pub use search::{SearchRequest, SearchResult, create_search_request, run_search};
pub use utils::format_number;
