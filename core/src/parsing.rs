use std::fs;
use std::path::Path;

/// A parsed maze description: per-cell labels and weights, row-major.
///
/// Weight `0` marks a wall; the maze builder never turns a wall into a
/// vertex.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    pub size: usize,
    pub labels: Vec<Vec<String>>,
    pub distances: Vec<Vec<u32>>,
}

impl MazeGrid {
    pub fn label(&self, row: usize, col: usize) -> &str {
        &self.labels[row][col]
    }

    pub fn distance(&self, row: usize, col: usize) -> u32 {
        self.distances[row][col]
    }

    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.distances[row][col] == 0
    }
}

/// Parses a maze description from text.
///
/// The format is a single size token followed by `size * size` cell tokens
/// in row-major order, all whitespace-separated. A cell token is an
/// alphabetic label followed by a decimal weight, e.g. `a3` or `bw12`.
pub fn parse_maze_str(input: &str) -> Result<MazeGrid, String> {
    let mut tokens = input.split_whitespace();

    let size_token = tokens.next().ok_or("Maze file is empty")?;
    let size: usize = size_token
        .parse()
        .map_err(|_| format!("Invalid maze size '{size_token}'"))?;

    let mut labels = Vec::with_capacity(size);
    let mut distances = Vec::with_capacity(size);

    for row in 0..size {
        let mut label_row = Vec::with_capacity(size);
        let mut distance_row = Vec::with_capacity(size);
        for col in 0..size {
            let token = tokens
                .next()
                .ok_or_else(|| format!("Maze ended early at row {row}, column {col}"))?;
            let (label, distance) = split_cell_token(token)?;
            label_row.push(label);
            distance_row.push(distance);
        }
        labels.push(label_row);
        distances.push(distance_row);
    }

    Ok(MazeGrid {
        size,
        labels,
        distances,
    })
}

/// Reads and parses a maze file.
pub fn parse_maze_file(path: &Path) -> Result<MazeGrid, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Cannot read maze file {path:?}: {e}"))?;
    parse_maze_str(&contents)
}

fn split_cell_token(token: &str) -> Result<(String, u32), String> {
    let digits_at = token
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| format!("Cell token '{token}' has no weight"))?;
    let (label, digits) = token.split_at(digits_at);

    if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("Cell token '{token}' has no alphabetic label"));
    }
    let distance: u32 = digits
        .parse()
        .map_err(|_| format!("Cell token '{token}' has a malformed weight"))?;

    Ok((label.to_string(), distance))
}
