use mazepath_core::{Algorithm, MazeGraph};
use std::io::{self, BufRead, Write};

use crate::colors::ColorScheme;

/// Interactive query loop: an algorithm keyword (or `quit`), then a start
/// and end label, repeated until quit or end of input. A found path prints
/// one label per line; no path prints nothing.
pub fn run_shell(maze: &MazeGraph, colors: &ColorScheme) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("======================================");
        print!("type quit to quit, or dfs, bfs, or dijkstra for a respective solution: ");
        io::stdout().flush()?;

        let Some(command) = read_trimmed_line(&mut input)? else {
            break;
        };

        match command.to_lowercase().as_str() {
            "quit" => break,
            keyword @ ("dfs" | "bfs" | "dijkstra") => {
                let algorithm = Algorithm::from(keyword);
                print!("enter 'startVertex endVertex': ");
                io::stdout().flush()?;

                let Some(line) = read_trimmed_line(&mut input)? else {
                    break;
                };
                run_query(maze, algorithm, &line, colors);
            }
            _ => println!("invalid input"),
        }
    }

    Ok(())
}

fn run_query(maze: &MazeGraph, algorithm: Algorithm, line: &str, colors: &ColorScheme) {
    let mut tokens = line.split_whitespace();
    let (Some(start), Some(end)) = (tokens.next(), tokens.next()) else {
        println!("invalid input");
        return;
    };

    match maze.solve(algorithm, start, end) {
        Ok(outcome) => {
            if let Some(path) = outcome.path {
                for label in path {
                    println!("{}", colors.cell_label(&label));
                }
            }
        }
        Err(message) => println!("{}", colors.error(&message)),
    }
}

/// Reads one line, `None` at end of input.
fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
