use mazepath_core::{MazeGraph, Weighting};
use std::{error::Error, path::PathBuf};

pub struct MazePathApp {
    pub maze_path: PathBuf,
}

impl MazePathApp {
    pub fn new(maze_path: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !maze_path.exists() {
            return Err(format!("Maze file does not exist: {maze_path:?}").into());
        }
        Ok(Self { maze_path })
    }

    pub fn load_maze(&self, weighting: Weighting) -> Result<MazeGraph, Box<dyn Error>> {
        MazeGraph::from_file(&self.maze_path, weighting).map_err(Into::into)
    }
}
