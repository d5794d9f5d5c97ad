use super::{DrawConfig, Drawing, MazeDrawer};
use crate::{
    algos::GeneratedMaze,
    constants::CELL_GLYPHS,
    types::{Cell, Direction, Maze},
};

// One character per cell, picked from the sides that are open.
pub(super) struct GlyphMazeDrawer;

impl MazeDrawer for GlyphMazeDrawer {
    fn draw(&self, generated: &GeneratedMaze, _: &DrawConfig) -> Drawing {
        let maze = generated.maze();
        let mut text = String::with_capacity(maze.cell_count() * 3 + maze.height() as usize);

        for row in 0..maze.height() {
            for col in 0..maze.width() {
                text.push(Self::glyph_for(maze, Cell::new(row, col)));
            }
            text.push('\n');
        }

        Drawing::Text(text)
    }
}

impl GlyphMazeDrawer {
    fn glyph_for(maze: &Maze, cell: Cell) -> char {
        let open_sides = [
            (Direction::North, 1),
            (Direction::South, 2),
            (Direction::West, 4),
            (Direction::East, 8),
        ]
        .into_iter()
        .filter(|(direction, _)| maze.is_open_towards(cell, *direction))
        .fold(0, |value, (_, bit)| value | bit);

        CELL_GLYPHS[open_sides]
    }
}
