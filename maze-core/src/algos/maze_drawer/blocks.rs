use super::{DrawConfig, Drawing, MazeDrawer};
use crate::{
    algos::GeneratedMaze,
    constants::{BLOCK_ENTRY, BLOCK_EXIT, BLOCK_OPEN, BLOCK_PATH, BLOCK_WALL},
    types::Cell,
};

/// Draws the maze on a `(2 * height + 1) × (2 * width + 1)` character grid.
///
/// Cell `(row, col)` sits at `(2 * row + 1, 2 * col + 1)`, the wall segments
/// around it on the neighbouring odd/even positions, and every even/even
/// position is a wall corner.
pub(super) struct BlockMazeDrawer;

impl MazeDrawer for BlockMazeDrawer {
    fn draw(&self, generated: &GeneratedMaze, config: &DrawConfig) -> Drawing {
        let maze = generated.maze();
        let (width, height) = (maze.width() as usize, maze.height() as usize);
        let (grid_cols, grid_rows) = (width * 2 + 1, height * 2 + 1);

        let mut grid = vec![vec![BLOCK_WALL; grid_cols]; grid_rows];

        for cell in maze.cells() {
            let (row, col) = (cell.row as usize * 2 + 1, cell.col as usize * 2 + 1);

            grid[row][col] = if config.show_distances {
                Self::distance_mark(generated.distances().get(cell))
            } else {
                BLOCK_OPEN
            };
        }

        for line in 0..=maze.height() {
            for col in 0..maze.width() {
                if maze.horizontal_walls().is_open(line, col) {
                    grid[line as usize * 2][col as usize * 2 + 1] = BLOCK_OPEN;
                }
            }
        }

        for line in 0..=maze.width() {
            for row in 0..maze.height() {
                if maze.vertical_walls().is_open(line, row) {
                    grid[row as usize * 2 + 1][line as usize * 2] = BLOCK_OPEN;
                }
            }
        }

        if config.show_solution {
            let solution = generated.solution();

            for cell in solution.iter() {
                Self::mark(&mut grid, *cell, BLOCK_PATH);
            }

            // Passages between consecutive cells of the path
            for step in solution.windows(2) {
                let row = step[0].row as usize + step[1].row as usize + 1;
                let col = step[0].col as usize + step[1].col as usize + 1;
                grid[row][col] = BLOCK_PATH;
            }
        }

        Self::mark(&mut grid, generated.entry().cell, BLOCK_ENTRY);
        Self::mark(&mut grid, generated.exit().cell, BLOCK_EXIT);

        let mut text = String::with_capacity(grid_rows * (grid_cols * 3 + 1));
        for grid_row in grid {
            text.extend(grid_row);
            text.push('\n');
        }

        Drawing::Text(text)
    }
}

impl BlockMazeDrawer {
    fn mark(grid: &mut [Vec<char>], cell: Cell, mark: char) {
        grid[cell.row as usize * 2 + 1][cell.col as usize * 2 + 1] = mark;
    }

    // Base 36 keeps each distance to a single character; larger values wrap.
    fn distance_mark(distance: Option<u32>) -> char {
        match distance {
            Some(distance) => char::from_digit(distance % 36, 36).unwrap_or('?'),
            None => BLOCK_OPEN,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::{MazeBuilder, MazeBuilderConfig, RngDraws, ScriptedDraws};

    fn two_by_two() -> GeneratedMaze {
        MazeBuilder::new(2, 2)
            .unwrap()
            .build(
                &MazeBuilderConfig::default(),
                &mut ScriptedDraws::new([0, 2, 0, 0, 1, 0, 0, 1, 1, 0]),
            )
            .unwrap()
    }

    #[test]
    fn test_blocks_for_two_by_two() {
        let drawing = BlockMazeDrawer.draw(&two_by_two(), &DrawConfig::default());

        let expected = [
            "█ ███", //
            "█E  █", //
            "█ █ █", //
            "█ █X ", //
            "█████", //
        ];

        assert_eq!(drawing.to_string(), expected.join("\n") + "\n");
    }

    #[test]
    fn test_blocks_with_solution() {
        let config = DrawConfig {
            show_distances: false,
            show_solution: true,
        };
        let drawing = BlockMazeDrawer.draw(&two_by_two(), &config);

        let expected = [
            "█ ███", //
            "█E··█", //
            "█ █·█", //
            "█ █X ", //
            "█████", //
        ];

        assert_eq!(drawing.to_string(), expected.join("\n") + "\n");
    }

    #[test]
    fn test_blocks_with_distances() {
        let config = DrawConfig {
            show_distances: true,
            show_solution: false,
        };
        let drawing = BlockMazeDrawer.draw(&two_by_two(), &config);

        // Both (0, 1) and (1, 0) are one step from the nearer endpoint
        let expected = [
            "█ ███", //
            "█E 1█", //
            "█ █ █", //
            "█1█X ", //
            "█████", //
        ];

        assert_eq!(drawing.to_string(), expected.join("\n") + "\n");
    }

    #[test]
    fn test_blocks_dimensions() {
        let generated = MazeBuilder::new(13, 6)
            .unwrap()
            .build(&MazeBuilderConfig::default(), &mut RngDraws::seeded(4))
            .unwrap();

        let text = BlockMazeDrawer
            .draw(&generated, &DrawConfig::default())
            .to_string();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 13);
        assert!(lines.iter().all(|line| line.chars().count() == 27));
        assert_eq!(text.matches(BLOCK_ENTRY).count(), 1);
        assert_eq!(text.matches(BLOCK_EXIT).count(), 1);
    }
}
