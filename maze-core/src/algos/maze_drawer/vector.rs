use super::{DrawConfig, Drawing, MazeDrawer};
use crate::{
    algos::GeneratedMaze,
    constants::{CELL_SIZE, MAZE_MARGIN, STROKE_WIDTH},
    types::{Cell, Maze},
};

use svg::{
    Document,
    node::element::{Circle, Path, Rectangle, path::Data},
};

const BACKGROUND: &str = "#f8f8f8";
const WALL_COLOR: &str = "#202020";
const SOLUTION_COLOR: &str = "#f80000";
const ENTRY_COLOR: &str = "#00e000";
const EXIT_COLOR: &str = "#004bff";

pub(super) struct SvgMazeDrawer;

impl MazeDrawer for SvgMazeDrawer {
    fn draw(&self, generated: &GeneratedMaze, config: &DrawConfig) -> Drawing {
        let maze = generated.maze();

        let canvas_width = maze.width() * CELL_SIZE + MAZE_MARGIN * 2;
        let canvas_height = maze.height() * CELL_SIZE + MAZE_MARGIN * 2;

        let mut document = Document::new()
            .set("width", canvas_width)
            .set("height", canvas_height)
            .set("viewBox", (0, 0, canvas_width, canvas_height))
            .add(
                Rectangle::new()
                    .set("width", canvas_width)
                    .set("height", canvas_height)
                    .set("fill", BACKGROUND),
            );

        if config.show_distances {
            for shade in Self::draw_distances(generated) {
                document = document.add(shade);
            }
        }

        document = document.add(Self::draw_walls(maze));

        if config.show_solution {
            if let Some(solution) = Self::draw_solution(&generated.solution()) {
                document = document.add(solution);
            }
        }

        document = document
            .add(Self::draw_marker(generated.entry().cell, ENTRY_COLOR))
            .add(Self::draw_marker(generated.exit().cell, EXIT_COLOR));

        Drawing::Svg(document)
    }
}

impl SvgMazeDrawer {
    fn corner(line: u32, position: u32) -> (u32, u32) {
        (
            MAZE_MARGIN + position * CELL_SIZE,
            MAZE_MARGIN + line * CELL_SIZE,
        )
    }

    fn center_of(cell: Cell) -> (f32, f32) {
        let half = CELL_SIZE as f32 / 2.0;

        (
            (MAZE_MARGIN + cell.col * CELL_SIZE) as f32 + half,
            (MAZE_MARGIN + cell.row * CELL_SIZE) as f32 + half,
        )
    }

    // Every standing wall segment as a move + line pair of a single path.
    fn draw_walls(maze: &Maze) -> Path {
        let mut data = Data::new();

        for line in 0..=maze.height() {
            for col in 0..maze.width() {
                if maze.horizontal_walls().is_wall(line, col) {
                    let (x, y) = Self::corner(line, col);

                    data = data.move_to((x, y)).line_to((x + CELL_SIZE, y));
                }
            }
        }

        for line in 0..=maze.width() {
            for row in 0..maze.height() {
                if maze.vertical_walls().is_wall(line, row) {
                    let (y, x) = Self::corner(row, line);

                    data = data.move_to((x, y)).line_to((x, y + CELL_SIZE));
                }
            }
        }

        Path::new()
            .set("fill", "none")
            .set("stroke", WALL_COLOR)
            .set("stroke-width", STROKE_WIDTH)
            .set("stroke-linecap", "square")
            .set("d", data)
    }

    // Cells shaded from light (near an endpoint) to dark (far from both).
    fn draw_distances(generated: &GeneratedMaze) -> Vec<Rectangle> {
        let distances = generated.distances();
        let max_distance = distances.max_distance().unwrap_or(0).max(1) as f32;

        distances
            .iter()
            .filter_map(|(cell, distance)| {
                let distance = distance?;
                let lightness = 90.0 - 60.0 * (distance as f32 / max_distance);
                let (x, y) = Self::corner(cell.row, cell.col);

                Some(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", CELL_SIZE)
                        .set("height", CELL_SIZE)
                        .set("fill", format!("hsl(210, 70%, {:.0}%)", lightness)),
                )
            })
            .collect()
    }

    fn draw_solution(solution: &[Cell]) -> Option<Path> {
        let (first, rest) = solution.split_first()?;

        let data = rest.iter().fold(
            Data::new().move_to(Self::center_of(*first)),
            |data, cell| data.line_to(Self::center_of(*cell)),
        );

        Some(
            Path::new()
                .set("fill", "none")
                .set("stroke", SOLUTION_COLOR)
                .set("stroke-width", STROKE_WIDTH)
                .set("stroke-linejoin", "round")
                .set("d", data),
        )
    }

    fn draw_marker(cell: Cell, color: &str) -> Circle {
        let (cx, cy) = Self::center_of(cell);

        Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", CELL_SIZE as f32 / 4.0)
            .set("fill", color)
    }
}
