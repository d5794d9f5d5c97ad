use crate::constants::{DIRECTIONS, MAX_MAZE_SIDE};

use std::fmt::{Display, Formatter};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be greater than zero, got [{width}x{height}]")]
    ZeroDimension { width: u32, height: u32 },
    #[error("maze dimensions must not exceed {max} cells per side, got [{width}x{height}]")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error("cannot split {rect} {axis} at {at}")]
    InvalidSplit { rect: Rect, axis: SplitAxis, at: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Cell { row, col }
    }

    // Manhattan distance, ignoring walls.
    pub fn distance(&self, other: &Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    // Direction in which `other` lies when both cells share a side.
    pub fn is_neighbour_of(&self, other: &Cell) -> Option<Direction> {
        if self.distance(other) != 1 {
            return None;
        }

        DIRECTIONS
            .into_iter()
            .find(|direction| self.step(*direction) == Some(*other))
    }

    // The adjacent cell in `direction`, or `None` when it would underflow.
    // Callers check the upper bound against the maze dimensions.
    pub fn step(&self, direction: Direction) -> Option<Cell> {
        match direction {
            Direction::North => self.row.checked_sub(1).map(|row| Cell::new(row, self.col)),
            Direction::South => Some(Cell::new(self.row + 1, self.col)),
            Direction::West => self.col.checked_sub(1).map(|col| Cell::new(self.row, col)),
            Direction::East => Some(Cell::new(self.row, self.col + 1)),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

impl Display for SplitAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitAxis::Horizontal => write!(f, "horizontally"),
            SplitAxis::Vertical => write!(f, "vertically"),
        }
    }
}

/// A half-open block of cells, `[left, left + width) × [top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Cell,
    pub width: u32,
    pub height: u32,
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}):[{}x{}]",
            self.origin.col, self.origin.row, self.width, self.height
        )
    }
}

impl Rect {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Rect {
            origin: Cell::new(top, left),
            width,
            height,
        }
    }

    pub fn left(&self) -> u32 {
        self.origin.col
    }

    pub fn top(&self) -> u32 {
        self.origin.row
    }

    pub fn right(&self) -> u32 {
        self.origin.col + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.origin.row + self.height
    }

    pub fn is_single_cell(&self) -> bool {
        self.width == 1 && self.height == 1
    }

    // Splits the rect `at` cells from its origin along `axis`. A vertical split
    // yields (left, right), a horizontal one (up, down).
    pub fn try_split_at(self, axis: SplitAxis, at: u32) -> Result<(Rect, Rect), MazeError> {
        let extent = match axis {
            SplitAxis::Horizontal => self.height,
            SplitAxis::Vertical => self.width,
        };

        if extent < 2 || at == 0 || at >= extent {
            return Err(MazeError::InvalidSplit {
                rect: self,
                axis,
                at,
            });
        }

        Ok(match axis {
            SplitAxis::Horizontal => (
                Rect::new(self.left(), self.top(), self.width, at),
                Rect::new(self.left(), self.top() + at, self.width, self.height - at),
            ),
            SplitAxis::Vertical => (
                Rect::new(self.left(), self.top(), at, self.height),
                Rect::new(self.left() + at, self.top(), self.width - at, self.height),
            ),
        })
    }
}

/// One family of parallel wall segments, stored flat.
///
/// Addressed as `(line, position)`: `line` is the grid line crossing the plane
/// (row line for horizontal walls, column line for vertical walls) and
/// `position` is the cell index along that line. `true` means the wall stands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallPlane {
    lines: u32,
    length: u32,
    walls: Vec<bool>,
}

impl WallPlane {
    fn new(lines: u32, length: u32) -> Self {
        WallPlane {
            lines,
            length,
            walls: vec![true; lines as usize * length as usize],
        }
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    // Number of wall segments along a single line.
    pub fn length(&self) -> u32 {
        self.length
    }

    fn index(&self, line: u32, position: u32) -> usize {
        if line >= self.lines || position >= self.length {
            panic!(
                "Wall ({}, {}) is outside of a [{}x{}] plane!",
                line, position, self.lines, self.length
            );
        }

        line as usize * self.length as usize + position as usize
    }

    pub fn is_wall(&self, line: u32, position: u32) -> bool {
        self.walls[self.index(line, position)]
    }

    pub fn is_open(&self, line: u32, position: u32) -> bool {
        !self.is_wall(line, position)
    }

    // Walls are only ever knocked down, there is no way to put one back.
    pub fn open(&mut self, line: u32, position: u32) {
        let idx = self.index(line, position);
        self.walls[idx] = false;
    }

    pub fn open_count(&self) -> usize {
        self.walls.iter().filter(|wall| !**wall).count()
    }

    // Open segments on the given lines only.
    pub fn open_count_on(&self, lines: impl IntoIterator<Item = u32>) -> usize {
        lines
            .into_iter()
            .map(|line| {
                (0..self.length)
                    .filter(|&position| self.is_open(line, position))
                    .count()
            })
            .sum()
    }
}

/// The maze grid: its dimensions and both wall planes.
///
/// `horizontal_walls` is `(height + 1) × width`, line `r` separating cell row
/// `r - 1` from row `r`. `vertical_walls` is `(width + 1) × height`, line `c`
/// separating cell column `c - 1` from column `c`. The first and last line of
/// each plane form the outer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maze {
    width: u32,
    height: u32,
    horizontal_walls: WallPlane,
    vertical_walls: WallPlane,
}

impl Maze {
    pub fn new(width: u32, height: u32) -> Result<Self, MazeError> {
        Self::check_dimensions(width, height)?;

        Ok(Maze {
            width,
            height,
            horizontal_walls: WallPlane::new(height + 1, width),
            vertical_walls: WallPlane::new(width + 1, height),
        })
    }

    // Both sides in `[1, MAX_MAZE_SIDE]`, which keeps every derived size
    // (wall planes, perimeter, canvas) inside `u32`.
    pub fn check_dimensions(width: u32, height: u32) -> Result<(), MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::ZeroDimension { width, height });
        }

        if width > MAX_MAZE_SIDE || height > MAX_MAZE_SIDE {
            return Err(MazeError::TooLarge {
                width,
                height,
                max: MAX_MAZE_SIDE,
            });
        }

        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn horizontal_walls(&self) -> &WallPlane {
        &self.horizontal_walls
    }

    pub fn vertical_walls(&self) -> &WallPlane {
        &self.vertical_walls
    }

    pub(crate) fn horizontal_walls_mut(&mut self) -> &mut WallPlane {
        &mut self.horizontal_walls
    }

    pub(crate) fn vertical_walls_mut(&mut self) -> &mut WallPlane {
        &mut self.vertical_walls
    }

    pub(crate) fn plane_mut(&mut self, axis: SplitAxis) -> &mut WallPlane {
        match axis {
            SplitAxis::Horizontal => &mut self.horizontal_walls,
            SplitAxis::Vertical => &mut self.vertical_walls,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    // Row-major index of a cell, shared by every per-cell buffer.
    pub fn index_of(&self, cell: Cell) -> usize {
        if !self.contains(cell) {
            panic!(
                "Cell {} is outside of a [{}x{}] maze!",
                cell, self.width, self.height
            );
        }

        cell.row as usize * self.width as usize + cell.col as usize
    }

    pub fn cell_at(&self, idx: usize) -> Cell {
        let width = self.width as usize;
        Cell::new((idx / width) as u32, (idx % width) as u32)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }

    // Whether the wall on the `direction` side of `cell` is open. Boundary
    // sides are included, so an entry or exit reads as open here.
    pub fn is_open_towards(&self, cell: Cell, direction: Direction) -> bool {
        match direction {
            Direction::North => self.horizontal_walls.is_open(cell.row, cell.col),
            Direction::South => self.horizontal_walls.is_open(cell.row + 1, cell.col),
            Direction::West => self.vertical_walls.is_open(cell.col, cell.row),
            Direction::East => self.vertical_walls.is_open(cell.col + 1, cell.row),
        }
    }

    pub fn is_open_between(&self, from: Cell, to: Cell) -> bool {
        match from.is_neighbour_of(&to) {
            Some(direction) if self.contains(from) && self.contains(to) => {
                self.is_open_towards(from, direction)
            }
            _ => false,
        }
    }

    // In-grid cells reachable from `cell` in a single step.
    pub fn open_neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS.into_iter().filter_map(move |direction| {
            let neighbour = cell.step(direction)?;

            if self.contains(neighbour) && self.is_open_towards(cell, direction) {
                Some(neighbour)
            } else {
                None
            }
        })
    }

    // Open interior wall segments, boundary lines excluded.
    pub fn open_interior_walls(&self) -> usize {
        self.horizontal_walls.open_count_on(1..self.height)
            + self.vertical_walls.open_count_on(1..self.width)
    }

    // Open wall segments on the outer boundary.
    pub fn open_boundary_walls(&self) -> usize {
        self.horizontal_walls.open_count_on([0, self.height])
            + self.vertical_walls.open_count_on([0, self.width])
    }
}

/// A maze entrance or exit: a boundary cell plus the outer wall opened for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub cell: Cell,
    pub perimeter_index: u32,
    pub side: Direction,
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RenderStyle {
    /// One box-drawing glyph per cell
    Glyphs,
    /// Block characters, two characters per cell side
    #[default]
    Blocks,
    /// Scalable vector graphics
    Svg,
}
