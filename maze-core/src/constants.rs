use crate::types::Direction;

pub(crate) const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

// Largest accepted width or height, in cells.
pub(crate) const MAX_MAZE_SIDE: u32 = 1 << 16;

// Side of a single cell in the SVG drawing, in pixels.
pub(crate) const CELL_SIZE: u32 = 16;
pub(crate) const MAZE_MARGIN: u32 = 16;
pub(crate) const STROKE_WIDTH: u32 = 2;

// One glyph per combination of open sides: top = 1, bottom = 2, left = 4, right = 8.
pub(crate) const CELL_GLYPHS: [char; 16] = [
    'X', 'V', 'A', '║', '>', '╝', '╗', '╣', '<', '╚', '╔', '╠', '═', '╩', '╦', '╬',
];

pub(crate) const BLOCK_WALL: char = '█';
pub(crate) const BLOCK_OPEN: char = ' ';
pub(crate) const BLOCK_PATH: char = '·';
pub(crate) const BLOCK_ENTRY: char = 'E';
pub(crate) const BLOCK_EXIT: char = 'X';
