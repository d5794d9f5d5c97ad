use super::builder_config::ExitPolicy;
use crate::{
    algos::{DistanceMap, DrawSource},
    types::{Cell, Direction, Endpoint, Maze},
};

use tracing::event;

/// Numbers every outer wall segment of a maze, clockwise from the top-left
/// corner: top edge left to right, right edge top to bottom, bottom edge right
/// to left, then left edge bottom to top. Corner cells appear twice, once per
/// outer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perimeter {
    width: u32,
    height: u32,
}

impl Perimeter {
    pub fn of(maze: &Maze) -> Self {
        Perimeter {
            width: maze.width(),
            height: maze.height(),
        }
    }

    pub fn len(&self) -> u32 {
        2 * self.width + 2 * self.height
    }

    pub fn locate(&self, perimeter_index: u32) -> Endpoint {
        let (width, height) = (self.width, self.height);

        let (cell, side) = if perimeter_index < width {
            (Cell::new(0, perimeter_index), Direction::North)
        } else if perimeter_index < width + height {
            (Cell::new(perimeter_index - width, width - 1), Direction::East)
        } else if perimeter_index < 2 * width + height {
            let offset = perimeter_index - width - height;
            (Cell::new(height - 1, width - 1 - offset), Direction::South)
        } else if perimeter_index < self.len() {
            let offset = perimeter_index - 2 * width - height;
            (Cell::new(height - 1 - offset, 0), Direction::West)
        } else {
            panic!(
                "Perimeter index {} is outside of a [{}x{}] maze!",
                perimeter_index, width, height
            );
        };

        Endpoint {
            cell,
            perimeter_index,
            side,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Endpoint> + use<> {
        let perimeter = *self;
        (0..perimeter.len()).map(move |idx| perimeter.locate(idx))
    }
}

pub struct EndpointPlacer;

impl EndpointPlacer {
    // Knocks down the outer wall that belongs to `endpoint`.
    pub fn open_endpoint(maze: &mut Maze, endpoint: &Endpoint) {
        let Endpoint { cell, side, .. } = *endpoint;
        let (width, height) = (maze.width(), maze.height());

        match side {
            Direction::North => maze.horizontal_walls_mut().open(0, cell.col),
            Direction::South => maze.horizontal_walls_mut().open(height, cell.col),
            Direction::West => maze.vertical_walls_mut().open(0, cell.row),
            Direction::East => maze.vertical_walls_mut().open(width, cell.row),
        }
    }

    pub fn place_at(maze: &mut Maze, perimeter_index: u32) -> Endpoint {
        let endpoint = Perimeter::of(maze).locate(perimeter_index);
        Self::open_endpoint(maze, &endpoint);

        endpoint
    }

    pub fn place_entry(maze: &mut Maze, draws: &mut impl DrawSource) -> Endpoint {
        let perimeter = Perimeter::of(maze);
        let entry_index = draws.draw(0, perimeter.len() - 1);

        Self::place_at(maze, entry_index)
    }

    pub fn place_exit(
        maze: &mut Maze,
        entry: &Endpoint,
        policy: ExitPolicy,
        draws: &mut impl DrawSource,
    ) -> Endpoint {
        let exit = match policy {
            ExitPolicy::Farthest => Self::farthest_from(maze, entry),
            ExitPolicy::Offset => Self::offset_from(maze, entry, draws),
        };

        Self::open_endpoint(maze, &exit);

        exit
    }

    // Boundary position whose cell takes the longest walk from the entry. Ties
    // go to the first position in perimeter order.
    fn farthest_from(maze: &Maze, entry: &Endpoint) -> Endpoint {
        let perimeter = Perimeter::of(maze);
        let distances = DistanceMap::from_source(maze, entry.cell);

        let farthest = perimeter
            .iter()
            .filter(|candidate| candidate.perimeter_index != entry.perimeter_index)
            .map(|candidate| (candidate, distances.get(candidate.cell)))
            .reduce(|best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            });

        match farthest {
            Some((exit, distance)) => {
                event!(
                    tracing::Level::DEBUG,
                    "Exit {} placed [{:?}] steps away from entry {}",
                    exit.cell,
                    distance,
                    entry.cell
                );

                exit
            }
            // A perimeter always holds at least four positions
            None => perimeter.locate((entry.perimeter_index + 1) % perimeter.len()),
        }
    }

    // Legacy placement: a random offset along the perimeter, at least the short
    // side of the maze away from the entry in both directions.
    fn offset_from(maze: &Maze, entry: &Endpoint, draws: &mut impl DrawSource) -> Endpoint {
        let perimeter = Perimeter::of(maze);
        let min_offset = maze.width().min(maze.height());

        let offset = draws.draw(min_offset, perimeter.len() - min_offset);

        perimeter.locate((entry.perimeter_index + offset) % perimeter.len())
    }
}
