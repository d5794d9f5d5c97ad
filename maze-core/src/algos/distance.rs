use crate::types::{Cell, Maze};

use std::collections::VecDeque;

/// Shortest walking distance, in steps, from a source cell to every cell of a
/// maze. `None` marks cells the walk never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    width: u32,
    height: u32,
    distances: Vec<Option<u32>>,
}

impl DistanceMap {
    /// Breadth-first flood from `source` through open walls.
    ///
    /// Cells are discovered in order of increasing distance, so the first time
    /// a cell is reached is along a shortest path and its distance is final.
    pub fn from_source(maze: &Maze, source: Cell) -> Self {
        let mut distances = vec![None; maze.cell_count()];
        distances[maze.index_of(source)] = Some(0);

        let mut frontier = VecDeque::with_capacity(maze.cell_count());
        frontier.push_back((source, 0));

        while let Some((cell, distance)) = frontier.pop_front() {
            for neighbour in maze.open_neighbours(cell) {
                let slot = &mut distances[maze.index_of(neighbour)];

                if slot.is_none() {
                    *slot = Some(distance + 1);
                    frontier.push_back((neighbour, distance + 1));
                }
            }
        }

        DistanceMap {
            width: maze.width(),
            height: maze.height(),
            distances,
        }
    }

    /// Cell-wise minimum of two maps over the same grid: the distance to the
    /// nearer of both sources.
    pub fn elementwise_min(a: &DistanceMap, b: &DistanceMap) -> DistanceMap {
        if a.width != b.width || a.height != b.height {
            panic!(
                "Cannot merge a [{}x{}] distance map with a [{}x{}] one!",
                a.width, a.height, b.width, b.height
            );
        }

        let distances = a
            .distances
            .iter()
            .zip(b.distances.iter())
            .map(|(&from_a, &from_b)| match (from_a, from_b) {
                (Some(from_a), Some(from_b)) => Some(from_a.min(from_b)),
                (reached, None) | (None, reached) => reached,
            })
            .collect();

        DistanceMap {
            width: a.width,
            height: a.height,
            distances,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index_of(&self, cell: Cell) -> usize {
        if cell.row >= self.height || cell.col >= self.width {
            panic!(
                "Cell {} is outside of a [{}x{}] distance map!",
                cell, self.width, self.height
            );
        }

        cell.row as usize * self.width as usize + cell.col as usize
    }

    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.distances[self.index_of(cell)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<u32>)> + '_ {
        let width = self.width as usize;

        self.distances.iter().enumerate().map(move |(idx, distance)| {
            (
                Cell::new((idx / width) as u32, (idx % width) as u32),
                *distance,
            )
        })
    }

    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_fully_reached(&self) -> bool {
        self.distances.iter().all(Option::is_some)
    }

    pub fn max_distance(&self) -> Option<u32> {
        self.distances.iter().flatten().copied().max()
    }

    // The first cell, in row-major order, at the largest distance.
    pub fn farthest(&self) -> Option<(Cell, u32)> {
        self.iter()
            .filter_map(|(cell, distance)| distance.map(|distance| (cell, distance)))
            .fold(None, |best, (cell, distance)| match best {
                Some((_, best_distance)) if best_distance >= distance => best,
                _ => Some((cell, distance)),
            })
    }

    /// Walks back from `target` along strictly decreasing distances, returning
    /// a shortest path from the source of this map to `target`, both included.
    ///
    /// Only meaningful for single-source maps built from `maze`. Returns `None`
    /// when `target` was never reached.
    pub fn path_to(&self, maze: &Maze, target: Cell) -> Option<Vec<Cell>> {
        let mut distance = self.get(target)?;
        let mut path = Vec::with_capacity(distance as usize + 1);
        let mut cell = target;

        path.push(cell);

        while distance > 0 {
            cell = maze
                .open_neighbours(cell)
                .find(|neighbour| self.get(*neighbour) == Some(distance - 1))?;
            distance -= 1;

            path.push(cell);
        }

        path.reverse();

        Some(path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::{BinarySpacePartitioning, RngDraws};

    // A 3x3 maze shaped as a snake:
    //
    // +---+---+---+
    // | 0   1   2 |
    // +---+---+   +
    // | 5   4   3 |
    // +   +---+---+
    // | 6   7   8 |
    // +---+---+---+
    fn snake_maze() -> Maze {
        let mut maze = Maze::new(3, 3).unwrap();

        let vertical = maze.vertical_walls_mut();
        for (line, row) in [(1, 0), (2, 0), (1, 1), (2, 1), (1, 2), (2, 2)] {
            vertical.open(line, row);
        }

        let horizontal = maze.horizontal_walls_mut();
        horizontal.open(1, 2);
        horizontal.open(2, 0);

        maze
    }

    fn random_maze(width: u32, height: u32, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height).unwrap();
        let bounds = maze.bounds();
        BinarySpacePartitioning::partition(&mut maze, bounds, &mut RngDraws::seeded(seed))
            .unwrap();
        maze
    }

    #[test]
    fn test_distances_on_snake() {
        let maze = snake_maze();
        let distances = DistanceMap::from_source(&maze, Cell::new(0, 0));

        let expected = [[0, 1, 2], [5, 4, 3], [6, 7, 8]];
        for (row, expected_row) in expected.iter().enumerate() {
            for (col, &expected_distance) in expected_row.iter().enumerate() {
                assert_eq!(
                    distances.get(Cell::new(row as u32, col as u32)),
                    Some(expected_distance)
                );
            }
        }

        assert_eq!(distances.max_distance(), Some(8));
        assert_eq!(distances.farthest(), Some((Cell::new(2, 2), 8)));
    }

    #[test]
    fn test_unreachable_cells_stay_none() {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.vertical_walls_mut().open(1, 0);

        let distances = DistanceMap::from_source(&maze, Cell::new(0, 0));

        assert_eq!(distances.get(Cell::new(0, 1)), Some(1));
        assert_eq!(distances.get(Cell::new(0, 2)), None);
        assert_eq!(distances.reached_count(), 2);
        assert!(!distances.is_fully_reached());
    }

    #[test]
    fn test_elementwise_min() {
        let maze = snake_maze();
        let from_start = DistanceMap::from_source(&maze, Cell::new(0, 0));
        let from_end = DistanceMap::from_source(&maze, Cell::new(2, 2));

        let merged = DistanceMap::elementwise_min(&from_start, &from_end);

        assert_eq!(merged.get(Cell::new(0, 0)), Some(0));
        assert_eq!(merged.get(Cell::new(2, 2)), Some(0));
        assert_eq!(merged.get(Cell::new(1, 1)), Some(4));
        assert_eq!(merged.get(Cell::new(1, 0)), Some(3));
        assert_eq!(merged.max_distance(), Some(4));
    }

    #[test]
    fn test_elementwise_min_keeps_reached_side() {
        let mut maze = Maze::new(2, 1).unwrap();
        let walled = DistanceMap::from_source(&maze, Cell::new(0, 0));

        maze.vertical_walls_mut().open(1, 0);
        let open = DistanceMap::from_source(&maze, Cell::new(0, 1));

        let merged = DistanceMap::elementwise_min(&walled, &open);

        assert_eq!(merged.get(Cell::new(0, 0)), Some(0));
        assert_eq!(merged.get(Cell::new(0, 1)), Some(0));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let maze = random_maze(9, 7, 31);
        let cells = maze.cells().collect::<Vec<_>>();

        for &a in cells.iter().step_by(5) {
            let from_a = DistanceMap::from_source(&maze, a);

            for &b in cells.iter().step_by(3) {
                let from_b = DistanceMap::from_source(&maze, b);

                assert_eq!(from_a.get(b), from_b.get(a));
            }
        }
    }

    #[test]
    fn test_path_to_follows_open_walls() {
        let maze = random_maze(12, 10, 4);
        let source = Cell::new(0, 0);
        let target = Cell::new(9, 11);

        let distances = DistanceMap::from_source(&maze, source);
        let path = distances.path_to(&maze, target).unwrap();

        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&target));
        assert_eq!(path.len() as u32, distances.get(target).unwrap() + 1);

        for step in path.windows(2) {
            assert!(maze.is_open_between(step[0], step[1]));
        }
    }

    #[test]
    fn test_path_to_unreached_cell() {
        let maze = Maze::new(2, 2).unwrap();
        let distances = DistanceMap::from_source(&maze, Cell::new(0, 0));

        assert_eq!(distances.path_to(&maze, Cell::new(1, 1)), None);
        assert_eq!(
            distances.path_to(&maze, Cell::new(0, 0)),
            Some(vec![Cell::new(0, 0)])
        );
    }
}
