use crate::{
    algos::{DistanceMap, GeneratedMaze},
    types::Maze,
};

use std::fmt::{Display, Formatter};

use rayon::prelude::*;

/// Shape statistics for a finished maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeStats {
    pub cells: usize,
    // Cells with exactly one open neighbour
    pub dead_ends: usize,
    // Cells with three or more open neighbours
    pub junctions: usize,
    pub open_walls: usize,
    // Longest shortest path between any two cells
    pub diameter: u32,
    pub solution_length: usize,
}

impl MazeStats {
    pub fn collect(generated: &GeneratedMaze) -> Self {
        let maze = generated.maze();

        let (dead_ends, junctions) = maze.cells().fold((0, 0), |(dead_ends, junctions), cell| {
            match maze.open_neighbours(cell).count() {
                1 => (dead_ends + 1, junctions),
                3.. => (dead_ends, junctions + 1),
                _ => (dead_ends, junctions),
            }
        });

        MazeStats {
            cells: maze.cell_count(),
            dead_ends,
            junctions,
            open_walls: maze.open_interior_walls(),
            diameter: Self::diameter(maze),
            solution_length: generated.solution().len(),
        }
    }

    // One flood per cell, spread over the rayon pool.
    pub fn diameter(maze: &Maze) -> u32 {
        (0..maze.cell_count())
            .into_par_iter()
            .map(|idx| {
                DistanceMap::from_source(maze, maze.cell_at(idx))
                    .max_distance()
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
    }
}

impl Display for MazeStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cells, {} dead ends, {} junctions, {} open walls, diameter {}, solution {} cells",
            self.cells,
            self.dead_ends,
            self.junctions,
            self.open_walls,
            self.diameter,
            self.solution_length
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::{MazeBuilder, MazeBuilderConfig, RngDraws};
    use crate::types::Cell;

    #[test]
    fn test_corridor_stats() {
        let mut maze = Maze::new(5, 1).unwrap();
        for line in 1..5 {
            maze.vertical_walls_mut().open(line, 0);
        }

        assert_eq!(MazeStats::diameter(&maze), 4);
        assert_eq!(
            DistanceMap::from_source(&maze, Cell::new(0, 2)).max_distance(),
            Some(2)
        );
    }

    #[test]
    fn test_stats_of_generated_maze() {
        let builder = MazeBuilder::new(15, 10).unwrap();
        let generated = builder
            .build(&MazeBuilderConfig::default(), &mut RngDraws::seeded(12))
            .unwrap();

        let stats = MazeStats::collect(&generated);

        assert_eq!(stats.cells, 150);
        assert_eq!(stats.open_walls, generated.partition_report().doors as usize);
        assert!(stats.dead_ends + stats.junctions <= stats.cells);
        assert!(stats.solution_length >= 2);
        assert!(stats.diameter as usize + 1 >= stats.solution_length);
        assert!(stats.to_string().starts_with("150 cells"));
    }
}
