use crate::{
    algos::{DistanceMap, DrawSource},
    types::{Cell, Endpoint, Maze, MazeError},
};

use tracing::event;

mod add_doors;
mod bsp;
mod builder_config;
mod place_endpoints;

pub use add_doors::WallOpener;
pub use bsp::{BinarySpacePartitioning, PartitionReport};
pub use builder_config::{ExitPolicy, MazeBuilderConfig};
pub use place_endpoints::{EndpointPlacer, Perimeter};

/// A finished maze with its entry, exit and distance overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    maze: Maze,
    entry: Endpoint,
    exit: Endpoint,
    distances: DistanceMap,
    partition: PartitionReport,
}

impl GeneratedMaze {
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn entry(&self) -> &Endpoint {
        &self.entry
    }

    pub fn exit(&self) -> &Endpoint {
        &self.exit
    }

    // Distance from every cell to the nearer of entry and exit.
    pub fn distances(&self) -> &DistanceMap {
        &self.distances
    }

    pub fn partition_report(&self) -> PartitionReport {
        self.partition
    }

    // Shortest walk from the entry cell to the exit cell.
    pub fn solution(&self) -> Vec<Cell> {
        DistanceMap::from_source(&self.maze, self.entry.cell)
            .path_to(&self.maze, self.exit.cell)
            .unwrap_or_default()
    }
}

pub struct MazeBuilder {
    pub width: u32,
    pub height: u32,
}

impl MazeBuilder {
    pub fn new(width: u32, height: u32) -> Result<Self, MazeError> {
        Maze::check_dimensions(width, height)?;

        Ok(MazeBuilder { width, height })
    }

    pub fn build(
        &self,
        config: &MazeBuilderConfig,
        draws: &mut impl DrawSource,
    ) -> Result<GeneratedMaze, MazeError> {
        let build_start = std::time::Instant::now();

        let mut maze = Maze::new(self.width, self.height)?;
        let bounds = maze.bounds();

        let partition = BinarySpacePartitioning::partition(&mut maze, bounds, draws)?;

        let partition_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Partitioned [{}x{}] maze with {} splits and {} doors in {:.2}ms",
            self.width,
            self.height,
            partition.splits,
            partition.doors,
            partition_time.duration_since(build_start).as_millis()
        );

        let entry = EndpointPlacer::place_entry(&mut maze, draws);
        let exit = EndpointPlacer::place_exit(&mut maze, &entry, config.exit_policy, draws);

        let distances = DistanceMap::elementwise_min(
            &DistanceMap::from_source(&maze, entry.cell),
            &DistanceMap::from_source(&maze, exit.cell),
        );

        let placement_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Placed entry {} and exit {} ({:?} policy) in {:.2}ms",
            entry.cell,
            exit.cell,
            config.exit_policy,
            placement_time.duration_since(partition_time).as_millis()
        );

        if let Some((cell, distance)) = distances.farthest() {
            event!(
                tracing::Level::DEBUG,
                "Deepest cell {} is [{}] steps from the nearer endpoint",
                cell,
                distance
            );
        }

        Ok(GeneratedMaze {
            maze,
            entry,
            exit,
            distances,
            partition,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::{RecordingDraws, RngDraws, ScriptedDraws};

    #[test]
    fn test_builder_rejects_zero_dimensions() {
        assert!(MazeBuilder::new(0, 3).is_err());
        assert!(MazeBuilder::new(3, 0).is_err());
    }

    #[test]
    fn test_builder_rejects_oversized_dimensions() {
        assert!(matches!(
            MazeBuilder::new(300_000_000, 1),
            Err(MazeError::TooLarge { .. })
        ));
        assert!(MazeBuilder::new(1 << 16, 1).is_ok());
    }

    #[test]
    fn test_generated_mazes_are_connected() {
        let config = MazeBuilderConfig::default();

        for seed in 0..25 {
            let builder = MazeBuilder::new(3 + seed as u32, 2 + (seed as u32 % 7)).unwrap();
            let generated = builder.build(&config, &mut RngDraws::seeded(seed)).unwrap();
            let maze = generated.maze();

            let report = generated.partition_report();
            assert!(report.doors >= report.splits);
            assert_eq!(maze.open_interior_walls(), report.doors as usize);
            assert_eq!(maze.open_boundary_walls(), 2);

            assert!(generated.distances().is_fully_reached());
            assert_eq!(generated.distances().get(generated.entry().cell), Some(0));
            assert_eq!(generated.distances().get(generated.exit().cell), Some(0));
            assert_ne!(generated.entry().cell, generated.exit().cell);
        }
    }

    #[test]
    fn test_single_cell_maze() {
        let builder = MazeBuilder::new(1, 1).unwrap();
        let generated = builder
            .build(&MazeBuilderConfig::default(), &mut RngDraws::seeded(1))
            .unwrap();

        assert_eq!(generated.partition_report(), PartitionReport::default());
        assert_eq!(generated.maze().open_interior_walls(), 0);
        assert_eq!(generated.maze().open_boundary_walls(), 2);
        assert_ne!(
            generated.entry().perimeter_index,
            generated.exit().perimeter_index
        );
        assert_eq!(generated.solution(), vec![Cell::new(0, 0)]);
    }

    #[test]
    fn test_solution_joins_entry_and_exit() {
        let builder = MazeBuilder::new(20, 12).unwrap();
        let generated = builder
            .build(&MazeBuilderConfig::default(), &mut RngDraws::seeded(99))
            .unwrap();

        let solution = generated.solution();

        assert_eq!(solution.first(), Some(&generated.entry().cell));
        assert_eq!(solution.last(), Some(&generated.exit().cell));
        for step in solution.windows(2) {
            assert!(generated.maze().is_open_between(step[0], step[1]));
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let builder = MazeBuilder::new(16, 9).unwrap();
        let config = MazeBuilderConfig::with_exit_policy(ExitPolicy::Offset);

        let first = builder.build(&config, &mut RngDraws::seeded(5)).unwrap();
        let second = builder.build(&config, &mut RngDraws::seeded(5)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_recorded_draws_replay_same_maze() {
        let builder = MazeBuilder::new(14, 11).unwrap();
        let config = MazeBuilderConfig::default();

        let mut recording = RecordingDraws::new(RngDraws::seeded(123));
        let recorded = builder.build(&config, &mut recording).unwrap();

        let mut replay = ScriptedDraws::new(recording.into_record());
        let replayed = builder.build(&config, &mut replay).unwrap();

        assert_eq!(recorded, replayed);
        assert_eq!(replay.remaining(), 0);
    }
}
