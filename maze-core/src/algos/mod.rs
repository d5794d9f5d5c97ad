mod analysis;
mod distance;
mod draws;
mod maze_builder;
mod maze_drawer;

pub use analysis::MazeStats;
pub use distance::DistanceMap;
pub use draws::{DrawSource, RecordingDraws, RngDraws, ScriptedDraws};
pub use maze_builder::{
    BinarySpacePartitioning, EndpointPlacer, ExitPolicy, GeneratedMaze, MazeBuilder,
    MazeBuilderConfig, PartitionReport, Perimeter, WallOpener,
};
pub use maze_drawer::{DrawConfig, Drawing, MazeDrawer, MazeDrawerFactory};
