mod algos;
mod constants;
mod types;

use tracing::{Level, span};

pub use algos::{
    BinarySpacePartitioning, DistanceMap, DrawConfig, DrawSource, Drawing, EndpointPlacer,
    ExitPolicy, GeneratedMaze, MazeBuilder, MazeBuilderConfig, MazeDrawer, MazeDrawerFactory,
    MazeStats, PartitionReport, Perimeter, RecordingDraws, RngDraws, ScriptedDraws, WallOpener,
};
pub use types::{
    Cell, Direction, Endpoint, Maze, MazeError, Rect, RenderStyle, SplitAxis, WallPlane,
};

/// Generates a `width × height` maze, opens its entry and exit and computes
/// the distance overlay. Every random choice is taken from `draws`.
pub fn create_maze(
    width: u32,
    height: u32,
    config: &MazeBuilderConfig,
    draws: &mut impl DrawSource,
) -> Result<GeneratedMaze, MazeError> {
    let span = span!(Level::DEBUG, "create_maze");
    let _guard = span.enter();

    let builder = MazeBuilder::new(width, height)?;

    builder.build(config, draws)
}

pub fn render_maze(maze: &GeneratedMaze, style: RenderStyle, config: &DrawConfig) -> Drawing {
    let span = span!(Level::DEBUG, "render_maze");
    let _guard = span.enter();

    let drawer = MazeDrawerFactory::create_drawer(style);

    drawer.draw(maze, config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_create_maze_rejects_empty_grid() {
        let result = create_maze(0, 4, &MazeBuilderConfig::default(), &mut RngDraws::seeded(1));

        assert_eq!(
            result,
            Err(MazeError::ZeroDimension {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn test_create_and_render_is_reproducible() {
        let config = MazeBuilderConfig::with_exit_policy(ExitPolicy::Offset);

        let first = create_maze(20, 8, &config, &mut RngDraws::seeded(99)).unwrap();
        let second = create_maze(20, 8, &config, &mut RngDraws::seeded(99)).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            render_maze(&first, RenderStyle::Blocks, &DrawConfig::default()).to_string(),
            render_maze(&second, RenderStyle::Blocks, &DrawConfig::default()).to_string()
        );
    }
}
