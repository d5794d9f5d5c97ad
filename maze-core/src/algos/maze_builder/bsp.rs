use super::add_doors::WallOpener;
use crate::{
    algos::DrawSource,
    types::{Maze, MazeError, Rect, SplitAxis},
};

use tracing::event;

/// Outcome of a partition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionReport {
    pub splits: u32,
    pub doors: u32,
}

pub struct BinarySpacePartitioning;

impl BinarySpacePartitioning {
    /// Recursively splits `area` until only single cells remain, drilling doors
    /// through every dividing wall so the area stays connected.
    ///
    /// Each split picks one of the `width - 1` interior column lines or
    /// `height - 1` interior row lines uniformly, so wide areas are more likely
    /// to be cut vertically and tall ones horizontally. The first (left or top)
    /// half is always fully processed before the second one.
    pub fn partition(
        maze: &mut Maze,
        area: Rect,
        draws: &mut impl DrawSource,
    ) -> Result<PartitionReport, MazeError> {
        if area.width == 0 || area.height == 0 {
            return Err(MazeError::ZeroDimension {
                width: area.width,
                height: area.height,
            });
        }

        let mut report = PartitionReport::default();
        let mut rect_stack = vec![area];

        while let Some(rect) = rect_stack.pop() {
            if rect.is_single_cell() {
                continue;
            }

            let vertical_split_options = rect.width - 1;
            let horizontal_split_options = rect.height - 1;
            let total_split_options = vertical_split_options + horizontal_split_options;

            let split_selection = draws.draw(0, total_split_options - 1);

            let (axis, split_at) = if split_selection < vertical_split_options {
                (SplitAxis::Vertical, split_selection + 1)
            } else {
                (
                    SplitAxis::Horizontal,
                    split_selection - vertical_split_options + 1,
                )
            };

            let (first, second) = rect.try_split_at(axis, split_at)?;

            // The dividing wall spans the rect across the split
            let (line, start, length) = match axis {
                SplitAxis::Vertical => (second.left(), rect.top(), rect.height),
                SplitAxis::Horizontal => (second.top(), rect.left(), rect.width),
            };

            let doors = WallOpener::open_wall(
                maze.plane_mut(axis),
                line,
                start,
                start + length - 1,
                length,
                draws,
            );

            event!(
                tracing::Level::TRACE,
                "Split {} {} at line [{}] with [{}] door/s",
                rect,
                axis,
                line,
                doors
            );

            report.splits += 1;
            report.doors += doors;

            rect_stack.push(second);
            rect_stack.push(first);
        }

        Ok(report)
    }
}
