use crate::{algos::DrawSource, types::WallPlane};

use tracing::event;

pub struct WallOpener;

impl WallOpener {
    /// Knocks doors into the segment `[first, last]` of wall `line`.
    ///
    /// A segment receives a door with probability `segment length / full_length`,
    /// at a uniform position inside it. Whatever is left on either side, keeping
    /// one standing wall next to the new door, is then considered the same way,
    /// so long walls tend to get several doors while short ones get one at most.
    /// Calling it with the whole wall (`last - first + 1 == full_length`) always
    /// carves at least one door. Returns the number of doors carved.
    pub fn open_wall(
        plane: &mut WallPlane,
        line: u32,
        first: u32,
        last: u32,
        full_length: u32,
        draws: &mut impl DrawSource,
    ) -> u32 {
        let mut doors = 0;
        let mut segment_stack = vec![(first, last)];

        while let Some((first, last)) = segment_stack.pop() {
            let segment_length = last - first + 1;

            if draws.draw(1, full_length) > segment_length {
                continue;
            }

            let door_at = draws.draw(first, last);
            plane.open(line, door_at);
            doors += 1;

            event!(
                tracing::Level::TRACE,
                "Opened door at [{}] on line [{}] within [{}..={}]",
                door_at,
                line,
                first,
                last
            );

            // Right side goes first so the left side is popped first
            if door_at + 2 <= last {
                segment_stack.push((door_at + 2, last));
            }

            if door_at >= first + 2 {
                segment_stack.push((first, door_at - 2));
            }
        }

        doors
    }
}
