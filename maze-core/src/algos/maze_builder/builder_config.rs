/// How the exit is chosen once the entry has been placed.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ExitPolicy {
    /// The boundary position with the longest walk from the entry
    #[default]
    Farthest,
    /// A random perimeter offset from the entry, ignoring the walls
    Offset,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MazeBuilderConfig {
    pub exit_policy: ExitPolicy,
}

impl MazeBuilderConfig {
    pub fn with_exit_policy(exit_policy: ExitPolicy) -> Self {
        MazeBuilderConfig { exit_policy }
    }
}
