/// Reasons a match request is refused. Neither variant mutates any state,
/// and the arena stays usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A player name was empty after trimming.
    #[error("Both player names are required.")]
    Validation,
    /// A game was requested before both seats were filled.
    #[error("Start a match first (enter Player 1 and Player 2).")]
    NotReady,
}
