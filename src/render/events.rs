
/// Events emitted by the game loop that renderers can react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// First board is on screen
    Started,

    /// An effective move was applied
    Moved { score_delta: u64 },

    /// The best score was raised
    NewBest(u64),

    /// No move can change the board any more
    GameOver,

    /// A new game replaced the current one
    Restarted,
}
