/// Running totals for one player. Fields only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    /// Rounds won across every game played.
    pub score: u32,
    pub games_won: u32,
    pub games_played: u32,
}

impl Stats {
    /// Book one finished game from this player's seat.
    pub fn record(&mut self, rounds: u32, won: bool) {
        self.score += rounds;
        self.games_played += 1;
        self.games_won += won as u32;
    }
}
