use super::*;

/// A single resolved round inside a game. Only lives as long as the game report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Round {
    /// 1-based position within the game.
    pub round: usize,
    pub p1_choice: Choice,
    pub p2_choice: Choice,
    pub winner: Outcome,
}

impl From<(usize, Choice, Choice)> for Round {
    fn from((round, p1_choice, p2_choice): (usize, Choice, Choice)) -> Self {
        Self {
            round,
            p1_choice,
            p2_choice,
            winner: Outcome::from((p1_choice, p2_choice)),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "round {:>2}: {:<8} vs {:<8} -> {}",
            self.round, self.p1_choice, self.p2_choice, self.winner
        )
    }
}
