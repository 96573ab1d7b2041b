use crate::gameplay::Outcome;
use crate::gameplay::Round;
use std::cmp::Ordering;

/// Everything that happened in one game, as handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    pub p1: String,
    pub p2: String,
    pub rounds_played: usize,
    pub p1_round_wins: u32,
    pub p2_round_wins: u32,
    pub ties: u32,
    pub game_winner: String,
    pub next_player1: String,
    pub round_details: Vec<Round>,
}

impl Report {
    /// Seat one takes the game on strictly more round wins, and also on an
    /// exact tie. Seat two must win outright.
    pub fn p1_takes_game(&self) -> bool {
        self.p1_round_wins >= self.p2_round_wins
    }

    pub fn is_drawn(&self) -> bool {
        self.p1_round_wins == self.p2_round_wins
    }
}

impl From<(String, String, Vec<Round>)> for Report {
    fn from((p1, p2, rounds): (String, String, Vec<Round>)) -> Self {
        let count = |outcome: Outcome| rounds.iter().filter(|r| r.winner == outcome).count() as u32;
        let p1_round_wins = count(Outcome::P1);
        let p2_round_wins = count(Outcome::P2);
        let ties = count(Outcome::Tie);
        let game_winner = match p1_round_wins.cmp(&p2_round_wins) {
            Ordering::Less => p2.clone(),
            Ordering::Equal | Ordering::Greater => p1.clone(),
        };
        Self {
            rounds_played: rounds.len(),
            next_player1: game_winner.clone(),
            game_winner,
            p1_round_wins,
            p2_round_wins,
            ties,
            round_details: rounds,
            p1,
            p2,
        }
    }
}
