use super::*;
use crate::ROUNDS_PER_GAME;
use crate::gameplay::Round;
use crate::ladder::Ladder;
use crate::ladder::Sort;
use crate::ladder::Standing;

/// The match engine.
///
/// Owns the current [`Seats`], the [`Ladder`] every game reports into, and
/// the [`Source`] of thrown shapes. Each operation either completes fully
/// or fails before touching any state.
pub struct Arena {
    seats: Seats,
    ladder: Ladder,
    source: Box<dyn Source>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Dice::default())
    }
}

impl Arena {
    pub fn new<S>(source: S) -> Self
    where
        S: Source + 'static,
    {
        Self {
            seats: Seats::default(),
            ladder: Ladder::default(),
            source: Box::new(source),
        }
    }

    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn standings(&self, sort: Sort) -> Vec<Standing> {
        self.ladder.standings(sort)
    }
}

impl Arena {
    /// Seat two players. A locked seat one keeps its holder regardless of
    /// the requested name; both resolved names land on the ladder.
    pub fn start(&mut self, p1: &str, p2: &str) -> Result<Opening, Error> {
        let p1 = p1.trim();
        let p2 = p2.trim();
        if p1.is_empty() || p2.is_empty() {
            return Err(Error::Validation);
        }
        let p1 = self.seats.claim(p1.to_string());
        let p2 = p2.to_string();
        self.ladder.ensure(&p1);
        self.ladder.ensure(&p2);
        self.seats.fill(p1.clone(), p2.clone());
        log::info!("match started: {} vs {}", p1, p2);
        Ok(Opening::new(p1, p2, self.seats.is_locked()))
    }

    /// Play one game between the seated players and book it.
    pub fn play(&mut self) -> Result<Report, Error> {
        let (p1, p2) = self.seats.ready().ok_or(Error::NotReady)?;
        let rounds = (1..=ROUNDS_PER_GAME)
            .map(|i| Round::from((i, self.source.draw(), self.source.draw())))
            .inspect(|round| log::debug!("{}", round))
            .collect::<Vec<Round>>();
        let report = Report::from((p1, p2, rounds));
        let p1_won = report.p1_takes_game();
        self.ladder.record(&report.p1, report.p1_round_wins, p1_won);
        self.ladder.record(&report.p2, report.p2_round_wins, !p1_won);
        self.seats.crown(report.game_winner.clone());
        if report.is_drawn() {
            log::info!(
                "{} vs {} drawn {}-{}, {} keeps the seat",
                report.p1,
                report.p2,
                report.p1_round_wins,
                report.p2_round_wins,
                report.game_winner
            );
        } else {
            log::info!(
                "{} beat {} {}-{} ({} ties)",
                report.game_winner,
                if p1_won { &report.p2 } else { &report.p1 },
                report.p1_round_wins.max(report.p2_round_wins),
                report.p1_round_wins.min(report.p2_round_wins),
                report.ties
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Outcome;
    use crate::ladder::Stats;

    /// Ten rounds where player two wins 6, player one wins 3, one tie.
    const P2_WINS: &str = "rp rp rp rp rp rp pr pr pr rr";
    /// Ten rounds with five wins apiece.
    const DRAWN: &str = "rs rs rs rs rs sr sr sr sr sr";
    /// Ten tied rounds.
    const ALL_TIES: &str = "pp pp pp pp pp pp pp pp pp pp";

    fn arena(script: &str) -> Arena {
        Arena::new(Script::try_from(script).unwrap())
    }

    #[test]
    fn start_registers_fresh_players() {
        let mut arena = arena(P2_WINS);
        let opening = arena.start("Alice", "Bob").unwrap();
        assert!(opening.p1 == "Alice");
        assert!(opening.p2 == "Bob");
        assert!(!opening.p1_locked);
        assert!(arena.ladder().get("Alice") == Some(&Stats::default()));
        assert!(arena.ladder().get("Bob") == Some(&Stats::default()));
    }

    #[test]
    fn start_trims_names() {
        let mut arena = arena(P2_WINS);
        let opening = arena.start("  Alice ", "\tBob\n").unwrap();
        assert!(opening.p1 == "Alice");
        assert!(opening.p2 == "Bob");
        assert!(arena.ladder().contains("Alice"));
    }

    #[test]
    fn start_leaves_existing_stats_alone() {
        let mut arena = arena(P2_WINS);
        arena.start("Alice", "Bob").unwrap();
        arena.play().unwrap();
        let before = *arena.ladder().get("Alice").unwrap();
        arena.start("Bob", "Alice").unwrap();
        assert!(arena.ladder().get("Alice") == Some(&before));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut arena = arena(P2_WINS);
        assert!(arena.start("", "Bob") == Err(Error::Validation));
        assert!(arena.start("Alice", "   ") == Err(Error::Validation));
        assert!(arena.ladder().is_empty());
        assert!(arena.seats() == &Seats::default());
    }

    #[test]
    fn play_before_start_is_not_ready() {
        let mut arena = arena(P2_WINS);
        assert!(arena.play() == Err(Error::NotReady));
        assert!(arena.ladder().is_empty());
        assert!(!arena.seats().is_locked());
    }

    #[test]
    fn play_books_an_outright_win() {
        let mut arena = arena(P2_WINS);
        arena.start("Alice", "Bob").unwrap();
        let report = arena.play().unwrap();
        assert!(report.rounds_played == ROUNDS_PER_GAME);
        assert!(report.round_details.len() == ROUNDS_PER_GAME);
        assert!(report.p1_round_wins == 3);
        assert!(report.p2_round_wins == 6);
        assert!(report.ties == 1);
        assert!(report.game_winner == "Bob");
        assert!(report.next_player1 == "Bob");
        assert!(report.round_details[0].winner == Outcome::P2);
        assert!(report.round_details[9].winner == Outcome::Tie);
        assert!(
            arena.ladder().get("Alice")
                == Some(&Stats {
                    score: 3,
                    games_won: 0,
                    games_played: 1,
                })
        );
        assert!(
            arena.ladder().get("Bob")
                == Some(&Stats {
                    score: 6,
                    games_won: 1,
                    games_played: 1,
                })
        );
    }

    #[test]
    fn round_indices_count_from_one() {
        let mut arena = arena(P2_WINS);
        arena.start("Alice", "Bob").unwrap();
        let report = arena.play().unwrap();
        let indices = report.round_details.iter().map(|r| r.round).collect::<Vec<_>>();
        assert!(indices == (1..=ROUNDS_PER_GAME).collect::<Vec<_>>());
    }

    #[test]
    fn play_rotates_the_winner_into_seat_one() {
        let mut arena = arena(P2_WINS);
        arena.start("Alice", "Bob").unwrap();
        arena.play().unwrap();
        assert!(arena.seats().p1() == Some("Bob"));
        assert!(arena.seats().p2().is_none());
        assert!(arena.seats().is_locked());
        assert!(arena.play() == Err(Error::NotReady));
    }

    #[test]
    fn locked_seat_ignores_a_new_p1() {
        let mut arena = arena(P2_WINS);
        arena.start("Alice", "Bob").unwrap();
        arena.play().unwrap();
        let opening = arena.start("Alice", "Carol").unwrap();
        assert!(opening.p1 == "Bob");
        assert!(opening.p2 == "Carol");
        assert!(opening.p1_locked);
        assert!(arena.seats().p1() == Some("Bob"));
        assert!(arena.seats().p2() == Some("Carol"));
    }

    #[test]
    fn lock_never_releases() {
        let mut arena = arena(P2_WINS);
        for challenger in ["Bob", "Carol", "Dave", "Erin"] {
            arena.start("Alice", challenger).unwrap();
            arena.play().unwrap();
            assert!(arena.seats().is_locked());
        }
    }

    // Equal round wins still credit seat one with the game.
    #[test]
    fn drawn_game_is_credited_to_p1() {
        let mut arena = arena(DRAWN);
        arena.start("Alice", "Bob").unwrap();
        let report = arena.play().unwrap();
        assert!(report.p1_round_wins == 5);
        assert!(report.p2_round_wins == 5);
        assert!(report.game_winner == "Alice");
        assert!(arena.ladder().get("Alice").map(|s| s.games_won) == Some(1));
        assert!(arena.ladder().get("Bob").map(|s| s.games_won) == Some(0));
        assert!(arena.seats().p1() == Some("Alice"));
    }

    #[test]
    fn all_ties_still_crowns_p1() {
        let mut arena = arena(ALL_TIES);
        arena.start("Alice", "Bob").unwrap();
        let report = arena.play().unwrap();
        assert!(report.ties == 10);
        assert!(report.game_winner == "Alice");
        assert!(arena.ladder().get("Alice").map(|s| (s.score, s.games_won)) == Some((0, 1)));
        assert!(arena.ladder().get("Bob").map(|s| (s.score, s.games_played)) == Some((0, 1)));
    }

    #[test]
    fn same_name_in_both_seats() {
        let mut arena = arena(P2_WINS);
        arena.start("Alice", "Alice").unwrap();
        arena.play().unwrap();
        assert!(
            arena.ladder().get("Alice")
                == Some(&Stats {
                    score: 9,
                    games_won: 1,
                    games_played: 2,
                })
        );
    }

    #[test]
    fn random_games_keep_the_books_balanced() {
        let mut arena = Arena::new(Dice::seeded(2024));
        let mut challengers = ["Bob", "Carol", "Dave"].iter().cycle();
        arena.start("Alice", "Bob").unwrap();
        for _ in 0..50 {
            let before = arena.standings(Sort::Name);
            let report = arena.play().unwrap();
            let after = arena.standings(Sort::Name);
            assert!(report.p1_round_wins + report.p2_round_wins + report.ties == 10);
            let stats = |rows: &[Standing], name: &str| {
                rows.iter()
                    .find(|r| r.name == name)
                    .map(|r| r.stats)
                    .unwrap_or_default()
            };
            let (p1, p2) = (report.p1.as_str(), report.p2.as_str());
            let (p1a, p1b) = (stats(&before, p1), stats(&after, p1));
            let (p2a, p2b) = (stats(&before, p2), stats(&after, p2));
            assert!(p1b.games_played == p1a.games_played + 1);
            assert!(p2b.games_played == p2a.games_played + 1);
            assert!(p1b.score == p1a.score + report.p1_round_wins);
            assert!(p2b.score == p2a.score + report.p2_round_wins);
            let won = before.iter().map(|r| r.stats.games_won).sum::<u32>();
            let now = after.iter().map(|r| r.stats.games_won).sum::<u32>();
            assert!(now == won + 1);
            assert!(arena.seats().p1() == Some(report.game_winner.as_str()));
            let next = challengers
                .find(|c| **c != report.game_winner)
                .copied()
                .unwrap();
            arena.start("ignored", next).unwrap();
        }
        for row in arena.standings(Sort::Score) {
            assert!(row.stats.games_won <= row.stats.games_played);
        }
    }
}
