use super::*;
use std::collections::HashMap;

/// Leaderboard store. Names are identities verbatim; only the by-name view
/// folds case, and only for ordering. Rows are kept in registration order,
/// which is the tie order of every view.
#[derive(Debug, Clone, Default)]
pub struct Ladder {
    players: Vec<(String, Stats)>,
    index: HashMap<String, usize>,
}

impl Ladder {
    /// Register a name with zeroed stats. No-op if already present.
    pub fn ensure(&mut self, name: &str) {
        self.entry(name);
    }

    pub fn get(&self, name: &str) -> Option<&Stats> {
        self.index.get(name).map(|&i| &self.players[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Book a finished game for `name`, registering it first if unseen.
    pub fn record(&mut self, name: &str, rounds: u32, won: bool) {
        self.entry(name).record(rounds, won);
    }

    fn entry(&mut self, name: &str) -> &mut Stats {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                log::debug!("registering player {}", name);
                self.players.push((name.to_string(), Stats::default()));
                self.index.insert(name.to_string(), self.players.len() - 1);
                self.players.len() - 1
            }
        };
        &mut self.players[i].1
    }

    /// Materialized, sorted view. Both sorts are stable, so equal keys keep
    /// registration order and repeated calls are identical.
    pub fn standings(&self, sort: Sort) -> Vec<Standing> {
        let mut rows = self
            .players
            .iter()
            .map(|(name, stats)| Standing::from((name, stats)))
            .collect::<Vec<Standing>>();
        match sort {
            Sort::Score => rows.sort_by(|a, b| b.stats.score.cmp(&a.stats.score)),
            Sort::Name => rows.sort_by_cached_key(|row| row.name.to_lowercase()),
        }
        rows
    }
}
