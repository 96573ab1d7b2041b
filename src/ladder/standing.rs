use super::Stats;

/// One row of a leaderboard view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Standing {
    pub name: String,
    #[serde(flatten)]
    pub stats: Stats,
}

impl From<(&String, &Stats)> for Standing {
    fn from((name, stats): (&String, &Stats)) -> Self {
        Self {
            name: name.clone(),
            stats: *stats,
        }
    }
}
