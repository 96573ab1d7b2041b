/// Ordering of a leaderboard view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sort {
    /// Ascending, case-insensitive by name.
    #[default]
    Name,
    /// Descending by score.
    Score,
}

/// Anything other than `score` falls back to [`Sort::Name`].
impl From<&str> for Sort {
    fn from(mode: &str) -> Self {
        match mode {
            "score" => Self::Score,
            _ => Self::Name,
        }
    }
}

impl From<Option<&str>> for Sort {
    fn from(mode: Option<&str>) -> Self {
        mode.map(Self::from).unwrap_or_default()
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Score => write!(f, "score"),
        }
    }
}
