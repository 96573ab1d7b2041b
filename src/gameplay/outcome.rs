use super::Choice;

/// Who took a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    P1,
    P2,
}

/// Identical shapes tie; otherwise the shape that beats the other wins.
impl From<(Choice, Choice)> for Outcome {
    fn from((p1, p2): (Choice, Choice)) -> Self {
        if p1 == p2 {
            Self::Tie
        } else if p1.beats() == p2 {
            Self::P1
        } else {
            Self::P2
        }
    }
}

/// Wire tag: 0 tie, 1 player one, 2 player two.
impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Tie => 0,
            Outcome::P1 => 1,
            Outcome::P2 => 2,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tie => write!(f, "tie"),
            Self::P1 => write!(f, "player1"),
            Self::P2 => write!(f, "player2"),
        }
    }
}

impl serde::Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(u8::from(*self))
    }
}
