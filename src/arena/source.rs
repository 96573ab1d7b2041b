use crate::gameplay::Choice;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Where thrown shapes come from. The arena draws player one's shape, then
/// player two's, once per round.
pub trait Source: Send + Sync {
    fn draw(&mut self) -> Choice;
}

/// Independent uniform draws.
#[derive(Debug, Clone)]
pub struct Dice(SmallRng);

impl Dice {
    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl From<Option<u64>> for Dice {
    fn from(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }
}

impl Source for Dice {
    fn draw(&mut self) -> Choice {
        self.0.random()
    }
}

/// Fixed sequence of shapes, replayed from the start once exhausted.
/// An empty script throws rock forever.
#[derive(Debug, Clone, Default)]
pub struct Script {
    choices: Vec<Choice>,
    cursor: usize,
}

impl From<Vec<Choice>> for Script {
    fn from(choices: Vec<Choice>) -> Self {
        Self { choices, cursor: 0 }
    }
}

/// Shapes by initial, e.g. `"rp ss pr"`. Whitespace is ignored.
impl TryFrom<&str> for Script {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .flat_map(|chunk| chunk.chars())
            .map(|c| Choice::try_from(c.to_string().as_str()))
            .collect::<Result<Vec<Choice>, _>>()
            .map(Self::from)
    }
}

impl Source for Script {
    fn draw(&mut self) -> Choice {
        let choice = match self.choices.len() {
            0 => Choice::Rock,
            n => self.choices[self.cursor % n],
        };
        self.cursor += 1;
        choice
    }
}
