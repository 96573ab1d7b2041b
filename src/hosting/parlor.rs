use crate::arena::*;
use crate::ladder::Sort;
use crate::ladder::Standing;
use tokio::sync::RwLock;

/// Shared service state: one arena behind one lock.
///
/// Starting and playing take the write half, so game resolutions never
/// interleave. Leaderboard reads share the read half and never observe a
/// half-booked game.
pub struct Parlor {
    arena: RwLock<Arena>,
}

impl Default for Parlor {
    fn default() -> Self {
        Self::from(Arena::default())
    }
}

impl From<Arena> for Parlor {
    fn from(arena: Arena) -> Self {
        Self {
            arena: RwLock::new(arena),
        }
    }
}

impl Parlor {
    pub async fn start(&self, p1: &str, p2: &str) -> Result<Opening, Error> {
        self.arena
            .write()
            .await
            .start(p1, p2)
            .inspect_err(|e| log::warn!("rejected start ({:?} vs {:?}): {}", p1, p2, e))
    }

    pub async fn play(&self) -> Result<Report, Error> {
        self.arena
            .write()
            .await
            .play()
            .inspect_err(|e| log::warn!("rejected play: {}", e))
    }

    pub async fn standings(&self, sort: Sort) -> Vec<Standing> {
        self.arena.read().await.standings(sort)
    }
}
