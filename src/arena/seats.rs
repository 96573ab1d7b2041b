/// The two player slots of the current match.
///
/// Starts empty and unlocked. After every resolved game the winner moves
/// into (or stays in) seat one, seat two is vacated, and the lock engages
/// for good.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seats {
    p1: Option<String>,
    p2: Option<String>,
    locked: bool,
}

impl Seats {
    pub fn p1(&self) -> Option<&str> {
        self.p1.as_deref()
    }

    pub fn p2(&self) -> Option<&str> {
        self.p2.as_deref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The name that will actually occupy seat one if `requested` asks for it.
    /// A locked seat keeps its holder no matter who asks.
    pub fn claim(&self, requested: String) -> String {
        match (self.locked, self.p1.as_ref()) {
            (true, Some(holder)) if *holder != requested => {
                log::debug!("seat one is locked to {}, ignoring {}", holder, requested);
                holder.clone()
            }
            _ => requested,
        }
    }

    pub fn fill(&mut self, p1: String, p2: String) {
        self.p1 = Some(p1);
        self.p2 = Some(p2);
    }

    /// Both occupants, if the match is ready to play.
    pub fn ready(&self) -> Option<(String, String)> {
        match (self.p1.as_ref(), self.p2.as_ref()) {
            (Some(p1), Some(p2)) if !p1.is_empty() && !p2.is_empty() => {
                Some((p1.clone(), p2.clone()))
            }
            _ => None,
        }
    }

    /// Winner stays on; challenger seat opens up; lock engages.
    pub fn crown(&mut self, winner: String) {
        self.p1 = Some(winner);
        self.p2 = None;
        self.locked = true;
    }
}
