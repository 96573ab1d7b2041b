/// Result of seating two players.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Opening {
    pub message: String,
    /// Seat one as actually resolved, which may differ from the request.
    pub p1: String,
    pub p2: String,
    pub p1_locked: bool,
}

impl Opening {
    pub fn new(p1: String, p2: String, p1_locked: bool) -> Self {
        Self {
            message: format!("Match started: {} vs {}.", p1, p2),
            p1,
            p2,
            p1_locked,
        }
    }
}
