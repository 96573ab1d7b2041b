use serde::Deserialize;

/// Body of `POST /api/start`. Missing or null names read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub p1: Option<String>,
    #[serde(default)]
    pub p2: Option<String>,
}

impl StartRequest {
    pub fn p1(&self) -> &str {
        self.p1.as_deref().unwrap_or_default()
    }
    pub fn p2(&self) -> &str {
        self.p2.as_deref().unwrap_or_default()
    }
}

/// Query of `GET /api/leaderboard`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardQuery {
    pub sort: Option<String>,
}
