use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team: Option<String>,
    /// Default handicap, used for stroke play unless the tournament overrides it.
    #[serde(default)]
    pub handicap: i32,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, handicap: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: None,
            handicap,
        }
    }
}
