use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PlayerId = Uuid;

/// A participant in one game session. Display names are unique per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub score: u32,
}

impl Player {
    pub(crate) fn new(display_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name,
            score: 0,
        }
    }
}
