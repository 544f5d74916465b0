use serde::{Deserialize, Serialize};

/// A member of the team; read-only reference data for the scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub avatar: Option<String>,
    /// Weekly hours target, supplied by the team module, never derived here
    pub hours: u32,
}

impl TeamMember {
    /// Create a new team member without an avatar
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
        hours: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            avatar: None,
            hours,
        }
    }
}

/// A named role that shifts can be scheduled against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub name: String,
}
