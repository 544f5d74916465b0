use super::models::{Position, TeamMember};

/// Read-only roster of team members and positions
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
    positions: Vec<Position>,
}

impl TeamRoster {
    /// Create a roster from member and position lists
    pub fn new(members: Vec<TeamMember>, positions: Vec<Position>) -> Self {
        Self { members, positions }
    }

    /// All members, in roster order
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// All positions, in roster order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Look up a member by id
    pub fn member(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Display name for a member id, if the id resolves
    pub fn member_name(&self, id: &str) -> Option<&str> {
        self.member(id).map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_lookup() {
        let roster = TeamRoster::new(
            vec![
                TeamMember::new("emp1", "Sarah Johnson", "Manager", 40),
                TeamMember::new("emp2", "Michael Chen", "Cashier", 32),
            ],
            vec![],
        );

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.member_name("emp1"), Some("Sarah Johnson"));
        assert_eq!(roster.member("emp2").unwrap().position, "Cashier");
        // Dangling references resolve to nothing rather than failing
        assert_eq!(roster.member_name("emp99"), None);
    }
}
