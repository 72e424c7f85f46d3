use std::fmt;
use std::str::FromStr;

/// Capability passed explicitly into every operation that is restricted to
/// the team leader (task CRUD, reward dispatch). Never read from ambient
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Leader,
    Member,
}

impl Role {
    pub fn is_leader(&self) -> bool {
        matches!(self, Role::Leader)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leader" => Ok(Role::Leader),
            "member" => Ok(Role::Member),
            other => Err(format!("unknown role '{}' (expected leader or member)", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Leader => write!(f, "leader"),
            Role::Member => write!(f, "member"),
        }
    }
}
