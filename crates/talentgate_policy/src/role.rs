//! Principal roles.

use crate::error::PolicyError;
use serde::{Deserialize, Serialize};

/// The closed set of roles a session can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Recruiter,
    DomainExpert,
    Admin,
    Candidate,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [
        Role::Recruiter,
        Role::DomainExpert,
        Role::Admin,
        Role::Candidate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Recruiter => "recruiter",
            Role::DomainExpert => "domain_expert",
            Role::Admin => "admin",
            Role::Candidate => "candidate",
        }
    }

    /// Interpret a role string handed over by the session store.
    ///
    /// Legacy or unknown values resolve to `None` so the principal is
    /// treated as having no role at all.
    pub fn from_session_value(value: &str) -> Option<Role> {
        match value.trim().parse() {
            Ok(role) => Some(role),
            Err(_) => {
                tracing::warn!("Unknown role in session: '{}'", value);
                None
            }
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "recruiter" => Ok(Role::Recruiter),
            "domain_expert" => Ok(Role::DomainExpert),
            "admin" => Ok(Role::Admin),
            "candidate" => Ok(Role::Candidate),
            _ => Err(PolicyError::UnknownRole(value.to_string())),
        }
    }
}
