//! Capability flags derived from a role.

use crate::role::Role;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Capability flags a role carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PermissionSet: u32 {
        /// Publish new job postings.
        const CREATE_JOB = 1 << 0;

        /// Browse candidate profiles and pipelines.
        const VIEW_CANDIDATES = 1 << 1;

        /// Administer user accounts.
        const MANAGE_USERS = 1 << 2;

        /// Evaluate jobs and candidates as a subject expert.
        const EVALUATE_JOBS = 1 << 3;

        /// Apply to open jobs.
        const APPLY_JOBS = 1 << 4;

        const VIEW_PROFILE = 1 << 5;

        const VIEW_DASHBOARD = 1 << 6;

        const VIEW_JOBS = 1 << 7;
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Capabilities for a role.
///
/// The match is exhaustive so a new [`Role`] cannot compile without an entry.
pub fn permissions_for(role: Role) -> PermissionSet {
    match role {
        Role::Recruiter => {
            PermissionSet::CREATE_JOB
                | PermissionSet::VIEW_CANDIDATES
                | PermissionSet::VIEW_PROFILE
                | PermissionSet::VIEW_DASHBOARD
                | PermissionSet::VIEW_JOBS
        }
        Role::DomainExpert => {
            PermissionSet::VIEW_CANDIDATES
                | PermissionSet::EVALUATE_JOBS
                | PermissionSet::VIEW_PROFILE
                | PermissionSet::VIEW_JOBS
        }
        Role::Admin => {
            PermissionSet::CREATE_JOB
                | PermissionSet::VIEW_CANDIDATES
                | PermissionSet::MANAGE_USERS
                | PermissionSet::EVALUATE_JOBS
                | PermissionSet::VIEW_PROFILE
                | PermissionSet::VIEW_DASHBOARD
                | PermissionSet::VIEW_JOBS
        }
        Role::Candidate => {
            PermissionSet::APPLY_JOBS | PermissionSet::VIEW_PROFILE | PermissionSet::VIEW_JOBS
        }
    }
}

/// Capabilities for a raw session role string. Unknown roles get nothing.
pub fn permissions_for_name(role: &str) -> PermissionSet {
    role.parse::<Role>()
        .map(permissions_for)
        .unwrap_or_else(|_| PermissionSet::empty())
}

impl PermissionSet {
    pub fn can_create_job(&self) -> bool {
        self.contains(PermissionSet::CREATE_JOB)
    }

    pub fn can_view_candidates(&self) -> bool {
        self.contains(PermissionSet::VIEW_CANDIDATES)
    }

    pub fn can_manage_users(&self) -> bool {
        self.contains(PermissionSet::MANAGE_USERS)
    }

    pub fn can_evaluate_jobs(&self) -> bool {
        self.contains(PermissionSet::EVALUATE_JOBS)
    }

    pub fn can_apply_jobs(&self) -> bool {
        self.contains(PermissionSet::APPLY_JOBS)
    }

    pub fn can_view_profile(&self) -> bool {
        self.contains(PermissionSet::VIEW_PROFILE)
    }

    pub fn can_view_dashboard(&self) -> bool {
        self.contains(PermissionSet::VIEW_DASHBOARD)
    }

    pub fn can_view_jobs(&self) -> bool {
        self.contains(PermissionSet::VIEW_JOBS)
    }

    /// Expand into the boolean record the UI shell consumes.
    pub fn flags(&self) -> PermissionFlags {
        PermissionFlags {
            can_create_job: self.can_create_job(),
            can_view_candidates: self.can_view_candidates(),
            can_manage_users: self.can_manage_users(),
            can_evaluate_jobs: self.can_evaluate_jobs(),
            can_apply_jobs: self.can_apply_jobs(),
            can_view_profile: self.can_view_profile(),
            can_view_dashboard: self.can_view_dashboard(),
            can_view_jobs: self.can_view_jobs(),
        }
    }
}

/// Flat capability record, one boolean per flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionFlags {
    pub can_create_job: bool,
    pub can_view_candidates: bool,
    pub can_manage_users: bool,
    pub can_evaluate_jobs: bool,
    pub can_apply_jobs: bool,
    pub can_view_profile: bool,
    pub can_view_dashboard: bool,
    pub can_view_jobs: bool,
}
