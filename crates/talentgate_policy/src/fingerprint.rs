//! Policy fingerprinting for cache invalidation.

use crate::default_route::declared_default_route;
use crate::permission::permissions_for;
use crate::role::Role;
use crate::route::RouteRegistry;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-addressed fingerprint of the access policy.
///
/// Covers what decisions depend on: paths, role lists, menu parents, the
/// default-route table and each role's permission bits. Labels and icons
/// are left out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyFingerprint {
    /// SHA-256 hash of the policy.
    pub hash: String,
    /// Number of route entries hashed.
    pub routes: usize,
}

impl PolicyFingerprint {
    pub fn compute(registry: &RouteRegistry) -> Self {
        let mut hasher = Sha256::new();

        for entry in registry.all_entries() {
            hasher.update(entry.path.as_bytes());
            hasher.update([0u8]);

            let mut roles: Vec<&str> = entry.allowed_roles.iter().map(|r| r.as_str()).collect();
            roles.sort_unstable();
            roles.dedup();
            for role in roles {
                hasher.update(role.as_bytes());
                hasher.update([b',']);
            }

            hasher.update(entry.menu_parent.unwrap_or("").as_bytes());
            hasher.update([b'\n']);
        }

        for role in Role::ALL {
            hasher.update(role.as_str().as_bytes());
            hasher.update(declared_default_route(role).as_bytes());
            hasher.update(permissions_for(role).bits().to_le_bytes());
        }

        Self {
            hash: hex::encode(hasher.finalize()),
            routes: registry.len(),
        }
    }

    /// Get a short version of the hash (first 16 chars).
    pub fn short(&self) -> &str {
        &self.hash[..16.min(self.hash.len())]
    }
}

impl std::fmt::Display for PolicyFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short())
    }
}
