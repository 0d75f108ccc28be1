//! Access audit YAML configuration types
//!
//! Defines the serde schema for `config/access-audit.yaml`: a list of
//! navigations and the decision each one must produce.

use serde::Deserialize;
use std::path::Path;
use talentgate_policy::{AccessDecision, Principal};

/// Root configuration structure
#[derive(Debug, Deserialize)]
pub struct AuditConfig {
    pub version: String,
    #[serde(default)]
    pub scenarios: Vec<AuditScenario>,
}

/// One navigation and its expected outcome
#[derive(Debug, Clone, Deserialize)]
pub struct AuditScenario {
    pub name: String,

    /// Defaults to signed in
    #[serde(default = "default_authenticated")]
    pub authenticated: bool,

    /// Raw session role string; unknown values behave as no role
    #[serde(default)]
    pub role: Option<String>,

    pub path: String,

    pub expect: AccessDecision,
}

fn default_authenticated() -> bool {
    true
}

impl AuditScenario {
    /// The principal the session store would hand over for this scenario
    pub fn principal(&self) -> Principal {
        Principal::from_session(self.authenticated, self.role.as_deref())
    }
}

impl AuditConfig {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Load configuration from YAML string (for testing)
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: AuditConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
