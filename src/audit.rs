//! Run audit scenarios against the guard.

use crate::config::{AuditConfig, AuditScenario};
use serde::Serialize;
use talentgate_policy::{AccessDecision, RouteGuard};
use thiserror::Error;

/// A scenario whose decision differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{scenario}: {path} expected {expected}, got {actual}")]
pub struct AuditMismatch {
    pub scenario: String,
    pub path: String,
    pub expected: AccessDecision,
    pub actual: AccessDecision,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub path: String,
    pub expected: AccessDecision,
    pub actual: AccessDecision,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }

    fn mismatch(&self) -> Option<AuditMismatch> {
        if self.passed() {
            return None;
        }
        Some(AuditMismatch {
            scenario: self.name.clone(),
            path: self.path.clone(),
            expected: self.expected.clone(),
            actual: self.actual.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl AuditReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    pub fn failures(&self) -> Vec<AuditMismatch> {
        self.outcomes
            .iter()
            .filter_map(ScenarioOutcome::mismatch)
            .collect()
    }
}

fn run_scenario(guard: &RouteGuard, scenario: &AuditScenario) -> ScenarioOutcome {
    let actual = guard.check(&scenario.principal(), &scenario.path);
    ScenarioOutcome {
        name: scenario.name.clone(),
        path: scenario.path.clone(),
        expected: scenario.expect.clone(),
        actual,
    }
}

/// Evaluate every scenario. Mismatches are reported, not raised.
pub fn run_audit(guard: &RouteGuard, config: &AuditConfig) -> AuditReport {
    let outcomes: Vec<_> = config
        .scenarios
        .iter()
        .map(|scenario| run_scenario(guard, scenario))
        .collect();

    for outcome in outcomes.iter().filter(|outcome| !outcome.passed()) {
        tracing::warn!(
            scenario = %outcome.name,
            path = %outcome.path,
            expected = %outcome.expected,
            actual = %outcome.actual,
            "access audit mismatch"
        );
    }

    AuditReport { outcomes }
}
