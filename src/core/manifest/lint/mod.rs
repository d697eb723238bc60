use crate::core::manifest::schema::Manifest;
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub mod rules;
pub use rules::*;

/// Single structural finding produced by the validator.
///
/// `field` is a stable dotted/bracketed path (`runs.main`,
/// `jobs.<jobID>.steps[<i>]`) that downstream tooling pattern-matches on;
/// `message` is free text for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait implemented by manifest lint rules. A rule that does not apply to
/// the manifest's inferred kind returns an empty list.
pub trait LintRule {
    fn check(&self, manifest: &Manifest) -> Vec<Violation>;
}

/// Rule-driven manifest validator.
///
/// Violations are ordinary data, never errors: every applicable rule runs
/// and every finding is collected in one pass. The instance keeps the most
/// recent run's findings (reset on each `validate` call) so it can be
/// reused across manifests, but not shared across threads mid-validation.
pub struct Validator {
    rules: Vec<Box<dyn LintRule>>,
    violations: Vec<Violation>,
}

impl Validator {
    /// Construct a validator populated with the built-in rule sets.
    pub fn new() -> Self {
        Self {
            rules: built_in_rules(),
            violations: Vec::new(),
        }
    }

    /// Run every rule against the manifest and return the collected
    /// violations. An action-kind manifest gets the action rule set, a
    /// workflow-kind manifest the workflow rule set, and a manifest that is
    /// both gets the union of the two.
    pub fn validate(&mut self, manifest: &Manifest) -> Vec<Violation> {
        self.violations.clear();
        for rule in &self.rules {
            self.violations.extend(rule.check(manifest));
        }
        debug!(violations = self.violations.len(), "manifest validated");
        self.violations.clone()
    }

    /// True when the most recent `validate` run found nothing. Callers that
    /// already hold the returned list can just check `is_empty` on it.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
