use super::{LintRule, Violation};
use crate::core::manifest::schema::Manifest;

pub fn built_in_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(ActionMetadataRule),
        Box::new(ActionEntryPointRule),
        Box::new(WorkflowTriggerRule),
        Box::new(WorkflowJobsRule),
    ]
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Actions must carry a name and a description.
struct ActionMetadataRule;

impl LintRule for ActionMetadataRule {
    fn check(&self, manifest: &Manifest) -> Vec<Violation> {
        if !manifest.is_action() {
            return Vec::new();
        }

        let mut out = Vec::new();
        if is_blank(&manifest.name) {
            out.push(Violation::new("name", "action name is required"));
        }
        if is_blank(&manifest.description) {
            out.push(Violation::new("description", "action description is required"));
        }
        out
    }
}

/// The fields required by `runs` depend on the execution method named in
/// `runs.using`; anything outside the closed method set is itself a
/// violation.
struct ActionEntryPointRule;

impl LintRule for ActionEntryPointRule {
    fn check(&self, manifest: &Manifest) -> Vec<Violation> {
        if !manifest.is_action() {
            return Vec::new();
        }
        let Some(runs) = manifest.runs.as_ref() else {
            return Vec::new();
        };

        let mut out = Vec::new();
        match runs.using.as_deref().unwrap_or("") {
            // Unreachable while kind inference requires a non-empty `using`,
            // kept so the rule stands on its own.
            "" => out.push(Violation::new(
                "runs.using",
                "action must specify a 'using' field",
            )),
            "node16" | "node20" => {
                if is_blank(&runs.main) {
                    out.push(Violation::new(
                        "runs.main",
                        "JavaScript actions require a 'main' entry point",
                    ));
                }
            }
            "docker" => {
                if is_blank(&runs.image) {
                    out.push(Violation::new(
                        "runs.image",
                        "Docker actions require an 'image' to use",
                    ));
                }
            }
            "composite" => {
                if runs.steps.as_ref().map_or(true, Vec::is_empty) {
                    out.push(Violation::new(
                        "runs.steps",
                        "composite actions require at least one step",
                    ));
                }
            }
            other => out.push(Violation::new(
                "runs.using",
                format!("unsupported action type: {}", other),
            )),
        }
        out
    }
}

/// Workflows must declare at least one trigger.
struct WorkflowTriggerRule;

impl LintRule for WorkflowTriggerRule {
    fn check(&self, manifest: &Manifest) -> Vec<Violation> {
        if !manifest.is_workflow() {
            return Vec::new();
        }
        if manifest.on.is_none() {
            return vec![Violation::new(
                "on",
                "workflow must have at least one trigger",
            )];
        }
        Vec::new()
    }
}

/// Jobs must exist, run somewhere (or call a reusable workflow), and their
/// steps must do something.
struct WorkflowJobsRule;

impl LintRule for WorkflowJobsRule {
    fn check(&self, manifest: &Manifest) -> Vec<Violation> {
        let Some(jobs) = manifest.jobs.as_ref() else {
            return Vec::new();
        };

        let mut out = Vec::new();
        if jobs.is_empty() {
            out.push(Violation::new("jobs", "workflow must have at least one job"));
        }

        for (job_id, job) in jobs {
            if job.runs_on.is_none() && is_blank(&job.uses) {
                out.push(Violation::new(
                    format!("jobs.{}", job_id),
                    "job must specify either 'runs-on' or 'uses'",
                ));
            }

            // An explicitly empty step list is a fault; an absent one is
            // normal for reusable-workflow call jobs.
            match job.steps.as_deref() {
                Some([]) => out.push(Violation::new(
                    format!("jobs.{}.steps", job_id),
                    "job must have at least one step if steps are defined",
                )),
                Some(steps) => {
                    for (index, step) in steps.iter().enumerate() {
                        if is_blank(&step.uses) && is_blank(&step.run) {
                            out.push(Violation::new(
                                format!("jobs.{}.steps[{}]", job_id, index),
                                "step must have either 'uses' or 'run'",
                            ));
                        }
                    }
                }
                None => {}
            }
        }
        out
    }
}
