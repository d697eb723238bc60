//! Parsing, semantic extraction and validation for action and workflow
//! manifests.

pub mod lint;
pub mod loader;
pub mod reusable;
pub mod schema;

pub use lint::{LintRule, Validator, Violation};
pub use loader::{load_from_dir, load_from_file, load_from_reader, load_from_str};
pub use reusable::{
    is_reusable_workflow, workflow_call_inputs, workflow_call_outputs, workflow_call_secrets,
    WORKFLOW_CALL_EVENT,
};
pub use schema::{
    BoolOrExpr, Branding, Input, Job, Manifest, Output, RunsConfig, Secret, Step, Trigger,
};
