use crate::utils::yaml::{self, StringOrSeq};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Unified record for action and workflow manifests.
///
/// The dialect reuses one schema for both file kinds; which kind a given
/// instance represents is inferred from its fields, not declared. A manifest
/// with a non-empty `runs.using` is action-kind, one with a `jobs` mapping
/// (even an empty one) is workflow-kind, and both can hold at once.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub inputs: Option<IndexMap<String, Input>>,
    pub outputs: Option<IndexMap<String, Output>>,
    pub runs: Option<RunsConfig>,
    pub branding: Option<Branding>,
    pub on: Option<Trigger>,
    pub jobs: Option<IndexMap<String, Job>>,
    pub env: Option<IndexMap<String, String>>,
    pub defaults: Option<Mapping>,
    pub permissions: Option<Value>,
}

impl Manifest {
    /// True when the manifest describes a runnable action.
    pub fn is_action(&self) -> bool {
        self.runs
            .as_ref()
            .and_then(|runs| runs.using.as_deref())
            .map_or(false, |using| !using.is_empty())
    }

    /// True when the manifest describes a workflow. An explicitly empty
    /// `jobs:` mapping still counts; an absent field does not.
    pub fn is_workflow(&self) -> bool {
        self.jobs.is_some()
    }
}

/// Declared input parameter of an action or reusable workflow.
///
/// `default` is always carried as text; numeric and boolean defaults are
/// rendered to their source text during decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Input {
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, deserialize_with = "yaml::opt_string_from_scalar")]
    pub default: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

/// Declared output value of an action or reusable workflow. The `value`
/// expression is opaque text to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Output {
    pub description: Option<String>,
    pub value: Option<String>,
}

/// Secret declared by a reusable workflow's call contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Secret {
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// How an action executes. `using` discriminates the execution method;
/// the remaining fields belong to one method each and are preserved
/// regardless of which method is selected.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RunsConfig {
    pub using: Option<String>,
    pub main: Option<String>,
    pub pre: Option<String>,
    #[serde(rename = "pre-if")]
    pub pre_if: Option<String>,
    pub post: Option<String>,
    #[serde(rename = "post-if")]
    pub post_if: Option<String>,
    pub steps: Option<Vec<Step>>,
    pub image: Option<String>,
    pub entrypoint: Option<String>,
    pub args: Option<Vec<String>>,
    pub env: Option<IndexMap<String, String>>,
    pub shell: Option<String>,
    pub with: Option<Mapping>,
}

/// Single step of a composite action or a workflow job.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Step {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "if")]
    pub condition: Option<String>,
    pub uses: Option<String>,
    pub run: Option<String>,
    pub shell: Option<String>,
    #[serde(rename = "working-directory")]
    pub working_directory: Option<String>,
    pub with: Option<Mapping>,
    pub env: Option<IndexMap<String, String>>,
    #[serde(rename = "continue-on-error")]
    pub continue_on_error: Option<BoolOrExpr>,
    #[serde(rename = "timeout-minutes")]
    pub timeout_minutes: Option<u64>,
}

/// Workflow job: either a list of steps on a runner, or a call to a
/// reusable workflow via `uses`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Job {
    pub name: Option<String>,
    pub needs: Option<StringOrSeq>,
    #[serde(rename = "runs-on")]
    pub runs_on: Option<StringOrSeq>,
    pub container: Option<Value>,
    pub services: Option<Mapping>,
    pub outputs: Option<IndexMap<String, String>>,
    pub env: Option<IndexMap<String, String>>,
    pub defaults: Option<Mapping>,
    #[serde(rename = "if")]
    pub condition: Option<String>,
    pub steps: Option<Vec<Step>>,
    #[serde(rename = "timeout-minutes")]
    pub timeout_minutes: Option<u64>,
    pub strategy: Option<Mapping>,
    #[serde(rename = "continue-on-error")]
    pub continue_on_error: Option<BoolOrExpr>,
    pub permissions: Option<Value>,
    pub concurrency: Option<Value>,
    pub uses: Option<String>,
    pub with: Option<Mapping>,
    pub secrets: Option<Value>,
}

/// Visual branding of an action. Presentational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Branding {
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Shape of the `on` trigger declaration: a single event name, a list of
/// event names, or a mapping from event name to event configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Trigger {
    Event(String),
    Events(Vec<String>),
    Config(Mapping),
}

impl Trigger {
    /// The event-to-configuration mapping, when the author wrote one.
    pub fn as_config(&self) -> Option<&Mapping> {
        match self {
            Trigger::Config(mapping) => Some(mapping),
            _ => None,
        }
    }
}

/// `continue-on-error` accepts a plain boolean or a conditional expression,
/// which stays opaque text here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BoolOrExpr {
    Bool(bool),
    Expr(String),
}
