use crate::core::error::AppError;
use crate::core::manifest::schema::{Input, Manifest, Output, Secret};
use crate::utils::yaml;
use indexmap::IndexMap;
use serde_yaml::Value;

/// Trigger event that marks a workflow as callable from other workflows.
pub const WORKFLOW_CALL_EVENT: &str = "workflow_call";

/// True when the manifest declares the `workflow_call` trigger.
///
/// Classification is best-effort: any trigger shape other than a mapping
/// containing the workflow-call event, including a mapping whose keys fail
/// to normalize, is simply "not reusable". Extraction below is the place
/// where malformed trigger trees become visible errors.
pub fn is_reusable_workflow(manifest: &Manifest) -> bool {
    let Some(config) = manifest.on.as_ref().and_then(|on| on.as_config()) else {
        return false;
    };
    match yaml::mapping_to_string_keys(config) {
        Ok(events) => events.contains_key(WORKFLOW_CALL_EVENT),
        Err(_) => false,
    }
}

/// Input contract of a reusable workflow.
///
/// `None` means there is nothing to extract: the manifest is not reusable,
/// or its `workflow_call` trigger declares no `inputs` sub-tree. A sub-tree
/// that fails to normalize to a mapping is a decode error.
pub fn workflow_call_inputs(
    manifest: &Manifest,
) -> Result<Option<IndexMap<String, Input>>, AppError> {
    let Some(section) = contract_section(manifest, "inputs")? else {
        return Ok(None);
    };

    let mut inputs = IndexMap::with_capacity(section.len());
    for (name, definition) in &section {
        let mut input = Input::default();
        if let Some(fields) = yaml::map_of_string_value(definition)? {
            if let Some(description) = fields.get("description").and_then(Value::as_str) {
                input.description = Some(description.to_string());
            }
            if let Some(required) = fields.get("required").and_then(Value::as_bool) {
                input.required = required;
            }
            if let Some(default) = fields.get("default").and_then(yaml::scalar_to_string) {
                input.default = Some(default);
            }
        }
        inputs.insert(name.clone(), input);
    }
    Ok(Some(inputs))
}

/// Output contract of a reusable workflow; same nil and error semantics as
/// [`workflow_call_inputs`].
pub fn workflow_call_outputs(
    manifest: &Manifest,
) -> Result<Option<IndexMap<String, Output>>, AppError> {
    let Some(section) = contract_section(manifest, "outputs")? else {
        return Ok(None);
    };

    let mut outputs = IndexMap::with_capacity(section.len());
    for (name, definition) in &section {
        let mut output = Output::default();
        if let Some(fields) = yaml::map_of_string_value(definition)? {
            if let Some(description) = fields.get("description").and_then(Value::as_str) {
                output.description = Some(description.to_string());
            }
            if let Some(value) = fields.get("value").and_then(Value::as_str) {
                output.value = Some(value.to_string());
            }
        }
        outputs.insert(name.clone(), output);
    }
    Ok(Some(outputs))
}

/// Secrets contract of a reusable workflow; same nil and error semantics as
/// [`workflow_call_inputs`].
pub fn workflow_call_secrets(
    manifest: &Manifest,
) -> Result<Option<IndexMap<String, Secret>>, AppError> {
    let Some(section) = contract_section(manifest, "secrets")? else {
        return Ok(None);
    };

    let mut secrets = IndexMap::with_capacity(section.len());
    for (name, definition) in &section {
        let mut secret = Secret::default();
        if let Some(fields) = yaml::map_of_string_value(definition)? {
            if let Some(description) = fields.get("description").and_then(Value::as_str) {
                secret.description = Some(description.to_string());
            }
            if let Some(required) = fields.get("required").and_then(Value::as_bool) {
                secret.required = required;
            }
        }
        secrets.insert(name.clone(), secret);
    }
    Ok(Some(secrets))
}

/// Locate one declaration sub-tree (`inputs`, `outputs`, `secrets`) of the
/// `workflow_call` trigger, normalized to string keys.
fn contract_section(
    manifest: &Manifest,
    section: &str,
) -> Result<Option<IndexMap<String, Value>>, AppError> {
    let Some(config) = workflow_call_config(manifest)? else {
        return Ok(None);
    };
    let Some(raw) = config.get(section) else {
        return Ok(None);
    };
    yaml::map_of_string_value(raw)
}

/// The `workflow_call` trigger's own configuration mapping, or `None` when
/// the manifest is not a reusable workflow or the trigger has no body.
fn workflow_call_config(manifest: &Manifest) -> Result<Option<IndexMap<String, Value>>, AppError> {
    let Some(config) = manifest.on.as_ref().and_then(|on| on.as_config()) else {
        return Ok(None);
    };
    let events = match yaml::mapping_to_string_keys(config) {
        Ok(events) => events,
        Err(_) => return Ok(None),
    };
    let Some(raw) = events.get(WORKFLOW_CALL_EVENT) else {
        return Ok(None);
    };
    yaml::map_of_string_value(raw)
}
