pub mod error;
pub mod manifest;
pub mod types;

pub use error::AppError;
pub use manifest::{
    is_reusable_workflow, load_from_dir, load_from_file, load_from_reader, load_from_str,
    workflow_call_inputs, workflow_call_outputs, workflow_call_secrets, Manifest, Validator,
    Violation,
};
pub use types::*;
