use crate::core::error::AppError;
use crate::core::manifest::schema::Manifest;
use crate::core::types::ErrorCategory;
use indexmap::IndexMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// File extensions recognized as manifests during directory loading.
const MANIFEST_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Parse a manifest from YAML text.
///
/// Empty (or whitespace-only) input yields the default manifest rather than
/// an error: absence of content is not malformed content.
pub fn load_from_str(text: &str) -> Result<Manifest, AppError> {
    if text.trim().is_empty() {
        return Ok(Manifest::default());
    }
    serde_yaml::from_str(text).map_err(|err| {
        AppError::new(
            ErrorCategory::DecodeError,
            format!("failed to decode manifest YAML: {}", err),
        )
    })
}

/// Parse a manifest from a byte stream.
///
/// Read failures surface as I/O errors; bytes that are not UTF-8 and
/// structural YAML faults surface as decode errors.
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Manifest, AppError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|err| {
        AppError::new(
            ErrorCategory::IoError,
            format!("failed to read manifest: {}", err),
        )
    })?;
    let text = std::str::from_utf8(&buf).map_err(|err| {
        AppError::new(
            ErrorCategory::DecodeError,
            format!("manifest is not valid UTF-8: {}", err),
        )
    })?;
    load_from_str(text)
}

/// Parse the manifest file at `path`.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Manifest, AppError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading manifest");
    let file = fs::File::open(path).map_err(|err| {
        AppError::new(
            ErrorCategory::IoError,
            format!("failed to open {}: {}", path.display(), err),
        )
    })?;
    load_from_reader(file)
}

/// Parse every manifest under `root`, recursively.
///
/// The result maps each file's root-relative path to its manifest; entries
/// without a recognized extension are skipped. The walk is sequential in
/// path order and aborts on the first file that fails to load, so one bad
/// file fails the whole batch. Collecting per-file errors alongside the
/// successful parses would be a reasonable future mode, but is not offered.
pub fn load_from_dir(root: impl AsRef<Path>) -> Result<IndexMap<String, Manifest>, AppError> {
    let root = root.as_ref();
    let mut manifests = IndexMap::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            AppError::new(
                ErrorCategory::IoError,
                format!("failed to walk {}: {}", root.display(), err),
            )
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if MANIFEST_EXTENSIONS.contains(&ext) => {}
            _ => continue,
        }

        let manifest = load_from_file(path).map_err(|err| {
            AppError::new(
                err.category,
                format!("failed to parse {}: {}", path.display(), err.message),
            )
        })?;
        let relative = path.strip_prefix(root).map_err(|err| {
            AppError::new(
                ErrorCategory::InternalError,
                format!("failed to relativize {}: {}", path.display(), err),
            )
        })?;
        manifests.insert(relative.display().to_string(), manifest);
    }

    debug!(root = %root.display(), count = manifests.len(), "loaded manifest directory");
    Ok(manifests)
}
