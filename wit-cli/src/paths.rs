//! Input validation and output path resolution for the convert command
//!
//! Input must be an existing file carrying one of the configured extensions. Without an explicit
//! output path the input path is reused with the extension of the selected mode
//! (`notes.wit` → `notes.html`). Writing over the input is refused.

use std::path::{Path, PathBuf};
use wit_babel::ConvertError;
use wit_config::InputConfig;

/// Check that `path` is a convertible input file.
pub fn validate_input(path: &Path, input: &InputConfig) -> Result<(), ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::Argument(format!(
            "input file '{}' does not exist",
            path.display()
        )));
    }
    if !input.accepts(path) {
        return Err(ConvertError::InputFormat {
            path: path.display().to_string(),
            expected: input.extensions.join(", "),
        });
    }
    Ok(())
}

/// Pick the output path and make sure it does not point at the input.
pub fn resolve_output(
    input: &Path,
    output: Option<&Path>,
    extension: &str,
) -> Result<PathBuf, ConvertError> {
    let resolved = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(extension),
    };

    if same_file(input, &resolved) {
        return Err(ConvertError::Argument(format!(
            "output path '{}' would overwrite the input",
            resolved.display()
        )));
    }
    Ok(resolved)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
