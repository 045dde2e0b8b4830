//! Invoking the system C preprocessor.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::DriverError;

/// Expand `path` through `cc -E`.
///
/// `-fdirectives-only` keeps macro definitions untouched so the expanded
/// text still lexes like the file's author wrote it, and `-w` silences
/// warnings that belong to the final compile, not to us.
pub fn preprocess(path: &Path) -> Result<String, DriverError> {
    debug!(path = %path.display(), "running cc -E");
    let output = Command::new("cc")
        .args(["-x", "c", "-fdirectives-only", "-w", "-E"])
        .arg(path)
        .output()
        .map_err(DriverError::Spawn)?;

    if !output.status.success() {
        return Err(DriverError::Preprocessor {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    String::from_utf8(output.stdout).map_err(|_| DriverError::NonUtf8Output)
}
