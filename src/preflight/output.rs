//! Output directory preflight check.

use super::CheckResult;
use crate::utils::fs;
use std::path::Path;

/// Check that the output root exists (creating it) and is writable.
pub fn check(root: &Path) -> CheckResult {
    let name = "Output directory";
    match fs::ensure_directory(root) {
        Ok(()) if fs::is_writable(root) => CheckResult::ok(name, &root.display().to_string()),
        Ok(()) => CheckResult::fail(
            name,
            &format!("{} is not writable", root.display()),
            "Fix permissions or set output_dir in config.toml",
        ),
        Err(e) => CheckResult::fail(
            name,
            &e.to_string(),
            "Set output_dir in config.toml to a directory you can create",
        ),
    }
}
