//! Standards directory path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "SURVEY_STANDARDS_DIR";

/// File name of the skip-logic rule table inside the standards directory.
pub const RULES_FILE: &str = "skip_logic_rules.csv";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `SURVEY_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Default location of the skip-logic rule table.
pub fn default_rules_path() -> PathBuf {
    standards_root().join(RULES_FILE)
}
