//! Build and version metadata printed by `report`.

use serde_json::{json, Value};
use std::process::Command;

/// Code revision and library version, plus caller-supplied params.
pub fn block(params: Value) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "geometry_version": geometry::VERSION,
        "params": params,
    })
}

/// `GIT_COMMIT` (compile time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_carries_version_and_params() {
        let doc = block(json!({"radius": 5.0}));
        assert_eq!(doc["geometry_version"], geometry::VERSION);
        assert_eq!(doc["params"]["radius"], 5.0);
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
