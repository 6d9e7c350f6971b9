//! Replay command: play a script and print what the host would observe.

use std::io::{self, Read, Write};
use std::path::Path;

use color_eyre::{eyre::WrapErr, Result};

use crate::config::SwipeConfig;
use crate::error::{ReplayError, SwipeError, SwipeResult};
use crate::replay::{ReplayReport, ReplayScript};

/// Load the config and script, play it, and write one JSON line per step
/// followed by a summary line.
///
/// A script path of `-` reads the script from stdin.
pub fn handle_replay_command<W: Write>(
    script: &Path,
    config: Option<&Path>,
    out: &mut W,
) -> Result<ReplayReport> {
    let report = play_script(script, config).map_err(|err| {
        tracing::error!(
            code = err.error_code(),
            category = %err.category(),
            "Replay failed: {}",
            err
        );
        let hint = err.category().recovery_hint();
        color_eyre::Report::new(err).wrap_err(hint)
    })?;
    write_report(&report, out)?;
    Ok(report)
}

/// Load and run a script without writing anything.
pub fn play_script(script: &Path, config: Option<&Path>) -> SwipeResult<ReplayReport> {
    let config = match config {
        Some(path) => SwipeConfig::load(path)?,
        None => SwipeConfig::load_or_default()?,
    };

    let script = if script == Path::new("-") {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .map_err(|source| ReplayError::Read {
                path: script.to_path_buf(),
                source,
            })?;
        ReplayScript::from_json(&json)?
    } else {
        ReplayScript::from_path(script)?
    };

    script.run(&config).map_err(SwipeError::from)
}

/// Write step records as JSON lines, then the final row list.
pub fn write_report<W: Write>(report: &ReplayReport, out: &mut W) -> Result<()> {
    for record in &report.records {
        let line = serde_json::to_string(record).wrap_err("Failed to serialize step record")?;
        writeln!(out, "{}", line).wrap_err("Failed to write step record")?;
    }
    let summary = serde_json::json!({
        "remaining_rows": report.remaining_rows,
        "deleted_rows": report.deleted_rows,
    });
    writeln!(out, "{}", summary).wrap_err("Failed to write replay summary")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_replay_writes_json_lines() {
        let script = temp_file(
            r#"{"rows": ["a"], "steps": [
                {"op": "arm", "row": "a"},
                {"op": "drag", "row": "a", "delta_y": -90, "predicted_end_delta_y": -350},
                {"op": "end", "row": "a", "final_delta_y": -90, "predicted_end_delta_y": -350}
            ]}"#,
        );
        let config = temp_file("{}");
        let mut out = Vec::new();

        let report = handle_replay_command(script.path(), Some(config.path()), &mut out).unwrap();
        assert_eq!(report.deleted_rows, vec!["a".to_string()]);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);

        let last_step: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last_step["events"][0]["event"], "delete_committed");
        assert_eq!(last_step["snapshot"]["settle_target"], -300.0);

        let summary: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
        assert_eq!(summary["remaining_rows"], serde_json::json!([]));
    }

    #[test]
    fn test_replay_reports_bad_config() {
        let script = temp_file(r#"{"steps": []}"#);
        let config = temp_file(r#"{"commit_threshold": 0}"#);
        let mut out = Vec::new();
        let err = handle_replay_command(script.path(), Some(config.path()), &mut out).unwrap_err();
        assert!(err.chain().any(|e| e.to_string().contains("commit_threshold")));
        assert!(out.is_empty());

        let swipe = err.downcast_ref::<SwipeError>().unwrap();
        assert_eq!(swipe.error_code(), "E_CONFIG_VALUE");
        assert_eq!(swipe.category(), ErrorCategory::Configuration);
        assert_eq!(err.to_string(), ErrorCategory::Configuration.recovery_hint());
    }

    #[test]
    fn test_out_of_order_script_is_contract_violation() {
        let script = temp_file(
            r#"{"rows": ["a"], "steps": [
                {"op": "arm", "row": "a"},
                {"op": "finish_settle", "row": "a"}
            ]}"#,
        );
        let config = temp_file("{}");

        let err = play_script(script.path(), Some(config.path())).unwrap_err();
        assert!(err.is_contract_violation());
        assert_eq!(err.error_code(), "E_REPLAY_STEP");
        assert_eq!(err.category(), ErrorCategory::User);
    }

    #[test]
    fn test_missing_script_is_system_error() {
        let config = temp_file("{}");
        let err = play_script(Path::new("/nonexistent/script.json"), Some(config.path()))
            .unwrap_err();
        assert_eq!(err.error_code(), "E_REPLAY_READ");
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
