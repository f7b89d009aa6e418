//! Action scripts
//!
//! One JSON action per line, `{"type": "ADD_TODO", "payload": {...}}`.
//! Blank lines and lines starting with `#` are skipped.

use anyhow::Context;
use fluxbox::Action;
use std::io::BufRead;

pub fn read_actions(reader: impl BufRead) -> anyhow::Result<Vec<Action>> {
    let mut actions = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_no))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let action: Action = serde_json::from_str(line)
            .with_context(|| format!("line {}: not an action: {}", line_no, line))?;
        actions.push(action);
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_read_actions() {
        let script = r#"
# seed the list
{"type": "ADD_TODO", "payload": {"text": "milk"}}

{"type": "CLEAR_DONE"}
"#;
        let actions = read_actions(script.as_bytes()).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::new("ADD_TODO", json!({"text": "milk"})),
                Action::bare("CLEAR_DONE"),
            ]
        );
    }

    #[test]
    fn test_reports_line_number() {
        let script = "{\"type\": \"OK\"}\n{\"payload\": 1}\n";
        let err = read_actions(script.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("line 2:"), "got: {err}");
    }
}
