use serde::Deserialize;

/// Post-edit tool event delivered on stdin by the hook runner.
///
/// Only `tool_input.file_path` drives behaviour. Other keys in the payload
/// (`session_id`, `cwd`, `hook_event_name`, ...) are ignored.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ChangeEvent {
    /// Kept as a raw value: it is only logged, so its shape must never reject the event.
    #[serde(default)]
    tool_name: Option<serde_json::Value>,
    #[serde(default)]
    tool_input: Option<ToolInput>,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
struct ToolInput {
    #[serde(default)]
    file_path: String,
}

impl ChangeEvent {
    /// Decode a raw stdin payload.
    ///
    /// Returns `None` for anything that does not decode into an event: invalid
    /// JSON, a non-object document, or a `file_path` that is not a string.
    /// Callers treat `None` as "nothing to do", never as an error.
    pub fn decode(raw: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Self>(raw) {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring undecodable hook payload");
                None
            }
        }
    }

    /// Name of the tool that made the edit, when the payload carries it as a string.
    pub fn tool_name(&self) -> Option<&str> {
        self.tool_name.as_ref().and_then(serde_json::Value::as_str)
    }

    /// Path of the edited file, or `""` when the payload does not name one.
    pub fn file_path(&self) -> &str {
        self.tool_input
            .as_ref()
            .map(|input| input.file_path.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let raw = br#"{
            "session_id": "abc",
            "hook_event_name": "PostToolUse",
            "tool_name": "Edit",
            "tool_input": {"file_path": "/repo/package.json", "old_string": "a"},
            "tool_response": {"success": true}
        }"#;
        let event = ChangeEvent::decode(raw).expect("payload should decode");
        assert_eq!(event.file_path(), "/repo/package.json");
        assert_eq!(event.tool_name(), Some("Edit"));
    }

    #[test]
    fn test_unexpected_tool_name_does_not_reject_event() {
        let payloads: [&[u8]; 3] = [
            br#"{"tool_name": 5, "tool_input": {"file_path": "/repo/package.json"}}"#,
            br#"{"tool_name": {"kind": "Edit"}, "tool_input": {"file_path": "/repo/package.json"}}"#,
            br#"{"tool_name": null, "tool_input": {"file_path": "/repo/package.json"}}"#,
        ];
        for raw in payloads {
            let event = ChangeEvent::decode(raw).expect("payload should decode");
            assert_eq!(event.file_path(), "/repo/package.json");
            assert_eq!(event.tool_name(), None, "{}", String::from_utf8_lossy(raw));
        }
    }

    #[test]
    fn test_missing_fields_yield_empty_path() {
        let payloads: [&[u8]; 4] = [
            br#"{}"#,
            br#"{"tool_input": null}"#,
            br#"{"tool_input": {}}"#,
            br#"{"tool_input": {"command": "ls"}}"#,
        ];
        for raw in payloads {
            let event = ChangeEvent::decode(raw).expect("payload should decode");
            assert_eq!(
                event.file_path(),
                "",
                "{}",
                String::from_utf8_lossy(raw)
            );
        }
    }

    #[test]
    fn test_malformed_payloads_are_rejected() {
        let payloads: [&[u8]; 7] = [
            b"not valid json",
            b"",
            b"[1, 2, 3]",
            b"\"package.json\"",
            br#"{"tool_input": {"file_path": 42}}"#,
            br#"{"tool_input": "package.json"}"#,
            &[0xff, 0xfe, 0x00],
        ];
        for raw in payloads {
            assert!(
                ChangeEvent::decode(raw).is_none(),
                "{:?} should not decode",
                String::from_utf8_lossy(raw)
            );
        }
    }
}
