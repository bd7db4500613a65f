use serde_json::Value;

const COMMAND_RESULT: &str = "commandresult";
const REPLY: &str = "reply";

/// Backend reply to a console command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReply {
    raw: Value,
}

impl CommandReply {
    /// Recognize a command reply among backend JSON messages.
    pub fn from_json(value: &Value) -> Option<Self> {
        let command = value.get("command").and_then(Value::as_str)?;
        let is_reply = command == COMMAND_RESULT
            || (command == REPLY && value.get("success").is_some());
        is_reply.then(|| Self { raw: value.clone() })
    }

    /// Text shown for the reply in the conversation.
    pub fn format(&self) -> String {
        match self.raw.get("success").and_then(Value::as_bool) {
            Some(true) => String::from("✓ Command executed successfully"),
            Some(false) => {
                let error = self
                    .raw
                    .get("error")
                    .and_then(Value::as_str)
                    .filter(|error| !error.is_empty())
                    .unwrap_or("Command failed");
                format!("✗ Error: {error}")
            },
            None => match self.raw.get("result") {
                Some(Value::String(result)) if !result.is_empty() => {
                    result.clone()
                },
                Some(result) if is_truthy(result) => result.to_string(),
                _ => self.raw.to_string(),
            },
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
