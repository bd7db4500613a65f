use model_sidebar::{ConsoleKey, DeckId};

/// One line of harness input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScriptLine {
    /// Named backend message with its JSON payload.
    Backend { name: String, payload: String },
    /// Backend reply to a console command.
    Reply(serde_json::Value),
    /// Text typed into the console and submitted.
    Submit(String),
    Key(ConsoleKey),
    Deck(Option<DeckId>),
    /// Command line sent to the backend as is, bypassing the console.
    Raw(String),
    Close,
    Transcript,
    State,
    Blank,
}

/// Parse one input line.
///
/// Backend messages are `<event name> <json>`, console input starts with
/// `>`, and harness commands start with `:`.
pub(crate) fn parse_line(line: &str) -> Result<ScriptLine, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ScriptLine::Blank);
    }

    if let Some(input) = line.strip_prefix('>') {
        return Ok(ScriptLine::Submit(input.trim().to_string()));
    }

    if let Some(command) = line.strip_prefix(':') {
        return parse_command(command.trim());
    }

    let (name, payload) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("missing payload: {line}"))?;
    if name == "reply" {
        let value = serde_json::from_str(payload.trim())
            .map_err(|err| format!("invalid reply: {err}"))?;
        return Ok(ScriptLine::Reply(value));
    }

    Ok(ScriptLine::Backend {
        name: name.to_string(),
        payload: payload.trim().to_string(),
    })
}

fn parse_command(command: &str) -> Result<ScriptLine, String> {
    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, Some(argument.trim())),
        None => (command, None),
    };

    match (name, argument) {
        ("up", None) => Ok(ScriptLine::Key(ConsoleKey::ArrowUp)),
        ("down", None) => Ok(ScriptLine::Key(ConsoleKey::ArrowDown)),
        ("enter", None) => Ok(ScriptLine::Key(ConsoleKey::Enter)),
        ("close", None) => Ok(ScriptLine::Close),
        ("log", None) => Ok(ScriptLine::Transcript),
        ("state", None) => Ok(ScriptLine::State),
        ("deck", None) => Ok(ScriptLine::Deck(None)),
        ("deck", Some(id)) => DeckId::from_id(id)
            .map(|deck| ScriptLine::Deck(Some(deck)))
            .ok_or_else(|| format!("unknown deck: {id}")),
        ("raw", Some(text)) if !text.is_empty() => {
            Ok(ScriptLine::Raw(text.to_string()))
        },
        _ => Err(format!("unknown command: :{command}")),
    }
}
