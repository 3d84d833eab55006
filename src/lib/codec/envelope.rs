use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong between issuing a method call and
/// handing its payload to the decoder. `Payload::Exhausted` is
/// deliberately not part of this enum: running past the end of a result
/// batch is an ordinary outcome, not a failure.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("request rejected by the API: {}", description.as_deref().unwrap_or("no description given"))]
    Rejected { description: Option<String> },
    #[error("envelope carries no result payload")]
    MissingPayload,
    #[error("result payload has an unexpected shape")]
    UnexpectedShape,
}

/// Which part of the result payload the caller wants.
#[derive(Debug, Clone, Copy)]
pub enum Select {
    Whole,
    Item(usize),
}

#[derive(Debug)]
pub enum Payload {
    One(Value),
    Many(Vec<Value>),
    /// The requested item lies past the end of the current batch.
    Exhausted,
}

/// Validates the `{"ok": …, "result": …}` envelope and hands back the
/// selected payload. Rejection is decided by the `ok` flag alone; a
/// `description` string is surfaced when the server sent one, but no
/// other companion field is interpreted.
pub fn unwrap_envelope(bytes: &[u8], select: Select) -> Result<Payload, WireError> {
    let mut root: Value = serde_json::from_slice(bytes)?;
    if !root.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        return Err(WireError::Rejected {
            description: root
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned),
        });
    }
    let result = match root.get_mut("result") {
        Some(result) => result.take(),
        None => return Err(WireError::MissingPayload),
    };
    match (result, select) {
        // Indexing applies to batches only; a single object answers any
        // selection.
        (object @ Value::Object(_), _) => Ok(Payload::One(object)),
        (Value::Array(items), Select::Whole) => Ok(Payload::Many(items)),
        (Value::Array(items), Select::Item(index)) => match items.into_iter().nth(index) {
            Some(item) => Ok(Payload::One(item)),
            None => Ok(Payload::Exhausted),
        },
        _ => Err(WireError::UnexpectedShape),
    }
}

/// Envelope check for methods whose result is a bare acknowledgement
/// (`"result": true`): the `ok` flag decides, the result shape is
/// ignored.
pub fn acknowledge(bytes: &[u8]) -> Result<(), WireError> {
    let root: Value = serde_json::from_slice(bytes)?;
    if root.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        Ok(())
    } else {
        Err(WireError::Rejected {
            description: root
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }
}
