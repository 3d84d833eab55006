use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct InlineButton {
    pub text: String,
    pub url: Option<String>,
    pub callback_data: Option<String>,
    pub switch_inline_query: Option<String>,
}

impl InlineButton {
    pub fn callback(text: &str, data: &str) -> Self {
        InlineButton {
            text: text.to_string(),
            callback_data: Some(data.to_string()),
            ..Default::default()
        }
    }

    pub fn link(text: &str, url: &str) -> Self {
        InlineButton {
            text: text.to_string(),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardButton {
    pub text: String,
    pub request_contact: bool,
    pub request_location: bool,
}

impl KeyboardButton {
    pub fn text(text: &str) -> Self {
        KeyboardButton {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

/// The four mutually exclusive keyboard attachments a message can
/// carry. Exactly one variant goes out per send, as the single
/// `reply_markup` field, so a tag/value mismatch cannot be expressed.
/// The inline and reply keyboards hold a flat button list plus a row
/// layout of row widths; buttons left over once the layout is used up
/// form one final row.
#[derive(Debug, Clone)]
pub enum ReplyMarkup {
    Inline {
        buttons: Vec<InlineButton>,
        rows: Vec<usize>,
    },
    Keyboard {
        buttons: Vec<KeyboardButton>,
        rows: Vec<usize>,
        resize: bool,
        one_time: bool,
    },
    Remove {
        selective: bool,
    },
    ForceReply {
        selective: bool,
    },
}

impl ReplyMarkup {
    /// Compact JSON text for the `reply_markup` request field. The
    /// field value is itself a JSON document nested inside the
    /// multipart form.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    fn to_value(&self) -> Value {
        match self {
            ReplyMarkup::Inline { buttons, rows } => {
                let rows: Vec<Value> = partition(buttons, rows)
                    .into_iter()
                    .map(|row| row.iter().map(inline_button).collect())
                    .collect();
                Value::Object(Map::from_iter([(
                    "inline_keyboard".to_string(),
                    Value::Array(rows),
                )]))
            }
            ReplyMarkup::Keyboard {
                buttons,
                rows,
                resize,
                one_time,
            } => {
                let rows: Vec<Value> = partition(buttons, rows)
                    .into_iter()
                    .map(|row| row.iter().map(keyboard_button).collect())
                    .collect();
                let mut object = Map::new();
                object.insert("keyboard".to_string(), Value::Array(rows));
                if *resize {
                    object.insert("resize_keyboard".to_string(), Value::Bool(true));
                }
                if *one_time {
                    object.insert("one_time_keyboard".to_string(), Value::Bool(true));
                }
                Value::Object(object)
            }
            ReplyMarkup::Remove { selective } => fixed_pair("remove_keyboard", *selective),
            ReplyMarkup::ForceReply { selective } => fixed_pair("force_reply", *selective),
        }
    }
}

fn fixed_pair(tag: &str, selective: bool) -> Value {
    let mut object = Map::new();
    object.insert(tag.to_string(), Value::Bool(true));
    if selective {
        object.insert("selective".to_string(), Value::Bool(true));
    }
    Value::Object(object)
}

fn inline_button(button: &InlineButton) -> Value {
    let mut object = Map::new();
    object.insert("text".to_string(), Value::String(button.text.clone()));
    if let Some(url) = &button.url {
        object.insert("url".to_string(), Value::String(url.clone()));
    }
    if let Some(data) = &button.callback_data {
        object.insert("callback_data".to_string(), Value::String(data.clone()));
    }
    if let Some(query) = &button.switch_inline_query {
        object.insert(
            "switch_inline_query".to_string(),
            Value::String(query.clone()),
        );
    }
    Value::Object(object)
}

fn keyboard_button(button: &KeyboardButton) -> Value {
    let mut object = Map::new();
    object.insert("text".to_string(), Value::String(button.text.clone()));
    if button.request_contact {
        object.insert("request_contact".to_string(), Value::Bool(true));
    }
    if button.request_location {
        object.insert("request_location".to_string(), Value::Bool(true));
    }
    Value::Object(object)
}

/// Splits a flat button list into visual rows by the given row widths.
/// Leftover buttons form one final row; an empty layout means a single
/// row with everything; layout entries past the last button are unused.
/// No button is ever dropped.
fn partition<'a, T>(buttons: &'a [T], rows: &[usize]) -> Vec<&'a [T]> {
    let mut out = Vec::new();
    let mut rest = buttons;
    for &width in rows {
        if rest.is_empty() {
            break;
        }
        if width == 0 {
            continue;
        }
        let (row, tail) = rest.split_at(width.min(rest.len()));
        out.push(row);
        rest = tail;
    }
    if !rest.is_empty() {
        out.push(rest);
    }
    out
}
