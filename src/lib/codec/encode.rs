use reqwest::multipart::{Form, Part};

/// Ordered outbound parameter set for one method call. Every push
/// method applies the protocol's omit-default rule: a zero number, a
/// false flag or an absent string is left out of the request entirely,
/// because the API distinguishes "field not sent" from "field sent as
/// 0/false". The flip side, that an intentional zero or false cannot be
/// sent through these parameters, is a protocol-level constraint.
#[derive(Default)]
pub struct ParamList {
    fields: Vec<(&'static str, String)>,
    files: Vec<FilePart>,
}

struct FilePart {
    name: &'static str,
    file_name: String,
    bytes: Vec<u8>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero is the absent sentinel and is omitted.
    pub fn push_int(&mut self, name: &'static str, value: i64) {
        if value != 0 {
            self.fields.push((name, value.to_string()));
        }
    }

    /// Zero is the absent sentinel and is omitted.
    pub fn push_float(&mut self, name: &'static str, value: f64) {
        if value != 0.0 {
            self.fields.push((name, value.to_string()));
        }
    }

    /// False is omitted; true is sent as the literal "true".
    pub fn push_flag(&mut self, name: &'static str, value: bool) {
        if value {
            self.fields.push((name, "true".to_string()));
        }
    }

    pub fn push_text(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.fields.push((name, value.to_string()));
        }
    }

    /// A string sequence sent as one JSON-encoded field, e.g.
    /// `allowed_updates`. An empty sequence is omitted.
    pub fn push_list(&mut self, name: &'static str, values: &[&str]) {
        if !values.is_empty() {
            self.fields.push((name, serde_json::json!(values).to_string()));
        }
    }

    pub fn push_file(&mut self, name: &'static str, file_name: &str, bytes: Vec<u8>) {
        self.files.push(FilePart {
            name,
            file_name: file_name.to_string(),
            bytes,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.files.is_empty()
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Renders the list as a multipart form: scalar parameters become
    /// text fields, files become attachment parts.
    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            form = form.part(file.name, Part::bytes(file.bytes).file_name(file.file_name));
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_default_values_produce_an_empty_list() {
        let mut params = ParamList::new();
        params.push_int("reply_to_message_id", 0);
        params.push_float("latitude", 0.0);
        params.push_flag("disable_notification", false);
        params.push_text("parse_mode", None);
        params.push_list("allowed_updates", &[]);
        assert!(params.is_empty());
    }

    #[test]
    fn send_message_scenario_emits_exactly_two_fields() {
        let mut params = ParamList::new();
        params.push_int("chat_id", 123);
        params.push_text("text", Some("hi"));
        params.push_flag("disable_notification", false);
        params.push_int("reply_to_message_id", 0);
        assert_eq!(
            params.fields(),
            &[("chat_id", "123".to_string()), ("text", "hi".to_string())]
        );
    }

    #[test]
    fn true_flag_is_sent_as_literal_true() {
        let mut params = ParamList::new();
        params.push_flag("drop_pending_updates", true);
        assert_eq!(params.fields(), &[("drop_pending_updates", "true".to_string())]);
    }

    #[test]
    fn list_parameter_is_json_encoded() {
        let mut params = ParamList::new();
        params.push_list("allowed_updates", &["message", "edited_message"]);
        assert_eq!(
            params.fields()[0].1,
            r#"["message","edited_message"]"#.to_string()
        );
    }

    #[test]
    fn order_of_pushes_is_preserved() {
        let mut params = ParamList::new();
        params.push_int("chat_id", 7);
        params.push_text("question", Some("?"));
        params.push_flag("is_anonymous", true);
        let names: Vec<&str> = params.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["chat_id", "question", "is_anonymous"]);
    }

    #[test]
    fn files_count_towards_non_empty() {
        let mut params = ParamList::new();
        params.push_file("document", "notes.txt", b"hello".to_vec());
        assert!(!params.is_empty());
    }
}
