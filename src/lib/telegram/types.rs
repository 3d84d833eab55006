//! The record catalog: every API object this client models, each one a
//! plain struct plus its descriptor table. The decode walker consumes
//! these tables; nothing here contains decoding logic.

use crate::codec::decode::{Decode, Field, Slot};

#[derive(Debug, Default)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
    pub can_join_groups: bool,
    pub can_read_all_group_messages: bool,
    pub supports_inline_queries: bool,
}

impl Decode for User {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Slot::Int(&mut self.id)),
            Field::new("is_bot", Slot::Flag(&mut self.is_bot)),
            Field::new("first_name", Slot::Text(&mut self.first_name)),
            Field::new("last_name", Slot::Text(&mut self.last_name)),
            Field::new("username", Slot::Text(&mut self.username)),
            Field::new("language_code", Slot::Text(&mut self.language_code)),
            Field::new("can_join_groups", Slot::Flag(&mut self.can_join_groups)),
            Field::new(
                "can_read_all_group_messages",
                Slot::Flag(&mut self.can_read_all_group_messages),
            ),
            Field::new(
                "supports_inline_queries",
                Slot::Flag(&mut self.supports_inline_queries),
            ),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Chat {
    pub id: i64,
    /// The API calls this field `type`.
    pub kind: Option<String>,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub invite_link: Option<String>,
    pub pinned_message: Option<Box<Message>>,
    pub slow_mode_delay: i64,
    pub message_auto_delete_time: i64,
}

impl Decode for Chat {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Slot::Int(&mut self.id)),
            Field::new("type", Slot::Text(&mut self.kind)),
            Field::new("title", Slot::Text(&mut self.title)),
            Field::new("username", Slot::Text(&mut self.username)),
            Field::new("first_name", Slot::Text(&mut self.first_name)),
            Field::new("last_name", Slot::Text(&mut self.last_name)),
            Field::new("bio", Slot::Text(&mut self.bio)),
            Field::new("description", Slot::Text(&mut self.description)),
            Field::new("invite_link", Slot::Text(&mut self.invite_link)),
            Field::new("pinned_message", Slot::Record(&mut self.pinned_message)),
            Field::new("slow_mode_delay", Slot::Int(&mut self.slow_mode_delay)),
            Field::new(
                "message_auto_delete_time",
                Slot::Int(&mut self.message_auto_delete_time),
            ),
        ]
    }
}

#[derive(Debug, Default)]
pub struct MessageEntity {
    /// The API calls this field `type`.
    pub kind: Option<String>,
    pub offset: i64,
    pub length: i64,
    pub url: Option<String>,
    pub user: Option<Box<User>>,
    pub language: Option<String>,
}

impl Decode for MessageEntity {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("type", Slot::Text(&mut self.kind)),
            Field::new("offset", Slot::Int(&mut self.offset)),
            Field::new("length", Slot::Int(&mut self.length)),
            Field::new("url", Slot::Text(&mut self.url)),
            Field::new("user", Slot::Record(&mut self.user)),
            Field::new("language", Slot::Text(&mut self.language)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct PhotoSize {
    pub file_id: Option<String>,
    pub file_unique_id: Option<String>,
    pub width: i64,
    pub height: i64,
    pub file_size: i64,
}

impl Decode for PhotoSize {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("file_id", Slot::Text(&mut self.file_id)),
            Field::new("file_unique_id", Slot::Text(&mut self.file_unique_id)),
            Field::new("width", Slot::Int(&mut self.width)),
            Field::new("height", Slot::Int(&mut self.height)),
            Field::new("file_size", Slot::Int(&mut self.file_size)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Audio {
    pub file_id: Option<String>,
    pub file_unique_id: Option<String>,
    pub duration: i64,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: i64,
    pub thumb: Option<Box<PhotoSize>>,
}

impl Decode for Audio {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("file_id", Slot::Text(&mut self.file_id)),
            Field::new("file_unique_id", Slot::Text(&mut self.file_unique_id)),
            Field::new("duration", Slot::Int(&mut self.duration)),
            Field::new("performer", Slot::Text(&mut self.performer)),
            Field::new("title", Slot::Text(&mut self.title)),
            Field::new("file_name", Slot::Text(&mut self.file_name)),
            Field::new("mime_type", Slot::Text(&mut self.mime_type)),
            Field::new("file_size", Slot::Int(&mut self.file_size)),
            Field::new("thumb", Slot::Record(&mut self.thumb)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Document {
    pub file_id: Option<String>,
    pub file_unique_id: Option<String>,
    pub thumb: Option<Box<PhotoSize>>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: i64,
}

impl Decode for Document {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("file_id", Slot::Text(&mut self.file_id)),
            Field::new("file_unique_id", Slot::Text(&mut self.file_unique_id)),
            Field::new("thumb", Slot::Record(&mut self.thumb)),
            Field::new("file_name", Slot::Text(&mut self.file_name)),
            Field::new("mime_type", Slot::Text(&mut self.mime_type)),
            Field::new("file_size", Slot::Int(&mut self.file_size)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Video {
    pub file_id: Option<String>,
    pub file_unique_id: Option<String>,
    pub width: i64,
    pub height: i64,
    pub duration: i64,
    pub thumb: Option<Box<PhotoSize>>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: i64,
}

impl Decode for Video {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("file_id", Slot::Text(&mut self.file_id)),
            Field::new("file_unique_id", Slot::Text(&mut self.file_unique_id)),
            Field::new("width", Slot::Int(&mut self.width)),
            Field::new("height", Slot::Int(&mut self.height)),
            Field::new("duration", Slot::Int(&mut self.duration)),
            Field::new("thumb", Slot::Record(&mut self.thumb)),
            Field::new("file_name", Slot::Text(&mut self.file_name)),
            Field::new("mime_type", Slot::Text(&mut self.mime_type)),
            Field::new("file_size", Slot::Int(&mut self.file_size)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct VideoNote {
    pub file_id: Option<String>,
    pub file_unique_id: Option<String>,
    pub length: i64,
    pub duration: i64,
    pub thumb: Option<Box<PhotoSize>>,
    pub file_size: i64,
}

impl Decode for VideoNote {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("file_id", Slot::Text(&mut self.file_id)),
            Field::new("file_unique_id", Slot::Text(&mut self.file_unique_id)),
            Field::new("length", Slot::Int(&mut self.length)),
            Field::new("duration", Slot::Int(&mut self.duration)),
            Field::new("thumb", Slot::Record(&mut self.thumb)),
            Field::new("file_size", Slot::Int(&mut self.file_size)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Voice {
    pub file_id: Option<String>,
    pub file_unique_id: Option<String>,
    pub duration: i64,
    pub mime_type: Option<String>,
    pub file_size: i64,
}

impl Decode for Voice {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("file_id", Slot::Text(&mut self.file_id)),
            Field::new("file_unique_id", Slot::Text(&mut self.file_unique_id)),
            Field::new("duration", Slot::Int(&mut self.duration)),
            Field::new("mime_type", Slot::Text(&mut self.mime_type)),
            Field::new("file_size", Slot::Int(&mut self.file_size)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Contact {
    pub phone_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_id: i64,
    pub vcard: Option<String>,
}

impl Decode for Contact {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("phone_number", Slot::Text(&mut self.phone_number)),
            Field::new("first_name", Slot::Text(&mut self.first_name)),
            Field::new("last_name", Slot::Text(&mut self.last_name)),
            Field::new("user_id", Slot::Int(&mut self.user_id)),
            Field::new("vcard", Slot::Text(&mut self.vcard)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Dice {
    pub emoji: Option<String>,
    pub value: i64,
}

impl Decode for Dice {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("emoji", Slot::Text(&mut self.emoji)),
            Field::new("value", Slot::Int(&mut self.value)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
    pub horizontal_accuracy: f64,
    pub live_period: i64,
    pub heading: i64,
    pub proximity_alert_radius: i64,
}

impl Decode for Location {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("longitude", Slot::Float(&mut self.longitude)),
            Field::new("latitude", Slot::Float(&mut self.latitude)),
            Field::new(
                "horizontal_accuracy",
                Slot::Float(&mut self.horizontal_accuracy),
            ),
            Field::new("live_period", Slot::Int(&mut self.live_period)),
            Field::new("heading", Slot::Int(&mut self.heading)),
            Field::new(
                "proximity_alert_radius",
                Slot::Int(&mut self.proximity_alert_radius),
            ),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Venue {
    pub location: Option<Box<Location>>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
}

impl Decode for Venue {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("location", Slot::Record(&mut self.location)),
            Field::new("title", Slot::Text(&mut self.title)),
            Field::new("address", Slot::Text(&mut self.address)),
            Field::new("foursquare_id", Slot::Text(&mut self.foursquare_id)),
            Field::new("foursquare_type", Slot::Text(&mut self.foursquare_type)),
            Field::new("google_place_id", Slot::Text(&mut self.google_place_id)),
            Field::new("google_place_type", Slot::Text(&mut self.google_place_type)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct PollOption {
    pub text: Option<String>,
    pub voter_count: i64,
}

impl Decode for PollOption {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("text", Slot::Text(&mut self.text)),
            Field::new("voter_count", Slot::Int(&mut self.voter_count)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Poll {
    pub id: Option<String>,
    pub question: Option<String>,
    pub options: Vec<PollOption>,
    pub total_voter_count: i64,
    pub is_closed: bool,
    pub is_anonymous: bool,
    /// The API calls this field `type`.
    pub kind: Option<String>,
    pub allows_multiple_answers: bool,
    pub correct_option_id: i64,
    pub explanation: Option<String>,
    pub explanation_entities: Vec<MessageEntity>,
    pub open_period: i64,
    pub close_date: i64,
}

impl Decode for Poll {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Slot::Text(&mut self.id)),
            Field::new("question", Slot::Text(&mut self.question)),
            Field::new("options", Slot::Many(&mut self.options)),
            Field::new("total_voter_count", Slot::Int(&mut self.total_voter_count)),
            Field::new("is_closed", Slot::Flag(&mut self.is_closed)),
            Field::new("is_anonymous", Slot::Flag(&mut self.is_anonymous)),
            Field::new("type", Slot::Text(&mut self.kind)),
            Field::new(
                "allows_multiple_answers",
                Slot::Flag(&mut self.allows_multiple_answers),
            ),
            Field::new("correct_option_id", Slot::Int(&mut self.correct_option_id)),
            Field::new("explanation", Slot::Text(&mut self.explanation)),
            Field::new(
                "explanation_entities",
                Slot::Many(&mut self.explanation_entities),
            ),
            Field::new("open_period", Slot::Int(&mut self.open_period)),
            Field::new("close_date", Slot::Int(&mut self.close_date)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct PollAnswer {
    pub poll_id: Option<String>,
    pub user: Option<Box<User>>,
    pub option_ids: Vec<i64>,
}

impl Decode for PollAnswer {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("poll_id", Slot::Text(&mut self.poll_id)),
            Field::new("user", Slot::Record(&mut self.user)),
            Field::new("option_ids", Slot::Ints(&mut self.option_ids)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Invoice {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_parameter: Option<String>,
    pub currency: Option<String>,
    pub total_amount: i64,
}

impl Decode for Invoice {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("title", Slot::Text(&mut self.title)),
            Field::new("description", Slot::Text(&mut self.description)),
            Field::new("start_parameter", Slot::Text(&mut self.start_parameter)),
            Field::new("currency", Slot::Text(&mut self.currency)),
            Field::new("total_amount", Slot::Int(&mut self.total_amount)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct SuccessfulPayment {
    pub currency: Option<String>,
    pub total_amount: i64,
    pub invoice_payload: Option<String>,
    pub shipping_option_id: Option<String>,
    pub telegram_payment_charge_id: Option<String>,
    pub provider_payment_charge_id: Option<String>,
}

impl Decode for SuccessfulPayment {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("currency", Slot::Text(&mut self.currency)),
            Field::new("total_amount", Slot::Int(&mut self.total_amount)),
            Field::new("invoice_payload", Slot::Text(&mut self.invoice_payload)),
            Field::new(
                "shipping_option_id",
                Slot::Text(&mut self.shipping_option_id),
            ),
            Field::new(
                "telegram_payment_charge_id",
                Slot::Text(&mut self.telegram_payment_charge_id),
            ),
            Field::new(
                "provider_payment_charge_id",
                Slot::Text(&mut self.provider_payment_charge_id),
            ),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<Box<User>>,
    pub date: i64,
    pub chat: Option<Box<Chat>>,
    pub forward_from: Option<Box<User>>,
    pub forward_from_chat: Option<Box<Chat>>,
    pub forward_from_message_id: i64,
    pub forward_date: i64,
    pub reply_to_message: Option<Box<Message>>,
    pub via_bot: Option<Box<User>>,
    pub edit_date: i64,
    pub media_group_id: Option<String>,
    pub text: Option<String>,
    pub entities: Vec<MessageEntity>,
    pub audio: Option<Box<Audio>>,
    pub document: Option<Box<Document>>,
    pub photo: Vec<PhotoSize>,
    pub video: Option<Box<Video>>,
    pub video_note: Option<Box<VideoNote>>,
    pub voice: Option<Box<Voice>>,
    pub caption: Option<String>,
    pub caption_entities: Vec<MessageEntity>,
    pub contact: Option<Box<Contact>>,
    pub dice: Option<Box<Dice>>,
    pub poll: Option<Box<Poll>>,
    pub venue: Option<Box<Venue>>,
    pub location: Option<Box<Location>>,
    pub new_chat_members: Vec<User>,
    pub left_chat_member: Option<Box<User>>,
    pub new_chat_title: Option<String>,
    pub new_chat_photo: Vec<PhotoSize>,
    pub delete_chat_photo: bool,
    pub group_chat_created: bool,
    pub supergroup_chat_created: bool,
    pub channel_chat_created: bool,
    pub migrate_to_chat_id: i64,
    pub migrate_from_chat_id: i64,
    pub pinned_message: Option<Box<Message>>,
    pub invoice: Option<Box<Invoice>>,
    pub successful_payment: Option<Box<SuccessfulPayment>>,
    pub connected_website: Option<String>,
}

impl Decode for Message {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("message_id", Slot::Int(&mut self.message_id)),
            Field::new("from", Slot::Record(&mut self.from)),
            Field::new("date", Slot::Int(&mut self.date)),
            Field::new("chat", Slot::Record(&mut self.chat)),
            Field::new("forward_from", Slot::Record(&mut self.forward_from)),
            Field::new(
                "forward_from_chat",
                Slot::Record(&mut self.forward_from_chat),
            ),
            Field::new(
                "forward_from_message_id",
                Slot::Int(&mut self.forward_from_message_id),
            ),
            Field::new("forward_date", Slot::Int(&mut self.forward_date)),
            Field::new("reply_to_message", Slot::Record(&mut self.reply_to_message)),
            Field::new("via_bot", Slot::Record(&mut self.via_bot)),
            Field::new("edit_date", Slot::Int(&mut self.edit_date)),
            Field::new("media_group_id", Slot::Text(&mut self.media_group_id)),
            Field::new("text", Slot::Text(&mut self.text)),
            Field::new("entities", Slot::Many(&mut self.entities)),
            Field::new("audio", Slot::Record(&mut self.audio)),
            Field::new("document", Slot::Record(&mut self.document)),
            Field::new("photo", Slot::Many(&mut self.photo)),
            Field::new("video", Slot::Record(&mut self.video)),
            Field::new("video_note", Slot::Record(&mut self.video_note)),
            Field::new("voice", Slot::Record(&mut self.voice)),
            Field::new("caption", Slot::Text(&mut self.caption)),
            Field::new("caption_entities", Slot::Many(&mut self.caption_entities)),
            Field::new("contact", Slot::Record(&mut self.contact)),
            Field::new("dice", Slot::Record(&mut self.dice)),
            Field::new("poll", Slot::Record(&mut self.poll)),
            Field::new("venue", Slot::Record(&mut self.venue)),
            Field::new("location", Slot::Record(&mut self.location)),
            Field::new("new_chat_members", Slot::Many(&mut self.new_chat_members)),
            Field::new("left_chat_member", Slot::Record(&mut self.left_chat_member)),
            Field::new("new_chat_title", Slot::Text(&mut self.new_chat_title)),
            Field::new("new_chat_photo", Slot::Many(&mut self.new_chat_photo)),
            Field::new("delete_chat_photo", Slot::Flag(&mut self.delete_chat_photo)),
            Field::new(
                "group_chat_created",
                Slot::Flag(&mut self.group_chat_created),
            ),
            Field::new(
                "supergroup_chat_created",
                Slot::Flag(&mut self.supergroup_chat_created),
            ),
            Field::new(
                "channel_chat_created",
                Slot::Flag(&mut self.channel_chat_created),
            ),
            Field::new("migrate_to_chat_id", Slot::Int(&mut self.migrate_to_chat_id)),
            Field::new(
                "migrate_from_chat_id",
                Slot::Int(&mut self.migrate_from_chat_id),
            ),
            Field::new("pinned_message", Slot::Record(&mut self.pinned_message)),
            Field::new("invoice", Slot::Record(&mut self.invoice)),
            Field::new(
                "successful_payment",
                Slot::Record(&mut self.successful_payment),
            ),
            Field::new("connected_website", Slot::Text(&mut self.connected_website)),
        ]
    }
}

impl Message {
    pub fn chat_id(&self) -> i64 {
        self.chat.as_ref().map(|chat| chat.id).unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct CallbackQuery {
    pub id: Option<String>,
    pub from: Option<Box<User>>,
    pub message: Option<Box<Message>>,
    pub inline_message_id: Option<String>,
    pub chat_instance: Option<String>,
    pub data: Option<String>,
    pub game_short_name: Option<String>,
}

impl Decode for CallbackQuery {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Slot::Text(&mut self.id)),
            Field::new("from", Slot::Record(&mut self.from)),
            Field::new("message", Slot::Record(&mut self.message)),
            Field::new("inline_message_id", Slot::Text(&mut self.inline_message_id)),
            Field::new("chat_instance", Slot::Text(&mut self.chat_instance)),
            Field::new("data", Slot::Text(&mut self.data)),
            Field::new("game_short_name", Slot::Text(&mut self.game_short_name)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Box<Message>>,
    pub edited_message: Option<Box<Message>>,
    pub channel_post: Option<Box<Message>>,
    pub edited_channel_post: Option<Box<Message>>,
    pub callback_query: Option<Box<CallbackQuery>>,
    pub poll: Option<Box<Poll>>,
    pub poll_answer: Option<Box<PollAnswer>>,
}

impl Decode for Update {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("update_id", Slot::Int(&mut self.update_id)),
            Field::new("message", Slot::Record(&mut self.message)),
            Field::new("edited_message", Slot::Record(&mut self.edited_message)),
            Field::new("channel_post", Slot::Record(&mut self.channel_post)),
            Field::new(
                "edited_channel_post",
                Slot::Record(&mut self.edited_channel_post),
            ),
            Field::new("callback_query", Slot::Record(&mut self.callback_query)),
            Field::new("poll", Slot::Record(&mut self.poll)),
            Field::new("poll_answer", Slot::Record(&mut self.poll_answer)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct WebhookInfo {
    pub url: Option<String>,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    pub ip_address: Option<String>,
    pub last_error_date: i64,
    pub last_error_message: Option<String>,
    pub max_connections: i64,
}

impl Decode for WebhookInfo {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("url", Slot::Text(&mut self.url)),
            Field::new(
                "has_custom_certificate",
                Slot::Flag(&mut self.has_custom_certificate),
            ),
            Field::new(
                "pending_update_count",
                Slot::Int(&mut self.pending_update_count),
            ),
            Field::new("ip_address", Slot::Text(&mut self.ip_address)),
            Field::new("last_error_date", Slot::Int(&mut self.last_error_date)),
            Field::new(
                "last_error_message",
                Slot::Text(&mut self.last_error_message),
            ),
            Field::new("max_connections", Slot::Int(&mut self.max_connections)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode::decode;
    use crate::codec::envelope::{unwrap_envelope, Payload, Select};
    use serde_json::json;

    #[test]
    fn user_scenario_from_envelope() {
        let body = br#"{"ok":true,"result":{"id":42,"is_bot":true,"first_name":"Bob"}}"#;
        let user: User = match unwrap_envelope(body, Select::Whole).unwrap() {
            Payload::One(value) => decode(&value),
            other => panic!("expected one object, got {:?}", other),
        };
        assert_eq!(user.id, 42);
        assert!(user.is_bot);
        assert_eq!(user.first_name.as_deref(), Some("Bob"));
        assert!(user.last_name.is_none());
        assert!(user.username.is_none());
    }

    #[test]
    fn update_with_nested_message_chain() {
        let update: Update = decode(&json!({
            "update_id": 1001,
            "message": {
                "message_id": 5,
                "date": 1_700_000_000,
                "from": {"id": 9, "is_bot": false, "first_name": "Ann"},
                "chat": {"id": -100123, "type": "supergroup", "title": "den"},
                "text": "hello",
                "entities": [{"type": "bold", "offset": 0, "length": 5}],
                "reply_to_message": {
                    "message_id": 4,
                    "date": 1_699_999_000,
                    "chat": {"id": -100123, "type": "supergroup"},
                    "text": "hi there"
                }
            }
        }));
        assert_eq!(update.update_id, 1001);
        let message = update.message.expect("message decoded");
        assert_eq!(message.chat_id(), -100123);
        assert_eq!(message.text.as_deref(), Some("hello"));
        assert_eq!(message.entities[0].kind.as_deref(), Some("bold"));
        let parent = message.reply_to_message.expect("reply chain decoded");
        assert_eq!(parent.message_id, 4);
        assert_eq!(parent.text.as_deref(), Some("hi there"));
    }

    #[test]
    fn poll_with_options_and_answer() {
        let poll: Poll = decode(&json!({
            "id": "p1",
            "question": "tea?",
            "options": [
                {"text": "yes", "voter_count": 3},
                {"text": "no", "voter_count": 1}
            ],
            "total_voter_count": 4,
            "is_closed": true
        }));
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.options[0].voter_count, 3);
        assert!(poll.is_closed);

        let answer: PollAnswer = decode(&json!({
            "poll_id": "p1",
            "user": {"id": 7, "first_name": "Zed"},
            "option_ids": [0, 2]
        }));
        assert_eq!(answer.option_ids, vec![0, 2]);
        assert_eq!(answer.user.unwrap().id, 7);
    }

    #[test]
    fn media_message_kinds() {
        let message: Message = decode(&json!({
            "message_id": 8,
            "date": 1,
            "chat": {"id": 5, "type": "private"},
            "photo": [
                {"file_id": "small", "width": 90, "height": 90},
                {"file_id": "big", "width": 800, "height": 800}
            ],
            "caption": "look",
            "document": {"file_id": "doc1", "file_name": "a.pdf", "mime_type": "application/pdf"}
        }));
        assert_eq!(message.photo.len(), 2);
        assert_eq!(message.photo[1].file_id.as_deref(), Some("big"));
        assert_eq!(message.document.unwrap().file_name.as_deref(), Some("a.pdf"));
    }

    #[test]
    fn absent_optional_flags_decode_to_false() {
        let user: User = decode(&json!({"id": 1, "first_name": "A"}));
        assert!(!user.is_bot);
        assert!(!user.can_join_groups);
        assert!(!user.supports_inline_queries);
    }

    #[test]
    fn scalars_round_trip_into_request_fields() {
        use crate::codec::encode::ParamList;

        let message: Message = decode(&json!({
            "message_id": 77,
            "date": 1_700_000_100,
            "chat": {"id": 321, "type": "private"},
            "text": "pong"
        }));
        let mut params = ParamList::new();
        params.push_int("chat_id", message.chat_id());
        params.push_text("text", message.text.as_deref());
        params.push_int("reply_to_message_id", 0);
        assert_eq!(
            params.fields(),
            &[("chat_id", "321".to_string()), ("text", "pong".to_string())]
        );
    }
}
