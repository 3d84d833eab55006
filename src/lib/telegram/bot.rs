use std::time::Duration;

use crate::codec::decode::{decode, Decode};
use crate::codec::encode::ParamList;
use crate::codec::envelope::{acknowledge, unwrap_envelope, Payload, Select, WireError};
use crate::codec::markup::ReplyMarkup;
use crate::telegram::types::{Message, Update, User, WebhookInfo};
use crate::types::{BotConfig, UpdateHandler};
use tracing::{debug, error};

pub struct TelegramBot {
    client: reqwest::Client,
    config: BotConfig,
}

/// Optional parameters of `send_message`. The zero/false defaults stand
/// for "not sent": the wire protocol cannot carry an explicit zero or
/// false for these fields.
#[derive(Default)]
pub struct MessageOptions {
    pub parse_mode: Option<String>,
    pub disable_web_page_preview: bool,
    pub disable_notification: bool,
    pub reply_to_message_id: i64,
    pub reply_markup: Option<ReplyMarkup>,
}

impl TelegramBot {
    pub fn new(config: BotConfig) -> Self {
        TelegramBot {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn get_token(&self) -> &str {
        &self.config.token
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_root, self.config.token, method
        )
    }

    /// One blocking-from-the-caller's-view transport round trip: POST
    /// the parameter list as a multipart form, hand back the raw body.
    /// The envelope check decides success; a non-2xx status is only
    /// worth a log line here.
    async fn call(&self, method: &str, params: ParamList) -> Result<Vec<u8>, WireError> {
        let mut request = self.client.post(self.method_url(method));
        if !params.is_empty() {
            request = request.multipart(params.into_form());
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("answer from server: {}", status);
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn call_for_record<T: Decode>(
        &self,
        method: &str,
        params: ParamList,
    ) -> Result<T, WireError> {
        let body = self.call(method, params).await?;
        match unwrap_envelope(&body, Select::Whole)? {
            Payload::One(value) => Ok(decode(&value)),
            _ => Err(WireError::UnexpectedShape),
        }
    }

    pub async fn get_me(&self) -> Result<User, WireError> {
        self.call_for_record("getMe", ParamList::new()).await
    }

    /// Long-polls `getUpdates` and decodes the returned batch. The
    /// batch is walked element by element through the same descriptor
    /// table single-object decoding uses; walking ends when the
    /// envelope reports the index exhausted.
    pub async fn get_updates(
        &self,
        offset: i64,
        limit: i64,
        timeout: i64,
    ) -> Result<Vec<Update>, WireError> {
        let mut params = ParamList::new();
        params.push_int("offset", offset);
        params.push_int("limit", limit);
        params.push_int("timeout", timeout);
        let body = self.call("getUpdates", params).await?;

        let mut updates = Vec::new();
        for index in 0usize.. {
            match unwrap_envelope(&body, Select::Item(index))? {
                Payload::One(value) => updates.push(decode(&value)),
                Payload::Exhausted => break,
                Payload::Many(_) => return Err(WireError::UnexpectedShape),
            }
        }
        Ok(updates)
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        options: &MessageOptions,
    ) -> Result<Message, WireError> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("text", Some(text));
        params.push_text("parse_mode", options.parse_mode.as_deref());
        params.push_flag(
            "disable_web_page_preview",
            options.disable_web_page_preview,
        );
        params.push_flag("disable_notification", options.disable_notification);
        params.push_int("reply_to_message_id", options.reply_to_message_id);
        let markup = options.reply_markup.as_ref().map(ReplyMarkup::to_json);
        params.push_text("reply_markup", markup.as_deref());
        self.call_for_record("sendMessage", params).await
    }

    pub async fn send_document(
        &self,
        chat_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<Message, WireError> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("caption", caption);
        params.push_file("document", file_name, bytes);
        self.call_for_record("sendDocument", params).await
    }

    pub async fn send_poll(
        &self,
        chat_id: i64,
        question: &str,
        options: &[&str],
        allows_multiple_answers: bool,
    ) -> Result<Message, WireError> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("question", Some(question));
        params.push_list("options", options);
        params.push_flag("allows_multiple_answers", allows_multiple_answers);
        self.call_for_record("sendPoll", params).await
    }

    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<(), WireError> {
        let mut params = ParamList::new();
        params.push_text("callback_query_id", Some(callback_query_id));
        params.push_text("text", text);
        params.push_flag("show_alert", show_alert);
        let body = self.call("answerCallbackQuery", params).await?;
        acknowledge(&body)
    }

    /// Registers the webhook endpoint. A self-signed certificate, when
    /// given, is uploaded alongside so the API can pin it.
    pub async fn set_webhook(
        &self,
        url: &str,
        certificate: Option<Vec<u8>>,
        allowed_updates: &[&str],
        drop_pending_updates: bool,
    ) -> Result<(), WireError> {
        let mut params = ParamList::new();
        params.push_text("url", Some(url));
        params.push_list("allowed_updates", allowed_updates);
        params.push_flag("drop_pending_updates", drop_pending_updates);
        if let Some(certificate) = certificate {
            params.push_file("certificate", "cert.pem", certificate);
        }
        let body = self.call("setWebhook", params).await?;
        acknowledge(&body)
    }

    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<(), WireError> {
        let mut params = ParamList::new();
        params.push_flag("drop_pending_updates", drop_pending_updates);
        let body = self.call("deleteWebhook", params).await?;
        acknowledge(&body)
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo, WireError> {
        self.call_for_record("getWebhookInfo", ParamList::new()).await
    }

    /// Checks whether the registered webhook matches the given ip and
    /// carries our own certificate.
    pub async fn is_webhook_configured(&self, ip: &str) -> Result<bool, WireError> {
        let info = self.get_webhook_info().await?;
        match info.ip_address {
            Some(ip_addr) => {
                let state = ip_addr == ip && info.has_custom_certificate;
                debug!("webhook configured == {state}");
                Ok(state)
            }
            None => Ok(false),
        }
    }

    /// The polling loop: fetch a batch, hand every update to the
    /// handler, advance the offset past the highest update id seen.
    /// Failed calls are logged and retried after a pause; handler
    /// errors never stop the loop.
    pub async fn poll_updates(&self, handler: &dyn UpdateHandler) {
        let mut offset = 0i64;
        loop {
            match self.get_updates(offset, 100, 30).await {
                Ok(updates) => {
                    for update in updates {
                        offset = offset.max(update.update_id + 1);
                        if let Err(err) = handler.handle_update(update).await {
                            error!("update handler failed: {err:#}");
                        }
                    }
                }
                Err(err) => {
                    error!("polling getUpdates failed: {err}");
                    tokio::time::sleep(Duration::from_secs(3)).await;
                }
            }
        }
    }
}
