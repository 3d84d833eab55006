use crate::codec::decode::decode;
use crate::telegram::types::Update;
use crate::types::ServerConfig;
use actix_ip_filter::IPFilter;
use actix_web::{post, web, App, HttpResponse, HttpServer, Responder};
use anyhow::{Context, Result};
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, error};
use tracing_actix_web::TracingLogger;

/// Webhook listener. Accepts pushed updates on the configured port,
/// decodes each body through the same descriptor-table walk polling
/// uses, and hands the result to application code over a channel. The
/// decode pass runs entirely on the accepting worker; the channel is
/// the only shared state.
pub struct BotServer {
    config: ServerConfig,
    updates: mpsc::Sender<Update>,
}

/// Telegram's published webhook source ranges, 149.154.160.0/20 and
/// 91.108.4.0/22, as glob patterns.
fn telegram_source_ranges() -> Vec<&'static str> {
    vec![
        "91.108.4.*",
        "91.108.5.*",
        "91.108.6.*",
        "91.108.7.*",
        "149.154.16?.*",
        "149.154.17?.*",
    ]
}

/// Webhook pushes carry one bare Update object, with no `{"ok":…}`
/// envelope around it.
#[post("/")]
async fn receive_update(
    body: web::Bytes,
    queue: web::Data<mpsc::Sender<Update>>,
) -> impl Responder {
    match serde_json::from_slice::<Value>(&body) {
        Ok(value) => {
            let update: Update = decode(&value);
            debug!("webhook update {}", update.update_id);
            if queue.send(update).await.is_err() {
                error!("update queue closed, dropping webhook update");
            }
            HttpResponse::Ok()
        }
        Err(err) => {
            debug!("discarding malformed webhook body: {err}");
            HttpResponse::BadRequest()
        }
    }
}

impl BotServer {
    /// Returns the server and the receiving end of its update queue.
    pub fn new(config: ServerConfig) -> (Self, mpsc::Receiver<Update>) {
        let (updates, queue) = mpsc::channel(64);
        (BotServer { config, updates }, queue)
    }

    pub async fn start(&self) -> Result<()> {
        let queue = self.updates.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(queue.clone()))
                .service(receive_update)
                .wrap(TracingLogger::default())
                .wrap(IPFilter::new().allow(telegram_source_ranges()))
        });

        let bind = format!("{}:{}", self.config.ip, self.config.port);
        let server = match (&self.config.pubkey_path, &self.config.privkey_path) {
            (Some(pubkey), Some(privkey)) => {
                let mut builder = SslAcceptor::mozilla_intermediate(SslMethod::tls())?;
                builder.set_private_key_file(privkey, SslFiletype::PEM)?;
                builder.set_certificate_chain_file(pubkey)?;
                server
                    .bind_openssl(&bind, builder)
                    .with_context(|| format!("could not bind {bind} with TLS"))?
            }
            _ => server
                .bind(&bind)
                .with_context(|| format!("could not bind {bind}"))?,
        };
        server.run().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_rt::test]
    async fn pushed_update_lands_in_the_queue() {
        let (sender, mut queue) = mpsc::channel::<Update>(4);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sender))
                .service(receive_update),
        )
        .await;

        let body = r#"{
            "update_id": 77,
            "message": {
                "message_id": 3,
                "date": 1,
                "chat": {"id": 12, "type": "private"},
                "text": "ping"
            }
        }"#;
        let request = test::TestRequest::post()
            .uri("/")
            .set_payload(body)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let update = queue.recv().await.expect("update queued");
        assert_eq!(update.update_id, 77);
        assert_eq!(
            update.message.unwrap().text.as_deref(),
            Some("ping")
        );
    }

    #[actix_rt::test]
    async fn malformed_body_is_rejected() {
        let (sender, mut queue) = mpsc::channel::<Update>(4);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sender))
                .service(receive_update),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/")
            .set_payload("not json at all")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);
        assert!(queue.try_recv().is_err());
    }
}
