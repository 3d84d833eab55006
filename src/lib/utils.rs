use crate::Config;
use anyhow::{Context, Result};

use openssl::{
    asn1::Asn1Time,
    bn::{BigNum, MsbOption},
    hash::MessageDigest,
    pkey::PKey,
    rsa::Rsa,
    x509::{X509NameBuilder, X509},
};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

pub async fn get_config(file: &str) -> Result<Config> {
    let toml_str = fs::read_to_string(file)
        .await
        .with_context(|| format!("missing '{file}'"))?;
    let config: Config = toml::from_str(&toml_str)?;
    Ok(config)
}

#[derive(Deserialize)]
struct Ipify {
    ip: String,
}

/// The machine's public ip, as seen from outside. Used as the webhook
/// certificate's common name.
pub async fn get_ip() -> Result<String> {
    let resp: String = reqwest::Client::new()
        .get("https://api.ipify.org?format=json")
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?
        .text()
        .await?;
    let result: Ipify = serde_json::from_str(&resp).context("Failed to get the ip address")?;
    Ok(result.ip)
}

/// Writes a fresh self-signed certificate and key pair for the given
/// ip. The API accepts the public half through `setWebhook` and pins
/// it for webhook delivery.
pub async fn generate_certificate(
    pubkey: &Path,
    privkey: &Path,
    ip: &str,
    name: &str,
) -> Result<()> {
    let rsa = Rsa::generate(2048)?;
    let key_pair = PKey::from_rsa(rsa)?;

    let mut x509_name = X509NameBuilder::new()?;
    x509_name.append_entry_by_text("O", name)?;
    x509_name.append_entry_by_text("CN", ip)?;
    let x509_name = x509_name.build();

    let mut cert_builder = X509::builder()?;
    cert_builder.set_version(2)?;
    let serial_number = {
        let mut serial = BigNum::new()?;
        serial.rand(159, MsbOption::MAYBE_ZERO, false)?;
        serial.to_asn1_integer()?
    };
    cert_builder.set_serial_number(&serial_number)?;
    cert_builder.set_subject_name(&x509_name)?;
    cert_builder.set_issuer_name(&x509_name)?;
    cert_builder.set_pubkey(&key_pair)?;

    let not_before = Asn1Time::days_from_now(0)?;
    cert_builder.set_not_before(&not_before)?;
    let not_after = Asn1Time::days_from_now(365)?;
    cert_builder.set_not_after(&not_after)?;

    cert_builder.sign(&key_pair, MessageDigest::sha256())?;
    let cert = cert_builder.build();

    fs::write(&pubkey, cert.to_pem()?).await?;
    fs::write(&privkey, key_pair.private_key_to_pem_pkcs8()?).await?;

    info!("generated webhook certificate for {ip}");
    Ok(())
}
