//! Wire types for the Mercado Pago REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /checkout/preferences`.
#[derive(Debug, Serialize)]
pub(super) struct PreferenceRequestBody<'a> {
    pub items: Vec<PreferenceItem<'a>>,
    pub payer: Payer<'a>,
    pub external_reference: &'a str,
    pub notification_url: String,
    pub back_urls: BackUrls,
    pub auto_return: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct PreferenceItem<'a> {
    pub title: &'a str,
    pub quantity: u32,
    pub currency_id: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

#[derive(Debug, Serialize)]
pub(super) struct Payer<'a> {
    pub identification: Identification<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct Identification<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub number: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct BackUrls {
    pub success: String,
    pub failure: String,
}

/// Response of `POST /checkout/preferences`.
#[derive(Debug, Deserialize)]
pub(super) struct PreferenceResponse {
    pub id: String,
    pub init_point: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Response of `GET /v1/payments/{id}`. Only the status is read.
#[derive(Debug, Deserialize)]
pub(super) struct PaymentResponse {
    pub status: String,
}
