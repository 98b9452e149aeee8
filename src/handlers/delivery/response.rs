//! Delivery response DTOs

use serde::Serialize;

use crate::services::DeliveryMatch;

/// One campaign to render
#[derive(Debug, Serialize)]
pub struct DeliveryResponse {
    pub cid: String,
    pub img: String,
    pub cta: String,
}

impl From<DeliveryMatch> for DeliveryResponse {
    fn from(matched: DeliveryMatch) -> Self {
        Self {
            cid: matched.id,
            img: matched.image,
            cta: matched.cta,
        }
    }
}
