use axum::Json;
use serde::Serialize;

use crate::models::UnitPrice;
use crate::services::catalog;

#[derive(Serialize)]
pub struct ServiceResponse {
    id: &'static str,
    display_name: &'static str,
    unit_price: Option<u32>,
    price_label: String,
}

// GET /api/services
pub async fn list_services() -> Json<Vec<ServiceResponse>> {
    let services = catalog::list_services()
        .iter()
        .map(|s| ServiceResponse {
            id: s.id,
            display_name: s.display_name,
            unit_price: match s.unit_price {
                UnitPrice::Fixed(amount) => Some(amount),
                UnitPrice::QuoteRequired => None,
            },
            price_label: s.price_label(),
        })
        .collect();

    Json(services)
}
