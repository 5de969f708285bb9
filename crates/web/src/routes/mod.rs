use axum::{Router, http::StatusCode, response::IntoResponse};
use receipt_storage::ReceiptStore;

use crate::features::receipts;

pub fn configure(store: ReceiptStore) -> Router {
    Router::new()
        .merge(receipts::routes::routes())
        .fallback(not_implemented)
        .with_state(store)
}

pub async fn not_implemented() -> impl IntoResponse {
    (StatusCode::NOT_IMPLEMENTED, "501 Not Implemented")
}
