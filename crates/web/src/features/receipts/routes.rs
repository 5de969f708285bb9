use axum::{
    Router,
    routing::{get, post},
};
use receipt_storage::ReceiptStore;

use super::handlers::{get_receipt_points, process_receipt};
use crate::routes::not_implemented;

pub fn routes() -> Router<ReceiptStore> {
    Router::new()
        .route("/receipts/process", post(process_receipt).fallback(not_implemented))
        .route(
            "/receipts/:id/points",
            get(get_receipt_points).fallback(not_implemented),
        )
}
