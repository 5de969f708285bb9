use receipt_storage::{
    ReceiptStore,
    dto::receipt::ReceiptRequest,
    error::{ReceiptError, Result},
    models::{Receipt, ScoreRecord},
    services::points_computation,
};
use uuid::Uuid;

/// Scores a validated receipt and stores the result
pub async fn process_receipt(store: &ReceiptStore, request: ReceiptRequest) -> Result<ScoreRecord> {
    let receipt = Receipt::try_from(request)?;
    let breakdown = points_computation::compute_points(&receipt)?;

    tracing::debug!(
        retailer = %receipt.retailer,
        receipt_total = %receipt.total,
        retailer_name = breakdown.retailer_name,
        round_dollar_total = breakdown.round_dollar_total,
        quarter_multiple_total = breakdown.quarter_multiple_total,
        item_pairs = breakdown.item_pairs,
        item_descriptions = breakdown.item_descriptions,
        odd_purchase_day = breakdown.odd_purchase_day,
        afternoon_purchase = breakdown.afternoon_purchase,
        total = breakdown.total,
        "Computed receipt points"
    );

    let record = store.put(breakdown.total).await;
    let stored = store.len().await;
    tracing::info!(
        id = %record.id,
        points = record.points,
        processed_at = %record.processed_at,
        stored,
        "Stored receipt"
    );

    Ok(record)
}

/// Looks up a stored receipt. Ids that are not UUIDs can never have been issued.
pub async fn get_receipt(store: &ReceiptStore, id: &str) -> Result<ScoreRecord> {
    let id = Uuid::parse_str(id).map_err(|_| ReceiptError::NotFound)?;
    store.get(id).await
}
