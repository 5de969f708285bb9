use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use receipt_storage::{
    ReceiptStore,
    dto::receipt::{PointsResponse, ProcessReceiptResponse, ReceiptRequest},
    error::ReceiptError,
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = ReceiptRequest,
    responses(
        (status = 200, description = "Receipt processed, returns the id assigned to it", body = ProcessReceiptResponse),
        (status = 400, description = "The receipt is invalid")
    ),
    tag = "receipts"
)]
pub async fn process_receipt(
    State(store): State<ReceiptStore>,
    payload: Result<Json<ReceiptRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(request) = payload?;
    request.validate()?;

    let record = services::process_receipt(&store, request).await?;

    Ok(Json(ProcessReceiptResponse { id: record.id }).into_response())
}

#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    params(
        ("id" = String, Path, description = "Receipt id returned by the process endpoint")
    ),
    responses(
        (status = 200, description = "Points awarded to the receipt", body = PointsResponse),
        (status = 404, description = "No receipt found for that id")
    ),
    tag = "receipts"
)]
pub async fn get_receipt_points(
    State(store): State<ReceiptStore>,
    path: Result<Path<String>, PathRejection>,
) -> WebResult<Response> {
    // An id that does not even decode as a path segment was never issued
    let Path(id) = path.map_err(|_| ReceiptError::NotFound)?;
    let record = services::get_receipt(&store, &id).await?;

    Ok(Json(PointsResponse {
        points: record.points,
    })
    .into_response())
}
