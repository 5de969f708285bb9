use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{AMOUNT_PATTERN, parse_purchase_date, parse_purchase_time};

/// Letters, digits, ASCII whitespace, hyphen and ampersand
static RETAILER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\t\n\x0C\r &-]+$").expect("retailer pattern is a valid regex")
});

/// Request payload for processing a receipt
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    /// Name of the retailer or store the receipt is from
    #[schema(example = "M&M Corner Market")]
    #[validate(custom(function = "validate_retailer"))]
    pub retailer: String,

    /// Date of the purchase, `YYYY-MM-DD`
    #[schema(example = "2022-01-01")]
    #[validate(custom(function = "validate_purchase_date"))]
    pub purchase_date: String,

    /// Time of the purchase, 24-hour `HH:MM`
    #[schema(example = "13:01")]
    #[validate(custom(function = "validate_purchase_time"))]
    pub purchase_time: String,

    /// Total amount paid
    #[schema(example = "6.49")]
    #[validate(custom(function = "validate_amount"))]
    pub total: String,

    #[validate(length(min = 1, message = "A receipt needs at least one item"))]
    #[validate(nested)]
    pub items: Vec<ItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    /// Short product description for the item
    #[schema(example = "Mountain Dew 12PK")]
    #[validate(length(min = 1, message = "Short description is required"))]
    pub short_description: String,

    /// Total price paid for this item
    #[schema(example = "6.49")]
    #[validate(custom(function = "validate_amount"))]
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessReceiptResponse {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    pub points: u64,
}

// Validation helpers
fn validate_retailer(retailer: &str) -> Result<(), ValidationError> {
    if RETAILER_PATTERN.is_match(retailer) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_retailer"))
    }
}

fn validate_amount(amount: &str) -> Result<(), ValidationError> {
    if AMOUNT_PATTERN.is_match(amount) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_amount"))
    }
}

fn validate_purchase_date(date: &str) -> Result<(), ValidationError> {
    parse_purchase_date(date)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_purchase_date"))
}

fn validate_purchase_time(time: &str) -> Result<(), ValidationError> {
    parse_purchase_time(time)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_purchase_time"))
}
