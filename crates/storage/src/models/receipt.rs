use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::Amount;
use crate::dto::receipt::{ItemRequest, ReceiptRequest};
use crate::error::{ReceiptError, Result};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is a valid regex")
});

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern is a valid regex"));

/// A receipt whose fields have all been parsed into their domain types.
///
/// Only constructible from a [`ReceiptRequest`], so holding one means every
/// amount, date and time on it was well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub total: Amount,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

/// Parses a `YYYY-MM-DD` date, requiring zero-padded month and day
pub fn parse_purchase_date(value: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return Err(ReceiptError::InvalidDate(value.to_string()));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ReceiptError::InvalidDate(value.to_string()))
}

/// Parses a 24-hour `HH:MM` time
pub fn parse_purchase_time(value: &str) -> Result<NaiveTime> {
    if !TIME_PATTERN.is_match(value) {
        return Err(ReceiptError::InvalidTime(value.to_string()));
    }

    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ReceiptError::InvalidTime(value.to_string()))
}

impl TryFrom<ReceiptRequest> for Receipt {
    type Error = ReceiptError;

    fn try_from(request: ReceiptRequest) -> Result<Self> {
        let items = request
            .items
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            purchase_date: parse_purchase_date(&request.purchase_date)?,
            purchase_time: parse_purchase_time(&request.purchase_time)?,
            total: request.total.parse()?,
            retailer: request.retailer,
            items,
        })
    }
}

impl TryFrom<ItemRequest> for Item {
    type Error = ReceiptError;

    fn try_from(request: ItemRequest) -> Result<Self> {
        Ok(Self {
            price: request.price.parse()?,
            short_description: request.short_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn request() -> ReceiptRequest {
        ReceiptRequest {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            total: "2.65".to_string(),
            items: vec![
                ItemRequest {
                    short_description: "Pepsi - 12-oz".to_string(),
                    price: "1.25".to_string(),
                },
                ItemRequest {
                    short_description: "Dasani".to_string(),
                    price: "1.40".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_try_from_parses_every_field() {
        let receipt = Receipt::try_from(request()).unwrap();

        assert_eq!(receipt.retailer, "Walgreens");
        assert_eq!(receipt.purchase_date, NaiveDate::from_ymd_opt(2022, 1, 2).unwrap());
        assert_eq!(receipt.purchase_time.hour(), 8);
        assert_eq!(receipt.purchase_time.minute(), 13);
        assert_eq!(receipt.total, "2.65".parse().unwrap());
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[1].short_description, "Dasani");
    }

    #[test]
    fn test_try_from_rejects_bad_item_price() {
        let mut req = request();
        req.items[0].price = "1.2".to_string();

        assert!(matches!(
            Receipt::try_from(req),
            Err(ReceiptError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_purchase_date() {
        assert!(parse_purchase_date("2022-03-20").is_ok());
        assert!(parse_purchase_date("2024-02-29").is_ok());
        assert!(parse_purchase_date("2023-02-29").is_err());
        assert!(parse_purchase_date("2022-13-01").is_err());
        assert!(parse_purchase_date("2022-1-1").is_err());
        assert!(parse_purchase_date("01-01-2022").is_err());
        assert!(parse_purchase_date("2022/01/01").is_err());
    }

    #[test]
    fn test_parse_purchase_time() {
        assert!(parse_purchase_time("00:00").is_ok());
        assert!(parse_purchase_time("23:59").is_ok());
        assert!(parse_purchase_time("24:00").is_err());
        assert!(parse_purchase_time("12:60").is_err());
        assert!(parse_purchase_time("9:30").is_err());
        assert!(parse_purchase_time("2:30 PM").is_err());
        assert!(parse_purchase_time("14:33:00").is_err());
    }
}
