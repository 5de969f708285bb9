use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{ReceiptError, Result};
use crate::models::{Amount, Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Awarded window is 14:00 inclusive to 16:00 exclusive
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

/// Share of an item's price awarded when its description length is a multiple of three
const DESCRIPTION_PRICE_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Points earned by a receipt, one field per rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
    pub total: u64,
}

/// Computes the points for a receipt.
///
/// Fails only when the sum cannot be represented, which takes an item price
/// in the tens of quintillions.
pub fn compute_points(receipt: &Receipt) -> Result<PointsBreakdown> {
    let mut breakdown = PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(&receipt.total),
        quarter_multiple_total: quarter_multiple_points(&receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: item_description_points(&receipt.items)?,
        odd_purchase_day: odd_day_points(receipt.purchase_date),
        afternoon_purchase: afternoon_points(receipt.purchase_time),
        total: 0,
    };

    breakdown.total = [
        breakdown.retailer_name,
        breakdown.round_dollar_total,
        breakdown.quarter_multiple_total,
        breakdown.item_pairs,
        breakdown.item_descriptions,
        breakdown.odd_purchase_day,
        breakdown.afternoon_purchase,
    ]
    .into_iter()
    .try_fold(0u64, u64::checked_add)
    .ok_or(ReceiptError::PointsOverflow)?;

    Ok(breakdown)
}

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: &Amount) -> u64 {
    if total.is_whole() { ROUND_DOLLAR_POINTS } else { 0 }
}

fn quarter_multiple_points(total: &Amount) -> u64 {
    if total.is_multiple_of_quarter() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

fn item_description_points(items: &[Item]) -> Result<u64> {
    items.iter().try_fold(0u64, |acc, item| {
        acc.checked_add(single_item_description_points(item)?)
            .ok_or(ReceiptError::PointsOverflow)
    })
}

// An empty trimmed description has length 0, which counts as a multiple of 3.
fn single_item_description_points(item: &Item) -> Result<u64> {
    let description_len = item.short_description.trim().chars().count();
    if description_len % 3 != 0 {
        return Ok(0);
    }

    item.price
        .ceil_mul(DESCRIPTION_PRICE_RATE)
        .ok_or(ReceiptError::PointsOverflow)
}

fn odd_day_points(purchase_date: NaiveDate) -> u64 {
    if purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(purchase_time: NaiveTime) -> u64 {
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&purchase_time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}
