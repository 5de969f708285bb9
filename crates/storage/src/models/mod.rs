mod amount;
mod receipt;
mod score_record;

pub use amount::Amount;
pub use receipt::{Item, Receipt, parse_purchase_date, parse_purchase_time};
pub use score_record::ScoreRecord;

pub(crate) use amount::AMOUNT_PATTERN;
