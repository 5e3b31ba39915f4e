//! Recording utility readings entered by the user.

use crate::error::{EcoError, Result};
use crate::store::{Store, UserId};
use crate::utility::Utility;
use chrono::NaiveDate;

/// Parses the text of an entry field as a reading.
///
/// Surrounding whitespace is ignored. NaN and infinities are rejected along
/// with anything that is not a number; negative values are accepted.
pub fn parse_reading(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EcoError::InvalidNumericInput {
            input: trimmed.to_string(),
        }),
    }
}

/// Saves `text` as the user's `utility` reading for `today`.
///
/// The value replaces whatever that utility held in today's record. Invalid
/// input leaves the store untouched.
pub fn record_utility(
    store: &Store,
    user_id: UserId,
    utility: Utility,
    text: &str,
    today: NaiveDate,
) -> Result<f64> {
    let value = parse_reading(text)?;
    store.set_reading(user_id, utility, value, today)?;
    log::info!("User {} recorded {} = {}", user_id, utility, value);
    Ok(value)
}

/// The dedicated electricity entry path.
pub fn record_electricity(
    store: &Store,
    user_id: UserId,
    text: &str,
    today: NaiveDate,
) -> Result<f64> {
    record_utility(store, user_id, Utility::Electricity, text, today)
}
