//! Aggregation of recorded consumption over an analysis period.

use crate::error::Result;
use crate::store::{Store, UserId};
use crate::utility::Readings;
use chrono::{Datelike, Duration, NaiveDate};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Analysis period picked in the sidebar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
    #[strum(serialize = "All", to_string = "All Time")]
    AllTime,
}

impl Period {
    /// Inclusive date range covered on `today`; `None` means unbounded.
    ///
    /// Weeks start on Monday. Months are calendar months.
    pub fn window(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Period::Daily => Some((today, today)),
            Period::Weekly => {
                let since_monday = today.weekday().num_days_from_monday() as i64;
                Some((today - Duration::days(since_monday), today))
            }
            Period::Monthly => Some((today.with_day(1).unwrap_or(today), today)),
            Period::AllTime => None,
        }
    }

    /// The period after this one, wrapping around.
    pub fn next(&self) -> Period {
        let all: Vec<Period> = Period::iter().collect();
        let idx = all.iter().position(|p| p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Headline totals shown on the home screen.
///
/// Oil, CNG and petrol are tracked but reported only through [`get_totals`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub electricity: f64,
    pub water: f64,
    pub gas: f64,
}

impl From<Readings> for Summary {
    fn from(totals: Readings) -> Self {
        Self {
            electricity: totals.electricity,
            water: totals.water,
            gas: totals.gas,
        }
    }
}

pub fn get_summary(
    store: &Store,
    user_id: UserId,
    period: Period,
    today: NaiveDate,
) -> Result<Summary> {
    Ok(get_totals(store, user_id, period, today)?.into())
}

/// Sums of every utility column for the period.
pub fn get_totals(
    store: &Store,
    user_id: UserId,
    period: Period,
    today: NaiveDate,
) -> Result<Readings> {
    let (from, to) = match period.window(today) {
        Some((from, to)) => (Some(from), Some(to)),
        None => (None, None),
    };
    store.sum_readings(user_id, from, to)
}
