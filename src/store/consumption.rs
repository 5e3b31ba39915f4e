//! `consumption` table access.
//!
//! A user has at most one record per entry date. Saving a reading updates the
//! matching column of that day's record, or inserts the record when the day
//! has none yet.

use super::{Store, UserId};
use crate::error::Result;
use crate::utility::{Readings, Utility};
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, Row, params};

#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionRecord {
    pub id: i64,
    pub user_id: UserId,
    pub readings: Readings,
    pub entry_date: NaiveDate,
}

impl ConsumptionRecord {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let mut readings = Readings::default();
        for utility in Utility::all() {
            let value: Option<f64> = row.get(utility.column())?;
            readings.set(utility, value.unwrap_or(0.0));
        }
        Ok(Self {
            id: row.get("id")?,
            user_id: UserId(row.get("user_id")?),
            readings,
            entry_date: row.get("entry_date")?,
        })
    }
}

impl Store {
    /// Sets one utility column of the user's record for `date`, creating the
    /// record with all other columns at zero when there is none.
    ///
    /// Returns the id of the row written.
    pub fn set_reading(
        &self,
        user_id: UserId,
        utility: Utility,
        value: f64,
        date: NaiveDate,
    ) -> Result<i64> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM consumption WHERE user_id = ?1 AND entry_date = ?2
                 ORDER BY id DESC LIMIT 1",
                params![user_id.0, date],
                |row| row.get(0),
            )
            .optional()?;

        let column = utility.column();
        let row_id = match existing {
            Some(id) => {
                tx.execute(
                    &format!("UPDATE consumption SET {} = ?1 WHERE id = ?2", column),
                    params![value, id],
                )?;
                id
            }
            None => {
                tx.execute(
                    &format!(
                        "INSERT INTO consumption (user_id, entry_date, {}) VALUES (?1, ?2, ?3)",
                        column
                    ),
                    params![user_id.0, date, value],
                )?;
                tx.last_insert_rowid()
            }
        };
        tx.commit()?;

        log::debug!(
            "Stored {} = {} for user {} on {} (row {})",
            column,
            value,
            user_id,
            date,
            row_id
        );
        Ok(row_id)
    }

    /// All records of a user, oldest first.
    pub fn records_for_user(&self, user_id: UserId) -> Result<Vec<ConsumptionRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, electricity, water, gas, oil, cng, petrol, entry_date
             FROM consumption WHERE user_id = ?1 ORDER BY id",
        )?;
        let records = stmt
            .query_map(params![user_id.0], ConsumptionRecord::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Column sums over a user's records with `entry_date` in `[from, to]`.
    /// Open bounds are given as `None`. NULL values count as zero.
    pub fn sum_readings(
        &self,
        user_id: UserId,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Readings> {
        let conn = self.connect()?;
        let totals = conn.query_row(
            "SELECT TOTAL(electricity), TOTAL(water), TOTAL(gas),
                    TOTAL(oil), TOTAL(cng), TOTAL(petrol)
             FROM consumption
             WHERE user_id = ?1
               AND (?2 IS NULL OR entry_date >= ?2)
               AND (?3 IS NULL OR entry_date <= ?3)",
            params![user_id.0, from, to],
            |row| {
                Ok(Readings {
                    electricity: row.get(0)?,
                    water: row.get(1)?,
                    gas: row.get(2)?,
                    oil: row.get(3)?,
                    cng: row.get(4)?,
                    petrol: row.get(5)?,
                })
            },
        )?;
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::temp_store;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn first_save_creates_single_row() {
        let (_dir, store) = temp_store();
        let user = UserId(1);
        store.set_reading(user, Utility::Electricity, 123.5, day(2)).unwrap();

        let records = store.records_for_user(user).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].readings.electricity, 123.5);
        assert_eq!(records[0].readings.non_zero(), vec![Utility::Electricity]);
        assert_eq!(records[0].entry_date, day(2));
    }

    #[test]
    fn same_day_saves_share_a_row() {
        let (_dir, store) = temp_store();
        let user = UserId(1);
        let first = store.set_reading(user, Utility::Electricity, 10.0, day(2)).unwrap();
        let second = store.set_reading(user, Utility::Gas, 3.0, day(2)).unwrap();
        assert_eq!(first, second);

        let records = store.records_for_user(user).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].readings.electricity, 10.0);
        assert_eq!(records[0].readings.gas, 3.0);
    }

    #[test]
    fn saving_twice_overwrites() {
        let (_dir, store) = temp_store();
        let user = UserId(1);
        store.set_reading(user, Utility::Water, 50.0, day(2)).unwrap();
        store.set_reading(user, Utility::Water, 20.0, day(2)).unwrap();

        let records = store.records_for_user(user).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].readings.water, 20.0);
    }

    #[test]
    fn other_days_and_users_are_untouched() {
        let (_dir, store) = temp_store();
        store.set_reading(UserId(1), Utility::Gas, 1.0, day(1)).unwrap();
        store.set_reading(UserId(1), Utility::Gas, 2.0, day(2)).unwrap();
        store.set_reading(UserId(2), Utility::Gas, 9.0, day(2)).unwrap();

        let records = store.records_for_user(UserId(1)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].readings.gas, 1.0);
        assert_eq!(records[1].readings.gas, 2.0);
        assert_eq!(store.records_for_user(UserId(2)).unwrap().len(), 1);
    }

    #[test]
    fn null_columns_read_back_as_zero() {
        let (_dir, store) = temp_store();
        store.set_reading(UserId(1), Utility::Cng, 2.5, day(3)).unwrap();
        store
            .connect()
            .unwrap()
            .execute("UPDATE consumption SET water = NULL, petrol = 1.5", [])
            .unwrap();

        let readings = store.records_for_user(UserId(1)).unwrap()[0].readings;
        assert_eq!(readings.water, 0.0);
        assert_eq!(readings.petrol, 1.5);
        assert_eq!(readings.non_zero(), vec![Utility::Cng, Utility::Petrol]);
    }

    #[test]
    fn sums_respect_date_bounds() {
        let (_dir, store) = temp_store();
        let user = UserId(1);
        store.set_reading(user, Utility::Electricity, 1.0, day(1)).unwrap();
        store.set_reading(user, Utility::Electricity, 2.0, day(5)).unwrap();
        store.set_reading(user, Utility::Petrol, 4.0, day(9)).unwrap();

        let all = store.sum_readings(user, None, None).unwrap();
        assert_eq!(all.electricity, 3.0);
        assert_eq!(all.petrol, 4.0);

        let window = store.sum_readings(user, Some(day(2)), Some(day(5))).unwrap();
        assert_eq!(window.electricity, 2.0);
        assert_eq!(window.petrol, 0.0);
    }

    #[test]
    fn sums_for_user_without_rows_are_zero() {
        let (_dir, store) = temp_store();
        assert_eq!(
            store.sum_readings(UserId(7), None, None).unwrap(),
            Readings::default()
        );
    }
}
