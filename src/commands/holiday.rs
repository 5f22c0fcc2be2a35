use anyhow::Result;
use checktime_core::endpoints::holidays;
use checktime_core::i18n;
use checktime_core::models::Holiday;
use checktime_core::ApiClient;
use chrono::NaiveDate;
use clap::Subcommand;

use super::{finish, preload_translations};

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Add a holiday on a date
    Add {
        /// Holiday date (YYYY-MM-DD)
        date: NaiveDate,
        /// Human-readable description
        description: String,
    },
    /// Add a holiday on every day in a date range; the server skips weekends
    AddRange {
        /// First day of the range (YYYY-MM-DD)
        start: NaiveDate,
        /// Last day of the range
        end: NaiveDate,
        description: String,
    },
    /// Change the description of the holiday on a date
    Update {
        date: NaiveDate,
        description: String,
    },
    /// Rewrite a holiday record by database id
    Edit {
        id: i64,
        date: NaiveDate,
        description: String,
    },
    /// Delete a holiday; retries by date when the id-based delete fails
    Delete { id: i64, date: NaiveDate },
}

pub async fn run(client: &ApiClient, action: HolidayAction) -> Result<()> {
    preload_translations(client, &["common", "holidays"]).await;

    let outcome = match action {
        HolidayAction::Add { date, description } => {
            holidays::add(client, date, &description).await
        }
        HolidayAction::AddRange {
            start,
            end,
            description,
        } => {
            validate_range(start, end)?;
            holidays::add_range(client, start, end, &description).await
        }
        HolidayAction::Update { date, description } => {
            holidays::update(client, date, &description).await
        }
        HolidayAction::Edit {
            id,
            date,
            description,
        } => {
            let holiday = Holiday {
                id: Some(id),
                date,
                description,
            };
            holidays::edit(client, &holiday).await
        }
        HolidayAction::Delete { id, date } => holidays::delete(client, id, date).await,
    };

    finish(outcome)
}

/// Reject ranges that end before they start, before anything hits the wire.
fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        anyhow::bail!(i18n::translate_or(
            "end_date_after_start",
            "End date must be on or after the start date"
        ));
    }
    Ok(())
}
