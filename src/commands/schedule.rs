use anyhow::{Context, Result};
use checktime_core::endpoints::schedules;
use checktime_core::models::{DaySchedule, SchedulePeriod};
use checktime_core::{ApiClient, Outcome};
use chrono::NaiveDate;
use clap::Subcommand;

use super::{finish, preload_translations};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Create a schedule period
    Add {
        /// Period name (e.g. "Summer hours")
        name: String,
        /// First day the period applies (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day the period applies
        #[arg(long)]
        end: NaiveDate,
        /// Create the period disabled
        #[arg(long)]
        inactive: bool,
    },
    /// Update a schedule period by id
    Update {
        id: i64,
        name: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        #[arg(long)]
        inactive: bool,
    },
    /// Delete a schedule period and its day schedules
    Delete { id: i64 },
    /// Replace a period's day schedules
    SetDays {
        id: i64,
        /// Day specs like "mon=09:00-18:00"; days left out become non-working
        #[arg(required = true)]
        days: Vec<String>,
    },
}

pub async fn run(client: &ApiClient, action: ScheduleAction) -> Result<()> {
    preload_translations(client, &["common", "schedules"]).await;

    match action {
        ScheduleAction::Add {
            name,
            start,
            end,
            inactive,
        } => {
            let period = SchedulePeriod {
                id: None,
                name,
                start_date: start,
                end_date: end,
                is_active: !inactive,
            };
            let outcome = schedules::add(client, &period).await;

            // The server echoes the created record back; point the user at
            // the next step the way the web UI jumps to the day editor.
            if let Outcome::Success(result) = &outcome {
                if let Some(created) = result.field::<SchedulePeriod>("period") {
                    if let Some(id) = created.id {
                        println!("Created period {} ({})", id, created.name);
                        println!();
                        println!("Now set its day schedules, e.g.:");
                        println!(
                            "  checktime-cli schedule set-days {} mon=09:00-18:00 fri=09:00-15:00",
                            id
                        );
                    }
                }
            }
            finish(outcome)
        }
        ScheduleAction::Update {
            id,
            name,
            start,
            end,
            inactive,
        } => {
            let period = SchedulePeriod {
                id: Some(id),
                name,
                start_date: start,
                end_date: end,
                is_active: !inactive,
            };
            finish(schedules::update(client, id, &period).await)
        }
        ScheduleAction::Delete { id } => finish(schedules::delete(client, id).await),
        ScheduleAction::SetDays { id, days } => {
            let days = days
                .iter()
                .map(|spec| parse_day_spec(spec))
                .collect::<Result<Vec<_>>>()?;
            finish(schedules::update_days(client, id, &days).await)
        }
    }
}

/// Parse a day schedule spec like "mon=09:00-18:00".
fn parse_day_spec(spec: &str) -> Result<DaySchedule> {
    let (day, times) = spec
        .split_once('=')
        .with_context(|| format!("Invalid day spec '{}', expected day=HH:MM-HH:MM", spec))?;

    let day_of_week = match day.to_ascii_lowercase().as_str() {
        "mon" | "monday" => 0,
        "tue" | "tuesday" => 1,
        "wed" | "wednesday" => 2,
        "thu" | "thursday" => 3,
        "fri" | "friday" => 4,
        "sat" | "saturday" => 5,
        "sun" | "sunday" => 6,
        other => anyhow::bail!("Unknown day '{}', expected mon..sun", other),
    };

    let (check_in, check_out) = times
        .split_once('-')
        .with_context(|| format!("Invalid times in '{}', expected HH:MM-HH:MM", spec))?;

    Ok(DaySchedule {
        day_of_week,
        check_in_time: check_in.to_string(),
        check_out_time: check_out.to_string(),
    })
}
