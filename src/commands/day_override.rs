use anyhow::Result;
use checktime_core::endpoints::overrides;
use checktime_core::models::DayOverride;
use checktime_core::ApiClient;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::{finish, preload_translations};

#[derive(Args)]
pub struct OverrideFields {
    /// Date the override applies to (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Check-in time (HH:MM)
    #[arg(long)]
    pub check_in: Option<String>,

    /// Check-out time (HH:MM)
    #[arg(long)]
    pub check_out: Option<String>,

    /// Reason for the override
    #[arg(long, default_value = "")]
    pub description: String,

    /// Mark the whole day as off
    #[arg(long)]
    pub day_off: bool,
}

impl From<OverrideFields> for DayOverride {
    fn from(fields: OverrideFields) -> Self {
        DayOverride {
            date: fields.date,
            check_in_time: fields.check_in,
            check_out_time: fields.check_out,
            description: fields.description,
            is_day_off: fields.day_off,
        }
    }
}

#[derive(Subcommand)]
pub enum OverrideAction {
    /// Create an override for a date
    Create(OverrideFields),
    /// Show the override stored for a date
    Show { date: NaiveDate },
    /// Update the override on a date
    Update(OverrideFields),
    /// Delete the override on a date
    Delete { date: NaiveDate },
}

pub async fn run(client: &ApiClient, action: OverrideAction) -> Result<()> {
    preload_translations(client, &["common", "dashboard"]).await;

    match action {
        OverrideAction::Create(fields) => {
            finish(overrides::create(client, &fields.into()).await)
        }
        OverrideAction::Show { date } => {
            match overrides::fetch(client, date).await? {
                Some(stored) => {
                    if stored.is_day_off {
                        println!("{}: day off", date);
                    } else {
                        println!(
                            "{}: {} - {}",
                            date,
                            stored.check_in_time.as_deref().unwrap_or("--:--"),
                            stored.check_out_time.as_deref().unwrap_or("--:--"),
                        );
                    }
                    if !stored.description.is_empty() {
                        println!("  {}", stored.description);
                    }
                }
                None => println!("No override stored for {}", date),
            }
            Ok(())
        }
        OverrideAction::Update(fields) => {
            finish(overrides::update(client, &fields.into()).await)
        }
        OverrideAction::Delete { date } => finish(overrides::delete(client, date).await),
    }
}
