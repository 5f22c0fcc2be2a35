//! Day override CRUD against `/api/overrides`.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ResponseOptions};
use crate::error::CheckTimeResult;
use crate::i18n::t;
use crate::models::DayOverride;
use crate::request::ApiRequest;
use crate::result::Outcome;

/// Create an override for `day_override.date`.
pub async fn create(client: &ApiClient, day_override: &DayOverride) -> Outcome {
    let request = ApiRequest::post("/api/overrides").json(day_override);
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("override_created"))
                .error_message(t("error_creating_override")),
        )
        .await
}

#[derive(Debug, Deserialize)]
struct OverrideEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(rename = "override")]
    day_override: Option<DayOverride>,
}

/// Look up the override stored for a date, if any.
///
/// This is a silent lookup: it bypasses the notification machinery and
/// surfaces transport problems as errors for the caller to handle.
pub async fn fetch(client: &ApiClient, date: NaiveDate) -> CheckTimeResult<Option<DayOverride>> {
    let url = client.base_url().join(&format!("/api/overrides/{date}"))?;
    let envelope: OverrideEnvelope = client.http().get(url).send().await?.json().await?;
    if envelope.success {
        Ok(envelope.day_override)
    } else {
        Ok(None)
    }
}

/// Update the override on `day_override.date`. The date travels in the path,
/// not the body.
pub async fn update(client: &ApiClient, day_override: &DayOverride) -> Outcome {
    let request = ApiRequest::put(format!("/api/overrides/{}", day_override.date)).json(&json!({
        "check_in_time": day_override.check_in_time,
        "check_out_time": day_override.check_out_time,
        "description": day_override.description,
        "is_day_off": day_override.is_day_off,
    }));
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("override_updated"))
                .error_message(t("error_updating_override")),
        )
        .await
}

/// Delete the override on a date.
pub async fn delete(client: &ApiClient, date: NaiveDate) -> Outcome {
    client
        .submit(
            ApiRequest::delete(format!("/api/overrides/{date}")),
            ResponseOptions::new()
                .success_message(t("override_deleted"))
                .error_message(t("error_deleting_override")),
        )
        .await
}
