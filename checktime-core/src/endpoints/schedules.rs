//! Work schedule period CRUD against `/schedules/api/*`.
//!
//! The server treats these as same-origin AJAX calls, so every request
//! carries the `X-Requested-With` marker header.

use serde_json::json;

use crate::client::{ApiClient, ResponseOptions};
use crate::i18n::t;
use crate::models::{DaySchedule, SchedulePeriod};
use crate::request::ApiRequest;
use crate::result::Outcome;

const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Create a schedule period. On success the response carries the created
/// record under a `period` field, id included.
pub async fn add(client: &ApiClient, period: &SchedulePeriod) -> Outcome {
    let request = ApiRequest::post("/schedules/api/add")
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
        .json(period);
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("period_added"))
                .error_message(t("error_saving_period")),
        )
        .await
}

/// Update a schedule period by id.
pub async fn update(client: &ApiClient, id: i64, period: &SchedulePeriod) -> Outcome {
    let request = ApiRequest::put(format!("/schedules/api/update/{id}"))
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
        .json(period);
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("period_updated"))
                .error_message(t("error_saving_period")),
        )
        .await
}

/// Delete a schedule period and its day schedules.
pub async fn delete(client: &ApiClient, id: i64) -> Outcome {
    let request = ApiRequest::delete(format!("/schedules/api/delete/{id}"))
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1);
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("period_deleted"))
                .error_message(t("error_deleting_period")),
        )
        .await
}

/// Replace a period's day schedules wholesale.
pub async fn update_days(client: &ApiClient, period_id: i64, days: &[DaySchedule]) -> Outcome {
    let request = ApiRequest::post(format!("/schedules/api/days/update/{period_id}"))
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
        .json(&json!({ "days": days }));
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("day_schedules_updated"))
                .error_message(t("error_updating_schedules")),
        )
        .await
}
