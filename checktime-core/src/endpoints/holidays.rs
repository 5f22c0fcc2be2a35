//! Holiday CRUD against `/holidays/api/*`.

use chrono::NaiveDate;
use serde_json::json;

use crate::client::{ApiClient, ResponseOptions};
use crate::i18n::t;
use crate::models::Holiday;
use crate::request::ApiRequest;
use crate::result::Outcome;

/// Add a single holiday.
pub async fn add(client: &ApiClient, date: NaiveDate, description: &str) -> Outcome {
    let request = ApiRequest::post("/holidays/api/add").json(&json!({
        "date": date,
        "description": description,
    }));
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("holiday_added"))
                .error_message(t("error_saving_holiday")),
        )
        .await
}

/// Add a holiday on every day from `start_date` through `end_date`. The
/// server skips weekends and dates that already hold a holiday and reports
/// the counts in its message.
pub async fn add_range(
    client: &ApiClient,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: &str,
) -> Outcome {
    let request = ApiRequest::post("/holidays/api/add-range").json(&json!({
        "start_date": start_date,
        "end_date": end_date,
        "description": description,
    }));
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("holidays_added"))
                .error_message(t("error_saving_holiday")),
        )
        .await
}

/// Change the description of the holiday on `date`.
pub async fn update(client: &ApiClient, date: NaiveDate, description: &str) -> Outcome {
    let request = ApiRequest::put("/holidays/api/update").json(&json!({
        "date": date,
        "description": description,
    }));
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("holiday_updated"))
                .error_message(t("error_updating_holiday")),
        )
        .await
}

/// Rewrite a holiday record by database id, including its date.
pub async fn edit(client: &ApiClient, holiday: &Holiday) -> Outcome {
    let request = ApiRequest::post("/holidays/api/edit").json(holiday);
    client
        .submit(
            request,
            ResponseOptions::new()
                .success_message(t("holiday_updated"))
                .error_message(t("error_updating_holiday")),
        )
        .await
}

/// Delete a holiday, preferring the id-based endpoint and falling back to
/// the date-based one when the first attempt fails. The fallback is caller
/// policy: each attempt is an independent `submit` with its own notices.
pub async fn delete(client: &ApiClient, id: i64, date: NaiveDate) -> Outcome {
    let options = || {
        ResponseOptions::new()
            .success_message(t("holiday_deleted"))
            .error_message(t("error_deleting_holiday"))
    };

    let by_id = client
        .submit(
            ApiRequest::post("/holidays/api/delete").json(&json!({ "id": id })),
            options(),
        )
        .await;

    match by_id {
        Outcome::Failure(_) => {
            tracing::warn!(id, %date, "id-based delete failed, retrying by date");
            client
                .submit(
                    ApiRequest::delete(format!("/holidays/api/delete/{date}")),
                    options(),
                )
                .await
        }
        success => success,
    }
}
