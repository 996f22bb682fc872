use crate::content::progress::{progress_report, Period};
use crate::content::schedule::{day_schedule, weekday_index};
use crate::content::workouts::{featured_programs, filter_workouts, FILTERS};
use crate::entitlement::Entitlement;
use crate::server::AppState;
use crate::types::generic::GenericResponse;
use crate::types::incoming_requests::{ProgressQueryParams, ScheduleQueryParams, WorkoutsQueryParams};
use crate::utilities::api_messages::{APIMessages, ContentMessages, SubscriptionMessages};
use crate::utilities::helpers::{failure, query_analyzer, success};

use axum::extract::{rejection::QueryRejection, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{Local, Utc};
use log::debug;
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;

use super::session::require_account;
use super::Rejection;

// subscriber-only content sits behind an active entitlement
async fn require_entitlement(headers: &HeaderMap, state: &AppState) -> Result<Entitlement, Rejection> {
    let account = require_account(headers, state).await?;

    let entitlement = account
        .entitlement(&state.config.entitlement_policy, Utc::now())
        .unwrap_or(Entitlement::NoSubscription);

    if !entitlement.is_active() {
        debug!("content refused, entitlement is {}", entitlement.state());
        return Err(failure(
            StatusCode::FORBIDDEN,
            APIMessages::Subscription(SubscriptionMessages::Required),
            json!({ "state": entitlement.state() }),
        ));
    }

    Ok(entitlement)
}

pub async fn list_workouts(
    headers: HeaderMap,
    query_result: Result<Query<WorkoutsQueryParams>, QueryRejection>,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    let params = match query_analyzer(query_result) {
        Ok(Query(params)) => params,
        Err((status_code, json)) => return (status_code, json),
    };

    if let Err((status_code, json)) = require_entitlement(&headers, &state).await {
        return (status_code, json);
    }

    success(
        APIMessages::Content(ContentMessages::Found),
        json!({
            "filters": &FILTERS[..],
            "featured": featured_programs(),
            "workouts": filter_workouts(params.filter.as_deref()),
        }),
    )
}

/// `day` counts from Sunday = 0. Without it the server's local weekday is
/// used, so clients in other time zones should always send it.
pub async fn get_schedule(
    headers: HeaderMap,
    query_result: Result<Query<ScheduleQueryParams>, QueryRejection>,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    let params = match query_analyzer(query_result) {
        Ok(Query(params)) => params,
        Err((status_code, json)) => return (status_code, json),
    };

    if let Err((status_code, json)) = require_entitlement(&headers, &state).await {
        return (status_code, json);
    }

    let today = Local::now().date_naive();
    let day = params.day.unwrap_or_else(|| weekday_index(today));

    match day_schedule(day, today) {
        Some(schedule) => success(APIMessages::Content(ContentMessages::Found), json!(schedule)),
        None => failure(
            StatusCode::BAD_REQUEST,
            APIMessages::Content(ContentMessages::InvalidDay),
            json!({ "day": day }),
        ),
    }
}

pub async fn get_progress(
    headers: HeaderMap,
    query_result: Result<Query<ProgressQueryParams>, QueryRejection>,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    let params = match query_analyzer(query_result) {
        Ok(Query(params)) => params,
        Err((status_code, json)) => return (status_code, json),
    };

    let period = match params.period.as_deref().map(Period::from_str) {
        None => Period::Week,
        Some(Ok(period)) => period,
        Some(Err(_)) => {
            return failure(
                StatusCode::BAD_REQUEST,
                APIMessages::Content(ContentMessages::InvalidPeriod),
                json!({ "period": params.period }),
            )
        }
    };

    if let Err((status_code, json)) = require_entitlement(&headers, &state).await {
        return (status_code, json);
    }

    success(
        APIMessages::Content(ContentMessages::Found),
        json!(progress_report(period)),
    )
}
