use crate::types::generic::GenericResponse;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::Query,
    http::{HeaderMap, StatusCode, Uri},
    Json,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use serde_json::{json, Value};

use super::api_messages::APIMessages;

pub fn payload_analyzer<T>(
    payload_result: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, (StatusCode, Json<GenericResponse>)> {
    let payload = match payload_result {
        Ok(payload) => payload,
        Err(err) => {
            return Err(failure(
                StatusCode::BAD_REQUEST,
                APIMessages::BadRequest,
                json!({ "error": format!("invalid payload: {}", err) }),
            ))
        }
    };

    Ok(payload)
}

pub fn query_analyzer<T>(
    query_result: Result<Query<T>, QueryRejection>,
) -> Result<Query<T>, (StatusCode, Json<GenericResponse>)> {
    match query_result {
        Ok(query) => Ok(query),
        Err(err) => Err(failure(
            StatusCode::BAD_REQUEST,
            APIMessages::BadRequest,
            json!({ "error": format!("invalid query: {}", err) }),
        )),
    }
}

pub async fn fallback(uri: Uri) -> (StatusCode, Json<GenericResponse>) {
    failure(StatusCode::NOT_FOUND, APIMessages::NotFound, json!({ "path": uri.path() }))
}

pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|authorization| authorization.token().to_string())
        .filter(|token| !token.is_empty())
}

pub fn success(message: APIMessages, data: Value) -> (StatusCode, Json<GenericResponse>) {
    (
        StatusCode::OK,
        Json(GenericResponse {
            message: message.to_string(),
            data,
            exit_code: 0,
        }),
    )
}

pub fn failure(status: StatusCode, message: APIMessages, data: Value) -> (StatusCode, Json<GenericResponse>) {
    (
        status,
        Json(GenericResponse {
            message: message.to_string(),
            data,
            exit_code: 1,
        }),
    )
}
