use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::{debug, error, warn};
use warmdns_application::use_cases::EntryRequest;
use warmdns_domain::DomainError;

use crate::{
    dto::entries::RandomQuery,
    dto::{AddDomainsRequest, DomainDto, DomainsResponse, MessageResponse, SizeResponse},
    state::AppState,
};

const EXAMPLE_BODY: &str = r#"{"domains":[{"domain":"example.com","type":"A"}]}"#;

type ApiError = (StatusCode, Json<MessageResponse>);

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/domains", get(get_domains).post(add_domains))
        .route("/domains/count", get(count_domains))
        .route("/domains/random", post(add_random_domains))
}

fn error_response(e: DomainError) -> ApiError {
    match e {
        DomainError::UnsupportedRecordType { .. } => (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new(format!(
                "invalid domain in domain list. {}",
                e
            ))),
        ),
        DomainError::InvalidCount(_) => (
            StatusCode::PRECONDITION_FAILED,
            Json(MessageResponse::new(
                "query argument 'count' must be a positive integer > 0",
            )),
        ),
        DomainError::QueueClosed => {
            error!("Refresh queue is closed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(MessageResponse::new("refresh queue unavailable")),
            )
        }
        other => {
            error!(error = %other, "Request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new(other.to_string())),
            )
        }
    }
}

async fn add_domains(
    State(state): State<AppState>,
    payload: Result<Json<AddDomainsRequest>, JsonRejection>,
) -> Result<Json<SizeResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected malformed domain list");
        (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new(format!(
                "invalid request body, expected e.g. {}",
                EXAMPLE_BODY
            ))),
        )
    })?;

    let requests: Vec<EntryRequest> = req.domains.into_iter().map(Into::into).collect();
    let size = state
        .add_entries
        .execute(requests)
        .await
        .map_err(error_response)?;

    Ok(Json(SizeResponse::success(size)))
}

async fn get_domains(State(state): State<AppState>) -> Result<Json<DomainsResponse>, ApiError> {
    let entries = state.get_entries.execute().await.map_err(error_response)?;
    let domains: Vec<DomainDto> = entries.into_iter().map(DomainDto::from).collect();

    debug!(count = domains.len(), "Domains retrieved");
    Ok(Json(DomainsResponse::success(domains)))
}

async fn count_domains(State(state): State<AppState>) -> Result<Json<SizeResponse>, ApiError> {
    let size = state.count_entries.execute().await.map_err(error_response)?;
    Ok(Json(SizeResponse::success(size)))
}

async fn add_random_domains(
    State(state): State<AppState>,
    Query(query): Query<RandomQuery>,
) -> Result<Json<SizeResponse>, ApiError> {
    let count = parse_count(query.count.as_deref())?;
    let size = state
        .load_random
        .execute(count)
        .await
        .map_err(error_response)?;

    Ok(Json(SizeResponse::success(size)))
}

/// Missing or empty means 1. Anything that is not an integer, and any
/// integer below one, is rejected with 412.
fn parse_count(raw: Option<&str>) -> Result<usize, ApiError> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(1);
    };

    let value: i64 = raw.trim().parse().map_err(|_| {
        (
            StatusCode::PRECONDITION_FAILED,
            Json(MessageResponse::new(
                "query argument 'count' must be a positive integer",
            )),
        )
    })?;

    if value < 1 {
        return Err((
            StatusCode::PRECONDITION_FAILED,
            Json(MessageResponse::new(
                "query argument 'count' must be a positive integer > 0",
            )),
        ));
    }

    usize::try_from(value).map_err(|_| {
        (
            StatusCode::PRECONDITION_FAILED,
            Json(MessageResponse::new(
                "query argument 'count' must be a positive integer",
            )),
        )
    })
}
