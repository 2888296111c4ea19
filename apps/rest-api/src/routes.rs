//! # Route Handlers
//!
//! Axum router and handlers for the beer endpoints.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Request Handling                                   │
//! │                                                                         │
//! │  POST /beers  {"name": "Skol Beats", ...}                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<CreateBeerDto> ← serde rejects missing/ill-typed fields          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dto.validate() ← empty name/brand, non-positive max → 400             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BeerService::create ← duplicate name, quantity bound → 400            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  201 Created, BeerDto body                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use tracing::debug;

use beerstock_core::StockAction;

use crate::dto::{BeerDto, CreateBeerDto, MessageResponse, QuantityDto};
use crate::error::{ApiError, ErrorCode};
use crate::AppState;

/// Json extractor that reports body rejections (malformed JSON, missing
/// or ill-typed fields) as 400 with the standard error shape, instead of
/// axum's default 422 plain-text response.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(ApiError::new(
                ErrorCode::ValidationError,
                rejection.body_text(),
            )),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/beers", get(find_all).post(create))
        .route("/beers/{id}", get(find_by_id).delete(delete_beer))
        .route("/beers/search/{name}", get(find_by_name))
        .route("/beers/{id}/increment", patch(increment))
        .route("/beers/{id}/decrement", patch(decrement))
        .route("/health", get(health))
        .with_state(state)
}

/// `GET /beers` - lists all registered beers.
async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<BeerDto>>, ApiError> {
    debug!("find_all request");
    let beers = state.service.find_all().await?;
    Ok(Json(beers.into_iter().map(BeerDto::from).collect()))
}

/// `GET /beers/{id}` - finds a beer by id.
async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BeerDto>, ApiError> {
    debug!(id, "find_by_id request");
    let beer = state.service.find_by_id(id).await?;
    Ok(Json(beer.into()))
}

/// `GET /beers/search/{name}` - finds a beer by its exact name.
async fn find_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BeerDto>, ApiError> {
    debug!(name = %name, "find_by_name request");
    let beer = state.service.find_by_name(&name).await?;
    Ok(Json(beer.into()))
}

/// `POST /beers` - registers a new beer. Responds 201 on success.
async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateBeerDto>,
) -> Result<(StatusCode, Json<BeerDto>), ApiError> {
    debug!(name = %body.name, "create request");
    let new_beer = body.validate()?;
    let beer = state.service.create(new_beer).await?;
    Ok((StatusCode::CREATED, Json(beer.into())))
}

/// `PATCH /beers/{id}/increment` - adds stock.
async fn increment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(body): AppJson<QuantityDto>,
) -> Result<Json<BeerDto>, ApiError> {
    debug!(id, quantity = body.quantity, "increment request");
    let delta = body.validate()?;
    let beer = state
        .service
        .update_stock(id, delta, StockAction::Increment)
        .await?;
    Ok(Json(beer.into()))
}

/// `PATCH /beers/{id}/decrement` - removes stock.
async fn decrement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(body): AppJson<QuantityDto>,
) -> Result<Json<BeerDto>, ApiError> {
    debug!(id, quantity = body.quantity, "decrement request");
    let delta = body.validate()?;
    let beer = state
        .service
        .update_stock(id, delta, StockAction::Decrement)
        .await?;
    Ok(Json(beer.into()))
}

/// `DELETE /beers/{id}` - removes a beer, confirming with a message.
async fn delete_beer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(id, "delete request");
    let response = state.service.delete(id).await?;
    Ok(Json(response))
}

/// `GET /health` - liveness check against the database.
async fn health(State(state): State<AppState>) -> StatusCode {
    if state.db.health_check().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
