use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::info;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::types::{Created, LinksBody, ResourceLinks};
use crate::review::{REVIEW_SCHEMA, Review};

use super::{parse_body, resource_not_found};

/// POST /reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let mut review: Review = parse_body(&body, REVIEW_SCHEMA, "review")?;
    review.id = state.stores.reviews.next_id().await?;

    // a duplicate (userid, businessid) pair surfaces here as a 403
    state.stores.reviews.insert(&review).await?;
    info!("created review {}", review.id);

    Ok((
        StatusCode::CREATED,
        Json(Created {
            id: review.id,
            links: ResourceLinks::review(review.id, review.businessid),
        }),
    ))
}

/// GET /reviews/{id}
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let review = state
        .stores
        .reviews
        .find_by_id(id)
        .await?
        .ok_or_else(|| resource_not_found(format!("/reviews/{}", id)))?;

    Ok((StatusCode::OK, Json(review)))
}

/// PUT /reviews/{id}
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let mut review: Review = parse_body(&body, REVIEW_SCHEMA, "review")?;
    review.id = id;

    // matches only when the stored businessid and userid are unchanged
    if state.stores.reviews.update_matching(id, &review).await? {
        return Ok((
            StatusCode::OK,
            Json(LinksBody {
                links: ResourceLinks::review(id, review.businessid),
            }),
        ));
    }

    match state.stores.reviews.find_by_id(id).await? {
        Some(_) => Err(ApiError::Forbidden(
            "Updated review cannot modify businessid or userid".to_string(),
        )),
        None => Err(resource_not_found(format!("/reviews/{}", id))),
    }
}

/// DELETE /reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.stores.reviews.delete(id).await? {
        return Err(resource_not_found(format!("/reviews/{}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
