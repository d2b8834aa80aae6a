use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::business::Business;
use crate::photo::Photo;
use crate::review::Review;

#[derive(Serialize)]
pub struct UserBusinesses {
    pub businesses: Vec<Business>,
}

#[derive(Serialize)]
pub struct UserReviews {
    pub reviews: Vec<Review>,
}

#[derive(Serialize)]
pub struct UserPhotos {
    pub photos: Vec<Photo>,
}

/// GET /users/{userid}/businesses
pub async fn list_user_businesses(
    State(state): State<AppState>,
    Path(userid): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let businesses = state.stores.businesses.find_by_owner(userid).await?;
    Ok((StatusCode::OK, Json(UserBusinesses { businesses })))
}

/// GET /users/{userid}/reviews
pub async fn list_user_reviews(
    State(state): State<AppState>,
    Path(userid): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let reviews = state.stores.reviews.find_by_user(userid).await?;
    Ok((StatusCode::OK, Json(UserReviews { reviews })))
}

/// GET /users/{userid}/photos
pub async fn list_user_photos(
    State(state): State<AppState>,
    Path(userid): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let photos = state.stores.photos.find_by_user(userid).await?;
    Ok((StatusCode::OK, Json(UserPhotos { photos })))
}
