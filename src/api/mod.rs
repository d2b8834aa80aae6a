use axum::routing::{get, post};
use axum::{Json, Router, http::StatusCode, http::Uri, response::IntoResponse};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

use crate::business::DynBusinessStore;
use crate::photo::DynPhotoStore;
use crate::review::DynReviewStore;

pub(crate) mod error;
pub(crate) mod handler;
pub(crate) mod types;

use handler::{
    create_business, create_photo, create_review, delete_business, delete_photo, delete_review,
    get_business, get_photo, get_review, list_businesses, list_user_businesses, list_user_photos,
    list_user_reviews, replace_business, update_photo, update_review,
};

#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
}

#[derive(Clone)]
pub struct Stores {
    pub businesses: DynBusinessStore,
    pub reviews: DynReviewStore,
    pub photos: DynPhotoStore,
}

impl AppState {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/businesses", get(list_businesses).post(create_business))
        .route(
            "/businesses/{id}",
            get(get_business)
                .put(replace_business)
                .delete(delete_business),
        )
        .route("/reviews", post(create_review))
        .route(
            "/reviews/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/photos", post(create_photo))
        .route(
            "/photos/{id}",
            get(get_photo).put(update_photo).delete(delete_photo),
        )
        .route("/users/{userid}/businesses", get(list_user_businesses))
        .route("/users/{userid}/reviews", get(list_user_reviews))
        .route("/users/{userid}/photos", get(list_user_photos))
        .fallback(not_found)
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!("web server listening on: {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("Requested resource {} does not exist", uri)
        })),
    )
}
