use std::sync::Arc;

use axum::Router;
use axum::body::to_bytes;
use axum::http::Request;
use serde_json::Value;
use tower::util::ServiceExt;

use localbiz::api::{AppState, Stores, router};
use localbiz::business::in_memory::InMemoryBusinessStore;
use localbiz::photo::in_memory::InMemoryPhotoStore;
use localbiz::review::in_memory::InMemoryReviewStore;

pub struct TestApp {
    pub businesses: Arc<InMemoryBusinessStore>,
    pub reviews: Arc<InMemoryReviewStore>,
    pub photos: Arc<InMemoryPhotoStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            businesses: Arc::new(InMemoryBusinessStore::new()),
            reviews: Arc::new(InMemoryReviewStore::new()),
            photos: Arc::new(InMemoryPhotoStore::new()),
        }
    }

    pub fn router(&self) -> Router {
        router(AppState::new(Stores {
            businesses: self.businesses.clone(),
            reviews: self.reviews.clone(),
            photos: self.photos.clone(),
        }))
    }

    pub async fn get(&self, path: &str) -> axum::response::Response {
        self.router()
            .oneshot(Request::get(path).body(String::new()).unwrap())
            .await
            .unwrap()
    }

    pub async fn send(&self, method: &str, path: &str, body: Value) -> axum::response::Response {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap();
        self.router().oneshot(req).await.unwrap()
    }
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
