use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::info;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::types::{Created, LinksBody, ResourceLinks};
use crate::photo::{PHOTO_SCHEMA, Photo};

use super::{parse_body, resource_not_found};

/// POST /photos
pub async fn create_photo(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let mut photo: Photo = parse_body(&body, PHOTO_SCHEMA, "photo")?;
    photo.id = state.stores.photos.next_id().await?;

    state.stores.photos.insert(&photo).await?;
    info!("created photo {}", photo.id);

    Ok((
        StatusCode::CREATED,
        Json(Created {
            id: photo.id,
            links: ResourceLinks::photo(photo.id, photo.businessid),
        }),
    ))
}

/// GET /photos/{id}
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let photo = state
        .stores
        .photos
        .find_by_id(id)
        .await?
        .ok_or_else(|| resource_not_found(format!("/photos/{}", id)))?;

    Ok((StatusCode::OK, Json(photo)))
}

/// PUT /photos/{id}
pub async fn update_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let mut photo: Photo = parse_body(&body, PHOTO_SCHEMA, "photo")?;
    photo.id = id;

    // matches only when the stored businessid and userid are unchanged
    if state.stores.photos.update_matching(id, &photo).await? {
        return Ok((
            StatusCode::OK,
            Json(LinksBody {
                links: ResourceLinks::photo(id, photo.businessid),
            }),
        ));
    }

    match state.stores.photos.find_by_id(id).await? {
        Some(_) => Err(ApiError::Forbidden(
            "Updated photo cannot modify businessid or userid".to_string(),
        )),
        None => Err(resource_not_found(format!("/photos/{}", id))),
    }
}

/// DELETE /photos/{id}
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.stores.photos.delete(id).await? {
        return Err(resource_not_found(format!("/photos/{}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use crate::api::{AppState, Stores, router};
    use crate::business::in_memory::InMemoryBusinessStore;
    use crate::photo::PhotoStore;
    use crate::photo::in_memory::InMemoryPhotoStore;
    use crate::review::in_memory::InMemoryReviewStore;

    use super::*;

    fn sample_photo(id: i64, userid: i64, businessid: i64) -> Photo {
        Photo {
            id,
            userid,
            businessid,
            caption: Some("storefront".to_string()),
        }
    }

    fn state_with(photos: Arc<InMemoryPhotoStore>) -> AppState {
        AppState::new(Stores {
            businesses: Arc::new(InMemoryBusinessStore::new()),
            reviews: Arc::new(InMemoryReviewStore::new()),
            photos,
        })
    }

    async fn response_json(resp: axum::response::Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn send_json(
        store: Arc<InMemoryPhotoStore>,
        method: &str,
        path: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap();
        let resp = router(state_with(store)).oneshot(req).await.unwrap();
        let status = resp.status();
        (status, response_json(resp).await)
    }

    #[tokio::test]
    async fn create_returns_links_to_photo_and_business() {
        let store = Arc::new(InMemoryPhotoStore::new());
        let body = json!({"userid": 7, "businessid": 3, "caption": "the patio"});

        let (status, json) = send_json(store.clone(), "POST", "/photos", body).await;

        assert_eq!(status, StatusCode::CREATED);
        let id = json["id"].as_i64().unwrap();
        assert_eq!(json["links"]["photo"], format!("/photos/{}", id));
        assert_eq!(json["links"]["business"], "/businesses/3");
        assert!(store.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn caption_is_optional() {
        let store = Arc::new(InMemoryPhotoStore::new());
        let (status, _) =
            send_json(store, "POST", "/photos", json!({"userid": 7, "businessid": 3})).await;

        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_rejects_missing_businessid() {
        let store = Arc::new(InMemoryPhotoStore::new());
        let (status, json) = send_json(store, "POST", "/photos", json!({"userid": 7})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Request body is not a valid photo object");
    }

    #[tokio::test]
    async fn duplicate_photos_are_allowed() {
        let store = Arc::new(InMemoryPhotoStore::new());
        let body = json!({"userid": 7, "businessid": 3});

        let (first, _) = send_json(store.clone(), "POST", "/photos", body.clone()).await;
        let (second, _) = send_json(store.clone(), "POST", "/photos", body).await;

        assert_eq!(first, StatusCode::CREATED);
        assert_eq!(second, StatusCode::CREATED);
        assert_eq!(store.find_by_business(3).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_returns_photo() {
        let store = Arc::new(InMemoryPhotoStore::with_seed(vec![sample_photo(1, 7, 3)]));
        let resp = router(state_with(store))
            .oneshot(Request::get("/photos/1").body(String::new()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = response_json(resp).await;
        assert_eq!(json["id"], 1);
        assert_eq!(json["caption"], "storefront");
    }

    #[tokio::test]
    async fn get_unknown_photo_is_404() {
        let store = Arc::new(InMemoryPhotoStore::new());
        let resp = router(state_with(store))
            .oneshot(Request::get("/photos/5").body(String::new()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_changes_caption() {
        let store = Arc::new(InMemoryPhotoStore::with_seed(vec![sample_photo(1, 7, 3)]));
        let body = json!({"userid": 7, "businessid": 3, "caption": "new sign"});

        let (status, json) = send_json(store.clone(), "PUT", "/photos/1", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["links"]["photo"], "/photos/1");
        assert_eq!(
            store.find_by_id(1).await.unwrap().unwrap().caption.as_deref(),
            Some("new sign")
        );
    }

    #[tokio::test]
    async fn update_changing_userid_is_403_and_leaves_record() {
        let store = Arc::new(InMemoryPhotoStore::with_seed(vec![sample_photo(1, 7, 3)]));
        let body = json!({"userid": 8, "businessid": 3, "caption": "new sign"});

        let (status, json) = send_json(store.clone(), "PUT", "/photos/1", body).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            json["error"],
            "Updated photo cannot modify businessid or userid"
        );

        let stored = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.userid, 7);
        assert_eq!(stored.caption.as_deref(), Some("storefront"));
    }

    #[tokio::test]
    async fn update_changing_businessid_is_403() {
        let store = Arc::new(InMemoryPhotoStore::with_seed(vec![sample_photo(1, 7, 3)]));
        let body = json!({"userid": 7, "businessid": 4, "caption": "new sign"});

        let (status, _) = send_json(store.clone(), "PUT", "/photos/1", body).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(store.find_by_id(1).await.unwrap().unwrap().businessid, 3);
    }

    #[tokio::test]
    async fn update_unknown_photo_is_404() {
        let store = Arc::new(InMemoryPhotoStore::new());
        let body = json!({"userid": 7, "businessid": 3});

        let (status, _) = send_json(store, "PUT", "/photos/9", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_removes_photo() {
        let store = Arc::new(InMemoryPhotoStore::with_seed(vec![sample_photo(1, 7, 3)]));
        let resp = router(state_with(store.clone()))
            .oneshot(Request::delete("/photos/1").body(String::new()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(store.find_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_unknown_photo_is_404() {
        let store = Arc::new(InMemoryPhotoStore::new());
        let resp = router(state_with(store))
            .oneshot(Request::delete("/photos/1").body(String::new()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
