use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::types::{BusinessDetails, BusinessPage, Created, LinksBody, PageLinks, ResourceLinks};
use crate::business::{BUSINESS_SCHEMA, Business};

use super::{parse_body, resource_not_found};

const PAGE_SIZE: i64 = 10;

#[derive(Deserialize, Default)]
pub struct ListBusinessesQuery {
    pub page: Option<String>,
}

/// Clamps the requested page into `[1, last_page]`. The upper bound is
/// applied first so that an empty collection still lands on page 1.
fn clamp_page(requested: i64, last_page: i64) -> i64 {
    let page = if requested > last_page {
        last_page
    } else {
        requested
    };
    if page < 1 { 1 } else { page }
}

fn page_links(page: i64, last_page: i64) -> PageLinks {
    let mut links = PageLinks::default();
    if page < last_page {
        links.next_page = Some(format!("/businesses?page={}", page + 1));
        links.last_page = Some(format!("/businesses?page={}", last_page));
    }
    if page > 1 {
        links.prev_page = Some(format!("/businesses?page={}", page - 1));
        links.first_page = Some("/businesses?page=1".to_string());
    }
    links
}

/// GET /businesses
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(query): Query<ListBusinessesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // One count read drives both the clamping and the response envelope.
    let total_count = state.stores.businesses.count().await? as i64;
    let last_page = (total_count as u64).div_ceil(PAGE_SIZE as u64) as i64;

    let requested = query
        .page
        .as_deref()
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let page = clamp_page(requested, last_page);

    let skip = ((page - 1) * PAGE_SIZE) as u64;
    let businesses = state.stores.businesses.page(skip, PAGE_SIZE).await?;

    Ok((
        StatusCode::OK,
        Json(BusinessPage {
            businesses,
            page_number: page,
            total_pages: last_page,
            page_size: PAGE_SIZE,
            total_count,
            links: page_links(page, last_page),
        }),
    ))
}

/// POST /businesses
pub async fn create_business(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let mut business: Business = parse_body(&body, BUSINESS_SCHEMA, "business")?;
    business.id = state.stores.businesses.next_id().await?;

    state.stores.businesses.insert(&business).await?;
    info!("created business {}", business.id);

    Ok((
        StatusCode::CREATED,
        Json(Created {
            id: business.id,
            links: ResourceLinks::business(business.id),
        }),
    ))
}

/// GET /businesses/{id}
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let business = state
        .stores
        .businesses
        .find_by_id(id)
        .await?
        .ok_or_else(|| resource_not_found(format!("/businesses/{}", id)))?;

    let reviews = state.stores.reviews.find_by_business(id).await?;
    let photos = state.stores.photos.find_by_business(id).await?;

    Ok((
        StatusCode::OK,
        Json(BusinessDetails {
            business,
            reviews,
            photos,
        }),
    ))
}

/// PUT /businesses/{id}
pub async fn replace_business(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let mut business: Business = parse_body(&body, BUSINESS_SCHEMA, "business")?;
    business.id = id;

    if !state.stores.businesses.replace(id, &business).await? {
        return Err(resource_not_found(format!("/businesses/{}", id)));
    }

    Ok((
        StatusCode::OK,
        Json(LinksBody {
            links: ResourceLinks::business(id),
        }),
    ))
}

/// DELETE /businesses/{id}
pub async fn delete_business(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.stores.businesses.delete(id).await? {
        return Err(resource_not_found(format!("/businesses/{}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
