use serde::Serialize;

use crate::business::Business;
use crate::photo::Photo;
use crate::review::Review;

/// Envelope for the paginated business listing.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPage {
    pub businesses: Vec<Business>,
    pub page_number: i64,
    pub total_pages: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub links: PageLinks,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<String>,
}

/// A business with its reviews and photos merged in.
#[derive(Serialize)]
pub struct BusinessDetails {
    #[serde(flatten)]
    pub business: Business,
    pub reviews: Vec<Review>,
    pub photos: Vec<Photo>,
}

#[derive(Serialize)]
pub struct Created {
    pub id: i64,
    pub links: ResourceLinks,
}

#[derive(Serialize)]
pub struct LinksBody {
    pub links: ResourceLinks,
}

#[derive(Serialize, Default)]
pub struct ResourceLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl ResourceLinks {
    pub fn business(id: i64) -> Self {
        Self {
            business: Some(format!("/businesses/{}", id)),
            ..Default::default()
        }
    }

    pub fn review(id: i64, businessid: i64) -> Self {
        Self {
            review: Some(format!("/reviews/{}", id)),
            business: Some(format!("/businesses/{}", businessid)),
            ..Default::default()
        }
    }

    pub fn photo(id: i64, businessid: i64) -> Self {
        Self {
            photo: Some(format!("/photos/{}", id)),
            business: Some(format!("/businesses/{}", businessid)),
            ..Default::default()
        }
    }
}
