use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, Schema};

pub mod in_memory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: i64,
    pub userid: i64,
    pub businessid: i64,
    pub dollars: i64,
    pub stars: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

pub const REVIEW_SCHEMA: Schema = &[
    ("userid", FieldSpec::REQUIRED),
    ("businessid", FieldSpec::REQUIRED),
    ("dollars", FieldSpec::REQUIRED),
    ("stars", FieldSpec::REQUIRED),
    ("review", FieldSpec::OPTIONAL),
];

#[derive(thiserror::Error, Debug)]
pub enum ReviewStoreError {
    /// A review by this user for this business already exists. Surfaced by
    /// the unique index on (userid, businessid).
    #[error("user {userid} has already reviewed business {businessid}")]
    Duplicate { userid: i64, businessid: i64 },
    #[error("MongoDB error: {0}")]
    MongoDb(#[from] mongodb::error::Error),
    #[error("{0}")]
    Other(String),
}

pub type DynReviewStore = Arc<dyn ReviewStore + Send + Sync>;

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn next_id(&self) -> Result<i64, ReviewStoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewStoreError>;
    async fn find_by_user(&self, userid: i64) -> Result<Vec<Review>, ReviewStoreError>;
    async fn find_by_business(&self, businessid: i64) -> Result<Vec<Review>, ReviewStoreError>;
    /// Fails with [`ReviewStoreError::Duplicate`] if the user has already
    /// reviewed the business.
    async fn insert(&self, review: &Review) -> Result<(), ReviewStoreError>;
    /// Updates the review only if its stored businessid and userid match the
    /// replacement's; reports whether a document matched.
    async fn update_matching(&self, id: i64, review: &Review) -> Result<bool, ReviewStoreError>;
    async fn delete(&self, id: i64) -> Result<bool, ReviewStoreError>;
}
