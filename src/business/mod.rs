use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, Schema};

pub mod in_memory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub id: i64,
    pub ownerid: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub category: String,
    pub subcategory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Accepted fields of an inbound business body. The id is never taken from
/// the client.
pub const BUSINESS_SCHEMA: Schema = &[
    ("ownerid", FieldSpec::REQUIRED),
    ("name", FieldSpec::REQUIRED),
    ("address", FieldSpec::REQUIRED),
    ("city", FieldSpec::REQUIRED),
    ("state", FieldSpec::REQUIRED),
    ("zip", FieldSpec::REQUIRED),
    ("phone", FieldSpec::REQUIRED),
    ("category", FieldSpec::REQUIRED),
    ("subcategory", FieldSpec::REQUIRED),
    ("website", FieldSpec::OPTIONAL),
    ("email", FieldSpec::OPTIONAL),
];

#[derive(thiserror::Error, Debug)]
pub enum BusinessStoreError {
    #[error("MongoDB error: {0}")]
    MongoDb(#[from] mongodb::error::Error),
    #[error("{0}")]
    Other(String),
}

pub type DynBusinessStore = Arc<dyn BusinessStore + Send + Sync>;

#[async_trait]
pub trait BusinessStore: Send + Sync {
    /// Allocates the next business id from the store's sequence.
    async fn next_id(&self) -> Result<i64, BusinessStoreError>;
    async fn count(&self) -> Result<u64, BusinessStoreError>;
    /// One page of businesses ordered by id.
    async fn page(&self, skip: u64, limit: i64) -> Result<Vec<Business>, BusinessStoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Business>, BusinessStoreError>;
    async fn find_by_owner(&self, ownerid: i64) -> Result<Vec<Business>, BusinessStoreError>;
    async fn insert(&self, business: &Business) -> Result<(), BusinessStoreError>;
    /// Replaces the document with the given id; reports whether one matched.
    async fn replace(&self, id: i64, business: &Business) -> Result<bool, BusinessStoreError>;
    /// Reports whether a document was actually deleted.
    async fn delete(&self, id: i64) -> Result<bool, BusinessStoreError>;
}
