use mongodb::{
    Client, Database, IndexModel,
    bson::{Document, doc},
    options::{ClientOptions, IndexOptions, ReturnDocument},
};

pub mod business;
pub mod photo;
pub mod review;

pub use business::MongoDbBusinessStore;
pub use photo::MongoDbPhotoStore;
pub use review::MongoDbReviewStore;

pub async fn db_client(name: String, conn_str: &str) -> anyhow::Result<Client> {
    let mut opts = ClientOptions::parse(conn_str).await?;
    opts.app_name = Some(name);

    Ok(Client::with_options(opts)?)
}

/// Creates the indexes the stores rely on. The unique compound index backs
/// the one-review-per-user-per-business constraint; inserts that would
/// violate it fail with a duplicate-key error instead of racing a lookup.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let unique_review = IndexModel::builder()
        .keys(doc! { "userid": 1, "businessid": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    db.collection::<Document>(review::COLLECTION)
        .create_index(unique_review)
        .await?;

    Ok(())
}

/// Atomically increments and returns the named id sequence. The counter
/// document is created on first use.
pub(crate) async fn next_id(
    db: &Database,
    sequence: &str,
) -> Result<i64, mongodb::error::Error> {
    let counters = db.collection::<Document>("counters");

    let updated = counters
        .find_one_and_update(doc! { "_id": sequence }, doc! { "$inc": { "seq": 1_i64 } })
        .upsert(true)
        .return_document(ReturnDocument::After)
        .await?;

    updated
        .as_ref()
        .and_then(|counter| counter.get_i64("seq").ok())
        .ok_or_else(|| {
            mongodb::error::Error::custom(format!("sequence '{}' returned no counter", sequence))
        })
}
