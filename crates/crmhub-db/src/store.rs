//! The storage contract the API is written against.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use serde::{Serialize, Serializer};

use crate::codec::bson_to_json;
use crate::error::StoreError;

/// Outcome of an insert, shaped like the driver's acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    #[serde(serialize_with = "serialize_bson")]
    pub inserted_id: Bson,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    #[serde(serialize_with = "serialize_optional_bson")]
    pub upserted_id: Option<Bson>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Single-document operations over named collections.
///
/// Implementations must be safe to share across concurrently running
/// requests; the application adds no locking of its own.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `document`, generating an `_id` when it has none.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOneResult, StoreError>;

    /// Every document in `collection`, in storage iteration order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// First document whose top-level fields equal every entry in `filter`.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Overwrites only the fields named in `changes` on the document with `id`.
    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        changes: Document,
    ) -> Result<UpdateResult, StoreError>;

    async fn delete_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<DeleteResult, StoreError>;

    /// Round-trips to the server to confirm the connection is usable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases the underlying connection pool.
    async fn shutdown(&self);

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        let mut filter = Document::new();
        filter.insert("_id", id);
        self.find_one(collection, filter).await
    }
}

fn serialize_bson<S>(value: &Bson, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    bson_to_json(value.clone()).serialize(serializer)
}

fn serialize_optional_bson<S>(value: &Option<Bson>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.clone().map(bson_to_json).serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_result_uses_driver_field_names() {
        let id = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let result = InsertOneResult {
            acknowledged: true,
            inserted_id: Bson::ObjectId(id),
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "acknowledged": true, "insertedId": "65a1f0c2e4b0a1b2c3d4e5f6" })
        );
    }

    #[test]
    fn test_update_result_serializes_missing_upsert_as_null() {
        let result = UpdateResult {
            acknowledged: true,
            matched_count: 1,
            modified_count: 1,
            upserted_count: 0,
            upserted_id: None,
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 1,
                "upsertedCount": 0,
                "upsertedId": null
            })
        );
    }

    #[test]
    fn test_delete_result_shape() {
        let result = DeleteResult {
            acknowledged: true,
            deleted_count: 0,
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "acknowledged": true, "deletedCount": 0 })
        );
    }
}
