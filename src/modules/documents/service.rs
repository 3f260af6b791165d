use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crmhub_core::AppError;
use crmhub_db::{
    DeleteResult, DocumentStore, InsertOneResult, UpdateResult, bson::oid::ObjectId,
    codec::map_to_document, document_to_json, parse_object_id,
};

/// CRUD over one collection. Ids that do not parse are reported exactly like
/// ids that match nothing.
#[derive(Debug, Clone, Copy)]
pub struct DocumentService {
    collection: &'static str,
    not_found: &'static str,
}

impl DocumentService {
    pub const fn new(collection: &'static str, not_found: &'static str) -> Self {
        Self {
            collection,
            not_found,
        }
    }

    pub fn parse_id(&self, raw: &str) -> Result<ObjectId, AppError> {
        parse_object_id(raw).ok_or_else(|| AppError::not_found(self.not_found))
    }

    #[instrument(skip(self, store), fields(collection = self.collection))]
    pub async fn list(&self, store: &dyn DocumentStore) -> Result<Vec<Value>, AppError> {
        let documents = store.find_all(self.collection).await?;
        debug!(count = documents.len(), "Listed documents");

        Ok(documents.into_iter().map(document_to_json).collect())
    }

    #[instrument(skip(self, store, body), fields(collection = self.collection))]
    pub async fn create(
        &self,
        store: &dyn DocumentStore,
        body: Map<String, Value>,
    ) -> Result<InsertOneResult, AppError> {
        let document = map_to_document(&body)?;
        Ok(store.insert_one(self.collection, document).await?)
    }

    #[instrument(skip(self, store), fields(collection = self.collection))]
    pub async fn get(&self, store: &dyn DocumentStore, id: &str) -> Result<Value, AppError> {
        let id = self.parse_id(id)?;

        store
            .find_by_id(self.collection, id)
            .await?
            .map(document_to_json)
            .ok_or_else(|| AppError::not_found(self.not_found))
    }

    /// `$set`-style merge: only the fields present in `changes` are written.
    #[instrument(skip(self, store, changes), fields(collection = self.collection))]
    pub async fn update(
        &self,
        store: &dyn DocumentStore,
        id: &str,
        changes: Map<String, Value>,
    ) -> Result<UpdateResult, AppError> {
        let id = self.parse_id(id)?;
        let changes = map_to_document(&changes).map_err(AppError::update_failed)?;

        let result = store
            .update_by_id(self.collection, id, changes)
            .await
            .map_err(AppError::update_failed)?;

        if result.matched_count == 0 {
            return Err(AppError::not_found(self.not_found));
        }

        Ok(result)
    }

    #[instrument(skip(self, store), fields(collection = self.collection))]
    pub async fn delete(
        &self,
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<DeleteResult, AppError> {
        let id = self.parse_id(id)?;
        let result = store.delete_by_id(self.collection, id).await?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found(self.not_found));
        }

        Ok(result)
    }
}
