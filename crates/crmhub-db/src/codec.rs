//! Conversions between request/response JSON and stored BSON.

use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Parses a client-supplied path id. `None` when it is not a valid ObjectId.
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

/// Renders a BSON value as plain JSON. ObjectIds become their hex string;
/// everything else follows relaxed extended JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

/// Converts a single request value for storage or comparison, keeping its type.
pub fn json_to_bson(value: &Value) -> Result<Bson, StoreError> {
    Ok(bson::to_bson(value)?)
}

/// Converts a decoded request body into a document, without imposing any schema.
pub fn map_to_document(map: &Map<String, Value>) -> Result<Document, StoreError> {
    Ok(bson::to_document(map)?)
}
