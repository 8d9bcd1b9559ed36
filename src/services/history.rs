//! Analysis History Store
//!
//! Best-effort persistence of completed critiques against the hosted document
//! store. The store is an enhancement, never the core value: callers absorb
//! every failure from this module and log it instead of surfacing it to the
//! analysis flow.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::analysis::AnalysisResult;
use crate::models::settings::PersistenceConfig;

/// Default document store endpoint
const FIRESTORE_API_URL: &str = "https://firestore.googleapis.com/v1";

/// Collection holding saved critiques
const ANALYSES_COLLECTION: &str = "analyses";

/// Error types for history store operations
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Network/connection error
    #[error("Network error: {0}")]
    Network(String),

    /// The store rejected the request
    #[error("Store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A stored document could not be decoded as a critique
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type for history store operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Trait for the persistence provider boundary.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Save a critique for an owner. Returns the server-assigned document id.
    /// The record's own `id`/`created_at` are ignored; the stored copy gets
    /// fresh ones.
    async fn save(&self, owner_id: &str, analysis: &AnalysisResult) -> HistoryResult<String>;

    /// List an owner's saved critiques, newest first.
    async fn list_for_owner(&self, owner_id: &str) -> HistoryResult<Vec<AnalysisResult>>;
}

/// Document-store-backed history implementation (Firestore REST).
pub struct FirestoreStore {
    api_key: String,
    project_id: String,
    base_url: Option<String>,
    client: reqwest::Client,
}

impl FirestoreStore {
    /// Create a store from the persistence credential triple.
    pub fn new(config: &PersistenceConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            project_id: config.project_id.clone(),
            base_url: None,
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(FIRESTORE_API_URL)
    }

    /// Resource path of the documents root for this project
    fn documents_parent(&self) -> String {
        format!(
            "projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    /// Build the document body for a save: the critique without id/timestamp,
    /// plus the owner and a creation timestamp.
    fn save_fields(&self, owner_id: &str, analysis: &AnalysisResult) -> Value {
        let mut record = serde_json::to_value(analysis).unwrap_or_else(|_| json!({}));
        if let Some(map) = record.as_object_mut() {
            map.remove("id");
            map.remove("createdAt");
        }

        let mut fields = json_to_firestore_fields(&record);
        if let Some(map) = fields.as_object_mut() {
            map.insert("ownerId".to_string(), json!({ "stringValue": owner_id }));
            map.insert(
                "createdAt".to_string(),
                json!({ "timestampValue": Utc::now().to_rfc3339() }),
            );
        }
        fields
    }

    /// Query body for listing an owner's critiques, newest first.
    fn list_query(&self, owner_id: &str) -> Value {
        json!({
            "structuredQuery": {
                "from": [{ "collectionId": ANALYSES_COLLECTION }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "ownerId" },
                        "op": "EQUAL",
                        "value": { "stringValue": owner_id }
                    }
                },
                "orderBy": [{
                    "field": { "fieldPath": "createdAt" },
                    "direction": "DESCENDING"
                }]
            }
        })
    }

    /// Decode one stored document into a critique with its id and timestamp.
    fn decode_document(document: &Value) -> HistoryResult<AnalysisResult> {
        let name = document["name"]
            .as_str()
            .ok_or_else(|| HistoryError::Decode("document has no name".to_string()))?;
        let id = name
            .rsplit('/')
            .next()
            .unwrap_or(name)
            .to_string();

        let fields = document["fields"]
            .as_object()
            .ok_or_else(|| HistoryError::Decode("document has no fields".to_string()))?;

        let mut record = serde_json::Map::new();
        for (key, value) in fields {
            record.insert(key.clone(), firestore_value_to_json(value));
        }
        record.remove("ownerId");
        record.insert("id".to_string(), Value::String(id));

        serde_json::from_value(Value::Object(record))
            .map_err(|e| HistoryError::Decode(format!("stored analysis is malformed: {}", e)))
    }
}

#[async_trait]
impl HistoryStore for FirestoreStore {
    async fn save(&self, owner_id: &str, analysis: &AnalysisResult) -> HistoryResult<String> {
        let url = format!(
            "{}/{}/{}?key={}",
            self.base_url(),
            self.documents_parent(),
            ANALYSES_COLLECTION,
            self.api_key
        );
        let body = json!({ "fields": self.save_fields(owner_id, analysis) });

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| HistoryError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| HistoryError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(HistoryError::Rejected {
                status,
                message: body_text,
            });
        }

        let created: Value = serde_json::from_str(&body_text)
            .map_err(|e| HistoryError::Decode(e.to_string()))?;
        let name = created["name"]
            .as_str()
            .ok_or_else(|| HistoryError::Decode("create reply has no name".to_string()))?;
        Ok(name.rsplit('/').next().unwrap_or(name).to_string())
    }

    async fn list_for_owner(&self, owner_id: &str) -> HistoryResult<Vec<AnalysisResult>> {
        let url = format!(
            "{}/{}:runQuery?key={}",
            self.base_url(),
            self.documents_parent(),
            self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(&self.list_query(owner_id))
            .send()
            .await
            .map_err(|e| HistoryError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| HistoryError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(HistoryError::Rejected {
                status,
                message: body_text,
            });
        }

        let rows: Vec<Value> = serde_json::from_str(&body_text)
            .map_err(|e| HistoryError::Decode(e.to_string()))?;

        // Rows without a document are query bookkeeping (readTime-only).
        rows.iter()
            .filter_map(|row| row.get("document"))
            .map(Self::decode_document)
            .collect()
    }
}

/// Encode a plain JSON object as a document-store `fields` map.
fn json_to_firestore_fields(value: &Value) -> Value {
    match value.as_object() {
        Some(map) => {
            let fields: serde_json::Map<String, Value> = map
                .iter()
                .map(|(key, value)| (key.clone(), json_to_firestore_value(value)))
                .collect();
            Value::Object(fields)
        }
        None => json!({}),
    }
}

/// Encode one plain JSON value as a document-store `Value`.
fn json_to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(flag) => json!({ "booleanValue": flag }),
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                json!({ "integerValue": number.to_string() })
            } else {
                json!({ "doubleValue": number.as_f64() })
            }
        }
        Value::String(text) => json!({ "stringValue": text }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(json_to_firestore_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(_) => json!({ "mapValue": { "fields": json_to_firestore_fields(value) } }),
    }
}

/// Decode one document-store `Value` back into plain JSON.
fn firestore_value_to_json(value: &Value) -> Value {
    if let Some(text) = value.get("stringValue").and_then(Value::as_str) {
        return Value::String(text.to_string());
    }
    if let Some(text) = value.get("timestampValue").and_then(Value::as_str) {
        return Value::String(text.to_string());
    }
    if let Some(number) = value.get("doubleValue").and_then(Value::as_f64) {
        return json!(number);
    }
    if let Some(text) = value.get("integerValue").and_then(Value::as_str) {
        if let Ok(number) = text.parse::<i64>() {
            return json!(number);
        }
    }
    if let Some(flag) = value.get("booleanValue").and_then(Value::as_bool) {
        return Value::Bool(flag);
    }
    if let Some(items) = value
        .get("arrayValue")
        .and_then(|array| array.get("values"))
        .and_then(Value::as_array)
    {
        return Value::Array(items.iter().map(firestore_value_to_json).collect());
    }
    if let Some(fields) = value
        .get("mapValue")
        .and_then(|map| map.get("fields"))
        .and_then(Value::as_object)
    {
        let map: serde_json::Map<String, Value> = fields
            .iter()
            .map(|(key, value)| (key.clone(), firestore_value_to_json(value)))
            .collect();
        return Value::Object(map);
    }
    Value::Null
}
