//! Statement result decoding and interpretation.
//!
//! The backend answers a batch with a JSON array holding one result object
//! per statement, in submission order. [`BatchResponse`] binds that array to
//! the [`Batch`] that produced it so callers read results by [`Slot`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::adapter::AdapterError;
use crate::surreal::statement::{Batch, Slot};

/// Status reported for a statement that executed successfully.
pub const STATUS_OK: &str = "OK";

/// Outcome of one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementResult {
    /// `OK` or `ERR`.
    pub status: String,
    /// Execution time as reported by the backend (e.g. `"1.2ms"`).
    #[serde(default)]
    pub time: String,
    /// Statement output.
    #[serde(default)]
    pub result: Value,
    /// Failure detail, present when `status` is `ERR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StatementResult {
    /// Whether the statement succeeded.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Borrow `result.<field>` as an object keyed by entity name.
    ///
    /// # Errors
    /// Returns `AdapterError::UnexpectedShape` if the field is missing or not
    /// an object.
    pub fn entity_map(&self, field: &str) -> Result<&Map<String, Value>, AdapterError> {
        self.result
            .get(field)
            .and_then(Value::as_object)
            .ok_or_else(|| {
                AdapterError::UnexpectedShape(format!("result has no '{}' object", field))
            })
    }
}

/// Decode a raw response body into statement results.
///
/// # Errors
/// - `AdapterError::Json` if the body is not JSON
/// - `AdapterError::UnexpectedShape` if it is not an array of result objects
pub fn decode_results(body: &str) -> Result<Vec<StatementResult>, AdapterError> {
    let value: Value = serde_json::from_str(body)?;

    let Value::Array(items) = value else {
        return Err(AdapterError::UnexpectedShape(
            "expected a JSON array of statement results".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            if !item.is_object() {
                return Err(AdapterError::UnexpectedShape(format!(
                    "statement result {} is not an object",
                    position
                )));
            }
            serde_json::from_value(item).map_err(|e| {
                AdapterError::UnexpectedShape(format!("statement result {}: {}", position, e))
            })
        })
        .collect()
}

/// Statement results correlated with the batch that produced them.
#[derive(Debug)]
pub struct BatchResponse<'b> {
    batch: &'b Batch,
    results: Vec<StatementResult>,
}

impl<'b> BatchResponse<'b> {
    /// Pair results with their batch.
    ///
    /// # Errors
    /// - `AdapterError::UnexpectedShape` if the result count differs from
    ///   the statement count
    /// - `AdapterError::Statement` for the first statement whose status is
    ///   not `OK`
    pub fn new(batch: &'b Batch, results: Vec<StatementResult>) -> Result<Self, AdapterError> {
        if results.len() != batch.len() {
            return Err(AdapterError::UnexpectedShape(format!(
                "submitted {} statements but received {} results",
                batch.len(),
                results.len()
            )));
        }

        if let Some((position, failed)) = results.iter().enumerate().find(|(_, r)| !r.is_ok()) {
            return Err(AdapterError::Statement {
                position,
                status: failed.status.clone(),
                detail: failed
                    .detail
                    .clone()
                    .or_else(|| failed.result.as_str().map(str::to_string))
                    .unwrap_or_default(),
            });
        }

        Ok(Self { batch, results })
    }

    /// Result of the statement filling `slot`.
    ///
    /// # Errors
    /// Returns `AdapterError::UnexpectedShape` if the batch has no such slot.
    pub fn slot(&self, slot: Slot) -> Result<&StatementResult, AdapterError> {
        self.batch
            .position(slot)
            .and_then(|position| self.results.get(position))
            .ok_or_else(|| {
                AdapterError::UnexpectedShape(format!("batch has no '{}' statement", slot))
            })
    }

    /// Namespace map from an `INFO FOR KV` statement.
    pub fn namespaces(&self) -> Result<&Map<String, Value>, AdapterError> {
        self.slot(Slot::Namespaces)?.entity_map("namespaces")
    }

    /// Table map from an `INFO FOR DB` statement.
    pub fn tables(&self) -> Result<&Map<String, Value>, AdapterError> {
        self.slot(Slot::Tables)?.entity_map("tables")
    }

    /// Whether the namespace listing contains `name`.
    pub fn has_namespace(&self, name: &str) -> Result<bool, AdapterError> {
        Ok(self.namespaces()?.contains_key(name))
    }

    /// Whether the table listing contains `name`.
    pub fn has_table(&self, name: &str) -> Result<bool, AdapterError> {
        Ok(self.tables()?.contains_key(name))
    }

    /// Namespace names from an `INFO FOR KV` statement.
    pub fn namespace_names(&self) -> Result<Vec<String>, AdapterError> {
        Ok(self.namespaces()?.keys().cloned().collect())
    }
}
