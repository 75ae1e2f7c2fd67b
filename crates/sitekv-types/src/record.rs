//! Opaque site records served by the host environment.
//!
//! The host owns the shape of its site records; this system never interprets
//! them beyond reading the numeric site id. Records are therefore carried as
//! raw JSON values and handed back to callers unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;
use crate::id::SiteId;

/// The one field this system reads from a site record.
const ID_FIELD: &str = "id";

/// An opaque site record, as served by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteRecord(Value);

impl SiteRecord {
    /// Wrap a raw host record.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// A minimal record carrying only the site id.
    pub fn with_id(id: SiteId) -> Self {
        Self(serde_json::json!({ ID_FIELD: id.get() }))
    }

    /// Borrow the raw record.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the raw record.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// The numeric site id of this record.
    ///
    /// Hosts serve the id field either as a JSON number or as a numeric
    /// string; both forms are accepted. Any other shape is an error.
    pub fn site_id(&self) -> Result<SiteId, TypeError> {
        let field = self
            .0
            .get(ID_FIELD)
            .ok_or(TypeError::MissingField(ID_FIELD))?;

        match field {
            Value::Number(n) => n
                .as_u64()
                .map(SiteId::new)
                .ok_or(TypeError::NonNumericField { field: ID_FIELD }),
            Value::String(s) => s
                .parse()
                .map_err(|_| TypeError::NonNumericField { field: ID_FIELD }),
            _ => Err(TypeError::NonNumericField { field: ID_FIELD }),
        }
    }
}
