//! Flat company overview responses

use serde_json::{Map, Value};

use crate::error::Result;
use crate::processor::Processor;
use crate::response::Response;

/// A company overview: one flat mapping of field name to value.
///
/// Field order matches the response body. There is no row index; the whole
/// structure describes a single company.
#[derive(Debug, Clone)]
pub struct Overview(Map<String, Value>);

impl Overview {
    /// Look up a field as a string, `None` if absent or not a string.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Iterate over fields in response order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the overview carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Decode an `OVERVIEW` response body.
///
/// The parsed JSON object is returned directly as a flat name/value mapping,
/// with no transformation. Fails if the body is not a JSON object.
pub fn decode_overview(body: &str) -> Result<Overview> {
    let map: Map<String, Value> = serde_json::from_str(body)?;
    Ok(Overview(map))
}

/// Processor that decodes overview response bodies into an [`Overview`]
pub struct OverviewMap;

impl Processor for OverviewMap {
    type Output = Overview;

    fn process<R: Response>(&self, response: Result<R>) -> Result<Overview> {
        let resp = crate::processor::check_status(response)?;
        decode_overview(resp.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_preserves_field_order() {
        let overview = decode_overview(r#"{"Symbol":"IBM","Name":"IBM Corp","Sector":"Technology"}"#).unwrap();
        let names: Vec<&str> = overview.fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["Symbol", "Name", "Sector"]);
        assert_eq!(overview.get("Sector"), Some("Technology"));
        assert_eq!(overview.get("missing"), None);
    }

    #[test]
    fn decode_rejects_non_objects() {
        assert!(decode_overview("[1, 2, 3]").is_err());
    }
}
