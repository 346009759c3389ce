use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::ErrorParser;
use crate::call::response::FailedResponse;

/// Placeholder reported when a backend answers with something that is not JSON
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry. Unable to access server. Try Again";

const DEFAULT_ERRORS_FIELD: &str = "errors";

/// Parses `{"errors": [...]}` error bodies.
///
/// Each array element is decoded into `E`; elements that do not fit are
/// skipped. A body that is not JSON at all yields the fallback record when one
/// is configured, `None` otherwise.
#[derive(Debug, Clone)]
pub struct JsonErrorsParser<E> {
    field: String,
    fallback: Option<E>,
}

impl<E> JsonErrorsParser<E> {
    pub fn new() -> Self {
        Self {
            field: DEFAULT_ERRORS_FIELD.to_string(),
            fallback: None,
        }
    }

    /// Read the array from `field` instead of `errors`
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn with_fallback(mut self, fallback: E) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl JsonErrorsParser<String> {
    /// Fall back to [`DEFAULT_FALLBACK_MESSAGE`] on malformed bodies
    pub fn with_default_fallback(self) -> Self {
        self.with_fallback(DEFAULT_FALLBACK_MESSAGE.to_string())
    }
}

impl JsonErrorsParser<Value> {
    pub fn with_default_fallback(self) -> Self {
        self.with_fallback(Value::String(DEFAULT_FALLBACK_MESSAGE.to_string()))
    }
}

impl<E> Default for JsonErrorsParser<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ErrorParser<E> for JsonErrorsParser<E>
where
    E: DeserializeOwned + Clone + Send + Sync,
{
    fn parse_errors(&self, response: &FailedResponse<'_>) -> Option<Vec<E>> {
        let body = match response.json::<Value>() {
            Ok(Some(body)) => body,
            Ok(None) => return None,
            Err(e) => {
                warn!(
                    code = response.code(),
                    error = %e,
                    "Error body is not valid JSON"
                );
                return self.fallback.clone().map(|fallback| vec![fallback]);
            }
        };

        let items = body.get(self.field.as_str())?.as_array()?;

        let mut errors = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<E>(item.clone()) {
                Ok(error) => errors.push(error),
                Err(e) => {
                    debug!("Skipping error record that does not match: {}", e);
                }
            }
        }

        if errors.is_empty() {
            None
        } else {
            Some(errors)
        }
    }
}
