use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::debug;

use crate::errors::CallError;

/// Response handed back by a call: status code, decoded success body and the
/// raw error body of a failed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    code: u16,
    body: Option<T>,
    error_body: Option<Vec<u8>>,
}

impl<T> ApiResponse<T> {
    /// Response with a status code and no body at all
    pub fn new(code: u16) -> Self {
        Self {
            code,
            body: None,
            error_body: None,
        }
    }

    pub fn with_body(mut self, body: T) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_error_body(mut self, error_body: impl Into<Vec<u8>>) -> Self {
        self.error_body = Some(error_body.into());
        self
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// 2xx statuses count as successful
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.code)
    }

    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    pub fn into_body(self) -> Option<T> {
        self.body
    }

    pub fn error_body(&self) -> Option<&[u8]> {
        self.error_body.as_deref()
    }

    /// Borrowed view used by error parsers and consumers
    pub fn as_failed(&self) -> FailedResponse<'_> {
        FailedResponse {
            code: self.code,
            body: self.error_body(),
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Read a reqwest response fully.
    ///
    /// A 2xx body is decoded as JSON into `T`, an empty or blank one becomes
    /// `None`. Any other status keeps the raw bytes as the error body.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, CallError> {
        let code = response.status().as_u16();
        let bytes = response.bytes().await?;

        let mut api_response = Self::new(code);
        if !api_response.is_successful() {
            if !bytes.is_empty() {
                api_response.error_body = Some(bytes.to_vec());
            }
            return Ok(api_response);
        }

        if is_blank(&bytes) {
            debug!(code, "Successful response without a body");
            return Ok(api_response);
        }

        api_response.body = Some(serde_json::from_slice(&bytes)?);
        Ok(api_response)
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Status and raw error body of a failed response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedResponse<'a> {
    code: u16,
    body: Option<&'a [u8]>,
}

impl<'a> FailedResponse<'a> {
    pub fn new(code: u16, body: Option<&'a [u8]>) -> Self {
        Self { code, body }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn raw_body(&self) -> Option<&'a [u8]> {
        self.body
    }

    /// Body as text, invalid UTF-8 replaced
    pub fn text(&self) -> Option<Cow<'a, str>> {
        self.body.map(String::from_utf8_lossy)
    }

    /// Decode the body as JSON. An absent or blank body is `Ok(None)`.
    pub fn json<V: DeserializeOwned>(&self) -> Result<Option<V>, serde_json::Error> {
        match self.body {
            Some(body) if !is_blank(body) => {
                serde_json::from_slice(body).map(Some)
            }
            _ => Ok(None),
        }
    }
}
