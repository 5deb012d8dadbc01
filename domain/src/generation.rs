use crate::plan::PlanError;
use serde_json::Value;
use std::fmt;
use std::future::Future;

/// Secret for the generation service. `Debug` never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Configured credential, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Present(ApiKey),
    Absent,
}

impl Credential {
    /// Empty or whitespace-only values count as absent.
    pub fn from_value(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Credential::Present(ApiKey(v.trim().to_string())),
            _ => Credential::Absent,
        }
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        match self {
            Credential::Present(key) => Some(key),
            Credential::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Credential::Present(_))
    }
}

/// One outbound call: model, composed instruction, and the output schema
/// the service is asked to honour.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub instruction: String,
    pub response_schema: Value,
}

/// Transport to a text-generation service. Returns the raw response text.
pub trait GenerationClient {
    fn generate(
        &self,
        request: &GenerationRequest,
        api_key: &ApiKey,
    ) -> impl Future<Output = Result<String, PlanError>> + Send;
}
