use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body for `POST /format-check/`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct EmailFormatRequest {
    /// Address to inspect; a missing field or `null` is treated as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "abc@gmail.com")]
    pub email: String,
}

/// Body for `POST /dns-check/`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct DnsCheckRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "abc@gmail.com")]
    pub email: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Outcome of the local syntax check.
///
/// `local_part`, `domain` and `valid_domain` are `null` when the address has
/// no `@`. `valid_domain` is computed whether or not `valid_format` passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmailFormatResult {
    pub email: String,
    /// At most 254 characters
    pub valid_length: bool,
    pub valid_format: bool,
    pub local_part: Option<String>,
    pub domain: Option<String>,
    /// Domain contains a `.`
    pub valid_domain: Option<bool>,
}

/// Outcome of the MX lookup, reported as data rather than as an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DnsCheckResult {
    pub email: String,
    pub message: String,
    /// Exchange host of the lowest-preference MX record
    pub smtp_server: Option<String>,
}

impl DnsCheckResult {
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
            smtp_server: None,
        }
    }

    pub fn with_smtp_server(mut self, smtp_server: impl Into<String>) -> Self {
        self.smtp_server = Some(smtp_server.into());
        self
    }
}

/// A single mail exchanger as returned by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    /// Lower is preferred
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}
