use serde::Serialize;

use crate::domain::registration::is_valid_registration;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// DVLA Vehicle Enquiry Service API key.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by DVLA (`x-api-key`).
    pub const HEADER: &'static str = "x-api-key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-supplied token forwarded to DVLA for request tracing.
///
/// Invariant: non-empty after trimming.
pub struct CorrelationId(String);

impl CorrelationId {
    /// Header name used by DVLA (`X-Correlation-Id`).
    pub const HEADER: &'static str = "X-Correlation-Id";

    /// Create a validated [`CorrelationId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated correlation id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Vehicle registration number as sent to DVLA (`registrationNumber`).
///
/// Construction does not validate; the value is checked with
/// [`RegistrationNumber::is_valid`] before it is ever sent upstream.
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    /// JSON field name used by DVLA (`registrationNumber`).
    pub const FIELD: &'static str = "registrationNumber";

    /// Wrap a raw registration string as provided.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the registration as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the value matches one of the recognised UK plate formats.
    pub fn is_valid(&self) -> bool {
        is_valid_registration(&self.0)
    }

    /// Return `self` if it passes [`RegistrationNumber::is_valid`].
    pub fn validated(&self) -> Result<&Self, ValidationError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ValidationError::InvalidFormat {
                input: self.0.clone(),
            })
        }
    }
}

impl From<&str> for RegistrationNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RegistrationNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
