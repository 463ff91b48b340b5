use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidFormat { input: String },
    InvalidEnumValue { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidFormat { input } => {
                write!(f, "invalid registration number format: {input:?}")
            }
            Self::InvalidEnumValue { field, value } => write!(f, "invalid {field}: {value}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "x-api-key" };
        assert_eq!(err.to_string(), "x-api-key must not be empty");

        let err = ValidationError::InvalidFormat {
            input: "NOT A PLATE".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid registration number format: \"NOT A PLATE\""
        );

        let err = ValidationError::InvalidEnumValue {
            field: "taxStatus",
            value: "Maybe".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid taxStatus: Maybe");
    }
}
