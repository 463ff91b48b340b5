use serde::Deserialize;

/// Scalar that DVLA emits as either a JSON string or a JSON number
/// (`"status": "400"` and `"status": 400` are both seen in the wild).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransportText {
    String(String),
    Number(serde_json::Number),
}

impl TransportText {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }

    /// Interpret the value as an HTTP status code, if it is one.
    pub fn as_status(&self) -> Option<u16> {
        match self {
            Self::String(value) => value.trim().parse().ok(),
            Self::Number(value) => value.as_u64().and_then(|it| u16::try_from(it).ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strings_and_numbers() {
        let text: TransportText = serde_json::from_str("\"400\"").unwrap();
        assert_eq!(text.as_status(), Some(400));
        assert_eq!(text.into_string(), "400");

        let number: TransportText = serde_json::from_str("404").unwrap();
        assert_eq!(number.as_status(), Some(404));
        assert_eq!(number.into_string(), "404");
    }

    #[test]
    fn non_status_values_have_no_status() {
        let text: TransportText = serde_json::from_str("\"ENQ103\"").unwrap();
        assert_eq!(text.as_status(), None);

        let number: TransportText = serde_json::from_str("70000").unwrap();
        assert_eq!(number.as_status(), None);

        assert!(serde_json::from_str::<TransportText>("true").is_err());
    }
}
