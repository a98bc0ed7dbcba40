use std::fmt;
use strum_macros::{Display, EnumIter};

/// Stable machine-readable code carried by every [`FlightError`].
///
/// The serialized form is part of the crate's contract. The embedding API
/// layer matches on these strings when mapping errors onto its responses,
/// so they must never change silently.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    #[strum(serialize = "invalid_entity_data")]
    InvalidEntity,
    #[strum(serialize = "same_departure_and_destination_airport")]
    SameDepartureAndDestination,
    #[strum(serialize = "entity_to_delete_not_found")]
    EntityToDeleteNotFound,
    #[strum(serialize = "no_change_persisted")]
    NoChange,
    #[strum(serialize = "missing_argument")]
    MissingArgument,
}

/// Error type of the planning core, split into the two kinds the embedding
/// layer distinguishes.
///
/// `Functional` marks a business-rule violation in caller-supplied data and
/// is recoverable by the caller. `Technical` marks a precondition or
/// integration fault, e.g. a required reference that was never resolved.
/// The embedding HTTP layer maps functional errors to client errors and
/// technical errors to server errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightError {
    Functional { code: FaultCode, message: String },
    Technical { code: FaultCode, message: String },
}

impl FlightError {
    pub fn functional(code: FaultCode, message: impl Into<String>) -> Self {
        Self::Functional {
            code,
            message: message.into(),
        }
    }

    pub fn technical(code: FaultCode, message: impl Into<String>) -> Self {
        Self::Technical {
            code,
            message: message.into(),
        }
    }

    /// Shorthand for the precondition-violation case: a required reference
    /// was absent. Always technical, the caller skipped a resolution step.
    pub fn missing_argument(what: impl fmt::Display) -> Self {
        Self::technical(
            FaultCode::MissingArgument,
            format!("required argument is absent: {what}"),
        )
    }

    pub fn code(&self) -> FaultCode {
        match self {
            Self::Functional { code, .. } | Self::Technical { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Functional { message, .. } | Self::Technical { message, .. } => message,
        }
    }

    pub fn is_functional(&self) -> bool { matches!(self, Self::Functional { .. }) }

    /// Flattens the error into the payload handed to the embedding layer.
    pub fn to_anomaly(&self) -> Anomaly {
        Anomaly {
            code: self.code().to_string(),
            message: self.message().to_string(),
            kind: if self.is_functional() {
                "functional".to_string()
            } else {
                "technical".to_string()
            },
        }
    }
}

impl fmt::Display for FlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_functional() { "functional" } else { "technical" };
        write!(f, "{kind} fault [{}]: {}", self.code(), self.message())
    }
}

impl std::error::Error for FlightError {}

/// Serializable error payload, the shape the embedding API layer turns into
/// a JSON error response.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Anomaly {
    pub code: String,
    pub message: String,
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::{FaultCode, FlightError};
    use strum::IntoEnumIterator;

    #[test]
    fn fault_codes_serialize_to_stable_strings() {
        let expected = [
            "invalid_entity_data",
            "same_departure_and_destination_airport",
            "entity_to_delete_not_found",
            "no_change_persisted",
            "missing_argument",
        ];
        for (code, expected) in FaultCode::iter().zip(expected) {
            assert_eq!(code.to_string(), expected);
        }
        assert_eq!(FaultCode::iter().count(), expected.len());
    }

    #[test]
    fn anomaly_carries_kind_and_code() {
        let functional = FlightError::functional(FaultCode::InvalidEntity, "bad data");
        let anomaly = functional.to_anomaly();
        assert_eq!(anomaly.kind, "functional");
        assert_eq!(anomaly.code, "invalid_entity_data");
        assert_eq!(anomaly.message, "bad data");

        let technical = FlightError::missing_argument("aircraft");
        assert!(!technical.is_functional());
        assert_eq!(technical.code(), FaultCode::MissingArgument);
        assert!(technical.message().contains("aircraft"));
    }
}
