//! Error types for position reconciliation.

/// Top-level error type for posrecon.
#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    #[error("{kind} is an unsupported transaction type")]
    UnsupportedTransactionType { kind: String },

    #[error("transaction for {symbol} requires a Cash entry in the starting positions")]
    MissingCashEntry { symbol: String },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("missing section header {header}")]
    MissingSection { header: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ReconError> for std::process::ExitCode {
    fn from(err: &ReconError) -> Self {
        let code: u8 = match err {
            ReconError::Io(_) => 1,
            ReconError::MalformedRecord { .. } | ReconError::MissingSection { .. } => 2,
            ReconError::UnsupportedTransactionType { .. }
            | ReconError::MissingCashEntry { .. } => 3,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ReconError::UnsupportedTransactionType {
            kind: "SPLIT".into(),
        };
        assert_eq!(err.to_string(), "SPLIT is an unsupported transaction type");

        let err = ReconError::MalformedRecord {
            line: 7,
            reason: "expected 4 fields, found 3".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed record at line 7: expected 4 fields, found 3"
        );
    }

    #[test]
    fn io_errors_convert_transparently() {
        let err: ReconError = std::io::Error::other("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
