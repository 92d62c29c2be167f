/// Convenience result type used across the emitter.
pub type EmfResult<T> = Result<T, EmfError>;

/// Top-level error taxonomy for metafile emission.
///
/// Every variant is terminal for the emission in progress: the caller must treat
/// any bytes already handed to the sink as incomplete output.
#[derive(thiserror::Error, Debug)]
pub enum EmfError {
    /// The sink refused bytes or accepted fewer than requested.
    #[error("sink write error at offset {offset}: {source}")]
    SinkWrite {
        /// Stream offset of the write that failed.
        offset: u64,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A shape that cannot be emitted (no segments, non-finite coordinates).
    #[error("invalid shape #{index}: {reason}")]
    InvalidShape {
        /// Position of the shape in the input collection.
        index: usize,
        /// Human readable description of the defect.
        reason: String,
    },

    /// Emission diverged from the totals computed by the stats pass.
    #[error("size mismatch in {what}: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Which quantity diverged.
        what: &'static str,
        /// Value promised by the stats pass or the record header.
        expected: u64,
        /// Value actually produced.
        actual: u64,
    },

    /// Invalid emission options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Emitter operation invoked out of order.
    #[error("emitter state error: {0}")]
    State(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmfError {
    /// Build an [`EmfError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EmfError::State`] value.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build an [`EmfError::InvalidShape`] value.
    pub fn invalid_shape(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn size_mismatch(what: &'static str, expected: u64, actual: u64) -> Self {
        Self::SizeMismatch {
            what,
            expected,
            actual,
        }
    }
}

/// Narrow a computed total to the 32-bit field that stores it.
pub(crate) fn narrow(v: u64, what: &str) -> EmfResult<u32> {
    u32::try_from(v).map_err(|_| EmfError::validation(format!("{what} {v} exceeds 32 bits")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
