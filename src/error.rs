use std::fmt;

/// Errors returned by the bounded bisection functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BisectError {
    /// The lower bound was negative.
    InvalidArgument {
        /// The offending lower bound
        lo: isize,
    },
}

impl fmt::Display for BisectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { lo } => {
                write!(f, "low parameter must be >= 0, received {lo}")
            }
        }
    }
}

impl std::error::Error for BisectError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_bad_value() {
        let err = BisectError::InvalidArgument { lo: -3 };
        assert_eq!(err.to_string(), "low parameter must be >= 0, received -3");
    }
}
