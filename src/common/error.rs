//! Error types for framesim.

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in framesim.
///
/// The simulation itself is pure computation over fixed input, so the only
/// recoverable error is rejecting malformed input at construction time.
/// Internal precondition violations (inserting into a full frame set,
/// evicting a non-resident page) are engine bugs and panic instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A simulator was constructed with zero frames.
    #[error("invalid capacity: {0} (at least one frame is required)")]
    InvalidCapacity(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(
            format!("{}", err),
            "invalid capacity: 0 (at least one frame is required)"
        );
    }

    #[test]
    fn test_result_type_alias() {
        // This function returns our Result type
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
