pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while constructing or parsing a puzzle definition.
///
/// Search exhaustion is never an error: both solvers report "no solution
/// found" as a normal `None` return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("puzzle dimensions must be at least 2x2, got {width}x{height}")]
    BadDimensions { width: usize, height: usize },

    #[error("{kind} buffer holds {got} values, expected {expected}")]
    BufferSize {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unexpected character '{ch}' while reading {expected}")]
    UnexpectedToken { ch: char, expected: &'static str },

    #[error("puzzle definition ended early while reading {0}")]
    UnexpectedEnd(&'static str),
}
