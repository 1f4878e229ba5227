use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeperiodError {
    /// Invalid (n, l, p) combination.
    #[error("config error: {0}")]
    Config(String),

    /// Input does not have the length the configuration requires.
    #[error("length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Period routines were handed an empty sequence.
    #[error("empty sequence has no period")]
    EmptySequence,

    /// The encode scan loop hit its iteration cap.
    #[error("encoder did not converge after {passes} passes and {corrections} corrections")]
    NonConvergence { passes: usize, corrections: usize },

    /// Encoded data was not produced by the matching encoder.
    #[error("decode error: {0}")]
    Decode(String),

    /// Character other than `0` or `1` in a textual bit string.
    #[error("invalid bit character {0:?}")]
    InvalidBit(char),

    /// A window of the encoded output still has a short period.
    #[error("window at {start} has period {period}")]
    PeriodBound { start: usize, period: usize },

    /// Decoding did not reproduce the input.
    #[error("round trip mismatch for input {input}")]
    RoundTrip { input: String },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
