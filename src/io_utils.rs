use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check the path and try again.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn deperiod_cli_error(context: &str, err: crate::DeperiodError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &crate::DeperiodError) -> String {
    use crate::DeperiodError::*;
    match err {
        Config(msg) => format!("{msg}. Choose l >= ceil(log2 n) + p + 1."),
        LengthMismatch { expected, actual } => {
            format!("expected {expected} bits but got {actual}. Check --n.")
        }
        EmptySequence => "empty bit sequence".to_string(),
        NonConvergence { passes, corrections } => format!(
            "no convergence after {passes} passes / {corrections} corrections. Try other parameters."
        ),
        Decode(msg) => format!("{msg}. Was the word encoded with the same n, l and p?"),
        InvalidBit(c) => format!("invalid character {c:?}. Bits must be 0 or 1."),
        PeriodBound { start, period } => {
            format!("window at {start} still has period {period}. This is a bug.")
        }
        RoundTrip { input } => format!("decoding {input} did not round trip. This is a bug."),
        Io(e) => format!("{e}"),
        Csv(e) => format!("{e}"),
    }
}

/// Read a textual bit string from `path`.
pub fn read_bits_file(path: &Path) -> Result<Vec<bool>, CliError> {
    let text =
        std::fs::read_to_string(path).map_err(|e| io_cli_error("reading input file", path, e))?;
    crate::parse_bits(&text).map_err(|e| deperiod_cli_error("parsing input file", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeperiodError;

    #[test]
    fn hint_mentions_window_rule() {
        let err = deperiod_cli_error("encode", DeperiodError::Config("window too short".into()));
        assert!(err.to_string().starts_with("encode: window too short."));
        assert!(err.to_string().contains("ceil(log2 n)"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_bits_file(&path).unwrap_err();
        assert!(err.msg.contains("Check that the file exists"));
    }

    #[test]
    fn reads_bits_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bits.txt");
        std::fs::write(&path, "1010\n0101\n").unwrap();
        assert_eq!(read_bits_file(&path).unwrap().len(), 8);
    }
}
