use crate::git::GitError;

/// Sink for operator-facing diagnostic lines. Injected instead of writing
/// to an ambient global so callers and tests can capture the output.
pub trait Diagnostics {
    fn diagnostic(&mut self, line: &str);
}

pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn diagnostic(&mut self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Renders a fetch outcome: silence on success, exactly one line on failure
/// carrying both the cause and the full captured stderr.
pub fn report_fetch(sink: &mut impl Diagnostics, result: &Result<(), GitError>) {
    if let Err(err) = result {
        sink.diagnostic(&format!("Error: {}, Details: {}", err, err.detail()));
    }
}
