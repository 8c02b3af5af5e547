use super::GitError;
use super::git_exec::{ExecOptions, exec};
use std::path::PathBuf;

pub struct FetchOptions {
    pub remote: String,
    pub refspec: String,
    /// Repository to fetch into; defaults to the process working directory.
    pub current_dir: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            refspec: "HEAD".to_string(),
            current_dir: None,
        }
    }
}

pub fn fetch_args(options: &FetchOptions) -> Vec<String> {
    vec![
        "fetch".to_string(),
        options.remote.clone(),
        options.refspec.clone(),
    ]
}

/// Refreshes the remote-tracking state for the configured remote ref.
///
/// Blocks until git exits. No retry, no timeout; a failure comes back as a
/// structured error carrying the captured stderr, and the caller picks the
/// policy (log, escalate, ...).
pub fn fetch(options: &FetchOptions) -> Result<(), GitError> {
    exec(
        fetch_args(options),
        ExecOptions {
            current_dir: options.current_dir.clone(),
            ..Default::default()
        },
    )
}
