use crate::config;
use crate::git::GitError;
use crate::git::fetch::{FetchOptions, fetch};
use crate::report::{StderrDiagnostics, report_fetch};
use miette::{Diagnostic, Result};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum FetchError {
    #[error("Git error: {0}")]
    #[diagnostic(code(gfetch::fetch::git_error), help("Are you in a git repository?"))]
    GitError(#[from] GitError),
}

pub fn run(remote: Option<String>, refspec: Option<String>, strict: bool) -> Result<()> {
    let config = config::load()?;

    let options = FetchOptions {
        remote: remote.unwrap_or(config.fetch.remote),
        refspec: refspec.unwrap_or(config.fetch.refspec),
        current_dir: None,
    };

    let result = fetch(&options);
    report_fetch(&mut StderrDiagnostics, &result);

    // Default policy swallows the failure after the diagnostic line;
    // --strict escalates it to a non-zero process exit.
    if strict {
        result.map_err(FetchError::GitError)?;
    }

    Ok(())
}
