pub mod fetch;
pub mod git_exec;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum GitError {
    #[error("git executable not found")]
    #[diagnostic(
        code(gfetch::git::not_found),
        help("Ensure that 'git' is installed and available in your PATH.")
    )]
    NotFound(#[source] std::io::Error),

    #[error("failed to execute git command")]
    #[diagnostic(code(gfetch::git::execution_failed))]
    Io(#[from] std::io::Error),

    #[error("not in a git repository")]
    #[diagnostic(
        code(gfetch::git::not_in_repo),
        help("Run gfetch from inside a git clone.")
    )]
    NotInRepo { stderr: String },

    #[error("exit status {code}")]
    #[diagnostic(code(gfetch::git::command_failed))]
    Failed { code: i32, stderr: String },
}

impl GitError {
    /// Everything the subprocess wrote to its error stream, if anything
    /// was captured before the failure surfaced.
    pub fn detail(&self) -> &str {
        match self {
            GitError::NotInRepo { stderr } | GitError::Failed { stderr, .. } => stderr,
            GitError::NotFound(_) | GitError::Io(_) => "",
        }
    }
}
