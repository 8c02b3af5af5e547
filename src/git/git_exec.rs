use super::GitError;
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Default)]
pub struct ExecOptions {
    /// Run git in this directory instead of the process working directory.
    pub current_dir: Option<PathBuf>,
    /// Discard the child's stdout instead of letting it through.
    pub quiet: bool,
}

/// Runs `git` with the given arguments, blocking until it exits.
///
/// stdout is inherited (or nulled when quiet); stderr is always piped into
/// an in-memory buffer so a failure can carry the full diagnostic text.
pub fn exec(args: Vec<String>, options: ExecOptions) -> Result<(), GitError> {
    let mut cmd = Command::new("git");
    cmd.args(&args);

    if let Some(dir) = &options.current_dir {
        cmd.current_dir(dir);
    }

    if options.quiet {
        cmd.stdout(Stdio::null());
    } else {
        cmd.stdout(Stdio::inherit());
    }
    cmd.stderr(Stdio::piped());

    // output() waits for exit and drains the stderr pipe completely, so the
    // buffer is whole before we look at the status.
    let output = cmd.output().map_err(classify_spawn_error)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr)
            .trim_end()
            .to_string();
        // Signal termination carries no exit code.
        let code = output.status.code().unwrap_or(-1);
        return Err(map_git_error(code, stderr));
    }

    Ok(())
}

fn classify_spawn_error(e: std::io::Error) -> GitError {
    match e.kind() {
        std::io::ErrorKind::NotFound => GitError::NotFound(e),
        _ => GitError::Io(e),
    }
}

fn map_git_error(code: i32, stderr: String) -> GitError {
    match stderr.as_str() {
        s if s.contains("fatal: not a git repository") => GitError::NotInRepo { stderr },
        _ => GitError::Failed { code, stderr },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_flag() {
        let result = exec(
            vec!["--version".to_string()],
            ExecOptions {
                quiet: true,
                ..Default::default()
            },
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_exec_unknown_subcommand() {
        let result = exec(
            vec!["definitely-not-a-subcommand".to_string()],
            ExecOptions {
                quiet: true,
                ..Default::default()
            },
        );
        match result {
            Err(GitError::Failed { code, stderr }) => {
                assert_ne!(code, 0);
                assert!(!stderr.is_empty());
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_spawn_not_found() {
        let e = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert!(matches!(classify_spawn_error(e), GitError::NotFound(_)));
    }

    #[test]
    fn test_classify_spawn_other() {
        let e = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(classify_spawn_error(e), GitError::Io(_)));
    }

    #[test]
    fn test_map_git_error_not_in_repo() {
        let stderr =
            "fatal: not a git repository (or any of the parent directories): .git".to_string();
        let error = map_git_error(128, stderr);
        assert!(matches!(error, GitError::NotInRepo { .. }));
    }

    #[test]
    fn test_map_git_error_command_failed() {
        let stderr = "some other error".to_string();
        let error = map_git_error(1, stderr.clone());
        assert!(matches!(error, GitError::Failed { code: 1, stderr: s } if s == stderr));
    }
}
