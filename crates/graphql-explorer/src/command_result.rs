use crate::output_utils;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// Report a failed command, printing its error chain to stderr.
    pub fn failure(err: anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {err:#}", output_utils::RED_X))
    }

    /// Turn a command body's outcome into a result: `Ok` output goes to
    /// stdout, errors go through [`CommandResult::failure`].
    pub fn from_output(output: anyhow::Result<String>) -> Self {
        match output {
            Ok(stdout) => Self::stdout(format_args!("{stdout}")),
            Err(err) => Self::failure(err),
        }
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
