use derive_more::{Display, Error};
use log::{debug, trace};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Output};

use crate::command::{GitCommand, GIT_PROGRAM};

/// Captured result of a process that ran to completion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Standard output, decoded lossily as UTF-8
    pub stdout: String,
    /// Standard error, decoded lossily as UTF-8
    pub stderr: String,
    /// Exit code; a process killed by a signal reports the negated signal
    /// number on Unix and -1 elsewhere
    pub exit_code: i32,
}

impl CommandOutput {
    /// Whether the process exited with code zero
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    fn from_output(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: exit_code(output.status),
        }
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// The process could not be started at all
#[derive(Debug, Display, Error)]
pub enum LaunchError {
    /// The program is not on the search path
    #[display(fmt = "{} was not found on the search path", program)]
    NotFound {
        #[error(not(source))]
        program: String,
    },
    /// The program exists but the OS refused to start it
    #[display(fmt = "failed to launch {}: {}", program, source)]
    Spawn { program: String, source: io::Error },
}

impl LaunchError {
    fn from_io(program: &str, source: io::Error) -> Self {
        let program = program.to_string();
        if source.kind() == io::ErrorKind::NotFound {
            LaunchError::NotFound { program }
        } else {
            LaunchError::Spawn { program, source }
        }
    }

    /// The program that failed to launch
    pub fn program(&self) -> &str {
        match self {
            LaunchError::NotFound { program } | LaunchError::Spawn { program, .. } => program,
        }
    }
}

/// Runs a [`GitCommand`] to completion in a working directory.
///
/// Implementations block until the process exits. This is the seam where an
/// asynchronous runner would plug in.
pub trait CommandRunner {
    /// The program name shown in front of every command line
    fn program(&self) -> &str {
        GIT_PROGRAM
    }

    /// Run the command in `work_dir` and capture its output
    fn run(&self, command: &GitCommand, work_dir: &Path) -> Result<CommandOutput, LaunchError>;
}

/// Runs commands through the git binary on the search path
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    /// A runner for the `git` binary
    pub fn new() -> Self {
        Self::with_program(GIT_PROGRAM)
    }

    /// A runner for a different binary taking the same argument vectors
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for GitCli {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, command: &GitCommand, work_dir: &Path) -> Result<CommandOutput, LaunchError> {
        trace!("Spawning {:?} {:?} in {:?}", self.program, command.tokens(), work_dir);

        let output = Command::new(&self.program)
            .args(command.tokens())
            .current_dir(work_dir)
            .output()
            .map_err(|source| LaunchError::from_io(&self.program, source))?;

        let output = CommandOutput::from_output(output);
        debug!(
            "`{}` exited with code {} ({} bytes stdout, {} bytes stderr)",
            command.command_line(&self.program),
            output.exit_code,
            output.stdout.len(),
            output.stderr.len()
        );

        Ok(output)
    }
}
