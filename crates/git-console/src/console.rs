use log::{info, warn};
use std::path::{Path, PathBuf};

use git::{CommandRunner, GitCommand};

use crate::notice::Notice;
use crate::transcript::{self, LogTranscript};

/// Number of commits shown by [`Action::RecentLog`]
const RECENT_LOG_COUNT: usize = 10;

/// The single-command buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Status,
    Fetch,
    Pull,
    Push,
    RecentLog,
}

impl Action {
    /// Every action, in button order
    pub const ALL: [Action; 5] = [
        Action::Status,
        Action::Fetch,
        Action::Pull,
        Action::Push,
        Action::RecentLog,
    ];

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Action::Status => "Status",
            Action::Fetch => "Fetch",
            Action::Pull => "Pull",
            Action::Push => "Push",
            Action::RecentLog => "Log (10)",
        }
    }

    /// Stable element id for the button
    pub fn id(self) -> &'static str {
        match self {
            Action::Status => "status",
            Action::Fetch => "fetch",
            Action::Pull => "pull",
            Action::Push => "push",
            Action::RecentLog => "recent-log",
        }
    }

    pub fn command(self) -> GitCommand {
        match self {
            Action::Status => GitCommand::status(),
            Action::Fetch => GitCommand::fetch(),
            Action::Pull => GitCommand::pull(),
            Action::Push => GitCommand::push(),
            Action::RecentLog => GitCommand::log_oneline(RECENT_LOG_COUNT),
        }
    }
}

/// Application state behind the window: the fixed working directory, the
/// runner, and the log.
///
/// Handlers run their commands to completion and return the notices they
/// raise, in order. Any transcript a command produces is already in the log
/// by the time its notice is returned.
pub struct Console<R> {
    work_dir: PathBuf,
    runner: R,
    log: LogTranscript,
}

impl<R: CommandRunner> Console<R> {
    pub fn new(work_dir: PathBuf, runner: R) -> Self {
        let log = LogTranscript::new(&work_dir);
        Self {
            work_dir,
            runner,
            log,
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn log(&self) -> &LogTranscript {
        &self.log
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn append_transcript(&mut self, block: String) {
        self.log.append(block);
    }

    /// Run one command and record its transcript.
    ///
    /// A launch failure records nothing and yields its notice; a non-zero
    /// exit records the transcript first, then yields a failure notice.
    pub fn dispatch(&mut self, command: &GitCommand) -> Option<Notice> {
        let command_line = command.command_line(self.runner.program());
        info!("Running `{}` in {}", command_line, self.work_dir.display());

        match self.runner.run(command, &self.work_dir) {
            Ok(output) => {
                self.append_transcript(transcript::render_block(&command_line, &output));
                if output.success() {
                    None
                } else {
                    warn!("`{}` failed with code {}", command_line, output.exit_code);
                    Some(Notice::command_failed(output.exit_code))
                }
            }
            Err(err) => {
                warn!("Could not run `{}`: {}", command_line, err);
                Some(Notice::from(&err))
            }
        }
    }

    pub fn run_action(&mut self, action: Action) -> Option<Notice> {
        self.dispatch(&action.command())
    }

    /// Stage everything and commit with the trimmed `message`.
    ///
    /// A blank message raises a warning and runs nothing. Otherwise `add .`
    /// and `commit -m` always run as a pair, even when `add` fails.
    pub fn add_and_commit(&mut self, message: &str) -> Vec<Notice> {
        let message = message.trim();
        if message.is_empty() {
            return vec![Notice::commit_message_required()];
        }

        let mut notices = Vec::new();
        notices.extend(self.dispatch(&GitCommand::add_all()));
        notices.extend(self.dispatch(&GitCommand::commit(message)));
        notices
    }

    /// Restore tracked files, but only once the user has said yes
    pub fn discard_changes(&mut self, confirmed: bool) -> Option<Notice> {
        if !confirmed {
            info!("Discard local changes cancelled");
            return None;
        }
        self.dispatch(&GitCommand::restore_all())
    }
}
