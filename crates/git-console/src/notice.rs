use git::LaunchError;
use std::collections::VecDeque;

/// How severe a notice is; maps onto the prompt level shown by the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A modal message raised by a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Git is missing from the search path
    pub fn git_not_found() -> Self {
        Self::error(
            "Git not found",
            "Git is not installed or not in your PATH.\n\n\
             Install Git from git-scm.com and restart this application.",
        )
    }

    /// A command ran but exited with a non-zero code
    pub fn command_failed(exit_code: i32) -> Self {
        Self::error(
            "Git error",
            format!("Command failed with code {}. Check the log.", exit_code),
        )
    }

    /// Add & Commit was pressed with a blank message
    pub fn commit_message_required() -> Self {
        Self::warning("Commit message required", "Please enter a commit message.")
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&LaunchError> for Notice {
    fn from(err: &LaunchError) -> Self {
        match err {
            LaunchError::NotFound { .. } => Notice::git_not_found(),
            LaunchError::Spawn { program, source } => Notice::error(
                format!("Could not launch {}", program),
                source.to_string(),
            ),
        }
    }
}

/// A yes/no question asked before a destructive action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
}

impl Confirmation {
    /// Map the index of the chosen answer to a decision. Only the first
    /// answer confirms; a dismissed prompt (an `Err`) does not.
    pub fn is_confirmed<E>(&self, answer: Result<usize, E>) -> bool {
        matches!(answer, Ok(0))
    }
}

/// Asked before `git restore .`
pub const DISCARD_CONFIRMATION: Confirmation = Confirmation {
    title: "Discard local changes?",
    message: "This will discard ALL uncommitted changes in tracked files and \
              restore them to the last commit.\n\n\
              Untracked files (new files not added to git) will NOT be removed.\n\n\
              Are you sure you want to continue?",
    confirm: "Yes",
    cancel: "No",
};

/// Notices waiting to be shown, one at a time and in the order raised.
///
/// At most one notice is on screen; the next is only handed out after the
/// current one has been dismissed.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
    showing: bool,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notices: impl IntoIterator<Item = Notice>) {
        self.pending.extend(notices);
    }

    /// The next notice to put on screen, or `None` while one is already up
    /// or nothing is waiting
    pub fn next_to_show(&mut self) -> Option<Notice> {
        if self.showing {
            return None;
        }
        let notice = self.pending.pop_front()?;
        self.showing = true;
        Some(notice)
    }

    /// The notice on screen was closed
    pub fn dismiss(&mut self) {
        self.showing = false;
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Number of notices not yet shown
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
