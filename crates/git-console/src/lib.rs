//! Git Console core
//!
//! Everything the window needs that does not depend on gpui: the working
//! directory, the append-only log, the notices raised by handlers, and the
//! [`Console`] controller that dispatches git commands.

mod console;
mod notice;
mod transcript;
mod workdir;

pub use console::{Action, Console};
pub use notice::{Confirmation, Notice, NoticeLevel, NoticeQueue, DISCARD_CONFIRMATION};
pub use transcript::{banner, render_block, separator, LogTranscript, SEPARATOR_WIDTH};
pub use workdir::{program_dir, resolve_work_dir};
