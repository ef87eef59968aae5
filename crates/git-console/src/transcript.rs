//! The append-only command log
//!
//! Each git invocation becomes one text block. Blocks are only ever appended;
//! the first block is always the banner naming the working directory.

use std::path::Path;

use git::CommandOutput;

/// Width of the dashed line closing every block
pub const SEPARATOR_WIDTH: usize = 60;

/// The dashed line closing every block
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// The first log entry, naming the directory commands run in
pub fn banner(work_dir: &Path) -> String {
    format!("Repo: {}\n{}\n", work_dir.display(), separator())
}

/// Render one invocation: the command line, stdout verbatim, stderr under a
/// `[stderr]` marker when present, then the separator.
pub fn render_block(command_line: &str, output: &CommandOutput) -> String {
    let mut block = format!("$ {}\n", command_line);
    block.push_str(&output.stdout);
    if !output.stderr.is_empty() {
        block.push_str("\n[stderr]\n");
        block.push_str(&output.stderr);
    }
    block.push('\n');
    block.push_str(&separator());
    block.push('\n');
    block
}

/// Ordered sequence of rendered blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTranscript {
    blocks: Vec<String>,
}

impl LogTranscript {
    /// Start a log with the banner for `work_dir`
    pub fn new(work_dir: &Path) -> Self {
        Self {
            blocks: vec![banner(work_dir)],
        }
    }

    pub fn append(&mut self, block: String) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Number of blocks, banner included
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// A log always holds its banner, so this is never true
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.blocks.last().map(String::as_str)
    }

    /// The whole log as one string
    pub fn text(&self) -> String {
        self.blocks.concat()
    }
}
