use std::fmt;

/// The binary every [`GitCommand`] is run with by default
pub const GIT_PROGRAM: &str = "git";

/// An argument vector for a single git invocation, without the program name.
///
/// Tokens are kept as literal strings and handed to process creation one by
/// one; they are never joined into a shell string. A command always has at
/// least one token (the subcommand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
}

impl GitCommand {
    /// Start a command with the given subcommand
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            args: vec![subcommand.into()],
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The tokens following the program name
    pub fn tokens(&self) -> &[String] {
        &self.args
    }

    /// The subcommand (first token)
    pub fn subcommand(&self) -> &str {
        &self.args[0]
    }

    /// Render the command as it is shown to the user, e.g. `git log --oneline`
    pub fn command_line(&self, program: &str) -> String {
        let mut line = String::from(program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// `git status`
    pub fn status() -> Self {
        Self::new("status")
    }

    /// `git fetch`
    pub fn fetch() -> Self {
        Self::new("fetch")
    }

    /// `git pull`
    pub fn pull() -> Self {
        Self::new("pull")
    }

    /// `git push`
    pub fn push() -> Self {
        Self::new("push")
    }

    /// `git log --oneline -n <count>`
    pub fn log_oneline(count: usize) -> Self {
        Self::new("log")
            .args(["--oneline", "-n"])
            .arg(count.to_string())
    }

    /// `git add .`
    pub fn add_all() -> Self {
        Self::new("add").arg(".")
    }

    /// `git commit -m <message>`; the message stays a single token
    pub fn commit(message: impl Into<String>) -> Self {
        Self::new("commit").arg("-m").arg(message)
    }

    /// `git restore .`
    pub fn restore_all() -> Self {
        Self::new("restore").arg(".")
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line(GIT_PROGRAM))
    }
}
