use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use git::{CommandOutput, CommandRunner, GitCommand, LaunchError};
use git_console::{Action, Console, NoticeLevel, NoticeQueue, DISCARD_CONFIRMATION};
use pretty_assertions::assert_eq;

/// Records every call and replays scripted results; unscripted calls succeed
/// with empty output.
#[derive(Default)]
struct ScriptedRunner {
    calls: RefCell<Vec<(Vec<String>, PathBuf)>>,
    results: RefCell<VecDeque<Result<CommandOutput, LaunchError>>>,
}

impl ScriptedRunner {
    fn then(self, result: Result<CommandOutput, LaunchError>) -> Self {
        self.results.borrow_mut().push_back(result);
        self
    }

    fn then_exit(self, stdout: &str, stderr: &str, exit_code: i32) -> Self {
        self.then(Ok(CommandOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
        }))
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|(args, _)| args.clone()).collect()
    }

    fn work_dirs(&self) -> Vec<PathBuf> {
        self.calls.borrow().iter().map(|(_, dir)| dir.clone()).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &GitCommand, work_dir: &Path) -> Result<CommandOutput, LaunchError> {
        self.calls
            .borrow_mut()
            .push((command.tokens().to_vec(), work_dir.to_path_buf()));
        self.results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(CommandOutput::default()))
    }
}

fn tokens(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn console(runner: ScriptedRunner) -> Console<ScriptedRunner> {
    Console::new(PathBuf::from("/work/repo"), runner)
}

#[test]
fn test_first_entry_is_banner() {
    let console = console(ScriptedRunner::default());

    assert_eq!(console.log().len(), 1);
    assert!(console.log().blocks()[0].starts_with("Repo: /work/repo\n"));
    assert!(console.runner().calls().is_empty());
}

#[test]
fn test_each_action_dispatches_one_command() {
    let expected = [
        (Action::Status, tokens(&["status"])),
        (Action::Fetch, tokens(&["fetch"])),
        (Action::Pull, tokens(&["pull"])),
        (Action::Push, tokens(&["push"])),
        (Action::RecentLog, tokens(&["log", "--oneline", "-n", "10"])),
    ];

    for (action, args) in expected {
        let mut console = console(ScriptedRunner::default());

        let notice = console.run_action(action);

        assert_eq!(notice, None);
        assert_eq!(console.runner().calls(), vec![args]);
        assert_eq!(
            console.runner().work_dirs(),
            vec![PathBuf::from("/work/repo")]
        );
        assert_eq!(console.log().len(), 2);
    }
}

#[test]
fn test_action_labels() {
    let labels: Vec<_> = Action::ALL.iter().map(|a| a.label()).collect();

    assert_eq!(labels, ["Status", "Fetch", "Pull", "Push", "Log (10)"]);
}

#[test]
fn test_blank_commit_message_dispatches_nothing() {
    for message in ["", "   ", "\t\n "] {
        let mut console = console(ScriptedRunner::default());

        let notices = console.add_and_commit(message);

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert_eq!(notices[0].title, "Commit message required");
        assert!(console.runner().calls().is_empty());
        assert_eq!(console.log().len(), 1);
    }
}

#[test]
fn test_commit_runs_add_then_commit() {
    let mut console = console(ScriptedRunner::default());

    let notices = console.add_and_commit("fix bug");

    assert!(notices.is_empty());
    assert_eq!(
        console.runner().calls(),
        vec![tokens(&["add", "."]), tokens(&["commit", "-m", "fix bug"])]
    );
    assert_eq!(console.log().len(), 3);
    assert!(console.log().blocks()[1].starts_with("$ git add .\n"));
    assert!(console.log().blocks()[2].starts_with("$ git commit -m fix bug\n"));
}

#[test]
fn test_commit_message_is_trimmed() {
    let mut console = console(ScriptedRunner::default());

    console.add_and_commit("  fix bug \n");

    assert_eq!(
        console.runner().calls()[1],
        tokens(&["commit", "-m", "fix bug"])
    );
}

#[test]
fn test_commit_still_runs_when_add_fails() {
    let runner = ScriptedRunner::default()
        .then_exit("", "fatal: not a git repository\n", 128)
        .then_exit("", "fatal: not a git repository\n", 128);
    let mut console = console(runner);

    let notices = console.add_and_commit("fix bug");

    assert_eq!(console.runner().calls().len(), 2);
    assert_eq!(notices.len(), 2);
    assert!(notices.iter().all(|n| n.is_error()));
    assert_eq!(console.log().len(), 3);
}

#[test]
fn test_discard_declined_does_nothing() {
    let mut console = console(ScriptedRunner::default());

    let notice = console.discard_changes(false);

    assert_eq!(notice, None);
    assert!(console.runner().calls().is_empty());
    assert_eq!(console.log().len(), 1);
}

#[test]
fn test_dismissed_discard_prompt_does_nothing() {
    let mut console = console(ScriptedRunner::default());

    for answer in [Ok(1), Err("canceled")] {
        let confirmed = DISCARD_CONFIRMATION.is_confirmed(answer);
        assert_eq!(console.discard_changes(confirmed), None);
    }

    assert!(console.runner().calls().is_empty());
    assert_eq!(console.log().len(), 1);
}

#[test]
fn test_discard_confirmed_restores() {
    let mut console = console(ScriptedRunner::default());

    let notice = console.discard_changes(true);

    assert_eq!(notice, None);
    assert_eq!(console.runner().calls(), vec![tokens(&["restore", "."])]);
    assert_eq!(console.log().len(), 2);
}

#[test]
fn test_zero_exit_raises_no_notice() {
    let runner = ScriptedRunner::default().then_exit("", "warning: something\n", 0);
    let mut console = console(runner);

    let notice = console.run_action(Action::Fetch);

    assert_eq!(notice, None);
    assert!(console.log().last().unwrap().contains("[stderr]\nwarning: something\n"));
}

#[test]
fn test_nonzero_exit_records_output_then_raises_notice() {
    let runner = ScriptedRunner::default().then_exit(
        "Everything up-to-date?\n",
        "fatal: The current branch has no upstream branch.\n",
        128,
    );
    let mut console = console(runner);

    let notice = console.run_action(Action::Push).expect("push failed");

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Command failed with code 128. Check the log.");

    let block = console.log().last().unwrap();
    assert_eq!(
        block,
        format!(
            "$ git push\nEverything up-to-date?\n\n[stderr]\n\
             fatal: The current branch has no upstream branch.\n\n{}\n",
            "-".repeat(60)
        )
    );
}

#[test]
fn test_missing_git_records_nothing() {
    let runner = ScriptedRunner::default().then(Err(LaunchError::NotFound {
        program: "git".to_string(),
    }));
    let mut console = console(runner);

    let notice = console.run_action(Action::Status).expect("git is missing");

    assert_eq!(notice.title, "Git not found");
    assert_eq!(console.log().len(), 1);
}

#[test]
fn test_spawn_failure_records_nothing() {
    let runner = ScriptedRunner::default().then(Err(LaunchError::Spawn {
        program: "git".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    }));
    let mut console = console(runner);

    let notice = console.run_action(Action::Pull).expect("git could not start");

    assert_eq!(notice.title, "Could not launch git");
    assert_eq!(console.log().len(), 1);
}

#[test]
fn test_failed_add_and_commit_notices_show_in_order() {
    let runner = ScriptedRunner::default()
        .then_exit("", "fatal: pathspec error\n", 1)
        .then_exit("", "nothing added to commit\n", 2);
    let mut console = console(runner);
    let mut queue = NoticeQueue::new();

    queue.push(console.add_and_commit("fix bug"));

    let first = queue.next_to_show().expect("add failed");
    assert_eq!(first.message, "Command failed with code 1. Check the log.");
    assert_eq!(queue.next_to_show(), None);

    queue.dismiss();
    let second = queue.next_to_show().expect("commit failed");
    assert_eq!(second.message, "Command failed with code 2. Check the log.");

    queue.dismiss();
    assert_eq!(queue.next_to_show(), None);
}
