use std::path::PathBuf;

use gpui::*;
use log::debug;

use git::GitCli;
use git_console::{Action, Console, Notice, NoticeLevel, NoticeQueue, DISCARD_CONFIRMATION};

use crate::text_field::{Submitted, TextField};
use crate::ui::{group_box, h_flex, v_flex, ActiveTheme, Button};

pub struct GitConsoleApp {
    /// Working directory, runner and log
    console: Console<GitCli>,

    /// The commit message entry
    commit_field: Entity<TextField>,

    /// Scroll handle for the log view
    log_scroll_handle: ScrollHandle,

    /// Notices raised by handlers, shown one prompt at a time
    notices: NoticeQueue,
}

impl GitConsoleApp {
    pub fn new(work_dir: PathBuf, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let commit_field = cx.new(|cx| TextField::new("Describe your changes", cx));

        // Enter in the commit field behaves like the Add & Commit button
        cx.subscribe_in(
            &commit_field,
            window,
            |this, _field, _: &Submitted, window, cx| {
                this.add_and_commit(window, cx);
            },
        )
        .detach();

        Self {
            console: Console::new(work_dir, GitCli::new()),
            commit_field,
            log_scroll_handle: ScrollHandle::new(),
            notices: NoticeQueue::new(),
        }
    }

    fn run_action(&mut self, action: Action, window: &mut Window, cx: &mut Context<Self>) {
        let notice = self.console.run_action(action);
        self.after_dispatch(notice.into_iter().collect(), window, cx);
    }

    fn add_and_commit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let message = self.commit_field.read(cx).text().to_string();
        let notices = self.console.add_and_commit(&message);
        self.after_dispatch(notices, window, cx);
    }

    fn confirm_discard(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let answer = window.prompt(
            PromptLevel::Warning,
            DISCARD_CONFIRMATION.title,
            Some(DISCARD_CONFIRMATION.message),
            &[DISCARD_CONFIRMATION.confirm, DISCARD_CONFIRMATION.cancel],
            cx,
        );

        cx.spawn_in(window, async move |this, cx| {
            let confirmed = DISCARD_CONFIRMATION.is_confirmed(answer.await);
            this.update_in(cx, |this, window, cx| {
                let notice = this.console.discard_changes(confirmed);
                this.after_dispatch(notice.into_iter().collect(), window, cx);
            })?;
            anyhow::Ok(())
        })
        .detach_and_log_err(cx);
    }

    /// Keep the newest log entry visible, then surface any notices
    fn after_dispatch(&mut self, notices: Vec<Notice>, window: &mut Window, cx: &mut Context<Self>) {
        let last = self.console.log().len().saturating_sub(1);
        self.log_scroll_handle.scroll_to_item(last);

        self.notices.push(notices);
        self.show_next_notice(window, cx);
        cx.notify();
    }

    /// Notices are shown one at a time, in the order they were raised
    fn show_next_notice(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(notice) = self.notices.next_to_show() else {
            return;
        };
        debug!("Showing notice: {}", notice.title);

        let level = match notice.level {
            NoticeLevel::Warning => PromptLevel::Warning,
            NoticeLevel::Error => PromptLevel::Critical,
        };
        let answer = window.prompt(
            level,
            &notice.title,
            Some(notice.message.as_str()),
            &["OK"],
            cx,
        );

        cx.spawn_in(window, async move |this, cx| {
            answer.await.ok();
            this.update_in(cx, |this, window, cx| {
                this.notices.dismiss();
                this.show_next_notice(window, cx);
            })?;
            anyhow::Ok(())
        })
        .detach_and_log_err(cx);
    }

    fn render_action_row(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .gap_1()
            .children(Action::ALL.iter().map(|&action| {
                Button::new(action.id())
                    .label(action.label())
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.run_action(action, window, cx);
                    }))
            }))
    }

    fn render_commit_row(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .gap_2()
            .child(div().flex_shrink_0().child("Commit message:"))
            .child(self.commit_field.clone())
            .child(
                Button::new("add-and-commit")
                    .label("Add & Commit")
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        this.add_and_commit(window, cx);
                    })),
            )
    }

    fn render_restore_group(&self, cx: &mut Context<Self>) -> impl IntoElement {
        group_box("Restore Options", cx).child(
            h_flex().child(
                Button::new("discard-local-changes")
                    .label("Discard Local Changes")
                    .destructive()
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        this.confirm_discard(window, cx);
                    })),
            ),
        )
    }

    fn render_log(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .id("log-scroll-area")
            .flex_1()
            .min_h(px(0.))
            .overflow_y_scroll()
            .track_scroll(&self.log_scroll_handle)
            .p_2()
            .rounded(px(4.0))
            .border_1()
            .border_color(theme.border)
            .bg(theme.log_background)
            .font_family("monospace")
            .text_sm()
            .children(
                self.console
                    .log()
                    .blocks()
                    .iter()
                    .enumerate()
                    .map(|(ix, block)| {
                        div()
                            .id(("log-entry", ix))
                            .w_full()
                            .child(SharedString::from(block.clone()))
                    }),
            )
    }
}

impl Render for GitConsoleApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .size_full()
            .gap_2()
            .p_2()
            .bg(theme.background)
            .text_color(theme.foreground)
            .text_sm()
            .child(self.render_action_row(cx))
            .child(self.render_commit_row(cx))
            .child(self.render_restore_group(cx))
            .child(self.render_log(cx))
    }
}
