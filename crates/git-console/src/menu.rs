use gpui::*;

// Define actions using the actions! macro
actions!(git_console, [Quit]);

pub fn register_actions(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("cmd-q", Quit, None),
    ]);

    // Register global action handlers
    cx.on_action(|_: &Quit, cx| {
        cx.quit();
    });
}
