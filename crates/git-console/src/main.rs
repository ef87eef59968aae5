mod app;
mod menu;
mod text_field;
mod ui;

use gpui::*;
use log::{error, info};

use app::GitConsoleApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let work_dir = git_console::resolve_work_dir()?;
    info!("Running git commands in {}", work_dir.display());

    Application::new().run(move |cx: &mut App| {
        // Register actions
        menu::register_actions(cx);

        let bounds = Bounds::centered(None, size(px(900.), px(600.)), cx);
        let options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some("Git Console".into()),
                ..Default::default()
            }),
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            cx.new(|cx| GitConsoleApp::new(work_dir, window, cx))
        });
        if let Err(err) = opened {
            error!("Failed to open the main window: {:?}", err);
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
