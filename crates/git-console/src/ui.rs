//! Minimal UI primitives
//!
//! Basic building blocks that work with plain gpui: flex helpers, a dark
//! theme, buttons and labeled group boxes.

use gpui::*;

// ============================================================================
// Layout helpers
// ============================================================================

/// Create a horizontal flex container
pub fn h_flex() -> Div {
    div().flex().flex_row().items_center()
}

/// Create a vertical flex container
pub fn v_flex() -> Div {
    div().flex().flex_col()
}

// ============================================================================
// Theme colors (simple dark theme)
// ============================================================================

pub struct Theme {
    pub background: Hsla,
    pub foreground: Hsla,
    pub muted: Hsla,
    pub muted_foreground: Hsla,
    pub border: Hsla,
    pub log_background: Hsla,
    pub accent: Hsla,
    pub destructive: Hsla,
    pub destructive_hover: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: rgb(0x252526).into(),
            foreground: rgb(0xd4d4d4).into(),
            muted: rgb(0x2d2d2d).into(),
            muted_foreground: rgb(0x808080).into(),
            border: rgb(0x3c3c3c).into(),
            log_background: rgb(0x1e1e1e).into(),
            accent: rgb(0x0078d4).into(),
            destructive: rgb(0xf14c4c).into(),
            destructive_hover: rgb(0xd32f2f).into(),
        }
    }
}

/// Extension trait to get theme from context
pub trait ActiveTheme {
    fn theme(&self) -> Theme;
}

impl ActiveTheme for App {
    fn theme(&self) -> Theme {
        Theme::default()
    }
}

// ============================================================================
// Button
// ============================================================================

#[derive(Clone, Copy, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: SharedString::default(),
            variant: ButtonVariant::Default,
            on_click: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = label.into();
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ButtonVariant::Destructive;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let (bg, fg, hover_bg) = match self.variant {
            ButtonVariant::Default => (theme.muted, theme.foreground, theme.border),
            ButtonVariant::Destructive => {
                (theme.destructive, rgb(0xffffff).into(), theme.destructive_hover)
            }
        };

        let mut el = div()
            .id(self.id)
            .flex()
            .justify_center()
            .min_w(px(88.0))
            .px_3()
            .py_1()
            .rounded(px(4.0))
            .border_1()
            .border_color(theme.border)
            .bg(bg)
            .text_color(fg)
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .child(self.label);

        if let Some(handler) = self.on_click {
            el = el.on_click(move |event, window, cx| handler(event, window, cx));
        }

        el
    }
}

// ============================================================================
// Group box
// ============================================================================

/// A bordered container with a small caption, for grouping related controls
pub fn group_box(caption: impl Into<SharedString>, cx: &App) -> Div {
    let theme = cx.theme();

    v_flex()
        .gap_1()
        .px_2()
        .pb_2()
        .pt_1()
        .border_1()
        .border_color(theme.border)
        .rounded(px(4.0))
        .child(
            div()
                .text_xs()
                .text_color(theme.muted_foreground)
                .child(caption.into()),
        )
}
