//! Single-line text entry
//!
//! Text arrives through the platform input handler, so IME composition and
//! dead keys work. Backspace removes one grapheme, Ctrl/Cmd-V pastes, and
//! Enter emits [`Submitted`].

use std::ops::Range;

use gpui::*;
use unicode_segmentation::UnicodeSegmentation;

use crate::ui::ActiveTheme;

/// Emitted when Enter is pressed in the field
pub struct Submitted;

/// The field's contents. The caret always sits at the end; `marked` is the
/// byte range of an in-progress IME composition.
///
/// The platform input handler speaks UTF-16 offsets, stored text is UTF-8.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct LineBuffer {
    text: String,
    marked: Option<Range<usize>>,
}

impl LineBuffer {
    fn offset_from_utf16(&self, offset: usize) -> usize {
        let mut utf8_offset = 0;
        let mut utf16_count = 0;
        for ch in self.text.chars() {
            if utf16_count >= offset {
                break;
            }
            utf16_count += ch.len_utf16();
            utf8_offset += ch.len_utf8();
        }
        utf8_offset
    }

    fn offset_to_utf16(&self, offset: usize) -> usize {
        self.text[..offset].chars().map(char::len_utf16).sum()
    }

    fn range_from_utf16(&self, range: &Range<usize>) -> Range<usize> {
        self.offset_from_utf16(range.start)..self.offset_from_utf16(range.end)
    }

    fn range_to_utf16(&self, range: &Range<usize>) -> Range<usize> {
        self.offset_to_utf16(range.start)..self.offset_to_utf16(range.end)
    }

    /// Caret position in UTF-16 units
    fn caret_utf16(&self) -> usize {
        self.offset_to_utf16(self.text.len())
    }

    fn marked_utf16(&self) -> Option<Range<usize>> {
        self.marked.as_ref().map(|range| self.range_to_utf16(range))
    }

    fn text_for_utf16(&self, range: &Range<usize>) -> (String, Range<usize>) {
        let range = self.range_from_utf16(range);
        let adjusted = self.range_to_utf16(&range);
        (self.text[range].to_string(), adjusted)
    }

    /// Replace `range` (UTF-16), or the composition, or nothing at the caret.
    /// Returns the byte range the new text occupies.
    fn replace(&mut self, range_utf16: Option<Range<usize>>, new_text: &str) -> Range<usize> {
        let range = range_utf16
            .map(|range| self.range_from_utf16(&range))
            .or_else(|| self.marked.clone())
            .unwrap_or(self.text.len()..self.text.len());

        let new_text = single_line(new_text);
        self.text.replace_range(range.clone(), &new_text);
        self.marked = None;
        range.start..range.start + new_text.len()
    }

    fn replace_and_mark(&mut self, range_utf16: Option<Range<usize>>, new_text: &str) {
        let inserted = self.replace(range_utf16, new_text);
        self.marked = (!inserted.is_empty()).then_some(inserted);
    }

    fn unmark(&mut self) {
        self.marked = None;
    }

    fn is_composing(&self) -> bool {
        self.marked.is_some()
    }

    /// Remove the last user-perceived character
    fn delete_last_grapheme(&mut self) {
        if let Some((offset, _)) = self.text.grapheme_indices(true).next_back() {
            self.text.truncate(offset);
        }
    }
}

/// Drop newlines and other control characters from typed or pasted text
fn single_line(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

pub struct TextField {
    focus_handle: FocusHandle,
    buffer: LineBuffer,
    placeholder: SharedString,
}

impl EventEmitter<Submitted> for TextField {}

impl Focusable for TextField {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl TextField {
    pub fn new(placeholder: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            buffer: LineBuffer::default(),
            placeholder: placeholder.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer.text
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        // keys belong to the input method while it is composing
        if self.buffer.is_composing() {
            return;
        }

        let keystroke = &event.keystroke;
        if keystroke.modifiers.platform || keystroke.modifiers.control {
            if keystroke.key != "v" {
                return;
            }
            if let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) {
                self.buffer.replace(None, &text);
            }
        } else {
            match keystroke.key.as_str() {
                "enter" => cx.emit(Submitted),
                "backspace" => self.buffer.delete_last_grapheme(),
                _ => return,
            }
        }

        cx.stop_propagation();
        cx.notify();
    }
}

impl EntityInputHandler for TextField {
    fn text_for_range(
        &mut self,
        range_utf16: Range<usize>,
        actual_range: &mut Option<Range<usize>>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<String> {
        let (text, adjusted) = self.buffer.text_for_utf16(&range_utf16);
        actual_range.replace(adjusted);
        Some(text)
    }

    fn selected_text_range(
        &mut self,
        _ignore_disabled_input: bool,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<UTF16Selection> {
        let caret = self.buffer.caret_utf16();
        Some(UTF16Selection {
            range: caret..caret,
            reversed: false,
        })
    }

    fn marked_text_range(
        &self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<Range<usize>> {
        self.buffer.marked_utf16()
    }

    fn unmark_text(&mut self, _window: &mut Window, _cx: &mut Context<Self>) {
        self.buffer.unmark();
    }

    fn replace_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.buffer.replace(range_utf16, new_text);
        cx.notify();
    }

    fn replace_and_mark_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        _new_selected_range_utf16: Option<Range<usize>>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.buffer.replace_and_mark(range_utf16, new_text);
        cx.notify();
    }

    fn bounds_for_range(
        &mut self,
        _range_utf16: Range<usize>,
        element_bounds: Bounds<Pixels>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<Bounds<Pixels>> {
        // no per-glyph layout; the candidate window anchors to the field
        Some(element_bounds)
    }

    fn character_index_for_point(
        &mut self,
        _point: Point<Pixels>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<usize> {
        Some(self.buffer.caret_utf16())
    }
}

impl Render for TextField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let focused = self.focus_handle.is_focused(window);

        let content = if self.buffer.text.is_empty() && !focused {
            div()
                .text_color(theme.muted_foreground)
                .child(self.placeholder.clone())
        } else {
            let caret = if focused { "|" } else { "" };
            div().child(format!("{}{}", self.buffer.text, caret))
        };

        let entity = cx.entity();
        let focus_handle = self.focus_handle.clone();
        let input_handler = canvas(
            |_bounds, _window, _cx| {},
            move |bounds, _, window, cx| {
                window.handle_input(
                    &focus_handle,
                    ElementInputHandler::new(bounds, entity),
                    cx,
                );
            },
        )
        .absolute()
        .size_full();

        div()
            .id("text-field")
            .key_context("TextField")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_click(cx.listener(|this, _: &ClickEvent, window, _cx| {
                window.focus(&this.focus_handle);
            }))
            .relative()
            .flex_1()
            .overflow_hidden()
            .px_2()
            .py_1()
            .rounded(px(4.0))
            .border_1()
            .border_color(if focused { theme.accent } else { theme.border })
            .bg(theme.log_background)
            .cursor_text()
            .child(content)
            .child(input_handler)
    }
}
