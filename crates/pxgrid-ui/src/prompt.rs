//! A modal one-line text prompt, drawn as a boxed overlay.

use pxgrid_core::{
    messages::{Key, Msg},
    Cell, Point, Rect, Style, Surface,
};

use crate::dialog::draw_border;

/// Longest input the prompt accepts, enough for `#RRGGBBAA`.
const MAX_LEN: usize = 9;

/// Actions reported by [`TextPrompt::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Pass,
    /// Enter was pressed; the payload is the buffer contents.
    Submit(String),
    Cancel,
}

/// A modal single-line text entry with a label, answered with Enter or
/// dismissed with Escape.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    label: String,
    buffer: String,
}

impl TextPrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            buffer: String::new(),
        }
    }

    /// Prefill the input buffer.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.buffer = text.into();
        self
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The prompt's rectangle, centered within `outer`.
    pub fn rect_within(&self, outer: Rect) -> Rect {
        let w = (self.label.chars().count() as i32).max(MAX_LEN as i32 + 1) + 4;
        let h = 5;
        let x0 = outer.min.x + (outer.width() - w) / 2;
        let y0 = outer.min.y + (outer.height() - h) / 2;
        Rect::sized(Point::new(x0, y0), w, h)
    }

    /// Process an input message. The prompt is modal, so the caller swallows
    /// the message whatever this returns.
    pub fn update(&mut self, msg: &Msg) -> PromptAction {
        match msg {
            Msg::KeyDown { key, .. } => match key {
                Key::Enter => PromptAction::Submit(self.buffer.clone()),
                Key::Escape => PromptAction::Cancel,
                Key::Backspace => {
                    self.buffer.pop();
                    PromptAction::Pass
                }
                Key::Char(c) if c.is_ascii_graphic() && self.buffer.len() < MAX_LEN => {
                    self.buffer.push(*c);
                    PromptAction::Pass
                }
                _ => PromptAction::Pass,
            },
            _ => PromptAction::Pass,
        }
    }

    /// Draw the prompt centered in `outer`, with a `_` cursor after the
    /// typed text.
    pub fn draw(&self, surface: &Surface, outer: Rect, style: Style) {
        let rect = self.rect_within(outer);
        surface.slice(rect).fill(Cell::default().with_style(style));
        draw_border(surface, rect, style);

        surface.print(Point::new(rect.min.x + 2, rect.min.y + 1), &self.label, style);
        let input = format!("{}_", self.buffer);
        surface.print(Point::new(rect.min.x + 2, rect.min.y + 3), &input, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(prompt: &mut TextPrompt, text: &str) {
        for c in text.chars() {
            prompt.update(&Msg::key(Key::Char(c)));
        }
    }

    #[test]
    fn typing_then_enter_submits_buffer() {
        let mut p = TextPrompt::new("Hex color").with_text("#");
        typed(&mut p, "ff00ff");
        assert_eq!(
            p.update(&Msg::key(Key::Enter)),
            PromptAction::Submit("#ff00ff".into())
        );
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut p = TextPrompt::new("Hex color");
        typed(&mut p, "ab");
        p.update(&Msg::key(Key::Backspace));
        assert_eq!(p.buffer(), "a");
        // Backspace on an empty buffer is harmless.
        p.update(&Msg::key(Key::Backspace));
        p.update(&Msg::key(Key::Backspace));
        assert_eq!(p.buffer(), "");
    }

    #[test]
    fn escape_cancels() {
        let mut p = TextPrompt::new("Hex color");
        assert_eq!(p.update(&Msg::key(Key::Escape)), PromptAction::Cancel);
    }

    #[test]
    fn input_is_length_capped() {
        let mut p = TextPrompt::new("Hex color");
        typed(&mut p, "#aabbccdd0011");
        assert_eq!(p.buffer(), "#aabbccdd");
    }

    #[test]
    fn draw_shows_label_and_cursor() {
        let p = TextPrompt::new("Hex color").with_text("#12");
        let outer = Rect::new(0, 0, 60, 20);
        let s = Surface::new(60, 20);
        p.draw(&s, outer, Style::default());
        let rect = p.rect_within(outer);
        let row: String = (rect.min.x..rect.max.x)
            .map(|x| s.at(Point::new(x, rect.min.y + 3)).ch)
            .collect();
        assert!(row.contains("#12_"));
    }
}
