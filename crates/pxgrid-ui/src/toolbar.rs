//! The toolbar widget: a row of labeled buttons with shortcut keys.

use pxgrid_core::{
    messages::{Key, Msg, PointerAction, PointerButton},
    Point, Rect, Style, Surface,
};

/// One toolbar button.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub key: Key,
}

impl Button {
    pub fn new(label: impl Into<String>, key: Key) -> Self {
        Self {
            label: label.into(),
            key,
        }
    }

    /// Rendered width, including the surrounding brackets.
    fn width(&self) -> i32 {
        self.label.chars().count() as i32 + 2
    }
}

/// Actions reported by [`Toolbar::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Pass,
    /// The button at this index was invoked (shortcut key or click).
    Invoke(usize),
}

/// A horizontal row of buttons.
#[derive(Debug, Clone)]
pub struct Toolbar {
    buttons: Vec<Button>,
}

impl Toolbar {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self { buttons }
    }

    /// Total rendered width (buttons separated by one space).
    pub fn width(&self) -> i32 {
        let labels: i32 = self.buttons.iter().map(Button::width).sum();
        labels + (self.buttons.len() as i32 - 1).max(0)
    }

    /// The horizontal span of button `i` relative to the toolbar origin.
    fn span(&self, i: usize) -> (i32, i32) {
        let mut x = 0;
        for b in &self.buttons[..i] {
            x += b.width() + 1;
        }
        (x, x + self.buttons[i].width())
    }

    /// Process an input message; `area` is where the toolbar was drawn.
    pub fn update(&mut self, msg: &Msg, area: Rect) -> ToolbarAction {
        match msg {
            Msg::KeyDown { key, .. } => {
                for (i, b) in self.buttons.iter().enumerate() {
                    if b.key == *key {
                        return ToolbarAction::Invoke(i);
                    }
                }
                ToolbarAction::Pass
            }
            Msg::Pointer {
                action: PointerAction::Press(PointerButton::Primary),
                pos,
            } if area.contains(*pos) => {
                let rel = pos.x - area.min.x;
                for i in 0..self.buttons.len() {
                    let (x0, x1) = self.span(i);
                    if rel >= x0 && rel < x1 {
                        return ToolbarAction::Invoke(i);
                    }
                }
                ToolbarAction::Pass
            }
            _ => ToolbarAction::Pass,
        }
    }

    /// Draw the toolbar; `highlighted` renders one button in reverse video.
    pub fn draw(&self, surface: &Surface, area: Rect, highlighted: Option<usize>, style: Style) {
        for (i, b) in self.buttons.iter().enumerate() {
            let (x0, _) = self.span(i);
            let st = if highlighted == Some(i) {
                style.reversed()
            } else {
                style
            };
            let text = format!("[{}]", b.label);
            surface.print(Point::new(area.min.x + x0, area.min.y), &text, st);
        }
    }
}
