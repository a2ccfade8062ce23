//! A modal yes/no confirmation dialog, drawn as a boxed overlay.

use pxgrid_core::{
    messages::{Key, Msg, PointerAction, PointerButton},
    Cell, Point, Rect, Style, Surface,
};

const YES_LABEL: &str = "[Y]es";
const NO_LABEL: &str = "[N]o";
const BUTTON_GAP: i32 = 3;

/// Actions reported by [`ConfirmDialog::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Pass,
    Accept,
    Decline,
}

/// A modal question the user must answer before anything else proceeds.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    question: String,
}

impl ConfirmDialog {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// The dialog's rectangle, centered within `outer`.
    pub fn rect_within(&self, outer: Rect) -> Rect {
        let buttons_w = YES_LABEL.len() as i32 + BUTTON_GAP + NO_LABEL.len() as i32;
        let w = (self.question.chars().count() as i32).max(buttons_w) + 4;
        let h = 5;
        let x0 = outer.min.x + (outer.width() - w) / 2;
        let y0 = outer.min.y + (outer.height() - h) / 2;
        Rect::sized(Point::new(x0, y0), w, h)
    }

    /// Yes/no button hit rectangles for a dialog drawn at `rect`.
    fn button_rects(&self, rect: Rect) -> (Rect, Rect) {
        let buttons_w = YES_LABEL.len() as i32 + BUTTON_GAP + NO_LABEL.len() as i32;
        let x0 = rect.min.x + (rect.width() - buttons_w) / 2;
        let y = rect.min.y + 3;
        let yes = Rect::sized(Point::new(x0, y), YES_LABEL.len() as i32, 1);
        let no = Rect::sized(
            Point::new(x0 + YES_LABEL.len() as i32 + BUTTON_GAP, y),
            NO_LABEL.len() as i32,
            1,
        );
        (yes, no)
    }

    /// Process an input message. `outer` is the surface area the dialog is
    /// centered in. Escape and `n` decline; Enter and `y` accept; anything
    /// else passes (the dialog is modal, so the caller swallows the message
    /// either way).
    pub fn update(&mut self, msg: &Msg, outer: Rect) -> ConfirmAction {
        match msg {
            Msg::KeyDown { key, .. } => match key {
                Key::Char('y') | Key::Char('Y') | Key::Enter => ConfirmAction::Accept,
                Key::Char('n') | Key::Char('N') | Key::Escape => ConfirmAction::Decline,
                _ => ConfirmAction::Pass,
            },
            Msg::Pointer {
                action: PointerAction::Press(PointerButton::Primary),
                pos,
            } => {
                let (yes, no) = self.button_rects(self.rect_within(outer));
                if yes.contains(*pos) {
                    ConfirmAction::Accept
                } else if no.contains(*pos) {
                    ConfirmAction::Decline
                } else {
                    ConfirmAction::Pass
                }
            }
            _ => ConfirmAction::Pass,
        }
    }

    /// Draw the dialog centered in `outer`.
    pub fn draw(&self, surface: &Surface, outer: Rect, style: Style) {
        let rect = self.rect_within(outer);
        surface.slice(rect).fill(Cell::default().with_style(style));
        draw_border(surface, rect, style);

        let qx = rect.min.x + (rect.width() - self.question.chars().count() as i32) / 2;
        surface.print(Point::new(qx, rect.min.y + 1), &self.question, style);

        let (yes, no) = self.button_rects(rect);
        surface.print(yes.min, YES_LABEL, style);
        surface.print(no.min, NO_LABEL, style);
    }
}

pub(crate) fn draw_border(surface: &Surface, rect: Rect, style: Style) {
    let (x0, y0) = (rect.min.x, rect.min.y);
    let (x1, y1) = (rect.max.x - 1, rect.max.y - 1);
    for x in x0 + 1..x1 {
        surface.set(Point::new(x, y0), Cell { ch: '─', style });
        surface.set(Point::new(x, y1), Cell { ch: '─', style });
    }
    for y in y0 + 1..y1 {
        surface.set(Point::new(x0, y), Cell { ch: '│', style });
        surface.set(Point::new(x1, y), Cell { ch: '│', style });
    }
    surface.set(Point::new(x0, y0), Cell { ch: '┌', style });
    surface.set(Point::new(x1, y0), Cell { ch: '┐', style });
    surface.set(Point::new(x0, y1), Cell { ch: '└', style });
    surface.set(Point::new(x1, y1), Cell { ch: '┘', style });
}
