//! The color swatch palette widget.

use pxgrid_core::{
    messages::{Key, Msg, PointerAction, PointerButton},
    Cell, Point, Rect, Rgba, Style, Surface,
};

/// Width of one swatch in surface cells.
const SWATCH_W: i32 = 2;

/// Actions reported by [`Swatches::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchAction {
    /// Nothing relevant happened.
    Pass,
    /// The active swatch moved without being picked.
    Move,
    /// A color was picked.
    Pick(Rgba),
}

/// A single row of color swatches, one active at a time.
#[derive(Debug, Clone)]
pub struct Swatches {
    colors: Vec<Rgba>,
    active: usize,
}

impl Swatches {
    /// Create a palette from a non-empty color list; the first entry starts
    /// active.
    pub fn new(colors: Vec<Rgba>) -> Self {
        assert!(!colors.is_empty(), "palette must not be empty");
        Self { colors, active: 0 }
    }

    /// The currently active color.
    pub fn active_color(&self) -> Rgba {
        self.colors[self.active]
    }

    /// Mark the swatch matching `color` active, if present. Keeps the
    /// selection in sync when the color was set elsewhere.
    pub fn select(&mut self, color: Rgba) {
        if let Some(i) = self.colors.iter().position(|&c| c == color) {
            self.active = i;
        }
    }

    /// Total width in surface cells.
    pub fn width(&self) -> i32 {
        self.colors.len() as i32 * SWATCH_W
    }

    /// Process an input message; `area` is where the palette was drawn.
    pub fn update(&mut self, msg: &Msg, area: Rect) -> SwatchAction {
        match msg {
            Msg::KeyDown { key, .. } => match key {
                Key::ArrowLeft => {
                    self.active = self.active.checked_sub(1).unwrap_or(self.colors.len() - 1);
                    SwatchAction::Move
                }
                Key::ArrowRight => {
                    self.active = (self.active + 1) % self.colors.len();
                    SwatchAction::Move
                }
                Key::Enter => SwatchAction::Pick(self.active_color()),
                _ => SwatchAction::Pass,
            },
            Msg::Pointer {
                action: PointerAction::Press(PointerButton::Primary),
                pos,
            } if area.contains(*pos) => {
                let i = ((pos.x - area.min.x) / SWATCH_W) as usize;
                if i < self.colors.len() {
                    self.active = i;
                    SwatchAction::Pick(self.active_color())
                } else {
                    SwatchAction::Pass
                }
            }
            _ => SwatchAction::Pass,
        }
    }

    /// Draw the palette into `area`. The active swatch carries a dot marker
    /// in a contrasting foreground.
    pub fn draw(&self, surface: &Surface, area: Rect) {
        for (i, &color) in self.colors.iter().enumerate() {
            let x0 = area.min.x + i as i32 * SWATCH_W;
            let marker = i == self.active;
            let style = Style::new(contrast_for(color), color);
            for dx in 0..SWATCH_W {
                let ch = if marker { '•' } else { ' ' };
                surface.set(
                    Point::new(x0 + dx, area.min.y),
                    Cell { ch, style },
                );
            }
        }
    }
}

/// Black on light colors, white on dark ones.
fn contrast_for(c: Rgba) -> Rgba {
    if c.r as u32 + c.g as u32 + c.b as u32 > 384 {
        Rgba::BLACK
    } else {
        Rgba::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Swatches {
        Swatches::new(vec![
            Rgba::BLACK,
            Rgba::WHITE,
            Rgba::rgb(255, 0, 0),
            Rgba::rgb(0, 0, 255),
        ])
    }

    fn area() -> Rect {
        Rect::new(1, 1, 9, 2)
    }

    #[test]
    fn arrows_wrap() {
        let mut sw = palette();
        assert_eq!(sw.update(&Msg::key(Key::ArrowLeft), area()), SwatchAction::Move);
        assert_eq!(sw.active_color(), Rgba::rgb(0, 0, 255));
        sw.update(&Msg::key(Key::ArrowRight), area());
        assert_eq!(sw.active_color(), Rgba::BLACK);
    }

    #[test]
    fn enter_picks_active() {
        let mut sw = palette();
        sw.update(&Msg::key(Key::ArrowRight), area());
        assert_eq!(
            sw.update(&Msg::key(Key::Enter), area()),
            SwatchAction::Pick(Rgba::WHITE)
        );
    }

    #[test]
    fn click_picks_swatch_under_pointer() {
        let mut sw = palette();
        // Third swatch spans x = 5..7 within the area starting at x = 1.
        let action = sw.update(&Msg::press(Point::new(5, 1)), area());
        assert_eq!(action, SwatchAction::Pick(Rgba::rgb(255, 0, 0)));
    }

    #[test]
    fn click_outside_passes() {
        let mut sw = palette();
        assert_eq!(
            sw.update(&Msg::press(Point::new(0, 5)), area()),
            SwatchAction::Pass
        );
        assert_eq!(sw.active_color(), Rgba::BLACK);
    }

    #[test]
    fn select_syncs_external_color() {
        let mut sw = palette();
        sw.select(Rgba::rgb(0, 0, 255));
        assert_eq!(sw.active_color(), Rgba::rgb(0, 0, 255));
        // Unknown colors leave the selection alone.
        sw.select(Rgba::rgb(1, 2, 3));
        assert_eq!(sw.active_color(), Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn draw_marks_active() {
        let sw = palette();
        let s = Surface::new(10, 2);
        sw.draw(&s, area());
        assert_eq!(s.at(Point::new(1, 1)).ch, '•');
        assert_eq!(s.at(Point::new(3, 1)).ch, ' ');
        assert_eq!(s.at(Point::new(3, 1)).style.bg, Rgba::WHITE);
    }
}
