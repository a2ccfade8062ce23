//! The editor application model.

use std::path::PathBuf;

use pxgrid_core::{
    cmd,
    messages::{Key, Msg, PointerAction, PointerButton},
    Background, Cell, EditorState, Effect, Model, Point, Rect, Rgba, Surface, Tool,
};
use pxgrid_export::ExportOptions;
use pxgrid_ui::{
    Button, ConfirmAction, ConfirmDialog, PromptAction, SwatchAction, Swatches, TextPrompt,
    Toolbar, ToolbarAction,
};

use crate::theme;

/// Grid sizes the size key cycles through.
const GRID_SIZES: [i32; 3] = [8, 16, 32];

/// Output size step for the +/- keys.
const OUTPUT_STEP: u32 = 64;

/// Surface dimensions, sized for the largest grid.
pub const UI_COLS: i32 = 68;
pub const UI_ROWS: i32 = 40;

const SWATCH_Y: i32 = 1;
const TOOLBAR_Y: i32 = 2;
const SETTINGS_Y: i32 = 3;
const CANVAS_ORIGIN: Point = Point::new(2, 5);
const STATUS_Y: i32 = UI_ROWS - 1;

// Toolbar button indices.
const TB_DRAW: usize = 0;
const TB_ERASE: usize = 1;
const TB_CLEAR: usize = 2;
const TB_EXPORT: usize = 3;

/// What an open confirmation dialog will do if accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    Clear,
    Resize(i32),
}

#[derive(Debug)]
struct PendingConfirm {
    dialog: ConfirmDialog,
    action: PendingAction,
}

/// The dotpad editor model.
pub struct DotpadModel {
    state: EditorState,
    swatches: Swatches,
    toolbar: Toolbar,
    confirm: Option<PendingConfirm>,
    /// Open hex color entry, if any.
    prompt: Option<TextPrompt>,
    status: String,
    /// Where exports land; defaults to the working directory.
    export_dir: PathBuf,
}

impl Default for DotpadModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DotpadModel {
    pub fn new() -> Self {
        let swatches = Swatches::new(theme::PALETTE.to_vec());
        let toolbar = Toolbar::new(vec![
            Button::new("Draw", Key::Char('d')),
            Button::new("Erase", Key::Char('e')),
            Button::new("Clear", Key::Char('c')),
            Button::new("Export", Key::Char('s')),
        ]);
        let mut state = EditorState::default();
        state.color = theme::PALETTE[0];
        Self {
            state,
            swatches,
            toolbar,
            confirm: None,
            prompt: None,
            status: String::new(),
            export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// The editor state (exposed for tests).
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    fn surface_rect(&self) -> Rect {
        Rect::new(0, 0, UI_COLS, UI_ROWS)
    }

    /// The on-screen rectangle of the artwork, two columns per cell.
    fn canvas_rect(&self) -> Rect {
        let n = self.state.canvas.size();
        Rect::sized(CANVAS_ORIGIN, 2 * n, n)
    }

    fn swatch_rect(&self) -> Rect {
        Rect::sized(Point::new(1, SWATCH_Y), self.swatches.width(), 1)
    }

    fn toolbar_rect(&self) -> Rect {
        Rect::sized(Point::new(1, TOOLBAR_Y), self.toolbar.width(), 1)
    }

    /// Canvas cell under a surface position, if any.
    fn cell_at(&self, pos: Point) -> Option<Point> {
        if !self.canvas_rect().contains(pos) {
            return None;
        }
        Some(Point::new(
            (pos.x - CANVAS_ORIGIN.x) / 2,
            pos.y - CANVAS_ORIGIN.y,
        ))
    }

    // -------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------

    fn update_confirm(&mut self, msg: &Msg) {
        let surface_rect = self.surface_rect();
        let Some(pending) = self.confirm.as_mut() else { return };
        match pending.dialog.update(msg, surface_rect) {
            ConfirmAction::Accept => {
                let action = pending.action;
                self.confirm = None;
                match action {
                    PendingAction::Clear => {
                        self.state.clear_canvas();
                        self.status = "canvas cleared".into();
                    }
                    PendingAction::Resize(n) => {
                        self.state.resize_canvas(n);
                        self.status = format!("grid resized to {n}x{n}");
                    }
                }
            }
            ConfirmAction::Decline => {
                // Declining leaves every setting exactly as it was.
                self.confirm = None;
                self.status = "cancelled".into();
            }
            ConfirmAction::Pass => {}
        }
    }

    fn update_prompt(&mut self, msg: &Msg) {
        let Some(prompt) = self.prompt.as_mut() else { return };
        match prompt.update(msg) {
            PromptAction::Submit(text) => match text.parse::<Rgba>() {
                Ok(color) => {
                    self.prompt = None;
                    self.state.color = color;
                    self.swatches.select(color);
                    self.status = format!("color {color}");
                }
                Err(e) => {
                    // Leave the prompt open so the input can be corrected.
                    self.status = e.to_string();
                }
            },
            PromptAction::Cancel => {
                self.prompt = None;
                self.status = "cancelled".into();
            }
            PromptAction::Pass => {}
        }
    }

    fn invoke_toolbar(&mut self, idx: usize) -> Option<Effect> {
        match idx {
            TB_DRAW => {
                self.state.tool = Tool::Draw;
                self.status = "tool: draw".into();
                None
            }
            TB_ERASE => {
                self.state.tool = Tool::Erase;
                self.status = "tool: erase".into();
                None
            }
            TB_CLEAR => {
                self.confirm = Some(PendingConfirm {
                    dialog: ConfirmDialog::new("Clear the entire canvas?"),
                    action: PendingAction::Clear,
                });
                None
            }
            TB_EXPORT => Some(self.export_effect()),
            _ => None,
        }
    }

    fn export_effect(&self) -> Effect {
        let canvas = self.state.canvas.clone();
        let opts = ExportOptions {
            size: self.state.output_size(),
            background: self.state.background,
        };
        let dir = self.export_dir.clone();
        cmd(move || {
            let msg = match pxgrid_export::export_file(&canvas, &opts, &dir) {
                Ok(path) => {
                    log::info!("exported {}", path.display());
                    format!("saved {}", path.display())
                }
                Err(e) => {
                    log::error!("export failed: {e}");
                    format!("export failed: {e}")
                }
            };
            Some(Msg::Notice(msg))
        })
    }

    fn cycle_grid_size(&mut self) {
        let cur = self.state.canvas.size();
        let pos = GRID_SIZES.iter().position(|&s| s == cur).unwrap_or(1);
        let next = GRID_SIZES[(pos + 1) % GRID_SIZES.len()];
        if self.state.canvas.has_content() {
            self.confirm = Some(PendingConfirm {
                dialog: ConfirmDialog::new("Changing grid size will clear your artwork. Continue?"),
                action: PendingAction::Resize(next),
            });
        } else {
            self.state.resize_canvas(next);
            self.status = format!("grid resized to {next}x{next}");
        }
    }

    fn handle_key(&mut self, key: &Key) -> Option<Effect> {
        match key {
            Key::Char('g') => {
                self.cycle_grid_size();
                None
            }
            Key::Char('b') => {
                self.state.background = match self.state.background {
                    Background::Transparent => Background::White,
                    Background::White => Background::Transparent,
                };
                self.status = format!("background: {:?}", self.state.background).to_lowercase();
                None
            }
            Key::Char('+') | Key::Char('=') => {
                let s = self.state.output_size().saturating_add(OUTPUT_STEP);
                let stored = self.state.set_output_size(s);
                self.status = format!("output size {stored}px");
                None
            }
            Key::Char('-') => {
                let s = self.state.output_size().saturating_sub(OUTPUT_STEP);
                let stored = self.state.set_output_size(s);
                self.status = format!("output size {stored}px");
                None
            }
            Key::Char('x') => {
                self.prompt = Some(TextPrompt::new("Custom color (#RRGGBB)").with_text("#"));
                None
            }
            Key::Char('q') | Key::Escape => Some(Effect::End),
            _ => None,
        }
    }

    fn handle_pointer(&mut self, action: PointerAction, pos: Point) {
        match action {
            PointerAction::Press(PointerButton::Primary) => {
                if let Some(cell) = self.cell_at(pos) {
                    self.state.begin_stroke();
                    self.state.paint(cell);
                }
            }
            PointerAction::Move => {
                if self.state.is_drawing() {
                    if let Some(cell) = self.cell_at(pos) {
                        self.state.paint(cell);
                    }
                }
            }
            PointerAction::Release => self.state.end_stroke(),
            PointerAction::Press(PointerButton::Secondary) => {}
        }
    }

    // -------------------------------------------------------------------
    // Draw helpers
    // -------------------------------------------------------------------

    fn draw_canvas(&self, surface: &Surface) {
        let rect = self.canvas_rect();
        draw_frame(
            surface,
            Rect::new(rect.min.x - 1, rect.min.y - 1, rect.max.x + 1, rect.max.y + 1),
        );
        for (p, cell) in self.state.canvas.iter() {
            let bg = cell.unwrap_or(if (p.x + p.y) % 2 == 0 {
                theme::CHECKER_LIGHT
            } else {
                theme::CHECKER_DARK
            });
            let style = theme::panel().with_bg(bg);
            let sp = Point::new(CANVAS_ORIGIN.x + 2 * p.x, CANVAS_ORIGIN.y + p.y);
            surface.set(sp, Cell { ch: ' ', style });
            surface.set(sp.shift(1, 0), Cell { ch: ' ', style });
        }
    }

    fn draw_chrome(&self, surface: &Surface) {
        surface.print(Point::new(1, 0), "dotpad", theme::panel());
        surface.print(Point::new(9, 0), "pixel art editor", theme::dim());

        self.swatches.draw(surface, self.swatch_rect());
        let color_label = format!("color {}", self.state.color);
        surface.print(
            Point::new(self.swatch_rect().max.x + 2, SWATCH_Y),
            &color_label,
            theme::panel(),
        );

        let highlighted = match self.state.tool {
            Tool::Draw => Some(TB_DRAW),
            Tool::Erase => Some(TB_ERASE),
        };
        self.toolbar
            .draw(surface, self.toolbar_rect(), highlighted, theme::panel());

        let n = self.state.canvas.size();
        let bg = match self.state.background {
            Background::Transparent => "transparent",
            Background::White => "white",
        };
        let settings = format!(
            "grid {n}x{n}   out {}px   bg {bg}",
            self.state.output_size()
        );
        surface.print(Point::new(1, SETTINGS_Y), &settings, theme::panel());
        surface.print(
            Point::new(1 + settings.chars().count() as i32 + 3, SETTINGS_Y),
            "(g size, b bg, +/- out, x color, q quit)",
            theme::dim(),
        );

        surface.print(Point::new(1, STATUS_Y), &self.status, theme::dim());
    }
}

impl Model for DotpadModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        // A modal dialog swallows everything until answered.
        if self.confirm.is_some() {
            self.update_confirm(&msg);
            return None;
        }
        if self.prompt.is_some() {
            self.update_prompt(&msg);
            return None;
        }

        match &msg {
            Msg::Init => {
                self.status = "ready".into();
                return None;
            }
            Msg::Quit => return Some(Effect::End),
            Msg::Notice(text) => {
                self.status = text.clone();
                return None;
            }
            Msg::Screen { .. } => return None,
            _ => {}
        }

        match self.toolbar.update(&msg, self.toolbar_rect()) {
            ToolbarAction::Invoke(idx) => return self.invoke_toolbar(idx),
            ToolbarAction::Pass => {}
        }

        match self.swatches.update(&msg, self.swatch_rect()) {
            SwatchAction::Pick(color) => {
                self.state.color = color;
                self.status = format!("color {color}");
                return None;
            }
            SwatchAction::Move => return None,
            SwatchAction::Pass => {}
        }

        match msg {
            Msg::Pointer { action, pos } => {
                self.handle_pointer(action, pos);
                None
            }
            Msg::KeyDown { key, .. } => self.handle_key(&key),
            _ => None,
        }
    }

    fn draw(&self, surface: &Surface) {
        surface.fill(Cell::default().with_style(theme::panel()));
        self.draw_chrome(surface);
        self.draw_canvas(surface);
        if let Some(pending) = &self.confirm {
            pending
                .dialog
                .draw(surface, self.surface_rect(), theme::dialog());
        }
        if let Some(prompt) = &self.prompt {
            prompt.draw(surface, self.surface_rect(), theme::dialog());
        }
    }
}

/// Border box drawn just outside the canvas.
fn draw_frame(surface: &Surface, rect: Rect) {
    let style = theme::border();
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
