//! **pxgrid-ui** — widgets for the dotpad editor.
//!
//! Each widget is a small state machine: `update` consumes an input message
//! (with the rectangle the widget occupies, for hit testing) and reports an
//! action; `draw` renders into a [`pxgrid_core::Surface`].

pub mod dialog;
pub mod prompt;
pub mod swatches;
pub mod toolbar;

pub use dialog::{ConfirmAction, ConfirmDialog};
pub use prompt::{PromptAction, TextPrompt};
pub use swatches::{SwatchAction, Swatches};
pub use toolbar::{Button, Toolbar, ToolbarAction};
