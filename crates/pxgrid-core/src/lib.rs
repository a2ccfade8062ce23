//! **pxgrid-core** — core types for the dotpad pixel-art editor.
//!
//! This crate provides the foundational pieces shared by the rest of the
//! workspace: geometry primitives, RGBA colors, the artwork [`Canvas`],
//! owned [`EditorState`] (tool, palette color, background, output size),
//! the styled [`Surface`] drivers render from, input messages, and the
//! Elm-architecture application loop.

pub mod app;
pub mod canvas;
pub mod color;
pub mod editor;
pub mod geom;
pub mod messages;
pub mod surface;

pub use app::{cmd, AppRunner, Effect, EventLoopDriver, Model};
pub use canvas::Canvas;
pub use color::Rgba;
pub use editor::{Background, EditorState, Tool};
pub use geom::{Point, Rect};
pub use messages::*;
pub use surface::{Cell, Patch, Style, Surface};
