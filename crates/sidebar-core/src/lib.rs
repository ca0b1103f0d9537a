//! Core types and traits for the sidebar widget toolkit.
//!
//! This crate provides the foundation the widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] and [`Canvas`] traits, plus [`RecordingCanvas`]
//! - Host-side state: [`State`], [`Command`], [`Store`]

mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
mod state;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use state::{Command, State, Store};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, Message, TextStyle, TypeId, Widget, WidgetId,
};
