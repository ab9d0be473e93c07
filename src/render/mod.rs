//! Render-side seams.
//!
//! This module defines what the bindings need from a host UI framework and
//! nothing more: a [`Component`] abstraction for anything renderable, and
//! the [`RenderScope`] context that legitimizes hook calls.

mod component;
mod context;

pub use component::Component;
pub use context::RenderScope;
