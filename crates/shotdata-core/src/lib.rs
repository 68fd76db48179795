//! Core types for the screenshot fixture converter.
//!
//! Holds the typed shape of the hand-written fixture document
//! ([`source`]), the typed shape of the document the desktop app reads in
//! screenshot mode ([`output`]), and the small pure helpers shared by both.
//! This crate does no I/O.

pub mod error;
pub mod identity;
pub mod localized;
pub mod message;
pub mod output;
pub mod source;

pub use error::{Error, Result};
pub use localized::{Localized, OrderedMap};
