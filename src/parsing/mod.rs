//! The parsing core: header recognition and message assembly.
//!
//! - [`header`] decides whether a line is a message header
//! - [`assembler`] groups lines into messages
//! - [`lines`] splits raw text into lines
//! - [`registry`] tracks the latest display name of each group member
//!
//! These pieces do no I/O. Reading files and writing output live in
//! [`crate::parser`], [`crate::streaming`] and [`crate::format`].

pub mod assembler;
pub mod header;
pub mod lines;
pub mod registry;

pub use assembler::{Assembler, Messages, assemble, assemble_with};
pub use header::{HeaderMatch, HeaderShape, is_header, recognize, recognize_with};
pub use lines::{split_lines, strip_terminator};
pub use registry::NameRegistry;
