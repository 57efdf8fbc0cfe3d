//! Msggen - browser-extension message catalog generator
//!
//! Msggen turns one shared table of English UI messages into the message
//! catalog format each extension platform expects: a JSON dictionary for
//! Chrome-style `_locales` loaders, or a JavaScript object-literal assignment
//! for Safari-style extension scripts.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `catalog`: Message table parsing
//! - `emit`: The two output formatters
//! - `table`: The embedded English message table

pub mod catalog;
pub mod cli;
pub mod emit;
pub mod table;
