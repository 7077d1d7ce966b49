//! Terminal front end: line input, output rendering and the read loop.

pub mod input;
pub mod output;
mod shell;

pub use input::{EditorSource, LineSource, ScriptedSource};
pub use shell::run;
