//! Comic generator - turns a short story into comic panel illustrations
//!
//! A completion model splits the story into panel-sized segments, then an
//! image model renders one picture per segment. Exposed over HTTP as
//! `POST /generate-comic`.

pub mod ai;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod server;
pub mod story;

pub use error::{Error, Result};
