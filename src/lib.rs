//! Single-user command-line todo tracker backed by a local JSON file.
//!
//! Layered leaf-first: [`store`] owns the data file and its atomic
//! read/write cycle, [`repository`] implements one domain operation per
//! method on top of it, and [`handler`] validates commands and turns each
//! one into exactly one repository call plus a uniform response.

pub mod handler;
pub mod logging;
pub mod repository;
pub mod store;
pub mod todo;

pub use handler::{Command, Handler, Response, ValidationError};
pub use repository::Repository;
pub use store::{DataFile, JsonStore, StoreError};
pub use todo::{Status, Todo};
