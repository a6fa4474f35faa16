//! The external word list
//!
//! An abstraction over the read-only word-list file named by the settings.

mod source;

pub use source::WordSource;
