//! Transname - Translated Copies of Directory Trees
//!
//! Walks a source directory, translates each file's name with a pretrained
//! translation model and copies the file into a target directory under the
//! translated name, keeping the original extension.

pub mod cli;
pub mod config;
pub mod copy;
pub mod error;
pub mod model;
pub mod rewrite;
pub mod translate;
pub mod walk;
pub mod workflow;
