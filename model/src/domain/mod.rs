//! Domain documents

pub mod command;
pub mod editor;
pub mod project;
pub mod recipe;
pub mod stack;
pub mod workspace;
