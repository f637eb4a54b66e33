//! Command implementations for the match analyst CLI

pub mod browse;
pub mod common;
pub mod player_data;
pub mod render;
pub mod summary;
pub mod timeline;

pub use common::CommandContext;
