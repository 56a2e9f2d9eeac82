//! Command implementations for the ProCompare CLI

pub mod common;
pub mod compare;
pub mod favorites;
pub mod get_data;
pub mod serve;
pub mod user;

pub use common::{resolve_api_url, resolve_username, CommandContext};
