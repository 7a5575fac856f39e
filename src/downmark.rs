//! Main module for downmark library functionality

pub mod api;
pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod parsing;
pub mod testing;
