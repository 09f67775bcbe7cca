//! Core translation engine module

pub mod backend;
pub mod config;
pub mod errors;
pub mod extract;
pub mod rewrite;
pub mod service;
