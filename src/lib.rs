//! Zenbox — inbox scanning and keyword classification service.

pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod provider;
