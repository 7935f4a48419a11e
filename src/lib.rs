//! Backend for the anti-doping education site
//!
//! Serves the static content catalog, keeps per-visitor sessions
//! (preferences, recommendations, progress, chat) and relays chat messages
//! to a generative-language service.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
