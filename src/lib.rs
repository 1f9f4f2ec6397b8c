//! # Recap
//!
//! A small web application that summarises meeting notes using an LLM.
//!
//! ## Features
//!
//! - **Sectioned output**: splits the model reply into summary, action items and key decisions
//! - **Stats**: word counts and a compression percentage for every request
//! - **Pluggable client**: the Gemini client sits behind the `Summarizer` trait

pub mod agent;
pub mod config;
pub mod digest;
pub mod prompt;
pub mod server;
pub mod stats;
pub mod summary;
pub mod ui;

pub use agent::{GeminiAgent, Summarizer};
pub use config::Config;
pub use digest::{digest, Digest, DigestError};
pub use summary::Sections;
