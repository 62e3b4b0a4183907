//! Roast Master core - prompt building, Gemini access, and sound matching
//!
//! This crate holds everything the HTTP surface needs to turn an uploaded
//! image or text snippet into a short humorous roast:
//!
//! - a typed client for the Gemini `generateContent` endpoint
//! - prompt templates for the text, vision, and soundboard variants
//! - the bundled sound-effect catalog with exact-name resolution
//! - parsing of the `Sound: <name>` output convention, with deterministic
//!   fallbacks at every boundary
//!
//! # Example
//!
//! ```ignore
//! use roast_core::{GeminiClient, RoastConfig, SoundCatalog};
//!
//! let config = RoastConfig::from_env();
//! let catalog = SoundCatalog::bundled();
//! let client = GeminiClient::new(config.api_base, config.model, key);
//! let roast = client.generate_text(&roast_core::prompt::text_roast_prompt("my hat")).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod roast;

pub use catalog::{SoundCatalog, SoundEffect, DEFAULT_SOUND};
pub use config::{RoastConfig, RoastMode};
pub use error::{Error, Result};
pub use gemini::GeminiClient;
pub use roast::{audio_url, split_sound_marker, ParsedRoast};
