//! Sound effect catalog.
//!
//! This module is the canonical place for sound-effect metadata and name
//! resolution. The catalog is a bundled table parsed once at process start
//! and treated as immutable for the process lifetime.

use serde::{Deserialize, Serialize};

/// Filename substituted whenever the model picks nothing or an unknown name.
pub const DEFAULT_SOUND: &str = "Sad-Trombone.mp3";

const BUNDLED_CATALOG: &str = include_str!("../../data/sounds.json");

/// A single catalog entry. `name` doubles as the asset filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEffect {
    pub name: String,
    pub description: String,
}

/// Immutable catalog of available sound effects.
#[derive(Debug, Clone)]
pub struct SoundCatalog {
    effects: Vec<SoundEffect>,
}

impl SoundCatalog {
    /// Parse the catalog bundled into the binary.
    pub fn bundled() -> Self {
        let effects: Vec<SoundEffect> =
            serde_json::from_str(BUNDLED_CATALOG).expect("bundled sound catalog is valid JSON");
        Self { effects }
    }

    pub fn from_effects(effects: Vec<SoundEffect>) -> Self {
        Self { effects }
    }

    pub fn effects(&self) -> &[SoundEffect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Exact-name lookup. Matching is case-sensitive; the model is shown the
    /// catalog names verbatim and must echo one back unchanged.
    pub fn contains(&self, name: &str) -> bool {
        self.effects.iter().any(|effect| effect.name == name)
    }

    /// Resolve a requested sound name to a catalog filename, substituting the
    /// default entry for missing or unknown names.
    pub fn resolve<'a>(&self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(name) if self.contains(name) => name,
            _ => DEFAULT_SOUND,
        }
    }

    /// Render the catalog as `name: description` lines for prompt inclusion.
    pub fn prompt_list(&self) -> String {
        let mut out = String::new();
        for effect in &self.effects {
            out.push_str(&effect.name);
            out.push_str(": ");
            out.push_str(&effect.description);
            out.push('\n');
        }
        out
    }
}
