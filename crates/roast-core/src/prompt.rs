//! Prompt templates and fallback roasts.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::catalog::SoundCatalog;

/// Substituted when the caller supplies no usable text description.
pub const DEFAULT_DESCRIPTION: &str = "something random";

/// Roast returned when the vision call succeeds but carries no usable text.
pub const VISION_FALLBACK_ROAST: &str = "Looking good... I guess?";

/// Description echoed back for image-mode responses.
pub const VISION_DESCRIPTION: &str = "Image analyzed by Gemini Vision";

/// Fallback roasts for the text endpoint, picked deterministically per
/// description. The `{description}` placeholder is substituted verbatim.
pub const ROAST_TEMPLATES: [&str; 5] = [
    "Wow, {description}. That's certainly... a choice.",
    "I've seen a lot in my time, but {description}? That's something special.",
    "Looking at you with {description} - bold strategy, let's see if it pays off.",
    "{description}... Did you lose a bet or is this your natural state?",
    "So we're just out here with {description} and calling it a day? Okay then.",
];

pub fn text_roast_prompt(description: &str) -> String {
    format!(
        "You are a witty comedian. Create a funny, lighthearted roast based on: \"{description}\". \
         Keep it short (2 sentences max), clever, and never mean-spirited."
    )
}

pub fn vision_roast_prompt() -> &'static str {
    "You are a witty comedian. Look at this image and create a funny, lighthearted roast \
     about what you see. Keep it short (2-3 sentences), clever, and never mean-spirited. \
     Focus on appearance, clothing, expression, or setting."
}

/// Vision prompt that also asks the model to pick one sound from the catalog.
/// The required output format is the roast text followed by a literal
/// `Sound: <name>` line, which `crate::roast::split_sound_marker` undoes.
pub fn sound_roast_prompt(catalog: &SoundCatalog) -> String {
    format!(
        "You are a witty comedian with a soundboard. Look at this image and create a funny, \
         lighthearted roast about what you see. Keep it short (2-3 sentences), clever, and \
         never mean-spirited. Then pick the one sound effect from the list below that best \
         punctuates your roast.\n\nAvailable sounds:\n{}\nRespond with the roast text, then a \
         final line in exactly this format:\nSound: <name>",
        catalog.prompt_list()
    )
}

/// Pick a fallback roast for `description`. The pick is a stable hash of the
/// description, so repeated requests with the same input roast the same way.
pub fn fallback_roast(description: &str) -> String {
    let mut hasher = DefaultHasher::new();
    description.hash(&mut hasher);
    let index = (hasher.finish() % ROAST_TEMPLATES.len() as u64) as usize;
    ROAST_TEMPLATES[index].replace("{description}", description)
}
