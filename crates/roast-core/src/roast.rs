//! Parsing of the model's free-text roast output.

/// Literal marker the soundboard prompt asks the model to emit before the
/// chosen sound name.
pub const SOUND_MARKER: &str = "Sound: ";

/// A roast split out of raw model text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoast {
    pub roast_text: String,
    pub sound_name: Option<String>,
}

/// Split raw model output on the literal `Sound: ` marker.
///
/// Both segments are trimmed. When the marker is absent the whole text is the
/// roast; an empty name after trimming counts as no selection. Name validation
/// against the catalog happens in the caller via `SoundCatalog::resolve`.
pub fn split_sound_marker(raw: &str) -> ParsedRoast {
    match raw.split_once(SOUND_MARKER) {
        Some((roast, sound)) => {
            let sound = sound.trim();
            ParsedRoast {
                roast_text: roast.trim().to_string(),
                sound_name: if sound.is_empty() {
                    None
                } else {
                    Some(sound.to_string())
                },
            }
        }
        None => ParsedRoast {
            roast_text: raw.trim().to_string(),
            sound_name: None,
        },
    }
}

/// Absolute URL for a sound file on the static asset host.
pub fn audio_url(base_url: &str, filename: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_absent_keeps_whole_text() {
        let parsed = split_sound_marker("Just a roast, no sound here.");
        assert_eq!(parsed.roast_text, "Just a roast, no sound here.");
        assert_eq!(parsed.sound_name, None);
    }

    #[test]
    fn marker_with_valid_name() {
        let parsed = split_sound_marker("Great fit.\nSound: Alert.mp3");
        assert_eq!(parsed.roast_text, "Great fit.");
        assert_eq!(parsed.sound_name.as_deref(), Some("Alert.mp3"));
    }

    #[test]
    fn marker_with_trailing_whitespace_and_newlines() {
        let parsed = split_sound_marker("Nice hat.\n\nSound:   Boing.mp3  \n");
        assert_eq!(parsed.roast_text, "Nice hat.");
        assert_eq!(parsed.sound_name.as_deref(), Some("Boing.mp3"));
    }

    #[test]
    fn marker_with_empty_name() {
        let parsed = split_sound_marker("Nice hat.\nSound:   ");
        assert_eq!(parsed.roast_text, "Nice hat.");
        assert_eq!(parsed.sound_name, None);
    }

    #[test]
    fn marker_at_start_yields_empty_roast() {
        let parsed = split_sound_marker("Sound: Slap.mp3");
        assert_eq!(parsed.roast_text, "");
        assert_eq!(parsed.sound_name.as_deref(), Some("Slap.mp3"));
    }

    #[test]
    fn audio_url_joins_base_and_filename() {
        assert_eq!(
            audio_url("https://sounds.example/", "Airhorn.mp3"),
            "https://sounds.example/Airhorn.mp3"
        );
        assert_eq!(
            audio_url("https://sounds.example", "Airhorn.mp3"),
            "https://sounds.example/Airhorn.mp3"
        );
    }
}
