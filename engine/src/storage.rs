//! JSON codec for the persisted blobs.
//!
//! Everything lives in two flat localStorage entries: the whole saved
//! roulette collection under one key and the user settings under another.
//! Decoding fails open: a corrupt blob is treated as "no saved data" so a
//! bad write can never brick the session.

use serde::{Serialize, Deserialize};

use crate::roulette::Roulette;

pub const ROULETTES_KEY: &str = "spinwheel_roulettes";
pub const SETTINGS_KEY: &str = "spinwheel_settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_enabled: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            theme: Theme::Light,
        }
    }
}

pub fn encode_roulettes(roulettes: &[Roulette]) -> Result<String, serde_json::Error> {
    serde_json::to_string(roulettes)
}

pub fn decode_roulettes(blob: &str) -> Vec<Roulette> {
    match serde_json::from_str(blob) {
        Ok(roulettes) => roulettes,
        Err(err) => {
            log::warn!("ignoring corrupt saved-roulette blob: {err}");
            Vec::new()
        }
    }
}

pub fn encode_settings(settings: &Settings) -> Result<String, serde_json::Error> {
    serde_json::to_string(settings)
}

pub fn decode_settings(blob: &str) -> Settings {
    match serde_json::from_str(blob) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("ignoring corrupt settings blob: {err}");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roulettes_survive_an_encode_decode_round_trip() {
        let mut roulette = Roulette::new("Lunch", 100);
        roulette.add_item("Pizza", 150);
        roulette.add_item("Sushi", 160);
        let saved = vec![roulette];

        let blob = encode_roulettes(&saved).unwrap();
        let restored = decode_roulettes(&blob);
        assert_eq!(restored, saved);
        let labels: Vec<_> = restored[0].items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Pizza", "Sushi"]);
    }

    #[test]
    fn corrupt_roulette_blob_decodes_to_empty() {
        assert!(decode_roulettes("not json at all").is_empty());
        assert!(decode_roulettes("{\"wrong\":\"shape\"}").is_empty());
        assert!(decode_roulettes("").is_empty());
    }

    #[test]
    fn settings_round_trip_and_fail_open() {
        let settings = Settings {
            sound_enabled: false,
            theme: Theme::Dark,
        };
        let blob = encode_settings(&settings).unwrap();
        assert_eq!(decode_settings(&blob), settings);
        assert_eq!(decode_settings("][junk"), Settings::default());
    }

    #[test]
    fn missing_settings_fields_take_defaults() {
        let settings = decode_settings("{\"theme\":\"dark\"}");
        assert!(settings.sound_enabled);
        assert_eq!(settings.theme, Theme::Dark);
    }
}
