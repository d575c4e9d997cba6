//! Password generation settings.

mod file;

use std::path::Path;

use serde::{Deserialize, Serialize};

use passgauge::{CharClasses, EntropySource, GenerationRequest, MAX_LENGTH, MIN_LENGTH};

pub use file::{SettingsError, default_path};

pub const DEFAULT_LENGTH: usize = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub number_of_passwords: usize,
    pub theme: Theme,
    pub urandom: bool,
    pub classes: CharClasses,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&default_path())
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes)
    }

    pub fn entropy_source(&self) -> EntropySource {
        if self.urandom {
            EntropySource::Urandom
        } else {
            EntropySource::Standard
        }
    }

    /// Step the length, staying inside the allowed bounds.
    pub fn adjust_length(&mut self, delta: isize) {
        let length = self.length.saturating_add_signed(delta);
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            theme: Theme::Dark,
            urandom: false,
            classes: CharClasses::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_length_clamps() {
        let mut settings = Settings::default();
        settings.adjust_length(1);
        assert_eq!(settings.length, 26);

        settings.adjust_length(-1000);
        assert_eq!(settings.length, MIN_LENGTH);

        settings.adjust_length(1000);
        assert_eq!(settings.length, MAX_LENGTH);
    }

    #[test]
    fn adjust_pulls_out_of_range_back_in() {
        let mut settings = Settings {
            length: 500,
            ..Default::default()
        };
        settings.adjust_length(-1);
        assert_eq!(settings.length, MAX_LENGTH);
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn source_follows_flag() {
        let mut settings = Settings::default();
        assert_eq!(settings.entropy_source(), EntropySource::Standard);
        settings.urandom = true;
        assert_eq!(settings.entropy_source(), EntropySource::Urandom);
    }
}
