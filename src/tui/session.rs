//! Interactive session state, passed explicitly through the menu loop.

use passgauge::{CharClass, Password, StrengthReport, classify, generate_from, pass::entropy};

use crate::settings::{Settings, SettingsError};

const MASK: char = '•';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct Session {
    pub settings: Settings,
    current: Option<Password>,
    visible: bool,
    pub status: Option<Status>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            current: None,
            visible: true,
            status: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref().map(String::as_str)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Generate a fresh password. A new password is always shown; a failed
    /// request clears the old one and leaves the reason in the status.
    pub fn generate(&mut self) {
        let request = self.settings.request();
        match generate_from(&request, self.settings.entropy_source()) {
            Ok(password) => {
                let report = classify(&password);
                tracing::info!(
                    length = request.length,
                    strength = %report.label,
                    "password generated"
                );
                self.current = Some(password);
                self.visible = true;
                self.status = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "password generation failed");
                self.current = None;
                self.status = Some(Status::Error(format!("Error: {e}")));
            }
        }
    }

    /// Strength of the current password; `None` label when there is none.
    pub fn report(&self) -> StrengthReport {
        classify(self.current().unwrap_or(""))
    }

    /// Entropy of the configured request, 0 when it cannot generate.
    pub fn entropy_bits(&self) -> f64 {
        match passgauge::build_pool(&self.settings.request()) {
            Ok(pool) => entropy::bits(self.settings.length, pool.len()),
            Err(_) => 0.0,
        }
    }

    /// The password as it should appear on screen.
    pub fn display_password(&self) -> String {
        match (self.current(), &self.status) {
            (Some(p), _) if self.visible => p.to_string(),
            (Some(p), _) => MASK.to_string().repeat(p.chars().count()),
            (None, Some(Status::Error(msg))) => msg.clone(),
            (None, _) => String::new(),
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        self.settings.classes.toggle(class);
    }

    pub fn adjust_length(&mut self, delta: isize) {
        self.settings.adjust_length(delta);
    }

    pub fn set_length(&mut self, length: usize) {
        self.settings.length = length;
    }

    /// Flip the theme and remember it.
    pub fn toggle_theme(&mut self) -> Result<(), SettingsError> {
        self.settings.theme = self.settings.theme.toggle();
        self.settings.save()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = Session::new(Settings::default());
        assert_eq!(session.current(), None);
        assert_eq!(session.report(), classify(""));
        assert_eq!(session.display_password(), "");
    }

    #[test]
    fn generate_uses_settings() {
        let mut session = Session::new(Settings::default());
        session.set_length(30);
        session.toggle_class(CharClass::Symbol);
        session.generate();

        let password = session.current().unwrap();
        assert_eq!(password.chars().count(), 30);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(session.report(), classify(password));
    }

    #[test]
    fn generate_resets_visibility() {
        let mut session = Session::new(Settings::default());
        session.generate();
        session.toggle_visibility();
        assert!(!session.is_visible());

        let masked = session.display_password();
        assert_eq!(masked.chars().count(), 25);
        assert!(masked.chars().all(|c| c == MASK));

        session.generate();
        assert!(session.is_visible());
        assert_eq!(session.display_password(), session.current().unwrap());
    }

    #[test]
    fn failed_generate_clears_password() {
        let mut session = Session::new(Settings::default());
        session.generate();
        for class in CharClass::ALL {
            session.toggle_class(class);
        }
        session.generate();

        assert_eq!(session.current(), None);
        assert_eq!(
            session.display_password(),
            "Error: At least one character type must be selected"
        );
        assert_eq!(session.report().score, 0);
        assert_eq!(session.entropy_bits(), 0.0);
    }

    #[test]
    fn out_of_range_length_reports_bounds() {
        let mut session = Session::new(Settings::default());
        session.set_length(2);
        session.generate();
        assert_eq!(
            session.status,
            Some(Status::Error(
                "Error: Password length must be between 4-128 characters".into()
            ))
        );
    }
}
