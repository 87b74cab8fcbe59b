//! UI-only state that lives outside the store.

use web_time::{Duration, Instant};

use account_viewer_core::{PublicKey, PublicKeyError};

/// Sign-in form state
#[derive(Debug, Default)]
pub struct SignInState {
    pub public_key_input: String,
    pub error: Option<String>,
}

impl SignInState {
    /// Validate the current input, recording the error for display.
    pub fn validate(&mut self) -> Result<PublicKey, PublicKeyError> {
        match PublicKey::parse(&self.public_key_input) {
            Ok(key) => {
                self.error = None;
                Ok(key)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        self.public_key_input.clear();
        self.error = None;
    }
}

/// "Copied" tooltip shown for a fixed time after a copy
#[derive(Debug, Clone)]
pub struct CopyTooltipState {
    shown_at: Option<Instant>,
    duration: Duration,
}

impl CopyTooltipState {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            shown_at: None,
            duration: Duration::from_millis(duration_ms),
        }
    }

    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    pub fn trigger_at(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    /// Time until the tooltip should disappear, for scheduling a repaint.
    pub fn remaining(&self) -> Option<Duration> {
        let at = self.shown_at?;
        self.duration.checked_sub(at.elapsed()).filter(|d| !d.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_validation_records_error() {
        let mut state = SignInState {
            public_key_input: "GABC".to_owned(),
            error: None,
        };
        assert!(state.validate().is_err());
        assert!(state.error.as_deref().unwrap_or_default().contains("56"));

        state.public_key_input =
            "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7".to_owned();
        assert!(state.validate().is_ok());
        assert!(state.error.is_none());
    }

    #[test]
    fn tooltip_expires_after_duration() {
        let mut tooltip = CopyTooltipState::new(1_500);
        let start = Instant::now();
        assert!(!tooltip.is_visible_at(start));

        tooltip.trigger_at(start);
        assert!(tooltip.is_visible_at(start + Duration::from_millis(1_000)));
        assert!(!tooltip.is_visible_at(start + Duration::from_millis(1_500)));
    }
}
