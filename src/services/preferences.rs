//! Display preferences shared across the session

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::Theme;

/// Current theme plus a single place to subscribe to its changes.
/// Kept in memory only.
#[derive(Clone)]
pub struct PreferenceService {
    theme: Arc<watch::Sender<Theme>>,
}

impl PreferenceService {
    pub fn new(initial: Theme) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            theme: Arc::new(sender),
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.borrow()
    }

    /// Set the theme; returns whether it changed. Subscribers are only
    /// notified on an actual change.
    pub fn set_theme(&self, theme: Theme) -> bool {
        let changed = self.theme.send_if_modified(|current| {
            if *current == theme {
                false
            } else {
                *current = theme;
                true
            }
        });

        if changed {
            tracing::info!("Theme set to {}", theme);
        }
        changed
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle(&self) -> Theme {
        let mut toggled = Theme::default();
        self.theme.send_modify(|current| {
            *current = current.toggled();
            toggled = *current;
        });

        tracing::info!("Theme toggled to {}", toggled);
        toggled
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.theme.subscribe()
    }
}
