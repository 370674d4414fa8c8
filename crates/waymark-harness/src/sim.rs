//! Synchronous action interpreter for deterministic end-to-end tests.
//!
//! `SimFeature` drives a [`MapApp`] against a [`MockProvider`] using the same
//! action semantics as the production runtime, but without background tasks:
//! listen actions record their subscription and return, and stream events are
//! injected explicitly with [`SimFeature::inject`]. Every step is fully
//! deterministic.

use waymark_app::{AppAction, AppEvent, Intent, MapApp, MapConfig, MapSnapshot};
use waymark_core::{LocationProvider, SettingsGateway};

use crate::{MockProvider, MockSettings};

/// Deterministic in-process driver for the location feature.
pub struct SimFeature {
    app: MapApp,
    provider: MockProvider,
    settings: MockSettings,
}

impl SimFeature {
    /// Create a feature over the given provider with default configuration.
    pub fn new(provider: MockProvider) -> Self {
        Self::with_config(provider, MapConfig::default())
    }

    /// Create a feature over the given provider and configuration.
    pub fn with_config(provider: MockProvider, config: MapConfig) -> Self {
        Self { app: MapApp::new(config), provider, settings: MockSettings::default() }
    }

    /// Route a UI intent and interpret the resulting actions.
    pub async fn apply(&mut self, intent: Intent) {
        let actions = self.app.apply(intent);
        self.process(actions).await;
    }

    /// Inject a stream event, as if a listener task delivered it.
    pub async fn inject(&mut self, event: AppEvent) {
        let actions = self.app.handle(event);
        self.process(actions).await;
    }

    /// Read-only snapshot of the feature state.
    pub fn snapshot(&self) -> MapSnapshot {
        self.app.snapshot()
    }

    /// The underlying state machine.
    pub fn app(&self) -> &MapApp {
        &self.app
    }

    /// The scripted provider shared with this feature.
    pub fn provider(&self) -> &MockProvider {
        &self.provider
    }

    /// How many times the settings page was opened.
    pub fn settings_opened(&self) -> usize {
        self.settings.open_count()
    }

    async fn process(&mut self, initial: Vec<AppAction>) {
        let mut pending = initial;

        while !pending.is_empty() {
            let actions = std::mem::take(&mut pending);

            for action in actions {
                tracing::debug!(?action, "sim executing action");
                match action {
                    AppAction::CheckAuthorization => {
                        let status = self.provider.authorization_status();
                        pending.extend(self.app.handle(AppEvent::InitialAuthorization(status)));
                    },
                    AppAction::RequestAuthorization { kind } => {
                        self.provider.request_authorization(kind).await;
                    },
                    AppAction::ListenAuthorization => {
                        // Record the subscription; events are injected by the test.
                        drop(self.provider.authorization_updates());
                    },
                    AppAction::ListenUpdates => {
                        drop(self.provider.location_updates());
                        drop(self.provider.error_updates());
                    },
                    AppAction::StartUpdates => self.provider.start().await,
                    AppAction::StopUpdates => self.provider.stop().await,
                    AppAction::RequestLocation => {
                        let result = self.provider.current_location().await;
                        pending.extend(self.app.handle(AppEvent::SingleLocation(result)));
                    },
                    AppAction::OpenSettings => self.settings.open_settings().await,
                }
            }
        }
    }
}
