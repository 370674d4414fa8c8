//! Async runtime for the location feature.
//!
//! The [`Runtime`] drives the event loop: it routes UI intents and provider
//! events through the [`MapApp`] state machine, executes the resulting
//! [`AppAction`]s against the [`LocationProvider`], and publishes a
//! [`MapSnapshot`] through a watch channel after every cycle.
//!
//! The long-lived provider streams (authorization changes, location updates,
//! errors) run as background tasks feeding one merged event channel. Tasks
//! are spawned on demand, guarded so repeated listen actions are no-ops, and
//! aborted when the runtime winds down or is dropped.

use std::sync::Arc;

use tokio::{
    sync::{broadcast, mpsc, watch},
    task::JoinHandle,
};
use waymark_core::{LocationProvider, SettingsGateway};

use crate::{AppAction, AppEvent, Intent, MapApp, MapConfig, MapSnapshot};

/// Capacity of the intent and event channels.
const CHANNEL_CAPACITY: usize = 64;

/// Handle a UI layer uses to drive the runtime.
///
/// Dropping every handle closes the intent channel, which ends the runtime's
/// event loop and tears down its listener tasks.
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    intents: mpsc::Sender<Intent>,
    state: watch::Receiver<MapSnapshot>,
}

impl RuntimeHandle {
    /// Send a UI intent. Dropped silently if the runtime has stopped.
    pub async fn send(&self, intent: Intent) {
        if self.intents.send(intent).await.is_err() {
            tracing::debug!(?intent, "runtime stopped, intent dropped");
        }
    }

    /// Subscribe to state snapshot updates.
    pub fn state(&self) -> watch::Receiver<MapSnapshot> {
        self.state.clone()
    }

    /// Latest published state snapshot.
    pub fn snapshot(&self) -> MapSnapshot {
        self.state.borrow().clone()
    }
}

/// Background listener tasks. Aborted on drop so stream subscriptions share
/// the runtime's lifetime.
#[derive(Debug, Default)]
struct Listeners {
    authorization: Option<JoinHandle<()>>,
    locations: Option<JoinHandle<()>>,
    errors: Option<JoinHandle<()>>,
    oneshots: Vec<JoinHandle<()>>,
}

impl Listeners {
    fn abort_all(&mut self) {
        for handle in self
            .authorization
            .take()
            .into_iter()
            .chain(self.locations.take())
            .chain(self.errors.take())
            .chain(self.oneshots.drain(..))
        {
            handle.abort();
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Event loop orchestrating [`MapApp`], a location provider, and the settings
/// gateway.
pub struct Runtime<P, S> {
    app: MapApp,
    provider: Arc<P>,
    settings: Arc<S>,
    events_tx: mpsc::Sender<AppEvent>,
    events_rx: mpsc::Receiver<AppEvent>,
    intents_rx: mpsc::Receiver<Intent>,
    state_tx: watch::Sender<MapSnapshot>,
    listeners: Listeners,
}

impl<P, S> Runtime<P, S>
where
    P: LocationProvider,
    S: SettingsGateway,
{
    /// Create a runtime and the handle for its UI consumer.
    pub fn new(provider: P, settings: S, config: MapConfig) -> (Self, RuntimeHandle) {
        let app = MapApp::new(config);
        let (intents_tx, intents_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (events_tx, events_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (state_tx, state_rx) = watch::channel(app.snapshot());

        let handle = RuntimeHandle { intents: intents_tx, state: state_rx };
        let runtime = Self {
            app,
            provider: Arc::new(provider),
            settings: Arc::new(settings),
            events_tx,
            events_rx,
            intents_rx,
            state_tx,
            listeners: Listeners::default(),
        };

        (runtime, handle)
    }

    /// Run the event loop until every [`RuntimeHandle`] is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                intent = self.intents_rx.recv() => match intent {
                    Some(intent) => {
                        let actions = self.app.apply(intent);
                        self.process_actions(actions).await;
                    },
                    // UI scope gone: wind down.
                    None => break,
                },
                Some(event) = self.events_rx.recv() => {
                    let actions = self.app.handle(event);
                    self.process_actions(actions).await;
                },
            }
            self.publish();
        }

        self.listeners.abort_all();
    }

    /// Current state machine, for inspection in tests.
    pub fn app(&self) -> &MapApp {
        &self.app
    }

    /// Execute actions, feeding any follow-up events straight back through
    /// the state machine until the queue drains.
    async fn process_actions(&mut self, initial: Vec<AppAction>) {
        let mut pending = initial;

        while !pending.is_empty() {
            let actions = std::mem::take(&mut pending);

            for action in actions {
                match action {
                    AppAction::CheckAuthorization => {
                        let status = self.provider.authorization_status();
                        pending.extend(self.app.handle(AppEvent::InitialAuthorization(status)));
                    },
                    AppAction::RequestAuthorization { kind } => {
                        self.provider.request_authorization(kind).await;
                    },
                    AppAction::ListenAuthorization => self.listen_authorization(),
                    AppAction::ListenUpdates => self.listen_updates(),
                    AppAction::StartUpdates => self.provider.start().await,
                    AppAction::StopUpdates => self.provider.stop().await,
                    AppAction::RequestLocation => self.request_single_location(),
                    AppAction::OpenSettings => self.settings.open_settings().await,
                }
            }
        }
    }

    fn publish(&self) {
        let _ = self.state_tx.send_replace(self.app.snapshot());
    }

    fn listen_authorization(&mut self) {
        if is_running(&self.listeners.authorization) {
            return;
        }
        self.listeners.authorization = Some(forward_stream(
            self.provider.authorization_updates(),
            self.events_tx.clone(),
            AppEvent::AuthorizationChanged,
            "authorization",
        ));
    }

    fn listen_updates(&mut self) {
        if !is_running(&self.listeners.locations) {
            self.listeners.locations = Some(forward_stream(
                self.provider.location_updates(),
                self.events_tx.clone(),
                AppEvent::LocationUpdated,
                "location",
            ));
        }
        if !is_running(&self.listeners.errors) {
            self.listeners.errors = Some(forward_stream(
                self.provider.error_updates(),
                self.events_tx.clone(),
                AppEvent::UpdateFailed,
                "error",
            ));
        }
    }

    fn request_single_location(&mut self) {
        let provider = Arc::clone(&self.provider);
        let events = self.events_tx.clone();

        self.listeners.oneshots.retain(|handle| !handle.is_finished());
        self.listeners.oneshots.push(tokio::spawn(async move {
            let result = provider.current_location().await;
            if events.send(AppEvent::SingleLocation(result)).await.is_err() {
                tracing::debug!("runtime stopped before single location delivery");
            }
        }));
    }
}

fn is_running(handle: &Option<JoinHandle<()>>) -> bool {
    handle.as_ref().is_some_and(|h| !h.is_finished())
}

/// Forward an infinite broadcast stream into the merged event channel.
///
/// Lagged receivers skip ahead with a warning: fixes are last-write-wins, so
/// dropped intermediate events are harmless. The task ends when the provider
/// drops its sender or the runtime drops its receiver.
fn forward_stream<T, F>(
    mut rx: broadcast::Receiver<T>,
    events: mpsc::Sender<AppEvent>,
    into_event: F,
    label: &'static str,
) -> JoinHandle<()>
where
    T: Clone + Send + 'static,
    F: Fn(T) -> AppEvent + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(item) => {
                    if events.send(into_event(item)).await.is_err() {
                        break;
                    }
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(stream = label, skipped, "event stream lagged");
                },
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
