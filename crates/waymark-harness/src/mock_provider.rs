//! Scripted location provider for deterministic testing.
//!
//! `MockProvider` implements [`LocationProvider`] with scripted responses and
//! records every command it receives, so tests can assert both outcomes and
//! call order. Stream events are pushed by the test through the `emit_*`
//! methods.

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use tokio::sync::broadcast;
use waymark_core::{
    AuthorizationKind, AuthorizationStatus, Location, LocationError, LocationProvider,
    SettingsGateway,
};

/// Capacity of the scripted broadcast streams.
const STREAM_CAPACITY: usize = 32;

/// A command the feature issued against the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    /// Authorization prompt requested.
    RequestAuthorization(AuthorizationKind),
    /// Authorization snapshot read.
    AuthorizationStatus,
    /// Continuous updates started.
    Start,
    /// Continuous updates stopped.
    Stop,
    /// One-shot location requested.
    CurrentLocation,
    /// Authorization stream subscribed.
    SubscribeAuthorization,
    /// Location stream subscribed.
    SubscribeLocations,
    /// Error stream subscribed.
    SubscribeErrors,
}

#[derive(Debug)]
struct Inner {
    status: AuthorizationStatus,
    single_results: VecDeque<Result<Location, LocationError>>,
    calls: Vec<ProviderCall>,
}

/// Scripted [`LocationProvider`] with a recorded command log.
///
/// Cloning shares the script and the log, so a test can keep one clone while
/// handing another to the runtime.
#[derive(Debug, Clone)]
pub struct MockProvider {
    inner: Arc<Mutex<Inner>>,
    authorization_tx: broadcast::Sender<AuthorizationStatus>,
    locations_tx: broadcast::Sender<Location>,
    errors_tx: broadcast::Sender<LocationError>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a provider reporting `NotDetermined` with nothing scripted.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                status: AuthorizationStatus::NotDetermined,
                single_results: VecDeque::new(),
                calls: Vec::new(),
            })),
            authorization_tx: broadcast::channel(STREAM_CAPACITY).0,
            locations_tx: broadcast::channel(STREAM_CAPACITY).0,
            errors_tx: broadcast::channel(STREAM_CAPACITY).0,
        }
    }

    /// Script the authorization snapshot.
    pub fn set_status(&self, status: AuthorizationStatus) {
        self.lock().status = status;
    }

    /// Queue a one-shot location result. Results are consumed in order; an
    /// empty queue yields `RequestFailed`.
    pub fn push_single_result(&self, result: Result<Location, LocationError>) {
        self.lock().single_results.push_back(result);
    }

    /// Emit an authorization change on the stream and update the snapshot.
    pub fn emit_authorization(&self, status: AuthorizationStatus) {
        self.lock().status = status;
        let _ = self.authorization_tx.send(status);
    }

    /// Emit a fix on the location stream.
    pub fn emit_location(&self, location: Location) {
        let _ = self.locations_tx.send(location);
    }

    /// Emit an error on the error stream.
    pub fn emit_error(&self, error: LocationError) {
        let _ = self.errors_tx.send(error);
    }

    /// All recorded commands, in call order.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.lock().calls.clone()
    }

    /// Take and clear the recorded commands.
    pub fn take_calls(&self) -> Vec<ProviderCall> {
        std::mem::take(&mut self.lock().calls)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: ProviderCall) {
        self.lock().calls.push(call);
    }
}

#[async_trait]
impl LocationProvider for MockProvider {
    async fn request_authorization(&self, kind: AuthorizationKind) {
        self.record(ProviderCall::RequestAuthorization(kind));
    }

    fn authorization_status(&self) -> AuthorizationStatus {
        self.record(ProviderCall::AuthorizationStatus);
        self.lock().status
    }

    async fn start(&self) {
        self.record(ProviderCall::Start);
    }

    async fn stop(&self) {
        self.record(ProviderCall::Stop);
    }

    async fn current_location(&self) -> Result<Location, LocationError> {
        self.record(ProviderCall::CurrentLocation);
        self.lock().single_results.pop_front().unwrap_or_else(|| {
            Err(LocationError::RequestFailed("no scripted location".to_string()))
        })
    }

    fn authorization_updates(&self) -> broadcast::Receiver<AuthorizationStatus> {
        self.record(ProviderCall::SubscribeAuthorization);
        self.authorization_tx.subscribe()
    }

    fn location_updates(&self) -> broadcast::Receiver<Location> {
        self.record(ProviderCall::SubscribeLocations);
        self.locations_tx.subscribe()
    }

    fn error_updates(&self) -> broadcast::Receiver<LocationError> {
        self.record(ProviderCall::SubscribeErrors);
        self.errors_tx.subscribe()
    }
}

/// Counting [`SettingsGateway`] for tests.
#[derive(Debug, Clone, Default)]
pub struct MockSettings {
    opened: Arc<AtomicUsize>,
}

impl MockSettings {
    /// How many times settings were opened.
    pub fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsGateway for MockSettings {
    async fn open_settings(&self) {
        self.opened.fetch_add(1, Ordering::SeqCst);
    }
}
