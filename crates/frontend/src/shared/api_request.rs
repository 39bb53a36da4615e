//! One-shot API request bound to the lifetime of a component.
//!
//! `use_api_request` fires the fetcher once when the component is created and
//! exposes the outcome as a tri-state [`RequestState`]. Re-renders never
//! re-run the fetcher. The request is not cancelled on unmount; a result that
//! settles after the owner is gone, or after a newer `update()`, is dropped.
//!
//! ```ignore
//! let subscriptions = use_api_request(api::fetch_subscriptions);
//! let list = move || subscriptions.data().unwrap_or_default();
//! ```

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

pub type LocalBoxFuture<T> = Pin<Box<dyn Future<Output = T>>>;
type SharedFetcher<T> = Arc<dyn Fn() -> LocalBoxFuture<Result<T, String>> + Send + Sync>;
type Spawner = Rc<dyn Fn(LocalBoxFuture<()>)>;

/// Outcome of an API request: not yet loaded / loaded / failed.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Pending,
    Loaded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Pending)
    }
}

impl<T> From<Result<T, String>> for RequestState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => RequestState::Loaded(data),
            Err(e) => RequestState::Failed(e),
        }
    }
}

/// Start/liveness bookkeeping shared between the component and its requests.
/// Every request gets a generation; only the latest one may settle.
#[derive(Debug, Clone)]
pub struct RequestLifecycle {
    started: Arc<AtomicBool>,
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl Default for RequestLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self {
            started: Arc::new(AtomicBool::new(false)),
            alive: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns `true` only for the first call.
    pub fn begin(&self) -> bool {
        !self.started.swap(true, Ordering::SeqCst)
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Supersedes every earlier request and returns the new generation.
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Invokes `fetcher` only if this lifecycle has not started yet.
    pub fn start<T, F, Fut>(&self, fetcher: &F) -> Option<(u64, Fut)>
    where
        F: Fn() -> Fut + ?Sized,
        Fut: Future<Output = Result<T, String>>,
    {
        if self.begin() {
            Some((self.next_generation(), fetcher()))
        } else {
            None
        }
    }
}

/// Awaits `request` and hands the outcome to `apply` while the owner is alive
/// and `generation` is still the latest. Returns whether the outcome was
/// applied.
pub async fn settle<T, Fut>(
    lifecycle: &RequestLifecycle,
    generation: u64,
    request: Fut,
    apply: impl FnOnce(RequestState<T>),
) -> bool
where
    Fut: Future<Output = Result<T, String>>,
{
    let result = request.await;
    if !lifecycle.is_alive() {
        log::debug!("api request settled after unmount; result discarded");
        return false;
    }
    if !lifecycle.is_current(generation) {
        log::debug!("api request {} superseded; result discarded", generation);
        return false;
    }
    if let Err(e) = &result {
        log::warn!("api request failed: {}", e);
    }
    apply(RequestState::from(result));
    true
}

/// Reactive handle returned by [`use_api_request`].
pub struct ApiRequest<T: Send + Sync + 'static> {
    pub state: RwSignal<RequestState<T>>,
    pub last_updated: RwSignal<Option<DateTime<Utc>>>,
    fetcher: StoredValue<SharedFetcher<T>>,
    lifecycle: StoredValue<RequestLifecycle>,
    spawner: StoredValue<Spawner, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for ApiRequest<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ApiRequest<T> {}

impl<T: Clone + Send + Sync + 'static> ApiRequest<T> {
    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn loading(&self) -> bool {
        self.state.with(RequestState::is_loading)
    }

    /// Re-runs the fetcher and replaces the current state with its outcome.
    /// A request still in flight is superseded.
    pub fn update(&self) {
        let generation = self.lifecycle.with_value(RequestLifecycle::next_generation);
        self.state.set(RequestState::Pending);
        let request = self.fetcher.with_value(|f| f());
        self.spawn(generation, request);
    }

    fn fire(&self) {
        let lifecycle = self.lifecycle.get_value();
        let fetcher = self.fetcher.get_value();
        if let Some((generation, request)) = lifecycle.start(&*fetcher) {
            self.spawn(generation, request);
        }
    }

    fn spawn(&self, generation: u64, request: LocalBoxFuture<Result<T, String>>) {
        let lifecycle = self.lifecycle.get_value();
        let state = self.state;
        let last_updated = self.last_updated;
        let task = Box::pin(async move {
            settle(&lifecycle, generation, request, move |outcome| {
                state.set(outcome);
                last_updated.set(Some(Utc::now()));
            })
            .await;
        });
        self.spawner.with_value(|spawn| spawn(task));
    }
}

/// Fires `fetcher` once for the current component and tracks its outcome.
pub fn use_api_request<T, F, Fut>(fetcher: F) -> ApiRequest<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    use_api_request_with(fetcher, |task: LocalBoxFuture<()>| {
        leptos::task::spawn_local(task)
    })
}

/// [`use_api_request`] with the task spawner supplied by the caller.
pub fn use_api_request_with<T, F, Fut, S>(fetcher: F, spawner: S) -> ApiRequest<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
    S: Fn(LocalBoxFuture<()>) + 'static,
{
    let spawner: Spawner = Rc::new(spawner);
    let fetcher: SharedFetcher<T> =
        Arc::new(move || -> LocalBoxFuture<Result<T, String>> { Box::pin(fetcher()) });
    let lifecycle = RequestLifecycle::new();

    let request = ApiRequest {
        state: RwSignal::new(RequestState::Pending),
        last_updated: RwSignal::new(None),
        fetcher: StoredValue::new(fetcher),
        lifecycle: StoredValue::new(lifecycle.clone()),
        spawner: StoredValue::new_local(spawner),
    };

    on_cleanup(move || lifecycle.unmount());

    request.fire();
    request
}
