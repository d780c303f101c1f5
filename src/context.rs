//! Application Context
//!
//! Shared handles provided via Leptos Context API, plus the fetch hook
//! every page loads its data through.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::models::Role;
use crate::store::{store_role, store_selected_child, store_token, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every successful mutation; fetches re-run on change
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    pub store: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), store: AppStore, config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            store,
            config: StoredValue::new(config),
        }
    }

    /// Invalidate every loaded list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Client carrying the current session token
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config(), store_token(&self.store))
    }

    /// Reactive
    pub fn role(&self) -> Option<Role> {
        store_role(&self.store)
    }

    /// Reactive. Which students' records the viewer sees.
    pub fn record_scope(&self) -> RecordScope {
        RecordScope::for_viewer(self.role(), store_selected_child(&self.store).map(|c| c.id))
    }
}

/// Staff see every record, parents only the selected child's
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordScope {
    All,
    Student(String),
    Nothing,
}

impl RecordScope {
    pub fn for_viewer(role: Option<Role>, selected_child: Option<String>) -> Self {
        match (role, selected_child) {
            (Some(r), _) if r.is_staff() => RecordScope::All,
            (Some(Role::Parent), Some(id)) => RecordScope::Student(id),
            _ => RecordScope::Nothing,
        }
    }

    pub fn student_id(&self) -> Option<&str> {
        match self {
            RecordScope::Student(id) => Some(id),
            _ => None,
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Counts fetch starts so a response can tell whether a newer fetch has
/// begun since it was issued.
#[derive(Clone, Default)]
pub struct FetchGeneration(Arc<AtomicU64>);

impl FetchGeneration {
    /// Start a fetch and return its token
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

/// Await `request`, yielding its output only if no fetch began after `token`
pub async fn resolve_latest<T>(generation: &FetchGeneration, token: u64, request: impl Future<Output = T>) -> Option<T> {
    let output = request.await;
    if generation.is_current(token) {
        Some(output)
    } else {
        log::debug!("dropping stale response for fetch {}", token);
        None
    }
}

/// Fetch on mount, again after every `ctx.reload()`, and on retry.
/// Signals read synchronously inside `fetch` are tracked too. Data stays on
/// screen while a reload is in flight, and only the newest fetch may write.
pub fn use_fetch<T, F, Fut>(fallback: &'static str, fetch: F) -> (ReadSignal<Loadable<T>>, Callback<()>)
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = AppResult<T>> + 'static,
{
    let ctx = use_app_context();
    let (state, set_state) = signal(Loadable::<T>::Loading);
    let (retry, set_retry) = signal(0u32);
    let generation = FetchGeneration::default();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let _ = retry.get();
        let request = fetch(ctx.api());
        let generation = generation.clone();
        let token = generation.begin();
        spawn_local(async move {
            let Some(result) = resolve_latest(&generation, token, request).await else {
                return;
            };
            match result {
                Ok(data) => set_state.set(Loadable::Ready(data)),
                Err(e) => {
                    log::error!("load failed: {}", e);
                    set_state.set(Loadable::Failed(e.user_message(fallback)));
                }
            }
        });
    });

    let retry = Callback::new(move |_| {
        set_state.set(Loadable::Loading);
        set_retry.update(|v| *v += 1);
    });
    (state, retry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;

    #[test]
    fn test_record_scope() {
        assert_eq!(RecordScope::for_viewer(Some(Role::Nurse), Some("hs-1".into())), RecordScope::All);
        assert_eq!(
            RecordScope::for_viewer(Some(Role::Parent), Some("hs-1".into())),
            RecordScope::Student("hs-1".into())
        );
        assert_eq!(RecordScope::for_viewer(Some(Role::Parent), None), RecordScope::Nothing);
        assert_eq!(RecordScope::for_viewer(None, Some("hs-1".into())), RecordScope::Nothing);
        assert_eq!(RecordScope::Student("hs-2".into()).student_id(), Some("hs-2"));
        assert_eq!(RecordScope::All.student_id(), None);
    }

    #[tokio::test]
    async fn test_older_response_landing_last_is_dropped() {
        let generation = FetchGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        let (send_a, recv_a) = oneshot::channel::<&str>();
        let (send_b, recv_b) = oneshot::channel::<&str>();

        let child_a = resolve_latest(&generation, first, recv_a);
        let child_b = resolve_latest(&generation, second, recv_b);
        send_b.send("hs-B").unwrap();
        let shown_b = child_b.await;
        send_a.send("hs-A").unwrap();
        let shown_a = child_a.await;

        assert_eq!(shown_b, Some(Ok("hs-B")));
        assert_eq!(shown_a, None);
    }

    #[tokio::test]
    async fn test_reload_during_flight_supersedes_request() {
        let generation = FetchGeneration::default();
        let token = generation.begin();
        let pending = resolve_latest(&generation, token, async { "trước khi cập nhật" });
        generation.begin();
        assert_eq!(pending.await, None);

        let latest = generation.begin();
        assert_eq!(resolve_latest(&generation, latest, async { 7 }).await, Some(7));
    }
}
