//! Generic async data-fetching state
//!
//! [`Resource`] wraps a zero-argument async fetcher and tracks the
//! `{data, loading, error}` triple a view consumes. Transient network
//! failures are retried a bounded number of times with linear backoff;
//! concurrent invocations are fenced by a monotonic request id so a
//! stale response never overwrites a newer one.
//!
//! [`Mutation`] is the on-demand counterpart: one call, no retry, a
//! terminal data-or-error outcome.
//!
//! [`OptimisticList`] applies a local list edit immediately, then
//! reverts to the pre-edit snapshot if the confirming request fails.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Error;

/// Snapshot of a resource's view state
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    /// The last successfully fetched value
    pub data: Option<T>,

    /// Whether a fetch is in flight
    pub loading: bool,

    /// Terminal error message from the last fetch, if it failed
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

/// A fetch-on-demand resource with bounded retry and stale-response fencing
pub struct Resource<T, F> {
    fetcher: F,
    state: Arc<Mutex<ResourceState<T>>>,
    latest: Arc<AtomicU64>,
    max_retries: u32,
    backoff: Duration,
}

impl<T, F, Fut> Resource<T, F>
where
    T: Clone,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    /// Wrap a fetcher with the default retry policy (2 extra attempts,
    /// 1s base backoff)
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: Arc::new(Mutex::new(ResourceState::default())),
            latest: Arc::new(AtomicU64::new(0)),
            max_retries: 2,
            backoff: Duration::from_secs(1),
        }
    }

    /// Override the retry policy
    pub fn with_retry_policy(mut self, max_retries: u32, backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.backoff = backoff;
        self
    }

    /// Run the fetcher and commit the outcome, unless a newer
    /// invocation has started in the meantime.
    pub async fn load(&self) {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().unwrap().loading = true;

        let result = self.run_with_retry().await;

        // Only the latest invocation may commit; stale responses are dropped
        if self.latest.load(Ordering::SeqCst) != id {
            tracing::debug!(request = id, "dropping stale response");
            return;
        }

        let mut state = self.state.lock().unwrap();
        match result {
            Ok(data) => {
                state.data = Some(data);
                state.error = None;
            }
            Err(err) => {
                state.data = None;
                state.error = Some(err.to_string());
            }
        }
        state.loading = false;
    }

    /// Re-run the fetch unconditionally
    pub async fn refetch(&self) {
        self.load().await;
    }

    /// Overwrite the local value without a round trip
    pub fn set_data(&self, data: T) {
        let mut state = self.state.lock().unwrap();
        state.data = Some(data);
        state.error = None;
        state.loading = false;
    }

    /// Snapshot the current view state
    pub fn state(&self) -> ResourceState<T> {
        self.state.lock().unwrap().clone()
    }

    async fn run_with_retry(&self) -> Result<T, Error> {
        let mut attempt = 0u32;
        loop {
            match (self.fetcher)().await {
                Ok(data) => return Ok(data),
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(attempt, error = %err, "transient failure, retrying");
                    // linear backoff: 1x, 2x, ... the base duration
                    tokio::time::sleep(self.backoff * attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// An on-demand mutation with a terminal data-or-error outcome
pub struct Mutation<In, T, F> {
    mutator: F,
    state: Arc<Mutex<ResourceState<T>>>,
    _input: std::marker::PhantomData<fn(In)>,
}

impl<In, T, F, Fut> Mutation<In, T, F>
where
    T: Clone,
    F: Fn(In) -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    /// Wrap a one-argument async mutator
    pub fn new(mutator: F) -> Self {
        let state = ResourceState {
            data: None,
            loading: false,
            error: None,
        };
        Self {
            mutator,
            state: Arc::new(Mutex::new(state)),
            _input: std::marker::PhantomData,
        }
    }

    /// Run the mutation once; never retried
    pub async fn mutate(&self, input: In) -> Result<T, Error> {
        {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
        }
        let result = (self.mutator)(input).await;
        let mut state = self.state.lock().unwrap();
        state.loading = false;
        match &result {
            Ok(data) => {
                state.data = Some(data.clone());
                state.error = None;
            }
            Err(err) => {
                state.data = None;
                state.error = Some(err.to_string());
            }
        }
        result
    }

    /// Snapshot the current mutation state
    pub fn state(&self) -> ResourceState<T> {
        self.state.lock().unwrap().clone()
    }
}

/// A locally editable list with snapshot rollback.
///
/// The edit is applied immediately so the view updates without waiting
/// for the server; if the confirming request then fails, the list is
/// restored to the pre-edit snapshot.
#[derive(Debug, Clone, Default)]
pub struct OptimisticList<T: Clone> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> OptimisticList<T> {
    /// Create a list from its current server-confirmed contents
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    /// Snapshot the current contents
    pub fn items(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }

    /// Replace the contents with a server-confirmed value
    pub fn replace(&self, items: Vec<T>) {
        *self.items.lock().unwrap() = items;
    }

    /// Apply `edit` locally, then await the confirming request; on
    /// failure the pre-edit snapshot is restored.
    pub async fn apply<R, Fut>(&self, edit: impl FnOnce(&mut Vec<T>), request: Fut) -> Result<R, Error>
    where
        Fut: Future<Output = Result<R, Error>>,
    {
        let snapshot = {
            let mut items = self.items.lock().unwrap();
            let snapshot = items.clone();
            edit(&mut items);
            snapshot
        };
        match request.await {
            Ok(confirmed) => Ok(confirmed),
            Err(err) => {
                *self.items.lock().unwrap() = snapshot;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    // A real transport-level failure: nothing listens on the discard port
    async fn transient_error() -> Error {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/unreachable")
            .timeout(Duration::from_millis(250))
            .send()
            .await
            .expect_err("request must fail");
        Error::Http(err)
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let resource = Resource::new(move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(transient_error().await)
                } else {
                    Ok("roster".to_string())
                }
            }
        })
        .with_retry_policy(2, Duration::from_millis(10));

        resource.load().await;

        let state = resource.state();
        assert_eq!(state.data.as_deref(), Some("roster"));
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_bounded_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let resource = Resource::<String, _>::new(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(transient_error().await)
            }
        })
        .with_retry_policy(2, Duration::from_millis(10));

        resource.load().await;

        let state = resource.state();
        assert_eq!(state.data, None);
        assert!(state.error.is_some());
        // the original attempt plus exactly two retries
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_transient_errors_are_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let resource = Resource::<String, _>::new(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(Error::validation("x"))
            }
        });

        resource.load().await;

        let state = resource.state();
        assert_eq!(state.error.as_deref(), Some("x"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_never_commits() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let resource = Resource::new(move || {
            let counter = counter.clone();
            async move {
                // the first invocation is slow, the second fast
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok("stale".to_string())
                } else {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    Ok("fresh".to_string())
                }
            }
        });

        tokio::join!(resource.load(), resource.refetch());

        let state = resource.state();
        assert_eq!(state.data.as_deref(), Some("fresh"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn set_data_overwrites_locally() {
        let resource = Resource::new(|| async { Ok(vec![1, 2]) });
        resource.load().await;
        resource.set_data(vec![1, 2, 3]);
        assert_eq!(resource.state().data, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn mutation_records_terminal_data() {
        let mutation = Mutation::new(|n: u32| async move { Ok(n * 2) });
        let result = mutation.mutate(21).await.unwrap();
        assert_eq!(result, 42);
        let state = mutation.state();
        assert_eq!(state.data, Some(42));
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn mutation_records_terminal_error_without_retry() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let mutation = Mutation::new(move |_n: u32| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(Error::validation("rejected"))
            }
        });
        assert!(mutation.mutate(1).await.is_err());
        let state = mutation.state();
        assert_eq!(state.data, None);
        assert_eq!(state.error.as_deref(), Some("rejected"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn optimistic_edit_sticks_on_success() {
        let list = OptimisticList::new(vec!["a".to_string(), "b".to_string()]);
        let result = list
            .apply(|items| items.retain(|i| i != "a"), async { Ok(()) })
            .await;
        assert!(result.is_ok());
        assert_eq!(list.items(), vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn optimistic_edit_reverts_on_failure() {
        let list = OptimisticList::new(vec!["a".to_string(), "b".to_string()]);
        let result: Result<(), Error> = list
            .apply(
                |items| items.retain(|i| i != "a"),
                async { Err(Error::general("boom")) },
            )
            .await;
        assert!(result.is_err());
        assert_eq!(list.items(), vec!["a".to_string(), "b".to_string()]);
    }
}
