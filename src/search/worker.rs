//! Background search worker
//!
//! Runs backend calls off the UI thread. Requests go in over a channel,
//! responses come back tagged with the request's sequence number, so the
//! UI loop can keep polling terminal events while a search is in flight.
//!
//! With more than one thread, responses may arrive out of order; the
//! [`SearchSession`](super::session::SearchSession) sorts that out by
//! discarding anything but the latest request's answer.

use crate::api::SearchBackend;
use crate::search::error::{Result, SearchError};
use crate::search::session::{SearchRequest, SearchResponse};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default number of worker threads
pub const DEFAULT_WORKER_THREADS: usize = 2;

/// Handle to the background search threads
pub struct SearchWorker {
    requests: Option<Sender<SearchRequest>>,
    responses: Receiver<SearchResponse>,
    handles: Vec<JoinHandle<()>>,
}

impl SearchWorker {
    /// Spawn a worker with the default thread count
    #[must_use]
    pub fn spawn<B>(backend: B) -> Self
    where
        B: SearchBackend + 'static,
    {
        Self::with_threads(backend, DEFAULT_WORKER_THREADS)
    }

    /// Spawn a worker with `threads` threads (at least one)
    #[must_use]
    pub fn with_threads<B>(backend: B, threads: usize) -> Self
    where
        B: SearchBackend + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<SearchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<SearchResponse>();
        let request_rx = Arc::new(Mutex::new(request_rx));
        let backend = Arc::new(backend);

        let handles = (0..threads.max(1))
            .map(|id| {
                let request_rx = Arc::clone(&request_rx);
                let response_tx = response_tx.clone();
                let backend = Arc::clone(&backend);
                thread::spawn(move || run_worker(id, &*backend, &request_rx, &response_tx))
            })
            .collect();

        Self {
            requests: Some(request_tx),
            responses: response_rx,
            handles,
        }
    }

    /// Queue a request
    ///
    /// # Errors
    ///
    /// Returns `SearchError::WorkerDisconnected` if every worker thread has exited.
    pub fn submit(&self, request: SearchRequest) -> Result<()> {
        self.requests
            .as_ref()
            .ok_or(SearchError::WorkerDisconnected)?
            .send(request)
            .map_err(|_| SearchError::WorkerDisconnected)
    }

    /// Collect every response that is ready, without blocking
    #[must_use]
    pub fn drain(&self) -> Vec<SearchResponse> {
        self.responses.try_iter().collect()
    }

    /// Wait up to `timeout` for the next response
    ///
    /// # Errors
    ///
    /// Returns `SearchError::WorkerDisconnected` if all worker threads have exited.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<SearchResponse>> {
        match self.responses.recv_timeout(timeout) {
            Ok(response) => Ok(Some(response)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(SearchError::WorkerDisconnected),
        }
    }

    /// Stop accepting requests without waiting for in-flight searches
    ///
    /// The threads are detached. Each one exits once its current backend
    /// call returns and finds nobody listening for the response.
    pub fn detach(mut self) {
        self.requests = None;
        let detached = self.handles.drain(..).count();
        tracing::debug!(threads = detached, "Detached search worker");
    }

    /// Stop accepting requests and wait for in-flight searches to finish
    pub fn shutdown(mut self) {
        self.requests = None;
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

fn run_worker(
    id: usize,
    backend: &dyn SearchBackend,
    requests: &Mutex<Receiver<SearchRequest>>,
    responses: &Sender<SearchResponse>,
) {
    loop {
        // Hold the lock only while waiting for the next request
        let next = match requests.lock() {
            Ok(rx) => rx.recv(),
            Err(_) => break,
        };
        let Ok(request) = next else {
            break;
        };

        tracing::debug!(worker = id, seq = request.seq, "Running search");
        let outcome = backend.search_developers(&request.query);
        if responses
            .send(SearchResponse {
                seq: request.seq,
                outcome,
            })
            .is_err()
        {
            break;
        }
    }
    tracing::trace!(worker = id, "Search worker exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::session::{ApplyOutcome, SearchSession};
    use crate::testing::MockBackend;
    use std::time::Instant;

    #[test]
    fn test_worker_round_trip() {
        let backend = MockBackend::with_developers(3, 3, 20);
        let worker = SearchWorker::with_threads(backend.clone(), 1);
        let mut session = SearchSession::new();

        let request = session.mount().unwrap();
        worker.submit(request).unwrap();

        let response = worker
            .recv_timeout(Duration::from_secs(5))
            .unwrap()
            .expect("response within timeout");
        assert_eq!(session.apply(response), ApplyOutcome::Applied);
        assert_eq!(session.results().unwrap().hits.len(), 3);
        assert_eq!(backend.developer_queries().len(), 1);

        worker.shutdown();
    }

    #[test]
    fn test_only_latest_response_applied() {
        let backend = MockBackend::with_developers(2, 2, 20);
        let worker = SearchWorker::with_threads(backend, 2);
        let mut session = SearchSession::new();

        worker.submit(session.mount().unwrap()).unwrap();
        worker.submit(session.submit()).unwrap();
        worker.submit(session.change_page(2).unwrap()).unwrap();

        let mut applied = 0;
        for _ in 0..3 {
            let response = worker
                .recv_timeout(Duration::from_secs(5))
                .unwrap()
                .expect("response within timeout");
            if session.apply(response) == ApplyOutcome::Applied {
                applied += 1;
            }
        }

        assert_eq!(applied, 1);
        assert!(!session.is_loading());
        worker.shutdown();
    }

    #[test]
    fn test_detach_does_not_wait_for_slow_search() {
        let backend = MockBackend::with_developers(1, 1, 20).slow(Duration::from_secs(3));
        let worker = SearchWorker::with_threads(backend.clone(), 1);
        let mut session = SearchSession::new();
        worker.submit(session.mount().unwrap()).unwrap();

        // Let the thread pick the request up before letting go
        while backend.developer_queries().is_empty() {
            thread::sleep(Duration::from_millis(5));
        }

        let started = Instant::now();
        worker.detach();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_drain_without_requests_is_empty() {
        let worker = SearchWorker::spawn(MockBackend::default());
        assert!(worker.drain().is_empty());
        worker.shutdown();
    }
}
