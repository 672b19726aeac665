//! # Mock Tables & Testing Guide
//!
//! [`MockTable<T>`] hands out a real [`TableClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running actor. Use it to test logic that sits *around*
//! a table (client wrappers, the submission flow, a row whose hooks consult another table)
//! without spawning the whole backend.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockTable | Real TableActor |
//! |---------|-----------|-----------------|
//! | **Speed** | Instant | Fast (one spawned task) |
//! | **State** | None, scripted replies | Real rows and constraints |
//! | **Use Case** | Logic around a client | The table itself or the full backend |
//! | **Error Injection** | `return_err(..)` | Requires building the failing state |
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut orders = MockTable::<OrderRow>::new();
//! orders.expect_insert().return_err(StoreError::ActorClosed);
//!
//! let client = OrderClient::new(orders.client());
//! assert!(client.insert_order(new_order).await.is_err());
//! orders.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next expectation
//! (or arrives when none is left) panics the mock task, which surfaces to the caller as
//! [`StoreError::ActorDropped`].
//!
//! ## Low-level helpers
//!
//! [`mock_table`] returns a client and the raw receiver, and `expect_*` receive the next
//! request so the test can assert on its payload and answer it by hand.

use crate::client::TableClient;
use crate::error::StoreError;
use crate::message::{Response, TableRequest};
use crate::row::TableRow;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: TableRow> {
    Insert(Result<T, StoreError>),
    Get(T::Id, Result<Option<T>, StoreError>),
    Select(Result<Vec<T>, StoreError>),
    Update(T::Id, Result<T, StoreError>),
    Delete(T::Id, Result<(), StoreError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted table with expectation tracking.
pub struct MockTable<T: TableRow> {
    client: TableClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: TableRow> Default for MockTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableRow> MockTable<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<TableRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (TableRequest::Insert { respond_to, .. }, Some(Expectation::Insert(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (TableRequest::Get { id, respond_to }, Some(Expectation::Get(want, r))) => {
                        assert_eq!(id, want, "{}: get for unexpected id", T::TABLE);
                        let _ = respond_to.send(r);
                    }
                    (TableRequest::Select { respond_to, .. }, Some(Expectation::Select(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (
                        TableRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(want, r)),
                    ) => {
                        assert_eq!(id, want, "{}: update for unexpected id", T::TABLE);
                        let _ = respond_to.send(r);
                    }
                    (
                        TableRequest::Delete { id, respond_to },
                        Some(Expectation::Delete(want, r)),
                    ) => {
                        assert_eq!(id, want, "{}: delete for unexpected id", T::TABLE);
                        let _ = respond_to.send(r);
                    }
                    _ => panic!("{}: unexpected request or expectation mismatch", T::TABLE),
                }
            }
        });

        Self {
            client: TableClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> TableClient<T> {
        self.client.clone()
    }

    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Insert)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |r| Expectation::Get(id, r))
    }

    pub fn expect_select(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::Select)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |r| Expectation::Delete(id, r))
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!(
                "{}: not all expectations were met. {} remaining",
                T::TABLE,
                remaining
            );
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap: Box::new(wrap),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: TableRow, R> {
    wrap: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: TableRow, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the raw receiver it sends to.
pub fn mock_table<T: TableRow>(
    buffer_size: usize,
) -> (TableClient<T>, mpsc::Receiver<TableRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (TableClient::new(sender), receiver)
}

/// Receives the next request, expecting an Insert.
pub async fn expect_insert<T: TableRow>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Insert, Response<T>)> {
    match receiver.recv().await {
        Some(TableRequest::Insert { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request, expecting a Select.
pub async fn expect_select<T: TableRow>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Filter, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(TableRequest::Select { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Receives the next request, expecting a Get.
pub async fn expect_get<T: TableRow>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(TableRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
