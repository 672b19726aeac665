//! The submission flow: validate, build the order, write it once, clear on success.

use super::{Clock, SubmissionError, SystemClock};
use crate::clients::OrderClient;
use crate::composition::{recompute, SelectionStore};
use crate::model::{CompanyId, ContactDetails, NewOrder, OrderId, Product};
use chrono::{FixedOffset, Timelike};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Persisting,
    Succeeded,
    Failed(String),
}

/// Submits orders for one storefront.
///
/// Holds the catalog the selections were made against; it is the lookup used to build line
/// items and to prune selections whose product disappeared.
pub struct OrderSubmitter {
    company: Option<CompanyId>,
    catalog: Vec<Product>,
    orders: OrderClient,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
    in_flight: AtomicBool,
    state: watch::Sender<SubmissionState>,
}

/// Clears the in-flight flag when an attempt ends, however it ends. An attempt dropped
/// before its outcome leaves the state at `Idle`.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
    state: &'a watch::Sender<SubmissionState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| match state {
            SubmissionState::Validating | SubmissionState::Persisting => {
                *state = SubmissionState::Idle;
                true
            }
            _ => false,
        });
        self.in_flight.store(false, Ordering::Release);
    }
}

impl OrderSubmitter {
    pub fn new(
        company: Option<CompanyId>,
        catalog: Vec<Product>,
        orders: OrderClient,
        offset: FixedOffset,
    ) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            company,
            catalog,
            orders,
            clock: Arc::new(SystemClock),
            offset,
            in_flight: AtomicBool::new(false),
            state,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn company(&self) -> Option<CompanyId> {
        self.company
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Watch state transitions, e.g. to disable the submit control while persisting.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// True while an attempt is between `Validating` and its outcome.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Returns to `Idle` after the outcome has been shown.
    pub fn reset(&self) {
        self.state.send_replace(SubmissionState::Idle);
    }

    /// Validates, writes the order with a single insert and clears `selections` on success.
    ///
    /// Selections for products missing from the catalog are dropped before the empty check.
    /// On any error the remaining selections are left as they were.
    #[instrument(skip_all, fields(company_id = ?self.company, selections = selections.len()))]
    pub async fn submit(
        &self,
        contact: Option<&ContactDetails>,
        selections: &mut SelectionStore,
        notes: Option<String>,
    ) -> Result<OrderId, SubmissionError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            warn!("Submission already in flight");
            return Err(SubmissionError::InFlight);
        }
        let _guard = InFlightGuard {
            in_flight: &self.in_flight,
            state: &self.state,
        };

        self.state.send_replace(SubmissionState::Validating);
        let order = match self.validate(contact, selections, notes) {
            Ok(order) => order,
            Err(e) => {
                debug!(error = %e, "Submission rejected");
                return Err(self.fail(e));
            }
        };

        self.state.send_replace(SubmissionState::Persisting);
        match self.orders.insert_order(&order).await {
            Ok(order_id) => {
                selections.clear();
                self.state.send_replace(SubmissionState::Succeeded);
                info!(%order_id, total = %order.total, "Order submitted");
                Ok(order_id)
            }
            Err(e) => {
                warn!(error = %e, "Order could not be saved");
                Err(self.fail(SubmissionError::PersistenceFailure(e.to_string())))
            }
        }
    }

    fn validate(
        &self,
        contact: Option<&ContactDetails>,
        selections: &mut SelectionStore,
        notes: Option<String>,
    ) -> Result<NewOrder, SubmissionError> {
        let company = self.company.ok_or(SubmissionError::MissingCompany)?;
        let contact = contact.ok_or(SubmissionError::MissingContact("contact"))?;
        if let Some(field) = contact.missing_field() {
            return Err(SubmissionError::MissingContact(field));
        }

        let dropped = selections.retain_catalog(&self.catalog);
        if dropped > 0 {
            warn!(dropped, "Dropped selections for products no longer in the catalog");
        }
        if selections.is_empty() {
            return Err(SubmissionError::EmptySelection);
        }
        if selections.checked_total().is_none() {
            return Err(SubmissionError::InvalidOrder(
                "total exceeds the supported amount".into(),
            ));
        }

        let recomputed = recompute(selections, &self.catalog);
        let now = self.clock.now().with_timezone(&self.offset);
        let time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());

        NewOrder::new(
            company,
            contact.clone(),
            recomputed.line_items,
            recomputed.total,
            notes,
            now.date_naive(),
            time,
        )
        .map_err(|e| {
            error!(error = %e, "Recomputed order failed its own consistency checks");
            SubmissionError::InvalidOrder(e.to_string())
        })
    }

    fn fail(&self, error: SubmissionError) -> SubmissionError {
        self.state
            .send_replace(SubmissionState::Failed(error.to_string()));
        error
    }
}
