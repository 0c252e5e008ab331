//! OrderManager - order queue and lifecycle processing
//!
//! This module handles:
//! - Order identity (per-instance monotonic id counter)
//! - The priority-ranked pending queue (cashier side)
//! - The insertion-ordered preparation collection (kitchen side)
//! - Change broadcasting for live preparation displays
//!
//! # Order Flow
//!
//! ```text
//! place(priority, items)
//!     ├─ validate quantities (InvalidOrder on any <= 0)
//!     ├─ merge duplicate product ids
//!     ├─ mint id + timestamp, enqueue Pending
//!     └─ return materialized Order
//! retrieve_next()          -> pop highest-ranked pending order (cashier holds it)
//! promote_to_preparation() -> append to preparing, broadcast Promoted
//! complete_preparation(id) -> remove from preparing, broadcast Completed
//! ```
//!
//! Ranking is `(priority desc, created_at asc, allocation order asc)`.
//! A steady stream of priority orders can defer a normal order indefinitely;
//! that matches the deployed queueing policy and is left as-is.

mod error;
pub use error::*;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared::order::{Order, OrderItem, OrderItemInput, OrderState};
use shared::util::now_millis;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use tokio::sync::broadcast;

/// Preparation event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// First order number handed out by a fresh manager
const FIRST_ORDER_NUMBER: u64 = 100;

/// Manager construction parameters
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Value of the first id the manager mints
    pub first_order_number: u64,
    /// Capacity of the preparation event channel; values below 1 are
    /// raised to 1, since a broadcast channel cannot have zero capacity
    pub event_channel_capacity: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            first_order_number: FIRST_ORDER_NUMBER,
            event_channel_capacity: EVENT_CHANNEL_CAPACITY,
        }
    }
}

/// Change notification for the preparation collection
///
/// Emitted on every mutation of `preparing`, so display clients track the
/// collection without polling. Carries the diff; `preparing_orders` gives a
/// full snapshot when a client needs to resync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreparationEvent {
    /// An order entered preparation
    Promoted { order: Order },
    /// An order finished preparation and left the core
    Completed { order_id: String },
}

/// Pending queue entry
///
/// `seq` is the id counter value at placement. Ids are allocated under the
/// queue lock, so `seq` order equals insertion order and serves as the
/// stable tie-break for same-instant placements.
#[derive(Debug, Clone)]
struct PendingEntry {
    order: Order,
    seq: u64,
}

impl PendingEntry {
    fn rank_key(&self) -> (bool, i64, u64) {
        (self.order.is_priority, self.order.created_at, self.seq)
    }
}

impl Ord for PendingEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: priority wins, then earlier created_at, then earlier insertion
        self.order
            .is_priority
            .cmp(&other.order.is_priority)
            .then_with(|| other.order.created_at.cmp(&self.order.created_at))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PendingEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PendingEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank_key() == other.rank_key()
    }
}

impl Eq for PendingEntry {}

#[derive(Debug, Default)]
struct QueueState {
    /// Orders placed but not yet retrieved by a cashier
    pending: BinaryHeap<PendingEntry>,
    /// Orders confirmed by the cashier, awaiting kitchen completion
    preparing: Vec<Order>,
}

/// Order queue and lifecycle manager
///
/// The single shared-mutable-state component of the system. One mutex
/// serializes both collections, so every operation is atomic with respect
/// to the others and no two cashiers can receive the same pending order.
///
/// The manager is `Clone`; clones share state, one per station. The `epoch`
/// is a unique id minted at construction so display clients can detect a
/// restarted instance (all in-memory state is lost on restart).
#[derive(Clone)]
pub struct OrderManager {
    inner: Arc<Mutex<QueueState>>,
    /// Monotonic order id counter, owned by this manager instance
    next_id: Arc<AtomicU64>,
    event_tx: broadcast::Sender<PreparationEvent>,
    epoch: String,
}

impl std::fmt::Debug for OrderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderManager")
            .field("pending", &self.pending_len())
            .field("preparing", &self.preparing_len())
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderManager {
    /// Create a manager with default configuration
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Create a manager with explicit configuration
    pub fn with_config(config: ManagerConfig) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_channel_capacity.max(1));
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, "OrderManager started with new epoch");
        Self {
            inner: Arc::new(Mutex::new(QueueState::default())),
            next_id: Arc::new(AtomicU64::new(config.first_order_number)),
            event_tx,
            epoch,
        }
    }

    /// Get the manager epoch (unique instance id)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Place a new order into the pending queue
    ///
    /// Mints the order's id and timestamp and returns the materialized order;
    /// callers must not rely on the line items they originally built, since
    /// duplicate product ids are merged here. Any non-positive quantity, or a
    /// merged quantity exceeding the line-item range, fails the whole
    /// placement with [`ManagerError::InvalidOrder`] and leaves the queues
    /// untouched. An order with no items is accepted.
    pub fn place(&self, is_priority: bool, items: &[OrderItemInput]) -> ManagerResult<Order> {
        let merged = Self::merge_lines(items)?;

        let mut state = self.inner.lock();
        // Allocated under the lock: id order doubles as heap insertion order
        let number = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let mut order = Order::new(number.to_string(), is_priority, now_millis());
        order.items = merged;
        state.pending.push(PendingEntry {
            order: order.clone(),
            seq: number,
        });
        tracing::info!(
            order_id = %order.id,
            priority = order.is_priority,
            lines = order.items.len(),
            "Order placed"
        );
        Ok(order)
    }

    /// Remove and return the highest-ranked pending order
    ///
    /// `None` on an empty queue is a normal condition. The returned order is
    /// held by the caller (a cashier session) in neither collection until it
    /// is explicitly promoted.
    pub fn retrieve_next(&self) -> Option<Order> {
        let mut state = self.inner.lock();
        let order = state.pending.pop().map(|entry| entry.order);
        if let Some(ref order) = order {
            tracing::debug!(order_id = %order.id, "Order retrieved by cashier");
        }
        order
    }

    /// Move a retrieved order into the preparation collection
    ///
    /// Appended at the end: preparation display order is promotion order, not
    /// placement order. Provenance is not verified; the manager trusts that
    /// the caller obtained the order via [`retrieve_next`](Self::retrieve_next).
    pub fn promote_to_preparation(&self, mut order: Order) {
        order.state = OrderState::InPreparation;
        let mut state = self.inner.lock();
        state.preparing.push(order.clone());
        tracing::info!(order_id = %order.id, "Order moved to preparation");
        // Sent under the lock so subscribers observe mutations in order
        self.notify(PreparationEvent::Promoted { order });
    }

    /// Remove a finished order from the preparation collection
    ///
    /// The order may sit anywhere in the sequence; kitchen staff complete out
    /// of arrival order. Returns whether a matching order existed, so a
    /// duplicate completion request is a plain `false`, not an error.
    pub fn complete_preparation(&self, order_id: &str) -> bool {
        let mut state = self.inner.lock();
        let Some(pos) = state.preparing.iter().position(|o| o.id == order_id) else {
            tracing::debug!(order_id, "Completion for unknown order ignored");
            return false;
        };
        state.preparing.remove(pos);
        tracing::info!(order_id, "Order completed and removed from preparation");
        self.notify(PreparationEvent::Completed {
            order_id: order_id.to_string(),
        });
        true
    }

    /// Ranked snapshot of the pending queue, for display
    ///
    /// Highest-ranked order first. The snapshot is detached: nothing the
    /// caller does with it reaches manager state.
    pub fn peek_pending(&self) -> Vec<Order> {
        let state = self.inner.lock();
        state
            .pending
            .clone()
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|entry| entry.order)
            .collect()
    }

    /// Snapshot of the preparation collection, in promotion order
    pub fn preparing_orders(&self) -> Vec<Order> {
        self.inner.lock().preparing.clone()
    }

    /// Subscribe to preparation collection change events
    ///
    /// The live-view mechanism: every `promote_to_preparation` /
    /// `complete_preparation` pushes a [`PreparationEvent`] to all
    /// subscribers, no polling required.
    pub fn subscribe(&self) -> broadcast::Receiver<PreparationEvent> {
        self.event_tx.subscribe()
    }

    /// Whether no orders are waiting for the cashier
    pub fn pending_is_empty(&self) -> bool {
        self.inner.lock().pending.is_empty()
    }

    /// Number of orders waiting for the cashier
    pub fn pending_len(&self) -> usize {
        self.inner.lock().pending.len()
    }

    /// Number of orders in preparation
    pub fn preparing_len(&self) -> usize {
        self.inner.lock().preparing.len()
    }

    /// Validate and merge caller-supplied lines into final order items
    ///
    /// Checked throughout: a non-positive quantity and a merged quantity
    /// overflowing `u32` are both rejected before any queue state is touched.
    fn merge_lines(items: &[OrderItemInput]) -> ManagerResult<Vec<OrderItem>> {
        let mut merged: Vec<OrderItem> = Vec::new();
        for item in items {
            if item.quantity <= 0 {
                return Err(ManagerError::InvalidOrder {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                });
            }
            let quantity = item.quantity as u32;
            match merged.iter_mut().find(|l| l.product_id == item.product_id) {
                Some(line) => {
                    line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
                        ManagerError::InvalidOrder {
                            product_id: item.product_id.clone(),
                            quantity: item.quantity,
                        }
                    })?;
                }
                None => merged.push(OrderItem::new(item.product_id.clone(), quantity)),
            }
        }
        Ok(merged)
    }

    fn notify(&self, event: PreparationEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::debug!("Preparation event dropped: no active subscribers");
        }
    }
}

#[cfg(test)]
mod tests;
