//! Batch processing with account-connected partitioning
//!
//! This module provides the `BatchProcessor` struct, which runs a batch of
//! ledger events on concurrent tokio tasks while producing the same balances
//! as applying the batch in order.
//!
//! # Design
//!
//! Two events must keep their relative order when they touch a common
//! account. A transfer links its origin and destination, so the batch is
//! split into groups of transitively connected accounts (union-find over the
//! identifiers in the batch). Each group runs sequentially on its own task;
//! groups share no account, so their interleaving cannot change any outcome.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── Arc<AsyncLedger>  (shared ledger, per-account locking)
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::AsyncLedger;
use crate::types::{EventOutcome, LedgerError, LedgerEvent};

/// Result of processing a single event
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Position of the event within its batch
    pub position: usize,

    /// Input line the event was read from
    pub line: u64,

    /// The event that was processed
    pub event: LedgerEvent,

    /// The records written, or the reason the event was rejected
    pub result: Result<EventOutcome, LedgerError>,
}

/// Events of one connected group as `(position, line, event)`
type Group = Vec<(usize, u64, LedgerEvent)>;

/// Disjoint-set forest over batch-local account indices
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new() -> Self {
        Self { parent: Vec::new() }
    }

    fn add(&mut self) -> usize {
        let index = self.parent.len();
        self.parent.push(index);
        index
    }

    fn find(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    fn union(&mut self, a: usize, b: usize) {
        let (a, b) = (self.find(a), self.find(b));
        if a != b {
            self.parent[a.max(b)] = a.min(b);
        }
    }
}

/// Batch processor with account-connected partitioning
///
/// Cloning is cheap; every clone drives the same ledger.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Thread-safe ledger shared by every task
    ledger: Arc<AsyncLedger>,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    ///
    /// # Arguments
    ///
    /// * `ledger` - Arc-wrapped AsyncLedger the events are applied to
    pub fn new(ledger: Arc<AsyncLedger>) -> Self {
        Self { ledger }
    }

    /// Partition a batch into groups of events with connected accounts
    ///
    /// `batch` holds `(line, event)` pairs in input order.
    ///
    /// # Returns
    ///
    /// Groups ordered by their first event. Within a group, events keep their
    /// batch order and carry their batch position.
    ///
    /// # Guarantees
    ///
    /// - Each event appears in exactly one group
    /// - Two events sharing an account are in the same group
    /// - Events of a group keep their batch order
    pub fn partition_by_accounts(&self, batch: Vec<(u64, LedgerEvent)>) -> Vec<Group> {
        let mut sets = DisjointSet::new();
        let mut indices: HashMap<String, usize> = HashMap::new();
        let mut anchors = Vec::with_capacity(batch.len());

        for (_, event) in &batch {
            let members: Vec<usize> = event
                .account_ids()
                .into_iter()
                .map(|id| *indices.entry(id.to_string()).or_insert_with(|| sets.add()))
                .collect();
            let anchor = match members.split_first() {
                Some((&anchor, rest)) => {
                    for &member in rest {
                        sets.union(anchor, member);
                    }
                    anchor
                }
                None => sets.add(),
            };
            anchors.push(anchor);
        }

        let mut groups: BTreeMap<usize, Group> = BTreeMap::new();
        for (position, ((line, event), anchor)) in batch.into_iter().zip(anchors).enumerate() {
            let root = sets.find(anchor);
            groups.entry(root).or_default().push((position, line, event));
        }

        let mut groups: Vec<Group> = groups.into_values().collect();
        groups.sort_by_key(|group| group.first().map(|(position, _, _)| *position));
        groups
    }

    /// Apply one group's events sequentially
    ///
    /// Rejected events are recorded in their result and do not stop the group.
    pub fn process_group(&self, group: Group) -> Vec<ProcessingResult> {
        group
            .into_iter()
            .map(|(position, line, event)| {
                let result = self.ledger.apply(&event);
                ProcessingResult {
                    position,
                    line,
                    event,
                    result,
                }
            })
            .collect()
    }

    /// Process a batch with account-connected partitioning
    ///
    /// This method processes a batch of events by:
    /// 1. Partitioning the batch into connected groups
    /// 2. Spawning a tokio task per group
    /// 3. Waiting for all tasks to complete
    /// 4. Returning the results in batch order
    pub async fn process_batch(&self, batch: Vec<(u64, LedgerEvent)>) -> Vec<ProcessingResult> {
        let groups = self.partition_by_accounts(batch);

        let mut tasks = Vec::with_capacity(groups.len());
        for group in groups {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move { processor.process_group(group) }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(group_results) => results.extend(group_results),
                Err(e) => tracing::error!(error = %e, "batch task failed"),
            }
        }

        results.sort_by_key(|r| r.position);
        results
    }
}
