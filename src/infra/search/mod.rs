//! In-process search mirror
//!
//! The primary store is authoritative; the mirror receives change events
//! over a channel and applies them on a dedicated task, so `_search`
//! visibility lags writes by a bounded but nonzero amount. Replays are
//! harmless: saves overwrite by id, deletes of absent ids are no-ops.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::contract::*;
use crate::domain::{ChangeNotifier, EntityChange};

/// Entities that can be indexed by the mirror
pub trait SearchDocument {
    fn doc_id(&self) -> i64;
    /// Case-insensitive substring match over the textual fields
    fn matches(&self, needle: &str) -> bool;
}

fn field_matches(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

fn opt_matches(field: Option<&String>, needle: &str) -> bool {
    field.is_some_and(|f| field_matches(f, needle))
}

impl SearchDocument for Dealer {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.dealer_name, needle) || opt_matches(self.dealer_type.as_ref(), needle)
    }
}

impl SearchDocument for MoneyMarketDeal {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.deal_number, needle)
            || opt_matches(self.currency.as_ref(), needle)
            || opt_matches(self.counterparty.as_ref(), needle)
            || self
                .placeholders
                .iter()
                .any(|p| field_matches(&p.token, needle))
    }
}

impl SearchDocument for MoneyMarketList {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(self.status.as_str(), needle)
            || opt_matches(self.description.as_ref(), needle)
    }
}

impl SearchDocument for MoneyMarketUploadNotification {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        opt_matches(self.file_name.as_ref(), needle)
            || opt_matches(self.error_message.as_ref(), needle)
    }
}

impl SearchDocument for FiscalYear {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.year.to_string(), needle)
    }
}

impl SearchDocument for FiscalQuarter {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.quarter_number.to_string(), needle)
    }
}

impl SearchDocument for FiscalMonth {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.month_number.to_string(), needle)
    }
}

impl SearchDocument for ReportBatch {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(self.status.as_str(), needle)
            || opt_matches(self.checksum.as_ref(), needle)
            || self
                .uploaded_by
                .is_some_and(|u| field_matches(&u.to_string(), needle))
    }
}

impl SearchDocument for Placeholder {
    fn doc_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.token, needle)
    }
}

/// One mirror index, keyed by entity id
pub struct SearchIndex<T> {
    docs: RwLock<BTreeMap<i64, T>>,
}

impl<T> Default for SearchIndex<T> {
    fn default() -> Self {
        Self {
            docs: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T: SearchDocument + Clone> SearchIndex<T> {
    pub fn upsert(&self, doc: T) {
        self.docs.write().insert(doc.doc_id(), doc);
    }

    pub fn remove(&self, id: i64) {
        self.docs.write().remove(&id);
    }

    /// `*` matches everything; anything else is a case-insensitive
    /// substring query. Results come back in id order.
    pub fn search(&self, query: &str) -> Vec<T> {
        let docs = self.docs.read();
        if query == "*" {
            return docs.values().cloned().collect();
        }
        let needle = query.to_lowercase();
        docs.values()
            .filter(|d| d.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }
}

/// All mirror indexes, one per entity
#[derive(Default)]
pub struct SearchStore {
    pub dealers: SearchIndex<Dealer>,
    pub deals: SearchIndex<MoneyMarketDeal>,
    pub lists: SearchIndex<MoneyMarketList>,
    pub upload_notifications: SearchIndex<MoneyMarketUploadNotification>,
    pub fiscal_years: SearchIndex<FiscalYear>,
    pub fiscal_quarters: SearchIndex<FiscalQuarter>,
    pub fiscal_months: SearchIndex<FiscalMonth>,
    pub report_batches: SearchIndex<ReportBatch>,
    pub placeholders: SearchIndex<Placeholder>,
}

impl SearchStore {
    fn apply(&self, change: EntityChange) {
        match change {
            EntityChange::DealerSaved(d) => self.dealers.upsert(d),
            EntityChange::DealerDeleted(id) => self.dealers.remove(id),
            EntityChange::DealSaved(d) => self.deals.upsert(d),
            EntityChange::DealDeleted(id) => self.deals.remove(id),
            EntityChange::ListSaved(l) => self.lists.upsert(l),
            EntityChange::ListDeleted(id) => self.lists.remove(id),
            EntityChange::UploadNotificationSaved(n) => self.upload_notifications.upsert(n),
            EntityChange::UploadNotificationDeleted(id) => self.upload_notifications.remove(id),
            EntityChange::FiscalYearSaved(y) => self.fiscal_years.upsert(y),
            EntityChange::FiscalYearDeleted(id) => self.fiscal_years.remove(id),
            EntityChange::FiscalQuarterSaved(q) => self.fiscal_quarters.upsert(q),
            EntityChange::FiscalQuarterDeleted(id) => self.fiscal_quarters.remove(id),
            EntityChange::FiscalMonthSaved(m) => self.fiscal_months.upsert(m),
            EntityChange::FiscalMonthDeleted(id) => self.fiscal_months.remove(id),
            EntityChange::ReportBatchSaved(b) => self.report_batches.upsert(b),
            EntityChange::ReportBatchDeleted(id) => self.report_batches.remove(id),
            EntityChange::PlaceholderSaved(p) => self.placeholders.upsert(p),
            EntityChange::PlaceholderDeleted(id) => self.placeholders.remove(id),
        }
    }
}

/// `ChangeNotifier` that feeds the mirror task
pub struct MirrorNotifier {
    tx: mpsc::UnboundedSender<EntityChange>,
}

impl ChangeNotifier for MirrorNotifier {
    fn notify(&self, change: EntityChange) {
        // A closed channel means the mirror task is gone; writes to the
        // primary store must still succeed.
        if self.tx.send(change).is_err() {
            debug!("search mirror channel closed, dropping change event");
        }
    }
}

/// Start the mirror task; returns the notifier for the domain service
pub fn spawn_mirror(store: Arc<SearchStore>) -> (MirrorNotifier, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(async move {
        while let Some(change) = rx.recv().await {
            store.apply(change);
        }
        debug!("search mirror task stopped");
    });
    (MirrorNotifier { tx }, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealer(id: i64, name: &str) -> Dealer {
        Dealer {
            id: Some(id),
            dealer_name: name.to_string(),
            dealer_type: None,
        }
    }

    #[test]
    fn star_matches_everything() {
        let index = SearchIndex::default();
        index.upsert(dealer(1, "Alpha Bank"));
        index.upsert(dealer(2, "Beta Fund"));
        assert_eq!(index.search("*").len(), 2);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let index = SearchIndex::default();
        index.upsert(dealer(1, "Alpha Bank"));
        index.upsert(dealer(2, "Beta Fund"));
        let hits = index.search("alpha");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, Some(1));
        assert!(index.search("GAMMA").is_empty());
    }

    #[test]
    fn saves_are_idempotent_by_id() {
        let index = SearchIndex::default();
        index.upsert(dealer(1, "Alpha Bank"));
        index.upsert(dealer(1, "Alpha Bank Renamed"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.search("renamed").len(), 1);
    }

    #[test]
    fn delete_of_absent_id_is_a_noop() {
        let index: SearchIndex<Dealer> = SearchIndex::default();
        index.remove(42);
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn mirror_task_applies_changes() {
        let store = Arc::new(SearchStore::default());
        let (notifier, handle) = spawn_mirror(store.clone());

        notifier.notify(EntityChange::DealerSaved(dealer(7, "Alpha Bank")));
        notifier.notify(EntityChange::DealerDeleted(7));
        notifier.notify(EntityChange::DealerSaved(dealer(8, "Beta Fund")));

        drop(notifier);
        handle.await.unwrap();

        assert_eq!(store.dealers.len(), 1);
        assert_eq!(store.dealers.search("beta").len(), 1);
    }
}
