use crate::models::history::{HistoryCounts, HistoryRecord, Status, StatusFilter};

/// Read-only list of a patient's past appointments.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn filter_by_status<F: Into<StatusFilter>>(&self, filter: F) -> Vec<&HistoryRecord> {
        let filter = filter.into();
        self.records
            .iter()
            .filter(|record| filter.matches(record.status))
            .collect()
    }

    pub fn count_by_status(&self, status: Status) -> usize {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .count()
    }

    pub fn counts(&self) -> HistoryCounts {
        let mut counts = HistoryCounts::default();
        for record in &self.records {
            counts.bump(record.status);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn store() -> HistoryStore {
        HistoryStore::new(seed::sample_history())
    }

    #[test]
    fn all_filter_equals_all() {
        let store = store();
        let filtered: Vec<HistoryRecord> = store
            .filter_by_status(StatusFilter::All)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(filtered.as_slice(), store.all());
    }

    #[test]
    fn one_completed_record() {
        let store = store();
        assert_eq!(store.count_by_status(Status::Completed), 1);

        let completed = store.filter_by_status(Status::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "h1");
    }

    #[test]
    fn filter_and_count_agree() {
        let store = store();
        let counts = store.counts();
        for status in Status::ALL.iter().copied() {
            let filtered = store.filter_by_status(status);
            assert!(filtered.iter().all(|record| record.status == status));
            assert_eq!(store.count_by_status(status), filtered.len());
            assert_eq!(counts.get(status), filtered.len());
        }
        assert_eq!(counts.total(), store.all().len());
    }

    #[test]
    fn filter_preserves_order() {
        let mut records = seed::sample_history();
        let mut extra = records[0].clone();
        extra.id = "h5".to_string();
        records.push(extra);
        let store = HistoryStore::new(records);

        let ids: Vec<_> = store
            .filter_by_status(Status::Completed)
            .into_iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["h1", "h5"]);
    }

    #[test]
    fn empty_store() {
        let store = HistoryStore::default();
        assert!(store.filter_by_status(StatusFilter::All).is_empty());
        assert_eq!(store.counts(), HistoryCounts::default());
    }
}
