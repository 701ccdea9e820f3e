/// Generated hashtags, most recent first, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Build a history from stored entries, dropping repeats and anything
    /// past `max_items`.
    pub fn from_entries(entries: Vec<String>, max_items: usize) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !deduped.contains(&entry) {
                deduped.push(entry);
            }
        }
        let mut history = Self { entries: deduped };
        history.truncate(max_items);
        history
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, hashtag: &str) -> bool {
        self.entries.iter().any(|entry| entry == hashtag)
    }

    /// Prepend `hashtag` unless it is already present, then enforce the cap.
    /// Returns whether the entries changed.
    pub fn record(&mut self, hashtag: &str, max_items: usize) -> bool {
        let before = self.entries.len();
        let inserted = max_items > 0 && !self.contains(hashtag);
        if inserted {
            self.entries.insert(0, hashtag.to_string());
        }
        self.truncate(max_items);
        inserted || self.entries.len() != before
    }

    pub fn truncate(&mut self, max_items: usize) {
        self.entries.truncate(max_items);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut history = History::default();
        assert!(history.record("#One", 10));
        assert!(history.record("#Two", 10));
        assert_eq!(history.entries(), ["#Two", "#One"]);
    }

    #[test]
    fn test_record_existing_does_not_move_to_front() {
        let mut history = History::from_entries(vec!["#Two".into(), "#One".into()], 10);
        assert!(!history.record("#One", 10));
        assert_eq!(history.entries(), ["#Two", "#One"]);
    }

    #[test]
    fn test_record_drops_oldest_past_cap() {
        let mut history = History::default();
        history.record("#A", 2);
        history.record("#B", 2);
        history.record("#C", 2);
        assert_eq!(history.entries(), ["#C", "#B"]);
    }

    #[test]
    fn test_zero_cap_keeps_nothing() {
        let mut history = History::default();
        assert!(!history.record("#A", 0));
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_zero_cap_drops_existing_entries() {
        let mut history = History::from_entries(vec!["#A".into(), "#B".into()], 10);
        assert!(history.record("#C", 0));
        assert!(history.entries().is_empty());
        assert!(!history.record("#C", 0));
    }

    #[test]
    fn test_from_entries_normalizes() {
        let history = History::from_entries(
            vec!["#A".into(), "#B".into(), "#A".into(), "#C".into(), "#D".into()],
            3,
        );
        assert_eq!(history.entries(), ["#A", "#B", "#C"]);
    }
}
