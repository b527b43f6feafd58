use std::collections::{HashMap, HashSet, VecDeque};

use parking_lot::RwLock;

use crate::models::{FieldLookup, Observation};

/// Default retention per store. Oldest observations fall off the tail.
pub const DEFAULT_RETENTION_LIMIT: usize = 5000;

/// Bounded newest-first history with a last-observation-by-key index.
///
/// The `last_by` index is separate storage, not a view: it keeps the most
/// recent observation for a key even after retention has trimmed that
/// observation out of the sequence.
///
/// One readers-writer lock per store instance; writers are exclusive,
/// readers shared. Nothing does I/O while holding the lock.
pub struct History<T> {
    limit: usize,
    inner: RwLock<Inner<T>>,
}

struct Inner<T> {
    all: VecDeque<Observation<T>>,
    last_by: HashMap<String, Observation<T>>,
}

impl<T: Clone> History<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            inner: RwLock::new(Inner {
                all: VecDeque::new(),
                last_by: HashMap::new(),
            }),
        }
    }

    /// Prepend an observation, trim the tail to the retention limit, then
    /// register it under every supplied key.
    pub fn add(&self, observation: Observation<T>, keys: &[&str]) {
        let mut inner = self.inner.write();

        inner.all.push_front(observation.clone());
        if self.limit > 0 {
            while inner.all.len() > self.limit {
                inner.all.pop_back();
            }
        }

        for key in keys {
            inner.last_by.insert((*key).to_string(), observation.clone());
        }
    }

    /// Newest-first snapshot of the retained sequence.
    pub fn all(&self) -> Vec<Observation<T>> {
        self.inner.read().all.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().all.is_empty()
    }

    /// Most recent observation registered under `key`, independent of
    /// sequence trimming.
    pub fn last_by(&self, key: &str) -> Option<Observation<T>> {
        self.inner.read().last_by.get(key).cloned()
    }

    /// Most recent observation whose packet-header field stringifies to
    /// `value`.
    pub fn last_by_field(&self, field: &str, value: &str) -> Option<Observation<T>> {
        self.inner
            .read()
            .all
            .iter()
            .find(|obs| obs.meta.field(field).as_deref() == Some(value))
            .cloned()
    }

    /// The most recent observation per distinct value of a packet-header
    /// field, newest-first.
    pub fn latest_per_field(&self, field: &str) -> Vec<Observation<T>> {
        let inner = self.inner.read();
        let mut seen: HashSet<Option<String>> = HashSet::new();
        inner
            .all
            .iter()
            .filter(|obs| seen.insert(obs.meta.field(field)))
            .cloned()
            .collect()
    }

    /// All observations whose packet-header field stringifies to `value`,
    /// newest-first, unbounded count.
    pub fn filtered_by_field(&self, field: &str, value: &str) -> Vec<Observation<T>> {
        self.inner
            .read()
            .all
            .iter()
            .filter(|obs| obs.meta.field(field).as_deref() == Some(value))
            .cloned()
            .collect()
    }
}

impl<T: Clone + FieldLookup> History<T> {
    /// The most recent observation per distinct value of a record field,
    /// newest-first.
    pub fn latest_per_record_field(&self, field: &str) -> Vec<Observation<T>> {
        let inner = self.inner.read();
        let mut seen: HashSet<Option<String>> = HashSet::new();
        inner
            .all
            .iter()
            .filter(|obs| seen.insert(obs.record.field(field)))
            .cloned()
            .collect()
    }

    /// All observations whose record field stringifies to `value`,
    /// newest-first, unbounded count.
    pub fn filtered_by_record_field(&self, field: &str, value: &str) -> Vec<Observation<T>> {
        self.inner
            .read()
            .all
            .iter()
            .filter(|obs| obs.record.field(field).as_deref() == Some(value))
            .cloned()
            .collect()
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PacketMeta;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    struct Probe {
        label: String,
    }

    impl FieldLookup for Probe {
        fn field(&self, name: &str) -> Option<String> {
            match name {
                "label" => Some(self.label.clone()),
                _ => None,
            }
        }
    }

    fn obs(from: u32, label: &str) -> Observation<Probe> {
        Observation::new(
            Probe {
                label: label.to_string(),
            },
            PacketMeta {
                from,
                ..PacketMeta::default()
            },
        )
    }

    #[test]
    fn all_is_newest_first() {
        let history: History<Probe> = History::new(10);
        history.add(obs(100, "t1"), &["100"]);
        history.add(obs(100, "t2"), &["100"]);
        history.add(obs(100, "t3"), &["100"]);

        let all = history.all();
        let labels: Vec<&str> = all.iter().map(|o| o.record.label.as_str()).collect();
        assert_eq!(labels, ["t3", "t2", "t1"]);
    }

    #[test]
    fn retention_trims_oldest_first() {
        let history: History<Probe> = History::new(3);
        for i in 0..10 {
            history.add(obs(i, &format!("m{i}")), &[]);
        }

        let all = history.all();
        assert_eq!(all.len(), 3);
        let labels: Vec<&str> = all.iter().map(|o| o.record.label.as_str()).collect();
        assert_eq!(labels, ["m9", "m8", "m7"]);
    }

    #[test]
    fn last_by_survives_trimming() {
        let history: History<Probe> = History::new(2);
        history.add(obs(7, "keyed"), &["7"]);
        history.add(obs(8, "later-1"), &[]);
        history.add(obs(9, "later-2"), &[]);
        history.add(obs(10, "later-3"), &[]);

        // The keyed observation is long gone from the sequence.
        assert_eq!(history.len(), 2);
        let kept = history.last_by("7").unwrap();
        assert_eq!(kept.record.label, "keyed");
    }

    #[test]
    fn last_by_tracks_most_recent_insert_for_key() {
        let history: History<Probe> = History::new(10);
        history.add(obs(100, "t1"), &["100"]);
        history.add(obs(100, "t2"), &["100"]);
        history.add(obs(100, "t3"), &["100"]);

        assert_eq!(history.last_by("100").unwrap().record.label, "t3");
        assert!(history.last_by("200").is_none());
    }

    #[test]
    fn add_registers_multiple_keys() {
        let history: History<Probe> = History::new(10);
        history.add(obs(5, "hello"), &["5", "!0005", "HI"]);

        for key in ["5", "!0005", "HI"] {
            assert_eq!(history.last_by(key).unwrap().record.label, "hello");
        }
    }

    #[test]
    fn last_by_field_scans_newest_first() {
        let history: History<Probe> = History::new(10);
        history.add(obs(1, "old"), &[]);
        history.add(obs(2, "other"), &[]);
        history.add(obs(1, "new"), &[]);

        assert_eq!(history.last_by_field("from", "1").unwrap().record.label, "new");
        assert!(history.last_by_field("from", "99").is_none());
        assert!(history.last_by_field("no_such_field", "1").is_none());
    }

    #[test]
    fn latest_per_field_keeps_one_per_distinct_value() {
        let history: History<Probe> = History::new(10);
        history.add(obs(1, "a-old"), &[]);
        history.add(obs(2, "b-old"), &[]);
        history.add(obs(1, "a-new"), &[]);
        history.add(obs(2, "b-new"), &[]);

        let latest = history.latest_per_field("from");
        assert_eq!(latest.len(), 2);
        let labels: Vec<&str> = latest.iter().map(|o| o.record.label.as_str()).collect();
        assert_eq!(labels, ["b-new", "a-new"]);
    }

    #[test]
    fn latest_per_record_field_uses_the_record_table() {
        let history: History<Probe> = History::new(10);
        history.add(obs(1, "x"), &[]);
        history.add(obs(2, "x"), &[]);
        history.add(obs(3, "y"), &[]);

        let latest = history.latest_per_record_field("label");
        let labels: Vec<(&str, u32)> = latest
            .iter()
            .map(|o| (o.record.label.as_str(), o.meta.from))
            .collect();
        assert_eq!(labels, [("y", 3), ("x", 2)]);
    }

    #[test]
    fn filtered_returns_all_matches_newest_first() {
        let history: History<Probe> = History::new(10);
        for i in 0..6 {
            history.add(obs(i % 2, &format!("m{i}")), &[]);
        }

        let even = history.filtered_by_field("from", "0");
        let labels: Vec<&str> = even.iter().map(|o| o.record.label.as_str()).collect();
        assert_eq!(labels, ["m4", "m2", "m0"]);

        let by_record = history.filtered_by_record_field("label", "m3");
        assert_eq!(by_record.len(), 1);
    }

    #[test]
    fn concurrent_adds_and_reads_do_not_tear_or_deadlock() {
        let history: Arc<History<Probe>> = Arc::new(History::new(100));
        let mut handles = Vec::new();

        for writer in 0..4 {
            let history = Arc::clone(&history);
            handles.push(std::thread::spawn(move || {
                for i in 0..500 {
                    history.add(obs(writer, &format!("w{writer}-{i}")), &[&writer.to_string()]);
                }
            }));
        }

        for _ in 0..4 {
            let history = Arc::clone(&history);
            handles.push(std::thread::spawn(move || {
                for _ in 0..500 {
                    let snapshot = history.all();
                    assert!(snapshot.len() <= 100);
                    // A torn write would surface as a mangled label here.
                    for obs in &snapshot {
                        assert!(obs.record.label.starts_with('w'));
                    }
                    let _ = history.last_by("2");
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(history.len(), 100);
    }
}
