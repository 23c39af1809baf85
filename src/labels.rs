use std::collections::HashMap;

/// Class names recognized when no label list is given, in id order.
pub const DEFAULT_CLASSES: &[&str] = &["holothurian", "echinus", "scallop", "starfish"];

/// Immutable lookup from class name to YOLO class id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    ids: HashMap<String, usize>,
}

impl ClassMap {
    /// Build a map where each label's id is its position in `labels`.
    /// A repeated label keeps the id of its first occurrence.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut ids = HashMap::with_capacity(labels.len());
        let mut next_id = 0;
        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() || ids.contains_key(label) {
                continue;
            }
            ids.insert(label.to_string(), next_id);
            next_id += 1;
        }
        Self { ids }
    }

    /// Class id for `name`, or `None` when the class is unknown
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Class names sorted by id
    pub fn names(&self) -> Vec<&str> {
        let mut sorted_labels: Vec<_> = self.ids.iter().collect();
        sorted_labels.sort_by_key(|&(_, id)| *id);
        sorted_labels
            .into_iter()
            .map(|(label, _)| label.as_str())
            .collect()
    }
}

impl Default for ClassMap {
    fn default() -> Self {
        Self::from_labels(DEFAULT_CLASSES)
    }
}
