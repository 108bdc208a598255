//! Frontend Models

use serde::{Deserialize, Serialize};

/// A reorderable list entry. The id is only used to key rendering and
/// track the drag; the server receives labels alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: u32,
    pub label: String,
}

impl ListEntry {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Snapshot of labels in current order, taken once at drag end
pub fn labels(entries: &[ListEntry]) -> Vec<String> {
    entries.iter().map(|e| e.label.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_entry_order() {
        let entries = vec![
            ListEntry::new(3, "C"),
            ListEntry::new(1, "A"),
            ListEntry::new(2, "B"),
        ];
        assert_eq!(labels(&entries), vec!["C", "A", "B"]);
    }

    #[test]
    fn payload_is_a_json_array_of_labels() {
        let entries = vec![
            ListEntry::new(3, "C"),
            ListEntry::new(1, "A"),
            ListEntry::new(2, "B"),
        ];
        let body = serde_json::to_string(&labels(&entries)).unwrap();
        assert_eq!(body, r#"["C","A","B"]"#);
    }
}
