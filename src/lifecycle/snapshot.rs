//! Point-in-time capture of named field values

use crate::state::Field;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from field name to trimmed value.
///
/// Order follows the field list. A repeated name keeps its first position and
/// takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    entries: Vec<(String, String)>,
}

impl FormSnapshot {
    /// Build a snapshot from the current field set
    pub fn from_fields(fields: &[Field]) -> Self {
        fields
            .iter()
            .filter(|f| f.has_name())
            .map(|f| (f.name.clone(), f.trimmed().to_string()))
            .collect()
    }

    /// Insert or replace a value, keeping the original position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = FormSnapshot::default();
        for (k, v) in iter {
            snapshot.insert(k, v);
        }
        snapshot
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
