use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single path-to-URL mapping as it appears in a YAML or JSON source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub path: String,
    pub url: String,
}

impl Record {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Lookup table from request path to redirect target
///
/// Built once from an ordered sequence of records. When several records share
/// a path, the one appearing last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMap {
    entries: HashMap<String, String>,
}

impl PathMap {
    pub fn build(records: impl IntoIterator<Item = Record>) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            entries.insert(record.path, record.url);
        }
        Self { entries }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Record> for PathMap {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<P, U> FromIterator<(P, U)> for PathMap
where
    P: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        Self::build(iter.into_iter().map(|(path, url)| Record::new(path, url)))
    }
}
