use std::fmt;

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

/// Feature qualifiers: each key maps to the list of values given for it.
///
/// A qualifier given as a bare flag (e.g. `/pseudo`) is stored with an
/// empty value list; it still counts as present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Qualifiers {
    inner: HashMap<String, Vec<String>>,
}

impl Qualifiers {
    pub fn new() -> Self { Self::default() }

    /// Appends `value` to the values of `key`. `None` records a flag.
    pub fn insert<K: Into<String>, V: Into<String>>(
        &mut self,
        key: K,
        value: Option<V>,
    ) {
        let values = self.inner.entry(key.into()).or_default();
        if let Some(value) = value {
            values.push(value.into());
        }
    }

    pub fn get(
        &self,
        key: &str,
    ) -> Option<&[String]> {
        self.inner.get(key).map(Vec::as_slice)
    }

    /// First value of `key`, if the key is present with a value.
    pub fn first(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize { self.inner.len() }

    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    /// Iterates over `(key, values)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner
            .iter()
            .sorted_by_key(|(k, _)| *k)
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Qualifiers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Option<V>)>>(iter: T) -> Self {
        let mut new_self = Self::new();
        iter.into_iter()
            .for_each(|(key, value)| new_self.insert(key, value));
        new_self
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let serialized = self
            .iter()
            .map(|(key, values)| {
                if values.is_empty() {
                    key.to_string()
                }
                else {
                    format!("{}={}", key, values.join(","))
                }
            })
            .join(";");
        write!(f, "{}", serialized)
    }
}
