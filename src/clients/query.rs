//! Ordered query parameters.

use serde_json::Value;

/// Query parameters appended to a request URL.
///
/// Entries keep their insertion order and repeated keys are kept as separate
/// entries, so `N` appended pairs always produce `N` query entries.
///
/// Values are JSON scalars and are rendered when the URL is built: strings
/// as-is, numbers, booleans and `null` as their JSON text, arrays as their
/// rendered elements joined with `,`, objects as JSON text.
///
/// # Example
///
/// ```rust
/// use aquarium_api::clients::QueryParams;
///
/// let query = QueryParams::new()
///     .with("limit", 50)
///     .with("type", "Shot")
///     .with("type", "Asset");
///
/// assert_eq!(query.len(), 3);
/// let pairs: Vec<(&str, String)> = query.rendered().collect();
/// assert_eq!(pairs[0], ("limit", "50".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(Vec<(String, Value)>);

impl QueryParams {
    /// Creates an empty set of query parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a parameter, keeping any existing entry with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    /// Appends a parameter and returns `self`, for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.append(key, value);
        self
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the raw entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over the entries with their values rendered as URL text.
    pub fn rendered(&self) -> impl Iterator<Item = (&str, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), render_value(value)))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Map<String, Value>> for QueryParams {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
