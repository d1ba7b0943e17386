//! Query string parameters

use url::form_urlencoded;

/// Ordered query parameters, encoded like the browser's `URLSearchParams`.
/// Values are passed through to the backend verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }

    /// `path?query`, or just `path` when there are no parameters
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_like_url_search_params() {
        let params = QueryParams::new()
            .with("page", 2)
            .with("category", "bags & more")
            .with("search", "gare du nord");

        assert_eq!(
            params.encode(),
            "page=2&category=bags+%26+more&search=gare+du+nord"
        );
    }

    #[test]
    fn test_append_to() {
        assert_eq!(QueryParams::new().append_to("/locations"), "/locations");

        let params: QueryParams = [("status", "pending")].into_iter().collect();
        assert_eq!(params.append_to("/bookings"), "/bookings?status=pending");
    }
}
