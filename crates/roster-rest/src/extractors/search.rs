//! Search query parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;

/// Query parameters for `GET /users/search`.
///
/// The query string is read as raw key/value pairs and the first `name`
/// wins, so repeated keys and unrelated parameters never fail extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: Option<String>,
}

impl SearchQuery {
    /// Builds the query from decoded key/value pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let name = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "name").then_some(value));
        Self { name }
    }

    /// The requested name, or an empty string when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        Ok(Self::from_pairs(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_absent_name_is_empty() {
        assert_eq!(SearchQuery::default().name(), "");
        assert_eq!(SearchQuery::from_pairs(pairs(&[("other", "x")])).name(), "");
    }

    #[test]
    fn test_present_name() {
        let query = SearchQuery::from_pairs(pairs(&[("page", "2"), ("name", "john")]));
        assert_eq!(query.name(), "john");
    }

    #[test]
    fn test_first_name_wins() {
        let query = SearchQuery::from_pairs(pairs(&[("name", "john"), ("name", "bob")]));
        assert_eq!(query.name(), "john");

        let query = SearchQuery::from_pairs(pairs(&[("name", ""), ("name", "bob")]));
        assert_eq!(query.name(), "");
    }
}
