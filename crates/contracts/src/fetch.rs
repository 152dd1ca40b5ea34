//! Response envelope and normalization rules for upstream lookups.
//!
//! The I/O itself lives in the frontend; everything here is pure so the
//! fallback and not-found behavior can be tested without a network.

use serde::Deserialize;

/// Every upstream response wraps its payload in a `docs` list.
/// A missing field deserializes as an empty list.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct DocsResponse<T> {
    #[serde(default)]
    pub docs: Vec<T>,
}

/// Per-slot outcome of an all-settle collection fetch: either live
/// upstream data or the static substitute for that collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    Upstream(T),
    Fallback(T),
}

impl<T> Sourced<T> {
    pub fn value(&self) -> &T {
        match self {
            Sourced::Upstream(value) | Sourced::Fallback(value) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Sourced::Upstream(value) | Sourced::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }
}

/// Normalize a collection fetch result.
///
/// A failed call degrades to the fallback list, and so does an empty
/// success: the upstream occasionally answers `{"docs": []}` for
/// collections that do have data, so the two cases are treated alike.
pub fn resolve_collection<T: Clone>(
    fetched: Result<Vec<T>, String>,
    fallback: &[T],
) -> Sourced<Vec<T>> {
    match fetched {
        Ok(docs) if !docs.is_empty() => Sourced::Upstream(docs),
        Ok(_) | Err(_) => Sourced::Fallback(fallback.to_vec()),
    }
}

/// Normalize a single-item fetch result: the first element of `docs`,
/// or `None` when the call failed or matched nothing.
pub fn resolve_single<T>(fetched: Result<Vec<T>, String>) -> Option<T> {
    fetched.ok().and_then(|docs| docs.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Book;
    use crate::fallback::FALLBACK_BOOKS;

    fn book(id: &str) -> Book {
        Book {
            id: id.to_string(),
            name: format!("Book {id}"),
        }
    }

    #[test]
    fn docs_field_defaults_to_empty() {
        let parsed: DocsResponse<Book> = serde_json::from_str("{}").unwrap();
        assert!(parsed.docs.is_empty());

        let parsed: DocsResponse<Book> =
            serde_json::from_str(r#"{"docs": [{"_id": "b1", "name": "Book b1"}]}"#).unwrap();
        assert_eq!(parsed.docs, vec![book("b1")]);
    }

    #[test]
    fn failed_collection_call_degrades_to_fallback() {
        let resolved = resolve_collection(Err("HTTP error: 500".to_string()), &FALLBACK_BOOKS);
        assert!(resolved.is_fallback());

        let ids: Vec<&str> = resolved.value().iter().map(|b| b.id.as_str()).collect();
        let fallback_ids: Vec<&str> = FALLBACK_BOOKS.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, fallback_ids);
    }

    #[test]
    fn empty_success_is_treated_like_failure() {
        let resolved = resolve_collection(Ok(Vec::new()), &FALLBACK_BOOKS);
        assert!(resolved.is_fallback());
        assert_eq!(resolved.value().len(), FALLBACK_BOOKS.len());
    }

    #[test]
    fn non_empty_success_passes_through_in_order() {
        let resolved = resolve_collection(Ok(vec![book("x"), book("y")]), &FALLBACK_BOOKS);
        assert_eq!(resolved, Sourced::Upstream(vec![book("x"), book("y")]));
    }

    #[test]
    fn single_lookup_takes_the_first_doc() {
        assert_eq!(
            resolve_single(Ok(vec![book("x"), book("y")])),
            Some(book("x"))
        );
    }

    #[test]
    fn single_lookup_yields_none_on_failure_or_empty() {
        assert_eq!(resolve_single::<Book>(Err("HTTP error: 404".to_string())), None);
        assert_eq!(resolve_single::<Book>(Ok(Vec::new())), None);
    }
}
