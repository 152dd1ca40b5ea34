//! Single-item lookup and quote enrichment.

use contracts::entities::{Book, Character, EntityKind, EnrichedQuote, Movie, Quote};
use contracts::fetch::resolve_single;
use futures_util::join;
use serde::de::DeserializeOwned;

use crate::catalog::api::{get_docs, API_BASE};
use crate::detail::DetailItem;

fn detail_path(kind: EntityKind, id: &str) -> String {
    format!("/{}/{}", kind.as_str(), urlencoding::encode(id))
}

/// Full upstream URL for a lookup, shown on the not-found view.
pub fn detail_url(kind: EntityKind, id: &str) -> String {
    format!("{API_BASE}{}", detail_path(kind, id))
}

/// Look up one record by id. `None` covers upstream 404s, transport
/// failures and empty `docs` alike; nothing propagates past here.
async fn fetch_one<T: DeserializeOwned>(kind: EntityKind, id: &str) -> Option<T> {
    let path = detail_path(kind, id);
    let fetched = get_docs(&path).await;
    if let Err(reason) = &fetched {
        log::error!("GET {path} failed: {reason}");
    }
    resolve_single(fetched)
}

/// Resolve the display names of the quote's character and movie
/// references. The two lookups are independent and best-effort; a
/// failure in one leaves that name absent and does not affect the other.
pub async fn enrich_quote(quote: Quote) -> EnrichedQuote {
    let character = async {
        match &quote.character {
            Some(id) => fetch_one::<Character>(EntityKind::Character, id).await,
            None => None,
        }
    };
    let movie = async {
        match &quote.movie {
            Some(id) => fetch_one::<Movie>(EntityKind::Movie, id).await,
            None => None,
        }
    };

    let (character, movie) = join!(character, movie);
    EnrichedQuote::from_lookups(quote, character, movie)
}

/// Resolve a detail item by kind and id. `None` means not found.
pub async fn fetch_item(kind: EntityKind, id: &str) -> Option<DetailItem> {
    match kind {
        EntityKind::Movie => fetch_one::<Movie>(kind, id).await.map(DetailItem::Movie),
        EntityKind::Character => fetch_one::<Character>(kind, id)
            .await
            .map(DetailItem::Character),
        EntityKind::Book => fetch_one::<Book>(kind, id).await.map(DetailItem::Book),
        EntityKind::Quote => match fetch_one::<Quote>(kind, id).await {
            Some(quote) => Some(DetailItem::Quote(enrich_quote(quote).await)),
            None => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_url_names_kind_and_id() {
        assert_eq!(
            detail_url(EntityKind::Movie, "5cd95395de30eff6ebccde5c"),
            "https://the-one-api.dev/v2/movie/5cd95395de30eff6ebccde5c"
        );
    }

    #[test]
    fn detail_path_escapes_the_identifier() {
        assert_eq!(
            detail_path(EntityKind::Quote, "a b/c"),
            "/quote/a%20b%2Fc"
        );
    }
}
