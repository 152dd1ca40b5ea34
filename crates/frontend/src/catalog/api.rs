//! Collection fetchers against The One API.
//!
//! Every fetcher settles: a transport failure, a non-2xx status, a parse
//! error or an empty `docs` list all degrade to the static fallback for
//! that collection, so the join below never fails as a whole.

use contracts::entities::{Book, Character, Movie, Quote};
use contracts::fallback::{
    FALLBACK_BOOKS, FALLBACK_CHARACTERS, FALLBACK_MOVIES, FALLBACK_QUOTES,
};
use contracts::fetch::{resolve_collection, DocsResponse, Sourced};
use futures_util::join;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

pub const API_BASE: &str = "https://the-one-api.dev/v2";
const API_TOKEN: &str = "taanDR9vZtK7acQV5VY0";

/// GET an upstream path and unwrap the `docs` envelope.
pub(crate) async fn get_docs<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let url = format!("{API_BASE}{path}");

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {API_TOKEN}"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: DocsResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))?;

    Ok(data.docs)
}

async fn get_collection<T>(path: &str, fallback: &[T]) -> Sourced<Vec<T>>
where
    T: DeserializeOwned + Clone,
{
    let fetched = get_docs(path).await;
    match &fetched {
        Err(reason) => log::warn!("GET {path} failed, using fallback data: {reason}"),
        Ok(docs) if docs.is_empty() => {
            log::warn!("GET {path} returned no docs, using fallback data")
        }
        Ok(docs) => log::debug!("GET {path}: {} docs", docs.len()),
    }
    resolve_collection(fetched, fallback)
}

pub async fn fetch_movies() -> Sourced<Vec<Movie>> {
    get_collection("/movie", &FALLBACK_MOVIES).await
}

pub async fn fetch_characters() -> Sourced<Vec<Character>> {
    get_collection("/character?limit=20", &FALLBACK_CHARACTERS).await
}

pub async fn fetch_books() -> Sourced<Vec<Book>> {
    get_collection("/book", &FALLBACK_BOOKS).await
}

pub async fn fetch_quotes() -> Sourced<Vec<Quote>> {
    get_collection("/quote?limit=15", &FALLBACK_QUOTES).await
}

/// The four settled collection slots for one catalog page load.
pub struct CatalogData {
    pub movies: Sourced<Vec<Movie>>,
    pub characters: Sourced<Vec<Character>>,
    pub books: Sourced<Vec<Book>>,
    pub quotes: Sourced<Vec<Quote>>,
}

/// Fetch all four collections concurrently. Each slot settles on its own;
/// one collection degrading to fallback does not affect the others.
pub async fn load_catalog() -> CatalogData {
    let (movies, characters, books, quotes) = join!(
        fetch_movies(),
        fetch_characters(),
        fetch_books(),
        fetch_quotes()
    );

    CatalogData {
        movies,
        characters,
        books,
        quotes,
    }
}
