pub mod api;
pub mod page;

use contracts::entities::{Book, Character, EnrichedQuote, Movie};

/// A resolved detail item. Quotes arrive already enriched, so the view
/// layer never sees a quote whose reference names are still pending.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailItem {
    Movie(Movie),
    Character(Character),
    Book(Book),
    Quote(EnrichedQuote),
}
