//! Landing-page filter and combine step.
//!
//! Pure and synchronous: operates only on collections already held in
//! memory, so changing the filter never triggers a re-fetch.

use crate::entities::{Book, Character, Entity, EntityKind, Movie, Quote};

/// Landing-page filter selection: everything, or one content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFilter {
    All,
    Only(EntityKind),
}

impl ContentFilter {
    pub fn accepts(&self, kind: EntityKind) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::Only(selected) => *selected == kind,
        }
    }
}

/// One row of the combined display sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub label: String,
    pub entity: Entity,
}

/// Quote labels longer than this are cut and marked with an ellipsis.
pub const QUOTE_LABEL_MAX: usize = 50;

/// Display label for a quote dialog, truncated by character count.
pub fn quote_label(dialog: &str) -> String {
    if dialog.chars().count() > QUOTE_LABEL_MAX {
        let head: String = dialog.chars().take(QUOTE_LABEL_MAX).collect();
        format!("{head}...")
    } else {
        dialog.to_string()
    }
}

/// Flatten the four collections into one display sequence.
///
/// Bucket order is fixed (movies, characters, books, quotes); order
/// within a bucket follows the order the fetch step returned.
pub fn combine(
    movies: &[Movie],
    characters: &[Character],
    books: &[Book],
    quotes: &[Quote],
    filter: ContentFilter,
) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();

    if filter.accepts(EntityKind::Movie) {
        entries.extend(movies.iter().cloned().map(|movie| CatalogEntry {
            label: movie.name.clone(),
            entity: Entity::Movie(movie),
        }));
    }
    if filter.accepts(EntityKind::Character) {
        entries.extend(characters.iter().cloned().map(|character| CatalogEntry {
            label: character.name.clone(),
            entity: Entity::Character(character),
        }));
    }
    if filter.accepts(EntityKind::Book) {
        entries.extend(books.iter().cloned().map(|book| CatalogEntry {
            label: book.name.clone(),
            entity: Entity::Book(book),
        }));
    }
    if filter.accepts(EntityKind::Quote) {
        entries.extend(quotes.iter().cloned().map(|quote| CatalogEntry {
            label: quote_label(&quote.dialog),
            entity: Entity::Quote(quote),
        }));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str) -> Movie {
        Movie {
            id: id.to_string(),
            name: format!("Movie {id}"),
            runtime_in_minutes: None,
            budget_in_millions: None,
            box_office_revenue_in_millions: None,
            academy_award_nominations: None,
            academy_award_wins: None,
            rotten_tomatoes_score: None,
        }
    }

    fn character(id: &str) -> Character {
        Character {
            id: id.to_string(),
            name: format!("Character {id}"),
            race: None,
            gender: None,
            birth: None,
            death: None,
            spouse: None,
            realm: None,
            hair: None,
            height: None,
            wiki_url: None,
        }
    }

    fn book(id: &str) -> Book {
        Book {
            id: id.to_string(),
            name: format!("Book {id}"),
        }
    }

    fn quote(id: &str, dialog: &str) -> Quote {
        Quote {
            id: id.to_string(),
            dialog: dialog.to_string(),
            movie: None,
            character: None,
        }
    }

    #[test]
    fn short_dialogs_are_used_verbatim() {
        assert_eq!(quote_label("My precious."), "My precious.");
    }

    #[test]
    fn long_dialogs_are_cut_at_fifty_characters() {
        let dialog = "a".repeat(80);
        let label = quote_label(&dialog);
        assert_eq!(label, format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn exactly_fifty_characters_stay_untouched() {
        let dialog = "b".repeat(50);
        assert_eq!(quote_label(&dialog), dialog);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let dialog = "ä".repeat(60);
        let label = quote_label(&dialog);
        assert_eq!(label.chars().count(), 53);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn all_filter_keeps_bucket_order() {
        let entries = combine(
            &[movie("m1")],
            &[character("c1")],
            &[book("b1")],
            &[quote("q1", &"a".repeat(80))],
            ContentFilter::All,
        );

        let kinds: Vec<EntityKind> = entries.iter().map(|e| e.entity.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Movie,
                EntityKind::Character,
                EntityKind::Book,
                EntityKind::Quote
            ]
        );
    }

    #[test]
    fn single_kind_filter_selects_one_bucket() {
        let long_dialog = "a".repeat(80);
        let entries = combine(
            &[movie("m1")],
            &[character("c1")],
            &[],
            &[quote("q1", &long_dialog)],
            ContentFilter::Only(EntityKind::Quote),
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, format!("{}...", "a".repeat(50)));
        assert_eq!(entries[0].entity.kind(), EntityKind::Quote);
    }

    #[test]
    fn order_within_a_bucket_is_preserved() {
        let entries = combine(
            &[movie("m1"), movie("m2")],
            &[],
            &[],
            &[],
            ContentFilter::Only(EntityKind::Movie),
        );
        let ids: Vec<&str> = entries.iter().map(|e| e.entity.id()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn combine_is_idempotent() {
        let movies = [movie("m1")];
        let characters = [character("c1")];
        let books = [book("b1")];
        let quotes = [quote("q1", "Fly, you fools!")];

        let first = combine(&movies, &characters, &books, &quotes, ContentFilter::All);
        let second = combine(&movies, &characters, &books, &quotes, ContentFilter::All);
        assert_eq!(first, second);
    }
}
