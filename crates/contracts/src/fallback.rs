//! Static substitute data used when a collection call fails or comes
//! back empty. Read-only; single-item lookups never use these.

use once_cell::sync::Lazy;

use crate::entities::{Book, Character, Movie, Quote};

pub static FALLBACK_MOVIES: Lazy<Vec<Movie>> = Lazy::new(|| {
    vec![
        Movie {
            id: "5cd95395de30eff6ebccde5c".to_string(),
            name: "The Fellowship of the Ring".to_string(),
            runtime_in_minutes: Some(178),
            budget_in_millions: Some(93.0),
            box_office_revenue_in_millions: Some(871.5),
            academy_award_nominations: Some(13),
            academy_award_wins: Some(4),
            rotten_tomatoes_score: Some(91.0),
        },
        Movie {
            id: "5cd95395de30eff6ebccde5b".to_string(),
            name: "The Two Towers".to_string(),
            runtime_in_minutes: Some(179),
            budget_in_millions: Some(94.0),
            box_office_revenue_in_millions: Some(926.0),
            academy_award_nominations: Some(6),
            academy_award_wins: Some(2),
            rotten_tomatoes_score: Some(95.0),
        },
        Movie {
            id: "5cd95395de30eff6ebccde5d".to_string(),
            name: "The Return of the King".to_string(),
            runtime_in_minutes: Some(201),
            budget_in_millions: Some(94.0),
            box_office_revenue_in_millions: Some(1146.0),
            academy_award_nominations: Some(11),
            academy_award_wins: Some(11),
            rotten_tomatoes_score: Some(93.0),
        },
    ]
});

fn character(
    id: &str,
    name: &str,
    race: &str,
    birth: Option<&str>,
    spouse: Option<&str>,
    realm: &str,
) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        race: Some(race.to_string()),
        gender: Some("Male".to_string()),
        birth: birth.map(str::to_string),
        death: None,
        spouse: spouse.map(str::to_string),
        realm: Some(realm.to_string()),
        hair: None,
        height: None,
        wiki_url: None,
    }
}

pub static FALLBACK_CHARACTERS: Lazy<Vec<Character>> = Lazy::new(|| {
    vec![
        character(
            "5cd99d4bde30eff6ebccfbbe",
            "Gandalf",
            "Maiar",
            Some("Before the Shaping of Arda"),
            None,
            "Valinor",
        ),
        character(
            "5cd99d4bde30eff6ebccfc15",
            "Frodo Baggins",
            "Hobbit",
            Some("September 22, 2968"),
            None,
            "The Shire",
        ),
        character(
            "5cd99d4bde30eff6ebccfea0",
            "Aragorn II Elessar",
            "Men",
            Some("March 1, 2931"),
            Some("Arwen"),
            "Gondor",
        ),
        character(
            "5cd99d4bde30eff6ebccfe9e",
            "Legolas",
            "Elf",
            None,
            None,
            "Woodland Realm",
        ),
        character(
            "5cd99d4bde30eff6ebccfea4",
            "Gimli",
            "Dwarf",
            None,
            None,
            "Erebor",
        ),
        character(
            "5cd99d4bde30eff6ebccfe9f",
            "Boromir",
            "Men",
            None,
            None,
            "Gondor",
        ),
        character(
            "5cd99d4bde30eff6ebccfea1",
            "Samwise Gamgee",
            "Hobbit",
            None,
            None,
            "The Shire",
        ),
        character(
            "5cd99d4bde30eff6ebccfea2",
            "Meriadoc Brandybuck",
            "Hobbit",
            None,
            None,
            "The Shire",
        ),
    ]
});

pub static FALLBACK_BOOKS: Lazy<Vec<Book>> = Lazy::new(|| {
    vec![
        Book {
            id: "5cf5805fb53e011a64671582".to_string(),
            name: "The Fellowship Of The Ring".to_string(),
        },
        Book {
            id: "5cf58077b53e011a64671583".to_string(),
            name: "The Two Towers".to_string(),
        },
        Book {
            id: "5cf58080b53e011a64671584".to_string(),
            name: "The Return Of The King".to_string(),
        },
    ]
});

fn quote(id: &str, dialog: &str, character: &str, movie: &str) -> Quote {
    // Sample quotes reference their character and movie by display name,
    // not by id; enrichment never runs on fallback data.
    Quote {
        id: id.to_string(),
        dialog: dialog.to_string(),
        character: Some(character.to_string()),
        movie: Some(movie.to_string()),
    }
}

pub static FALLBACK_QUOTES: Lazy<Vec<Quote>> = Lazy::new(|| {
    vec![
        quote(
            "5cd96e05de30eff6ebcce7e9",
            "I will take the Ring, though I do not know the way.",
            "Frodo",
            "The Fellowship of the Ring",
        ),
        quote(
            "5cd96e05de30eff6ebcce7ea",
            "You shall not pass!",
            "Gandalf",
            "The Fellowship of the Ring",
        ),
        quote(
            "5cd96e05de30eff6ebcce7eb",
            "My precious.",
            "Gollum",
            "The Two Towers",
        ),
        quote(
            "5cd96e05de30eff6ebcce7ec",
            "One does not simply walk into Mordor.",
            "Boromir",
            "The Fellowship of the Ring",
        ),
        quote(
            "5cd96e05de30eff6ebcce7ed",
            "Even the smallest person can change the course of the future.",
            "Galadriel",
            "The Fellowship of the Ring",
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_match_expected_sizes() {
        assert_eq!(FALLBACK_MOVIES.len(), 3);
        assert_eq!(FALLBACK_CHARACTERS.len(), 8);
        assert_eq!(FALLBACK_BOOKS.len(), 3);
        assert_eq!(FALLBACK_QUOTES.len(), 5);
    }

    #[test]
    fn ids_are_unique_within_each_table() {
        fn unique(ids: Vec<&str>) -> bool {
            let mut seen = ids.clone();
            seen.sort_unstable();
            seen.dedup();
            seen.len() == ids.len()
        }

        assert!(unique(FALLBACK_MOVIES.iter().map(|m| m.id.as_str()).collect()));
        assert!(unique(
            FALLBACK_CHARACTERS.iter().map(|c| c.id.as_str()).collect()
        ));
        assert!(unique(FALLBACK_BOOKS.iter().map(|b| b.id.as_str()).collect()));
        assert!(unique(FALLBACK_QUOTES.iter().map(|q| q.id.as_str()).collect()));
    }
}
