//! Entity records served by The One API, plus the closed set of content
//! kinds the application understands.
//!
//! Records mirror the upstream wire format (camelCase fields, `_id`
//! identity). All non-identity fields the upstream may omit are `Option`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Film record from the `/movie` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub runtime_in_minutes: Option<u32>,
    pub budget_in_millions: Option<f64>,
    pub box_office_revenue_in_millions: Option<f64>,
    pub academy_award_nominations: Option<u32>,
    pub academy_award_wins: Option<u32>,
    pub rotten_tomatoes_score: Option<f64>,
}

/// Character record from the `/character` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub race: Option<String>,
    pub gender: Option<String>,
    pub birth: Option<String>,
    pub death: Option<String>,
    pub spouse: Option<String>,
    pub realm: Option<String>,
    pub hair: Option<String>,
    pub height: Option<String>,
    pub wiki_url: Option<String>,
}

/// Book record from the `/book` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Quote record from the `/quote` endpoints.
///
/// `movie` and `character` are id references into their own collections.
/// In the static fallback data they hold display names instead, matching
/// the sample data the application ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    pub dialog: String,
    pub movie: Option<String>,
    pub character: Option<String>,
}

/// A quote together with the resolved display names of its references.
///
/// Produced once, immediately after the base quote is fetched. A `None`
/// name means the lookup failed or the reference was absent.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedQuote {
    pub quote: Quote,
    pub character_name: Option<String>,
    pub movie_name: Option<String>,
}

impl EnrichedQuote {
    /// Compose the enriched value from the two best-effort lookup results.
    pub fn from_lookups(
        quote: Quote,
        character: Option<Character>,
        movie: Option<Movie>,
    ) -> Self {
        Self {
            character_name: character.map(|c| c.name),
            movie_name: movie.map(|m| m.name),
            quote,
        }
    }
}

/// The closed set of content kinds the application serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Movie,
    Character,
    Book,
    Quote,
}

/// A route carried a content-type segment outside the supported set.
/// Distinct from "not found": this is rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported content type \"{0}\"")]
pub struct UnknownKindError(pub String);

impl EntityKind {
    /// The URL path segment and type tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Movie => "movie",
            EntityKind::Character => "character",
            EntityKind::Book => "book",
            EntityKind::Quote => "quote",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EntityKind {
    type Error = UnknownKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "movie" => Ok(EntityKind::Movie),
            "character" => Ok(EntityKind::Character),
            "book" => Ok(EntityKind::Book),
            "quote" => Ok(EntityKind::Quote),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

/// Sum over the four entity shapes. Rendering and lookup logic match on
/// this exhaustively instead of branching on a type string.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Movie(Movie),
    Character(Character),
    Book(Book),
    Quote(Quote),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Movie(_) => EntityKind::Movie,
            Entity::Character(_) => EntityKind::Character,
            Entity::Book(_) => EntityKind::Book,
            Entity::Quote(_) => EntityKind::Quote,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entity::Movie(m) => &m.id,
            Entity::Character(c) => &c.id,
            Entity::Book(b) => &b.id,
            Entity::Quote(q) => &q.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_the_closed_set() {
        assert_eq!(EntityKind::try_from("movie"), Ok(EntityKind::Movie));
        assert_eq!(EntityKind::try_from("character"), Ok(EntityKind::Character));
        assert_eq!(EntityKind::try_from("book"), Ok(EntityKind::Book));
        assert_eq!(EntityKind::try_from("quote"), Ok(EntityKind::Quote));
    }

    #[test]
    fn kind_rejects_anything_else() {
        let err = EntityKind::try_from("spaceship").unwrap_err();
        assert_eq!(err, UnknownKindError("spaceship".to_string()));
        assert!(EntityKind::try_from("").is_err());
        assert!(EntityKind::try_from("Movie").is_err());
    }

    #[test]
    fn movie_deserializes_from_wire_format() {
        let movie: Movie = serde_json::from_str(
            r#"{
                "_id": "5cd95395de30eff6ebccde5c",
                "name": "The Fellowship of the Ring",
                "runtimeInMinutes": 178,
                "boxOfficeRevenueInMillions": 871.5,
                "rottenTomatoesScore": 91
            }"#,
        )
        .unwrap();

        assert_eq!(movie.id, "5cd95395de30eff6ebccde5c");
        assert_eq!(movie.runtime_in_minutes, Some(178));
        assert_eq!(movie.box_office_revenue_in_millions, Some(871.5));
        assert_eq!(movie.budget_in_millions, None);
    }

    #[test]
    fn character_wiki_url_uses_camel_case() {
        let character: Character = serde_json::from_str(
            r#"{"_id": "c1", "name": "Gandalf", "wikiUrl": "http://lotr.wikia.com/wiki/Gandalf"}"#,
        )
        .unwrap();
        assert_eq!(
            character.wiki_url.as_deref(),
            Some("http://lotr.wikia.com/wiki/Gandalf")
        );
    }

    fn quote(character: Option<&str>, movie: Option<&str>) -> Quote {
        Quote {
            id: "q1".to_string(),
            dialog: "You shall not pass!".to_string(),
            character: character.map(str::to_string),
            movie: movie.map(str::to_string),
        }
    }

    #[test]
    fn enrichment_takes_names_from_resolved_records() {
        let gandalf = Character {
            id: "c1".to_string(),
            name: "Gandalf".to_string(),
            race: None,
            gender: None,
            birth: None,
            death: None,
            spouse: None,
            realm: None,
            hair: None,
            height: None,
            wiki_url: None,
        };

        let enriched = EnrichedQuote::from_lookups(quote(Some("c1"), None), Some(gandalf), None);
        assert_eq!(enriched.character_name.as_deref(), Some("Gandalf"));
        assert_eq!(enriched.movie_name, None);
        // The base quote is carried over untouched.
        assert_eq!(enriched.quote.character.as_deref(), Some("c1"));
    }

    #[test]
    fn enrichment_leaves_names_absent_when_lookups_fail() {
        let enriched = EnrichedQuote::from_lookups(quote(Some("c1"), Some("m1")), None, None);
        assert_eq!(enriched.character_name, None);
        assert_eq!(enriched.movie_name, None);
    }
}
