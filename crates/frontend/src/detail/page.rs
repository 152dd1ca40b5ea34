//! Detail page for `/:kind/:id`.
//!
//! The kind segment is validated against the closed set before any
//! network call; an unknown tag renders its own view, distinct from
//! not-found.

use contracts::entities::{Character, EntityKind, EnrichedQuote, Movie};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::detail::{api, DetailItem};
use crate::shared::badge::KindBadge;
use crate::shared::format::display_number;
use crate::shared::icons::icon;

#[derive(Debug, Clone)]
enum DetailState {
    Loading,
    Unsupported(String),
    NotFound { kind: EntityKind, id: String },
    Found(DetailItem),
}

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let (state, set_state) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let raw_kind = params.get().get("kind").unwrap_or_default();
        let id = params.get().get("id").unwrap_or_default();

        match EntityKind::try_from(raw_kind.as_str()) {
            Err(_) => set_state.set(DetailState::Unsupported(raw_kind)),
            Ok(kind) => {
                set_state.set(DetailState::Loading);
                spawn_local(async move {
                    match api::fetch_item(kind, &id).await {
                        Some(item) => set_state.set(DetailState::Found(item)),
                        None => set_state.set(DetailState::NotFound { kind, id }),
                    }
                });
            }
        }
    });

    view! {
        <main class="page page--detail">
            {move || match state.get() {
                DetailState::Loading => {
                    view! {
                        <div class="panel panel--center">
                            <div class="spinner"></div>
                            <p>"Loading..."</p>
                        </div>
                    }
                        .into_any()
                }
                DetailState::Unsupported(tag) => view! { <UnsupportedView tag=tag /> }.into_any(),
                DetailState::NotFound { kind, id } => {
                    view! { <NotFoundView kind=kind id=id /> }.into_any()
                }
                DetailState::Found(item) => view! { <FoundView item=item /> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn BackHome() -> impl IntoView {
    view! {
        <a class="button button--back" href="/">
            {icon("arrow-left")}
            "Back to Home"
        </a>
    }
}

#[component]
fn UnsupportedView(tag: String) -> impl IntoView {
    view! {
        <div class="panel panel--center">
            <h1>"Invalid Type"</h1>
            <p>"The requested type \"" {tag} "\" is not supported."</p>
            <BackHome />
        </div>
    }
}

#[component]
fn NotFoundView(kind: EntityKind, id: String) -> impl IntoView {
    let attempted = api::detail_url(kind, &id);
    view! {
        <div class="panel panel--center">
            <h1>"Item Not Found"</h1>
            <p>
                "The requested " {kind.as_str()} " with ID \"" {id}
                "\" could not be found in The One API."
            </p>
            <p class="panel__diagnostic">"API URL: " {attempted}</p>
            <BackHome />
        </div>
    }
}

fn item_kind(item: &DetailItem) -> EntityKind {
    match item {
        DetailItem::Movie(_) => EntityKind::Movie,
        DetailItem::Character(_) => EntityKind::Character,
        DetailItem::Book(_) => EntityKind::Book,
        DetailItem::Quote(_) => EntityKind::Quote,
    }
}

fn item_id(item: &DetailItem) -> String {
    match item {
        DetailItem::Movie(m) => m.id.clone(),
        DetailItem::Character(c) => c.id.clone(),
        DetailItem::Book(b) => b.id.clone(),
        DetailItem::Quote(q) => q.quote.id.clone(),
    }
}

fn item_title(item: &DetailItem) -> String {
    match item {
        DetailItem::Movie(m) => m.name.clone(),
        DetailItem::Character(c) => c.name.clone(),
        DetailItem::Book(b) => b.name.clone(),
        DetailItem::Quote(_) => "Quote".to_string(),
    }
}

fn kind_blurb(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Movie => "Part of the legendary Lord of the Rings film trilogy",
        EntityKind::Character => "A character from the world of Middle-earth",
        EntityKind::Book => "A book from J.R.R. Tolkien's Middle-earth legendarium",
        EntityKind::Quote => "A memorable quote from Middle-earth",
    }
}

#[component]
fn FoundView(item: DetailItem) -> impl IntoView {
    let kind = item_kind(&item);
    let id = item_id(&item);
    let title = item_title(&item);

    let body = match item {
        DetailItem::Movie(movie) => view! { <MovieDetail movie=movie /> }.into_any(),
        DetailItem::Character(character) => {
            view! { <CharacterDetail character=character /> }.into_any()
        }
        DetailItem::Book(book) => view! { <BookDetail name=book.name /> }.into_any(),
        DetailItem::Quote(quote) => view! { <QuoteDetail quote=quote /> }.into_any(),
    };

    view! {
        <article class="detail">
            <header class="detail__header">
                <BackHome />
                <div class="detail__title">
                    {icon(kind.as_str())}
                    <h1>{title}</h1>
                    <KindBadge kind=kind />
                </div>
                <p class="detail__blurb">{kind_blurb(kind)}</p>
            </header>

            {body}

            <footer class="detail__footer">
                "Data sourced from The One API • Type: " {kind.as_str()} " • ID: " {id}
            </footer>
        </article>
    }
}

#[component]
fn StatCell(icon_name: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-cell">
            <div class="stat-cell__caption">{icon(icon_name)} <span>{label}</span></div>
            <p class="stat-cell__value">{value}</p>
        </div>
    }
}

#[component]
fn MovieDetail(movie: Movie) -> impl IntoView {
    view! {
        <section class="detail-card">
            <h2 class="detail-card__title">{icon("star")} "Movie Statistics"</h2>
            <div class="detail-card__grid">
                {movie.runtime_in_minutes.map(|runtime| {
                    view! {
                        <StatCell icon_name="clock" label="Runtime" value=format!("{runtime} min") />
                    }
                })}
                {movie.box_office_revenue_in_millions.map(|revenue| {
                    view! {
                        <StatCell
                            icon_name="dollar"
                            label="Box Office"
                            value=format!("${}M", display_number(revenue))
                        />
                    }
                })}
                {movie.academy_award_wins.map(|wins| {
                    view! {
                        <StatCell icon_name="award" label="Oscar Wins" value=wins.to_string() />
                    }
                })}
                {movie.rotten_tomatoes_score.map(|score| {
                    view! {
                        <StatCell
                            icon_name="star"
                            label="RT Score"
                            value=format!("{}%", display_number(score))
                        />
                    }
                })}
            </div>
        </section>

        <section class="detail-card">
            <h2 class="detail-card__title">"Additional Details"</h2>
            <div class="detail-card__grid">
                {movie.budget_in_millions.map(|budget| {
                    view! {
                        <StatCell
                            icon_name="dollar"
                            label="Budget"
                            value=format!("${} Million", display_number(budget))
                        />
                    }
                })}
                {movie.academy_award_nominations.map(|nominations| {
                    view! {
                        <StatCell
                            icon_name="award"
                            label="Oscar Nominations"
                            value=nominations.to_string()
                        />
                    }
                })}
            </div>
        </section>
    }
}

#[component]
fn CharacterDetail(character: Character) -> impl IntoView {
    let fact = |icon_name: &'static str, label: &'static str, value: &Option<String>| {
        value
            .clone()
            .map(|value| view! { <StatCell icon_name=icon_name label=label value=value /> })
    };

    let wiki = character.wiki_url.clone().map(|url| {
        view! {
            <p class="detail-card__link">
                <a href=url target="_blank" rel="noopener noreferrer">
                    {icon("book")}
                    "View on Wiki"
                </a>
            </p>
        }
    });

    view! {
        <section class="detail-card">
            <h2 class="detail-card__title">"Character Information"</h2>
            <div class="detail-card__grid">
                {fact("character", "Race", &character.race)}
                {fact("character", "Gender", &character.gender)}
                {fact("map-pin", "Realm", &character.realm)}
                {fact("calendar", "Birth", &character.birth)}
                {fact("calendar", "Death", &character.death)}
                {fact("heart", "Spouse", &character.spouse)}
                {fact("character", "Hair", &character.hair)}
                {fact("character", "Height", &character.height)}
            </div>
            {wiki}
        </section>
    }
}

#[component]
fn BookDetail(name: String) -> impl IntoView {
    view! {
        <section class="detail-card detail-card--center">
            <h2 class="detail-card__title">"Book Information"</h2>
            {icon("book")}
            <h3>{name}</h3>
            <p>
                "This is one of the books from J.R.R. Tolkien's Middle-earth legendarium \
                 available in The One API."
            </p>
        </section>
    }
}

#[component]
fn QuoteDetail(quote: EnrichedQuote) -> impl IntoView {
    let has_names = quote.character_name.is_some() || quote.movie_name.is_some();

    let character_line = quote.character_name.clone().map(|name| {
        let reference = quote.quote.character.clone();
        view! {
            <div class="quote-ref">
                {icon("character")}
                <span>"Character:"</span>
                {match reference {
                    Some(id) => {
                        view! { <a href=format!("/character/{id}")>{name}</a> }.into_any()
                    }
                    None => view! { <span>{name}</span> }.into_any(),
                }}
            </div>
        }
    });

    let movie_line = quote.movie_name.clone().map(|name| {
        let reference = quote.quote.movie.clone();
        view! {
            <div class="quote-ref">
                {icon("movie")}
                <span>"Movie:"</span>
                {match reference {
                    Some(id) => view! { <a href=format!("/movie/{id}")>{name}</a> }.into_any(),
                    None => view! { <span>{name}</span> }.into_any(),
                }}
            </div>
        }
    });

    view! {
        <section class="detail-card detail-card--center">
            <h2 class="detail-card__title">"Quote Details"</h2>
            {icon("quote")}
            <blockquote class="quote-dialog">
                "\u{201c}" {quote.quote.dialog.clone()} "\u{201d}"
            </blockquote>
            {character_line}
            {movie_line}
            <Show when=move || !has_names>
                <p class="detail-card__hint">"Quote details not available"</p>
            </Show>
        </section>
    }
}
