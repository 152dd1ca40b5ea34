//! Landing page: fetch the four collections once, then filter and
//! combine them client-side.

use contracts::catalog::{combine, CatalogEntry, ContentFilter};
use contracts::entities::{Entity, EntityKind};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::api;
use crate::shared::badge::KindBadge;
use crate::shared::format::display_number;
use crate::shared::icons::icon;

struct FilterOption {
    filter: ContentFilter,
    full_label: &'static str,
    icon: &'static str,
}

const FILTER_OPTIONS: [FilterOption; 5] = [
    FilterOption {
        filter: ContentFilter::All,
        full_label: "All Content",
        icon: "crown",
    },
    FilterOption {
        filter: ContentFilter::Only(EntityKind::Movie),
        full_label: "Movies",
        icon: "movie",
    },
    FilterOption {
        filter: ContentFilter::Only(EntityKind::Character),
        full_label: "Characters",
        icon: "character",
    },
    FilterOption {
        filter: ContentFilter::Only(EntityKind::Book),
        full_label: "Books",
        icon: "book",
    },
    FilterOption {
        filter: ContentFilter::Only(EntityKind::Quote),
        full_label: "Quotes",
        icon: "quote",
    },
];

#[component]
pub fn CatalogPage() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let (movies, set_movies) = signal(Vec::new());
    let (characters, set_characters) = signal(Vec::new());
    let (books, set_books) = signal(Vec::new());
    let (quotes, set_quotes) = signal(Vec::new());
    let (filter, set_filter) = signal(ContentFilter::All);

    Effect::new(move |_| {
        spawn_local(async move {
            let data = api::load_catalog().await;
            log!(
                "catalog settled: {} movies, {} characters, {} books, {} quotes",
                data.movies.value().len(),
                data.characters.value().len(),
                data.books.value().len(),
                data.quotes.value().len()
            );
            set_movies.set(data.movies.into_value());
            set_characters.set(data.characters.into_value());
            set_books.set(data.books.into_value());
            set_quotes.set(data.quotes.into_value());
            set_loading.set(false);
        });
    });

    let entries = Memo::new(move |_| {
        combine(
            &movies.get(),
            &characters.get(),
            &books.get(),
            &quotes.get(),
            filter.get(),
        )
    });

    let filter_buttons = FILTER_OPTIONS
        .iter()
        .map(|option| {
            let value = option.filter;
            view! {
                <button
                    class="filter-button"
                    class=("filter-button--selected", move || filter.get() == value)
                    on:click=move |_| set_filter.set(value)
                >
                    {icon(option.icon)}
                    <span class="filter-button__label">{option.full_label}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <main class="page">
            <header class="page__header">
                <div class="hero">
                    <div class="hero__title">
                        {icon("crown")}
                        <h1>"Middle-earth Chronicles"</h1>
                    </div>
                    <p class="hero__subtitle">
                        "Explore the vast world of Tolkien's Middle-earth through movies, characters, books, and quotes"
                    </p>

                    <div class="filter">
                        <div class="filter__caption">
                            {icon("filter")}
                            <span>"Filter Content:"</span>
                        </div>
                        <nav class="filter__options">{filter_buttons}</nav>
                    </div>

                    <div class="stats">
                        <span>"🎬 " {move || movies.get().len()}</span>
                        <span>"👥 " {move || characters.get().len()}</span>
                        <span>"📚 " {move || books.get().len()}</span>
                        <span>"💬 " {move || quotes.get().len()}</span>
                        <span class="stats__showing">
                            "• Showing: " {move || entries.get().len()} " items"
                        </span>
                    </div>
                </div>
            </header>

            <section class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="panel panel--center">
                                <div class="spinner"></div>
                                <h2>"Loading Middle-earth..."</h2>
                                <p>"Fetching data from The One API"</p>
                            </div>
                        }
                    }
                >
                    <Show
                        when=move || !entries.get().is_empty()
                        fallback=|| {
                            view! {
                                <div class="panel panel--center">
                                    <h2>"No items found"</h2>
                                    <p>"Try selecting a different filter"</p>
                                </div>
                            }
                        }
                    >
                        <div class="catalog-grid">
                            <For
                                each=move || entries.get()
                                key=|entry| {
                                    (entry.entity.kind().as_str(), entry.entity.id().to_string())
                                }
                                children=|entry: CatalogEntry| view! { <CatalogCard entry=entry /> }
                            />
                        </div>
                    </Show>
                </Show>
            </section>

            <footer class="page__footer">
                <p>"Data powered by The One API"</p>
            </footer>
        </main>
    }
}

fn subtitle(entity: &Entity) -> String {
    match entity {
        Entity::Movie(movie) => movie
            .runtime_in_minutes
            .map(|runtime| format!("Runtime: {runtime} minutes"))
            .unwrap_or_else(|| "Explore details".to_string()),
        Entity::Character(character) => character
            .race
            .as_ref()
            .map(|race| format!("Race: {race}"))
            .unwrap_or_else(|| "Explore details".to_string()),
        Entity::Book(_) => "Book of Middle-earth".to_string(),
        Entity::Quote(_) => "Memorable quote".to_string(),
    }
}

#[component]
fn CatalogCard(entry: CatalogEntry) -> impl IntoView {
    let kind = entry.entity.kind();
    let href = format!("/{}/{}", kind.as_str(), entry.entity.id());
    let card_subtitle = subtitle(&entry.entity);

    let body = match &entry.entity {
        Entity::Movie(movie) => match movie.box_office_revenue_in_millions {
            Some(revenue) => view! {
                <div class="card__facts">
                    <div class="card__fact">
                        <span>"Box Office:"</span>
                        <span class="card__value">"$" {display_number(revenue)} "M"</span>
                    </div>
                    {movie.rotten_tomatoes_score.map(|score| {
                        view! {
                            <div class="card__fact">
                                <span>"RT Score:"</span>
                                <span class="card__value">{display_number(score)} "%"</span>
                            </div>
                        }
                    })}
                    {movie.academy_award_wins.map(|wins| {
                        view! {
                            <div class="card__fact">
                                <span>"Oscar Wins:"</span>
                                <span class="card__value">{wins}</span>
                            </div>
                        }
                    })}
                </div>
            }
            .into_any(),
            None => view! { <p class="card__hint">"Click to explore"</p> }.into_any(),
        },
        Entity::Character(character) => {
            let fact = |label: &'static str, value: &Option<String>| {
                value.clone().map(|value| {
                    view! {
                        <div class="card__fact">
                            <span>{label}</span>
                            <span class="card__value">{value}</span>
                        </div>
                    }
                })
            };
            view! {
                <div class="card__facts">
                    {fact("Gender:", &character.gender)}
                    {fact("Realm:", &character.realm)}
                    {fact("Spouse:", &character.spouse)}
                </div>
            }
            .into_any()
        }
        Entity::Quote(quote) => {
            let snippet = contracts::catalog::quote_label(&quote.dialog);
            view! { <p class="card__snippet">"\u{201c}" {snippet} "\u{201d}"</p> }.into_any()
        }
        Entity::Book(_) => view! { <p class="card__hint">"Click to explore"</p> }.into_any(),
    };

    view! {
        <a class="card" href=href>
            <div class="card__header">
                {icon(kind.as_str())}
                <KindBadge kind=kind />
            </div>
            <h3 class="card__title">{entry.label.clone()}</h3>
            <p class="card__subtitle">{card_subtitle}</p>
            {body}
        </a>
    }
}
