use contracts::entities::EntityKind;
use leptos::prelude::*;

/// Content-kind badge with one color variant per kind.
#[component]
pub fn KindBadge(kind: EntityKind) -> impl IntoView {
    let class = match kind {
        EntityKind::Movie => "badge badge--movie",
        EntityKind::Character => "badge badge--character",
        EntityKind::Book => "badge badge--book",
        EntityKind::Quote => "badge badge--quote",
    };

    view! { <span class=class>{kind.as_str()}</span> }
}
