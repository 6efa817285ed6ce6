use portfolio_shared::Review;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::star_rating::StarRating,
    router::Route,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let featured = use_state(Vec::<Review>::new);

    // Featured reviews are the only remote data on the landing page; the
    // hero renders immediately and the strip fills in when the fetch lands.
    {
        let featured = featured.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(reviews) = api::fetch_reviews().await {
                    featured.set(reviews.into_iter().filter(|r| r.featured).collect());
                }
            });
        });
    }

    html! {
        <main class={classes!("max-w-6xl", "mx-auto", "px-4", "py-16", "space-y-16")}>
            <section class={classes!("space-y-6", "text-center", "py-12")}>
                <h1 class={classes!("text-4xl", "sm:text-5xl", "font-bold", "text-[var(--text)]")}>
                    { "Software that ships." }
                </h1>
                <p class={classes!("max-w-2xl", "mx-auto", "text-lg", "text-[var(--muted)]")}>
                    { "Full-stack developer building web platforms, dashboards and tools \
                       for NGOs, startups and agritech teams." }
                </p>
                <div class={classes!("flex", "justify-center", "gap-4")}>
                    <Link<Route> to={Route::Projects} classes={classes!(
                        "rounded-lg", "bg-[var(--primary)]", "text-white",
                        "px-6", "py-3", "text-sm", "font-medium"
                    )}>
                        { "View Projects" }
                    </Link<Route>>
                    <Link<Route> to={Route::OngoingProjects} classes={classes!(
                        "rounded-lg", "border", "border-[var(--border)]",
                        "px-6", "py-3", "text-sm", "font-medium",
                        "hover:bg-[var(--surface-alt)]"
                    )}>
                        { "What I'm Building" }
                    </Link<Route>>
                </div>
            </section>

            if !featured.is_empty() {
                <section class={classes!("space-y-6")}>
                    <div class={classes!("flex", "items-baseline", "justify-between")}>
                        <h2 class={classes!("text-2xl", "font-semibold", "text-[var(--text)]")}>
                            { "What clients say" }
                        </h2>
                        <Link<Route> to={Route::Reviews} classes={classes!(
                            "text-sm", "text-[var(--primary)]", "hover:underline"
                        )}>
                            { "All reviews" }
                        </Link<Route>>
                    </div>
                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-6")}>
                        { for featured.iter().map(|review| html! {
                            <article class={classes!(
                                "rounded-2xl", "border", "border-[var(--border)]",
                                "bg-[var(--surface)]", "p-6", "space-y-3"
                            )}>
                                <StarRating rating={review.rating} />
                                <p class={classes!("text-sm", "text-[var(--text)]")}>
                                    { format!("\u{201c}{}\u{201d}", review.text) }
                                </p>
                                <footer class={classes!("text-xs", "text-[var(--muted)]")}>
                                    <strong>{ review.name.clone() }</strong>
                                    { " · " }
                                    { review.role.clone() }
                                    if let Some(company) = &review.company {
                                        { format!(", {company}") }
                                    }
                                </footer>
                            </article>
                        }) }
                    </div>
                </section>
            }
        </main>
    }
}
