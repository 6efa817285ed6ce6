use portfolio_shared::Review;
use yew::prelude::*;

use crate::{
    api,
    components::{
        content_placeholder::ContentPlaceholder,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        star_rating::StarRating,
        toast::{Toast, ToastKind},
    },
};

#[function_component(ReviewsPage)]
pub fn reviews_page() -> Html {
    let reviews = use_state(Vec::<Review>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    {
        let reviews = reviews.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_reviews().await {
                    Ok(mut items) => {
                        // Featured first, otherwise keep insertion order.
                        items.sort_by_key(|review| !review.featured);
                        reviews.set(items);
                    },
                    Err(err) => load_error.set(Some(format!("Failed to load reviews: {err}"))),
                }
                loading.set(false);
            });
        });
    }

    html! {
        <main class={classes!("max-w-5xl", "mx-auto", "px-4", "py-12", "space-y-8")}>
            <header class={classes!("space-y-2")}>
                <h1 class={classes!("text-3xl", "font-bold", "text-[var(--text)]")}>
                    { "Reviews" }
                </h1>
                <p class={classes!("text-[var(--muted)]")}>
                    { "From the people I've built for." }
                </p>
            </header>

            if let Some(message) = (*load_error).clone() {
                <Toast message={message} kind={ToastKind::Error} />
            }

            if *loading {
                <LoadingSpinner size={SpinnerSize::Large} />
            } else if reviews.is_empty() {
                <ContentPlaceholder title="No reviews yet" />
            } else {
                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                    { for reviews.iter().map(|review| html! {
                        <article class={classes!(
                            "rounded-2xl", "border", "border-[var(--border)]",
                            "bg-[var(--surface)]", "p-6", "space-y-4",
                            if review.featured { "ring-1 ring-[var(--primary)]/40" } else { "" }
                        )}>
                            <div class={classes!("flex", "items-center", "gap-4")}>
                                <img
                                    src={review.image.clone()}
                                    alt={review.name.clone()}
                                    class={classes!("h-12", "w-12", "rounded-full", "object-cover")}
                                    loading="lazy"
                                />
                                <div class="flex-1">
                                    <p class={classes!("font-semibold", "text-[var(--text)]")}>
                                        { review.name.clone() }
                                    </p>
                                    <p class={classes!("text-xs", "text-[var(--muted)]")}>
                                        { review.role.clone() }
                                        if let Some(company) = &review.company {
                                            { format!(" · {company}") }
                                        }
                                    </p>
                                </div>
                                if review.featured {
                                    <span class={classes!(
                                        "rounded-full", "bg-[var(--primary)]/10",
                                        "px-2", "py-0.5", "text-xs", "font-semibold",
                                        "text-[var(--primary)]"
                                    )}>
                                        { "Featured" }
                                    </span>
                                }
                            </div>
                            <StarRating rating={review.rating} />
                            <p class={classes!("text-sm", "text-[var(--text)]")}>
                                { review.text.clone() }
                            </p>
                            <p class={classes!("text-xs", "text-[var(--muted)]")}>
                                { review.date.clone() }
                            </p>
                        </article>
                    }) }
                </div>
            }
        </main>
    }
}
