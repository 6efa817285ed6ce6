use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!(
            "flex", "flex-col", "items-center", "justify-center",
            "gap-4", "px-4", "py-24", "text-center"
        )}>
            <h1 class={classes!("text-6xl", "font-bold", "text-[var(--primary)]")}>{ "404" }</h1>
            <p class={classes!("text-[var(--muted)]")}>{ "This page does not exist." }</p>
            <Link<Route> to={Route::Home} classes={classes!(
                "rounded-lg", "bg-[var(--primary)]", "text-white",
                "px-5", "py-2", "text-sm", "font-medium"
            )}>
                { "Back to Home" }
            </Link<Route>>
        </main>
    }
}
