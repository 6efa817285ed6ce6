use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!(
            "mt-auto",
            "border-t",
            "border-[var(--border)]",
            "bg-[var(--surface)]"
        )}>
            <div class={classes!(
                "flex",
                "flex-col",
                "sm:flex-row",
                "items-center",
                "justify-between",
                "gap-3",
                "max-w-6xl",
                "mx-auto",
                "px-4",
                "py-6",
                "text-sm",
                "text-[var(--muted)]"
            )}>
                <p>{ "Built with Rust and WebAssembly." }</p>
                <nav class={classes!("flex", "items-center", "gap-4")} aria-label="Footer navigation">
                    <Link<Route> to={Route::Projects} classes="hover:text-[var(--primary)]">
                        { "Projects" }
                    </Link<Route>>
                    <Link<Route> to={Route::Reviews} classes="hover:text-[var(--primary)]">
                        { "Reviews" }
                    </Link<Route>>
                    <Link<Route> to={Route::AdminLogin} classes="hover:text-[var(--primary)]">
                        { "Admin" }
                    </Link<Route>>
                </nav>
            </div>
        </footer>
    }
}
