use yew::prelude::*;
use yew_router::prelude::*;

use crate::{auth, router::Route};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let admin = route.as_ref().is_some_and(Route::is_admin);

    let public_nav = [
        ("Home", Route::Home),
        ("Projects", Route::Projects),
        ("Ongoing", Route::OngoingProjects),
        ("Reviews", Route::Reviews),
    ];
    let admin_nav = [
        ("Dashboard", Route::AdminDashboard),
        ("Projects", Route::AdminProjects),
        ("Ongoing", Route::AdminOngoingProjects),
        ("Reviews", Route::AdminReviews),
    ];

    let on_sign_out = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            auth::sign_out();
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminLogin);
            }
        })
    };

    let nav_link_classes = classes!(
        "px-3",
        "py-2",
        "rounded-lg",
        "text-sm",
        "font-medium",
        "text-[var(--muted)]",
        "transition-colors",
        "duration-200",
        "hover:text-[var(--primary)]",
        "hover:bg-[var(--surface-alt)]"
    );

    html! {
        <header class={classes!(
            "sticky", "top-0", "z-[80]", "w-full",
            "bg-[var(--surface)]",
            "shadow-[0_1px_0_rgba(var(--primary-rgb),0.08)]"
        )}>
            <div class={classes!(
                "flex", "items-center", "gap-4",
                "max-w-6xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8",
                "min-h-[var(--header-height,4rem)]"
            )}>
                <Link<Route> to={Route::Home} classes="brand-logo">
                    { "Portfolio" }
                </Link<Route>>

                if admin {
                    <span class={classes!(
                        "ml-1",
                        "rounded-full",
                        "bg-[var(--primary)]/10",
                        "px-2",
                        "py-0.5",
                        "text-xs",
                        "font-semibold",
                        "text-[var(--primary)]"
                    )}>
                        { "Admin" }
                    </span>
                }

                <nav class={classes!("ml-auto", "flex", "items-center", "gap-1")} aria-label="Main navigation">
                    if admin {
                        { for admin_nav.iter().map(|(label, route)| html! {
                            <Link<Route> to={route.clone()} classes={nav_link_classes.clone()}>
                                { *label }
                            </Link<Route>>
                        }) }
                        <button
                            type="button"
                            class={classes!(nav_link_classes.clone(), "cursor-pointer")}
                            onclick={on_sign_out}
                        >
                            { "Sign Out" }
                        </button>
                    } else {
                        { for public_nav.iter().map(|(label, route)| html! {
                            <Link<Route> to={route.clone()} classes={nav_link_classes.clone()}>
                                { *label }
                            </Link<Route>>
                        }) }
                    }
                </nav>
            </div>
        </header>
    }
}
