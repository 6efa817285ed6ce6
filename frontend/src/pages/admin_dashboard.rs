use portfolio_shared::{ContentState, DashboardStats, SectionStatus};
use yew::prelude::*;

use crate::{
    api,
    components::{
        auth_guard::AuthGuard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        stats_card::StatsCard,
        toast::{Toast, ToastKind},
    },
    router::Route,
};

const SECTIONS: [(&str, &str); 4] = [
    ("projects", "Projects"),
    ("ongoing-projects", "Ongoing Projects"),
    ("reviews", "Reviews"),
    ("featured-work", "Featured Work"),
];

fn state_label(state: ContentState) -> &'static str {
    match state {
        ContentState::Empty => "Empty",
        ContentState::Partial => "In Progress",
        ContentState::Complete => "Complete",
    }
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    html! {
        <AuthGuard>
            <DashboardContent />
        </AuthGuard>
    }
}

#[function_component(DashboardContent)]
fn dashboard_content() -> Html {
    let stats = use_state(|| None::<DashboardStats>);
    let sections = use_state(Vec::<(&'static str, SectionStatus)>::new);
    let load_error = use_state(|| None::<String>);

    {
        let stats = stats.clone();
        let sections = sections.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_dashboard_stats().await {
                    Ok(value) => stats.set(Some(value)),
                    Err(err) => load_error.set(Some(format!("Failed to load stats: {err}"))),
                }
                let mut loaded = Vec::with_capacity(SECTIONS.len());
                for (section_id, label) in SECTIONS {
                    match api::fetch_section_status(section_id).await {
                        Ok(status) => loaded.push((label, status)),
                        Err(err) => {
                            load_error
                                .set(Some(format!("Failed to load section {section_id}: {err}")));
                        },
                    }
                }
                sections.set(loaded);
            });
        });
    }

    html! {
        <main class={classes!("max-w-6xl", "mx-auto", "px-4", "py-12", "space-y-10")}>
            <header class={classes!("space-y-2")}>
                <h1 class={classes!("text-3xl", "font-bold", "text-[var(--text)]")}>
                    { "Dashboard" }
                </h1>
                <p class={classes!("text-[var(--muted)]")}>
                    { "Content at a glance." }
                </p>
            </header>

            if let Some(message) = (*load_error).clone() {
                <Toast message={message} kind={ToastKind::Error} />
            }

            if let Some(stats) = (*stats).clone() {
                <section class={classes!("grid", "grid-cols-2", "lg:grid-cols-4", "gap-4")}>
                    <StatsCard icon="📁" label="Projects"
                        value={stats.total_projects.to_string()}
                        route={Route::AdminProjects} />
                    <StatsCard icon="🚧" label="Ongoing"
                        value={stats.total_ongoing.to_string()}
                        route={Route::AdminOngoingProjects} />
                    <StatsCard icon="💬" label="Reviews"
                        value={stats.total_reviews.to_string()}
                        route={Route::AdminReviews} />
                    <StatsCard icon="⭐" label="Featured"
                        value={stats.total_featured.to_string()}
                        route={Route::AdminReviews} />
                </section>
            } else if load_error.is_none() {
                <LoadingSpinner size={SpinnerSize::Large} />
            }

            if !sections.is_empty() {
                <section class={classes!("space-y-4")}>
                    <h2 class={classes!("text-xl", "font-semibold", "text-[var(--text)]")}>
                        { "Section Health" }
                    </h2>
                    <div class={classes!("space-y-3")}>
                        { for sections.iter().map(|(label, status)| html! {
                            <div class={classes!(
                                "rounded-xl", "border", "border-[var(--border)]",
                                "bg-[var(--surface)]", "px-5", "py-4", "space-y-2"
                            )}>
                                <div class={classes!("flex", "items-center", "justify-between")}>
                                    <span class={classes!("font-medium", "text-[var(--text)]")}>
                                        { *label }
                                    </span>
                                    <span class={classes!(
                                        "text-xs", "font-semibold",
                                        match status.status {
                                            ContentState::Empty => "text-red-600",
                                            ContentState::Partial => "text-amber-600",
                                            ContentState::Complete => "text-emerald-600",
                                        }
                                    )}>
                                        { state_label(status.status) }
                                    </span>
                                </div>
                                <div class={classes!(
                                    "h-1.5", "rounded-full", "bg-[var(--surface-alt)]", "overflow-hidden"
                                )}>
                                    <div
                                        class={classes!("h-full", "bg-[var(--primary)]")}
                                        style={format!("width:{}%;", status.progress)}
                                    />
                                </div>
                            </div>
                        }) }
                    </div>
                </section>
            }
        </main>
    }
}
