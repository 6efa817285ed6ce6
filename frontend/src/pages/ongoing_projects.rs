use portfolio_shared::OngoingProject;
use yew::prelude::*;

use crate::{
    api,
    components::{
        content_placeholder::ContentPlaceholder,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        toast::{Toast, ToastKind},
    },
};

fn days_remaining_label(project: &OngoingProject) -> Option<String> {
    match project.days_remaining()? {
        0 => Some("due now".to_string()),
        1 => Some("1 day left".to_string()),
        days => Some(format!("{days} days left")),
    }
}

#[function_component(OngoingProjectsPage)]
pub fn ongoing_projects_page() -> Html {
    let projects = use_state(Vec::<OngoingProject>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    {
        let projects = projects.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_ongoing_projects().await {
                    Ok(items) => projects.set(items),
                    Err(err) => {
                        load_error.set(Some(format!("Failed to load ongoing projects: {err}")));
                    },
                }
                loading.set(false);
            });
        });
    }

    html! {
        <main class={classes!("max-w-4xl", "mx-auto", "px-4", "py-12", "space-y-8")}>
            <header class={classes!("space-y-2")}>
                <h1 class={classes!("text-3xl", "font-bold", "text-[var(--text)]")}>
                    { "Ongoing Projects" }
                </h1>
                <p class={classes!("text-[var(--muted)]")}>
                    { "Work in progress, updated as milestones land." }
                </p>
            </header>

            if let Some(message) = (*load_error).clone() {
                <Toast message={message} kind={ToastKind::Error} />
            }

            if *loading {
                <LoadingSpinner size={SpinnerSize::Large} />
            } else if projects.is_empty() {
                <ContentPlaceholder title="Nothing in flight right now" />
            } else {
                <div class={classes!("space-y-8")}>
                    { for projects.iter().map(|project| html! {
                        <article class={classes!(
                            "rounded-2xl", "border", "border-[var(--border)]",
                            "bg-[var(--surface)]", "p-6", "space-y-4"
                        )}>
                            <div class={classes!("flex", "items-start", "justify-between", "gap-4")}>
                                <div class="space-y-1">
                                    <h2 class={classes!("text-xl", "font-semibold", "text-[var(--text)]")}>
                                        { project.title.clone() }
                                    </h2>
                                    <p class={classes!("text-sm", "text-[var(--muted)]")}>
                                        { project.description.clone() }
                                    </p>
                                </div>
                                if let Some(label) = days_remaining_label(project) {
                                    <span class={classes!(
                                        "whitespace-nowrap", "rounded-full",
                                        "bg-[var(--primary)]/10", "text-[var(--primary)]",
                                        "px-3", "py-1", "text-xs", "font-semibold"
                                    )}>
                                        { label }
                                    </span>
                                }
                            </div>

                            <div class={classes!("space-y-1")}>
                                <div class={classes!(
                                    "flex", "justify-between", "text-xs", "text-[var(--muted)]"
                                )}>
                                    <span>{ format!("Started {}", project.start_date) }</span>
                                    <span>{ format!("{}%", project.progress) }</span>
                                </div>
                                <div class={classes!(
                                    "h-2", "rounded-full", "bg-[var(--surface-alt)]", "overflow-hidden"
                                )}>
                                    <div
                                        class={classes!("h-full", "bg-[var(--primary)]", "transition-all")}
                                        style={format!("width:{}%;", project.progress)}
                                    />
                                </div>
                            </div>

                            <div class={classes!("flex", "flex-wrap", "gap-2")}>
                                { for project.tags.iter().map(|tag| html! {
                                    <span class={classes!(
                                        "rounded-full", "bg-[var(--surface-alt)]",
                                        "px-3", "py-1", "text-xs"
                                    )}>
                                        { tag.clone() }
                                    </span>
                                }) }
                            </div>

                            if !project.milestones.is_empty() {
                                <div class={classes!("space-y-2")}>
                                    <h3 class={classes!("text-sm", "font-semibold", "text-[var(--text)]")}>
                                        { format!(
                                            "Milestones ({}/{})",
                                            project.completed_milestones(),
                                            project.milestones.len(),
                                        ) }
                                    </h3>
                                    <ul class={classes!("space-y-1", "text-sm")}>
                                        { for project.milestones.iter().map(|milestone| html! {
                                            <li class={classes!("flex", "items-center", "gap-2")}>
                                                <span aria-hidden="true">
                                                    { if milestone.completed { "✅" } else { "⬜" } }
                                                </span>
                                                <span class={if milestone.completed {
                                                    classes!("line-through", "text-[var(--muted)]")
                                                } else {
                                                    classes!("text-[var(--text)]")
                                                }}>
                                                    { milestone.title.clone() }
                                                </span>
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            }
                        </article>
                    }) }
                </div>
            }
        </main>
    }
}
