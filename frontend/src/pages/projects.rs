use portfolio_shared::Project;
use yew::prelude::*;

use crate::{
    api,
    components::{
        content_placeholder::ContentPlaceholder,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        toast::{Toast, ToastKind},
    },
};

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let projects = use_state(Vec::<Project>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    {
        let projects = projects.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_projects().await {
                    Ok(items) => projects.set(items),
                    Err(err) => load_error.set(Some(format!("Failed to load projects: {err}"))),
                }
                loading.set(false);
            });
        });
    }

    html! {
        <main class={classes!("max-w-6xl", "mx-auto", "px-4", "py-12", "space-y-8")}>
            <header class={classes!("space-y-2")}>
                <h1 class={classes!("text-3xl", "font-bold", "text-[var(--text)]")}>
                    { "Projects" }
                </h1>
                <p class={classes!("text-[var(--muted)]")}>
                    { "Shipped work, with the problem each one solved." }
                </p>
            </header>

            if let Some(message) = (*load_error).clone() {
                <Toast message={message} kind={ToastKind::Error} />
            }

            if *loading {
                <LoadingSpinner size={SpinnerSize::Large} />
            } else if projects.is_empty() {
                <ContentPlaceholder title="No projects published yet" />
            } else {
                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-8")}>
                    { for projects.iter().map(|project| html! {
                        <article class={classes!(
                            "rounded-2xl", "border", "border-[var(--border)]",
                            "bg-[var(--surface)]", "overflow-hidden", "flex", "flex-col"
                        )}>
                            <img
                                src={project.image.clone()}
                                alt={project.title.clone()}
                                class={classes!("h-48", "w-full", "object-cover")}
                                loading="lazy"
                            />
                            <div class={classes!("p-6", "space-y-3", "flex-1", "flex", "flex-col")}>
                                <h2 class={classes!("text-xl", "font-semibold", "text-[var(--text)]")}>
                                    { project.title.clone() }
                                </h2>
                                <p class={classes!("text-sm", "text-[var(--muted)]")}>
                                    { project.description.clone() }
                                </p>
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
                                <details class={classes!("text-sm", "space-y-2", "pt-1")}>
                                    <summary class={classes!("cursor-pointer", "text-[var(--primary)]")}>
                                        { "Case study" }
                                    </summary>
                                    <dl class={classes!("space-y-2", "pt-2", "text-[var(--muted)]")}>
                                        <dt class="font-semibold">{ "Challenge" }</dt>
                                        <dd>{ project.case_study.challenge.clone() }</dd>
                                        <dt class="font-semibold">{ "Solution" }</dt>
                                        <dd>{ project.case_study.solution.clone() }</dd>
                                        <dt class="font-semibold">{ "Outcome" }</dt>
                                        <dd>{ project.case_study.outcome.clone() }</dd>
                                    </dl>
                                    if !project.case_study.tech_stack.is_empty() {
                                        <div class={classes!("flex", "flex-wrap", "gap-2", "pt-1")}>
                                            { for project.case_study.tech_stack.iter().map(|entry| html! {
                                                <span class={classes!(
                                                    "rounded", "border", "border-[var(--border)]",
                                                    "px-2", "py-0.5", "text-xs"
                                                )}>
                                                    { entry.clone() }
                                                </span>
                                            }) }
                                        </div>
                                    }
                                </details>
                                <div class={classes!("mt-auto", "flex", "gap-4", "pt-2", "text-sm")}>
                                    if !project.github.is_empty() {
                                        <a href={project.github.clone()} target="_blank" rel="noreferrer"
                                            class={classes!("text-[var(--primary)]", "hover:underline")}>
                                            { "Source" }
                                        </a>
                                    }
                                    if !project.demo.is_empty() {
                                        <a href={project.demo.clone()} target="_blank" rel="noreferrer"
                                            class={classes!("text-[var(--primary)]", "hover:underline")}>
                                            { "Live Demo" }
                                        </a>
                                    }
                                </div>
                            </div>
                        </article>
                    }) }
                </div>
            }
        </main>
    }
}
