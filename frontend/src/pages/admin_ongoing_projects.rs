use portfolio_shared::OngoingProject;
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};

use crate::{
    api,
    components::{
        auth_guard::AuthGuard,
        delete_confirm_dialog::DeleteConfirmDialog,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        ongoing_project_dialog::OngoingProjectDialog,
        toast::{Toast, ToastKind},
        DialogMode,
    },
    search,
};

#[function_component(AdminOngoingProjectsPage)]
pub fn admin_ongoing_projects_page() -> Html {
    html! {
        <AuthGuard>
            <OngoingProjectsAdmin />
        </AuthGuard>
    }
}

#[function_component(OngoingProjectsAdmin)]
fn ongoing_projects_admin() -> Html {
    let projects = use_state(Vec::<OngoingProject>::new);
    let loading = use_state(|| true);
    let query = use_state(String::new);

    let dialog_open = use_state(|| false);
    let dialog_mode = use_state(|| DialogMode::Add);
    let selected = use_state(|| None::<OngoingProject>);
    let submitting = use_state(|| false);

    let delete_target = use_state(|| None::<OngoingProject>);
    let deleting = use_state(|| false);

    let toast = use_state(|| None::<(String, ToastKind)>);

    {
        let projects = projects.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_ongoing_projects().await {
                    Ok(items) => projects.set(items),
                    Err(err) => {
                        toast.set(Some((
                            format!("Failed to load ongoing projects: {err}"),
                            ToastKind::Error,
                        )));
                    },
                }
                loading.set(false);
            });
        });
    }

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(target.value());
            }
        })
    };

    let open_add = {
        let dialog_open = dialog_open.clone();
        let dialog_mode = dialog_mode.clone();
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(None);
            dialog_mode.set(DialogMode::Add);
            dialog_open.set(true);
        })
    };

    let open_edit = {
        let dialog_open = dialog_open.clone();
        let dialog_mode = dialog_mode.clone();
        let selected = selected.clone();
        Callback::from(move |project: OngoingProject| {
            selected.set(Some(project));
            dialog_mode.set(DialogMode::Edit);
            dialog_open.set(true);
        })
    };

    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |()| dialog_open.set(false))
    };

    let on_save = {
        let projects = projects.clone();
        let dialog_open = dialog_open.clone();
        let dialog_mode = dialog_mode.clone();
        let submitting = submitting.clone();
        let toast = toast.clone();
        Callback::from(move |draft: OngoingProject| {
            let projects = projects.clone();
            let dialog_open = dialog_open.clone();
            let mode = *dialog_mode;
            let submitting = submitting.clone();
            let toast = toast.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match mode {
                    DialogMode::Add => api::create_ongoing_project(draft).await,
                    DialogMode::Edit => api::update_ongoing_project(draft).await,
                };
                match result {
                    Ok(saved) => {
                        let mut next = (*projects).clone();
                        if let Some(existing) = next.iter_mut().find(|p| p.id == saved.id) {
                            *existing = saved;
                        } else {
                            next.push(saved);
                        }
                        projects.set(next);
                        toast.set(Some((
                            "Ongoing project saved.".to_string(),
                            ToastKind::Success,
                        )));
                        dialog_open.set(false);
                    },
                    Err(err) => {
                        toast.set(Some((
                            format!("Saving the ongoing project failed: {err}"),
                            ToastKind::Error,
                        )));
                    },
                }
                submitting.set(false);
            });
        })
    };

    let request_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |project: OngoingProject| delete_target.set(Some(project)))
    };

    let cancel_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |()| delete_target.set(None))
    };

    let confirm_delete = {
        let projects = projects.clone();
        let delete_target = delete_target.clone();
        let deleting = deleting.clone();
        let toast = toast.clone();
        Callback::from(move |()| {
            let Some(target) = (*delete_target).clone() else {
                return;
            };
            let projects = projects.clone();
            let delete_target = delete_target.clone();
            let deleting = deleting.clone();
            let toast = toast.clone();
            deleting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_ongoing_project(target.id).await {
                    Ok(()) => {
                        let next: Vec<OngoingProject> = projects
                            .iter()
                            .filter(|p| p.id != target.id)
                            .cloned()
                            .collect();
                        projects.set(next);
                        toast.set(Some((
                            "Ongoing project deleted.".to_string(),
                            ToastKind::Success,
                        )));
                    },
                    Err(err) => {
                        toast.set(Some((
                            format!("Deleting the ongoing project failed: {err}"),
                            ToastKind::Error,
                        )));
                    },
                }
                deleting.set(false);
                delete_target.set(None);
            });
        })
    };

    let clear_toast = {
        let toast = toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    let filtered: Vec<OngoingProject> = projects
        .iter()
        .filter(|p| search::ongoing_project_matches(p, &query))
        .cloned()
        .collect();

    html! {
        <main class={classes!("max-w-6xl", "mx-auto", "px-4", "py-12", "space-y-6")}>
            <header class={classes!("flex", "flex-wrap", "items-center", "gap-4")}>
                <h1 class={classes!("text-3xl", "font-bold", "text-[var(--text)]")}>
                    { "Manage Ongoing Projects" }
                </h1>
                <button
                    type="button"
                    class={classes!(
                        "ml-auto", "rounded-lg", "bg-[var(--primary)]", "text-white",
                        "px-4", "py-2", "text-sm", "font-medium"
                    )}
                    onclick={open_add}
                >
                    { "Add Ongoing Project" }
                </button>
            </header>

            <input
                type="search"
                placeholder="Search by title, description or tag"
                class={classes!(
                    "w-full", "max-w-md", "rounded-lg", "border", "border-[var(--border)]",
                    "bg-[var(--surface)]", "px-3", "py-2", "text-sm",
                    "focus:outline-none", "focus:border-[var(--primary)]"
                )}
                value={(*query).clone()}
                oninput={on_query_input}
            />

            if let Some((message, kind)) = (*toast).clone() {
                <Toast message={message} kind={kind} on_close={clear_toast} />
            }

            if *loading {
                <LoadingSpinner size={SpinnerSize::Large} />
            } else if filtered.is_empty() {
                <p class={classes!("text-sm", "text-[var(--muted)]", "py-8")}>
                    { if projects.is_empty() {
                        "Nothing in flight. Add an ongoing project."
                    } else {
                        "No ongoing projects match this search."
                    } }
                </p>
            } else {
                <ul class={classes!("space-y-3")}>
                    { for filtered.iter().map(|project| {
                        let edit = {
                            let open_edit = open_edit.clone();
                            let project = project.clone();
                            Callback::from(move |_: MouseEvent| open_edit.emit(project.clone()))
                        };
                        let delete = {
                            let request_delete = request_delete.clone();
                            let project = project.clone();
                            Callback::from(move |_: MouseEvent| request_delete.emit(project.clone()))
                        };
                        html! {
                            <li class={classes!(
                                "flex", "items-center", "gap-4",
                                "rounded-xl", "border", "border-[var(--border)]",
                                "bg-[var(--surface)]", "px-5", "py-4"
                            )}>
                                <div class={classes!("flex-1", "min-w-0", "space-y-2")}>
                                    <div class={classes!("flex", "items-baseline", "gap-3")}>
                                        <p class={classes!("font-medium", "text-[var(--text)]", "truncate")}>
                                            { project.title.clone() }
                                        </p>
                                        <span class={classes!("text-xs", "text-[var(--muted)]")}>
                                            { format!(
                                                "{}% · {}/{} milestones",
                                                project.progress,
                                                project.completed_milestones(),
                                                project.milestones.len(),
                                            ) }
                                        </span>
                                    </div>
                                    <div class={classes!(
                                        "h-1.5", "rounded-full", "bg-[var(--surface-alt)]",
                                        "overflow-hidden", "max-w-xs"
                                    )}>
                                        <div
                                            class={classes!("h-full", "bg-[var(--primary)]")}
                                            style={format!("width:{}%;", project.progress)}
                                        />
                                    </div>
                                </div>
                                <button type="button"
                                    class={classes!(
                                        "rounded-lg", "border", "border-[var(--border)]",
                                        "px-3", "py-1.5", "text-sm",
                                        "hover:bg-[var(--surface-alt)]"
                                    )}
                                    onclick={edit}>
                                    { "Edit" }
                                </button>
                                <button type="button"
                                    class={classes!(
                                        "rounded-lg", "border", "border-red-300",
                                        "text-red-600",
                                        "px-3", "py-1.5", "text-sm",
                                        "hover:bg-red-50", "dark:hover:bg-red-950"
                                    )}
                                    onclick={delete}>
                                    { "Delete" }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            }

            <OngoingProjectDialog
                open={*dialog_open}
                mode={*dialog_mode}
                entity={(*selected).clone()}
                submitting={*submitting}
                on_save={on_save}
                on_close={close_dialog}
            />
            <DeleteConfirmDialog
                open={delete_target.is_some()}
                target={delete_target.as_ref().map(|p| p.title.clone()).unwrap_or_default()}
                busy={*deleting}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </main>
    }
}
