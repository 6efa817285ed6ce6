use portfolio_shared::{CaseStudy, Project};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{events::InputEvent, prelude::*};

use crate::components::DialogMode;

#[derive(Properties, PartialEq)]
pub struct ProjectDialogProps {
    pub open: bool,
    pub mode: DialogMode,
    /// Record being edited. Ignored in add mode.
    #[prop_or_default]
    pub entity: Option<Project>,
    #[prop_or(false)]
    pub submitting: bool,
    /// Emits the finished draft. The caller persists it and closes the dialog.
    pub on_save: Callback<Project>,
    pub on_close: Callback<()>,
}

fn empty_project() -> Project {
    Project {
        id: 0,
        title: String::new(),
        description: String::new(),
        image: String::new(),
        tags: vec![],
        github: String::new(),
        demo: String::new(),
        case_study: CaseStudy::default(),
    }
}

#[function_component(ProjectDialog)]
pub fn project_dialog(props: &ProjectDialogProps) -> Html {
    let draft = use_state(empty_project);
    let tag_input = use_state(String::new);
    let tech_input = use_state(String::new);

    // Reset the draft whenever the dialog is (re)opened for a different
    // record or mode, so stale edits never leak between sessions.
    {
        let draft = draft.clone();
        let tag_input = tag_input.clone();
        let tech_input = tech_input.clone();
        let entity = props.entity.clone();
        use_effect_with(
            (props.entity.clone(), props.mode, props.open),
            move |(_, mode, open)| {
                if *open {
                    let next = match (mode, entity) {
                        (DialogMode::Edit, Some(existing)) => existing,
                        _ => empty_project(),
                    };
                    draft.set(next);
                    tag_input.set(String::new());
                    tech_input.set(String::new());
                }
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let edit_field = |apply: fn(&mut Project, String)| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|t| t.value())
                .or_else(|| event.target_dyn_into::<HtmlTextAreaElement>().map(|t| t.value()));
            if let Some(value) = value {
                let mut next = (*draft).clone();
                apply(&mut next, value);
                draft.set(next);
            }
        })
    };

    let on_title = edit_field(|p, v| p.title = v);
    let on_description = edit_field(|p, v| p.description = v);
    let on_image = edit_field(|p, v| p.image = v);
    let on_github = edit_field(|p, v| p.github = v);
    let on_demo = edit_field(|p, v| p.demo = v);
    let on_challenge = edit_field(|p, v| p.case_study.challenge = v);
    let on_solution = edit_field(|p, v| p.case_study.solution = v);
    let on_outcome = edit_field(|p, v| p.case_study.outcome = v);

    let on_tag_input = {
        let tag_input = tag_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                tag_input.set(target.value());
            }
        })
    };
    let add_tag = {
        let draft = draft.clone();
        let tag_input = tag_input.clone();
        Callback::from(move |_: MouseEvent| {
            let tag = tag_input.trim().to_string();
            if tag.is_empty() || draft.tags.contains(&tag) {
                return;
            }
            let mut next = (*draft).clone();
            next.tags.push(tag);
            draft.set(next);
            tag_input.set(String::new());
        })
    };
    let remove_tag = {
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            let mut next = (*draft).clone();
            if index < next.tags.len() {
                next.tags.remove(index);
                draft.set(next);
            }
        })
    };

    let on_tech_input = {
        let tech_input = tech_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                tech_input.set(target.value());
            }
        })
    };
    let add_tech = {
        let draft = draft.clone();
        let tech_input = tech_input.clone();
        Callback::from(move |_: MouseEvent| {
            let entry = tech_input.trim().to_string();
            if entry.is_empty() || draft.case_study.tech_stack.contains(&entry) {
                return;
            }
            let mut next = (*draft).clone();
            next.case_study.tech_stack.push(entry);
            draft.set(next);
            tech_input.set(String::new());
        })
    };
    let remove_tech = {
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            let mut next = (*draft).clone();
            if index < next.case_study.tech_stack.len() {
                next.case_study.tech_stack.remove(index);
                draft.set(next);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        let submitting = props.submitting;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !submitting {
                on_save.emit((*draft).clone());
            }
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        let submitting = props.submitting;
        Callback::from(move |_: MouseEvent| {
            if !submitting {
                on_close.emit(());
            }
        })
    };

    let input_classes = classes!(
        "w-full", "rounded-lg", "border", "border-[var(--border)]",
        "bg-[var(--surface)]", "px-3", "py-2", "text-sm",
        "focus:outline-none", "focus:border-[var(--primary)]"
    );
    let label_classes = classes!("text-xs", "font-semibold", "text-[var(--muted)]", "uppercase");

    html! {
        <div class={classes!(
            "fixed", "inset-0", "z-[100]",
            "flex", "items-center", "justify-center",
            "bg-black/40", "backdrop-blur-sm", "p-4"
        )}>
            <div
                class={classes!(
                    "relative", "w-full", "max-w-2xl", "max-h-[90vh]", "overflow-y-auto",
                    "rounded-2xl", "bg-[var(--surface)]", "p-6", "shadow-2xl"
                )}
                role="dialog"
                aria-modal="true"
                aria-label={props.mode.title("Project")}
            >
                <h2 class={classes!("mb-4", "text-lg", "font-semibold", "text-[var(--text)]")}>
                    { props.mode.title("Project") }
                </h2>
                <form onsubmit={on_submit} class={classes!("space-y-4")}>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Title" }</label>
                        <input type="text" class={input_classes.clone()}
                            value={draft.title.clone()} oninput={on_title} required=true />
                    </div>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Description" }</label>
                        <textarea class={input_classes.clone()} rows="3"
                            value={draft.description.clone()} oninput={on_description} required=true />
                    </div>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Image URL" }</label>
                        <input type="text" class={input_classes.clone()}
                            value={draft.image.clone()} oninput={on_image} required=true />
                    </div>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Tags" }</label>
                        <div class={classes!("flex", "gap-2")}>
                            <input type="text" class={input_classes.clone()}
                                placeholder="Add a tag"
                                value={(*tag_input).clone()} oninput={on_tag_input} />
                            <button type="button"
                                class={classes!(
                                    "rounded-lg", "border", "border-[var(--border)]",
                                    "px-4", "text-sm", "hover:bg-[var(--surface-alt)]"
                                )}
                                onclick={add_tag}>
                                { "Add" }
                            </button>
                        </div>
                        <div class={classes!("flex", "flex-wrap", "gap-2", "pt-1")}>
                            { for draft.tags.iter().enumerate().map(|(index, tag)| {
                                let remove_tag = remove_tag.clone();
                                let onclick = Callback::from(move |_| remove_tag.emit(index));
                                html! {
                                    <span class={classes!(
                                        "inline-flex", "items-center", "gap-1",
                                        "rounded-full", "bg-[var(--surface-alt)]",
                                        "px-3", "py-1", "text-xs"
                                    )}>
                                        { tag.clone() }
                                        <button type="button" aria-label={format!("Remove tag {tag}")}
                                            onclick={onclick}>{ "×" }</button>
                                    </span>
                                }
                            }) }
                        </div>
                    </div>
                    <div class={classes!("grid", "grid-cols-1", "sm:grid-cols-2", "gap-4")}>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "GitHub URL" }</label>
                            <input type="text" class={input_classes.clone()}
                                value={draft.github.clone()} oninput={on_github} />
                        </div>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Demo URL" }</label>
                            <input type="text" class={input_classes.clone()}
                                value={draft.demo.clone()} oninput={on_demo} />
                        </div>
                    </div>

                    <h3 class={classes!("pt-2", "text-sm", "font-semibold", "text-[var(--text)]")}>
                        { "Case Study" }
                    </h3>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Challenge" }</label>
                        <textarea class={input_classes.clone()} rows="2"
                            value={draft.case_study.challenge.clone()} oninput={on_challenge} />
                    </div>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Solution" }</label>
                        <textarea class={input_classes.clone()} rows="2"
                            value={draft.case_study.solution.clone()} oninput={on_solution} />
                    </div>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Outcome" }</label>
                        <textarea class={input_classes.clone()} rows="2"
                            value={draft.case_study.outcome.clone()} oninput={on_outcome} />
                    </div>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Tech Stack" }</label>
                        <div class={classes!("flex", "gap-2")}>
                            <input type="text" class={input_classes.clone()}
                                placeholder="Add a technology"
                                value={(*tech_input).clone()} oninput={on_tech_input} />
                            <button type="button"
                                class={classes!(
                                    "rounded-lg", "border", "border-[var(--border)]",
                                    "px-4", "text-sm", "hover:bg-[var(--surface-alt)]"
                                )}
                                onclick={add_tech}>
                                { "Add" }
                            </button>
                        </div>
                        <div class={classes!("flex", "flex-wrap", "gap-2", "pt-1")}>
                            { for draft.case_study.tech_stack.iter().enumerate().map(|(index, entry)| {
                                let remove_tech = remove_tech.clone();
                                let onclick = Callback::from(move |_| remove_tech.emit(index));
                                html! {
                                    <span class={classes!(
                                        "inline-flex", "items-center", "gap-1",
                                        "rounded-full", "bg-[var(--surface-alt)]",
                                        "px-3", "py-1", "text-xs"
                                    )}>
                                        { entry.clone() }
                                        <button type="button" aria-label={format!("Remove {entry}")}
                                            onclick={onclick}>{ "×" }</button>
                                    </span>
                                }
                            }) }
                        </div>
                    </div>

                    <div class={classes!("flex", "justify-end", "gap-3", "pt-2")}>
                        <button type="button"
                            class={classes!(
                                "rounded-lg", "border", "border-[var(--border)]",
                                "px-4", "py-2", "text-sm", "font-medium",
                                "hover:bg-[var(--surface-alt)]"
                            )}
                            disabled={props.submitting}
                            onclick={on_cancel}>
                            { "Cancel" }
                        </button>
                        <button type="submit"
                            class={classes!(
                                "rounded-lg", "bg-[var(--primary)]", "text-white",
                                "px-4", "py-2", "text-sm", "font-medium",
                                "disabled:opacity-50"
                            )}
                            disabled={props.submitting}>
                            { props.mode.submit_label(props.submitting) }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
