use js_sys::Date;
use portfolio_shared::{Milestone, OngoingProject};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{events::InputEvent, prelude::*};

use crate::components::DialogMode;

#[derive(Properties, PartialEq)]
pub struct OngoingProjectDialogProps {
    pub open: bool,
    pub mode: DialogMode,
    #[prop_or_default]
    pub entity: Option<OngoingProject>,
    #[prop_or(false)]
    pub submitting: bool,
    pub on_save: Callback<OngoingProject>,
    pub on_close: Callback<()>,
}

/// YYYY-MM-DD for the local date `offset_days` from now.
fn iso_date(offset_days: f64) -> String {
    let d = Date::new(&wasm_bindgen::JsValue::from_f64(
        Date::now() + offset_days * 86_400_000.0,
    ));
    format!(
        "{:04}-{:02}-{:02}",
        d.get_full_year(),
        d.get_month() + 1, // JS months are 0-indexed
        d.get_date(),
    )
}

fn empty_ongoing() -> OngoingProject {
    OngoingProject {
        id: 0,
        title: String::new(),
        description: String::new(),
        image: String::new(),
        tags: vec![],
        progress: 0,
        start_date: iso_date(0.0),
        estimated_completion: iso_date(30.0),
        milestones: vec![],
    }
}

#[function_component(OngoingProjectDialog)]
pub fn ongoing_project_dialog(props: &OngoingProjectDialogProps) -> Html {
    let draft = use_state(empty_ongoing);
    let tag_input = use_state(String::new);
    let milestone_input = use_state(String::new);

    {
        let draft = draft.clone();
        let tag_input = tag_input.clone();
        let milestone_input = milestone_input.clone();
        let entity = props.entity.clone();
        use_effect_with(
            (props.entity.clone(), props.mode, props.open),
            move |(_, mode, open)| {
                if *open {
                    let next = match (mode, entity) {
                        (DialogMode::Edit, Some(existing)) => existing,
                        _ => empty_ongoing(),
                    };
                    draft.set(next);
                    tag_input.set(String::new());
                    milestone_input.set(String::new());
                }
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let edit_field = |apply: fn(&mut OngoingProject, String)| {
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
    let on_start_date = edit_field(|p, v| p.start_date = v);
    let on_completion = edit_field(|p, v| p.estimated_completion = v);
    // Out-of-range input is clamped here so the slider and the number field
    // can never push the draft past 100.
    let on_progress = edit_field(|p, v| {
        p.progress = v.parse::<u16>().unwrap_or(0).min(100) as u8;
    });

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

    let on_milestone_input = {
        let milestone_input = milestone_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                milestone_input.set(target.value());
            }
        })
    };
    let add_milestone = {
        let draft = draft.clone();
        let milestone_input = milestone_input.clone();
        Callback::from(move |_: MouseEvent| {
            let title = milestone_input.trim().to_string();
            if title.is_empty() {
                return;
            }
            let mut next = (*draft).clone();
            next.milestones.push(Milestone {
                title,
                completed: false,
            });
            draft.set(next);
            milestone_input.set(String::new());
        })
    };
    let toggle_milestone = {
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            let mut next = (*draft).clone();
            if let Some(milestone) = next.milestones.get_mut(index) {
                milestone.completed = !milestone.completed;
                draft.set(next);
            }
        })
    };
    let remove_milestone = {
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            let mut next = (*draft).clone();
            if index < next.milestones.len() {
                next.milestones.remove(index);
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
                aria-label={props.mode.title("Ongoing Project")}
            >
                <h2 class={classes!("mb-4", "text-lg", "font-semibold", "text-[var(--text)]")}>
                    { props.mode.title("Ongoing Project") }
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
                    <div class={classes!("grid", "grid-cols-1", "sm:grid-cols-3", "gap-4")}>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Progress (%)" }</label>
                            <input type="number" min="0" max="100" class={input_classes.clone()}
                                value={draft.progress.to_string()} oninput={on_progress} />
                        </div>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Start Date" }</label>
                            <input type="date" class={input_classes.clone()}
                                value={draft.start_date.clone()} oninput={on_start_date} required=true />
                        </div>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Est. Completion" }</label>
                            <input type="date" class={input_classes.clone()}
                                value={draft.estimated_completion.clone()} oninput={on_completion} required=true />
                        </div>
                    </div>

                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Milestones" }</label>
                        <div class={classes!("flex", "gap-2")}>
                            <input type="text" class={input_classes.clone()}
                                placeholder="Add a milestone"
                                value={(*milestone_input).clone()} oninput={on_milestone_input} />
                            <button type="button"
                                class={classes!(
                                    "rounded-lg", "border", "border-[var(--border)]",
                                    "px-4", "text-sm", "hover:bg-[var(--surface-alt)]"
                                )}
                                onclick={add_milestone}>
                                { "Add" }
                            </button>
                        </div>
                        <ul class={classes!("space-y-2", "pt-1")}>
                            { for draft.milestones.iter().enumerate().map(|(index, milestone)| {
                                let toggle = {
                                    let toggle_milestone = toggle_milestone.clone();
                                    Callback::from(move |_| toggle_milestone.emit(index))
                                };
                                let remove = {
                                    let remove_milestone = remove_milestone.clone();
                                    Callback::from(move |_| remove_milestone.emit(index))
                                };
                                html! {
                                    <li class={classes!(
                                        "flex", "items-center", "gap-3",
                                        "rounded-lg", "border", "border-[var(--border)]",
                                        "px-3", "py-2", "text-sm"
                                    )}>
                                        <input type="checkbox"
                                            checked={milestone.completed}
                                            onchange={toggle} />
                                        <span class={classes!(
                                            "flex-1",
                                            if milestone.completed { "line-through text-[var(--muted)]" } else { "" }
                                        )}>
                                            { milestone.title.clone() }
                                        </span>
                                        <button type="button"
                                            aria-label={format!("Remove milestone {}", milestone.title)}
                                            onclick={remove}>
                                            { "×" }
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
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
