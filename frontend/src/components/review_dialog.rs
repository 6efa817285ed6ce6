use portfolio_shared::Review;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{events::InputEvent, prelude::*};

use crate::components::{star_rating::StarRating, DialogMode};

#[derive(Properties, PartialEq)]
pub struct ReviewDialogProps {
    pub open: bool,
    pub mode: DialogMode,
    #[prop_or_default]
    pub entity: Option<Review>,
    #[prop_or(false)]
    pub submitting: bool,
    pub on_save: Callback<Review>,
    pub on_close: Callback<()>,
}

fn empty_review() -> Review {
    Review {
        id: 0,
        name: String::new(),
        role: String::new(),
        company: None,
        image: String::new(),
        rating: 5,
        text: String::new(),
        date: String::new(),
        featured: false,
    }
}

#[function_component(ReviewDialog)]
pub fn review_dialog(props: &ReviewDialogProps) -> Html {
    let draft = use_state(empty_review);

    {
        let draft = draft.clone();
        let entity = props.entity.clone();
        use_effect_with(
            (props.entity.clone(), props.mode, props.open),
            move |(_, mode, open)| {
                if *open {
                    let next = match (mode, entity) {
                        (DialogMode::Edit, Some(existing)) => existing,
                        _ => empty_review(),
                    };
                    draft.set(next);
                }
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let edit_field = |apply: fn(&mut Review, String)| {
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

    let on_name = edit_field(|r, v| r.name = v);
    let on_role = edit_field(|r, v| r.role = v);
    let on_image = edit_field(|r, v| r.image = v);
    let on_text = edit_field(|r, v| r.text = v);
    let on_date = edit_field(|r, v| r.date = v);
    // Blank company collapses to None so the public page can skip it.
    let on_company = edit_field(|r, v| {
        let trimmed = v.trim();
        r.company = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    });

    let on_rating = {
        let draft = draft.clone();
        Callback::from(move |rating: u8| {
            let mut next = (*draft).clone();
            next.rating = rating;
            draft.set(next);
        })
    };

    let on_featured = {
        let draft = draft.clone();
        Callback::from(move |_: Event| {
            let mut next = (*draft).clone();
            next.featured = !next.featured;
            draft.set(next);
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
                    "relative", "w-full", "max-w-xl", "max-h-[90vh]", "overflow-y-auto",
                    "rounded-2xl", "bg-[var(--surface)]", "p-6", "shadow-2xl"
                )}
                role="dialog"
                aria-modal="true"
                aria-label={props.mode.title("Review")}
            >
                <h2 class={classes!("mb-4", "text-lg", "font-semibold", "text-[var(--text)]")}>
                    { props.mode.title("Review") }
                </h2>
                <form onsubmit={on_submit} class={classes!("space-y-4")}>
                    <div class={classes!("grid", "grid-cols-1", "sm:grid-cols-2", "gap-4")}>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Name" }</label>
                            <input type="text" class={input_classes.clone()}
                                value={draft.name.clone()} oninput={on_name} required=true />
                        </div>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Role" }</label>
                            <input type="text" class={input_classes.clone()}
                                value={draft.role.clone()} oninput={on_role} required=true />
                        </div>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Company (optional)" }</label>
                            <input type="text" class={input_classes.clone()}
                                value={draft.company.clone().unwrap_or_default()} oninput={on_company} />
                        </div>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Photo URL" }</label>
                            <input type="text" class={input_classes.clone()}
                                value={draft.image.clone()} oninput={on_image} required=true />
                        </div>
                    </div>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Rating" }</label>
                        <StarRating rating={draft.rating} on_change={on_rating} />
                    </div>
                    <div class="space-y-1">
                        <label class={label_classes.clone()}>{ "Review" }</label>
                        <textarea class={input_classes.clone()} rows="4"
                            value={draft.text.clone()} oninput={on_text} required=true />
                    </div>
                    <div class={classes!("grid", "grid-cols-1", "sm:grid-cols-2", "gap-4", "items-end")}>
                        <div class="space-y-1">
                            <label class={label_classes.clone()}>{ "Date" }</label>
                            <input type="text" class={input_classes.clone()}
                                placeholder="March 2025"
                                value={draft.date.clone()} oninput={on_date} />
                        </div>
                        <label class={classes!("flex", "items-center", "gap-2", "text-sm", "pb-2")}>
                            <input type="checkbox" checked={draft.featured} onchange={on_featured} />
                            { "Feature on the public site" }
                        </label>
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
