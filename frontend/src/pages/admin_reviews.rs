use portfolio_shared::Review;
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};

use crate::{
    api,
    components::{
        auth_guard::AuthGuard,
        delete_confirm_dialog::DeleteConfirmDialog,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        review_dialog::ReviewDialog,
        star_rating::StarRating,
        toast::{Toast, ToastKind},
        DialogMode,
    },
    search,
};

#[function_component(AdminReviewsPage)]
pub fn admin_reviews_page() -> Html {
    html! {
        <AuthGuard>
            <ReviewsAdmin />
        </AuthGuard>
    }
}

#[function_component(ReviewsAdmin)]
fn reviews_admin() -> Html {
    let reviews = use_state(Vec::<Review>::new);
    let loading = use_state(|| true);
    let query = use_state(String::new);

    let dialog_open = use_state(|| false);
    let dialog_mode = use_state(|| DialogMode::Add);
    let selected = use_state(|| None::<Review>);
    let submitting = use_state(|| false);

    let delete_target = use_state(|| None::<Review>);
    let deleting = use_state(|| false);

    let toast = use_state(|| None::<(String, ToastKind)>);

    {
        let reviews = reviews.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_reviews().await {
                    Ok(items) => reviews.set(items),
                    Err(err) => {
                        toast.set(Some((
                            format!("Failed to load reviews: {err}"),
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
        Callback::from(move |review: Review| {
            selected.set(Some(review));
            dialog_mode.set(DialogMode::Edit);
            dialog_open.set(true);
        })
    };

    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |()| dialog_open.set(false))
    };

    let on_save = {
        let reviews = reviews.clone();
        let dialog_open = dialog_open.clone();
        let dialog_mode = dialog_mode.clone();
        let submitting = submitting.clone();
        let toast = toast.clone();
        Callback::from(move |draft: Review| {
            let reviews = reviews.clone();
            let dialog_open = dialog_open.clone();
            let mode = *dialog_mode;
            let submitting = submitting.clone();
            let toast = toast.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match mode {
                    DialogMode::Add => api::create_review(draft).await,
                    DialogMode::Edit => api::update_review(draft).await,
                };
                match result {
                    Ok(saved) => {
                        let mut next = (*reviews).clone();
                        if let Some(existing) = next.iter_mut().find(|r| r.id == saved.id) {
                            *existing = saved;
                        } else {
                            next.push(saved);
                        }
                        reviews.set(next);
                        toast.set(Some(("Review saved.".to_string(), ToastKind::Success)));
                        dialog_open.set(false);
                    },
                    Err(err) => {
                        toast.set(Some((
                            format!("Saving the review failed: {err}"),
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
        Callback::from(move |review: Review| delete_target.set(Some(review)))
    };

    let cancel_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |()| delete_target.set(None))
    };

    let confirm_delete = {
        let reviews = reviews.clone();
        let delete_target = delete_target.clone();
        let deleting = deleting.clone();
        let toast = toast.clone();
        Callback::from(move |()| {
            let Some(target) = (*delete_target).clone() else {
                return;
            };
            let reviews = reviews.clone();
            let delete_target = delete_target.clone();
            let deleting = deleting.clone();
            let toast = toast.clone();
            deleting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_review(target.id).await {
                    Ok(()) => {
                        let next: Vec<Review> = reviews
                            .iter()
                            .filter(|r| r.id != target.id)
                            .cloned()
                            .collect();
                        reviews.set(next);
                        toast.set(Some(("Review deleted.".to_string(), ToastKind::Success)));
                    },
                    Err(err) => {
                        toast.set(Some((
                            format!("Deleting the review failed: {err}"),
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

    let filtered: Vec<Review> = reviews
        .iter()
        .filter(|r| search::review_matches(r, &query))
        .cloned()
        .collect();

    html! {
        <main class={classes!("max-w-6xl", "mx-auto", "px-4", "py-12", "space-y-6")}>
            <header class={classes!("flex", "flex-wrap", "items-center", "gap-4")}>
                <h1 class={classes!("text-3xl", "font-bold", "text-[var(--text)]")}>
                    { "Manage Reviews" }
                </h1>
                <button
                    type="button"
                    class={classes!(
                        "ml-auto", "rounded-lg", "bg-[var(--primary)]", "text-white",
                        "px-4", "py-2", "text-sm", "font-medium"
                    )}
                    onclick={open_add}
                >
                    { "Add Review" }
                </button>
            </header>

            <input
                type="search"
                placeholder="Search by name, role, company or text"
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
                    { if reviews.is_empty() {
                        "No reviews yet. Add the first one."
                    } else {
                        "No reviews match this search."
                    } }
                </p>
            } else {
                <ul class={classes!("space-y-3")}>
                    { for filtered.iter().map(|review| {
                        let edit = {
                            let open_edit = open_edit.clone();
                            let review = review.clone();
                            Callback::from(move |_: MouseEvent| open_edit.emit(review.clone()))
                        };
                        let delete = {
                            let request_delete = request_delete.clone();
                            let review = review.clone();
                            Callback::from(move |_: MouseEvent| request_delete.emit(review.clone()))
                        };
                        html! {
                            <li class={classes!(
                                "flex", "items-center", "gap-4",
                                "rounded-xl", "border", "border-[var(--border)]",
                                "bg-[var(--surface)]", "px-5", "py-4"
                            )}>
                                <div class={classes!("flex-1", "min-w-0", "space-y-1")}>
                                    <div class={classes!("flex", "items-center", "gap-2")}>
                                        <p class={classes!("font-medium", "text-[var(--text)]", "truncate")}>
                                            { review.name.clone() }
                                        </p>
                                        if review.featured {
                                            <span class={classes!(
                                                "rounded-full", "bg-[var(--primary)]/10",
                                                "px-2", "py-0.5", "text-xs", "font-semibold",
                                                "text-[var(--primary)]"
                                            )}>
                                                { "Featured" }
                                            </span>
                                        }
                                    </div>
                                    <p class={classes!("text-xs", "text-[var(--muted)]", "truncate")}>
                                        { review.role.clone() }
                                        if let Some(company) = &review.company {
                                            { format!(" · {company}") }
                                        }
                                    </p>
                                    <StarRating rating={review.rating} />
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

            <ReviewDialog
                open={*dialog_open}
                mode={*dialog_mode}
                entity={(*selected).clone()}
                submitting={*submitting}
                on_save={on_save}
                on_close={close_dialog}
            />
            <DeleteConfirmDialog
                open={delete_target.is_some()}
                target={delete_target.as_ref().map(|r| r.name.clone()).unwrap_or_default()}
                busy={*deleting}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </main>
    }
}
