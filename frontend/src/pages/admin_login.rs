use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};
use yew_router::prelude::*;

use crate::{api, auth, router::Route};

#[function_component(AdminLoginPage)]
pub fn admin_login_page() -> Html {
    let token = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();

    // Already signed in with a valid token? Skip the form.
    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if auth::check_auth().await {
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.push(&Route::AdminDashboard);
                    }
                }
            });
        });
    }

    let on_token_input = {
        let token = token.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                token.set(target.value());
            }
        })
    };

    let on_submit = {
        let token = token.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let candidate = token.trim().to_string();
            if candidate.is_empty() {
                error.set(Some("Enter the admin token.".to_string()));
                return;
            }
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::check_auth(&candidate).await {
                    Ok(true) => {
                        auth::store_token(&candidate);
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&Route::AdminDashboard);
                        }
                    },
                    Ok(false) => error.set(Some("That token was rejected.".to_string())),
                    Err(err) => error.set(Some(format!("Could not verify the token: {err}"))),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main class={classes!(
            "flex", "items-center", "justify-center", "px-4", "py-24"
        )}>
            <form
                onsubmit={on_submit}
                class={classes!(
                    "w-full", "max-w-sm", "space-y-4",
                    "rounded-2xl", "border", "border-[var(--border)]",
                    "bg-[var(--surface)]", "p-8", "shadow-xl"
                )}
            >
                <h1 class={classes!("text-xl", "font-semibold", "text-[var(--text)]")}>
                    { "Admin Sign In" }
                </h1>
                <p class={classes!("text-sm", "text-[var(--muted)]")}>
                    { "Paste the admin token to manage site content." }
                </p>
                <input
                    type="password"
                    placeholder="Admin token"
                    autocomplete="current-password"
                    class={classes!(
                        "w-full", "rounded-lg", "border", "border-[var(--border)]",
                        "bg-[var(--surface)]", "px-3", "py-2", "text-sm",
                        "focus:outline-none", "focus:border-[var(--primary)]"
                    )}
                    value={(*token).clone()}
                    oninput={on_token_input}
                />
                if let Some(message) = (*error).clone() {
                    <p class={classes!("text-sm", "text-red-600")} role="alert">{ message }</p>
                }
                <button
                    type="submit"
                    class={classes!(
                        "w-full", "rounded-lg", "bg-[var(--primary)]", "text-white",
                        "px-4", "py-2", "text-sm", "font-medium",
                        "disabled:opacity-50"
                    )}
                    disabled={*submitting}
                >
                    { if *submitting { "Checking..." } else { "Sign In" } }
                </button>
            </form>
        </main>
    }
}
