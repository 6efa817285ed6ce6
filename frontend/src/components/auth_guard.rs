use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth,
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub children: Children,
}

/// Wraps admin pages. Verifies the stored token once on mount; while the
/// check is in flight a spinner renders instead of the protected content,
/// and a failed check redirects to the login page.
#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let verified = use_state(|| None::<bool>);
    let navigator = use_navigator();

    {
        let verified = verified.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let ok = auth::check_auth().await;
                verified.set(Some(ok));
            });
        });
    }

    {
        let navigator = navigator.clone();
        use_effect_with(*verified, move |verified| {
            if *verified == Some(false) {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::AdminLogin);
                }
            }
        });
    }

    match *verified {
        Some(true) => html! { <>{ props.children.clone() }</> },
        // Redirect is in flight; keep the spinner up so the page never flashes.
        Some(false) | None => html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen=true /> },
    }
}
