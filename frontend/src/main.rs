//! Yew frontend for the portfolio site and its admin panel.

mod api;
mod auth;
mod components;
mod pages;
mod router;
mod search;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
