use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    /// Current rating, 1 to 5.
    pub rating: u8,
    /// When set, stars become clickable and emit the chosen rating.
    #[prop_or_default]
    pub on_change: Option<Callback<u8>>,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let interactive = props.on_change.is_some();

    html! {
        <div
            class={classes!("flex", "items-center", "gap-1")}
            role={if interactive { "radiogroup" } else { "img" }}
            aria-label={format!("{} out of 5 stars", props.rating)}
        >
            { for (1..=5u8).map(|value| {
                let filled = value <= props.rating;
                let star = if filled { "★" } else { "☆" };
                let color = if filled { "text-amber-400" } else { "text-[var(--muted)]" };
                if let Some(on_change) = props.on_change.clone() {
                    let onclick = Callback::from(move |_| on_change.emit(value));
                    html! {
                        <button
                            type="button"
                            class={classes!("text-xl", color, "hover:scale-110", "transition-transform")}
                            aria-label={format!("Rate {value} stars")}
                            aria-checked={(value == props.rating).to_string()}
                            role="radio"
                            onclick={onclick}
                        >
                            { star }
                        </button>
                    }
                } else {
                    html! {
                        <span class={classes!("text-xl", color)} aria-hidden="true">{ star }</span>
                    }
                }
            }) }
        </div>
    }
}
