use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn px(self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 36,
            SpinnerSize::Large => 52,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    #[prop_or(false)]
    pub fullscreen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let px = props.size.px();
    let ring_style = format!(
        "width:{px}px;height:{px}px;border-width:{}px;",
        (px / 10).max(2)
    );

    let spinner = html! {
        <div class={classes!("flex", "items-center", "justify-center", "p-6")} role="status" aria-busy="true">
            <span
                style={ring_style}
                class={classes!(
                    "inline-block",
                    "rounded-full",
                    "border-solid",
                    "border-[var(--primary)]",
                    "border-t-transparent",
                    "animate-spin"
                )}
            />
            <span class="sr-only">{ "Loading..." }</span>
        </div>
    };

    if props.fullscreen {
        html! {
            <div class={classes!(
                "fixed", "inset-0", "z-40",
                "flex", "items-center", "justify-center",
                "bg-black/30", "dark:bg-black/60"
            )}>
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
