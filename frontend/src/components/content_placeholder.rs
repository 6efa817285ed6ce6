use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentPlaceholderProps {
    pub title: String,
    #[prop_or_default]
    pub message: Option<String>,
}

/// Shown on public pages whose section has no published content yet.
#[function_component(ContentPlaceholder)]
pub fn content_placeholder(props: &ContentPlaceholderProps) -> Html {
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| "Content for this section is on the way. Check back soon.".to_string());

    html! {
        <div class={classes!(
            "flex",
            "flex-col",
            "items-center",
            "justify-center",
            "gap-3",
            "rounded-2xl",
            "border",
            "border-dashed",
            "border-[var(--border)]",
            "bg-[var(--surface)]",
            "px-8",
            "py-16",
            "text-center"
        )}>
            <span class="text-4xl" aria-hidden="true">{"🚧"}</span>
            <h2 class={classes!("text-xl", "font-semibold", "text-[var(--text)]")}>
                { props.title.clone() }
            </h2>
            <p class={classes!("max-w-md", "text-sm", "text-[var(--muted)]")}>{ message }</p>
        </div>
    }
}
