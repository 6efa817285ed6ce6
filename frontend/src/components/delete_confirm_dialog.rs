use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteConfirmDialogProps {
    pub open: bool,
    /// Human-readable name of the record about to be deleted.
    pub target: String,
    #[prop_or(false)]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(DeleteConfirmDialog)]
pub fn delete_confirm_dialog(props: &DeleteConfirmDialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_backdrop = {
        let cb = props.on_cancel.clone();
        let busy = props.busy;
        Callback::from(move |_: MouseEvent| {
            if !busy {
                cb.emit(());
            }
        })
    };

    html! {
        <div class={classes!(
            "fixed", "inset-0", "z-[100]",
            "flex", "items-center", "justify-center",
            "bg-black/40", "backdrop-blur-sm"
        )}>
            <div class={classes!("absolute", "inset-0")} onclick={on_backdrop} />
            <div
                class={classes!(
                    "relative",
                    "w-full",
                    "max-w-md",
                    "rounded-2xl",
                    "bg-[var(--surface)]",
                    "p-6",
                    "shadow-2xl",
                    "space-y-4"
                )}
                role="alertdialog"
                aria-modal="true"
                aria-label="Confirm deletion"
            >
                <h2 class={classes!("text-lg", "font-semibold", "text-[var(--text)]")}>
                    { "Delete this record?" }
                </h2>
                <p class={classes!("text-sm", "text-[var(--muted)]")}>
                    { format!("\"{}\" will be removed permanently. This cannot be undone.", props.target) }
                </p>
                <div class={classes!("flex", "justify-end", "gap-3")}>
                    <button
                        type="button"
                        class={classes!(
                            "rounded-lg", "border", "border-[var(--border)]",
                            "px-4", "py-2", "text-sm", "font-medium",
                            "hover:bg-[var(--surface-alt)]"
                        )}
                        disabled={props.busy}
                        onclick={on_cancel}
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="button"
                        class={classes!(
                            "rounded-lg", "bg-red-600", "text-white",
                            "px-4", "py-2", "text-sm", "font-medium",
                            "hover:bg-red-700",
                            "disabled:opacity-50"
                        )}
                        disabled={props.busy}
                        onclick={on_confirm}
                    >
                        { if props.busy { "Deleting..." } else { "Delete" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
