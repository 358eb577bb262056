use leptos::prelude::*;
use thaw::*;

/// Button that stays visible when the user lacks permission, rendered
/// disabled with an explanatory tooltip.
#[component]
pub fn ButtonWithAccessTooltip(
    #[prop(into)] allowed: Signal<bool>,
    #[prop(into)] tooltip: String,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let title = move || (!allowed.get()).then(|| tooltip.clone());

    view! {
        <span class=move || class.get().unwrap_or_default() title=title>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !allowed.get())
                on_click=move |_| {
                    if allowed.get_untracked() {
                        on_click.run(());
                    }
                }
            >
                {children()}
            </Button>
        </span>
    }
}
