//! ContextSwitcher - dropdown for jumping between sibling entities
//! (e.g. applications of the same workspace).

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitcherItem {
    pub key: String,
    pub name: String,
}

#[component]
pub fn ContextSwitcher(
    /// Menu entries in display order.
    #[prop(into)]
    items: Signal<Vec<SwitcherItem>>,
    /// Key of the entity currently shown.
    #[prop(into)]
    selected: Signal<String>,
    /// Fired with the key of the clicked entry.
    #[prop(into)]
    on_select: Callback<String>,
    /// Trailing content under the entries (e.g. a "create" action).
    #[prop(optional, into)]
    footer: Option<ViewFn>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let selected_name = move || {
        let key = selected.get();
        items
            .get()
            .into_iter()
            .find(|item| item.key == key)
            .map(|item| item.name)
            .unwrap_or(key)
    };

    let choose = move |key: String| {
        is_open.set(false);
        on_select.run(key);
    };

    view! {
        <div class="context-switcher">
            <button
                class="context-switcher__trigger"
                aria-haspopup="menu"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <span class="context-switcher__trigger-text">{selected_name}</span>
                {move || if is_open.get() {
                    icon("chevron-up")
                } else {
                    icon("chevron-down")
                }}
            </button>

            <Show when=move || is_open.get()>
                <div class="context-switcher__menu" role="menu">
                    <For
                        each=move || items.get()
                        key=|item| item.key.clone()
                        children=move |item| {
                            let key = item.key.clone();
                            let is_active = {
                                let key = key.clone();
                                move || selected.get() == key
                            };
                            view! {
                                <button
                                    class="context-switcher__item"
                                    class:context-switcher__item--active=is_active
                                    role="menuitem"
                                    on:click=move |_| choose(key.clone())
                                >
                                    {item.name}
                                </button>
                            }
                        }
                    />
                    {footer.clone().map(|f| view! {
                        <div class="context-switcher__footer">{f.run()}</div>
                    })}
                </div>
            </Show>
        </div>
    }
}
