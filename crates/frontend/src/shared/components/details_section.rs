use leptos::prelude::*;

/// Titled block inside a details page.
#[component]
pub fn DetailsSection(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="details-section">
            <div class="details-section__header">
                <h3 class="details-section__title">{title}</h3>
                {description.map(|d| view! { <p class="details-section__description">{d}</p> })}
            </div>
            <div class="details-section__content">{children()}</div>
        </section>
    }
}
