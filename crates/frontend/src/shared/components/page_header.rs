use leptos::prelude::*;

/// Title row shared by list and form pages; children land on the right.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
