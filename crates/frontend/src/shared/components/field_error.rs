use leptos::prelude::*;

/// Message rendered under a form field, when there is one.
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|e| view! { <p class="field-error">{e}</p> })
}
