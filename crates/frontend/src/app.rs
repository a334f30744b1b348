use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_spare_part::ui::list::SparePartList;
use crate::shared::config::UiConfig;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    SpareParts,
    Categories,
}

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    // Components read timeouts and delays from context.
    provide_context(config);

    let section = RwSignal::new(Section::SpareParts);
    let tab = move |target: Section, label: &'static str| {
        view! {
            <button
                class=move || if section.get() == target { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                on:click=move |_| section.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="app">
            <nav class="tabs">
                {tab(Section::SpareParts, "Spare Parts")}
                {tab(Section::Categories, "Categories")}
            </nav>
            {move || match section.get() {
                Section::SpareParts => view! { <SparePartList /> }.into_any(),
                Section::Categories => view! { <CategoryList /> }.into_any(),
            }}
        </div>
    }
}
