use super::type_ahead::{KeyAction, TypeAheadState};
use crate::shared::components::FieldError;
use crate::shared::config::UiConfig;
use crate::shared::icons::icon;
use contracts::domain::a002_spare_part::{
    SparePartCondition, SparePartInfoDto, SpareTypeOption, SupplierOption, DESCRIPTION_BRIEF_MAX,
    DESCRIPTION_EXPANDED_MAX,
};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Information fields of a spare part.
///
/// The form signal and the error map belong to the caller; only the
/// type-ahead and description presentation state are local.
#[component]
pub fn SparePartInformationForm(
    form: RwSignal<SparePartInfoDto>,
    #[prop(into)] suppliers: Signal<Vec<SupplierOption>>,
    /// Field name -> message, rendered next to the field
    #[prop(into)]
    errors: Signal<BTreeMap<String, String>>,
    #[prop(into)] spare_types: Signal<Vec<SpareTypeOption>>,
    /// Stock on hand, shown for context only
    #[prop(optional, into)]
    quantity: Option<Signal<u32>>,
) -> impl IntoView {
    let error_for = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).cloned()))
    };
    let name_error = error_for("name");
    let description_error = error_for("description");
    let condition_error = error_for("condition");

    view! {
        <div class="details-section spare-part-info">
            <div class="details-section__header">
                {icon("package")}
                <h3>"Spare Part Information"</h3>
                {quantity.map(|q| view! {
                    <span class="details-section__meta">{move || format!("In stock: {}", q.get())}</span>
                })}
            </div>
            <form class="details-form" on:submit=|ev| ev.prevent_default()>
                <div class="form-row">
                    <div class="form-group">
                        <label for="spare-part-name" class=("label--error", move || name_error.with(Option::is_some))>
                            "Part Name *"
                        </label>
                        <input
                            id="spare-part-name"
                            type="text"
                            required
                            class=("input--error", move || name_error.with(Option::is_some))
                            placeholder="e.g., iPhone 14 Screen"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError error=name_error />
                    </div>

                    <SpareTypeInput form=form spare_types=spare_types error=error_for("spareType") />

                    <div class="form-group">
                        <label for="brand">"Brand"</label>
                        <input
                            id="brand"
                            type="text"
                            placeholder="e.g., Apple, Samsung"
                            prop:value=move || form.with(|f| f.brand.clone())
                            on:input=move |ev| form.update(|f| f.brand = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="supplier">"Supplier"</label>
                        <div class="input-with-icon">
                            {icon("building")}
                            <select
                                id="supplier"
                                on:change=move |ev| form.update(|f| f.supplier_id = event_target_value(&ev))
                            >
                                <option value="" selected=move || form.with(|f| f.supplier_id.is_empty())>
                                    "Select Supplier"
                                </option>
                                <For
                                    each=move || suppliers.get()
                                    key=|s| s.id.clone()
                                    children=move |s| {
                                        let id = s.id.clone();
                                        let selected = move || form.with(|f| f.supplier_id == id);
                                        view! { <option value=s.id selected=selected>{s.name}</option> }
                                    }
                                />
                            </select>
                        </div>
                    </div>
                </div>

                <div class="form-group">
                    <label class=("label--error", move || condition_error.with(Option::is_some))>"Condition *"</label>
                    <div class="segmented">
                        {SparePartCondition::ALL.into_iter().map(|condition| view! {
                            <button
                                type="button"
                                class=move || {
                                    let active = form.with(|f| f.condition == condition);
                                    format!(
                                        "segmented__option segmented__option--{}{}",
                                        condition.as_str(),
                                        if active { " segmented__option--active" } else { "" },
                                    )
                                }
                                on:click=move |_| form.update(|f| f.condition = condition)
                            >
                                {condition.label()}
                            </button>
                        }).collect_view()}
                    </div>
                    <FieldError error=condition_error />
                </div>

                <DescriptionInput form=form error=description_error />
            </form>
        </div>
    }
}

#[component]
fn SpareTypeInput(
    form: RwSignal<SparePartInfoDto>,
    spare_types: Signal<Vec<SpareTypeOption>>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    let blur_delay = use_context::<UiConfig>()
        .unwrap_or_default()
        .suggestion_blur_delay_ms;
    let state = RwSignal::new(TypeAheadState::default());

    let select = move |option: SpareTypeOption| {
        log::debug!("Spare type selected: {}", option.value);
        form.update(|f| f.spare_type = option.value);
        state.update(TypeAheadState::finish);
    };

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let mut cleared = false;
        state.update(|s| cleared = s.input(value));
        if cleared {
            form.update(|f| f.spare_type.clear());
        }
    };

    let on_focus = move |_| {
        let has_selection = form.with_untracked(|f| !f.spare_type.is_empty());
        state.update(|s| s.focus(has_selection));
    };

    // Closing right away would swallow a click on a suggestion.
    let on_blur = move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(blur_delay).await;
            let _ = state.try_update(TypeAheadState::close);
        });
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let action = spare_types.with_untracked(|opts| {
            state.with_untracked(|s| s.key_action(&ev.key(), opts))
        });
        match action {
            KeyAction::Close => state.update(TypeAheadState::close),
            KeyAction::Select(option) => {
                ev.prevent_default();
                select(option);
            }
            KeyAction::Ignore => {}
        }
    };

    let clear = move |_| {
        form.update(|f| f.spare_type.clear());
        state.update(TypeAheadState::finish);
    };

    view! {
        <div class="form-group">
            <label for="spare-type" class=("label--error", move || error.with(Option::is_some))>
                "Spare Type *"
            </label>
            <div class="type-ahead">
                <input
                    id="spare-type"
                    type="text"
                    required
                    autocomplete="off"
                    class=("input--error", move || error.with(Option::is_some))
                    placeholder="Search or select spare type..."
                    prop:value=move || {
                        let selected = form.with(|f| f.spare_type.clone());
                        spare_types.with(|opts| state.with(|s| s.display_text(&selected, opts)))
                    }
                    on:input=on_input
                    on:focus=on_focus
                    on:blur=on_blur
                    on:keydown=on_keydown
                />
                {move || form.with(|f| !f.spare_type.is_empty()).then(|| view! {
                    <button type="button" class="type-ahead__clear" title="Clear" on:click=clear>
                        {icon("x")}
                    </button>
                })}
                {move || {
                    let visible = spare_types.with(|opts| state.with(|s| s.suggestions_visible(opts)));
                    visible.then(|| {
                        let filtered = spare_types.with(|opts| state.with(|s| s.filtered(opts)));
                        view! {
                            <div class="type-ahead__list" role="listbox">
                                {filtered.into_iter().map(|option| {
                                    let value = option.value.clone();
                                    let label = option.label.clone();
                                    let is_selected = Memo::new(move |_| form.with(|f| f.spare_type == value));
                                    view! {
                                        <button
                                            type="button"
                                            role="option"
                                            class=move || if is_selected.get() {
                                                "type-ahead__option type-ahead__option--selected"
                                            } else {
                                                "type-ahead__option"
                                            }
                                            on:mousedown=move |ev: ev::MouseEvent| ev.prevent_default()
                                            on:click=move |_| select(option.clone())
                                        >
                                            <span>{label}</span>
                                            {move || is_selected.get().then(|| icon("check"))}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        }
                    })
                }}
            </div>
            <FieldError error=error />
        </div>
    }
}

/// Single-line input that grows into a textarea while focused.
/// The compact input is capped tighter than the expanded one.
#[component]
fn DescriptionInput(form: RwSignal<SparePartInfoDto>, error: Signal<Option<String>>) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let textarea_ref = NodeRef::<html::Textarea>::new();

    // The textarea replaces the focused input, so focus has to follow it.
    Effect::new(move |_| {
        if let Some(el) = textarea_ref.get() {
            if let Err(e) = el.focus() {
                log::warn!("Failed to focus description: {:?}", e);
            }
        }
    });

    let on_input = move |ev: ev::Event| form.update(|f| f.description = event_target_value(&ev));

    view! {
        <div class="form-group">
            <label for="description" class=("label--error", move || error.with(Option::is_some))>
                "Description (optional)"
            </label>
            <div class="input-with-icon">
                {icon("file-text")}
                {move || if expanded.get() {
                    view! {
                        <textarea
                            id="description"
                            node_ref=textarea_ref
                            rows="4"
                            maxlength=DESCRIPTION_EXPANDED_MAX.to_string()
                            class=("input--error", move || error.with(Option::is_some))
                            placeholder="Describe the spare part, its specifications, and any important details..."
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=on_input
                            on:blur=move |_| expanded.set(false)
                        />
                    }.into_any()
                } else {
                    view! {
                        <input
                            id="description"
                            type="text"
                            maxlength=DESCRIPTION_BRIEF_MAX.to_string()
                            class=("input--error", move || error.with(Option::is_some))
                            placeholder="Brief description..."
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=on_input
                            on:focus=move |_| expanded.set(true)
                        />
                    }.into_any()
                }}
            </div>
            <FieldError error=error />
            {move || expanded.get().then(|| view! {
                <p class="char-counter">
                    {move || format!(
                        "{}/{} characters",
                        form.with(|f| f.description.chars().count()),
                        DESCRIPTION_EXPANDED_MAX,
                    )}
                </p>
            })}
        </div>
    }
}
