use super::view_model::{CategoryFormVm, DeleteStep};
use crate::shared::action::ActionFuture;
use crate::shared::components::FieldError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_category::aggregate::{DESCRIPTION_MAX, ICON_INPUT_MAX, NAME_MAX};
use contracts::domain::a001_category::{Category, CategoryDto, CategoryId, COLOR_OPTIONS, DEFAULT_COLOR};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Category create/edit modal.
///
/// Rendered only while `is_open`; each opening starts from the category
/// passed in (or a blank form) and locks page scrolling until closed.
#[component]
pub fn CategoryFormModal(
    #[prop(into)] is_open: Signal<bool>,
    /// Category being edited; `None` creates a new one
    #[prop(into)]
    category: Signal<Option<Category>>,
    /// Candidates for the parent select
    #[prop(into)]
    parent_categories: Signal<Vec<Category>>,
    on_close: Callback<()>,
    on_submit: Callback<CategoryDto, ActionFuture<()>>,
    #[prop(optional)] on_delete: Option<Callback<CategoryId, ActionFuture<Result<(), String>>>>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            {move || {
                let vm = CategoryFormVm::new(category.get_untracked());
                view! {
                    <CategoryFormBody
                        vm=vm
                        parent_categories=parent_categories
                        on_close=on_close
                        on_submit=on_submit
                        on_delete=on_delete
                    />
                }
            }}
        </Show>
    }
}

#[component]
fn CategoryFormBody(
    vm: CategoryFormVm,
    parent_categories: Signal<Vec<Category>>,
    on_close: Callback<()>,
    on_submit: Callback<CategoryDto, ActionFuture<()>>,
    on_delete: Option<Callback<CategoryId, ActionFuture<Result<(), String>>>>,
) -> impl IntoView {
    let is_edit = vm.is_edit_mode();
    let is_busy = vm.is_busy();
    let title = Signal::derive(move || {
        if is_edit.get() {
            "Edit Category".to_string()
        } else {
            "Create Category".to_string()
        }
    });
    let not_busy = Signal::derive(move || !is_busy.get());

    // A category cannot be its own parent.
    let parent_options = move || {
        let own_id = vm.editing.with(|c| c.as_ref().map(|c| c.id));
        parent_categories
            .get()
            .into_iter()
            .filter(|c| Some(c.id) != own_id)
            .collect::<Vec<_>>()
    };

    let name_error = vm.field_error("name");
    let description_error = vm.field_error("description");
    let color_error = vm.field_error("color");
    let icon_error = vm.field_error("icon");

    view! {
        <ModalFrame title=title on_close=on_close can_close=not_busy modal_class="category-modal".to_string()>
            <form
                id="category-form"
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command(on_submit);
                }
            >
                {move || {
                    let step = vm.delete_step.get();
                    step.is_confirming().then(|| {
                        let name = vm.editing.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default());
                        view! {
                            <div class="warning-box warning-box--error">
                                <h4>"Delete Category?"</h4>
                                <p>
                                    {format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", name)}
                                    " Products using this category will have their category cleared."
                                </p>
                                <div class="details-actions">
                                    <button
                                        type="button"
                                        class="button button--danger"
                                        disabled=move || is_busy.get()
                                        on:click=move |_| {
                                            if let Some(on_delete) = on_delete {
                                                vm.delete_command(on_delete, on_close);
                                            }
                                        }
                                    >
                                        {if step == DeleteStep::Deleting { "Deleting..." } else { "Yes, Delete" }}
                                    </button>
                                    <button
                                        type="button"
                                        class="button button--secondary"
                                        disabled=move || is_busy.get()
                                        on:click=move |_| vm.cancel_delete()
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                }}

                <h3 class="form-section__title">"Basic Information"</h3>

                <div class="form-group">
                    <label for="category-name">"Category Name " <span class="required">"*"</span></label>
                    <input
                        type="text"
                        id="category-name"
                        class=("input--error", move || name_error.with(Option::is_some))
                        maxlength=NAME_MAX.to_string()
                        placeholder="Enter category name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError error=name_error />
                </div>

                <div class="form-group">
                    <label for="category-description">"Description " <span class="hint">"(optional)"</span></label>
                    <textarea
                        id="category-description"
                        rows="3"
                        maxlength=DESCRIPTION_MAX.to_string()
                        placeholder="Enter category description"
                        prop:value=move || vm.form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.description = Some(value));
                        }
                    />
                    <div class="form-group__footer">
                        <FieldError error=description_error />
                        <span class="char-counter">
                            {move || format!(
                                "{}/{} characters",
                                vm.form.with(|f| f.description.as_deref().map(|d| d.chars().count()).unwrap_or(0)),
                                DESCRIPTION_MAX,
                            )}
                        </span>
                    </div>
                </div>

                {move || {
                    let options = parent_options();
                    (!options.is_empty()).then(|| view! {
                        <div class="form-group">
                            <label for="category-parent">"Parent Category " <span class="hint">"(optional)"</span></label>
                            <select
                                id="category-parent"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.parent_id = CategoryId::from_string(&value).ok());
                                }
                            >
                                <option value="" selected=move || vm.form.with(|f| f.parent_id.is_none())>
                                    "No parent (root category)"
                                </option>
                                {options.into_iter().map(|c| {
                                    let id = c.id;
                                    view! {
                                        <option
                                            value=id.as_string()
                                            selected=move || vm.form.with(|f| f.parent_id == Some(id))
                                        >
                                            {c.name}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                    })
                }}

                <h3 class="form-section__title">"Appearance"</h3>

                <div class="form-row">
                    <div class="form-group">
                        <label for="category-color">"Category Color"</label>
                        <div class="color-field">
                            <select
                                id="category-color"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.color = value);
                                }
                            >
                                {COLOR_OPTIONS.iter().map(|opt| {
                                    let value = opt.value;
                                    view! {
                                        <option value=value selected=move || vm.form.with(|f| f.color.eq_ignore_ascii_case(value))>
                                            {opt.label}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                            <div
                                class="color-swatch"
                                style=move || {
                                    let color = vm.form.with(|f| f.color.clone());
                                    let color = if color.is_empty() { DEFAULT_COLOR.to_string() } else { color };
                                    format!("background-color: {};", color)
                                }
                            ></div>
                        </div>
                        <FieldError error=color_error />
                    </div>

                    <div class="form-group">
                        <label for="category-icon">"Category Icon"</label>
                        <div class="icon-field">
                            <input
                                type="text"
                                id="category-icon"
                                maxlength=ICON_INPUT_MAX.to_string()
                                placeholder="Type an emoji icon"
                                prop:value=move || vm.form.with(|f| f.icon.clone().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.icon = Some(value));
                                }
                            />
                            {move || vm.form.with(|f| f.icon.clone()).filter(|i| !i.is_empty()).map(|i| view! {
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    on:click=move |_| vm.form.update(|f| f.icon = None)
                                >
                                    "Clear"
                                </button>
                                <span class="icon-preview">"Preview: " {i}</span>
                            })}
                        </div>
                        <FieldError error=icon_error />
                    </div>
                </div>

                <h3 class="form-section__title">"Settings"</h3>

                <div class="form-row">
                    <div class="form-group">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.with(|f| f.is_active)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    vm.form.update(|f| f.is_active = checked);
                                }
                            />
                            " Active"
                        </label>
                    </div>
                    <div class="form-group">
                        <label for="category-sort-order">"Sort Order"</label>
                        <input
                            type="number"
                            id="category-sort-order"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.sort_order.to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.sort_order = value.trim().parse().unwrap_or(0));
                            }
                        />
                    </div>
                </div>

                <div class="details-actions">
                    {move || (is_edit.get() && on_delete.is_some()).then(|| view! {
                        <button
                            type="button"
                            class="button button--danger"
                            disabled=move || is_busy.get()
                            on:click=move |_| {
                                if let Some(on_delete) = on_delete {
                                    vm.delete_command(on_delete, on_close);
                                }
                            }
                        >
                            {icon("delete")}
                            "Delete"
                        </button>
                    })}
                    <button
                        type="button"
                        class="button button--secondary"
                        disabled=move || is_busy.get()
                        on:click=move |_| vm.cancel_command(on_close)
                    >
                        {icon("cancel")}
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || is_busy.get()>
                        {icon("save")}
                        {move || match (vm.submitting.get(), is_edit.get()) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Category",
                            (false, false) => "Create Category",
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
