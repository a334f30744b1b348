use super::view_model::{status_class, StockAdjustVm};
use crate::shared::config::UiConfig;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notice::NoticeBanner;
use contracts::domain::a002_spare_part::{
    AdjustmentKind, SparePart, StockAdjustment, StockStatus, REASON_OPTIONS,
};
use leptos::prelude::*;

/// Modal for adding, removing or setting the stock of one spare part.
///
/// The modal only validates and reports the request through `on_adjust`;
/// applying it, closing and refreshing are the caller's job.
#[component]
pub fn SparePartStockAdjustModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] spare_part: Signal<Option<SparePart>>,
    on_close: Callback<()>,
    on_adjust: Callback<StockAdjustment>,
) -> impl IntoView {
    let timeout = use_context::<UiConfig>().unwrap_or_default().notice_timeout_ms;
    let vm = StockAdjustVm::new(timeout);

    Effect::new(move |_| {
        let open = is_open.get();
        let part_id = spare_part.with(|p| p.as_ref().map(|p| p.id));
        vm.observe_open(open, part_id);
    });

    view! {
        <Show when=move || is_open.get() && spare_part.with(Option::is_some)>
            <ModalFrame title="Adjust Stock Level".to_string() on_close=on_close modal_class="stock-adjust-modal".to_string()>
                {move || spare_part.get().map(|part| view! {
                    <AdjustForm vm=vm part=part on_close=on_close on_adjust=on_adjust />
                })}
            </ModalFrame>
        </Show>
    }
}

#[component]
fn AdjustForm(
    vm: StockAdjustVm,
    part: SparePart,
    on_close: Callback<()>,
    on_adjust: Callback<StockAdjustment>,
) -> impl IntoView {
    let current = part.quantity;
    let min_quantity = part.min_quantity;
    let max_quantity = part.max_quantity;
    let draft = vm.draft;
    let new_level = vm.new_level(current);
    let current_status = StockStatus::classify(current, min_quantity, max_quantity);
    let new_status =
        Signal::derive(move || StockStatus::classify(new_level.get(), min_quantity, max_quantity));

    let kind_button = move |kind: AdjustmentKind, icon_name: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    let active = draft.with(|d| d.kind == kind);
                    format!(
                        "mode-button mode-button--{}{}",
                        kind.as_str(),
                        if active { " mode-button--active" } else { "" },
                    )
                }
                on:click=move |_| draft.update(|d| d.kind = kind)
            >
                {icon(icon_name)}
                {kind.label()}
            </button>
        }
    };

    view! {
        <div class="stock-adjust">
            <p class="stock-adjust__subtitle">
                {if part.part_number.is_empty() {
                    part.name.clone()
                } else {
                    format!("{} ({})", part.name, part.part_number)
                }}
            </p>

            <NoticeBanner notice=vm.notice />

            <section class="stock-summary">
                <h4>"Current Stock"</h4>
                <div class="stock-summary__grid">
                    <div class="stat">
                        <div class="stat__value stat__value--primary">{current}</div>
                        <div class="stat__label">"Current Stock"</div>
                    </div>
                    <div class="stat">
                        <div class="stat__value">{min_quantity}</div>
                        <div class="stat__label">"Min Level"</div>
                    </div>
                    <div class="stat">
                        <div class="stat__value">
                            {max_quantity.map(|m| m.to_string()).unwrap_or_else(|| "N/A".to_string())}
                        </div>
                        <div class="stat__label">"Max Level"</div>
                    </div>
                </div>
                <span class=status_class(current_status)>{current_status.label()}</span>
            </section>

            <section class="details-form">
                <h4>"Adjustment Details"</h4>

                <div class="form-group">
                    <label>"Adjustment Type *"</label>
                    <div class="mode-buttons">
                        {kind_button(AdjustmentKind::In, "trending-up")}
                        {kind_button(AdjustmentKind::Out, "trending-down")}
                        {kind_button(AdjustmentKind::Set, "settings")}
                    </div>
                </div>

                <div class="form-group">
                    <label for="adjust-quantity">"Quantity *"</label>
                    <div class="stepper">
                        <button
                            type="button"
                            class="stepper__button"
                            disabled=move || draft.with(|d| !d.can_decrement())
                            on:click=move |_| draft.update(|d| d.decrement())
                        >
                            {icon("minus")}
                        </button>
                        <input
                            id="adjust-quantity"
                            type="number"
                            min="0"
                            step="1"
                            placeholder="0"
                            prop:value=move || draft.with(|d| d.quantity_text())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.set_quantity_input(&value));
                            }
                        />
                        <button
                            type="button"
                            class="stepper__button"
                            on:click=move |_| draft.update(|d| d.increment())
                        >
                            {icon("plus")}
                        </button>
                    </div>
                    <p class="hint">{move || draft.with(|d| d.kind.hint())}</p>
                </div>

                <div class="form-group">
                    <label for="adjust-reason">"Reason *"</label>
                    <select
                        id="adjust-reason"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.reason = value);
                        }
                    >
                        <option value="" selected=move || draft.with(|d| d.reason.is_empty())>
                            "Select reason"
                        </option>
                        {REASON_OPTIONS.iter().map(|opt| {
                            let label = opt.label;
                            view! {
                                <option value=label selected=move || draft.with(|d| d.reason == label)>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                {move || draft.with(|d| d.is_other_reason()).then(|| view! {
                    <div class="form-group">
                        <label for="adjust-custom-reason">"Specify Reason"</label>
                        <input
                            id="adjust-custom-reason"
                            type="text"
                            placeholder="Describe the reason"
                            prop:value=move || draft.with(|d| d.custom_reason.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.custom_reason = value);
                            }
                        />
                    </div>
                })}

                <div class="form-group">
                    <label for="adjust-notes">"Notes (Optional)"</label>
                    <textarea
                        id="adjust-notes"
                        rows="3"
                        placeholder="Additional notes about this adjustment"
                        prop:value=move || draft.with(|d| d.notes.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.notes = value);
                        }
                    />
                </div>
            </section>

            <section class="stock-preview">
                <h4>"Preview"</h4>
                <div class="stock-preview__grid">
                    <div class="stat">
                        <div class="stat__label">"Current Stock"</div>
                        <div class="stat__value">{current}</div>
                        <span class=status_class(current_status)>{current_status.label()}</span>
                    </div>
                    <div class="stat">
                        <div class="stat__label">"New Stock"</div>
                        <div class="stat__value">{move || new_level.get()}</div>
                        <span class=move || status_class(new_status.get())>
                            {move || new_status.get().label()}
                        </span>
                    </div>
                </div>
                <div class=move || format!("stock-preview__delta stock-preview__delta--{}", draft.with(|d| d.kind.as_str()))>
                    {move || draft.with(|d| d.kind.delta_label(d.preview_quantity()))}
                </div>
            </section>

            <div class="details-actions">
                <button
                    type="button"
                    class="button button--primary"
                    on:click=move |_| vm.submit_command(current, on_adjust)
                >
                    "Apply Adjustment"
                </button>
                <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
