use crate::domain::a002_spare_part::ui::information_form::SparePartInformationForm;
use crate::domain::a002_spare_part::ui::stock_adjust::SparePartStockAdjustModal;
use crate::shared::config::UiConfig;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notice::{Notice, NoticeBanner};
use contracts::domain::a002_spare_part::{
    movement_quantity, new_stock_level, SparePart, SparePartCondition, SparePartId,
    SparePartInfoDto, SpareTypeOption, StockAdjustment, SupplierOption,
};
use leptos::prelude::*;
use std::collections::BTreeMap;

fn seed_spare_types() -> Vec<SpareTypeOption> {
    [
        ("screen", "Screen"),
        ("battery", "Battery"),
        ("charging_port", "Charging Port"),
        ("camera", "Camera"),
        ("speaker", "Speaker"),
        ("back_cover", "Back Cover"),
    ]
    .into_iter()
    .map(|(value, label)| SpareTypeOption::new(value, label))
    .collect()
}

fn seed_suppliers() -> Vec<SupplierOption> {
    vec![
        SupplierOption { id: "sup-1".to_string(), name: "Mobile Parts Ltd".to_string() },
        SupplierOption { id: "sup-2".to_string(), name: "Screen World".to_string() },
    ]
}

fn seed_spare_parts() -> Vec<SparePart> {
    vec![
        SparePart {
            id: SparePartId::new_v4(),
            name: "iPhone 14 Screen".to_string(),
            part_number: "SCR-IP14".to_string(),
            spare_type: "screen".to_string(),
            brand: "Apple".to_string(),
            supplier_id: Some("sup-2".to_string()),
            condition: SparePartCondition::New,
            description: String::new(),
            quantity: 10,
            min_quantity: 3,
            max_quantity: Some(40),
        },
        SparePart {
            id: SparePartId::new_v4(),
            name: "Galaxy S22 Battery".to_string(),
            part_number: "BAT-S22".to_string(),
            spare_type: "battery".to_string(),
            brand: "Samsung".to_string(),
            supplier_id: None,
            condition: SparePartCondition::Refurbished,
            description: "Original capacity 3700 mAh".to_string(),
            quantity: 2,
            min_quantity: 2,
            max_quantity: None,
        },
    ]
}

/// Spare part list. Owns the spare parts and applies edits and adjustments
/// requested by the form and the stock modal.
#[component]
pub fn SparePartList() -> impl IntoView {
    let timeout = use_context::<UiConfig>().unwrap_or_default().notice_timeout_ms;
    let notice = Notice::new(timeout);
    let parts = RwSignal::new(seed_spare_parts());
    let spare_types = Signal::stored(seed_spare_types());
    let suppliers = Signal::stored(seed_suppliers());

    // Stock adjustment
    let adjust_open = RwSignal::new(false);
    let adjust_target = RwSignal::new(None::<SparePart>);

    let on_adjust_close = Callback::new(move |_| {
        adjust_open.set(false);
        adjust_target.set(None);
    });

    let on_adjust = Callback::new(move |adjustment: StockAdjustment| {
        let Some(target) = adjust_target.get_untracked() else {
            return;
        };
        let movement = movement_quantity(target.quantity, adjustment.kind, adjustment.quantity);
        parts.update(|list| {
            if let Some(p) = list.iter_mut().find(|p| p.id == target.id) {
                p.quantity = new_stock_level(p.quantity, adjustment.kind, adjustment.quantity);
            }
        });
        log::info!(
            "Stock movement {:+} for {} ({})",
            movement,
            target.name,
            adjustment.notes.as_deref().unwrap_or("no notes")
        );
        notice.success("Stock adjustment completed successfully");
        on_adjust_close.run(());
    });

    // Information editing
    let edit_target = RwSignal::new(None::<SparePartId>);
    let info_form = RwSignal::new(SparePartInfoDto::default());
    let info_errors = RwSignal::new(BTreeMap::<String, String>::new());
    let edit_quantity = Signal::derive(move || {
        let id = edit_target.get();
        parts.with(|list| list.iter().find(|p| Some(p.id) == id).map(|p| p.quantity).unwrap_or(0))
    });

    let open_edit = move |part: &SparePart| {
        info_form.set(SparePartInfoDto::from_spare_part(part));
        info_errors.set(BTreeMap::new());
        edit_target.set(Some(part.id));
    };
    let close_edit = Callback::new(move |_| edit_target.set(None));

    let save_info = move || {
        let info = info_form.get_untracked();
        let errors = info.validate();
        if !errors.is_empty() {
            info_errors.set(errors);
            return;
        }
        let Some(id) = edit_target.get_untracked() else {
            return;
        };
        parts.update(|list| {
            if let Some(p) = list.iter_mut().find(|p| p.id == id) {
                p.apply_info(&info);
            }
        });
        notice.success("Spare part saved");
        close_edit.run(());
    };

    let type_label = move |value: String| {
        spare_types.with(|opts| {
            opts.iter()
                .find(|o| o.value == value)
                .map(|o| o.label.clone())
                .unwrap_or(value)
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Spare Parts"</h1>
                </div>
            </div>

            <NoticeBanner notice=notice />

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Condition"</th>
                        <th>"Stock"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || parts.get()
                        key=|p| (p.id, p.quantity, p.name.clone(), p.spare_type.clone(), p.condition)
                        children=move |p| {
                            let for_edit = p.clone();
                            let for_adjust = p.clone();
                            let status = p.stock_status();
                            view! {
                                <tr>
                                    <td>{p.name.clone()}</td>
                                    <td>{type_label(p.spare_type.clone())}</td>
                                    <td>{p.condition.label()}</td>
                                    <td>{p.quantity}</td>
                                    <td><span class=format!("badge badge--{}", status.label().to_lowercase())>{status.label()}</span></td>
                                    <td>
                                        <button class="button button--ghost" on:click=move |_| open_edit(&for_edit)>
                                            {icon("edit")}
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--secondary"
                                            on:click=move |_| {
                                                adjust_target.set(Some(for_adjust.clone()));
                                                adjust_open.set(true);
                                            }
                                        >
                                            {icon("package")}
                                            "Adjust Stock"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || edit_target.with(Option::is_some)>
                <ModalFrame title="Edit Spare Part".to_string() on_close=close_edit>
                    <SparePartInformationForm
                        form=info_form
                        suppliers=suppliers
                        errors=info_errors
                        spare_types=spare_types
                        quantity=edit_quantity
                    />
                    <div class="details-actions">
                        <button class="button button--primary" on:click=move |_| save_info()>
                            {icon("save")}
                            "Save"
                        </button>
                        <button class="button button--secondary" on:click=move |_| close_edit.run(())>
                            {icon("cancel")}
                            "Cancel"
                        </button>
                    </div>
                </ModalFrame>
            </Show>

            <SparePartStockAdjustModal
                is_open=adjust_open
                spare_part=adjust_target
                on_close=on_adjust_close
                on_adjust=on_adjust
            />
        </div>
    }
}
