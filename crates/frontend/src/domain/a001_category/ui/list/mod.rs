use crate::domain::a001_category::ui::details::CategoryFormModal;
use crate::shared::action::{action, ActionFuture};
use crate::shared::config::UiConfig;
use crate::shared::icons::icon;
use crate::shared::notice::{Notice, NoticeBanner};
use contracts::domain::a001_category::{Category, CategoryDto, CategoryId};
use leptos::prelude::*;

fn seed_categories() -> Vec<Category> {
    let phones = Category::from_dto(
        CategoryId::new_v4(),
        &CategoryDto {
            name: "Phone Parts".to_string(),
            icon: Some("📱".to_string()),
            ..CategoryDto::default()
        },
    );
    let screens = Category::from_dto(
        CategoryId::new_v4(),
        &CategoryDto {
            name: "Screens".to_string(),
            parent_id: Some(phones.id),
            color: "#10B981".to_string(),
            sort_order: 1,
            ..CategoryDto::default()
        },
    );
    let tools = Category::from_dto(
        CategoryId::new_v4(),
        &CategoryDto {
            name: "Tools".to_string(),
            color: "#6B7280".to_string(),
            sort_order: 2,
            ..CategoryDto::default()
        },
    );
    vec![phones, screens, tools]
}

/// Category list. Owns the category collection and supplies the modal callbacks.
#[component]
pub fn CategoryList() -> impl IntoView {
    let timeout = use_context::<UiConfig>().unwrap_or_default().notice_timeout_ms;
    let notice = Notice::new(timeout);
    let categories = RwSignal::new(seed_categories());
    let is_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Category>);

    let open_create = move || {
        editing.set(None);
        is_open.set(true);
    };
    let open_edit = move |category: Category| {
        editing.set(Some(category));
        is_open.set(true);
    };

    let on_close = Callback::new(move |_| is_open.set(false));

    let on_submit = Callback::new(move |dto: CategoryDto| -> ActionFuture<()> {
        action(async move {
            match editing.get_untracked() {
                Some(existing) => {
                    categories.update(|list| {
                        if let Some(c) = list.iter_mut().find(|c| c.id == existing.id) {
                            c.apply(&dto);
                        }
                    });
                    notice.success("Category updated successfully");
                }
                None => {
                    let category = Category::from_dto(CategoryId::new_v4(), &dto);
                    log::info!("Category created: {}", category.id);
                    categories.update(|list| list.push(category));
                    notice.success("Category created successfully");
                }
            }
            is_open.set(false);
        })
    });

    // Refuses to orphan subcategories, so the failure path is reachable.
    let on_delete = Callback::new(move |id: CategoryId| -> ActionFuture<Result<(), String>> {
        action(async move {
            let has_children =
                categories.with_untracked(|list| list.iter().any(|c| c.parent_id == Some(id)));
            if has_children {
                notice.error("Category has subcategories and cannot be deleted");
                return Err(format!("category {} has subcategories", id));
            }
            categories.update(|list| list.retain(|c| c.id != id));
            notice.success("Category deleted");
            Ok(())
        })
    });

    let parent_name = move |parent: Option<CategoryId>| {
        parent
            .and_then(|id| {
                categories.with(|list| list.iter().find(|c| c.id == id).map(|c| c.name.clone()))
            })
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Categories"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        {icon("plus")}
                        "New Category"
                    </button>
                </div>
            </div>

            <NoticeBanner notice=notice />

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Parent"</th>
                        <th>"Color"</th>
                        <th>"Active"</th>
                        <th>"Order"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || {
                            let mut list = categories.get();
                            list.sort_by_key(|c| c.sort_order);
                            list
                        }
                        key=|c| (c.id, c.metadata.version)
                        children=move |c| {
                            let row = c.clone();
                            view! {
                                <tr>
                                    <td>{c.icon.clone().unwrap_or_default()} " " {c.name.clone()}</td>
                                    <td>{parent_name(c.parent_id)}</td>
                                    <td>
                                        <span class="color-swatch color-swatch--small" style=format!("background-color: {};", c.color)></span>
                                    </td>
                                    <td>{if c.is_active { "Yes" } else { "No" }}</td>
                                    <td>{c.sort_order}</td>
                                    <td>
                                        <button
                                            class="button button--ghost"
                                            on:click=move |_| open_edit(row.clone())
                                        >
                                            {icon("edit")}
                                            "Edit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <CategoryFormModal
                is_open=is_open
                category=editing
                parent_categories=categories
                on_close=on_close
                on_submit=on_submit
                on_delete=on_delete
            />
        </div>
    }
}
