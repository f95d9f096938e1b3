use contracts::domain::a006_business::{Category, CategoryCatalog};
use contracts::domain::common::{RecordId, ValidationResult};
use leptos::prelude::*;
use thaw::*;

use crate::shared::browser::{alert, confirm_delete};
use crate::shared::data::store::use_store;
use crate::shared::icons::icon;

/// Adds the typed category and clears the input. On failure the input is
/// left as typed.
pub fn submit_new_category(
    catalog: &mut CategoryCatalog,
    input: &mut String,
) -> ValidationResult<RecordId> {
    let id = catalog.add_category(input)?;
    input.clear();
    Ok(id)
}

/// Removes a sub-category once `confirmed` approves its name.
/// `None` when the user backs out or the sub-category is gone.
pub fn remove_sub_category_confirmed(
    catalog: &mut CategoryCatalog,
    category_id: RecordId,
    sub_id: RecordId,
    confirmed: impl FnOnce(&str) -> bool,
) -> Option<ValidationResult> {
    let name = catalog
        .get(category_id)?
        .sub_categories
        .iter()
        .find(|s| s.id == sub_id)?
        .name
        .clone();
    confirmed(&name).then(|| catalog.remove_sub_category(category_id, sub_id))
}

/// Runs a catalogue edit and reports a failure with an alert.
fn edit_catalog<T>(
    catalog: RwSignal<CategoryCatalog>,
    what: &str,
    f: impl FnOnce(&mut CategoryCatalog) -> ValidationResult<T>,
) -> Option<T> {
    let mut result = None;
    catalog.update(|c| result = Some(f(c)));
    match result? {
        Ok(value) => {
            log::info!("category catalogue: {what}");
            Some(value)
        }
        Err(e) => {
            alert(&e.to_string());
            None
        }
    }
}

#[component]
pub fn CategoriesPanel() -> impl IntoView {
    let store = use_store();
    let new_name = RwSignal::new(String::new());

    let add_category = move || {
        let mut input = new_name.get_untracked();
        let added = edit_catalog(store.categories, "category added", |c| {
            submit_new_category(c, &mut input)
        });
        if added.is_some() {
            new_name.set(input);
        }
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">"Categories"</h1>
                <Badge>{move || store.categories.with(|c| c.categories().len()).to_string()}</Badge>
            </div>
        </div>

        <div class="page__content">
            <div class="filter-panel">
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=new_name placeholder="New category name" />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| add_category()>
                            {icon("plus")}
                            " Add Category"
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="category-grid">
                {move || {
                    store
                        .categories
                        .with(|c| c.categories().to_vec())
                        .into_iter()
                        .map(|category| view! { <CategoryCard category=category /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let store = use_store();
    let id = category.id;
    let editing = RwSignal::new(false);
    let rename_value = RwSignal::new(category.name.clone());
    let sub_name = RwSignal::new(String::new());
    let name = category.name.clone();

    let rename = move || {
        let value = rename_value.get_untracked();
        if edit_catalog(store.categories, "category renamed", |c| c.rename_category(id, &value)).is_some() {
            editing.set(false);
        }
    };

    let remove = move |name: String| {
        if confirm_delete("Category", &name) {
            edit_catalog(store.categories, "category removed", |c| c.remove_category(id));
        }
    };

    let add_sub = move || {
        let value = sub_name.get_untracked();
        if edit_catalog(store.categories, "sub-category added", |c| c.add_sub_category(id, &value)).is_some() {
            sub_name.set(String::new());
        }
    };

    let remove_sub = move |sub_id: RecordId| {
        let mut catalog = store.categories.get_untracked();
        let result = remove_sub_category_confirmed(&mut catalog, id, sub_id, |name| {
            confirm_delete("Sub-category", name)
        });
        match result {
            Some(Ok(())) => {
                store.categories.set(catalog);
                log::info!("category catalogue: sub-category removed");
            }
            Some(Err(e)) => alert(&e.to_string()),
            None => {}
        }
    };

    let count_name = category.name.clone();
    let business_count = Signal::derive(move || {
        store
            .businesses
            .with(|b| b.count_where(|x| x.category.eq_ignore_ascii_case(&count_name)))
    });

    view! {
        <div class="category-card">
            <div class="category-card__header">
                {move || if editing.get() {
                    view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Input value=rename_value />
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| rename()>
                                {icon("check")}
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(false)>
                                {icon("x")}
                            </Button>
                        </Flex>
                    }
                    .into_any()
                } else {
                    let name = name.clone();
                    let name_for_remove = name.clone();
                    view! {
                        <h3 class="category-card__title">{name}</h3>
                        <span class="badge badge--neutral">
                            {move || format!("{} businesses", business_count.get())}
                        </span>
                        <div class="table__actions">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| editing.set(true)
                                attr:title="Rename"
                            >
                                {icon("edit")}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| remove(name_for_remove.clone())
                                attr:title="Delete"
                            >
                                {icon("trash")}
                            </Button>
                        </div>
                    }
                    .into_any()
                }}
            </div>

            <div class="category-card__subs">
                {category
                    .sub_categories
                    .iter()
                    .map(|sub| {
                        let sub_id = sub.id;
                        view! {
                            <span class="chip">
                                {sub.name.clone()}
                                <span class="chip__remove" on:click=move |_| remove_sub(sub_id)>
                                    {icon("x")}
                                </span>
                            </span>
                        }
                    })
                    .collect_view()}
                {category.sub_categories.is_empty().then(|| view! {
                    <span class="table__sub">"No sub-categories yet"</span>
                })}
            </div>

            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="flex: 1;">
                    <Input value=sub_name placeholder="New sub-category" />
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| add_sub()>
                    {icon("plus")}
                </Button>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_business::seed;

    #[test]
    fn test_add_category_appends_one_and_clears_input() {
        let mut catalog = CategoryCatalog::from_seed(seed::categories());
        let before = catalog.categories().len();
        let mut input = "Transport".to_string();

        let id = submit_new_category(&mut catalog, &mut input).unwrap();

        assert_eq!(catalog.categories().len(), before + 1);
        assert_eq!(catalog.get(id).map(|c| c.name.as_str()), Some("Transport"));
        assert!(input.is_empty());
    }

    #[test]
    fn test_rejected_category_keeps_input() {
        let mut catalog = CategoryCatalog::from_seed(seed::categories());
        let before = catalog.categories().len();
        let mut input = "retail".to_string();

        assert!(submit_new_category(&mut catalog, &mut input).is_err());
        assert_eq!(catalog.categories().len(), before);
        assert_eq!(input, "retail");

        let mut blank = "   ".to_string();
        assert!(submit_new_category(&mut catalog, &mut blank).is_err());
        assert_eq!(catalog.categories().len(), before);
    }

    #[test]
    fn test_sub_category_removed_only_when_confirmed() {
        let mut catalog = CategoryCatalog::from_seed(seed::categories());
        let category = catalog
            .categories()
            .iter()
            .find(|c| !c.sub_categories.is_empty())
            .cloned()
            .unwrap();
        let sub = category.sub_categories[0].clone();

        let mut asked = String::new();
        let declined = remove_sub_category_confirmed(&mut catalog, category.id, sub.id, |name| {
            asked = name.to_string();
            false
        });
        assert_eq!(declined, None);
        assert_eq!(asked, sub.name);
        assert_eq!(
            catalog.get(category.id).map(|c| c.sub_categories.len()),
            Some(category.sub_categories.len())
        );

        let accepted = remove_sub_category_confirmed(&mut catalog, category.id, sub.id, |_| true);
        assert_eq!(accepted, Some(Ok(())));
        assert!(!catalog
            .get(category.id)
            .is_some_and(|c| c.sub_categories.iter().any(|s| s.id == sub.id)));

        // Already gone: nothing to confirm.
        assert_eq!(
            remove_sub_category_confirmed(&mut catalog, category.id, sub.id, |_| true),
            None
        );
    }
}
