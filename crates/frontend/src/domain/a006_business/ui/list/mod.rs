mod state;

use contracts::domain::a006_business::Business;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use thaw::*;

use super::form::BusinessForm;
use crate::shared::browser::confirm_delete;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::option_select::{plain_options, OptionSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::data::store::{remove_logged, use_store};
use crate::shared::icons::icon;
use crate::shared::list_utils::SortableHeaderCell;
use state::create_state;

#[component]
pub fn BusinessListPanel() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let state = create_state(store.page_size());
    let editing: RwSignal<Option<Option<Business>>> = RwSignal::new(None);
    let filters_open = RwSignal::new(true);

    let search_signal = RwSignal::new(String::new());
    let category_signal = RwSignal::new(String::new());
    let verified_signal = RwSignal::new(false);

    let refresh_view = move || {
        store
            .businesses
            .with_untracked(|b| state.update(|s| s.refresh(b.items())));
    };

    Effect::new(move |_| {
        store.businesses.track();
        refresh_view();
    });

    let apply_filters = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.category = category_signal.get_untracked();
            s.verified_only = verified_signal.get_untracked();
            s.paging.page = 0;
        });
        refresh_view();
    };

    let reset_filters = move || {
        leptos::logging::log!("[BusinessList] Filters reset");
        search_signal.set(String::new());
        category_signal.set(String::new());
        verified_signal.set(false);
        apply_filters();
    };

    let toggle_sort = Callback::new(move |field: &'static str| {
        state.update(|s| s.paging.toggle_sort(field));
        refresh_view();
    });

    let go_to_page = move |page: usize| {
        state.update(|s| s.paging.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.paging.set_page_size(size));
        refresh_view();
    };

    let toggle_verified = move |id: RecordId| {
        store.businesses.update(|b| {
            if let Err(e) = b.modify(id, Business::toggle_verified) {
                log::warn!("{e}");
            }
        });
    };

    let delete_business = move |id: RecordId, name: String| {
        if confirm_delete("Business", &name) {
            remove_logged(store.businesses, id);
        }
    };

    let category_options =
        Signal::derive(move || store.categories.with(|c| plain_options(c.names())));
    let verified_count = move || store.businesses.with(|b| b.count_where(|x| x.is_verified));

    let sort_field = Signal::derive(move || state.with(|s| s.paging.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.paging.sort_ascending));
    let page_size_options = config.lists.page_size_options.clone();

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">"Businesses"</h1>
                <Badge>{move || state.with(|s| s.paging.total_count).to_string()}</Badge>
            </div>
            <div class="page__header-right">
                <span class="badge badge--success">{move || format!("Verified: {}", verified_count())}</span>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Add Business"
                </Button>
            </div>
        </div>

        <div class="page__content">
            <FilterPanel
                is_expanded=filters_open
                active_filters_count=Signal::derive(move || state.with(|s| s.active_filters_count()))
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.paging.page))
                        total_pages=Signal::derive(move || state.with(|s| s.paging.total_pages))
                        total_count=Signal::derive(move || state.with(|s| s.paging.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.paging.page_size))
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                        page_size_options=page_size_options.clone()
                    />
                }
                filter_tags=move || {
                    let (category, verified) = state.with(|s| (s.category.clone(), s.verified_only));
                    view! {
                        {(!category.is_empty()).then(|| view! {
                            <FilterTag
                                label=format!("Category: {category}")
                                on_remove=Callback::new(move |_| {
                                    category_signal.set(String::new());
                                    apply_filters();
                                })
                            />
                        })}
                        {verified.then(|| view! {
                            <FilterTag
                                label="Verified only"
                                on_remove=Callback::new(move |_| {
                                    verified_signal.set(false);
                                    apply_filters();
                                })
                            />
                        })}
                    }
                }
            >
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 300px;">
                        <Input value=search_signal placeholder="Name, location or description..." />
                    </div>
                    <div style="width: 190px;">
                        <OptionSelect value=category_signal options=category_options any_label="All categories" />
                    </div>
                    <Checkbox checked=verified_signal label="Verified only" />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                        "Find"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_filters()>
                        "Reset"
                    </Button>
                </Flex>
            </FilterPanel>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Business" field="name" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=200.0 />
                            <SortableHeaderCell label="Category" field="category" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=170.0 />
                            <SortableHeaderCell label="Location" field="location" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                            <TableHeaderCell resizable=false min_width=150.0>"Contact"</TableHeaderCell>
                            <SortableHeaderCell label="Rating" field="rating" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=140.0 />
                            <SortableHeaderCell label="Verified" field="is_verified" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                            <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = state.with(|s| s.items.clone());
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="7">
                                            <div class="table__empty">"No businesses match the filters"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|b| {
                                    let id = b.id;
                                    let name = b.name.clone();
                                    let for_edit = b.clone();
                                    let verify_title = if b.is_verified { "Revoke verification" } else { "Verify" };
                                    let stars = b.stars();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{b.name.clone()}</span>
                                                    <div class="table__sub">{b.description.clone()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {b.category.clone()}
                                                    <div class="table__sub">{b.sub_category.clone()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{b.location.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {b.phone.clone()}
                                                    <div class="table__sub">{b.email.clone()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class="rating" title=format!("{:.1}", b.rating)>{stars}</span>
                                                <span class="table__sub">{format!(" ({})", b.review_count)}</span>
                                            </TableCell>
                                            <TableCell>
                                                {if b.is_verified {
                                                    view! { <span class="badge badge--success">"Verified"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge--neutral">"Unverified"</span> }.into_any()
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                        attr:title="Edit"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| toggle_verified(id)
                                                        attr:title=verify_title
                                                    >
                                                        {icon("check")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete_business(id, name.clone())
                                                        attr:title="Delete"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            {move || editing.get().map(|business| view! {
                <BusinessForm business=business on_close=Callback::new(move |_| editing.set(None)) />
            })}
        </div>
    }
}
