mod state;

use contracts::domain::a001_user::{User, UserDto, UserRole, UserStatus};
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use thaw::*;

use super::form::{UserFields, UserForm};
use super::{role_badge_class, status_badge_class};
use crate::shared::browser::confirm_delete;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::option_select::{choice_options, OptionSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::data::store::{remove_logged, use_store};
use crate::shared::icons::icon;
use crate::shared::list_utils::SortableHeaderCell;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

/// What the user modal is editing
#[derive(Clone)]
enum EditTarget {
    New,
    Existing(User),
}

#[component]
pub fn UserList() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let state = create_state(store.page_size());
    let editor: RwSignal<Option<EditTarget>> = RwSignal::new(None);
    let filters_open = RwSignal::new(true);

    let search_signal = RwSignal::new(String::new());
    let role_signal = RwSignal::new(String::new());
    let status_signal = RwSignal::new(String::new());

    let refresh_view = move || {
        store
            .users
            .with_untracked(|users| state.update(|s| s.refresh(users.items())));
    };

    // Re-run whenever the collection changes, including edits from other pages.
    Effect::new(move |_| {
        store.users.track();
        refresh_view();
    });

    let apply_filters = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.role = role_signal.get_untracked();
            s.status = status_signal.get_untracked();
            s.paging.page = 0;
        });
        refresh_view();
    };

    let reset_filters = move || {
        leptos::logging::log!("[UserList] Filters reset");
        search_signal.set(String::new());
        role_signal.set(String::new());
        status_signal.set(String::new());
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

    let toggle_status = move |id: RecordId| {
        store.users.update(|users| {
            if let Err(e) = users.modify(id, User::toggle_status) {
                log::warn!("{e}");
            }
        });
    };

    let delete_user = move |id: RecordId, name: String| {
        if confirm_delete("User", &name) {
            remove_logged(store.users, id);
        }
    };

    let sort_field = Signal::derive(move || state.with(|s| s.paging.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.paging.sort_ascending));
    let page_size_options = config.lists.page_size_options.clone();

    let count_badge = move |role: UserRole| {
        let count = store.users.with(|u| u.count_where(|x| x.role == role));
        format!("{}: {}", role.label(), count)
    };

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Management"</h1>
                    <Badge>{move || state.with(|s| s.paging.total_count).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__header-stat">{move || count_badge(UserRole::Admin)}</span>
                    <span class="page__header-stat">{move || count_badge(UserRole::Counsellor)}</span>
                    <span class="page__header-stat">{move || count_badge(UserRole::Devotee)}</span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editor.set(Some(EditTarget::New))
                    >
                        {icon("plus")}
                        " Add User"
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
                        let (query, role, status) =
                            state.with(|s| (s.search_query.clone(), s.role.clone(), s.status.clone()));
                        view! {
                            {(!query.is_empty()).then(|| view! {
                                <FilterTag
                                    label=format!("Search: {query}")
                                    on_remove=Callback::new(move |_| {
                                        search_signal.set(String::new());
                                        apply_filters();
                                    })
                                />
                            })}
                            {UserRole::from_code(&role).map(|r| view! {
                                <FilterTag
                                    label=format!("Role: {}", r.label())
                                    on_remove=Callback::new(move |_| {
                                        role_signal.set(String::new());
                                        apply_filters();
                                    })
                                />
                            })}
                            {UserStatus::from_code(&status).map(|st| view! {
                                <FilterTag
                                    label=format!("Status: {}", st.label())
                                    on_remove=Callback::new(move |_| {
                                        status_signal.set(String::new());
                                        apply_filters();
                                    })
                                />
                            })}
                        }
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search_signal placeholder="Name, phone or email..." />
                        </div>
                        <div style="width: 160px;">
                            <OptionSelect
                                value=role_signal
                                options={choice_options::<UserRole>()}
                                any_label="All roles"
                            />
                        </div>
                        <div style="width: 160px;">
                            <OptionSelect
                                value=status_signal
                                options={choice_options::<UserStatus>()}
                                any_label="All statuses"
                            />
                        </div>
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
                                <SortableHeaderCell label="Name" field="name" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=160.0 />
                                <SortableHeaderCell label="Role" field="role" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Phone" field="phone" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=140.0 />
                                <SortableHeaderCell label="Email" field="email" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=180.0 />
                                <SortableHeaderCell label="Status" field="status" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Created" field="created_on" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
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
                                                <div class="table__empty">"No users match the filters"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|user| {
                                        let id = user.id;
                                        let name = user.name.clone();
                                        let for_edit = user.clone();
                                        let toggle_title = if user.is_active() { "Deactivate" } else { "Activate" };
                                        let created = config.format_date(user.created_on);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{user.name.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class=role_badge_class(user.role)>{user.role.label()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{user.phone.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class=status_badge_class(user.status)>{user.status.label()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{created}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| editor.set(Some(EditTarget::Existing(for_edit.clone())))
                                                            attr:title="Edit"
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| toggle_status(id)
                                                            attr:title=toggle_title
                                                        >
                                                            {icon("shield")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| delete_user(id, name.clone())
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

                {move || editor.get().map(|target| view! {
                    <UserEditor target=target on_close=Callback::new(move |_| editor.set(None)) />
                })}
            </div>
        </PageFrame>
    }
}

#[component]
fn UserEditor(target: EditTarget, on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let (title, dto, id) = match &target {
        EditTarget::New => ("Add User".to_string(), UserDto::default(), None),
        EditTarget::Existing(user) => (
            format!("Edit {}", user.name),
            UserDto::from_user(user),
            Some(user.id),
        ),
    };
    let form = UserForm::new(&dto);
    let error = RwSignal::new(None::<String>);

    let on_save = Callback::new(move |_: ()| {
        let dto = form.to_dto();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        match id {
            None => {
                let today = config.today();
                let mut new_id = RecordId::default();
                store.users.update(|users| {
                    new_id = users.insert(dto.into_user(&config.app.created_by, today));
                });
                log::info!("user #{new_id} created");
            }
            Some(id) => {
                let mut result = Ok(());
                store.users.update(|users| result = users.modify(id, |u| dto.apply_to(u)));
                if let Err(e) = result {
                    error.set(Some(e.to_string()));
                    return;
                }
                log::info!("user #{id} updated");
            }
        }
        on_close.run(());
    });

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    "Save"
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <UserFields form=form />
        </Modal>
    }
}
