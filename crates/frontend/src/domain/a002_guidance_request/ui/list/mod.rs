mod state;

use contracts::domain::a002_guidance_request::{
    GuidanceRequestDto, RequestStatus, RequestType,
};
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use thaw::*;

use super::status_badge_class;
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

pub fn details_href(id: RecordId) -> String {
    format!("/request-details?id={id}")
}

#[component]
pub fn RequestList() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let state = create_state(store.page_size());
    let show_new = RwSignal::new(false);
    let filters_open = RwSignal::new(true);

    let search_signal = RwSignal::new(String::new());
    let type_signal = RwSignal::new(String::new());
    let status_signal = RwSignal::new(String::new());

    let refresh_view = move || {
        store
            .requests
            .with_untracked(|requests| state.update(|s| s.refresh(requests.items())));
    };

    Effect::new(move |_| {
        store.requests.track();
        refresh_view();
    });

    let apply_filters = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.request_type = type_signal.get_untracked();
            s.status = status_signal.get_untracked();
            s.paging.page = 0;
        });
        refresh_view();
    };

    let reset_filters = move || {
        leptos::logging::log!("[RequestList] Filters reset");
        search_signal.set(String::new());
        type_signal.set(String::new());
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

    let delete_request = move |id: RecordId, devotee: String| {
        if confirm_delete("Guidance request", &format!("#{id} from {devotee}")) {
            remove_logged(store.requests, id);
        }
    };

    let status_count = move |status: RequestStatus| {
        store.requests.with(|r| r.count_where(|x| x.status == status))
    };

    let sort_field = Signal::derive(move || state.with(|s| s.paging.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.paging.sort_ascending));
    let page_size_options = config.lists.page_size_options.clone();

    view! {
        <PageFrame page_id="a002_guidance_request--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Guidance Requests"</h1>
                    <Badge>{move || state.with(|s| s.paging.total_count).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="badge badge--warning">
                        {move || format!("Pending: {}", status_count(RequestStatus::Pending))}
                    </span>
                    <span class="badge badge--primary">
                        {move || format!("In progress: {}", status_count(RequestStatus::InProgress))}
                    </span>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_new.set(true)>
                        {icon("plus")}
                        " New Request"
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
                        let (request_type, status) =
                            state.with(|s| (s.request_type.clone(), s.status.clone()));
                        view! {
                            {RequestType::from_code(&request_type).map(|t| view! {
                                <FilterTag
                                    label=format!("Type: {}", t.label())
                                    on_remove=Callback::new(move |_| {
                                        type_signal.set(String::new());
                                        apply_filters();
                                    })
                                />
                            })}
                            {RequestStatus::from_code(&status).map(|st| view! {
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
                            <Input value=search_signal placeholder="Devotee, phone, message or counsellor..." />
                        </div>
                        <div style="width: 160px;">
                            <OptionSelect value=type_signal options={choice_options::<RequestType>()} any_label="All types" />
                        </div>
                        <div style="width: 160px;">
                            <OptionSelect value=status_signal options={choice_options::<RequestStatus>()} any_label="All statuses" />
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
                                <SortableHeaderCell label="Devotee" field="devotee" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=160.0 />
                                <SortableHeaderCell label="Type" field="request_type" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <TableHeaderCell resizable=false min_width=240.0>"Message"</TableHeaderCell>
                                <SortableHeaderCell label="Status" field="status" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Requested" field="requested_on" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Counsellor" field="counsellor" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=140.0 />
                                <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = state.with(|s| s.items.clone());
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                <div class="table__empty">"No guidance requests match the filters"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|request| {
                                        let id = request.id;
                                        let devotee = request.devotee.clone();
                                        let requested = config.format_date(request.requested_on);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a href=details_href(id) class="table__link">{request.devotee.clone()}</a>
                                                        <div class="table__sub">{request.phone.clone()}</div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="badge badge--neutral">{request.request_type.label()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{request.message.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class=status_badge_class(request.status)>{request.status.label()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{requested}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {request.assigned_counsellor.clone().unwrap_or_else(|| "Unassigned".to_string())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <a href=details_href(id) class="button button--subtle" title="Open">
                                                            {icon("eye")}
                                                        </a>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| delete_request(id, devotee.clone())
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

                <Show when=move || show_new.get()>
                    <NewRequestForm on_close=Callback::new(move |_| show_new.set(false)) />
                </Show>
            </div>
        </PageFrame>
    }
}

/// Request logged on behalf of a devotee (phone or walk-in)
#[component]
fn NewRequestForm(on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let devotee = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let request_type = RwSignal::new(RequestType::default().code().to_string());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_save = Callback::new(move |_: ()| {
        let dto = GuidanceRequestDto {
            devotee: devotee.get_untracked(),
            phone: phone.get_untracked(),
            request_type: RequestType::from_code(&request_type.get_untracked()).unwrap_or_default(),
            message: message.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let mut id = RecordId::default();
        store
            .requests
            .update(|requests| id = requests.insert(dto.into_request(config.today())));
        log::info!("guidance request #{id} submitted");
        on_close.run(());
    });

    view! {
        <Modal
            title="New Guidance Request".to_string()
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    "Submit"
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__group">
                <Label>"Devotee"</Label>
                <Input value=devotee />
            </div>
            <div class="form__group">
                <Label>"Phone"</Label>
                <Input value=phone />
            </div>
            <div class="form__group">
                <Label>"Request type"</Label>
                <OptionSelect value=request_type options={choice_options::<RequestType>()} />
            </div>
            <div class="form__group">
                <Label>"Message"</Label>
                <Textarea value=message placeholder="What does the devotee need help with?" />
            </div>
        </Modal>
    }
}
