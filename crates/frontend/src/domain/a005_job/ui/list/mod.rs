mod state;

use contracts::domain::a005_job::aggregate::total_applicants;
use contracts::domain::a005_job::{departments, Job, JobStatus, JobType};
use contracts::domain::common::{Choice, RecordId};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use super::form::JobForm;
use super::status_badge_class;
use crate::shared::browser::confirm_delete;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::option_select::{choice_options, plain_options, OptionSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::data::store::{remove_logged, use_store};
use crate::shared::icons::icon;
use crate::shared::list_utils::SortableHeaderCell;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn JobList() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let state = create_state(store.page_size());
    // Some(None) is the "new job" dialog
    let editing: RwSignal<Option<Option<Job>>> = RwSignal::new(None);
    let filters_open = RwSignal::new(true);

    let search_signal = RwSignal::new(String::new());
    let department_signal = RwSignal::new(String::new());
    let type_signal = RwSignal::new(String::new());
    let status_signal = RwSignal::new(String::new());

    let refresh_view = move || {
        store
            .jobs
            .with_untracked(|jobs| state.update(|s| s.refresh(jobs.items())));
    };

    Effect::new(move |_| {
        store.jobs.track();
        refresh_view();
    });

    let apply_filters = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.department = department_signal.get_untracked();
            s.job_type = type_signal.get_untracked();
            s.status = status_signal.get_untracked();
            s.paging.page = 0;
        });
        refresh_view();
    };

    let reset_filters = move || {
        log!("[JobList] Filters reset");
        search_signal.set(String::new());
        department_signal.set(String::new());
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

    let delete_job = move |id: RecordId, title: String| {
        if confirm_delete("Job", &title) {
            remove_logged(store.jobs, id);
        }
    };

    let department_options =
        Signal::derive(move || store.jobs.with(|jobs| plain_options(departments(jobs.items()))));
    let open_count = move || store.jobs.with(|j| j.count_where(|x| x.status == JobStatus::Open));
    let applicants = move || store.jobs.with(|j| total_applicants(j.items()));

    let sort_field = Signal::derive(move || state.with(|s| s.paging.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.paging.sort_ascending));
    let page_size_options = config.lists.page_size_options.clone();

    view! {
        <PageFrame page_id="a005_job--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Jobs"</h1>
                    <Badge>{move || state.with(|s| s.paging.total_count).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="badge badge--success">{move || format!("Open: {}", open_count())}</span>
                    <span class="badge badge--neutral">{move || format!("Applicants: {}", applicants())}</span>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        " Post Job"
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
                        let (department, job_type, status) = state.with(|s| {
                            (s.department.clone(), s.job_type.clone(), s.status.clone())
                        });
                        view! {
                            {(!department.is_empty()).then(|| view! {
                                <FilterTag
                                    label=format!("Department: {department}")
                                    on_remove=Callback::new(move |_| {
                                        department_signal.set(String::new());
                                        apply_filters();
                                    })
                                />
                            })}
                            {JobType::from_code(&job_type).map(|t| view! {
                                <FilterTag
                                    label=format!("Type: {}", t.label())
                                    on_remove=Callback::new(move |_| {
                                        type_signal.set(String::new());
                                        apply_filters();
                                    })
                                />
                            })}
                            {JobStatus::from_code(&status).map(|st| view! {
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
                        <div style="flex: 1; max-width: 280px;">
                            <Input value=search_signal placeholder="Title, location or description..." />
                        </div>
                        <div style="width: 170px;">
                            <OptionSelect value=department_signal options=department_options any_label="All departments" />
                        </div>
                        <div style="width: 150px;">
                            <OptionSelect value=type_signal options={choice_options::<JobType>()} any_label="All types" />
                        </div>
                        <div style="width: 140px;">
                            <OptionSelect value=status_signal options={choice_options::<JobStatus>()} any_label="All statuses" />
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
                                <SortableHeaderCell label="Title" field="title" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=180.0 />
                                <SortableHeaderCell label="Department" field="department" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=120.0>"Location"</TableHeaderCell>
                                <SortableHeaderCell label="Type" field="job_type" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <TableHeaderCell resizable=false min_width=120.0>"Salary"</TableHeaderCell>
                                <SortableHeaderCell label="Status" field="status" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Applicants" field="applicants" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Posted" field="posted_date" sort_field=sort_field ascending=sort_ascending on_sort=toggle_sort />
                                <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = state.with(|s| s.items.clone());
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="9">
                                                <div class="table__empty">"No jobs match the filters"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|job| {
                                        let id = job.id;
                                        let title = job.title.clone();
                                        let for_edit = job.clone();
                                        let posted = config.format_date(job.posted_date);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{job.title.clone()}</span>
                                                        <div class="table__sub">{job.experience.clone()}</div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{job.department.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{job.location.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="badge badge--neutral">{job.job_type.label()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{job.salary.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class=status_badge_class(job.status)>{job.status.label()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{job.applicants}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{posted}</TableCellLayout>
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
                                                            on_click=move |_| delete_job(id, title.clone())
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

                {move || editing.get().map(|job| view! {
                    <JobForm job=job on_close=Callback::new(move |_| editing.set(None)) />
                })}
            </div>
        </PageFrame>
    }
}
