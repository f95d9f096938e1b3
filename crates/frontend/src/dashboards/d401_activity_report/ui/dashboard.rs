use contracts::dashboards::d401_activity_report::{
    DateRange, EventReport, JobReport, RequestReport, UserReport,
};
use contracts::dashboards::CountRow;
use contracts::domain::common::ValidationResult;
use leptos::prelude::*;
use serde::Serialize;
use thaw::*;

use crate::shared::browser::alert;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::use_config;
use crate::shared::data::store::use_store;
use crate::shared::date_utils::parse_input_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Turns the picker's input values into a range. A blank or malformed
/// end is left open.
fn parse_range(from: &str, to: &str) -> ValidationResult<DateRange> {
    DateRange::new(parse_input_date(from), parse_input_date(to))
}

/// Everything the reports page shows, exported as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct ActivitySnapshot {
    requests: RequestReport,
    users: UserReport,
    jobs: JobReport,
    events: EventReport,
}

/// Label / count / share table for one breakdown
#[component]
fn CountTable(
    title: &'static str,
    #[prop(into)] rows: Signal<Vec<CountRow>>,
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="details-section">
            <h3 class="details-section__title">{title}</h3>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false>""</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=80.0>"Count"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=80.0>"Share"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let total = total.get();
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let percent = row.percent_of(total);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{row.label.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.count}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="count-bars__track" title=format!("{percent}%")>
                                                <div class="count-bars__fill" style=format!("width: {percent}%;")></div>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
pub fn ActivityReport() -> impl IntoView {
    let store = use_store();
    let config = use_config();

    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let range = RwSignal::new(DateRange::default());
    let error = RwSignal::new(None::<String>);

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        match parse_range(&from, &to) {
            Ok(r) => {
                leptos::logging::log!("[ActivityReport] Range changed: {:?}", r);
                range.set(r);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        date_from.set(from);
        date_to.set(to);
    });

    let requests = Memo::new(move |_| {
        let range = range.get();
        store.requests.with(|r| RequestReport::compute(r.items(), range))
    });
    let users = Memo::new(move |_| store.users.with(|u| UserReport::compute(u.items())));
    let jobs = Memo::new(move |_| store.jobs.with(|j| JobReport::compute(j.items())));
    let events = Memo::new(move |_| {
        let range = range.get();
        store.events.with(|e| EventReport::compute(e.items(), range))
    });

    let export = move || {
        let snapshot = ActivitySnapshot {
            requests: requests.get_untracked(),
            users: users.get_untracked(),
            jobs: jobs.get_untracked(),
            events: events.get_untracked(),
        };
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => {
                log::info!("activity report exported:\n{json}");
                alert("Report exported to the browser console");
            }
            Err(e) => log::error!("failed to export report: {e}"),
        }
    };

    let display = config.clone();
    let range_text = move || {
        let r = range.get();
        match (r.from, r.to) {
            (None, None) => "All time".to_string(),
            (Some(f), None) => format!("From {}", display.format_date(f)),
            (None, Some(t)) => format!("Until {}", display.format_date(t)),
            (Some(f), Some(t)) => format!("{} to {}", display.format_date(f), display.format_date(t)),
        }
    };

    view! {
        <PageFrame page_id="d401_activity_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Reports"</h1>
                    <div class="page__subtitle">{range_text}</div>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                        {icon("download")}
                        " Export"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="details-section">
                    <DateRangePicker
                        date_from=date_from
                        date_to=date_to
                        on_change=on_range_change
                        today=config.today()
                        label="Period (requests and events)".to_string()
                    />
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Requests in period"
                        icon_name="help-circle"
                        value=Signal::derive(move || requests.with(|r| r.total as u64))
                        subtitle=Signal::derive(move || {
                            requests.with(|r| Some(format!("{}% resolved", r.resolution_rate)))
                        })
                    />
                    <StatCard
                        label="Users"
                        icon_name="users"
                        value=Signal::derive(move || users.with(|u| u.total as u64))
                    />
                    <StatCard
                        label="Job applicants"
                        icon_name="briefcase"
                        value=Signal::derive(move || jobs.with(|j| u64::from(j.total_applicants)))
                        subtitle=Signal::derive(move || jobs.with(|j| Some(format!("{} postings", j.total))))
                    />
                    <StatCard
                        label="Event registrations"
                        icon_name="calendar"
                        value=Signal::derive(move || events.with(|e| u64::from(e.registrations)))
                        subtitle=Signal::derive(move || events.with(|e| Some(format!("{} events", e.total))))
                    />
                </div>

                <h2 class="report__heading">"Guidance requests"</h2>
                <div class="details-grid--2col">
                    <CountTable
                        title="By type"
                        rows=Signal::derive(move || requests.with(|r| r.by_type.clone()))
                        total=Signal::derive(move || requests.with(|r| r.total))
                    />
                    <CountTable
                        title="By status"
                        rows=Signal::derive(move || requests.with(|r| r.by_status.clone()))
                        total=Signal::derive(move || requests.with(|r| r.total))
                    />
                </div>

                <h2 class="report__heading">"Users"</h2>
                <div class="details-grid--2col">
                    <CountTable
                        title="By role"
                        rows=Signal::derive(move || users.with(|u| u.by_role.clone()))
                        total=Signal::derive(move || users.with(|u| u.total))
                    />
                    <CountTable
                        title="By status"
                        rows=Signal::derive(move || users.with(|u| u.by_status.clone()))
                        total=Signal::derive(move || users.with(|u| u.total))
                    />
                </div>

                <h2 class="report__heading">"Jobs"</h2>
                <div class="details-grid--2col">
                    <CountTable
                        title="By department"
                        rows=Signal::derive(move || jobs.with(|j| j.by_department.clone()))
                        total=Signal::derive(move || jobs.with(|j| j.total))
                    />
                    <CountTable
                        title="By type"
                        rows=Signal::derive(move || jobs.with(|j| j.by_type.clone()))
                        total=Signal::derive(move || jobs.with(|j| j.total))
                    />
                    <CountTable
                        title="By status"
                        rows=Signal::derive(move || jobs.with(|j| j.by_status.clone()))
                        total=Signal::derive(move || jobs.with(|j| j.total))
                    />
                </div>

                <h2 class="report__heading">"Events"</h2>
                <div class="details-grid--2col">
                    <CountTable
                        title="By category"
                        rows=Signal::derive(move || events.with(|e| e.by_category.clone()))
                        total=Signal::derive(move || events.with(|e| e.total))
                    />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_range() {
        let r = parse_range("2025-01-01", "2025-01-31").unwrap();
        assert_eq!(r.from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(r.to, NaiveDate::from_ymd_opt(2025, 1, 31));

        assert!(parse_range("", "").unwrap().is_unbounded());
        assert_eq!(parse_range("garbage", "2025-01-31").unwrap().from, None);
        assert!(parse_range("2025-02-01", "2025-01-01").is_err());
    }
}
