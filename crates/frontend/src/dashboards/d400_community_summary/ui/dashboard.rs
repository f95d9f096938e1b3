use chrono::NaiveDate;
use contracts::dashboards::d400_community_summary::{DashboardSummary, SummarySources};
use contracts::dashboards::CountRow;
use contracts::domain::a001_user::UserRole;
use contracts::domain::a002_guidance_request::GuidanceRequest;
use contracts::domain::a007_event::aggregate::by_date;
use contracts::domain::a007_event::Event;
use contracts::domain::common::Choice;
use leptos::prelude::*;

use crate::domain::a002_guidance_request::ui::list::details_href;
use crate::domain::a002_guidance_request::ui::status_badge_class;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::config::use_config;
use crate::shared::data::store::use_store;
use crate::shared::date_utils::{format_time, relative_day};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Latest `n` requests, newest first.
fn recent_requests(requests: &[GuidanceRequest], n: usize) -> Vec<GuidanceRequest> {
    let mut sorted = requests.to_vec();
    sorted.sort_by(|a, b| b.requested_on.cmp(&a.requested_on).then(b.id.cmp(&a.id)));
    sorted.truncate(n);
    sorted
}

/// Next `n` events from `today` on, soonest first.
fn next_events(events: &[Event], today: NaiveDate, n: usize) -> Vec<Event> {
    by_date(events)
        .into_iter()
        .filter(|e| e.is_upcoming(today))
        .take(n)
        .collect()
}

/// Horizontal bar list; widths are shares of `total`.
#[component]
fn CountBars(title: &'static str, rows: Vec<CountRow>, total: usize) -> impl IntoView {
    view! {
        <div class="details-section">
            <h3 class="details-section__title">{title}</h3>
            <div class="count-bars">
                {rows
                    .into_iter()
                    .map(|row| {
                        let percent = row.percent_of(total);
                        view! {
                            <div class="count-bars__row">
                                <span class="count-bars__label">{row.label.clone()}</span>
                                <div class="count-bars__track">
                                    <div class="count-bars__fill" style=format!("width: {percent}%;")></div>
                                </div>
                                <span class="count-bars__value">{row.count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn CommunitySummary() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let today = config.today();

    let summary = Memo::new(move |_| {
        store.users.with(|users| {
            store.requests.with(|requests| {
                store.conversations.with(|conversations| {
                    store.notifications.with(|notifications| {
                        store.jobs.with(|jobs| {
                            store.businesses.with(|businesses| {
                                store.events.with(|events| {
                                    DashboardSummary::compute(
                                        SummarySources {
                                            users: users.items(),
                                            requests: requests.items(),
                                            conversations: conversations.items(),
                                            notifications: notifications.items(),
                                            jobs: jobs.items(),
                                            businesses: businesses.items(),
                                            events: events.items(),
                                        },
                                        today,
                                    )
                                })
                            })
                        })
                    })
                })
            })
        })
    });

    let stat = move |f: fn(&DashboardSummary) -> usize| {
        Signal::derive(move || summary.with(|s| f(s) as u64))
    };

    view! {
        <PageFrame page_id="d400_community_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <div class="page__subtitle">
                        {format!("Community overview as of {}", config.format_date(today))}
                    </div>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total users"
                        icon_name="users"
                        value=stat(|s| s.total_users)
                        subtitle=Signal::derive(move || summary.with(|s| Some(format!("{} active", s.active_users))))
                        href="/user-management"
                    />
                    <StatCard
                        label="Counsellors"
                        icon_name="shield"
                        value=stat(|s| s.role_count(UserRole::Counsellor))
                        subtitle=Signal::derive(move || summary.with(|s| {
                            Some(format!("{} devotees", s.role_count(UserRole::Devotee)))
                        }))
                        href="/user-management"
                    />
                    <StatCard
                        label="Open requests"
                        icon_name="help-circle"
                        value=stat(|s| s.open_requests)
                        tone=StatTone::Warning
                        subtitle=Signal::derive(move || summary.with(|s| Some(format!("of {} total", s.total_requests))))
                        href="/guidance-requests"
                    />
                    <StatCard
                        label="Unread messages"
                        icon_name="message-square"
                        value=stat(|s| s.unread_messages)
                        href="/chat"
                    />
                    <StatCard
                        label="Unread notifications"
                        icon_name="bell"
                        value=stat(|s| s.unread_notifications)
                        href="/notifications"
                    />
                    <StatCard
                        label="Open jobs"
                        icon_name="briefcase"
                        value=stat(|s| s.open_jobs)
                        tone=StatTone::Good
                        subtitle=Signal::derive(move || summary.with(|s| Some(format!("{} applicants", s.total_applicants))))
                        href="/jobs"
                    />
                    <StatCard
                        label="Businesses"
                        icon_name="store"
                        value=stat(|s| s.businesses)
                        subtitle=Signal::derive(move || summary.with(|s| Some(format!("{} verified", s.verified_businesses))))
                        href="/businesses"
                    />
                    <StatCard
                        label="Upcoming events"
                        icon_name="calendar"
                        value=stat(|s| s.upcoming_events)
                        href="/events"
                    />
                </div>

                <div class="details-grid--2col">
                    {move || summary.with(|s| view! {
                        <CountBars title="Users by role" rows=s.users_by_role.clone() total=s.total_users />
                        <CountBars title="Requests by status" rows=s.requests_by_status.clone() total=s.total_requests />
                    })}
                </div>

                <div class="details-grid--2col">
                    <div class="details-section">
                        <h3 class="details-section__title">"Recent guidance requests"</h3>
                        <ul class="activity-list">
                            {move || {
                                store.requests.with(|r| recent_requests(r.items(), 5))
                                    .into_iter()
                                    .map(|r| view! {
                                        <li class="activity-list__item">
                                            <a class="table__link" href=details_href(r.id)>{r.devotee.clone()}</a>
                                            <span class="table__sub">{r.request_type.label()}</span>
                                            <span class=status_badge_class(r.status)>{r.status.label()}</span>
                                            <span class="activity-list__date">{relative_day(r.requested_on, today)}</span>
                                        </li>
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                    <div class="details-section">
                        <h3 class="details-section__title">"Next events"</h3>
                        <ul class="activity-list">
                            {move || {
                                let events = store.events.with(|e| next_events(e.items(), today, 3));
                                if events.is_empty() {
                                    return view! { <li class="table__empty">"No upcoming events"</li> }.into_any();
                                }
                                events
                                    .into_iter()
                                    .map(|e| view! {
                                        <li class="activity-list__item">
                                            <span style="font-weight: 500;">{e.title.clone()}</span>
                                            <span class="table__sub">{e.location.clone()}</span>
                                            <span class="activity-list__date">
                                                {format!("{} {}", relative_day(e.date, today), format_time(e.time))}
                                            </span>
                                        </li>
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </ul>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{a002_guidance_request, a007_event};

    #[test]
    fn test_recent_requests_newest_first() {
        let requests = a002_guidance_request::seed::requests();
        let recent = recent_requests(&requests, 3);
        assert_eq!(recent.len(), 3);
        assert!(recent[0].requested_on >= recent[1].requested_on);
        assert!(recent[1].requested_on >= recent[2].requested_on);
        let newest = requests.iter().map(|r| r.requested_on).max();
        assert_eq!(Some(recent[0].requested_on), newest);
    }

    #[test]
    fn test_next_events_skip_past() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let events = a007_event::seed::events();
        let next = next_events(&events, today, 3);
        assert!(next.len() <= 3);
        assert!(next.iter().all(|e| e.date >= today));
        assert!(next.windows(2).all(|w| (w[0].date, w[0].time) <= (w[1].date, w[1].time)));
    }
}
