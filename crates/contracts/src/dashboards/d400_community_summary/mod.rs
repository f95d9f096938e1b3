//! Headline numbers for the dashboard home page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboards::{count_choices, CountRow};
use crate::domain::a001_user::{User, UserRole, UserStatus};
use crate::domain::a002_guidance_request::{GuidanceRequest, RequestStatus};
use crate::domain::a003_chat::aggregate::total_unread;
use crate::domain::a003_chat::Conversation;
use crate::domain::a004_notification::aggregate::unread_count;
use crate::domain::a004_notification::Notification;
use crate::domain::a005_job::{Job, JobStatus};
use crate::domain::a006_business::Business;
use crate::domain::a007_event::aggregate::upcoming_count;
use crate::domain::a007_event::Event;

/// Borrowed view of every collection the summary reads.
#[derive(Debug, Clone, Copy)]
pub struct SummarySources<'a> {
    pub users: &'a [User],
    pub requests: &'a [GuidanceRequest],
    pub conversations: &'a [Conversation],
    pub notifications: &'a [Notification],
    pub jobs: &'a [Job],
    pub businesses: &'a [Business],
    pub events: &'a [Event],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_users: usize,
    pub active_users: usize,
    pub users_by_role: Vec<CountRow>,
    pub total_requests: usize,
    pub open_requests: usize,
    pub requests_by_status: Vec<CountRow>,
    pub open_jobs: usize,
    pub total_applicants: u32,
    pub businesses: usize,
    pub verified_businesses: usize,
    pub upcoming_events: usize,
    pub unread_messages: usize,
    pub unread_notifications: usize,
}

impl DashboardSummary {
    pub fn compute(src: SummarySources<'_>, today: NaiveDate) -> Self {
        Self {
            total_users: src.users.len(),
            active_users: src
                .users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            users_by_role: count_choices::<UserRole, _>(src.users, |u| u.role),
            total_requests: src.requests.len(),
            open_requests: src.requests.iter().filter(|r| r.is_open()).count(),
            requests_by_status: count_choices::<RequestStatus, _>(src.requests, |r| r.status),
            open_jobs: src
                .jobs
                .iter()
                .filter(|j| j.status == JobStatus::Open)
                .count(),
            total_applicants: src.jobs.iter().map(|j| j.applicants).sum(),
            businesses: src.businesses.len(),
            verified_businesses: src.businesses.iter().filter(|b| b.is_verified).count(),
            upcoming_events: upcoming_count(src.events, today),
            unread_messages: total_unread(src.conversations),
            unread_notifications: unread_count(src.notifications),
        }
    }

    pub fn role_count(&self, role: UserRole) -> usize {
        self.users_by_role
            .iter()
            .find(|r| r.label == crate::domain::common::Choice::label(&role))
            .map_or(0, |r| r.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_user, a002_guidance_request, a003_chat, a004_notification};
    use crate::domain::{a005_job, a006_business, a007_event};

    fn summary() -> DashboardSummary {
        let users = a001_user::seed::users();
        let requests = a002_guidance_request::seed::requests();
        let conversations = a003_chat::seed::conversations();
        let notifications = a004_notification::seed::notifications();
        let jobs = a005_job::seed::jobs();
        let businesses = a006_business::seed::businesses();
        let events = a007_event::seed::events();
        DashboardSummary::compute(
            SummarySources {
                users: &users,
                requests: &requests,
                conversations: &conversations,
                notifications: &notifications,
                jobs: &jobs,
                businesses: &businesses,
                events: &events,
            },
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_every_seeded_user_and_request_counted_once() {
        let s = summary();
        assert_eq!(s.total_users, a001_user::seed::users().len());
        assert_eq!(
            s.users_by_role.iter().map(|r| r.count).sum::<usize>(),
            s.total_users
        );
        assert_eq!(
            s.requests_by_status.iter().map(|r| r.count).sum::<usize>(),
            s.total_requests
        );
        assert_eq!(s.requests_by_status.len(), 4);
    }

    #[test]
    fn test_seed_numbers() {
        let s = summary();
        assert_eq!(s.total_users, 10);
        assert_eq!(s.active_users, 8);
        assert_eq!(s.role_count(UserRole::Admin), 2);
        assert_eq!(s.role_count(UserRole::Counsellor), 3);
        assert_eq!(s.role_count(UserRole::Devotee), 5);
        assert_eq!(s.open_jobs, 4);
        assert_eq!(s.upcoming_events, 3);
        assert_eq!(s.businesses, 5);
        assert_eq!(s.verified_businesses, 3);
    }

    #[test]
    fn test_empty_sources() {
        let s = DashboardSummary::compute(
            SummarySources {
                users: &[],
                requests: &[],
                conversations: &[],
                notifications: &[],
                jobs: &[],
                businesses: &[],
                events: &[],
            },
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        assert_eq!(s.total_users, 0);
        assert!(s.users_by_role.iter().all(|r| r.count == 0));
        assert_eq!(s.users_by_role.len(), 3);
    }
}
