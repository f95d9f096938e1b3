use crate::dashboards::d400_community_summary::ui::dashboard::CommunitySummary;
use crate::dashboards::d401_activity_report::ui::dashboard::ActivityReport;
use crate::domain::a001_user::ui::create::CreateUserPage;
use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_guidance_request::ui::details::RequestDetails;
use crate::domain::a002_guidance_request::ui::list::RequestList;
use crate::domain::a003_chat::ui::ChatPage;
use crate::domain::a004_notification::ui::list::NotificationList;
use crate::domain::a005_job::ui::list::JobList;
use crate::domain::a006_business::ui::BusinessesPage;
use crate::domain::a007_event::ui::list::EventList;
use crate::domain::a008_settings::ui::profile::ProfilePage;
use crate::domain::a008_settings::ui::settings::SettingsPage;
use crate::layout::Shell;
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use crate::system::pages::reset_password::ResetPasswordPage;
use crate::system::pages::signup::SignupPage;
use contracts::domain::a001_user::UserRole;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                // Auth screens render without the shell
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                <Route path=path!("/reset-password") view=ResetPasswordPage />

                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("") view=CommunitySummary />
                    <Route path=path!("user-management") view=UserList />
                    <Route
                        path=path!("create-admin")
                        view=|| view! { <CreateUserPage role=UserRole::Admin /> }
                    />
                    <Route
                        path=path!("create-counsellor")
                        view=|| view! { <CreateUserPage role=UserRole::Counsellor /> }
                    />
                    <Route
                        path=path!("create-devotee")
                        view=|| view! { <CreateUserPage role=UserRole::Devotee /> }
                    />
                    <Route path=path!("guidance-requests") view=RequestList />
                    <Route path=path!("request-details") view=RequestDetails />
                    <Route path=path!("chat") view=ChatPage />
                    <Route path=path!("notifications") view=NotificationList />
                    <Route path=path!("reports") view=ActivityReport />
                    <Route path=path!("jobs") view=JobList />
                    <Route path=path!("businesses") view=BusinessesPage />
                    <Route path=path!("events") view=EventList />
                    <Route path=path!("profile") view=ProfilePage />
                    <Route path=path!("settings") view=SettingsPage />
                    <Route path=path!("*any") view=NotFound />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
