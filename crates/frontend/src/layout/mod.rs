pub mod center;
pub mod footer;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |    Content (routed page)     |
/// |   (Left)  |    Footer                    |
/// +------------------------------------------+
/// ```
///
/// Auth screens render outside of it.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        <Outlet />
                    </center::Center>
                    <footer::Footer />
                </div>
            </div>
        </div>
    }
}
