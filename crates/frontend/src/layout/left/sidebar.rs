//! Sidebar with collapsible menu groups. Every item is a route link.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Route of a single-item group (used when `items` is empty)
    path: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboard",
            label: "Dashboard",
            icon: "home",
            path: "/",
            items: vec![],
        },
        MenuGroup {
            id: "users",
            label: "Users",
            icon: "users",
            path: "",
            items: vec![
                ("/user-management", "User Management", "users"),
                ("/create-admin", "Create Admin", "shield"),
                ("/create-counsellor", "Create Counsellor", "heart"),
                ("/create-devotee", "Create Devotee", "user-plus"),
            ],
        },
        MenuGroup {
            id: "guidance",
            label: "Guidance Requests",
            icon: "help-circle",
            path: "/guidance-requests",
            items: vec![],
        },
        MenuGroup {
            id: "communication",
            label: "Communication",
            icon: "message-square",
            path: "",
            items: vec![
                ("/chat", "Chat", "message-square"),
                ("/notifications", "Notifications", "bell"),
            ],
        },
        MenuGroup {
            id: "community",
            label: "Community",
            icon: "layers",
            path: "",
            items: vec![
                ("/jobs", "Jobs", "briefcase"),
                ("/businesses", "Businesses", "store"),
                ("/events", "Events", "calendar"),
            ],
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "bar-chart",
            path: "/reports",
            items: vec![],
        },
        MenuGroup {
            id: "account",
            label: "Account",
            icon: "settings",
            path: "",
            items: vec![
                ("/profile", "Profile", "user"),
                ("/settings", "Settings", "settings"),
            ],
        },
    ]
}

/// Whether the menu entry for `path` should be highlighted at `current`.
/// Request details belong to the request list entry.
fn is_item_active(path: &str, current: &str) -> bool {
    current == path || (path == "/guidance-requests" && current == "/request-details")
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    // Groups holding the current route start expanded
    let current = pathname.get_untracked();
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .into_iter()
            .filter(|g| g.items.iter().any(|(p, _, _)| is_item_active(p, &current)))
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let has_children = !group.items.is_empty();
                let group_path = group.path;

                if !has_children {
                    return view! {
                        <a
                            href=group_path
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || is_item_active(group_path, &pathname.get())
                            style:padding-left="12px"
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                        </a>
                    }.into_any();
                }

                let gid_click = group_id.clone();
                let gid_chevron = group_id.clone();
                let gid_show = group_id;
                let items = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_chevron)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(path, label, icon_name)| {
                                    view! {
                                        <a
                                            href=path
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || is_item_active(path, &pathname.get())
                                            style:padding-left="10px"
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }.into_any()
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_route_is_unique() {
        let mut paths: Vec<&str> = get_menu_groups()
            .into_iter()
            .flat_map(|g| {
                let mut p: Vec<&str> = g.items.iter().map(|(path, _, _)| *path).collect();
                if !g.path.is_empty() {
                    p.push(g.path);
                }
                p
            })
            .collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
        assert_eq!(total, 14);
    }

    #[test]
    fn test_request_details_highlights_request_list() {
        assert!(is_item_active("/guidance-requests", "/request-details"));
        assert!(is_item_active("/", "/"));
        assert!(!is_item_active("/", "/jobs"));
    }
}
