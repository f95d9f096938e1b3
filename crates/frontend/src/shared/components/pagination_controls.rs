use crate::shared::icons::icon;
use leptos::prelude::*;

/// Where each navigation button leads; `None` disables the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTargets {
    pub first: Option<usize>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub last: Option<usize>,
}

pub fn page_targets(current: usize, total_pages: usize) -> PageTargets {
    let last_page = total_pages.max(1) - 1;
    let back = (current > 0).then(|| current - 1);
    let forward = (current < last_page).then_some(current + 1);
    PageTargets {
        first: back.map(|_| 0),
        previous: back,
        next: forward,
        last: forward.map(|_| last_page),
    }
}

/// "3 / 7 (64)": 1-based page, page count, filtered row count
pub fn page_summary(current: usize, total_pages: usize, total_count: usize) -> String {
    format!("{} / {} ({})", current + 1, total_pages.max(1), total_count)
}

#[component]
fn PageButton(
    #[prop(into)] target: Signal<Option<usize>>,
    on_page_change: Callback<usize>,
    icon_name: &'static str,
    title: &'static str,
) -> impl IntoView {
    view! {
        <button
            class="pagination-btn"
            title=title
            disabled=move || target.get().is_none()
            on:click=move |_| {
                if let Some(page) = target.get_untracked() {
                    on_page_change.run(page);
                }
            }
        >
            {icon(icon_name)}
        </button>
    }
}

/// First / previous / next / last buttons plus a page size selector
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Row count after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// `[lists] page_size_options` from config.toml
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(10);
    let targets = Memo::new(move |_| page_targets(current_page.get(), total_pages.get()));

    view! {
        <div class="pagination-controls">
            <PageButton
                target=Signal::derive(move || targets.get().first)
                on_page_change=on_page_change
                icon_name="chevrons-left"
                title="First page"
            />
            <PageButton
                target=Signal::derive(move || targets.get().previous)
                on_page_change=on_page_change
                icon_name="chevron-left"
                title="Previous page"
            />
            <span class="pagination-info">
                {move || page_summary(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <PageButton
                target=Signal::derive(move || targets.get().next)
                on_page_change=on_page_change
                icon_name="chevron-right"
                title="Next page"
            />
            <PageButton
                target=Signal::derive(move || targets.get().last)
                on_page_change=on_page_change
                icon_name="chevrons-right"
                title="Last page"
            />
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(size);
                }
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_in_the_middle() {
        assert_eq!(
            page_targets(2, 5),
            PageTargets {
                first: Some(0),
                previous: Some(1),
                next: Some(3),
                last: Some(4),
            }
        );
    }

    #[test]
    fn test_targets_at_the_edges() {
        let first = page_targets(0, 3);
        assert_eq!((first.first, first.previous), (None, None));
        assert_eq!((first.next, first.last), (Some(1), Some(2)));

        let last = page_targets(2, 3);
        assert_eq!((last.next, last.last), (None, None));
        assert_eq!(last.previous, Some(1));

        // An empty list still reports one page and every button is off.
        let empty = page_targets(0, 0);
        assert_eq!(empty, PageTargets { first: None, previous: None, next: None, last: None });
    }

    #[test]
    fn test_page_summary() {
        assert_eq!(page_summary(2, 7, 64), "3 / 7 (64)");
        assert_eq!(page_summary(0, 0, 0), "1 / 1 (0)");
    }
}
