/// Shared list helpers: sorting, paging and the search box
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::TableHeaderCell;

/// Types the list pages can sort by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive string ordering for sort columns
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// One page of a filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

/// Clamps `page` into range and returns the slice bounds for it.
/// An empty list still has one (empty) page.
pub fn page_window(total_count: usize, page: usize, page_size: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = if total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    };
    let page = page.min(total_pages - 1);
    let start = (page * page_size).min(total_count);
    let end = (start + page_size).min(total_count);
    PageWindow {
        page,
        total_pages,
        start,
        end,
    }
}

/// Sorts the filtered rows and cuts out the requested page.
pub fn sort_and_page<T: Sortable>(
    mut rows: Vec<T>,
    field: &str,
    ascending: bool,
    page: usize,
    page_size: usize,
) -> (Vec<T>, PageWindow) {
    sort_list(&mut rows, field, ascending);
    let window = page_window(rows.len(), page, page_size);
    let page_items = rows.drain(window.start..window.end).collect();
    (page_items, window)
}

/// Sort and paging position of one list page
#[derive(Clone, Debug, PartialEq)]
pub struct ListPaging {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl ListPaging {
    pub fn new(sort_field: &str, sort_ascending: bool, page_size: usize) -> Self {
        Self {
            sort_field: sort_field.to_string(),
            sort_ascending,
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
        }
    }

    /// Same column flips the direction; a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }

    /// Sorts the filtered rows, stores the totals and returns the current page.
    pub fn page_of<T: Sortable>(&mut self, rows: Vec<T>) -> Vec<T> {
        self.total_count = rows.len();
        let (items, window) = sort_and_page(
            rows,
            &self.sort_field,
            self.sort_ascending,
            self.page,
            self.page_size,
        );
        self.page = window.page;
        self.total_pages = window.total_pages;
        items
    }
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Clickable table header that shows the sort direction of `field`
#[component]
pub fn SortableHeaderCell(
    label: &'static str,
    field: &'static str,
    #[prop(into)] sort_field: Signal<String>,
    #[prop(into)] ascending: Signal<bool>,
    on_sort: Callback<&'static str>,
    #[prop(default = 100.0)] min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor:pointer;"
                on:click=move |_| on_sort.run(field)
            >
                {label}
                <span class=move || sort_field.with(|f| get_sort_class(f, field))>
                    {move || get_sort_indicator(&sort_field.get(), field, ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

/// Search box that reports its value 300 ms after the last keystroke
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Replacing the stored timeout drops, and so cancels, the previous one.
        pending.set_value(Some(Timeout::new(300, move || {
            on_change.run(new_value);
        })));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, u32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => cmp_ci(self.0, other.0),
            }
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut rows = vec![Row("b", 2), Row("A", 3), Row("c", 1)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0], Row("A", 3));
        sort_list(&mut rows, "n", false);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(
            page_window(0, 3, 10),
            PageWindow { page: 0, total_pages: 1, start: 0, end: 0 }
        );
        assert_eq!(
            page_window(25, 2, 10),
            PageWindow { page: 2, total_pages: 3, start: 20, end: 25 }
        );
        // Shrinking results pulls the page back into range.
        assert_eq!(page_window(5, 4, 10).page, 0);
        assert_eq!(page_window(10, 0, 0).total_pages, 10);
    }

    #[test]
    fn test_sort_and_page() {
        let rows = vec![Row("d", 4), Row("a", 1), Row("c", 3), Row("b", 2)];
        let (page, window) = sort_and_page(rows, "n", true, 1, 3);
        assert_eq!(page, vec![Row("d", 4)]);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.page, 1);
    }

    #[test]
    fn test_list_paging_keeps_totals() {
        let mut paging = ListPaging::new("name", true, 2);
        paging.page = 5;
        let rows = vec![Row("c", 1), Row("a", 2), Row("b", 3)];
        let page = paging.page_of(rows);
        assert_eq!(page, vec![Row("c", 1)]);
        assert_eq!(paging.total_count, 3);
        assert_eq!(paging.total_pages, 2);
        assert_eq!(paging.page, 1);

        paging.toggle_sort("name");
        assert!(!paging.sort_ascending);
        paging.toggle_sort("n");
        assert_eq!(paging.sort_field, "n");
        assert!(paging.sort_ascending);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "phone", true), " ⇅");
    }
}
