mod state;

use contracts::domain::a007_event::aggregate::upcoming_count;
use contracts::domain::a007_event::{Event, EventCategory, EventType, EventWhen};
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use thaw::*;

use super::form::EventForm;
use crate::shared::browser::confirm_delete;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::option_select::{choice_options, OptionSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::data::store::{remove_logged, use_store};
use crate::shared::date_utils::{format_time, relative_day};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn capacity_text(event: &Event) -> String {
    match event.seats_left() {
        None => format!("{} registered", event.registered_attendees),
        Some(0) => "Full".to_string(),
        Some(left) => format!(
            "{} / {} registered, {} left",
            event.registered_attendees, event.max_attendees, left
        ),
    }
}

#[component]
pub fn EventList() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let today = config.today();
    let state = create_state(store.page_size());
    let editing: RwSignal<Option<Option<Event>>> = RwSignal::new(None);
    let filters_open = RwSignal::new(true);

    let search_signal = RwSignal::new(String::new());
    let type_signal = RwSignal::new(String::new());
    let category_signal = RwSignal::new(String::new());
    let when_signal = RwSignal::new(EventWhen::Upcoming.code().to_string());

    let refresh_view = move || {
        store
            .events
            .with_untracked(|events| state.update(|s| s.refresh(events.items(), today)));
    };

    Effect::new(move |_| {
        store.events.track();
        refresh_view();
    });

    let apply_filters = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.event_type = type_signal.get_untracked();
            s.category = category_signal.get_untracked();
            s.when = EventWhen::from_code(&when_signal.get_untracked()).unwrap_or_default();
            s.paging.page = 0;
        });
        refresh_view();
    };

    let reset_filters = move || {
        leptos::logging::log!("[EventList] Filters reset");
        search_signal.set(String::new());
        type_signal.set(String::new());
        category_signal.set(String::new());
        when_signal.set(EventWhen::Upcoming.code().to_string());
        apply_filters();
    };

    let sort_by = move |field: &'static str| {
        state.update(|s| s.paging.toggle_sort(field));
        refresh_view();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.paging.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.paging.set_page_size(size));
        refresh_view();
    };

    let toggle_featured = move |id: RecordId| {
        store
            .events
            .update(|events| {
                if let Err(e) = events.modify(id, Event::toggle_featured) {
                    log::warn!("event #{id}: {e}");
                }
            });
    };

    let delete_event = move |id: RecordId, title: String| {
        if confirm_delete("Event", &title) {
            remove_logged(store.events, id);
        }
    };

    let upcoming = move || store.events.with(|e| upcoming_count(e.items(), today));
    let sort_label = move |field: &'static str, label: &'static str| {
        move || {
            state.with(|s| {
                if s.paging.sort_field != field {
                    label.to_string()
                } else if s.paging.sort_ascending {
                    format!("{label} ▲")
                } else {
                    format!("{label} ▼")
                }
            })
        }
    };
    let page_size_options = config.lists.page_size_options.clone();

    view! {
        <PageFrame page_id="a007_event--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Events"</h1>
                    <Badge>{move || state.with(|s| s.paging.total_count).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="badge badge--info">{move || format!("Upcoming: {}", upcoming())}</span>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        " Create Event"
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
                        let (event_type, category, when) = state.with(|s| {
                            (s.event_type.clone(), s.category.clone(), s.when)
                        });
                        view! {
                            {EventType::from_code(&event_type).map(|t| view! {
                                <FilterTag
                                    label=format!("Type: {}", t.label())
                                    on_remove=Callback::new(move |_| {
                                        type_signal.set(String::new());
                                        apply_filters();
                                    })
                                />
                            })}
                            {EventCategory::from_code(&category).map(|c| view! {
                                <FilterTag
                                    label=format!("Category: {}", c.label())
                                    on_remove=Callback::new(move |_| {
                                        category_signal.set(String::new());
                                        apply_filters();
                                    })
                                />
                            })}
                            {(when != EventWhen::All).then(|| view! {
                                <FilterTag
                                    label=when.label().to_string()
                                    on_remove=Callback::new(move |_| {
                                        when_signal.set(EventWhen::All.code().to_string());
                                        apply_filters();
                                    })
                                />
                            })}
                        }
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 280px;">
                            <Input value=search_signal placeholder="Title, venue or organizer..." />
                        </div>
                        <div style="width: 140px;">
                            <OptionSelect value=type_signal options={choice_options::<EventType>()} any_label="All types" />
                        </div>
                        <div style="width: 160px;">
                            <OptionSelect value=category_signal options={choice_options::<EventCategory>()} any_label="All categories" />
                        </div>
                        <div style="width: 130px;">
                            <OptionSelect value=when_signal options={choice_options::<EventWhen>()} />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                            "Find"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_filters()>
                            "Reset"
                        </Button>
                    </Flex>
                </FilterPanel>

                <div class="list-toolbar">
                    <span class="list-toolbar__label">"Sort by:"</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| sort_by("date")>
                        {sort_label("date", "Date")}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| sort_by("title")>
                        {sort_label("title", "Title")}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| sort_by("registered")>
                        {sort_label("registered", "Registrations")}
                    </Button>
                </div>

                <div class="card-grid">
                    {move || {
                        let rows = state.with(|s| s.items.clone());
                        if rows.is_empty() {
                            return view! {
                                <div class="table__empty">"No events match the filters"</div>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|event| {
                                let id = event.id;
                                let title = event.title.clone();
                                let for_edit = event.clone();
                                let when_text = format!(
                                    "{} at {} ({})",
                                    config.format_date(event.date),
                                    format_time(event.time),
                                    relative_day(event.date, today),
                                );
                                let place = if event.event_type.needs_venue() && !event.venue.is_empty() {
                                    format!("{}, {}", event.venue, event.location)
                                } else {
                                    event.location.clone()
                                };
                                let capacity = capacity_text(&event);
                                let featured = event.is_featured;
                                view! {
                                    <div class="event-card" class:event-card--past=!event.is_upcoming(today)>
                                        <div class="event-card__header">
                                            <span class="badge badge--info">{event.category.label()}</span>
                                            <span class="badge badge--neutral">{event.event_type.label()}</span>
                                            {featured.then(|| view! { <span class="badge badge--warning">"Featured"</span> })}
                                            {event.is_free.then(|| view! { <span class="badge badge--success">"Free"</span> })}
                                        </div>
                                        <h3 class="event-card__title">{event.title.clone()}</h3>
                                        <p class="event-card__description">{event.description.clone()}</p>
                                        <div class="event-card__meta">
                                            <div>{icon("calendar")} " " {when_text}</div>
                                            <div>{icon("map-pin")} " " {place}</div>
                                            <div>{icon("user")} " " {event.organizer.clone()}</div>
                                        </div>
                                        <div class="event-card__footer">
                                            <span
                                                class="event-card__capacity"
                                                class:event-card__capacity--full=event.is_full()
                                            >
                                                {capacity}
                                            </span>
                                            <div class="table__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| toggle_featured(id)
                                                    attr:title=if featured { "Unfeature" } else { "Feature" }
                                                >
                                                    {icon("star")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_event(id, title.clone())
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>

                {move || editing.get().map(|event| view! {
                    <EventForm event=event on_close=Callback::new(move |_| editing.set(None)) />
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_event::seed;

    #[test]
    fn test_capacity_text() {
        let mut event = seed::events().remove(0);
        event.max_attendees = 0;
        event.registered_attendees = 12;
        assert_eq!(capacity_text(&event), "12 registered");
        event.max_attendees = 12;
        assert_eq!(capacity_text(&event), "Full");
        event.max_attendees = 20;
        assert_eq!(capacity_text(&event), "12 / 20 registered, 8 left");
    }
}
