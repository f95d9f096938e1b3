use contracts::domain::a007_event::{Event, EventCategory, EventDto, EventType};
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::option_select::{choice_options, OptionSelect};
use crate::shared::config::use_config;
use crate::shared::data::store::use_store;
use crate::shared::date_utils::input_date;
use crate::shared::modal::Modal;

/// Field signals of the event dialog
#[derive(Clone, Copy)]
struct EventFields {
    title: RwSignal<String>,
    event_type: RwSignal<String>,
    category: RwSignal<String>,
    description: RwSignal<String>,
    location: RwSignal<String>,
    venue: RwSignal<String>,
    date: RwSignal<String>,
    time: RwSignal<String>,
    organizer: RwSignal<String>,
    contact_name: RwSignal<String>,
    contact_phone: RwSignal<String>,
    contact_email: RwSignal<String>,
    max_attendees: RwSignal<String>,
    is_featured: RwSignal<bool>,
    is_free: RwSignal<bool>,
    requires_registration: RwSignal<bool>,
}

impl EventFields {
    fn new(dto: EventDto) -> Self {
        Self {
            title: RwSignal::new(dto.title),
            event_type: RwSignal::new(dto.event_type.code().to_string()),
            category: RwSignal::new(dto.category.code().to_string()),
            description: RwSignal::new(dto.description),
            location: RwSignal::new(dto.location),
            venue: RwSignal::new(dto.venue),
            date: RwSignal::new(dto.date),
            time: RwSignal::new(dto.time),
            organizer: RwSignal::new(dto.organizer),
            contact_name: RwSignal::new(dto.contact_name),
            contact_phone: RwSignal::new(dto.contact_phone),
            contact_email: RwSignal::new(dto.contact_email),
            max_attendees: RwSignal::new(dto.max_attendees),
            is_featured: RwSignal::new(dto.is_featured),
            is_free: RwSignal::new(dto.is_free),
            requires_registration: RwSignal::new(dto.requires_registration),
        }
    }

    fn to_dto(self) -> EventDto {
        EventDto {
            title: self.title.get_untracked(),
            event_type: EventType::from_code(&self.event_type.get_untracked()).unwrap_or_default(),
            category: EventCategory::from_code(&self.category.get_untracked()).unwrap_or_default(),
            description: self.description.get_untracked(),
            location: self.location.get_untracked(),
            venue: self.venue.get_untracked(),
            date: self.date.get_untracked(),
            time: self.time.get_untracked(),
            organizer: self.organizer.get_untracked(),
            contact_name: self.contact_name.get_untracked(),
            contact_phone: self.contact_phone.get_untracked(),
            contact_email: self.contact_email.get_untracked(),
            max_attendees: self.max_attendees.get_untracked(),
            is_featured: self.is_featured.get_untracked(),
            is_free: self.is_free.get_untracked(),
            requires_registration: self.requires_registration.get_untracked(),
        }
    }
}

#[component]
pub fn EventForm(event: Option<Event>, on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let id = event.as_ref().map(|e| e.id);
    let title_text = match &event {
        Some(e) => format!("Edit {}", e.title),
        None => "Create Event".to_string(),
    };
    let dto = match &event {
        Some(e) => EventDto::from_event(e),
        None => EventDto {
            date: input_date(config.today()),
            time: "18:00".to_string(),
            is_free: true,
            ..EventDto::default()
        },
    };
    let f = EventFields::new(dto);
    let error = RwSignal::new(None::<String>);

    let needs_venue = move || {
        EventType::from_code(&f.event_type.get())
            .unwrap_or_default()
            .needs_venue()
    };

    let on_save = Callback::new(move |_: ()| {
        let dto = f.to_dto();
        let result = match id {
            Some(id) => {
                let mut result = Ok(id);
                store
                    .events
                    .update(|events| result = events.try_modify(id, |e| dto.apply_to(e)).map(|_| id));
                result
            }
            None => dto.to_event().map(|event| {
                let mut new_id = RecordId::default();
                store.events.update(|events| new_id = events.insert(event));
                new_id
            }),
        };
        match result {
            Ok(saved) => {
                log::info!("event #{saved} saved");
                on_close.run(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let date_input = move |signal: RwSignal<String>, kind: &'static str| {
        view! {
            <input
                type=kind
                class="form__input"
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <Modal
            title=title_text
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    "Save"
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-grid--2col">
                <div class="form__group">
                    <Label>"Title"</Label>
                    <Input value=f.title />
                </div>
                <div class="form__group">
                    <Label>"Organizer"</Label>
                    <Input value=f.organizer />
                </div>
                <div class="form__group">
                    <Label>"Event type"</Label>
                    <OptionSelect value=f.event_type options={choice_options::<EventType>()} />
                </div>
                <div class="form__group">
                    <Label>"Category"</Label>
                    <OptionSelect value=f.category options={choice_options::<EventCategory>()} />
                </div>
                <div class="form__group">
                    <Label>"Date"</Label>
                    {date_input(f.date, "date")}
                </div>
                <div class="form__group">
                    <Label>"Time"</Label>
                    {date_input(f.time, "time")}
                </div>
                <div class="form__group">
                    <Label>{move || if needs_venue() { "Location" } else { "Location / link" }}</Label>
                    <Input value=f.location />
                </div>
                <Show when=needs_venue>
                    <div class="form__group">
                        <Label>"Venue"</Label>
                        <Input value=f.venue />
                    </div>
                </Show>
                <div class="form__group">
                    <Label>"Contact name"</Label>
                    <Input value=f.contact_name />
                </div>
                <div class="form__group">
                    <Label>"Contact phone"</Label>
                    <Input value=f.contact_phone />
                </div>
                <div class="form__group">
                    <Label>"Contact email"</Label>
                    <Input value=f.contact_email input_type=InputType::Email />
                </div>
                <div class="form__group">
                    <Label>"Max attendees"</Label>
                    <Input value=f.max_attendees placeholder="Blank for no limit" />
                </div>
            </div>
            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=f.description />
            </div>
            <Flex gap=FlexGap::Large>
                <Checkbox checked=f.is_featured label="Featured" />
                <Checkbox checked=f.is_free label="Free entry" />
                <Checkbox checked=f.requires_registration label="Registration required" />
            </Flex>
        </Modal>
    }
}
