mod state;

use contracts::domain::a004_notification::aggregate::{mark_all_read, unread_count};
use contracts::domain::a004_notification::{Audience, NotificationDto};
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use thaw::*;

use crate::shared::browser::{alert, confirm_delete};
use crate::shared::components::option_select::{choice_options, OptionSelect};
use crate::shared::config::use_config;
use crate::shared::data::store::{remove_logged, use_store};
use crate::shared::date_utils::relative_day;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::NotificationListState;

#[component]
pub fn NotificationList() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let today = config.today();
    let state = RwSignal::new(NotificationListState::default());
    let show_compose = RwSignal::new(false);

    let search_signal = RwSignal::new(String::new());
    let audience_signal = RwSignal::new(String::new());
    let unread_only = RwSignal::new(false);

    let apply_filters = move || {
        state.set(NotificationListState {
            search_query: search_signal.get_untracked(),
            audience: audience_signal.get_untracked(),
            unread_only: unread_only.get_untracked(),
        });
    };

    // The checkbox applies at once, the text fields on Find.
    Effect::new(move |_| {
        unread_only.track();
        apply_filters();
    });

    let mark_read = move |id: RecordId| {
        store.notifications.update(|n| {
            let _ = n.modify(id, |x| {
                x.mark_read();
            });
        });
    };

    let mark_all = move |_| {
        let mut changed = 0;
        store.notifications.update(|n| changed = mark_all_read(n));
        log::info!("{changed} notifications marked read");
    };

    let delete = move |id: RecordId, title: String| {
        if confirm_delete("Notification", &title) {
            remove_logged(store.notifications, id);
        }
    };

    let unread = move || store.notifications.with(|n| unread_count(n.items()));

    view! {
        <PageFrame page_id="a004_notification--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Notifications"</h1>
                    <Badge>{move || format!("{} unread", unread())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=mark_all
                        disabled=Signal::derive(move || unread() == 0)
                    >
                        {icon("check")}
                        " Mark all read"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_compose.set(true)>
                        {icon("plus")}
                        " Compose"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search_signal placeholder="Title or message..." />
                            </div>
                            <div style="width: 180px;">
                                <OptionSelect value=audience_signal options={choice_options::<Audience>()} any_label="Any audience" />
                            </div>
                            <Checkbox checked=unread_only label="Unread only" />
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                                "Find"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_signal.set(String::new());
                                    audience_signal.set(String::new());
                                    unread_only.set(false);
                                    apply_filters();
                                }
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <ul class="notification-list">
                    {move || {
                        let rows = store.notifications.with(|n| state.with(|s| s.visible(n.items())));
                        if rows.is_empty() {
                            return view! { <li class="table__empty">"No notifications"</li> }.into_any();
                        }
                        rows.into_iter()
                            .map(|n| {
                                let id = n.id;
                                let title = n.title.clone();
                                let is_unread = !n.read;
                                view! {
                                    <li class="notification" class:notification--unread=is_unread>
                                        <span class="notification__icon">{icon("bell")}</span>
                                        <div class="notification__body">
                                            <div class="notification__title">{n.title.clone()}</div>
                                            <div class="notification__message">{n.message.clone()}</div>
                                            <div class="notification__meta">
                                                <span class="badge badge--neutral">{n.audience.label()}</span>
                                                <span>{relative_day(n.created_on, today)}</span>
                                            </div>
                                        </div>
                                        <div class="notification__actions">
                                            {is_unread.then(|| view! {
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| mark_read(id)
                                                    attr:title="Mark read"
                                                >
                                                    {icon("check")}
                                                </Button>
                                            })}
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| delete(id, title.clone())
                                                attr:title="Delete"
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </ul>

                <Show when=move || show_compose.get()>
                    <ComposeForm on_close=Callback::new(move |_| show_compose.set(false)) />
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn ComposeForm(on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let title = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let audience = RwSignal::new(Audience::default().code().to_string());
    let error = RwSignal::new(None::<String>);

    let on_send = Callback::new(move |_: ()| {
        let dto = NotificationDto {
            title: title.get_untracked(),
            message: message.get_untracked(),
            audience: Audience::from_code(&audience.get_untracked()).unwrap_or_default(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let label = dto.audience.label();
        let mut id = RecordId::default();
        store
            .notifications
            .update(|n| id = n.insert(dto.into_notification(config.today())));
        log::info!("notification #{id} queued for {label}");
        alert(&format!("Notification sent to {label}"));
        on_close.run(());
    });

    view! {
        <Modal
            title="Compose Notification".to_string()
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_send.run(())>
                    {icon("send")}
                    " Send"
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__group">
                <Label>"Title"</Label>
                <Input value=title />
            </div>
            <div class="form__group">
                <Label>"Audience"</Label>
                <OptionSelect value=audience options={choice_options::<Audience>()} />
            </div>
            <div class="form__group">
                <Label>"Message"</Label>
                <Textarea value=message />
            </div>
        </Modal>
    }
}
