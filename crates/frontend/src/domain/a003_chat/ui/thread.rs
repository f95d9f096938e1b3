use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use thaw::*;

use super::initials;
use crate::shared::browser::alert;
use crate::shared::data::store::use_store;
use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;

#[component]
pub fn Thread(conversation_id: RecordId) -> impl IntoView {
    let store = use_store();
    let draft = RwSignal::new(String::new());

    let conversation =
        Memo::new(move |_| store.conversations.with(|c| c.get(conversation_id).cloned()));

    let send = move || {
        let text = draft.get_untracked();
        let now = chrono::Local::now().naive_local();
        let mut sent = RecordId::default();
        let mut outcome = Ok(());
        store.conversations.update(|c| {
            outcome = c.try_modify(conversation_id, |conv| {
                sent = conv.send(&text, now)?;
                Ok(())
            });
        });
        match outcome {
            Ok(()) => {
                log::info!("chat message #{sent} sent to conversation #{conversation_id}");
                draft.set(String::new());
            }
            Err(e) => alert(&e.to_string()),
        }
    };

    view! {
        <section class="chat__thread">
            {move || conversation.get().map(|c| view! {
                <header class="chat__thread-header">
                    <span class="avatar">{initials(&c.participant)}</span>
                    <div>
                        <div class="chat__participant">{c.participant.clone()}</div>
                        <div class="chat__role">{c.participant_role.label()}</div>
                    </div>
                </header>
                <div class="chat__messages">
                    {if c.messages.is_empty() {
                        view! { <div class="chat__none">"No messages yet"</div> }.into_any()
                    } else {
                        c.messages
                            .iter()
                            .map(|m| {
                                let class = if m.is_from_admin() {
                                    "chat__bubble chat__bubble--outgoing"
                                } else {
                                    "chat__bubble chat__bubble--incoming"
                                };
                                view! {
                                    <div class=class>
                                        <div class="chat__bubble-text">{m.text.clone()}</div>
                                        <div class="chat__bubble-time">{format_time(m.time)}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            })}
            <footer class="chat__composer">
                <input
                    class="form__input chat__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| send()>
                    {icon("send")}
                </Button>
            </footer>
        </section>
    }
}
