use contracts::domain::a003_chat::Conversation;
use contracts::domain::common::search::filter_list;
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;

use super::initials;
use crate::shared::data::store::use_store;
use crate::shared::date_utils::format_time;
use crate::shared::list_utils::SearchInput;

/// Conversations with unread messages first, then in seed/creation order.
pub fn ordered_conversations(items: &[Conversation], query: &str) -> Vec<Conversation> {
    let mut rows = filter_list(items, query);
    rows.sort_by_key(|c| c.unread_count() == 0);
    rows
}

#[component]
pub fn ConversationList(
    selected: RwSignal<Option<RecordId>>,
    on_select: Callback<RecordId>,
) -> impl IntoView {
    let store = use_store();
    let query = RwSignal::new(String::new());

    let rows = move || store.conversations.with(|c| ordered_conversations(c.items(), &query.get()));

    view! {
        <aside class="chat__sidebar">
            <div class="chat__search">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |v: String| query.set(v))
                    placeholder="Search conversations..."
                />
            </div>
            <ul class="chat__conversations">
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        return view! { <li class="chat__none">"No conversations found"</li> }.into_any();
                    }
                    rows.into_iter()
                        .map(|c| {
                            let id = c.id;
                            let unread = c.unread_count();
                            let (preview, time) = c
                                .last_message()
                                .map(|m| (m.text.clone(), format_time(m.time)))
                                .unwrap_or_default();
                            view! {
                                <li
                                    class="chat__conversation"
                                    class:chat__conversation--active=move || selected.get() == Some(id)
                                    on:click=move |_| on_select.run(id)
                                >
                                    <span class="avatar">{initials(&c.participant)}</span>
                                    <div class="chat__conversation-body">
                                        <div class="chat__conversation-top">
                                            <span class="chat__participant">{c.participant.clone()}</span>
                                            <span class="chat__time">{time}</span>
                                        </div>
                                        <div class="chat__conversation-bottom">
                                            <span class="chat__preview">{preview}</span>
                                            {(unread > 0).then(|| view! {
                                                <span class="badge badge--primary">{unread}</span>
                                            })}
                                        </div>
                                        <span class="chat__role">{c.participant_role.label()}</span>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_chat::seed;

    #[test]
    fn test_unread_conversations_first() {
        let rows = ordered_conversations(&seed::conversations(), "");
        let first_read = rows.iter().position(|c| c.unread_count() == 0);
        let last_unread = rows.iter().rposition(|c| c.unread_count() > 0);
        if let (Some(read), Some(unread)) = (first_read, last_unread) {
            assert!(unread < read);
        }
    }

    #[test]
    fn test_search_by_participant() {
        let rows = ordered_conversations(&seed::conversations(), "sunita");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].participant, "Sunita Menon");
    }
}
