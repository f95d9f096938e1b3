mod conversation_list;
mod thread;

use contracts::domain::a001_user::UserRole;
use contracts::domain::a003_chat::{aggregate::total_unread, Conversation};
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::option_select::{plain_options, OptionSelect};
use crate::shared::data::store::use_store;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use conversation_list::ConversationList;
use thread::Thread;

/// Up to two capital letters for the avatar circle
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Active users that have no conversation yet
fn users_without_conversation(
    users: &[contracts::domain::a001_user::User],
    conversations: &[Conversation],
) -> Vec<String> {
    users
        .iter()
        .filter(|u| u.is_active() && u.role != UserRole::Admin)
        .filter(|u| !conversations.iter().any(|c| c.participant == u.name))
        .map(|u| u.name.clone())
        .collect()
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let store = use_store();
    let selected: RwSignal<Option<RecordId>> = RwSignal::new(None);
    let new_participant = RwSignal::new(String::new());

    // Opening a conversation reads it.
    let open = Callback::new(move |id: RecordId| {
        leptos::logging::log!("[ChatPage] Opened conversation #{}", id);
        selected.set(Some(id));
        let mut changed = 0;
        store.conversations.update(|c| {
            let _ = c.modify(id, |conv| changed = conv.mark_read());
        });
        if changed > 0 {
            log::debug!("conversation #{id}: {changed} messages marked read");
        }
    });

    let candidates = Signal::derive(move || {
        let conversations = store.conversations.with(|c| c.items().to_vec());
        store
            .users
            .with(|u| plain_options(users_without_conversation(u.items(), &conversations)))
    });

    let start_conversation = move |_| {
        let name = new_participant.get_untracked();
        let Some(role) = store
            .users
            .with_untracked(|u| u.iter().find(|x| x.name == name).map(|x| x.role))
        else {
            return;
        };
        let mut id = RecordId::default();
        store
            .conversations
            .update(|c| id = c.insert(Conversation::new(&name, role)));
        log::info!("conversation #{id} started with {name} ({})", role.label());
        new_participant.set(String::new());
        selected.set(Some(id));
    };

    view! {
        <PageFrame page_id="a003_chat--detail" category=PAGE_CAT_DETAIL class="chat-page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Chat"</h1>
                    <Badge>
                        {move || store.conversations.with(|c| total_unread(c.items())).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <div style="width: 220px;">
                        <OptionSelect value=new_participant options=candidates any_label="Start chat with..." />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=start_conversation
                        disabled=Signal::derive(move || new_participant.get().is_empty())
                    >
                        {icon("message-square")}
                        " Start"
                    </Button>
                </div>
            </div>

            <div class="chat">
                <ConversationList selected=selected on_select=open />
                {move || match selected.get() {
                    Some(id) => view! { <Thread conversation_id=id /> }.into_any(),
                    None => view! {
                        <div class="chat__empty">
                            {icon("message-square")}
                            <p>"Select a conversation to start messaging"</p>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::seed as user_seed;
    use contracts::domain::a003_chat::seed as chat_seed;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Priya Sharma"), "PS");
        assert_eq!(initials("ramesh kulkarni rao"), "RK");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_new_chat_candidates_skip_existing_and_admins() {
        let users = user_seed::users();
        let conversations = chat_seed::conversations();
        let names = users_without_conversation(&users, &conversations);
        assert!(!names.iter().any(|n| n == "Priya Sharma"));
        assert!(!names.iter().any(|n| n == "Super Admin"));
        assert!(!names.iter().any(|n| n == "Arjun Mehta"));
        assert!(names.iter().any(|n| n == "Anand Joshi"));
    }
}
