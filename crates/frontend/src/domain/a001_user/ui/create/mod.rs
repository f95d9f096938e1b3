use contracts::domain::a001_user::{count_by_role, UserDto, UserRole};
use contracts::domain::common::Choice;
use leptos::prelude::*;
use thaw::*;

use super::form::{UserFields, UserForm};
use crate::shared::browser::alert;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::shared::data::store::use_store;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

fn page_id(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "a001_user--create-admin",
        UserRole::Counsellor => "a001_user--create-counsellor",
        UserRole::Devotee => "a001_user--create-devotee",
    }
}

/// Create form for one fixed role (`/create-admin` and friends)
#[component]
pub fn CreateUserPage(role: UserRole) -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let form = UserForm::new(&UserDto::for_role(role));
    let error = RwSignal::new(None::<String>);

    let existing = move || store.users.with(|users| count_by_role(users.items(), role));

    let clear = move || {
        form.load(&UserDto::for_role(role));
        error.set(None);
    };

    let on_submit = Callback::new(move |_: ()| {
        let mut dto = form.to_dto();
        dto.role = role;
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            alert(&e.to_string());
            return;
        }
        let name = dto.name.trim().to_string();
        let mut id = Default::default();
        store.users.update(|users| {
            id = users.insert(dto.into_user(&config.app.created_by, config.today()));
        });
        log::info!("{} #{id} created: {name}", role.label());
        alert(&format!("{} \"{}\" created successfully", role.label(), name));
        clear();
    });

    view! {
        <PageFrame page_id=page_id(role) category=PAGE_CAT_DETAIL>
            <PageHeader
                title=format!("Create {}", role.label())
                subtitle=Signal::derive(move || {
                    Some(format!("{} {}s registered", existing(), role.label().to_lowercase()))
                })
            >
                <a href="/user-management" class="button button--secondary">
                    {icon("users")}
                    " All users"
                </a>
            </PageHeader>

            <div class="details-container">
                <div class="details-section">
                    <h3 class="details-section__title">{format!("{} details", role.label())}</h3>
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <div class="details-grid--2col">
                        <UserFields form=form hide_role=true />
                    </div>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| clear()>
                            "Clear"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_submit.run(())>
                            {icon("user-plus")}
                            {format!(" Create {}", role.label())}
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
