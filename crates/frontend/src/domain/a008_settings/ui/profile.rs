use contracts::domain::a001_user::UserRole;
use contracts::domain::a008_settings::AdminProfile;
use contracts::domain::common::Choice;
use leptos::prelude::*;
use thaw::*;

use crate::shared::browser::alert;
use crate::shared::components::page_header::PageHeader;
use crate::shared::data::store::use_store;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_store();
    let current = store.profile.get_untracked();

    let name = RwSignal::new(current.name);
    let email = RwSignal::new(current.email);
    let phone = RwSignal::new(current.phone);
    let designation = RwSignal::new(current.designation);
    let bio = RwSignal::new(current.bio);
    let editing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move |p: AdminProfile| {
        name.set(p.name);
        email.set(p.email);
        phone.set(p.phone);
        designation.set(p.designation);
        bio.set(p.bio);
    };

    let cancel = move || {
        load(store.profile.get_untracked());
        error.set(None);
        editing.set(false);
    };

    let save = move || {
        let profile = AdminProfile {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            designation: designation.get_untracked().trim().to_string(),
            bio: bio.get_untracked(),
        };
        if let Err(e) = profile.validate() {
            error.set(Some(e.to_string()));
            alert(&e.to_string());
            return;
        }
        log::info!("profile updated: {} <{}>", profile.name, profile.email);
        store.profile.set(profile);
        error.set(None);
        editing.set(false);
        alert("Profile updated successfully");
    };

    let managed = move |role: UserRole| {
        store
            .users
            .with(|users| users.count_where(|u| u.role == role))
    };
    let disabled = Signal::derive(move || !editing.get());

    view! {
        <PageFrame page_id="a008_settings--profile" category=PAGE_CAT_SYSTEM>
            <PageHeader title="My Profile">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(true)>
                            {icon("edit")}
                            " Edit Profile"
                        </Button>
                    }
                >
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| cancel()>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| save()>
                        {icon("check")}
                        " Save"
                    </Button>
                </Show>
            </PageHeader>

            <div class="details-container profile">
                <div class="details-section profile__card">
                    <div class="avatar avatar--large">
                        {move || store.profile.with(AdminProfile::initials)}
                    </div>
                    <h2 class="profile__name">{move || store.profile.with(|p| p.name.clone())}</h2>
                    <div class="profile__designation">
                        {move || store.profile.with(|p| p.designation.clone())}
                    </div>
                    <div class="profile__contact">
                        <div>{icon("mail")} " " {move || store.profile.with(|p| p.email.clone())}</div>
                        <div>{icon("phone")} " " {move || store.profile.with(|p| p.phone.clone())}</div>
                    </div>
                    <div class="profile__stats">
                        {UserRole::all()
                            .iter()
                            .map(|role| {
                                let role = *role;
                                view! {
                                    <div class="profile__stat">
                                        <div class="profile__stat-value">{move || managed(role)}</div>
                                        <div class="profile__stat-label">{format!("{}s", role.label())}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="details-section">
                    <h3 class="details-section__title">"Personal information"</h3>
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <div class="details-grid--2col">
                        <div class="form__group">
                            <Label>"Full name"</Label>
                            <Input value=name disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Designation"</Label>
                            <Input value=designation disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Email"</Label>
                            <Input value=email input_type=InputType::Email disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Phone"</Label>
                            <Input value=phone disabled=disabled />
                        </div>
                    </div>
                    <div class="form__group">
                        <Label>"Bio"</Label>
                        <Textarea value=bio disabled=disabled />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
