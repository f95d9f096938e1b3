use contracts::domain::a001_user::{UserDto, UserRole, UserStatus};
use contracts::domain::common::Choice;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::option_select::{choice_options, OptionSelect};

/// Field signals of the user create/edit form
#[derive(Clone, Copy)]
pub struct UserForm {
    pub name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub role: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl UserForm {
    pub fn new(dto: &UserDto) -> Self {
        Self {
            name: RwSignal::new(dto.name.clone()),
            phone: RwSignal::new(dto.phone.clone()),
            email: RwSignal::new(dto.email.clone()),
            role: RwSignal::new(dto.role.code().to_string()),
            status: RwSignal::new(dto.status.code().to_string()),
        }
    }

    pub fn load(&self, dto: &UserDto) {
        self.name.set(dto.name.clone());
        self.phone.set(dto.phone.clone());
        self.email.set(dto.email.clone());
        self.role.set(dto.role.code().to_string());
        self.status.set(dto.status.code().to_string());
    }

    pub fn to_dto(&self) -> UserDto {
        UserDto {
            name: self.name.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            role: UserRole::from_code(&self.role.get_untracked()).unwrap_or_default(),
            status: UserStatus::from_code(&self.status.get_untracked()).unwrap_or_default(),
        }
    }
}

#[component]
pub fn UserFields(
    form: UserForm,
    /// The create pages fix the role
    #[prop(optional)]
    hide_role: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>"Full name"</Label>
            <Input value=form.name placeholder="e.g. Meera Iyer" />
        </div>
        <div class="form__group">
            <Label>"Phone"</Label>
            <Input value=form.phone placeholder="+91 ..." />
        </div>
        <div class="form__group">
            <Label>"Email"</Label>
            <Input value=form.email input_type=InputType::Email />
        </div>
        {(!hide_role).then(|| view! {
            <div class="form__group">
                <Label>"Role"</Label>
                <OptionSelect value=form.role options={choice_options::<UserRole>()} />
            </div>
        })}
        <div class="form__group">
            <Label>"Status"</Label>
            <OptionSelect value=form.status options={choice_options::<UserStatus>()} />
        </div>
    }
}
