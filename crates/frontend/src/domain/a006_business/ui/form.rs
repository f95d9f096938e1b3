use contracts::domain::a006_business::{Business, BusinessDto};
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::option_select::{plain_options, OptionSelect};
use crate::shared::data::store::use_store;
use crate::shared::modal::Modal;

#[component]
pub fn BusinessForm(business: Option<Business>, on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let id = business.as_ref().map(|b| b.id);
    let dto = business
        .as_ref()
        .map(BusinessDto::from_business)
        .unwrap_or_default();
    let title = match &business {
        Some(b) => format!("Edit {}", b.name),
        None => "Add Business".to_string(),
    };

    let name = RwSignal::new(dto.name);
    let category = RwSignal::new(dto.category);
    let sub_category = RwSignal::new(dto.sub_category);
    let location = RwSignal::new(dto.location);
    let phone = RwSignal::new(dto.phone);
    let email = RwSignal::new(dto.email);
    let website = RwSignal::new(dto.website);
    let description = RwSignal::new(dto.description);
    let is_verified = RwSignal::new(dto.is_verified);
    let error = RwSignal::new(None::<String>);

    let category_options =
        Signal::derive(move || store.categories.with(|c| plain_options(c.names())));
    let sub_category_options = Signal::derive(move || {
        let selected = category.get();
        store
            .categories
            .with(|c| plain_options(c.sub_category_names(&selected)))
    });

    // A sub-category only makes sense under the category it was picked for.
    Effect::new(move |prev: Option<String>| {
        let current = category.get();
        if prev.is_some_and(|p| p != current) {
            sub_category.set(String::new());
        }
        current
    });

    let on_save = Callback::new(move |_: ()| {
        let dto = BusinessDto {
            name: name.get_untracked(),
            category: category.get_untracked(),
            sub_category: sub_category.get_untracked(),
            location: location.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            website: website.get_untracked(),
            description: description.get_untracked(),
            is_verified: is_verified.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        match id {
            Some(id) => {
                let mut result = Ok(());
                store
                    .businesses
                    .update(|b| result = b.modify(id, |x| dto.apply_to(x)));
                if let Err(e) = result {
                    error.set(Some(e.to_string()));
                    return;
                }
                log::info!("business #{id} updated");
            }
            None => {
                let mut new_id = RecordId::default();
                store
                    .businesses
                    .update(|b| new_id = b.insert(dto.into_business()));
                log::info!("business #{new_id} added");
            }
        }
        on_close.run(());
    });

    view! {
        <Modal
            title=title
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
                    <Label>"Business name"</Label>
                    <Input value=name />
                </div>
                <div class="form__group">
                    <Label>"Location"</Label>
                    <Input value=location />
                </div>
                <div class="form__group">
                    <Label>"Category"</Label>
                    <OptionSelect value=category options=category_options any_label="Select category" />
                </div>
                <div class="form__group">
                    <Label>"Sub-category"</Label>
                    <OptionSelect value=sub_category options=sub_category_options any_label="None" />
                </div>
                <div class="form__group">
                    <Label>"Phone"</Label>
                    <Input value=phone />
                </div>
                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input value=email input_type=InputType::Email />
                </div>
                <div class="form__group">
                    <Label>"Website"</Label>
                    <Input value=website placeholder="https://..." />
                </div>
                <div class="form__group">
                    <Checkbox checked=is_verified label="Verified listing" />
                </div>
            </div>
            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description />
            </div>
        </Modal>
    }
}
