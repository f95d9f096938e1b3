use chrono::NaiveDate;
use contracts::domain::a006_business::offer::active_on;
use contracts::domain::a006_business::{Offer, OfferDto, OfferType};
use contracts::domain::common::{Choice, RecordId, Searchable};
use leptos::prelude::*;
use thaw::*;

use crate::shared::browser::confirm_delete;
use crate::shared::components::option_select::{choice_options, OptionSelect};
use crate::shared::config::use_config;
use crate::shared::data::store::{remove_logged, use_store, DataStore};
use crate::shared::date_utils::input_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Badge text and class for an offer on `today`
pub fn offer_state(offer: &Offer, today: NaiveDate) -> (&'static str, &'static str) {
    if !offer.is_active {
        ("Paused", "badge badge--neutral")
    } else if today < offer.valid_from {
        ("Scheduled", "badge badge--primary")
    } else if today > offer.valid_to {
        ("Expired", "badge badge--error")
    } else {
        ("Live", "badge badge--success")
    }
}

fn visible_offers(
    offers: &[Offer],
    query: &str,
    business_id: Option<RecordId>,
    live_only: bool,
    today: NaiveDate,
) -> Vec<Offer> {
    offers
        .iter()
        .filter(|o| o.matches_filter(query))
        .filter(|o| business_id.map_or(true, |id| o.business_id == id))
        .filter(|o| !live_only || o.is_valid_on(today))
        .cloned()
        .collect()
}

fn business_options(store: DataStore) -> Vec<(String, String)> {
    store.businesses.with(|b| {
        b.iter()
            .map(|x| (x.id.to_string(), x.name.clone()))
            .collect()
    })
}

#[component]
pub fn OffersPanel() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let today = config.today();
    let editing: RwSignal<Option<Option<Offer>>> = RwSignal::new(None);

    let query = RwSignal::new(String::new());
    let business_filter = RwSignal::new(String::new());
    let live_only = RwSignal::new(false);

    let options = Signal::derive(move || business_options(store));
    let business_name = move |id: RecordId| {
        store.businesses.with(|b| {
            b.get(id)
                .map(|x| x.name.clone())
                .unwrap_or_else(|| format!("Business #{id}"))
        })
    };

    let rows = move || {
        let business_id = business_filter.get().parse::<RecordId>().ok();
        store.offers.with(|o| {
            visible_offers(o.items(), &query.get(), business_id, live_only.get(), today)
        })
    };

    let toggle_active = move |id: RecordId| {
        store.offers.update(|o| {
            let _ = o.modify(id, |x| x.is_active = !x.is_active);
        });
    };

    let delete_offer = move |id: RecordId, title: String| {
        if confirm_delete("Offer", &title) {
            remove_logged(store.offers, id);
        }
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">"Offers"</h1>
                <Badge>{move || store.offers.with(|o| o.len()).to_string()}</Badge>
            </div>
            <div class="page__header-right">
                <span class="badge badge--success">
                    {move || format!("Live today: {}", store.offers.with(|o| active_on(o.items(), today)))}
                </span>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Add Offer"
                </Button>
            </div>
        </div>

        <div class="page__content">
            <div class="filter-panel">
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 280px;">
                            <Input value=query placeholder="Title, code or description..." />
                        </div>
                        <div style="width: 220px;">
                            <OptionSelect value=business_filter options=options any_label="All businesses" />
                        </div>
                        <Checkbox checked=live_only label="Live today" />
                    </Flex>
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=180.0>"Offer"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Business"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Value"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Code"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Valid"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="7">
                                            <div class="table__empty">"No offers"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|offer| {
                                    let id = offer.id;
                                    let title = offer.title.clone();
                                    let for_edit = offer.clone();
                                    let (state_label, state_class) = offer_state(&offer, today);
                                    let validity = format!(
                                        "{} – {}",
                                        config.format_date(offer.valid_from),
                                        config.format_date(offer.valid_to)
                                    );
                                    let display_value = offer.display_value();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{offer.title.clone()}</span>
                                                    <div class="table__sub">{offer.offer_type.label()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{business_name(offer.business_id)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{display_value}</TableCell>
                                            <TableCell><code>{offer.code.clone()}</code></TableCell>
                                            <TableCell>{validity}</TableCell>
                                            <TableCell><span class=state_class>{state_label}</span></TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                        attr:title="Edit"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| toggle_active(id)
                                                        attr:title="Pause / resume"
                                                    >
                                                        {icon("tag")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete_offer(id, title.clone())
                                                        attr:title="Delete"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            {move || editing.get().map(|offer| view! {
                <OfferForm offer=offer on_close=Callback::new(move |_| editing.set(None)) />
            })}
        </div>
    }
}

#[component]
fn OfferForm(offer: Option<Offer>, on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let id = offer.as_ref().map(|o| o.id);
    let dto = match &offer {
        Some(o) => OfferDto::from_offer(o),
        None => OfferDto {
            valid_from: input_date(config.today()),
            is_active: true,
            ..OfferDto::default()
        },
    };
    let title_text = if id.is_some() { "Edit Offer" } else { "Add Offer" };

    let business = RwSignal::new(dto.business_id.map(|b| b.to_string()).unwrap_or_default());
    let title = RwSignal::new(dto.title);
    let description = RwSignal::new(dto.description);
    let offer_type = RwSignal::new(dto.offer_type.code().to_string());
    let value = RwSignal::new(dto.value);
    let code = RwSignal::new(dto.code);
    let valid_from = RwSignal::new(dto.valid_from);
    let valid_to = RwSignal::new(dto.valid_to);
    let terms = RwSignal::new(dto.terms);
    let is_active = RwSignal::new(dto.is_active);
    let error = RwSignal::new(None::<String>);

    let options = Signal::derive(move || business_options(store));
    let has_value = move || {
        OfferType::from_code(&offer_type.get())
            .unwrap_or_default()
            .has_value()
    };

    let on_save = Callback::new(move |_: ()| {
        let dto = OfferDto {
            business_id: business.get_untracked().parse().ok(),
            title: title.get_untracked(),
            description: description.get_untracked(),
            offer_type: OfferType::from_code(&offer_type.get_untracked()).unwrap_or_default(),
            value: value.get_untracked(),
            code: code.get_untracked(),
            valid_from: valid_from.get_untracked(),
            valid_to: valid_to.get_untracked(),
            terms: terms.get_untracked(),
            is_active: is_active.get_untracked(),
        };
        let mut offer = match dto.to_offer() {
            Ok(offer) => offer,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let mut result = Ok(());
        match id {
            Some(id) => {
                offer.id = id;
                store.offers.update(|o| result = o.update(offer));
            }
            None => store.offers.update(|o| {
                let new_id = o.insert(offer);
                log::info!("offer #{new_id} added");
            }),
        }
        match result {
            Ok(()) => on_close.run(()),
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    view! {
        <Modal
            title=title_text.to_string()
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
                    <Label>"Business"</Label>
                    <OptionSelect value=business options=options any_label="Select business" />
                </div>
                <div class="form__group">
                    <Label>"Title"</Label>
                    <Input value=title />
                </div>
                <div class="form__group">
                    <Label>"Offer type"</Label>
                    <OptionSelect value=offer_type options={choice_options::<OfferType>()} />
                </div>
                <Show when=has_value>
                    <div class="form__group">
                        <Label>"Value"</Label>
                        <Input value=value placeholder="e.g. 15" />
                    </div>
                </Show>
                <div class="form__group">
                    <Label>"Code"</Label>
                    <Input value=code placeholder="e.g. DIWALI15" />
                </div>
                <div class="form__group">
                    <Label>"Valid from"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || valid_from.get()
                        on:input=move |ev| valid_from.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Valid to"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || valid_to.get()
                        on:input=move |ev| valid_to.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Checkbox checked=is_active label="Active" />
                </div>
            </div>
            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description />
            </div>
            <div class="form__group">
                <Label>"Terms"</Label>
                <Textarea value=terms />
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_business::seed;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_offer_state() {
        let offers = seed::offers();
        let paused = offers.iter().find(|o| !o.is_active).unwrap();
        assert_eq!(offer_state(paused, d(2025, 1, 15)).0, "Paused");

        let first = &offers[0];
        assert_eq!(offer_state(first, d(2025, 1, 15)).0, "Live");
        assert_eq!(offer_state(first, d(2024, 12, 1)).0, "Scheduled");
        assert_eq!(offer_state(first, d(2025, 4, 1)).0, "Expired");
    }

    #[test]
    fn test_visible_offers_by_business_and_date() {
        let offers = seed::offers();
        let today = d(2025, 1, 15);
        let for_first = visible_offers(&offers, "", Some(RecordId(1)), false, today);
        assert!(for_first.iter().all(|o| o.business_id == RecordId(1)));
        let live = visible_offers(&offers, "", None, true, today);
        assert_eq!(live.len(), active_on(&offers, today));
    }
}
