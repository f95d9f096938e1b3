use contracts::domain::a001_user::{aggregate::names_with_role, UserRole};
use contracts::domain::a002_guidance_request::{GuidanceRequest, RequestStatus};
use contracts::domain::common::{Choice, RecordId, ValidationResult};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use serde::Deserialize;
use thaw::*;

use super::status_badge_class;
use crate::shared::browser::alert;
use crate::shared::components::option_select::{choice_options, plain_options, OptionSelect};
use crate::shared::config::use_config;
use crate::shared::data::store::use_store;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

#[derive(Debug, Deserialize)]
struct DetailsQuery {
    id: RecordId,
}

/// Request id from `?id=..`; anything else is `None`.
pub fn parse_request_id(query: &str) -> Option<RecordId> {
    serde_qs::from_str::<DetailsQuery>(query.trim_start_matches('?'))
        .map(|q| q.id)
        .ok()
}

#[component]
pub fn RequestDetails() -> impl IntoView {
    let store = use_store();
    let location = use_location();
    let request_id = Memo::new(move |_| parse_request_id(&location.search.get()));

    let request = Memo::new(move |_| {
        request_id
            .get()
            .and_then(|id| store.requests.with(|r| r.get(id).cloned()))
    });

    view! {
        <PageFrame page_id="a002_guidance_request--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <a href="/guidance-requests" class="button button--subtle" title="Back to requests">
                        {icon("chevron-left")}
                    </a>
                    <h1 class="page__title">
                        {move || match request_id.get() {
                            Some(id) => format!("Guidance Request #{id}"),
                            None => "Guidance Request".to_string(),
                        }}
                    </h1>
                </div>
            </div>
            {move || match request.get() {
                Some(r) => view! { <RequestCard request=r /> }.into_any(),
                None => view! {
                    <div class="alert alert--error">
                        "Request not found. It may have been deleted or the link is incomplete."
                    </div>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn RequestCard(request: GuidanceRequest) -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let id = request.id;

    let counsellor = RwSignal::new(request.assigned_counsellor.clone().unwrap_or_default());
    let response = RwSignal::new(request.response.clone().unwrap_or_default());
    let status = RwSignal::new(request.status.code().to_string());
    let error = RwSignal::new(None::<String>);

    let counsellors = Signal::derive(move || {
        store
            .users
            .with(|users| plain_options(names_with_role(users.items(), UserRole::Counsellor, "")))
    });

    // Every action goes through here so failures show up the same way.
    let run = move |label: &'static str, action: &dyn Fn(&mut GuidanceRequest) -> ValidationResult| {
        let mut result = Ok(());
        store
            .requests
            .update(|requests| result = requests.try_modify(id, |r| action(r)));
        match result {
            Ok(()) => {
                error.set(None);
                log::info!("guidance request #{id}: {label}");
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                alert(&e.to_string());
            }
        }
    };

    let assign = move |_| {
        let name = counsellor.get_untracked();
        run("counsellor assigned", &|r| r.assign(&name));
    };

    let respond = move |_| {
        let text = response.get_untracked();
        run("response sent", &|r| r.respond(&text));
    };

    let update_status = move |_| {
        let Some(next) = RequestStatus::from_code(&status.get_untracked()) else {
            return;
        };
        run("status changed", &|r| {
            r.set_status(next);
            Ok(())
        });
    };

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-section">
                <h3 class="details-section__title">"Request"</h3>
                <div class="details-grid--3col">
                    <div class="details-field">
                        <span class="details-field__label">"Devotee"</span>
                        <span class="details-field__value">{request.devotee.clone()}</span>
                    </div>
                    <div class="details-field">
                        <span class="details-field__label">"Phone"</span>
                        <span class="details-field__value">{request.phone.clone()}</span>
                    </div>
                    <div class="details-field">
                        <span class="details-field__label">"Requested on"</span>
                        <span class="details-field__value">{config.format_date(request.requested_on)}</span>
                    </div>
                    <div class="details-field">
                        <span class="details-field__label">"Type"</span>
                        <span class="badge badge--neutral">{request.request_type.label()}</span>
                    </div>
                    <div class="details-field">
                        <span class="details-field__label">"Status"</span>
                        <span class=status_badge_class(request.status)>{request.status.label()}</span>
                    </div>
                    <div class="details-field">
                        <span class="details-field__label">"Counsellor"</span>
                        <span class="details-field__value">
                            {request.assigned_counsellor.clone().unwrap_or_else(|| "Unassigned".to_string())}
                        </span>
                    </div>
                </div>
                <p class="details-message">{request.message.clone()}</p>
            </div>

            <div class="details-section">
                <h3 class="details-section__title">"Assign counsellor"</h3>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="width: 240px;">
                        <OptionSelect value=counsellor options=counsellors any_label="Select counsellor" />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=assign>
                        {icon("user")}
                        " Assign"
                    </Button>
                </Flex>
            </div>

            <div class="details-section">
                <h3 class="details-section__title">"Response"</h3>
                <div class="form__group">
                    <Textarea value=response placeholder="Reply to the devotee..." />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=respond>
                    {icon("send")}
                    " Send response"
                </Button>
            </div>

            <div class="details-section">
                <h3 class="details-section__title">"Status"</h3>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="width: 200px;">
                        <OptionSelect value=status options={choice_options::<RequestStatus>()} />
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=update_status>
                        "Update status"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_id() {
        assert_eq!(parse_request_id("id=7"), Some(RecordId(7)));
        assert_eq!(parse_request_id("?id=1736900000000"), Some(RecordId(1_736_900_000_000)));
        assert_eq!(parse_request_id("id=abc"), None);
        assert_eq!(parse_request_id(""), None);
    }
}
