use contracts::domain::a008_settings::{AppSettings, PasswordChange, Theme, MIN_PASSWORD_LEN};
use contracts::domain::common::Choice;
use leptos::prelude::*;
use thaw::*;

use crate::shared::browser::{alert, confirm};
use crate::shared::components::option_select::{choice_options, plain_options, OptionSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::shared::data::store::use_store;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Settings form fields; booleans bind straight to checkboxes.
#[derive(Clone, Copy)]
struct SettingsFields {
    organization_name: RwSignal<String>,
    support_email: RwSignal<String>,
    theme: RwSignal<String>,
    items_per_page: RwSignal<String>,
    email_notifications: RwSignal<bool>,
    sms_notifications: RwSignal<bool>,
    allow_self_signup: RwSignal<bool>,
    maintenance_mode: RwSignal<bool>,
}

impl SettingsFields {
    fn new(s: &AppSettings) -> Self {
        Self {
            organization_name: RwSignal::new(s.organization_name.clone()),
            support_email: RwSignal::new(s.support_email.clone()),
            theme: RwSignal::new(s.theme.code().to_string()),
            items_per_page: RwSignal::new(s.items_per_page.to_string()),
            email_notifications: RwSignal::new(s.email_notifications),
            sms_notifications: RwSignal::new(s.sms_notifications),
            allow_self_signup: RwSignal::new(s.allow_self_signup),
            maintenance_mode: RwSignal::new(s.maintenance_mode),
        }
    }

    fn load(&self, s: &AppSettings) {
        self.organization_name.set(s.organization_name.clone());
        self.support_email.set(s.support_email.clone());
        self.theme.set(s.theme.code().to_string());
        self.items_per_page.set(s.items_per_page.to_string());
        self.email_notifications.set(s.email_notifications);
        self.sms_notifications.set(s.sms_notifications);
        self.allow_self_signup.set(s.allow_self_signup);
        self.maintenance_mode.set(s.maintenance_mode);
    }

    fn to_settings(self) -> AppSettings {
        AppSettings {
            organization_name: self.organization_name.get_untracked().trim().to_string(),
            support_email: self.support_email.get_untracked().trim().to_string(),
            theme: Theme::from_code(&self.theme.get_untracked()).unwrap_or_default(),
            // Unparseable input is not an offered page size
            items_per_page: self.items_per_page.get_untracked().trim().parse().unwrap_or(0),
            email_notifications: self.email_notifications.get_untracked(),
            sms_notifications: self.sms_notifications.get_untracked(),
            allow_self_signup: self.allow_self_signup.get_untracked(),
            maintenance_mode: self.maintenance_mode.get_untracked(),
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let fields = SettingsFields::new(&store.settings.get_untracked());
    let error = RwSignal::new(None::<String>);
    let allowed_sizes = StoredValue::new(config.lists.page_size_options.clone());

    let save = move || {
        let settings = fields.to_settings();
        if let Err(e) = allowed_sizes.with_value(|sizes| settings.validate(sizes)) {
            error.set(Some(e.to_string()));
            alert(&e.to_string());
            return;
        }
        log::info!(
            "settings saved: theme={}, items_per_page={}",
            settings.theme.code(),
            settings.items_per_page
        );
        store.settings.set(settings);
        error.set(None);
        alert("Settings saved successfully");
    };

    let default_page_size = config.lists.default_page_size;
    let restore_defaults = move || {
        if confirm("Restore default settings?") {
            let mut defaults = AppSettings::default();
            defaults.items_per_page = default_page_size;
            fields.load(&defaults);
            store.settings.set(defaults);
            log::info!("settings restored to defaults");
        }
    };

    let page_sizes = plain_options(
        config
            .lists
            .page_size_options
            .iter()
            .map(|n| n.to_string())
            .collect(),
    );

    view! {
        <PageFrame page_id="a008_settings--settings" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| restore_defaults()>
                    "Restore defaults"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| save()>
                    {icon("check")}
                    " Save Settings"
                </Button>
            </PageHeader>

            <div class="details-container">
                <div class="details-section">
                    <h3 class="details-section__title">"General"</h3>
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <div class="details-grid--2col">
                        <div class="form__group">
                            <Label>"Organization name"</Label>
                            <Input value=fields.organization_name />
                        </div>
                        <div class="form__group">
                            <Label>"Support email"</Label>
                            <Input value=fields.support_email input_type=InputType::Email />
                        </div>
                        <div class="form__group">
                            <Label>"Theme"</Label>
                            <OptionSelect value=fields.theme options={choice_options::<Theme>()} />
                        </div>
                        <div class="form__group">
                            <Label>"Items per page"</Label>
                            <OptionSelect value=fields.items_per_page options=page_sizes />
                        </div>
                    </div>
                </div>

                <div class="details-section">
                    <h3 class="details-section__title">"Notifications and access"</h3>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Checkbox checked=fields.email_notifications label="Email notifications" />
                        <Checkbox checked=fields.sms_notifications label="SMS notifications" />
                        <Checkbox checked=fields.allow_self_signup label="Allow self sign-up" />
                        <Checkbox checked=fields.maintenance_mode label="Maintenance mode" />
                    </Flex>
                </div>

                <PasswordSection />
                <ExportSection
                    page_sizes=allowed_sizes.get_value()
                    on_import=Callback::new(move |s: AppSettings| fields.load(&s))
                />
            </div>
        </PageFrame>
    }
}

#[component]
fn PasswordSection() -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        let change = PasswordChange {
            current: current.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm: confirm_password.get_untracked(),
        };
        if let Err(e) = change.validate() {
            error.set(Some(e.to_string()));
            alert(&e.to_string());
            return;
        }
        log::info!("password change submitted");
        alert("Password changed successfully");
        current.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
        error.set(None);
    };

    view! {
        <div class="details-section">
            <h3 class="details-section__title">"Change password"</h3>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-grid--2col">
                <div class="form__group">
                    <Label>"Current password"</Label>
                    <Input value=current input_type=InputType::Password />
                </div>
                <div></div>
                <div class="form__group">
                    <Label>"New password"</Label>
                    <Input
                        value=new_password
                        input_type=InputType::Password
                        placeholder=format!("At least {MIN_PASSWORD_LEN} characters")
                    />
                </div>
                <div class="form__group">
                    <Label>"Confirm password"</Label>
                    <Input value=confirm_password input_type=InputType::Password />
                </div>
            </div>
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                    {icon("key")}
                    " Update Password"
                </Button>
            </div>
        </div>
    }
}

/// JSON preview of the saved settings, plus import from pasted JSON.
#[component]
fn ExportSection(page_sizes: Vec<usize>, on_import: Callback<AppSettings>) -> impl IntoView {
    let store = use_store();
    let import_text = RwSignal::new(String::new());
    let page_sizes = StoredValue::new(page_sizes);

    let preview = move || {
        store.settings.with(|s| {
            s.to_json()
                .unwrap_or_else(|e| format!("failed to serialize settings: {e}"))
        })
    };

    let import = move || {
        let text = import_text.get_untracked();
        let parsed = parse_import(&text, &page_sizes.get_value());
        match parsed {
            Ok(settings) => {
                log::info!("settings imported");
                on_import.run(settings.clone());
                store.settings.set(settings);
                import_text.set(String::new());
                alert("Settings imported");
            }
            Err(e) => {
                log::warn!("settings import rejected: {e}");
                alert(&format!("Import failed: {e}"));
            }
        }
    };

    view! {
        <div class="details-section">
            <h3 class="details-section__title">"Export / import"</h3>
            <pre class="settings__json">{preview}</pre>
            <div class="form__group">
                <Label>"Paste settings JSON"</Label>
                <Textarea value=import_text />
            </div>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || import_text.get().trim().is_empty())
                    on_click=move |_| import()
                >
                    {icon("download")}
                    " Import"
                </Button>
            </div>
        </div>
    }
}

/// Pasted JSON must decode and hold values the settings form can show.
fn parse_import(text: &str, page_sizes: &[usize]) -> Result<AppSettings, String> {
    let settings = AppSettings::from_json(text).map_err(|e| e.to_string())?;
    settings.validate(page_sizes).map_err(|e| e.to_string())?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_round_trip_settings() {
        let owner = Owner::new();
        owner.with(|| {
            let mut source = AppSettings::default();
            source.theme = Theme::Dark;
            source.items_per_page = 25;
            let fields = SettingsFields::new(&source);
            assert_eq!(fields.to_settings(), source);

            fields.items_per_page.set("lots".to_string());
            assert_eq!(fields.to_settings().items_per_page, 0);
            assert!(fields.to_settings().validate(&[10, 25, 50]).is_err());
        });
    }

    #[test]
    fn test_import_rejects_unoffered_page_size() {
        let mut source = AppSettings::default();
        source.items_per_page = 37;
        let json = source.to_json().unwrap();
        let err = parse_import(&json, &[10, 25, 50]).unwrap_err();
        assert!(err.contains("Items per page"));

        source.items_per_page = 50;
        let json = source.to_json().unwrap();
        assert_eq!(parse_import(&json, &[10, 25, 50]), Ok(source));
        assert!(parse_import("{not json", &[10]).is_err());
    }
}
