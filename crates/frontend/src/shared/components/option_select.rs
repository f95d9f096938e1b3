use contracts::domain::common::Choice;
use leptos::prelude::*;
use thaw::*;

/// `(code, label)` pairs for every value of a choice enum.
pub fn choice_options<C: Choice>() -> Vec<(String, String)> {
    C::all()
        .iter()
        .map(|c| (c.code().to_string(), c.label().to_string()))
        .collect()
}

/// Same value used as code and label, for free-text lists like departments.
pub fn plain_options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// Select bound to a code signal. With `any_label` an empty code means
/// "no filter".
#[component]
pub fn OptionSelect(
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] any_label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Select value=value>
            {any_label.map(|label| view! { <option value="">{label}</option> })}
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(code, label)| {
                        let selected_code = code.clone();
                        view! {
                            <option value=code selected=move || value.get() == selected_code>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </Select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::UserRole;

    #[test]
    fn test_choice_options_follow_enum_order() {
        let opts = choice_options::<UserRole>();
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0], ("admin".to_string(), "Admin".to_string()));
    }
}
