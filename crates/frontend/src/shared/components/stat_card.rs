use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual tone of a [`StatCard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Bad => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Neutral => "stat-card",
        }
    }
}

/// Groups digits with a narrow no-break space: 12345 → "12 345".
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{202f}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<u64>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Route opened when the card is clicked
    #[prop(optional)]
    href: Option<&'static str>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    let body = view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_thousands(value.get())}</div>
                {subtitle_view}
            </div>
        </div>
    };

    match href {
        Some(href) => view! { <a class="stat-card__link" href=href>{body}</a> }.into_any(),
        None => body.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234), "1\u{202f}234");
        assert_eq!(format_thousands(1234567), "1\u{202f}234\u{202f}567");
    }
}
