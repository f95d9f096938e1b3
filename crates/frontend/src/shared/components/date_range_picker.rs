use crate::shared::date_utils::{input_date, parse_input_date};
use chrono::{Datelike, Months, NaiveDate};
use leptos::prelude::*;
use thaw::*;

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = date.with_day(1)?;
    let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((start, end))
}

/// Two date inputs with quick buttons for the previous month, the current
/// month and "all time" (both ends cleared).
#[component]
pub fn DateRangePicker(
    /// "from" value in yyyy-mm-dd, empty when open
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" value in yyyy-mm-dd, empty when open
    #[prop(into)]
    date_to: Signal<String>,

    /// Called with the new (from, to) pair
    on_change: Callback<(String, String)>,

    /// Date the "current month" button is anchored to
    today: NaiveDate,

    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let emit_month = move |date: NaiveDate| {
        if let Some((start, end)) = month_bounds(date) {
            on_change.run((input_date(start), input_date(end)));
        }
    };

    // Steps back one month from the selected start, or from today when open
    let on_previous_month = move |_| {
        let anchor = parse_input_date(&date_from.get_untracked()).unwrap_or(today);
        if let Some(prev) = anchor
            .with_day(1)
            .and_then(|d| d.checked_sub_months(Months::new(1)))
        {
            emit_month(prev);
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_change.run((event_target_value(&ev), date_to.get_untracked()));
                    }
                />
                <div>"—"</div>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_change.run((date_from.get_untracked(), event_target_value(&ev)));
                    }
                />
                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_previous_month
                    >
                        "-1M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| emit_month(today)
                    >
                        "0M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_change.run((String::new(), String::new()))
                    >
                        "All"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(d(2025, 1, 15)), Some((d(2025, 1, 1), d(2025, 1, 31))));
        assert_eq!(month_bounds(d(2024, 2, 3)), Some((d(2024, 2, 1), d(2024, 2, 29))));
        assert_eq!(month_bounds(d(2024, 12, 31)), Some((d(2024, 12, 1), d(2024, 12, 31))));
    }
}
