use contracts::domain::a004_notification::{Audience, Notification};
use contracts::domain::common::{Choice, Searchable};

#[derive(Clone, Debug, Default)]
pub struct NotificationListState {
    pub search_query: String,
    /// Audience code, empty for any
    pub audience: String,
    pub unread_only: bool,
}

impl NotificationListState {
    pub fn matches(&self, n: &Notification) -> bool {
        n.matches_filter(&self.search_query)
            && Audience::from_code(&self.audience).map_or(true, |a| n.audience == a)
            && (!self.unread_only || !n.read)
    }

    /// Matching notifications, newest first.
    pub fn visible(&self, items: &[Notification]) -> Vec<Notification> {
        let mut rows: Vec<Notification> =
            items.iter().filter(|n| self.matches(n)).cloned().collect();
        rows.sort_by(|a, b| b.created_on.cmp(&a.created_on).then(b.id.cmp(&a.id)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_notification::seed;

    #[test]
    fn test_newest_first() {
        let rows = NotificationListState::default().visible(&seed::notifications());
        assert_eq!(rows.len(), seed::notifications().len());
        assert!(rows.windows(2).all(|w| w[0].created_on >= w[1].created_on));
    }

    #[test]
    fn test_unread_only() {
        let items = seed::notifications();
        let state = NotificationListState {
            unread_only: true,
            ..Default::default()
        };
        let rows = state.visible(&items);
        assert_eq!(rows.len(), items.iter().filter(|n| !n.read).count());
        assert!(rows.iter().all(|n| !n.read));
    }

    #[test]
    fn test_audience_filter() {
        let items = seed::notifications();
        let state = NotificationListState {
            audience: Audience::Counsellors.code().to_string(),
            ..Default::default()
        };
        assert!(state
            .visible(&items)
            .iter()
            .all(|n| n.audience == Audience::Counsellors));
    }
}
