//! In-memory data layer shared by every page.
//!
//! Each collection is seeded once when the app starts and lives until the
//! page is reloaded.

use contracts::domain::a001_user::{seed as user_seed, User};
use contracts::domain::a002_guidance_request::{seed as request_seed, GuidanceRequest};
use contracts::domain::a003_chat::{seed as chat_seed, Conversation};
use contracts::domain::a004_notification::{seed as notification_seed, Notification};
use contracts::domain::a005_job::{seed as job_seed, Job};
use contracts::domain::a006_business::{seed as business_seed, Business, CategoryCatalog, Offer};
use contracts::domain::a007_event::{seed as event_seed, Event};
use contracts::domain::a008_settings::{AdminProfile, AppSettings};
use contracts::domain::common::{Collection, Entity, RecordId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DataStore {
    pub users: RwSignal<Collection<User>>,
    pub requests: RwSignal<Collection<GuidanceRequest>>,
    pub conversations: RwSignal<Collection<Conversation>>,
    pub notifications: RwSignal<Collection<Notification>>,
    pub jobs: RwSignal<Collection<Job>>,
    pub businesses: RwSignal<Collection<Business>>,
    pub categories: RwSignal<CategoryCatalog>,
    pub offers: RwSignal<Collection<Offer>>,
    pub events: RwSignal<Collection<Event>>,
    pub profile: RwSignal<AdminProfile>,
    pub settings: RwSignal<AppSettings>,
}

impl DataStore {
    pub fn seeded() -> Self {
        let store = Self {
            users: RwSignal::new(Collection::from_seed(user_seed::users())),
            requests: RwSignal::new(Collection::from_seed(request_seed::requests())),
            conversations: RwSignal::new(Collection::from_seed(chat_seed::conversations())),
            notifications: RwSignal::new(Collection::from_seed(
                notification_seed::notifications(),
            )),
            jobs: RwSignal::new(Collection::from_seed(job_seed::jobs())),
            businesses: RwSignal::new(Collection::from_seed(business_seed::businesses())),
            categories: RwSignal::new(CategoryCatalog::from_seed(business_seed::categories())),
            offers: RwSignal::new(Collection::from_seed(business_seed::offers())),
            events: RwSignal::new(Collection::from_seed(event_seed::events())),
            profile: RwSignal::new(AdminProfile::default()),
            settings: RwSignal::new(AppSettings::default()),
        };
        log::debug!(
            "data store seeded: {} users, {} requests, {} jobs, {} businesses, {} events",
            store.users.with_untracked(Collection::len),
            store.requests.with_untracked(Collection::len),
            store.jobs.with_untracked(Collection::len),
            store.businesses.with_untracked(Collection::len),
            store.events.with_untracked(Collection::len),
        );
        store
    }

    /// Rows per page for a freshly opened list, from the settings page.
    pub fn page_size(&self) -> usize {
        self.settings.with_untracked(|s| s.items_per_page)
    }
}

/// Removes `id` from `collection` and logs the outcome.
pub fn remove_logged<T>(collection: RwSignal<Collection<T>>, id: RecordId) -> bool
where
    T: Entity + Send + Sync + 'static,
{
    let mut removed = false;
    collection.update(|c| removed = c.remove(id).is_some());
    if removed {
        log::info!("{} #{} deleted", T::element_name(), id);
    } else {
        log::warn!("{} #{} not found for delete", T::element_name(), id);
    }
    removed
}

pub fn use_store() -> DataStore {
    use_context::<DataStore>().expect("DataStore context not found")
}
