pub mod categories;
pub mod form;
pub mod list;
pub mod offers;

use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use categories::CategoriesPanel;
use list::BusinessListPanel;
use offers::OffersPanel;

/// `/businesses`: listings, their category tree and offers on one page
#[component]
pub fn BusinessesPage() -> impl IntoView {
    let tab = RwSignal::new("businesses".to_string());
    Effect::new(move |_| {
        log!("[BusinessesPage] Tab: {}", tab.get());
    });

    view! {
        <PageFrame page_id="a006_business--list" category=PAGE_CAT_LIST>
            <div class="page__tabs">
                <TabList selected_value=tab>
                    <Tab value="businesses">"Businesses"</Tab>
                    <Tab value="categories">"Categories"</Tab>
                    <Tab value="offers">"Offers"</Tab>
                </TabList>
            </div>
            {move || match tab.get().as_str() {
                "categories" => view! { <CategoriesPanel /> }.into_any(),
                "offers" => view! { <OffersPanel /> }.into_any(),
                _ => view! { <BusinessListPanel /> }.into_any(),
            }}
        </PageFrame>
    }
}
