use super::aggregate::Business;
use super::category::{Category, SubCategory};
use super::offer::{Offer, OfferType};
use crate::domain::common::{ymd, RecordId};

/// Sample business categories
pub fn categories() -> Vec<Category> {
    let tree: [(i64, &str, &[(i64, &str)]); 5] = [
        (1, "Food & Catering", &[(1, "Restaurants"), (2, "Sweets"), (3, "Catering")]),
        (2, "Health & Wellness", &[(4, "Ayurveda"), (5, "Yoga Studios"), (6, "Clinics")]),
        (3, "Education", &[(7, "Tuition"), (8, "Music Classes")]),
        (4, "Retail", &[(9, "Puja Items"), (10, "Clothing"), (11, "Books")]),
        (5, "Services", &[(12, "Event Decor"), (13, "Travel")]),
    ];
    tree.into_iter()
        .map(|(id, name, subs)| Category {
            id: RecordId(id),
            name: name.to_string(),
            sub_categories: subs
                .iter()
                .map(|(sid, sname)| SubCategory {
                    id: RecordId(*sid),
                    name: sname.to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Sample business listings
pub fn businesses() -> Vec<Business> {
    vec![
        Business {
            id: RecordId(1),
            name: "Annapurna Bhojanalay".to_string(),
            category: "Food & Catering".to_string(),
            sub_category: "Restaurants".to_string(),
            location: "Pune".to_string(),
            phone: "+91 20 2553 1100".to_string(),
            email: "hello@annapurna.example".to_string(),
            website: "https://annapurna.example".to_string(),
            rating: 4.6,
            review_count: 212,
            description: "Pure vegetarian thali served since 1987.".to_string(),
            is_verified: true,
        },
        Business {
            id: RecordId(2),
            name: "Sattva Ayurveda Centre".to_string(),
            category: "Health & Wellness".to_string(),
            sub_category: "Ayurveda".to_string(),
            location: "Bengaluru".to_string(),
            phone: "+91 80 4123 7788".to_string(),
            email: "care@sattva.example".to_string(),
            website: "https://sattva.example".to_string(),
            rating: 4.2,
            review_count: 87,
            description: "Panchakarma therapies and consultations with certified vaidyas.".to_string(),
            is_verified: true,
        },
        Business {
            id: RecordId(3),
            name: "Gurukul Music Academy".to_string(),
            category: "Education".to_string(),
            sub_category: "Music Classes".to_string(),
            location: "Mumbai".to_string(),
            phone: "+91 22 2611 4455".to_string(),
            email: String::new(),
            website: String::new(),
            rating: 4.8,
            review_count: 45,
            description: "Hindustani vocal, tabla and harmonium for all ages.".to_string(),
            is_verified: false,
        },
        Business {
            id: RecordId(4),
            name: "Shubh Puja Bhandar".to_string(),
            category: "Retail".to_string(),
            sub_category: "Puja Items".to_string(),
            location: "Pune".to_string(),
            phone: "+91 20 2445 9090".to_string(),
            email: "orders@shubhpuja.example".to_string(),
            website: String::new(),
            rating: 3.9,
            review_count: 133,
            description: "Incense, diyas, idols and complete puja kits.".to_string(),
            is_verified: true,
        },
        Business {
            id: RecordId(5),
            name: "Utsav Decorators".to_string(),
            category: "Services".to_string(),
            sub_category: "Event Decor".to_string(),
            location: "Nashik".to_string(),
            phone: "+91 253 231 7766".to_string(),
            email: "book@utsav.example".to_string(),
            website: "https://utsav.example".to_string(),
            rating: 4.4,
            review_count: 61,
            description: "Flower and stage decoration for weddings and festivals.".to_string(),
            is_verified: false,
        },
    ]
}

/// Sample offers
pub fn offers() -> Vec<Offer> {
    vec![
        Offer {
            id: RecordId(1),
            business_id: RecordId(1),
            title: "Members' thali discount".to_string(),
            description: "Discount on the unlimited thali for community members.".to_string(),
            offer_type: OfferType::Percentage,
            value: 10.0,
            code: "MEMBER10".to_string(),
            valid_from: ymd(2025, 1, 1),
            valid_to: ymd(2025, 3, 31),
            terms: "Show your community ID card.".to_string(),
            is_active: true,
        },
        Offer {
            id: RecordId(2),
            business_id: RecordId(2),
            title: "Free first consultation".to_string(),
            description: "First ayurvedic consultation at no charge.".to_string(),
            offer_type: OfferType::FreeService,
            value: 0.0,
            code: "SATTVAFREE".to_string(),
            valid_from: ymd(2024, 12, 1),
            valid_to: ymd(2025, 2, 28),
            terms: "New patients only.".to_string(),
            is_active: true,
        },
        Offer {
            id: RecordId(3),
            business_id: RecordId(4),
            title: "Festival kit savings".to_string(),
            description: "Flat discount on complete puja kits.".to_string(),
            offer_type: OfferType::FlatAmount,
            value: 150.0,
            code: "KIT150".to_string(),
            valid_from: ymd(2024, 10, 1),
            valid_to: ymd(2024, 11, 15),
            terms: "Minimum purchase ₹1,000.".to_string(),
            is_active: false,
        },
    ]
}
