pub mod aggregate;
pub mod category;
pub mod offer;
pub mod seed;

pub use aggregate::{Business, BusinessDto, BusinessFilter};
pub use category::{Category, CategoryCatalog, SubCategory};
pub use offer::{Offer, OfferDto, OfferType};
