//! Domain models for the catalog and the admin panel.

pub mod inquiry;
pub mod product;
pub mod session;

pub use inquiry::{Inquiry, InquiryFilter, InquiryListing, NewInquiry, ProductRef};
pub use product::{
    CATEGORIES, FEATURED_LIMIT, NewProduct, Product, ProductChanges, ProductFilter,
};
pub use session::{AdminSession, keys as session_keys};
