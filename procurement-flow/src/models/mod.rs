//! Domain models exchanged with the remote console API.

pub mod business_profile;
pub mod line_item;
pub mod procurement;
pub mod product;
pub mod staff;

pub use business_profile::BusinessProfileSummary;
pub use line_item::LineItem;
pub use procurement::{CreateProcurementRequest, CreatedProcurement, InvoiceDraft};
pub use product::{ProductDetail, ProductSummary, Variant};
pub use staff::{CreateStaffRequest, NewStaffDetails};
