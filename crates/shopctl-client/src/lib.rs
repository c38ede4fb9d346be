pub mod cancel;
pub mod client;
pub mod envelope;
pub mod error;
pub mod fetch_all;
pub mod search;
pub mod types;

pub use cancel::CancelToken;
pub use client::{CatalogClient, Credentials, FormReferences};
pub use envelope::{Page, PageMeta};
pub use error::ApiError;
pub use fetch_all::{Collected, FetchAllOptions, PageErrorPolicy, Truncation};
pub use search::SearchOptions;
pub use types::{
    BrandInput, CategoryInput, CategoryQuery, CompanyInput, DeliveryInput, DiscountInput,
    ListQuery, ProductInput, ProductQuery, TaxClassInput, UserInput, WarrantyInput,
};
