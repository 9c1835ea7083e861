pub mod tier;
pub mod pricing;
pub mod discount;
pub mod customer;
pub mod factory;

pub use tier::CustomerTier;
pub use pricing::{PricingStrategy, StandardPricing, VipPricing, FriendPricing};
pub use discount::{DiscountStrategy, StandardDiscount, VipDiscount, FriendDiscount};
pub use customer::{Customer, PriceQuote};
pub use factory::CustomerFactory;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid customer tier: {0}")]
    InvalidTier(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
