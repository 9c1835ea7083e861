use crate::customer::Customer;
use crate::CatalogResult;
use crate::discount::{FriendDiscount, StandardDiscount, VipDiscount};
use crate::pricing::{FriendPricing, StandardPricing, VipPricing};
use crate::tier::CustomerTier;

/// Builds customers pre-wired with their tier's strategies
pub struct CustomerFactory;

impl CustomerFactory {
    pub fn create(tier: CustomerTier) -> Customer {
        let customer = match tier {
            CustomerTier::Standard => Customer::new(tier, &StandardPricing, &StandardDiscount),
            CustomerTier::Vip => Customer::new(tier, &VipPricing, &VipDiscount),
            CustomerTier::Friend => Customer::new(tier, &FriendPricing, &FriendDiscount),
        };

        tracing::debug!(
            tier = %tier,
            pricing = customer.pricing_strategy(),
            discount = customer.discount_strategy(),
            "Customer created"
        );

        customer
    }

    /// Parse a tier name and build the matching customer
    pub fn create_by_name(name: &str) -> CatalogResult<Customer> {
        Ok(Self::create(name.parse()?))
    }

    /// One customer per tier, in `CustomerTier::ALL` order
    pub fn create_all() -> Vec<Customer> {
        CustomerTier::ALL.into_iter().map(Self::create).collect()
    }
}
