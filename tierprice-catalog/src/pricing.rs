use chrono::NaiveDate;
use tierprice_shared::Price;

/// Price calculation for an item on a given date
///
/// Implementations hold no state, so one instance is shared by every
/// customer of a tier.
pub trait PricingStrategy: Send + Sync {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    fn price(&self, item_id: &str, as_of: NaiveDate) -> Price;
}

/// List price
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPricing;

impl PricingStrategy for StandardPricing {
    fn name(&self) -> &'static str {
        "standard_pricing"
    }

    fn price(&self, _item_id: &str, _as_of: NaiveDate) -> Price {
        Price::from_units(100)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VipPricing;

impl PricingStrategy for VipPricing {
    fn name(&self) -> &'static str {
        "vip_pricing"
    }

    fn price(&self, _item_id: &str, _as_of: NaiveDate) -> Price {
        Price::from_units(90)
    }
}

/// Friends pay nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct FriendPricing;

impl PricingStrategy for FriendPricing {
    fn name(&self) -> &'static str {
        "friend_pricing"
    }

    fn price(&self, _item_id: &str, _as_of: NaiveDate) -> Price {
        Price::ZERO
    }
}
