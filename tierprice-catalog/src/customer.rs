use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tierprice_shared::{Discount, Price};

use crate::discount::DiscountStrategy;
use crate::pricing::PricingStrategy;
use crate::tier::CustomerTier;

/// A customer of a given tier, wired to that tier's strategies.
///
/// Only [`CustomerFactory`](crate::CustomerFactory) builds customers, so the
/// strategy pair always matches the tier.
#[derive(Clone, Copy)]
pub struct Customer {
    tier: CustomerTier,
    pricing: &'static dyn PricingStrategy,
    discount: &'static dyn DiscountStrategy,
}

impl Customer {
    pub(crate) fn new(
        tier: CustomerTier,
        pricing: &'static dyn PricingStrategy,
        discount: &'static dyn DiscountStrategy,
    ) -> Self {
        Self { tier, pricing, discount }
    }

    pub fn tier(&self) -> CustomerTier {
        self.tier
    }

    pub fn price(&self, item_id: &str, as_of: NaiveDate) -> Price {
        self.pricing.price(item_id, as_of)
    }

    pub fn discount(&self, item_id: &str, as_of: NaiveDate) -> Discount {
        self.discount.discount(item_id, as_of)
    }

    /// Look up price and discount together
    pub fn quote(&self, item_id: &str, as_of: NaiveDate) -> PriceQuote {
        PriceQuote {
            tier: self.tier,
            item_id: item_id.to_string(),
            as_of,
            price: self.price(item_id, as_of),
            discount: self.discount(item_id, as_of),
        }
    }

    pub fn pricing_strategy(&self) -> &'static str {
        self.pricing.name()
    }

    pub fn discount_strategy(&self) -> &'static str {
        self.discount.name()
    }
}

impl fmt::Debug for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customer")
            .field("tier", &self.tier)
            .field("pricing", &self.pricing.name())
            .field("discount", &self.discount.name())
            .finish()
    }
}

/// Result of a single price/discount lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub tier: CustomerTier,
    pub item_id: String,
    pub as_of: NaiveDate,
    pub price: Price,
    pub discount: Discount,
}
