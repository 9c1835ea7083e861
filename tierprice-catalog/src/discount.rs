use chrono::NaiveDate;
use tierprice_shared::Discount;

/// Discount calculation for an item on a given date
pub trait DiscountStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn discount(&self, item_id: &str, as_of: NaiveDate) -> Discount;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDiscount;

impl DiscountStrategy for StandardDiscount {
    fn name(&self) -> &'static str {
        "standard_discount"
    }

    fn discount(&self, _item_id: &str, _as_of: NaiveDate) -> Discount {
        Discount::NONE
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VipDiscount;

impl DiscountStrategy for VipDiscount {
    fn name(&self) -> &'static str {
        "vip_discount"
    }

    fn discount(&self, _item_id: &str, _as_of: NaiveDate) -> Discount {
        Discount::percent(50)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FriendDiscount;

impl DiscountStrategy for FriendDiscount {
    fn name(&self) -> &'static str {
        "friend_discount"
    }

    fn discount(&self, _item_id: &str, _as_of: NaiveDate) -> Discount {
        Discount::percent(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_discounts() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

        assert_eq!(StandardDiscount.discount("item1", date), Discount::NONE);
        assert_eq!(VipDiscount.discount("item1", date), Discount::percent(50));
        assert_eq!(FriendDiscount.discount("item1", date), Discount::percent(100));
    }
}
