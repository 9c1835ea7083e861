pub mod money;

pub use money::{Discount, Price, CENTS_PER_UNIT};
