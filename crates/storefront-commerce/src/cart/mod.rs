//! Shopping cart module.
//!
//! Contains the cart engine, line items, and the checkout summary.

mod cart;
mod summary;

pub use cart::{Cart, CartItem};
pub use summary::{CartSummary, SummaryLine};
