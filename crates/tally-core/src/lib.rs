//! # tally-core: Pure Pricing Logic for Tally
//!
//! This crate prices a shopping cart of books and fruit. It contains all
//! pricing rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-cli (Console Driver)                   │   │
//! │  │    config ──► demo cart ──► checkout ──► write receipt         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │   money   │  │  pricing  │  │   cart    │  │   │
//! │  │   │   Book    │  │   Money   │  │  Policy   │  │   Cart    │  │   │
//! │  │   │   Fruit   │  │           │  │  Visitor  │  │  Receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ENVIRONMENT • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic
//! - [`item`] - The closed set of cart items (Book, Fruit) and the visitor trait
//! - [`pricing`] - Pricing policy, per-item pricing and the accumulating visitor
//! - [`cart`] - Ordered item sequence, checkout and receipt
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Book, Cart, Fruit, Item, Money, PricingPolicy};
//!
//! let items: Vec<Item> = vec![
//!     Book::new(Money::from_units(100), "ISBN-5678").into(),
//!     Fruit::new(Money::from_units(2), 5, "Banana").into(),
//! ];
//! let cart = Cart::from_items(items);
//!
//! let receipt = cart.checkout(&PricingPolicy::default());
//!
//! // 100 - 5 (high-price discount) + 2 × 5
//! assert_eq!(receipt.total().units(), 105);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod item;
pub mod money;
pub mod pricing;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, Receipt};
pub use item::{Book, Fruit, Item, ItemKind, ItemVisitor};
pub use money::Money;
pub use pricing::{price_book, price_fruit, price_item, LineCost, PricingPolicy, PricingVisitor};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Book price above which the flat discount applies (strictly greater).
pub const BOOK_DISCOUNT_THRESHOLD: Money = Money::from_units(50);

/// Flat discount taken off a book priced above [`BOOK_DISCOUNT_THRESHOLD`].
pub const BOOK_DISCOUNT: Money = Money::from_units(5);
