//! # Cart
//!
//! An ordered sequence of items and the checkout that prices them.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart [Book, Book, Fruit, Fruit]                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  priced_lines() ──► LineCost, LineCost, LineCost, LineCost   (lazy)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  checkout() ──► Receipt { lines, total = Σ line.cost }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines always come out in insertion order. The total does not depend on
//! order.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::item::{Item, ItemVisitor};
use crate::money::Money;
use crate::pricing::{price_item, LineCost, PricingPolicy};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart. Owns its items; order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Cart { items }
    }

    /// Appends an item at the end of the cart.
    pub fn push(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prices every item, lazily, in cart order.
    ///
    /// The iterator borrows the cart and can be recreated any number of
    /// times with identical results.
    pub fn priced_lines<'a>(
        &'a self,
        policy: &'a PricingPolicy,
    ) -> impl Iterator<Item = LineCost> + 'a {
        self.items.iter().map(move |item| price_item(policy, item))
    }

    /// Sum of all line costs.
    pub fn total(&self, policy: &PricingPolicy) -> Money {
        self.priced_lines(policy).map(|line| line.cost()).sum()
    }

    /// Prices the whole cart into a [`Receipt`].
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Cart, PricingPolicy};
    ///
    /// let receipt = Cart::new().checkout(&PricingPolicy::default());
    /// assert!(receipt.lines().is_empty());
    /// assert_eq!(receipt.to_string(), "Total cost = 0\n");
    /// ```
    pub fn checkout(&self, policy: &PricingPolicy) -> Receipt {
        let receipt = Receipt::from_lines(self.priced_lines(policy).collect());
        info!(
            items = receipt.lines().len(),
            total = receipt.total().units(),
            "Cart checked out"
        );
        receipt
    }

    /// Walks the cart left to right, applying `visitor` to each item.
    ///
    /// Returns the visitor outputs in cart order. Any state the visitor
    /// keeps (such as a running total) is left in `visitor`.
    pub fn accept_all<V: ItemVisitor>(&self, visitor: &mut V) -> Vec<V::Output> {
        self.items.iter().map(|item| item.accept(visitor)).collect()
    }
}

impl FromIterator<Item> for Cart {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Cart {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A priced cart.
///
/// ## Invariant
/// `total` is always the sum of `lines[..].cost()`. The only constructor
/// computes it.
///
/// ## Display
/// One line per item, then the total:
/// ```text
/// Book ISBN:ISBN-1234 cost = 40
/// Banana cost = 10
/// Total cost = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    lines: Vec<LineCost>,
    total: Money,
}

impl Receipt {
    pub fn from_lines(lines: Vec<LineCost>) -> Self {
        let total = lines.iter().map(LineCost::cost).sum();
        Receipt { lines, total }
    }

    pub fn lines(&self) -> &[LineCost] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// The closing line, `Total cost = <total>`.
    pub fn total_line(&self) -> String {
        format!("Total cost = {}", self.total)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", self.total_line())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
