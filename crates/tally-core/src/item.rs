//! # Cart Items
//!
//! The closed set of things that can sit in a cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Item                                       │
//! │                                                                         │
//! │        ┌─────────────────┐              ┌─────────────────┐             │
//! │        │      Book       │              │      Fruit      │             │
//! │        │  ─────────────  │              │  ─────────────  │             │
//! │        │  price          │              │  price_per_kg   │             │
//! │        │  isbn           │              │  weight_kg      │             │
//! │        └─────────────────┘              │  name           │             │
//! │                                         └─────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Double Dispatch
//! [`Item::accept`] matches on its own variant and calls the matching
//! [`ItemVisitor`] method. The match is exhaustive, so adding a variant
//! fails to compile until every visitor handles it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Book
// =============================================================================

/// A book, sold at a fixed price and identified by ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    price: Money,
    isbn: String,
}

impl Book {
    /// Creates a book. Never fails.
    pub fn new(price: Money, isbn: impl Into<String>) -> Self {
        Book {
            price,
            isbn: isbn.into(),
        }
    }

    /// List price before any discount.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

// =============================================================================
// Fruit
// =============================================================================

/// Fruit, sold by weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    price_per_kg: Money,
    weight_kg: i64,
    name: String,
}

impl Fruit {
    /// Creates a fruit entry. Never fails.
    pub fn new(price_per_kg: Money, weight_kg: i64, name: impl Into<String>) -> Self {
        Fruit {
            price_per_kg,
            weight_kg,
            name: name.into(),
        }
    }

    #[inline]
    pub fn price_per_kg(&self) -> Money {
        self.price_per_kg
    }

    /// Weight in whole kilograms.
    #[inline]
    pub fn weight_kg(&self) -> i64 {
        self.weight_kg
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Item Kind
// =============================================================================

/// Discriminant of an [`Item`], for logging and line metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Book,
    Fruit,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Book => f.write_str("book"),
            ItemKind::Fruit => f.write_str("fruit"),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A purchasable entry in the cart. Exactly one concrete kind per value.
///
/// ## Serialization
/// Internally tagged, which is the shape an external loader would hand over:
/// ```json
/// { "kind": "book", "price": 40, "isbn": "ISBN-1234" }
/// { "kind": "fruit", "price_per_kg": 2, "weight_kg": 5, "name": "Banana" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Book(Book),
    Fruit(Fruit),
}

impl Item {
    /// Dispatches to the visitor operation matching this item's kind.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Book, Fruit, Item, ItemVisitor};
    /// use tally_core::money::Money;
    ///
    /// struct Labels;
    ///
    /// impl ItemVisitor for Labels {
    ///     type Output = String;
    ///
    ///     fn visit_book(&mut self, book: &Book) -> String {
    ///         book.isbn().to_string()
    ///     }
    ///
    ///     fn visit_fruit(&mut self, fruit: &Fruit) -> String {
    ///         fruit.name().to_string()
    ///     }
    /// }
    ///
    /// let item: Item = Fruit::new(Money::from_units(3), 4, "Apple").into();
    /// assert_eq!(item.accept(&mut Labels), "Apple");
    /// ```
    pub fn accept<V: ItemVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Item::Book(book) => visitor.visit_book(book),
            Item::Fruit(fruit) => visitor.visit_fruit(fruit),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Book(_) => ItemKind::Book,
            Item::Fruit(_) => ItemKind::Fruit,
        }
    }

    /// Human identifier: ISBN for books, name for fruit.
    pub fn label(&self) -> &str {
        match self {
            Item::Book(book) => book.isbn(),
            Item::Fruit(fruit) => fruit.name(),
        }
    }
}

impl From<Book> for Item {
    fn from(book: Book) -> Self {
        Item::Book(book)
    }
}

impl From<Fruit> for Item {
    fn from(fruit: Fruit) -> Self {
        Item::Fruit(fruit)
    }
}

// =============================================================================
// Visitor
// =============================================================================

/// An operation defined for every [`Item`] kind.
///
/// Takes `&mut self` so implementations may accumulate across a traversal.
pub trait ItemVisitor {
    type Output;

    fn visit_book(&mut self, book: &Book) -> Self::Output;

    fn visit_fruit(&mut self, fruit: &Fruit) -> Self::Output;
}

// =============================================================================
// Unit Tests
// =============================================================================
