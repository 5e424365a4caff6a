//! # Pricing
//!
//! Per-item pricing rules and the accumulating [`PricingVisitor`].
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Book                                                                   │
//! │    price > 50 ?  ── yes ──► cost = price - 5   "high-price discount"    │
//! │         │                                                               │
//! │         └──────── no ───► cost = price                                  │
//! │                                                                         │
//! │  Fruit                                                                  │
//! │    cost = price_per_kg × weight_kg             (never discounted)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`price_item`] and friends are pure: each returns a [`LineCost`] whose
//! `Display` is the receipt line. [`PricingVisitor`] wraps the same
//! functions and keeps a running total.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::item::{Book, Fruit, Item, ItemKind, ItemVisitor};
use crate::money::Money;
use crate::{BOOK_DISCOUNT, BOOK_DISCOUNT_THRESHOLD};

// =============================================================================
// Pricing Policy
// =============================================================================

/// The discount rule for books.
///
/// [`PricingPolicy::default`] is the fixed store policy: 5 off any book
/// priced above 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// A book priced strictly above this gets the discount.
    pub book_discount_threshold: Money,

    /// Flat amount taken off a qualifying book.
    pub book_discount: Money,
}

impl PricingPolicy {
    pub const fn new(book_discount_threshold: Money, book_discount: Money) -> Self {
        PricingPolicy {
            book_discount_threshold,
            book_discount,
        }
    }

    /// Returns the discount owed on a book at `price`, if any.
    pub fn book_discount_for(&self, price: Money) -> Option<Money> {
        (price > self.book_discount_threshold).then_some(self.book_discount)
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy::new(BOOK_DISCOUNT_THRESHOLD, BOOK_DISCOUNT)
    }
}

// =============================================================================
// Line Cost
// =============================================================================

/// The priced result of a single item.
///
/// ## Display
/// ```text
/// Book ISBN:ISBN-1234 cost = 40
/// Book ISBN:ISBN-5678 has a high-price discount. Discounted cost = 95
/// Banana cost = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCost {
    kind: ItemKind,
    label: String,
    list_price: Money,
    cost: Money,
    discount: Option<Money>,
}

impl LineCost {
    fn new(kind: ItemKind, label: &str, list_price: Money, discount: Option<Money>) -> Self {
        let cost = list_price - discount.unwrap_or_default();

        debug!(
            %kind,
            label,
            cost = cost.units(),
            discounted = discount.is_some(),
            "Priced item"
        );
        if cost.is_negative() {
            warn!(%kind, label, cost = cost.units(), "Item priced below zero");
        }

        LineCost {
            kind,
            label: label.to_string(),
            list_price,
            cost,
            discount,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// ISBN for books, name for fruit.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cost before any discount.
    pub fn list_price(&self) -> Money {
        self.list_price
    }

    /// What the customer pays for this line.
    pub fn cost(&self) -> Money {
        self.cost
    }

    pub fn discount(&self) -> Option<Money> {
        self.discount
    }

    pub fn is_discounted(&self) -> bool {
        self.discount.is_some()
    }
}

impl fmt::Display for LineCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.discount) {
            (ItemKind::Book, Some(_)) => write!(
                f,
                "Book ISBN:{} has a high-price discount. Discounted cost = {}",
                self.label, self.cost
            ),
            (ItemKind::Book, None) => write!(f, "Book ISBN:{} cost = {}", self.label, self.cost),
            (ItemKind::Fruit, _) => write!(f, "{} cost = {}", self.label, self.cost),
        }
    }
}

// =============================================================================
// Pure Pricing Functions
// =============================================================================

/// Prices a book: list price, less the policy discount when it applies.
///
/// ## Example
/// ```rust
/// use tally_core::{price_book, Book, Money, PricingPolicy};
///
/// let policy = PricingPolicy::default();
///
/// let cheap = price_book(&policy, &Book::new(Money::from_units(50), "ISBN-1"));
/// assert_eq!(cheap.cost().units(), 50);
///
/// let dear = price_book(&policy, &Book::new(Money::from_units(51), "ISBN-2"));
/// assert_eq!(dear.cost().units(), 46);
/// ```
pub fn price_book(policy: &PricingPolicy, book: &Book) -> LineCost {
    let discount = policy.book_discount_for(book.price());
    LineCost::new(ItemKind::Book, book.isbn(), book.price(), discount)
}

/// Prices fruit by weight. No discount applies.
pub fn price_fruit(fruit: &Fruit) -> LineCost {
    let list_price = fruit.price_per_kg() * fruit.weight_kg();
    LineCost::new(ItemKind::Fruit, fruit.name(), list_price, None)
}

/// Prices any item by matching on its kind.
pub fn price_item(policy: &PricingPolicy, item: &Item) -> LineCost {
    match item {
        Item::Book(book) => price_book(policy, book),
        Item::Fruit(fruit) => price_fruit(fruit),
    }
}

// =============================================================================
// Pricing Visitor
// =============================================================================

/// Prices each visited item and keeps a running total.
///
/// ## Accumulator
/// ```text
/// visit_book(40)    ──► total  40
/// visit_book(100)   ──► total 135   (95 after discount)
/// visit_fruit(2×5)  ──► total 145
/// visit_fruit(3×4)  ──► total 157
/// ```
///
/// There is no reset. Use a fresh visitor per traversal.
#[derive(Debug, Clone, Default)]
pub struct PricingVisitor {
    policy: PricingPolicy,
    total_cost: Money,
}

impl PricingVisitor {
    /// Creates a visitor using the default policy, with a zero total.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PricingPolicy) -> Self {
        PricingVisitor {
            policy,
            total_cost: Money::zero(),
        }
    }

    /// Sum of every cost visited so far. Zero before the first visit.
    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    fn record(&mut self, line: LineCost) -> LineCost {
        self.total_cost += line.cost();
        line
    }
}

impl ItemVisitor for PricingVisitor {
    type Output = LineCost;

    fn visit_book(&mut self, book: &Book) -> LineCost {
        let line = price_book(&self.policy, book);
        self.record(line)
    }

    fn visit_fruit(&mut self, fruit: &Fruit) -> LineCost {
        let line = price_fruit(fruit);
        self.record(line)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Collects `(level, message)` for every event emitted while installed.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

    impl Captured {
        fn warnings(&self) -> Vec<String> {
            self.0
                .lock()
                .unwrap()
                .iter()
                .filter(|(level, _)| *level == Level::WARN)
                .map(|(_, message)| message.clone())
                .collect()
        }
    }

    struct MessageField(String);

    impl Visit for MessageField {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut message = MessageField(String::new());
            event.record(&mut message);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), message.0));
        }
    }

    /// Runs `f` with a capturing subscriber as the thread default.
    fn capture<R>(f: impl FnOnce() -> R) -> (R, Captured) {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, captured)
    }

    fn book(price: i64, isbn: &str) -> Book {
        Book::new(Money::from_units(price), isbn)
    }

    fn fruit(per_kg: i64, weight: i64, name: &str) -> Fruit {
        Fruit::new(Money::from_units(per_kg), weight, name)
    }

    #[test]
    fn test_default_policy() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.book_discount_threshold.units(), 50);
        assert_eq!(policy.book_discount.units(), 5);
    }

    #[test]
    fn test_book_at_or_below_threshold_is_not_discounted() {
        let policy = PricingPolicy::default();

        for price in [0, 1, 40, 50] {
            let line = price_book(&policy, &book(price, "ISBN-1234"));
            assert_eq!(line.cost().units(), price);
            assert!(!line.is_discounted());
            assert_eq!(line.to_string(), format!("Book ISBN:ISBN-1234 cost = {}", price));
        }
    }

    #[test]
    fn test_book_above_threshold_is_discounted() {
        let policy = PricingPolicy::default();

        for price in [51, 100, 1000] {
            let line = price_book(&policy, &book(price, "ISBN-5678"));
            assert_eq!(line.cost().units(), price - 5);
            assert_eq!(line.list_price().units(), price);
            assert_eq!(line.discount(), Some(Money::from_units(5)));
            assert_eq!(
                line.to_string(),
                format!(
                    "Book ISBN:ISBN-5678 has a high-price discount. Discounted cost = {}",
                    price - 5
                )
            );
        }
    }

    #[test]
    fn test_fruit_is_price_times_weight() {
        let line = price_fruit(&fruit(2, 5, "Banana"));
        assert_eq!(line.cost().units(), 10);
        assert!(!line.is_discounted());
        assert_eq!(line.to_string(), "Banana cost = 10");

        let line = price_fruit(&fruit(3, 4, "Apple"));
        assert_eq!(line.to_string(), "Apple cost = 12");
    }

    #[test]
    fn test_expensive_fruit_is_never_discounted() {
        let line = price_fruit(&fruit(30, 10, "Durian"));
        assert_eq!(line.cost().units(), 300);
        assert_eq!(line.discount(), None);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy::new(Money::from_units(20), Money::from_units(3));
        let line = price_book(&policy, &book(40, "ISBN-1234"));
        assert_eq!(line.cost().units(), 37);
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        let line = price_fruit(&fruit(2, -5, "Ghost"));
        assert_eq!(line.cost().units(), -10);

        let line = price_book(&PricingPolicy::default(), &book(-1, "ISBN-0"));
        assert_eq!(line.cost().units(), -1);
    }

    #[test]
    fn test_negative_cost_logs_warning() {
        let (line, captured) = capture(|| price_fruit(&fruit(2, -5, "Ghost")));

        assert_eq!(line.cost().units(), -10);
        assert_eq!(captured.warnings(), vec!["Item priced below zero"]);
    }

    #[test]
    fn test_non_negative_cost_logs_no_warning() {
        let (_, captured) = capture(|| {
            price_fruit(&fruit(2, 5, "Banana"));
            price_book(&PricingPolicy::default(), &book(100, "ISBN-5678"));
            price_fruit(&fruit(0, 5, "Free"));
        });

        assert!(captured.warnings().is_empty());
    }

    #[test]
    fn test_large_fruit_saturates() {
        let line = price_fruit(&fruit(i64::MAX / 2, 3, "Bulk"));
        assert_eq!(line.cost().units(), i64::MAX);
        assert_eq!(line.to_string(), format!("Bulk cost = {}", i64::MAX));
    }

    #[test]
    fn test_large_running_total_saturates() {
        let mut visitor = PricingVisitor::new();
        let first = visitor.visit_book(&book(i64::MAX, "ISBN-MAX"));
        assert_eq!(first.cost().units(), i64::MAX - 5);

        visitor.visit_book(&book(i64::MAX, "ISBN-MAX"));
        assert_eq!(visitor.total_cost().units(), i64::MAX);

        visitor.visit_fruit(&fruit(i64::MAX, i64::MAX, "Bulk"));
        assert_eq!(visitor.total_cost().units(), i64::MAX);
    }

    #[test]
    fn test_price_item_matches_kind() {
        let policy = PricingPolicy::default();
        let item: Item = book(100, "ISBN-5678").into();
        assert_eq!(price_item(&policy, &item), price_book(&policy, &book(100, "ISBN-5678")));

        let item: Item = fruit(3, 4, "Apple").into();
        assert_eq!(price_item(&policy, &item), price_fruit(&fruit(3, 4, "Apple")));
    }

    #[test]
    fn test_visitor_total_starts_at_zero() {
        let visitor = PricingVisitor::new();
        assert_eq!(visitor.total_cost(), Money::zero());
    }

    #[test]
    fn test_visitor_accumulates() {
        let mut visitor = PricingVisitor::new();

        let line = visitor.visit_book(&book(40, "ISBN-1234"));
        assert_eq!(line.cost().units(), 40);
        assert_eq!(visitor.total_cost().units(), 40);

        visitor.visit_book(&book(100, "ISBN-5678"));
        assert_eq!(visitor.total_cost().units(), 135);

        visitor.visit_fruit(&fruit(2, 5, "Banana"));
        visitor.visit_fruit(&fruit(3, 4, "Apple"));
        assert_eq!(visitor.total_cost().units(), 157);
    }

    #[test]
    fn test_visitor_agrees_with_pure_functions() {
        let policy = PricingPolicy::new(Money::from_units(10), Money::from_units(1));
        let mut visitor = PricingVisitor::with_policy(policy);
        assert_eq!(visitor.policy(), &policy);

        let b = book(11, "ISBN-9");
        assert_eq!(visitor.visit_book(&b), price_book(&policy, &b));

        let f = fruit(4, 2, "Pear");
        assert_eq!(visitor.visit_fruit(&f), price_fruit(&f));
        assert_eq!(visitor.total_cost().units(), 10 + 8);
    }
}
