//! Value objects for basket analysis
//!
//! Items, transactions and the plain result records handed across the
//! query boundary.

use super::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Co-purchase count carried by an edge or a bundle
pub type Weight = u64;

/// Opaque product identifier. Compared, ordered and hashed by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed, lowercased copy of this identifier
    pub fn normalized(&self) -> Self {
        Self(self.0.trim().to_lowercase())
    }
}

impl Borrow<str> for Item {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for Item {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Items bought together in one purchase event, in the order the loader
/// produced them. Duplicates are kept here and collapsed when pairing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction {
    items: Vec<Item>,
}

impl Transaction {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Item>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
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

    /// Items with repeats removed, keeping the first occurrence of each
    pub fn distinct_items(&self) -> Vec<&Item> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .filter(|item| seen.insert(item.as_str()))
            .collect()
    }

    /// A transaction carrying an empty identifier cannot be paired safely
    pub fn is_malformed(&self) -> bool {
        self.items.iter().any(|item| item.as_str().is_empty())
    }

    pub fn normalized(&self) -> Self {
        Self {
            items: self.items.iter().map(Item::normalized).collect(),
        }
    }
}

impl<S: Into<Item>> FromIterator<S> for Transaction {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<Item>, const N: usize> From<[S; N]> for Transaction {
    fn from(items: [S; N]) -> Self {
        Self::new(items)
    }
}

impl<S: Into<Item>> From<Vec<S>> for Transaction {
    fn from(items: Vec<S>) -> Self {
        Self::new(items)
    }
}

/// Order in which a traversal explores the graph
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStrategy {
    #[default]
    BreadthFirst,
    DepthFirst,
}

/// An item reached by a traversal and the hop count at which it was recorded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedItem {
    pub item: Item,
    pub depth: usize,
}

impl VisitedItem {
    pub fn new(item: impl Into<Item>, depth: usize) -> Self {
        Self {
            item: item.into(),
            depth,
        }
    }
}

/// A neighbor of some query item together with their shared co-purchase count
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub item: Item,
    pub weight: Weight,
}

impl Association {
    pub fn new(item: impl Into<Item>, weight: Weight) -> Self {
        Self {
            item: item.into(),
            weight,
        }
    }
}

/// Canonical set of two or more distinct items, stored sorted so that
/// `{a,b,c}` and `{c,b,a}` are the same key.
///
/// Deserialization goes through [`Bundle::new`], so decoded bundles are
/// canonical too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Bundle {
    items: Vec<Item>,
}

impl Bundle {
    pub fn new<I, S>(items: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Item>,
    {
        let items: Vec<Item> = items
            .into_iter()
            .map(Into::into)
            .collect::<BTreeSet<Item>>()
            .into_iter()
            .collect();
        if items.len() < 2 {
            return Err(AnalysisError::InvalidInput(format!(
                "a bundle needs at least 2 distinct items, got {}",
                items.len()
            )));
        }
        Ok(Self { items })
    }

    /// Caller guarantees `items` is sorted, distinct and has length >= 2
    pub(crate) fn from_sorted(items: Vec<Item>) -> Self {
        debug_assert!(items.len() >= 2);
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self { items }
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

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i.as_str() == item)
    }
}

impl TryFrom<Vec<Item>> for Bundle {
    type Error = AnalysisError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Bundle> for Vec<Item> {
    fn from(bundle: Bundle) -> Self {
        bundle.items
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("}")
    }
}

/// A bundle and the number of transactions containing all of its items
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleFrequency {
    pub bundle: Bundle,
    pub frequency: Weight,
}

/// Summary counters for a built graph
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub isolated_count: usize,
    pub total_weight: Weight,
}
