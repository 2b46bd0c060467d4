//! Shared datasets for integration tests and benchmarks.

use basket_graph::Transaction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Small hand-written grocery dataset.
///
/// Co-purchase counts: bread-milk 4, bread-butter 3, butter-milk 2,
/// eggs-bacon 2, coffee-sugar 1. `caviar` only appears alone.
pub fn grocery_transactions() -> Vec<Transaction> {
    vec![
        ["bread", "milk", "butter"].into(),
        ["bread", "milk"].into(),
        ["bread", "milk", "butter"].into(),
        ["bread", "milk", "eggs"].into(),
        ["bread", "butter"].into(),
        ["eggs", "bacon"].into(),
        ["bacon", "eggs", "eggs"].into(),
        ["coffee", "sugar"].into(),
        ["caviar"].into(),
    ]
}

/// Seeded synthetic baskets over a catalog of `catalog_size` items.
///
/// Item popularity is skewed towards low indices so that a few items form a
/// dense core, the way real baskets look. Same seed, same dataset.
pub fn synthetic_transactions(
    count: usize,
    catalog_size: usize,
    max_basket: usize,
    seed: u64,
) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let catalog_size = catalog_size.max(1);

    (0..count)
        .map(|_| {
            let basket = rng.gen_range(1..=max_basket.max(1));
            (0..basket)
                .map(|_| {
                    let skew: f64 = rng.gen::<f64>().powi(2);
                    let index = ((skew * catalog_size as f64) as usize).min(catalog_size - 1);
                    format!("item-{:04}", index)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_is_deterministic() {
        let a = synthetic_transactions(50, 20, 6, 7);
        let b = synthetic_transactions(50, 20, 6, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|tx| !tx.is_empty() && tx.len() <= 6));
    }
}
