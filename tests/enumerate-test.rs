use std::collections::HashSet;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use coinsum::{count, enumerate, Combination, Palette};

const COINS: [i64; 7] = [1, 2, 5, 10, 20, 50, 100];

#[test]
fn test_coins() -> Result<()> {
    let combinations: Vec<_> = enumerate(&COINS, 100)?.collect();
    assert_eq!(4563, combinations.len());
    assert_eq!(&[100, 0, 0, 0, 0, 0, 0], combinations[0].counts());
    assert_eq!(
        &[0, 0, 0, 0, 0, 0, 1],
        combinations.last().unwrap().counts()
    );
    let palette = Palette::new(&COINS)?;
    for combination in &combinations {
        assert_eq!(100, combination.total(&palette));
    }
    let unique: HashSet<_> = combinations.iter().collect();
    assert_eq!(combinations.len(), unique.len());
    Ok(())
}

#[test]
fn test_restartable() -> Result<()> {
    let first: Vec<_> = enumerate(&COINS, 37)?.collect();
    let second: Vec<_> = enumerate(&COINS, 37)?.collect();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_target_zero() -> Result<()> {
    let combinations: Vec<_> = enumerate(&COINS, 0)?.collect();
    assert_eq!(1, combinations.len());
    assert!(combinations[0].counts().iter().all(|&c| c == 0));
    Ok(())
}

#[test]
fn test_invalid() {
    assert!(enumerate(&[1, 2], -1).is_err());
    assert!(enumerate(&[0, 2], 5).is_err());
    assert!(enumerate(&[3, -2], 0).is_err());
}

#[test]
fn test_random_against_brute_force() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(331);
    for _ in 0..50 {
        let len = rng.gen_range(0, 5);
        let denominations: Vec<i64> = (0..len).map(|_| rng.gen_range(1, 9)).collect();
        let target = rng.gen_range(0, 25);
        let palette = Palette::new(&denominations)?;

        let combinations: Vec<Combination> = enumerate(&denominations, target)?.collect();
        let found: HashSet<Vec<u64>> = combinations
            .iter()
            .map(|c| c.counts().to_vec())
            .collect();
        let expected = brute_force(&palette, target as u64);

        assert_eq!(
            combinations.len(),
            found.len(),
            "duplicates for {:?} {}",
            denominations,
            target
        );
        assert_eq!(expected, found, "{:?} {}", denominations, target);
        assert_eq!(
            combinations.len() as u128,
            count(&palette, target as u64)?,
            "{:?} {}",
            denominations,
            target
        );
    }
    Ok(())
}

/// every count vector with each count bounded by what fits in the target
fn brute_force(palette: &Palette, target: u64) -> HashSet<Vec<u64>> {
    let mut results = HashSet::new();
    let mut counts = vec![0; palette.len()];
    brute_force_rec(palette, target, 0, &mut counts, &mut results);
    results
}

fn brute_force_rec(
    palette: &Palette,
    target: u64,
    index: usize,
    counts: &mut Vec<u64>,
    results: &mut HashSet<Vec<u64>>,
) {
    if index == palette.len() {
        let total: u64 = palette.iter().zip(counts.iter()).map(|(d, c)| d * c).sum();
        if total == target {
            results.insert(counts.clone());
        }
        return;
    }
    for count in 0..=target / palette[index] {
        counts[index] = count;
        brute_force_rec(palette, target, index + 1, counts, results);
    }
    counts[index] = 0;
}
