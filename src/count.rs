//! Counting combinations without enumerating them

use crate::error::CountError;
use crate::palette::Palette;

/// The largest target [`count`] builds a table for
pub const MAX_COUNT_TARGET: u64 = 1 << 24;

/// The number of combinations of `palette` that add up to `target`.
/// Always equal to the number of items produced by [`enumerate`](crate::enumerate).
///
/// Uses a table of `target + 1` entries. Returns Err if `target` is above [`MAX_COUNT_TARGET`]
/// or the table cannot be allocated. Saturates at `u128::MAX`.
pub fn count(palette: &Palette, target: u64) -> Result<u128, CountError> {
    if target > MAX_COUNT_TARGET {
        return Err(CountError::TargetTooLarge {
            target,
            max: MAX_COUNT_TARGET,
        });
    }
    let target = target as usize;
    let entries = target + 1;
    // ways[n] is the number of combinations of the denominations seen so far adding up to n
    let mut ways: Vec<u128> = Vec::new();
    ways.try_reserve_exact(entries)
        .map_err(|source| CountError::Allocation { entries, source })?;
    ways.resize(entries, 0);
    ways[0] = 1;
    for denomination in palette.iter() {
        if denomination > target as u64 {
            continue;
        }
        let denomination = denomination as usize;
        for n in denomination..=target {
            ways[n] = ways[n].saturating_add(ways[n - denomination]);
        }
    }
    debug!(
        "{} combinations of [{}] add up to {}",
        ways[target], palette, target
    );
    Ok(ways[target])
}
