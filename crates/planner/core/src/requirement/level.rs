use super::{RequirementEntry, RequirementKind};
use crate::env::{CatalogOracle, CostTable, Env, TablesOracle};
use crate::state::{Axis, ProgressionRange};

/// Cumulative table value at a 1-indexed level. Level 0 costs nothing.
fn cumulative_at<T>(tables: &T, table: CostTable, level: u32) -> Option<i64>
where
    T: TablesOracle + ?Sized,
{
    match level.checked_sub(1) {
        Some(index) => tables.lookup(table, index as usize),
        None => Some(0),
    }
}

/// Non-negative `target - current`, or zero on underflow or overflow.
fn difference(target: i64, current: i64) -> u64 {
    target
        .checked_sub(current)
        .and_then(|delta| u64::try_from(delta).ok())
        .unwrap_or(0)
}

/// Experience needed to go from `range.current` to `range.target`.
///
/// Levels beyond the table count as zero experience.
pub fn experience_needed<C, T>(env: &Env<'_, C, T>, range: ProgressionRange) -> u64
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    if !range.is_pending() {
        return 0;
    }
    let Ok(tables) = env.tables() else {
        return 0;
    };

    let current = cumulative_at(tables, CostTable::CharacterXp, range.current).unwrap_or(0);
    let target = cumulative_at(tables, CostTable::CharacterXp, range.target).unwrap_or(0);
    difference(target, current)
}

/// Character level axis. Emits at most one `level-currency` entry.
pub fn level_requirements<C, T>(env: &Env<'_, C, T>, range: ProgressionRange) -> Vec<RequirementEntry>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    if !range.is_pending() {
        return Vec::new();
    }
    let tables = match env.tables() {
        Ok(tables) => tables,
        Err(error) => {
            tracing::debug!(%error, "skipping level requirements");
            return Vec::new();
        }
    };
    if experience_needed(env, range) == 0 {
        return Vec::new();
    }

    let current = cumulative_at(tables, CostTable::CharacterCredits, range.current);
    let target = cumulative_at(tables, CostTable::CharacterCredits, range.target);
    let (Some(current), Some(target)) = (current, target) else {
        tracing::debug!(?range, "character credits table too short");
        return Vec::new();
    };

    match difference(target, current) {
        0 => Vec::new(),
        cost => vec![RequirementEntry::new(
            env.config().currency_id,
            cost,
            RequirementKind::LevelCurrency,
            Axis::Level,
        )],
    }
}
