//! Level-scaled step tables.

/// Value for the greatest threshold level `<= level`, or 0 below the first.
///
/// Tables are `(value, threshold_level)` pairs in ascending threshold order.
pub fn level_value(table: &[(i32, u32)], level: u32) -> i32 {
    table
        .iter()
        .rev()
        .find(|&&(_, threshold)| level >= threshold)
        .map_or(0, |&(value, _)| value)
}
