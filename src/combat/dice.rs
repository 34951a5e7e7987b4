//! `XdY` dice strings.

use crate::core::error::DiceError;
use crate::core::rng::uniform_int;
use rand::Rng;

/// Parses `"XdY"` into `(count, sides)`. The highest possible total must
/// fit an `i32`.
pub fn parse_dice(dice: &str) -> Result<(u32, u32), DiceError> {
    let (count, sides) = dice
        .trim()
        .split_once(|c: char| c == 'd' || c == 'D')
        .ok_or_else(|| DiceError::MissingSeparator(dice.to_string()))?;
    let count: u32 = count
        .trim()
        .parse()
        .map_err(|_| DiceError::NotANumber(dice.to_string()))?;
    let sides: u32 = sides
        .trim()
        .parse()
        .map_err(|_| DiceError::NotANumber(dice.to_string()))?;
    if sides == 0 {
        return Err(DiceError::NoSides(dice.to_string()));
    }
    if u64::from(count) * u64::from(sides) > i32::MAX as u64 {
        return Err(DiceError::TooLarge(dice.to_string()));
    }
    Ok((count, sides))
}

/// Rolls `count` dice of `sides` sides and sums them.
pub fn roll_dice(dice: &str, rng: &mut impl Rng) -> Result<i32, DiceError> {
    let (count, sides) = parse_dice(dice)?;
    Ok((0..count).map(|_| uniform_int(rng, 1, sides as i32)).sum())
}
