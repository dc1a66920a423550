//! Damage calculation.

/// Damage dealt by an attack.
///
/// # Formula
///
/// ```text
/// raw = attack - defense
/// damage = raw > 0 ? max(1, round(raw * multiplier)) : 0
/// ```
///
/// Rounding is half away from zero.
pub fn calculate_damage(attack: i32, defense: i32, multiplier: f32) -> i32 {
    let raw = attack.saturating_sub(defense);
    if raw <= 0 {
        return 0;
    }
    let scaled = (f64::from(raw) * f64::from(multiplier)).round();
    (scaled as i32).max(1)
}
