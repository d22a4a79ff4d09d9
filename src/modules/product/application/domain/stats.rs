/// Mean of the star values rounded to one decimal place; 0.0 when there
/// are no ratings at all.
pub fn average_stars(stars: &[i16]) -> f64 {
    if stars.is_empty() {
        return 0.0;
    }

    let sum: i64 = stars.iter().map(|s| *s as i64).sum();
    let mean = sum as f64 / stars.len() as f64;
    (mean * 10.0).round() / 10.0
}
