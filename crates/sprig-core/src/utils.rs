/// Number of decimal digits needed to print indices in `0..count`.
///
/// # Examples
/// ```
/// use sprig_core::utils::width_for_count;
/// assert_eq!(width_for_count(0), 1);
/// assert_eq!(width_for_count(10), 1);
/// assert_eq!(width_for_count(11), 2);
/// ```
pub fn width_for_count(count: usize) -> usize {
    let max = count.saturating_sub(1);
    let mut width = 1;
    let mut rest = max / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}
