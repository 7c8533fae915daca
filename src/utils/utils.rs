/// Rounds `value` up to the next multiple of `multiple`, which must be non-zero.
pub fn round_up(value: usize, multiple: usize) -> Option<usize> {
    let rem = value % multiple;
    if rem == 0 {
        Some(value)
    } else {
        value.checked_add(multiple - rem)
    }
}
