//! Removing entries from a sequence without skipping any.

use alloc::vec::Vec;

/// Removes every element matching `pred` and returns how many were removed.
///
/// The sequence is walked from the back, so removing an element never
/// shifts one that has not been visited yet. The survivors keep their
/// relative order.
///
/// ```
/// use cardkit::remove_where;
///
/// let mut songs = vec!["Blue Suede Shoes", "Hound Dog", "Hound Dog", "Love Me Tender"];
/// let removed = remove_where(&mut songs, |song| *song == "Hound Dog");
/// assert_eq!(removed, 2);
/// assert_eq!(songs, ["Blue Suede Shoes", "Love Me Tender"]);
/// ```
pub fn remove_where<T, F>(items: &mut Vec<T>, mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let before = items.len();
    for index in (0..before).rev() {
        if pred(&items[index]) {
            items.remove(index);
        }
    }
    before - items.len()
}
