use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::labeling_assert_simple;

/// A stack of entries partitioned into levels.
///
/// Level 0 is the root; every [`Trail::new_checkpoint`] opens a new level. Entries pushed while a
/// level is open belong to that level and are handed back (newest first) when the trail is
/// synchronised to a lower level.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_checkpoint: usize,
    /// At index i is the position where the i-th level ends (exclusive) on the trail
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// We explicitly implement the Default and not as a macro, because we want to avoid imposing Default
// on the generic type T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_checkpoint: Default::default(),
            trail_delimiter: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn new_checkpoint(&mut self) {
        self.current_checkpoint += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn get_checkpoint(&self) -> usize {
        self.current_checkpoint
    }

    /// Removes the topmost checkpoint without removing any entries; the entries of the removed
    /// level become part of the level below it.
    pub(crate) fn merge_checkpoint(&mut self) {
        labeling_assert_simple!(
            self.current_checkpoint > 0,
            "cannot merge the root level into a lower level"
        );

        self.current_checkpoint -= 1;
        let _ = self.trail_delimiter.pop();
    }

    /// Removes every entry recorded above `new_checkpoint` and returns them newest first.
    pub(crate) fn synchronise(&mut self, new_checkpoint: usize) -> Rev<Drain<'_, T>> {
        labeling_assert_simple!(
            new_checkpoint <= self.current_checkpoint,
            "Expected the new level {new_checkpoint} to be at most the current level {}",
            self.current_checkpoint
        );

        let new_trail_len = if new_checkpoint == self.current_checkpoint {
            self.trail.len()
        } else {
            self.trail_delimiter[new_checkpoint]
        };

        self.current_checkpoint = new_checkpoint;
        self.trail_delimiter.truncate(new_checkpoint);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_values_are_observed_through_indexing() {
        let mut trail = Trail::default();

        let expected = [1, 2, 3, 4];
        for &elem in expected.iter() {
            trail.push(elem);
        }

        assert_eq!(&expected, trail.deref());
    }

    #[test]
    fn backtracking_removes_elements_beyond_checkpoint() {
        let mut trail = Trail::default();

        trail.new_checkpoint();
        trail.push(1);
        let _ = trail.synchronise(0);

        assert!(trail.is_empty());
        assert_eq!(0, trail.get_checkpoint());
    }

    #[test]
    fn backtracking_can_skip_levels() {
        let mut trail = Trail::default();
        trail.push(1);

        trail.new_checkpoint();
        trail.push(2);
        trail.new_checkpoint();
        trail.push(3);
        trail.new_checkpoint();
        trail.push(4);

        let _ = trail.synchronise(1);

        assert_eq!(&[1, 2], trail.deref());
        assert_eq!(1, trail.get_checkpoint());
    }

    #[test]
    fn popped_elements_are_given_in_reverse_order_when_backtracking() {
        let mut trail = Trail::default();
        trail.push(1);

        trail.new_checkpoint();
        trail.push(2);
        trail.new_checkpoint();
        trail.push(3);
        trail.new_checkpoint();
        trail.push(4);

        let popped = trail.synchronise(0).collect::<Vec<_>>();
        assert_eq!(vec![4, 3, 2], popped);
    }

    #[test]
    fn synchronising_to_the_current_level_is_a_no_op() {
        let mut trail = Trail::default();
        trail.new_checkpoint();
        trail.push(1);

        let popped = trail.synchronise(1).collect::<Vec<_>>();

        assert!(popped.is_empty());
        assert_eq!(&[1], trail.deref());
        assert_eq!(1, trail.get_checkpoint());
    }

    #[test]
    fn merged_level_entries_are_undone_with_the_parent_level() {
        let mut trail = Trail::default();
        trail.new_checkpoint();
        trail.push(1);
        trail.new_checkpoint();
        trail.push(2);

        trail.merge_checkpoint();
        assert_eq!(1, trail.get_checkpoint());
        assert_eq!(&[1, 2], trail.deref());

        let popped = trail.synchronise(0).collect::<Vec<_>>();
        assert_eq!(vec![2, 1], popped);
    }
}
