//! Ordered circular collection backed by an arena of slots.
//!
//! Elements live in a `Vec` of slots. Occupied slots carry the element and the
//! index of their successor; vacant slots are chained into a free list and get
//! reused by later insertions. The collection only remembers the slot of the
//! most recently inserted element (`last`); the head is always `last.next`.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("The collection is empty")]
    Empty,
    #[error("Position {position} is out of range (1..={len})")]
    OutOfRange { position: usize, len: usize },
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, next: usize },
    Vacant { next_free: Option<usize> },
}

/// A ring of owned elements kept in insertion order.
///
/// Positions are 1-based and counted from the head. Any reference handed out
/// by [`head`](Self::head), [`get`](Self::get) or [`iter`](Self::iter) borrows
/// the collection, so it cannot outlive the next insertion or removal.
#[derive(Clone)]
pub struct CircularCollection<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    last: Option<usize>,
    len: usize,
}

impl<T> Default for CircularCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularCollection<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            last: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// First-inserted element still present.
    pub fn head(&self) -> Result<&T, CollectionError> {
        let last = self.last.ok_or(CollectionError::Empty)?;
        Ok(self.value_at(self.next_of(last)))
    }

    /// Most recently inserted element still present.
    pub fn last(&self) -> Result<&T, CollectionError> {
        let last = self.last.ok_or(CollectionError::Empty)?;
        Ok(self.value_at(last))
    }

    /// Appends `value` as the new logical end, right before the head.
    pub fn insert(&mut self, value: T) {
        let slot = match self.last {
            None => self.alloc(value, None),
            Some(last) => {
                let head = self.next_of(last);
                let slot = self.alloc(value, Some(head));
                self.set_next(last, slot);
                slot
            }
        };
        self.last = Some(slot);
        self.len += 1;
    }

    /// Unlinks the element at the 1-based `position` and hands it back.
    ///
    /// Fails without touching the ring when the collection is empty or the
    /// position is outside `1..=len`.
    pub fn remove_at(&mut self, position: usize) -> Result<T, CollectionError> {
        let last = self.check_position(position)?;
        let prev = self.walk(last, position - 1);
        let target = self.next_of(prev);

        if target == prev {
            self.last = None;
        } else {
            let after = self.next_of(target);
            self.set_next(prev, after);
            if target == last {
                self.last = Some(prev);
            }
        }
        self.len -= 1;

        let value = self.release(target);
        if self.last.is_none() {
            self.slots.clear();
            self.free_head = None;
        }
        Ok(value)
    }

    /// Element at the 1-based `position`, found by walking from the head.
    pub fn get(&self, position: usize) -> Result<&T, CollectionError> {
        let last = self.check_position(position)?;
        Ok(self.value_at(self.walk(last, position)))
    }

    pub fn get_mut(&mut self, position: usize) -> Result<&mut T, CollectionError> {
        let last = self.check_position(position)?;
        let slot = self.walk(last, position);
        match &mut self.slots[slot] {
            Slot::Occupied { value, .. } => Ok(value),
            Slot::Vacant { .. } => unreachable!("vacant slot {slot} linked into the ring"),
        }
    }

    /// Position that follows `position`, wrapping from the last one back to 1.
    pub fn next_position(&self, position: usize) -> Result<usize, CollectionError> {
        self.check_position(position)?;
        Ok(if position == self.len { 1 } else { position + 1 })
    }

    /// One lap over the ring, head first. Call again for another lap.
    pub fn iter(&self) -> Lap<'_, T> {
        Lap {
            collection: self,
            cursor: self.last.map(|last| self.next_of(last)),
            remaining: self.len,
        }
    }

    /// Like [`iter`](Self::iter), but starting a lap on an empty ring is an error.
    pub fn try_iter(&self) -> Result<Lap<'_, T>, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        Ok(self.iter())
    }

    /// Drops every element currently held and adopts `contents` in one step.
    pub fn replace_all(&mut self, contents: CircularCollection<T>) {
        drop(mem::replace(self, contents));
    }

    pub fn clear(&mut self) {
        self.replace_all(Self::new());
    }

    fn check_position(&self, position: usize) -> Result<usize, CollectionError> {
        let last = self.last.ok_or(CollectionError::Empty)?;
        if position == 0 || position > self.len {
            return Err(CollectionError::OutOfRange {
                position,
                len: self.len,
            });
        }
        Ok(last)
    }

    fn walk(&self, from: usize, steps: usize) -> usize {
        (0..steps).fold(from, |slot, _| self.next_of(slot))
    }

    fn next_of(&self, slot: usize) -> usize {
        match &self.slots[slot] {
            Slot::Occupied { next, .. } => *next,
            Slot::Vacant { .. } => unreachable!("vacant slot {slot} linked into the ring"),
        }
    }

    fn value_at(&self, slot: usize) -> &T {
        match &self.slots[slot] {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("vacant slot {slot} linked into the ring"),
        }
    }

    fn set_next(&mut self, slot: usize, successor: usize) {
        if let Slot::Occupied { next, .. } = &mut self.slots[slot] {
            *next = successor;
        }
    }

    /// Stores `value` in a free slot (or a new one). `None` links it to itself.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let slot = self.free_head.unwrap_or(self.slots.len());
        let occupied = Slot::Occupied {
            value,
            next: next.unwrap_or(slot),
        };

        if slot == self.slots.len() {
            self.slots.push(occupied);
        } else {
            self.free_head = match mem::replace(&mut self.slots[slot], occupied) {
                Slot::Vacant { next_free } => next_free,
                Slot::Occupied { .. } => unreachable!("free list points at occupied slot {slot}"),
            };
        }
        slot
    }

    fn release(&mut self, slot: usize) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = Some(slot);
        match mem::replace(&mut self.slots[slot], vacant) {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("slot {slot} released twice"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for CircularCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<T> Extend<T> for CircularCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A single pass over a [`CircularCollection`], head to last.
pub struct Lap<'a, T> {
    collection: &'a CircularCollection<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<T> Clone for Lap<'_, T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Lap<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.cursor?;
        self.remaining -= 1;
        self.cursor = Some(self.collection.next_of(slot));
        Some(self.collection.value_at(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Lap<'_, T> {}

impl<T> FusedIterator for Lap<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularCollection<T> {
    type Item = &'a T;
    type IntoIter = Lap<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that empties the collection head first.
pub struct IntoLap<T> {
    collection: CircularCollection<T>,
}

impl<T> Iterator for IntoLap<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.collection.remove_at(1).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.collection.len(), Some(self.collection.len()))
    }
}

impl<T> ExactSizeIterator for IntoLap<T> {}

impl<T> IntoIterator for CircularCollection<T> {
    type Item = T;
    type IntoIter = IntoLap<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoLap { collection: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Walks the raw links and checks the ring closes after exactly `len` steps.
    fn assert_ring<T>(collection: &CircularCollection<T>) {
        let Some(last) = collection.last else {
            assert_eq!(collection.len, 0);
            return;
        };
        let head = collection.next_of(last);
        let mut slot = head;
        for step in 1..=collection.len {
            slot = collection.next_of(slot);
            if step < collection.len {
                assert_ne!(slot, head, "ring closed early after {step} steps");
            }
        }
        assert_eq!(slot, head, "ring did not close after {} steps", collection.len);

        let occupied = collection
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied { .. }))
            .count();
        assert_eq!(occupied, collection.len);
    }

    fn lap<T: Clone>(collection: &CircularCollection<T>) -> Vec<T> {
        collection.iter().cloned().collect()
    }

    fn three() -> CircularCollection<&'static str> {
        ["v1", "v2", "v3"].into_iter().collect()
    }

    struct Tracked {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn tracked(count: usize, drops: &Rc<Cell<usize>>) -> CircularCollection<Tracked> {
        (0..count)
            .map(|_| Tracked {
                drops: Rc::clone(drops),
            })
            .collect()
    }

    #[test]
    fn test_new_collection_is_empty() {
        let collection: CircularCollection<u32> = CircularCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert_eq!(collection.head(), Err(CollectionError::Empty));
        assert_eq!(collection.last(), Err(CollectionError::Empty));
        assert_eq!(collection.iter().next(), None);
    }

    #[test]
    fn test_insert_into_empty_sets_head() {
        let mut collection = CircularCollection::new();
        collection.insert(42);
        assert_eq!(collection.head(), Ok(&42));
        assert_eq!(collection.last(), Ok(&42));
        assert_eq!(collection.len(), 1);
        assert_ring(&collection);
    }

    #[test]
    fn test_ring_closes_after_every_insert() {
        let mut collection = CircularCollection::new();
        for k in 1..=20 {
            collection.insert(k);
            assert_eq!(collection.len(), k);
            assert_ring(&collection);
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let collection = three();
        assert_eq!(lap(&collection), vec!["v1", "v2", "v3"]);
        assert_eq!(collection.head(), Ok(&"v1"));
        assert_eq!(collection.last(), Ok(&"v3"));
    }

    #[test]
    fn test_remove_head() {
        let mut collection = three();
        assert_eq!(collection.remove_at(1), Ok("v1"));
        assert_eq!(lap(&collection), vec!["v2", "v3"]);
        assert_eq!(collection.head(), Ok(&"v2"));
        assert_eq!(collection.last(), Ok(&"v3"));
        assert_ring(&collection);
    }

    #[test]
    fn test_remove_last() {
        let mut collection = three();
        assert_eq!(collection.remove_at(3), Ok("v3"));
        assert_eq!(lap(&collection), vec!["v1", "v2"]);
        assert_eq!(collection.head(), Ok(&"v1"));
        assert_eq!(collection.last(), Ok(&"v2"));
        assert_ring(&collection);
    }

    #[test]
    fn test_remove_middle() {
        let mut collection = three();
        assert_eq!(collection.remove_at(2), Ok("v2"));
        assert_eq!(lap(&collection), vec!["v1", "v3"]);
        assert_eq!(collection.head(), Ok(&"v1"));
        assert_eq!(collection.last(), Ok(&"v3"));
        assert_ring(&collection);
    }

    #[test]
    fn test_remove_sole_element_empties_collection() {
        let mut collection = CircularCollection::new();
        collection.insert("only");
        assert_eq!(collection.remove_at(1), Ok("only"));
        assert!(collection.is_empty());
        assert_eq!(collection.head(), Err(CollectionError::Empty));
        assert_eq!(collection.remove_at(1), Err(CollectionError::Empty));
        assert_ring(&collection);
    }

    #[test]
    fn test_remove_out_of_range_does_not_mutate() {
        let mut collection = three();
        assert_eq!(
            collection.remove_at(0),
            Err(CollectionError::OutOfRange {
                position: 0,
                len: 3
            })
        );
        assert_eq!(
            collection.remove_at(4),
            Err(CollectionError::OutOfRange {
                position: 4,
                len: 3
            })
        );
        assert_eq!(collection.len(), 3);
        assert_eq!(lap(&collection), vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn test_remove_from_empty_reports_empty() {
        let mut collection: CircularCollection<u8> = CircularCollection::new();
        assert_eq!(collection.remove_at(0), Err(CollectionError::Empty));
        assert_eq!(collection.remove_at(1), Err(CollectionError::Empty));
    }

    #[test]
    fn test_every_position_excises_exactly_one_element() {
        for n in 1..=6 {
            for position in 1..=n {
                let mut collection: CircularCollection<usize> = (1..=n).collect();
                let removed = collection.remove_at(position).unwrap();
                assert_eq!(removed, position);

                let expected: Vec<usize> = (1..=n).filter(|v| *v != position).collect();
                assert_eq!(lap(&collection), expected);
                assert_eq!(collection.len(), n - 1);
                assert_ring(&collection);
            }
        }
    }

    #[test]
    fn test_insert_after_removal_reuses_slots_and_keeps_order() {
        let mut collection: CircularCollection<u32> = (1..=4).collect();
        collection.remove_at(2).unwrap();
        collection.remove_at(1).unwrap();
        let slots_before = collection.slots.len();

        collection.insert(5);
        collection.insert(6);
        assert_eq!(collection.slots.len(), slots_before);
        assert_eq!(lap(&collection), vec![3, 4, 5, 6]);
        assert_ring(&collection);

        collection.insert(7);
        assert_eq!(collection.slots.len(), slots_before + 1);
        assert_eq!(lap(&collection), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_get_and_next_position_wrap() {
        let collection = three();
        assert_eq!(collection.get(1), Ok(&"v1"));
        assert_eq!(collection.get(3), Ok(&"v3"));
        assert!(collection.get(0).is_err());
        assert!(collection.get(4).is_err());

        assert_eq!(collection.next_position(1), Ok(2));
        assert_eq!(collection.next_position(3), Ok(1));
        assert!(collection.next_position(4).is_err());
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut collection: CircularCollection<String> =
            ["a", "b"].iter().map(|s| s.to_string()).collect();
        collection.get_mut(2).unwrap().push('!');
        assert_eq!(lap(&collection), vec!["a".to_string(), "b!".to_string()]);
    }

    #[test]
    fn test_inspection_is_idempotent() {
        let collection = three();
        for _ in 0..5 {
            assert_eq!(collection.len(), 3);
            assert!(!collection.is_empty());
        }
    }

    #[test]
    fn test_successive_laps_are_identical() {
        let collection = three();
        let first = lap(&collection);
        let second = lap(&collection);
        assert_eq!(first, second);
        assert_eq!(collection.iter().len(), 3);
    }

    #[test]
    fn test_lap_does_not_repeat_on_its_own() {
        let collection = three();
        let mut iter = collection.iter();
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_try_iter_reports_empty_ring() {
        let mut collection = CircularCollection::new();
        assert!(matches!(collection.try_iter(), Err(CollectionError::Empty)));

        collection.insert("only");
        let lap: Vec<_> = collection.try_iter().unwrap().copied().collect();
        assert_eq!(lap, vec!["only"]);

        collection.remove_at(1).unwrap();
        assert!(matches!(collection.try_iter(), Err(CollectionError::Empty)));
    }

    #[test]
    fn test_replace_all_drops_previous_elements_once() {
        let old_drops = Rc::new(Cell::new(0));
        let new_drops = Rc::new(Cell::new(0));

        let mut collection = tracked(4, &old_drops);
        collection.remove_at(2).unwrap();
        assert_eq!(old_drops.get(), 1);

        collection.replace_all(tracked(2, &new_drops));
        assert_eq!(old_drops.get(), 4);
        assert_eq!(new_drops.get(), 0);
        assert_eq!(collection.len(), 2);
        assert_ring(&collection);

        drop(collection);
        assert_eq!(old_drops.get(), 4);
        assert_eq!(new_drops.get(), 2);
    }

    #[test]
    fn test_clear_releases_everything() {
        let drops = Rc::new(Cell::new(0));
        let mut collection = tracked(3, &drops);
        collection.clear();
        assert_eq!(drops.get(), 3);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_removed_element_is_released_by_caller() {
        let drops = Rc::new(Cell::new(0));
        let mut collection = tracked(3, &drops);
        let removed = collection.remove_at(3).unwrap();
        assert_eq!(drops.get(), 0);
        drop(removed);
        assert_eq!(drops.get(), 1);
        drop(collection);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_into_iter_yields_owned_values_in_order() {
        let values: Vec<_> = three().into_iter().collect();
        assert_eq!(values, vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn test_debug_lists_elements_in_lap_order() {
        assert_eq!(format!("{:?}", three()), r#"["v1", "v2", "v3"]"#);
    }
}
