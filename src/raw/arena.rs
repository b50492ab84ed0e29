use alloc::vec::Vec;

use super::handle::Handle;

/// Append-only storage for tree nodes.
///
/// Nodes are never removed from a red-black map, so slots are plain `T`
/// and a handle stays valid for the arena's lifetime.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        self.slots.push(element);
        Handle::new(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots
            .get(handle.index())
            .expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots
            .get_mut(handle.index())
            .expect("`Arena::get_mut()` - `handle` is invalid!")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is invalid!")]
    fn foreign_handle_panics() {
        let mut other: Arena<u32> = Arena::new();
        other.alloc(1);
        let handle = other.alloc(2);

        let mut arena: Arena<u32> = Arena::new();
        arena.alloc(1);
        let _ = arena.get(handle);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is at maximum capacity")]
    fn alloc_past_max_panics() {
        let mut arena: Arena<()> = Arena::new();
        for _ in 0..=Handle::MAX {
            arena.alloc(());
        }
        arena.alloc(());
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let handle = arena.alloc(value);
                        model.push((handle, value));
                    }
                    Operation::Set(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                }

                prop_assert_eq!(arena.len(), model.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Set(usize, u32),
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            3 => any::<u32>().prop_map(Operation::Alloc),
            1 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Set(which, value)),
        ]
    }
}
