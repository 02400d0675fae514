//! Dense, ID-indexed storage for decoded entities.
//!
//! Bazel refers to entities by arbitrary `u32` wire IDs. A [`WireTable`]
//! maps each wire ID onto a dense [`Arena`] slot the first time the entity is
//! defined, so every later lookup is a hash probe plus a bounds-checked index.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::ops::Index;

/// Trait for opaque ID types used as arena keys.
///
/// Implementors must provide a bijection between `u32` slots and the ID type.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw slot index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw slot index.
    fn as_raw(self) -> u32;
}

/// A dense, append-only container addressed by a typed ID.
///
/// Items are never reordered or removed, so IDs stay valid for the lifetime
/// of the arena.
#[derive(Debug, Clone)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Appends an item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }

    /// Returns the item with the given ID, or `None` if it is out of bounds.
    pub fn get(&self, id: I) -> Option<&T> {
        self.items.get(id.as_raw() as usize)
    }

    /// Returns a mutable reference to the item with the given ID.
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.items.get_mut(id.as_raw() as usize)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(ID, &T)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }

    /// Iterates over items in allocation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the ID was not allocated by this arena.
    fn index(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }
}

impl<I: ArenaId, T: Serialize> Serialize for Arena<I, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// A wire ID was defined twice in the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("wire ID {0} is already defined")]
pub struct DuplicateWireId(pub u32);

/// An [`Arena`] keyed by the `u32` IDs used on the wire.
///
/// Insertion order is preserved. A wire ID can be defined only once.
#[derive(Debug, Clone)]
pub struct WireTable<I: ArenaId, T> {
    arena: Arena<I, T>,
    by_wire: HashMap<u32, I>,
}

impl<I: ArenaId, T> Default for WireTable<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> WireTable<I, T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty table with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            by_wire: HashMap::with_capacity(capacity),
        }
    }

    /// Defines `wire_id` as `item`, returning the dense ID it was stored at.
    pub fn insert(&mut self, wire_id: u32, item: T) -> Result<I, DuplicateWireId> {
        if self.by_wire.contains_key(&wire_id) {
            return Err(DuplicateWireId(wire_id));
        }
        let id = self.arena.alloc(item);
        self.by_wire.insert(wire_id, id);
        Ok(id)
    }

    /// Returns the dense ID of `wire_id`, if defined.
    pub fn id_of(&self, wire_id: u32) -> Option<I> {
        self.by_wire.get(&wire_id).copied()
    }

    /// Returns the entity defined as `wire_id`, if any.
    pub fn get(&self, wire_id: u32) -> Option<&T> {
        self.id_of(wire_id).and_then(|id| self.arena.get(id))
    }

    /// Returns `true` if `wire_id` has been defined.
    pub fn contains(&self, wire_id: u32) -> bool {
        self.by_wire.contains_key(&wire_id)
    }

    /// Returns the underlying dense storage.
    pub fn arena(&self) -> &Arena<I, T> {
        &self.arena
    }

    /// Returns the number of defined entities.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if nothing has been defined.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterates over entities in definition order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.arena.values()
    }
}

impl<I: ArenaId, T: Serialize> Serialize for WireTable<I, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.arena.serialize(serializer)
    }
}
