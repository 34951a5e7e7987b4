use crate::core::constants::INVENTORY_CAPACITY;
use crate::entity::EntityId;
use serde::{Deserialize, Serialize};

/// Identical stackable entities sharing one inventory slot. Never empty:
/// the first entity is the one shown and used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    items: Vec<EntityId>,
}

impl Stack {
    pub fn single(id: EntityId) -> Self {
        Self { items: vec![id] }
    }

    pub fn head(&self) -> EntityId {
        self.items[0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.contains(&id)
    }

    pub fn push(&mut self, id: EntityId) {
        self.items.push(id);
    }

    /// Removes the most recently stacked entity, keeping the head. `None`
    /// when only the head is left.
    pub fn pop_extra(&mut self) -> Option<EntityId> {
        if self.items.len() > 1 {
            self.items.pop()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.items.iter().copied()
    }
}

/// The player's carried items, one [`Stack`] per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Stack>,
    capacity: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_capacity(INVENTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn slots(&self) -> &[Stack] {
        &self.slots
    }

    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.slots.get(index)
    }

    /// Head entity of every slot, in slot order.
    pub fn heads(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots.iter().map(Stack::head)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.iter().any(|stack| stack.contains(id))
    }

    /// Slot whose head is `id`.
    pub fn slot_of(&self, id: EntityId) -> Option<usize> {
        self.slots.iter().position(|stack| stack.head() == id)
    }

    /// Starts a new slot. Returns `false` (and does nothing) when full.
    pub fn push_new(&mut self, id: EntityId) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(Stack::single(id));
        true
    }

    /// Adds to an existing slot; returns the new stack size.
    pub fn stack_onto(&mut self, index: usize, id: EntityId) -> Option<usize> {
        let stack = self.slots.get_mut(index)?;
        stack.push(id);
        Some(stack.len())
    }

    pub fn pop_extra(&mut self, index: usize) -> Option<EntityId> {
        self.slots.get_mut(index)?.pop_extra()
    }

    pub fn remove_slot(&mut self, index: usize) -> Option<Stack> {
        if index < self.slots.len() {
            Some(self.slots.remove(index))
        } else {
            None
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
