//! Texture slot bookkeeping and atlas regions.
//!
//! Slot assignment is owned by whoever binds textures on the GPU side. Shape
//! code only asks a `SlotAllocator` for the slot index to bake into a vertex
//! tail, so there is no process-wide registry here.

use std::collections::HashMap;

/// Hands out texture slot indices by texture name.
pub trait SlotAllocator {
    /// Returns the slot bound to `name`, assigning a free one if needed.
    ///
    /// `None` when every slot is taken.
    fn acquire(&mut self, name: &str) -> Option<u32>;

    /// Frees the slot bound to `name`. Unknown names are ignored.
    fn release(&mut self, name: &str);
}

/// Fixed-size slot table (e.g. 16 sampler bindings).
#[derive(Debug, Clone)]
pub struct SlotTable {
    slots: Vec<Option<String>>,
    by_name: HashMap<String, u32>,
}

impl SlotTable {
    pub fn new(slot_count: u32) -> Self {
        Self {
            slots: vec![None; slot_count as usize],
            by_name: HashMap::new(),
        }
    }

    pub fn slot_count(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn in_use(&self) -> usize {
        self.by_name.len()
    }

    pub fn slot_of(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }
}

impl SlotAllocator for SlotTable {
    fn acquire(&mut self, name: &str) -> Option<u32> {
        if let Some(slot) = self.slot_of(name) {
            return Some(slot);
        }

        let Some(free) = self.slots.iter().position(Option::is_none) else {
            log::warn!("texture slots exhausted ({} in use); '{name}' not bound", self.slots.len());
            return None;
        };

        let slot = free as u32;
        self.slots[free] = Some(name.to_owned());
        self.by_name.insert(name.to_owned(), slot);
        Some(slot)
    }

    fn release(&mut self, name: &str) {
        if let Some(slot) = self.by_name.remove(name) {
            self.slots[slot as usize] = None;
        }
    }
}

/// Normalized UV rectangle inside a texture atlas, as supplied by the
/// font/texture manager.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AtlasRegion {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl AtlasRegion {
    #[inline]
    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }

    /// The whole texture.
    #[inline]
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Corner UVs in quad emission order: TL, BL, TR, BR.
    #[inline]
    pub fn corner_uvs(self) -> [[f32; 2]; 4] {
        [
            [self.u0, self.v0],
            [self.u0, self.v1],
            [self.u1, self.v0],
            [self.u1, self.v1],
        ]
    }
}
