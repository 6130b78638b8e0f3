use std::collections::HashMap;

/// Live widgets of one thread, keyed by mount id.
pub struct Registry<W> {
    next_id: u32,
    mounted: HashMap<u32, W>,
}

impl<W> Default for Registry<W> {
    fn default() -> Self {
        Self {
            next_id: 0,
            mounted: HashMap::new(),
        }
    }
}

impl<W> Registry<W> {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = id.wrapping_add(1);
        id
    }

    pub fn insert(&mut self, id: u32, widget: W) {
        self.mounted.insert(id, widget);
    }

    pub fn remove(&mut self, id: u32) -> Option<W> {
        self.mounted.remove(&id)
    }

    pub fn find(&self, mut matches: impl FnMut(&W) -> bool) -> Option<&W> {
        self.mounted.values().find(|w| matches(w))
    }
}
