/// Identifies one issued load: the key it was issued for and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket<K> {
    key: K,
    generation: u64,
}

impl<K: Copy> LoadTicket<K> {
    pub fn key(&self) -> K {
        self.key
    }
}

/// Holds the result of the most recently issued load for a changing key.
///
/// Each `begin` supersedes every earlier ticket, so a slow load that finishes after a
/// newer one was issued is dropped instead of overwriting newer state.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSlot<K, V> {
    generation: u64,
    current: Option<K>,
    value: Option<V>,
}

impl<K, V> Default for LoadSlot<K, V> {
    fn default() -> Self {
        Self {
            generation: 0,
            current: None,
            value: None,
        }
    }
}

impl<K: Copy + PartialEq, V> LoadSlot<K, V> {
    /// Start a load for `key`, clearing whatever was shown for an earlier key.
    pub fn begin(&mut self, key: K) -> LoadTicket<K> {
        self.generation += 1;
        self.current = Some(key);
        self.value = None;
        LoadTicket {
            key,
            generation: self.generation,
        }
    }

    /// Store `value` if `ticket` is still the latest. Returns whether it was kept.
    pub fn complete(&mut self, ticket: LoadTicket<K>, value: V) -> bool {
        if ticket.generation != self.generation || self.current != Some(ticket.key) {
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.current.is_some() && self.value.is_none()
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}
