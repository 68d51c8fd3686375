//! String-keyed map with ASCII case-insensitive keys, built on the
//! red-black engine with its own slot arena.

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::red_black::{assert_red_black_tree, erase, insert};
use crate::search::find;
use crate::types::{Link, Node};
use crate::util::InOrder;

/// Byte-wise comparison of ASCII-lowercased strings (`strcasecmp` order).
pub fn compare_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

#[derive(Clone, Debug)]
struct Slot<V> {
    link: Link,
    entry: Option<(String, V)>,
}

impl<V> Slot<V> {
    fn key(&self) -> &str {
        self.entry.as_ref().map_or("", |(k, _)| k.as_str())
    }
}

impl<V> Node for Slot<V> {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}

fn by_key<V>(a: &Slot<V>, b: &Slot<V>) -> Ordering {
    compare_ignore_ascii_case(a.key(), b.key())
}

fn probe<V>(key: &str, slot: &Slot<V>) -> Ordering {
    compare_ignore_ascii_case(key, slot.key())
}

/// Map from strings to `V` where keys differing only in ASCII case collide.
/// The spelling of the first insertion is kept.
#[derive(Clone, Debug)]
pub struct CaseInsensitiveMap<V> {
    slots: Vec<Slot<V>>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find_index(&self, key: &str) -> Option<u32> {
        find(&self.slots, self.root, key, &probe::<V>)
    }

    /// Inserts `key`. Returns `false` and drops `value` when a key equal
    /// ignoring ASCII case is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> bool {
        let key = key.into();
        if let Some(existing) = self.find_index(&key) {
            log::debug!(
                "string map: {key:?} collides with {:?}",
                self.slots[existing as usize].key()
            );
            return false;
        }

        let slot = Slot {
            link: Link::new(),
            entry: Some((key, value)),
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                (self.slots.len() - 1) as u32
            }
        };
        let inserted = insert(&mut self.slots, &mut self.root, idx, &by_key::<V>);
        debug_assert!(inserted);
        self.len += 1;
        true
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let idx = self.find_index(key)?;
        self.slots[idx as usize].entry.as_ref().map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.find_index(key)?;
        self.slots[idx as usize].entry.as_mut().map(|(_, v)| v)
    }

    /// Stored spelling of `key`.
    pub fn get_key(&self, key: &str) -> Option<&str> {
        let idx = self.find_index(key)?;
        Some(self.slots[idx as usize].key())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.find_index(key)?;
        erase(&mut self.slots, &mut self.root, idx);
        let (stored, value) = self.slots[idx as usize].entry.take()?;
        log::debug!("string map: removed {stored:?}");
        self.free.push(idx);
        self.len -= 1;
        Some(value)
    }

    /// Entries in ascending case-insensitive key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        InOrder::new(&self.slots, self.root)
            .filter_map(move |i| self.slots[i as usize].entry.as_ref().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Runs the full red-black validation over the map's tree.
    pub fn assert_valid(&self) -> Result<(), TreeError> {
        assert_red_black_tree(&self.slots, self.root, &by_key::<V>)
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for CaseInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_ignore_ascii_case() {
        assert_eq!(compare_ignore_ascii_case("Key", "kEY"), Ordering::Equal);
        assert_eq!(compare_ignore_ascii_case("abc", "ABD"), Ordering::Less);
        assert_eq!(compare_ignore_ascii_case("ab", "AB_"), Ordering::Less);
        assert_eq!(compare_ignore_ascii_case("", ""), Ordering::Equal);
        // '_' (0x5f) falls between 'Z' and 'a', so lowercasing moves it before every letter
        assert_eq!(compare_ignore_ascii_case("_", "Z"), Ordering::Less);
        assert_eq!(compare_ignore_ascii_case("_", "z"), Ordering::Less);
    }

    #[test]
    fn test_duplicate_spelling_rejected() {
        let mut map = CaseInsensitiveMap::new();
        assert!(map.insert("kEY", 1));
        assert!(!map.insert("Key", 2));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("KEY"), Some(&1));
        assert_eq!(map.get_key("key"), Some("kEY"));
    }

    #[test]
    fn test_slots_are_reused() {
        let mut map = CaseInsensitiveMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.remove("A"), Some(1));
        map.insert("c", 3);
        assert_eq!(map.slots.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c"]);
        map.assert_valid().unwrap();
    }
}
