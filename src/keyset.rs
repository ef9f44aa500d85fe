use std::fmt::Display;

/// Set of keys(lowercase ASCII letters), one bit per letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeySet(u32);

impl Display for KeySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys = self
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{}}}", keys)
    }
}

impl FromIterator<char> for KeySet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), |set, key| set.with(key))
    }
}

impl KeySet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn contains(&self, key: char) -> bool {
        key_bit(key).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Copy of this set with given key added, characters other than keys are ignored.
    pub fn with(&self, key: char) -> Self {
        Self(self.0 | key_bit(key).unwrap_or(0))
    }

    pub fn is_superset(&self, other: &KeySet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (b'a'..=b'z')
            .map(char::from)
            .filter(move |key| self.contains(*key))
    }
}

fn key_bit(key: char) -> Option<u32> {
    if key.is_ascii_lowercase() {
        Some(1 << (key as u32 - 'a' as u32))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_and_contains() {
        let keys = KeySet::new().with('a').with('z');
        assert!(keys.contains('a'));
        assert!(keys.contains('z'));
        assert!(!keys.contains('b'));
        assert_eq!(keys.iter().collect::<String>(), "az");
    }

    #[test]
    fn non_keys_are_ignored() {
        let keys = KeySet::new().with('A').with('@').with('.');
        assert_eq!(keys, KeySet::new());
        assert!(!keys.contains('A'));
    }

    #[test]
    fn superset() {
        let held = KeySet::from_iter("abc".chars());
        let needed = KeySet::from_iter("ac".chars());
        assert!(held.is_superset(&needed));
        assert!(!needed.is_superset(&held));
        assert!(held.is_superset(&KeySet::new()));
    }

    #[test]
    fn display_in_letter_order() {
        let keys = KeySet::from_iter("dab".chars());
        assert_eq!(keys.to_string(), "{a, b, d}");
        assert_eq!(KeySet::new().to_string(), "{}");
    }
}
