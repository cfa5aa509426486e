use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node within one generated network.
#[derive(
    Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }

    /// Spreadsheet-style label: `A`..`Z`, then `AA`, `AB`, ...
    pub fn label(&self) -> String {
        let mut n = self.0;
        let mut letters = Vec::new();
        loop {
            letters.push(char::from(b'A' + (n % 26) as u8));
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        letters.into_iter().rev().collect()
    }

    /// Inverse of [`NodeId::label`]. Case-insensitive, `None` for anything that isn't a
    /// non-empty run of ASCII letters.
    pub fn from_label(label: &str) -> Option<Self> {
        // fold over the index of each prefix so the largest index never overflows
        label
            .chars()
            .try_fold(None, |prefix: Option<usize>, c| {
                if !c.is_ascii_alphabetic() {
                    return None;
                }
                let digit = (c.to_ascii_uppercase() as usize) - ('A' as usize);
                match prefix {
                    None => Some(Some(digit)),
                    Some(idx) => {
                        let idx = idx.checked_add(1)?.checked_mul(26)?.checked_add(digit)?;
                        Some(Some(idx))
                    }
                }
            })
            .flatten()
            .map(Self)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_bijective_base_26() {
        assert_eq!(NodeId(0).label(), "A");
        assert_eq!(NodeId(25).label(), "Z");
        assert_eq!(NodeId(26).label(), "AA");
        assert_eq!(NodeId(27).label(), "AB");
        assert_eq!(NodeId(701).label(), "ZZ");
        assert_eq!(NodeId(702).label(), "AAA");
    }

    #[test]
    fn parses_labels_back() {
        for i in [0, 1, 25, 26, 51, 700, 701, 702, 18_277] {
            let label = NodeId(i).label();
            assert_eq!(NodeId::from_label(&label), Some(NodeId(i)));
        }
        assert_eq!(NodeId::from_label("ab"), Some(NodeId(27)));
        assert_eq!(NodeId::from_label(""), None);
        assert_eq!(NodeId::from_label("A1"), None);
    }

    #[test]
    fn largest_index_has_a_label() {
        let label = NodeId(usize::MAX).label();
        assert!(label.chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(NodeId::from_label(&label), Some(NodeId(usize::MAX)));

        // one letter past the largest index no longer fits
        let mut too_long = label.clone();
        too_long.push('A');
        assert_eq!(NodeId::from_label(&too_long), None);
    }
}
