//! Owned, bounded text labels for cells and grids.

use std::fmt;

use crate::cell::CellId;

/// Longest label kept, in bytes. Longer input is cut at the nearest char
/// boundary below this.
pub const MAX_LABEL_LEN: usize = 1023;

/// What a successful label assignment replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relabel {
    /// There was no previous label.
    Fresh,
    /// A previous label was dropped.
    Replaced,
}

/// Errors from label assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The addressed cell does not exist.
    NoSuchCell(CellId),
    /// Storage for the new label could not be reserved. Any previous label
    /// has already been released.
    Alloc,
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchCell(id) => write!(f, "label: no cell with id {id}"),
            Self::Alloc => f.write_str("label: allocation failed"),
        }
    }
}

impl std::error::Error for LabelError {}

/// Cut `text` to at most [`MAX_LABEL_LEN`] bytes without splitting a char.
pub(crate) fn bounded(text: &str) -> &str {
    if text.len() <= MAX_LABEL_LEN {
        return text;
    }
    let mut end = MAX_LABEL_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Install a fresh copy of `text` into `slot`.
///
/// The old label is dropped before the new one is reserved, so on
/// [`LabelError::Alloc`] the slot is left empty.
pub(crate) fn replace(slot: &mut Option<String>, text: &str) -> Result<Relabel, LabelError> {
    let outcome = match slot.take() {
        Some(_) => Relabel::Replaced,
        None => Relabel::Fresh,
    };
    let text = bounded(text);
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|_| LabelError::Alloc)?;
    owned.push_str(text);
    *slot = Some(owned);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_reports_previous_label() {
        let mut slot = None;
        assert_eq!(replace(&mut slot, "one"), Ok(Relabel::Fresh));
        assert_eq!(replace(&mut slot, "two"), Ok(Relabel::Replaced));
        assert_eq!(slot.as_deref(), Some("two"));
    }

    #[test]
    fn long_labels_are_bounded() {
        let long = "x".repeat(MAX_LABEL_LEN + 50);
        let mut slot = None;
        replace(&mut slot, &long).unwrap();
        assert_eq!(slot.unwrap().len(), MAX_LABEL_LEN);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes, so the cut cannot land on MAX_LABEL_LEN exactly.
        let long = "é".repeat(MAX_LABEL_LEN);
        let cut = bounded(&long);
        assert!(cut.len() <= MAX_LABEL_LEN);
        assert!(cut.chars().all(|c| c == 'é'));
    }
}
