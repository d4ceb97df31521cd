//! Delimiter balance checking.
//!
//! One algorithm serves every delimiter pair. Each call keeps its own stack, so
//! a `(` never closes a `:[` and vice versa.

/// An opening and closing delimiter kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters<K> {
    pub open: K,
    pub close: K,
}

/// Whether every `open` in `kinds` is closed by a later `close`, properly nested.
pub fn check_balanced<K>(kinds: impl IntoIterator<Item = K>, delimiters: Delimiters<K>) -> bool
where
    K: Copy + PartialEq,
{
    let mut stack = Vec::new();

    for kind in kinds {
        if kind == delimiters.open {
            stack.push(kind);
        } else if kind == delimiters.close {
            match stack.pop() {
                Some(top) if top == delimiters.open => {}
                _ => return false,
            }
        }
    }

    stack.is_empty()
}
