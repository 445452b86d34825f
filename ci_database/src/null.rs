//! Zero-value helpers for nullable columns.

use uuid::Uuid;

pub(crate) trait Zero {
    fn is_zero(&self) -> bool;
}

impl Zero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for Vec<u8> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Zero for i32 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Zero for Uuid {
    fn is_zero(&self) -> bool {
        self.is_nil()
    }
}

/// Collapse `Some(zero)` into SQL NULL.
pub(crate) fn nullify<T: Zero>(field: &mut Option<T>) {
    if field.as_ref().is_some_and(Zero::is_zero) {
        *field = None;
    }
}

/// True when a required column is NULL or holds its zero value.
pub(crate) fn missing<T: Zero>(field: &Option<T>) -> bool {
    field.as_ref().map_or(true, Zero::is_zero)
}

/// Export a column for the API layer: NULL becomes the zero value.
pub(crate) fn present<T: Clone + Default>(field: &Option<T>) -> Option<T> {
    Some(field.clone().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullify_collapses_only_zero_values() {
        let mut empty = Some(String::new());
        let mut full = Some("foo".to_string());
        let mut zero = Some(0_i64);
        let mut one = Some(1_i32);
        nullify(&mut empty);
        nullify(&mut full);
        nullify(&mut zero);
        nullify(&mut one);
        assert_eq!(empty, None);
        assert_eq!(full.as_deref(), Some("foo"));
        assert_eq!(zero, None);
        assert_eq!(one, Some(1));
    }

    #[test]
    fn missing_treats_null_and_zero_alike() {
        assert!(missing::<i64>(&None));
        assert!(missing(&Some(0_i64)));
        assert!(!missing(&Some(3_i64)));
        assert!(missing(&Some(Uuid::nil())));
    }

    #[test]
    fn present_substitutes_zero() {
        assert_eq!(present::<String>(&None), Some(String::new()));
        assert_eq!(present(&Some(5_i32)), Some(5));
    }
}
