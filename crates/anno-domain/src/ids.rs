//! Identifier generation
//!
//! Every stored record gets a random v4 UUID rendered as a string.
//! Wall-clock timestamps are not used as identifiers: two requests in
//! the same clock tick would collide.

use uuid::Uuid;

/// Generate a fresh store identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::new_id;

    #[test]
    fn ids_are_unique_and_non_empty() {
        let a = new_id();
        let b = new_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
