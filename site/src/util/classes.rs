//! Class attribute assembly for toggled state classes.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

/// `base`, plus `modifier` when `active`.
#[must_use]
pub fn class_names(base: &str, modifier: &str, active: bool) -> String {
    if active { format!("{base} {modifier}") } else { base.to_owned() }
}
