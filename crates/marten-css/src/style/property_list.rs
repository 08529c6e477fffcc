//! Per-rule and per-node declared values with their cascade weight.

use std::collections::BTreeMap;

use super::property::Property;
use super::value::Specified;
use crate::selector::Specificity;

/// One declared value and the weight it entered the list with.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    /// The declared value.
    pub value: Specified,
    /// Specificity of the selector (or inline style) that declared it.
    pub specificity: Specificity,
    /// Whether the declaration carried `!important`.
    pub important: bool,
}

/// Ordered mapping from property to its winning declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyList {
    entries: BTreeMap<Property, PropertyEntry>,
}

impl PropertyList {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
    ///
    /// Store a declaration. An existing entry is replaced only if the incoming
    /// one is important or the existing one is not, and the incoming
    /// specificity is at least the existing one. Otherwise the incoming
    /// declaration is dropped.
    pub fn add_property(
        &mut self,
        property: Property,
        value: Specified,
        specificity: Specificity,
        important: bool,
    ) {
        let incoming = PropertyEntry {
            value,
            specificity,
            important,
        };
        match self.entries.get_mut(&property) {
            Some(existing) => {
                if (incoming.important || !existing.important)
                    && incoming.specificity >= existing.specificity
                {
                    *existing = incoming;
                }
            }
            None => {
                let _ = self.entries.insert(property, incoming);
            }
        }
    }

    /// Feed every entry of `other` through [`PropertyList::add_property`],
    /// re-weighted with `specificity` and keeping each entry's importance.
    pub fn merge(&mut self, other: &Self, specificity: Specificity) {
        for (&property, entry) in &other.entries {
            self.add_property(property, entry.value.clone(), specificity, entry.important);
        }
    }

    /// Copy entries of `other` for properties this list does not have yet.
    pub fn fill_unset(&mut self, other: &Self) {
        for (&property, entry) in &other.entries {
            let _ = self
                .entries
                .entry(property)
                .or_insert_with(|| entry.clone());
        }
    }

    /// The winning entry for `property`.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<&PropertyEntry> {
        self.entries.get(&property)
    }

    /// The winning value for `property`.
    #[must_use]
    pub fn value(&self, property: Property) -> Option<&Specified> {
        self.entries.get(&property).map(|e| &e.value)
    }

    /// Entries in property order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &PropertyEntry)> {
        self.entries.iter().map(|(&p, e)| (p, e))
    }

    /// Number of properties set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, StyleValue};

    fn red() -> Specified {
        Specified::Value(StyleValue::Color(Color::rgb(255, 0, 0)))
    }

    fn blue() -> Specified {
        Specified::Value(StyleValue::Color(Color::rgb(0, 0, 255)))
    }

    #[test]
    fn test_equal_specificity_later_wins() {
        let mut list = PropertyList::new();
        list.add_property(Property::Color, red(), Specificity(0, 0, 1), false);
        list.add_property(Property::Color, blue(), Specificity(0, 0, 1), false);
        assert_eq!(list.value(Property::Color), Some(&blue()));
    }

    #[test]
    fn test_lower_specificity_is_dropped() {
        let mut list = PropertyList::new();
        list.add_property(Property::Color, red(), Specificity(0, 1, 0), false);
        list.add_property(Property::Color, blue(), Specificity(0, 0, 1), true);
        assert_eq!(list.value(Property::Color), Some(&red()));
    }

    #[test]
    fn test_important_is_kept_over_normal() {
        let mut list = PropertyList::new();
        list.add_property(Property::Color, red(), Specificity(0, 0, 1), true);
        list.add_property(Property::Color, blue(), Specificity(0, 1, 0), false);
        assert_eq!(list.value(Property::Color), Some(&red()));
        assert!(list.get(Property::Color).is_some_and(|e| e.important));
    }

    #[test]
    fn test_fill_unset_keeps_existing() {
        let mut author = PropertyList::new();
        author.add_property(Property::Color, red(), Specificity(0, 0, 1), false);
        let mut ua = PropertyList::new();
        ua.add_property(Property::Color, blue(), Specificity(0, 0, 1), false);
        ua.add_property(Property::BackgroundColor, blue(), Specificity(0, 0, 1), false);
        author.fill_unset(&ua);
        assert_eq!(author.value(Property::Color), Some(&red()));
        assert_eq!(author.value(Property::BackgroundColor), Some(&blue()));
        assert_eq!(author.len(), 2);
    }
}
