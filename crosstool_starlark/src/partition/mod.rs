//! Grouping of toolchain keys into equivalence classes by field value.

use crate::model::ToolchainKey;

/// A value together with the keys of every record that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass<'a, V> {
    /// Value shared by all members.
    pub value: V,
    /// Member keys in input order.
    pub keys: Vec<ToolchainKey<'a>>,
}

/// Partitions `(key, value)` entries into classes of equal values.
///
/// Classes are ordered by the position of their first member in the input,
/// never by value, so branch order is reproducible. Equality is the value's
/// `PartialEq`, which for record fields is deep and order-sensitive.
///
/// # Examples
///
/// ```
/// use crosstool_starlark::model::ToolchainKey;
/// use crosstool_starlark::partition::partition;
///
/// let classes = partition([
///     (ToolchainKey::new("k8", "gcc"), "a"),
///     (ToolchainKey::new("arm", "gcc"), "b"),
///     (ToolchainKey::new("ppc", "gcc"), "a"),
/// ]);
/// assert_eq!(classes.len(), 2);
/// assert_eq!(classes.first().map(|class| class.keys.len()), Some(2));
/// ```
#[must_use]
pub fn partition<'a, V, I>(entries: I) -> Vec<EquivalenceClass<'a, V>>
where
    V: PartialEq,
    I: IntoIterator<Item = (ToolchainKey<'a>, V)>,
{
    let mut classes: Vec<EquivalenceClass<'a, V>> = Vec::new();
    for (key, value) in entries {
        match classes.iter_mut().find(|class| class.value == value) {
            Some(class) => class.keys.push(key),
            None => classes.push(EquivalenceClass {
                value,
                keys: vec![key],
            }),
        }
    }
    classes
}

/// Applies `f` to every class value, keeping membership and order.
pub fn map_values<'a, V, W, F>(
    classes: Vec<EquivalenceClass<'a, V>>,
    mut f: F,
) -> Vec<EquivalenceClass<'a, W>>
where
    F: FnMut(V) -> W,
{
    classes
        .into_iter()
        .map(|class| EquivalenceClass {
            value: f(class.value),
            keys: class.keys,
        })
        .collect()
}

#[cfg(test)]
mod tests;
