//! Hoisting of name-keyed structures into shared declarations.
//!
//! Features and action configs are declared once per distinct name, each
//! merged over only the records that define it. The enclosing list field is
//! then rewritten as a list of identifier references and merged like any
//! other field.

use std::collections::HashMap;

use tracing::debug;

use crate::condition::{Assignment, Coverage, Universe, synthesize};
use crate::error::{OwnerKind, TransformError};
use crate::model::{ActionConfig, Feature, ToolchainRecord};
use crate::partition::{map_values, partition};
use crate::starlark::{Expr, ToStarlark};

/// Sanitizes a feature or action name into a Starlark identifier.
///
/// ASCII letters are lowercased, `+` becomes `p`, every other character
/// outside `[a-z0-9]` becomes `_`, and a leading digit is prefixed with `_`.
///
/// # Examples
///
/// ```
/// use crosstool_starlark::hoist::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("c++-executable"), "cpp_executable");
/// assert_eq!(sanitize_identifier("A-B.C"), "a_b_c");
/// ```
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    let mut identifier = String::with_capacity(name.len() + 1);
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        identifier.push('_');
    }
    for ch in name.chars() {
        match ch {
            '+' => identifier.push('p'),
            _ if ch.is_ascii_alphanumeric() => identifier.push(ch.to_ascii_lowercase()),
            _ => identifier.push('_'),
        }
    }
    identifier
}

/// A name-keyed structure that is declared once and referenced by name.
pub trait Hoistable: ToStarlark + PartialEq {
    /// Kind reported in errors.
    const KIND: OwnerKind;
    /// Suffix appended to the sanitized name.
    const SUFFIX: &'static str;

    /// Name the structure is keyed by.
    fn hoist_name(&self) -> &str;
}

impl Hoistable for Feature {
    const KIND: OwnerKind = OwnerKind::Feature;
    const SUFFIX: &'static str = "_feature";

    fn hoist_name(&self) -> &str {
        &self.name
    }
}

impl Hoistable for ActionConfig {
    const KIND: OwnerKind = OwnerKind::ActionConfig;
    const SUFFIX: &'static str = "_action";

    fn hoist_name(&self) -> &str {
        &self.action_name
    }
}

/// Mapping from domain names to generated identifiers, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    entries: Vec<(String, String)>,
    by_name: HashMap<String, usize>,
}

impl IdentifierMap {
    /// Builds the mapping for `names` of `kind`, appending `suffix`.
    ///
    /// Repeated names map to one entry.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::IdentifierCollision`] when two distinct
    /// names sanitize to the same identifier.
    pub fn build<'n>(
        kind: OwnerKind,
        suffix: &str,
        names: impl IntoIterator<Item = &'n str>,
    ) -> Result<Self, TransformError> {
        let mut map = Self::default();
        let mut owners: HashMap<String, String> = HashMap::new();
        for name in names {
            if map.by_name.contains_key(name) {
                continue;
            }
            let identifier = format!("{}{suffix}", sanitize_identifier(name));
            if let Some(first) = owners.get(&identifier) {
                return Err(TransformError::IdentifierCollision {
                    kind,
                    identifier,
                    first: first.clone(),
                    second: name.to_owned(),
                });
            }
            owners.insert(identifier.clone(), name.to_owned());
            map.by_name.insert(name.to_owned(), map.entries.len());
            map.entries.push((name.to_owned(), identifier));
        }
        Ok(map)
    }

    /// Returns the identifier for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|index| self.entries.get(*index))
            .map(|(_, identifier)| identifier.as_str())
    }

    /// Iterates `(name, identifier)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, identifier)| (name.as_str(), identifier.as_str()))
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no names were mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Declarations for one name-keyed field plus the rewritten list field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoistedField<'a> {
    /// One declaration per distinct name, in first-seen order.
    pub declarations: Vec<Assignment<'a>>,
    /// The list field, assigned from identifier references.
    pub references: Assignment<'a>,
}

/// Hoists the structures selected by `items` out of `records`.
///
/// `field` names the enclosing list variable (`features`,
/// `action_configs`). Each declaration is merged with partial coverage over
/// the records that define it; the reference list is merged with total
/// coverage over `universe`.
///
/// # Errors
///
/// Returns [`TransformError::IdentifierCollision`] when two names sanitize
/// to one identifier.
pub fn hoist<'a, T, F>(
    field: &str,
    records: &'a [ToolchainRecord],
    universe: &Universe<'a>,
    items: F,
) -> Result<HoistedField<'a>, TransformError>
where
    T: Hoistable + 'a,
    F: Fn(&'a ToolchainRecord) -> &'a [T],
{
    let names = records
        .iter()
        .flat_map(|record| items(record).iter().map(Hoistable::hoist_name));
    let identifiers = IdentifierMap::build(T::KIND, T::SUFFIX, names)?;
    debug!(field, declarations = identifiers.len(), "hoisting declarations");

    let declarations = identifiers
        .iter()
        .map(|(name, identifier)| declare(name, identifier, records, &items))
        .collect();

    let reference_lists = records.iter().map(|record| {
        let references: Vec<Expr> = items(record)
            .iter()
            .filter_map(|item| identifiers.get(item.hoist_name()))
            .map(Expr::ident)
            .collect();
        (record.key(), Expr::List(references))
    });
    let references = synthesize(field, partition(reference_lists), universe, Coverage::Total);

    Ok(HoistedField {
        declarations,
        references,
    })
}

fn declare<'a, T, F>(
    name: &str,
    identifier: &str,
    records: &'a [ToolchainRecord],
    items: &F,
) -> Assignment<'a>
where
    T: Hoistable + 'a,
    F: Fn(&'a ToolchainRecord) -> &'a [T],
{
    let definitions: Vec<_> = records
        .iter()
        .filter_map(|record| {
            items(record)
                .iter()
                .find(|item| item.hoist_name() == name)
                .map(|item| (record.key(), item))
        })
        .collect();
    let sub_universe = Universe::new(definitions.iter().map(|(key, _)| *key));
    let classes = map_values(partition(definitions), |item: &T| item.to_starlark());
    synthesize(identifier, classes, &sub_universe, Coverage::Partial)
}
