//! Structural checks that run before any code is synthesized.

use std::collections::HashSet;

use crate::error::{Directive, OwnerKind, TransformError};
use crate::model::{FlagGroup, FlagSet, ToolchainRecord};

/// Validates `records`, failing on the first violation.
///
/// Checks, in order:
/// - the collection is not empty;
/// - every `(cpu, compiler)` key is unique;
/// - no record declares one feature name or action name twice;
/// - no flag group in any feature or action config carries more than one
///   `expand_if_all_available` or `expand_if_none_available` entry.
///
/// # Errors
///
/// Returns the first [`TransformError`] found.
pub fn validate(records: &[ToolchainRecord]) -> Result<(), TransformError> {
    if records.is_empty() {
        return Err(TransformError::NoToolchains);
    }
    check_unique_keys(records)?;
    for record in records {
        check_unique_names(
            OwnerKind::Feature,
            record,
            record.features.iter().map(|feature| feature.name.as_str()),
        )?;
        check_unique_names(
            OwnerKind::ActionConfig,
            record,
            record.action_configs.iter().map(|action| action.action_name.as_str()),
        )?;
        for feature in &record.features {
            check_flag_sets(OwnerKind::Feature, &feature.name, &feature.flag_sets)?;
        }
        for action in &record.action_configs {
            check_flag_sets(OwnerKind::ActionConfig, &action.action_name, &action.flag_sets)?;
        }
    }
    Ok(())
}

fn check_unique_keys(records: &[ToolchainRecord]) -> Result<(), TransformError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let key = record.key();
        if !seen.insert(key) {
            return Err(TransformError::DuplicateToolchain {
                cpu: key.cpu.to_owned(),
                compiler: key.compiler.to_owned(),
            });
        }
    }
    Ok(())
}

fn check_unique_names<'a>(
    kind: OwnerKind,
    record: &ToolchainRecord,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), TransformError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(TransformError::DuplicateDefinition {
                kind,
                name: name.to_owned(),
                toolchain: record.toolchain_identifier.clone(),
            });
        }
    }
    Ok(())
}

fn check_flag_sets(kind: OwnerKind, owner: &str, flag_sets: &[FlagSet]) -> Result<(), TransformError> {
    flag_sets
        .iter()
        .flat_map(|flag_set| &flag_set.flag_groups)
        .try_for_each(|group| check_flag_group(kind, owner, group))
}

fn check_flag_group(kind: OwnerKind, owner: &str, group: &FlagGroup) -> Result<(), TransformError> {
    let repeated = if group.expand_if_all_available.len() > 1 {
        Some(Directive::AllAvailable)
    } else if group.expand_if_none_available.len() > 1 {
        Some(Directive::NoneAvailable)
    } else {
        None
    };
    if let Some(directive) = repeated {
        return Err(TransformError::FlagGroup {
            kind,
            owner: owner.to_owned(),
            directive,
        });
    }
    group
        .flag_groups
        .iter()
        .try_for_each(|nested| check_flag_group(kind, owner, nested))
}
