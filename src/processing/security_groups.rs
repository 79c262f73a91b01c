//! Security group indexing and rule-to-group resolution.
//!
//! Building is two-phase. [`SecurityGroupDraft::build`] indexes every group
//! and its rules verbatim; [`SecurityGroupDraft::resolve`] consumes the draft
//! once all groups are known and rewrites remote group ids to group names.

use super::index::IdIndex;
use crate::error::{InventoryError, ResolvePolicy, Result};
use crate::models::{GroupRef, RawSecurityGroup, RuleRemote, SecurityGroup, SecurityGroupRule};
use std::collections::{HashMap, HashSet};

const COLLECTION: &str = "security_groups";

/// Groups indexed but not yet cross-referenced.
#[derive(Debug)]
pub struct SecurityGroupDraft {
    groups: IdIndex<SecurityGroup>,
}

/// Groups whose rule references have been resolved.
#[derive(Debug)]
pub struct SecurityGroupIndex {
    groups: IdIndex<SecurityGroup>,
}

impl SecurityGroupDraft {
    /// Index every group. Group ids and rule ids must each be unique across
    /// the whole collection.
    pub fn build(raw_groups: Vec<RawSecurityGroup>) -> Result<SecurityGroupDraft> {
        let mut groups = IdIndex::new();
        let mut rule_ids = HashSet::new();
        for raw in raw_groups {
            let group = SecurityGroup::try_from(raw)?;
            if let Some(rule) = group.rules.iter().find(|r| !rule_ids.insert(r.id.clone())) {
                return Err(InventoryError::malformed(
                    COLLECTION,
                    format!("{}/{}", group.id, rule.id),
                    "duplicate id in collection",
                ));
            }
            groups.insert(COLLECTION, group)?;
        }
        log::info!(
            "indexed {} security groups with {} rules",
            groups.len(),
            groups.iter().map(|g| g.rules.len()).sum::<usize>()
        );
        Ok(SecurityGroupDraft { groups })
    }

    /// Rewrite every remote group reference to the referenced group's name.
    pub fn resolve(mut self, policy: ResolvePolicy) -> Result<SecurityGroupIndex> {
        let resolved = resolve_rules(&mut self.groups, policy)?;
        log::info!("resolved {resolved} security group rule references");
        Ok(SecurityGroupIndex {
            groups: self.groups,
        })
    }
}

/// Resolve all still-unresolved references; returns how many were rewritten.
///
/// Already-resolved references are left alone, so a second pass is a no-op.
fn resolve_rules(groups: &mut IdIndex<SecurityGroup>, policy: ResolvePolicy) -> Result<usize> {
    let names: HashMap<String, String> = groups
        .iter()
        .map(|g| (g.id.clone(), g.name.clone()))
        .collect();

    let mut resolved = 0;
    for group in groups.iter_mut() {
        for rule in group.rules.iter_mut() {
            let RuleRemote::Group(GroupRef::Unresolved { id }) = &rule.remote else {
                continue;
            };
            match names.get(id) {
                Some(name) => {
                    rule.remote = RuleRemote::Group(GroupRef::Resolved {
                        id: id.clone(),
                        name: name.clone(),
                    });
                    resolved += 1;
                }
                None => policy.on_dangling(InventoryError::dangling(
                    "security group rule",
                    &format!("{}/{}", group.id, rule.id),
                    id,
                ))?,
            }
        }
    }
    Ok(resolved)
}

impl SecurityGroupIndex {
    pub fn get(&self, id: &str) -> Option<&SecurityGroup> {
        self.groups.get(id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecurityGroup> {
        self.groups.iter()
    }

    /// Rules with a remote CIDR prefix, paired with their owning group.
    pub fn external_rules(&self) -> impl Iterator<Item = (&SecurityGroup, &SecurityGroupRule)> {
        self.rules()
            .filter(|(_, rule)| rule.remote_ip_prefix().is_some())
    }

    /// Rules with a resolved remote group, paired with their owning group.
    pub fn internal_rules(&self) -> impl Iterator<Item = (&SecurityGroup, &SecurityGroupRule)> {
        self.rules()
            .filter(|(_, rule)| rule.remote_group_name().is_some())
    }

    fn rules(&self) -> impl Iterator<Item = (&SecurityGroup, &SecurityGroupRule)> {
        self.groups
            .iter()
            .flat_map(|group| group.rules.iter().map(move |rule| (group, rule)))
    }
}
