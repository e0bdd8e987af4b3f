//! In-memory view of an event's sign-up lists.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::category::{Category, OffspecRole, PrimaryCategory};

/// Mapping from category to the ordered list of member ids signed up under it.
///
/// Lists keep insertion order. A member appears in at most one primary list and at most
/// one offspec list; [`crate::service::signup::mutator`] is the only code that moves
/// members between lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupSheet {
    lists: BTreeMap<Category, Vec<u64>>,
}

impl SignupSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sheet from `(category, member)` entries in list order.
    pub fn from_entries(entries: impl IntoIterator<Item = (Category, u64)>) -> Self {
        let mut sheet = Self::new();
        for (category, user_id) in entries {
            sheet.push(category, user_id);
        }
        sheet
    }

    pub fn members(&self, category: Category) -> &[u64] {
        self.lists
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: Category, user_id: u64) -> bool {
        self.members(category).contains(&user_id)
    }

    /// The primary category the member currently occupies, if any.
    pub fn primary_of(&self, user_id: u64) -> Option<PrimaryCategory> {
        self.lists.iter().find_map(|(category, members)| match category {
            Category::Primary(primary) if members.contains(&user_id) => Some(*primary),
            _ => None,
        })
    }

    /// The offspec category the member currently occupies, if any.
    pub fn offspec_of(&self, user_id: u64) -> Option<OffspecRole> {
        self.lists.iter().find_map(|(category, members)| match category {
            Category::Offspec(offspec) if members.contains(&user_id) => Some(*offspec),
            _ => None,
        })
    }

    /// Appends the member to a list. Returns `false` if they were already in it.
    pub fn push(&mut self, category: Category, user_id: u64) -> bool {
        let members = self.lists.entry(category).or_default();
        if members.contains(&user_id) {
            return false;
        }
        members.push(user_id);
        true
    }

    /// Removes the member from a list. Returns `false` if they were not in it.
    pub fn remove(&mut self, category: Category, user_id: u64) -> bool {
        let Some(members) = self.lists.get_mut(&category) else {
            return false;
        };
        let before = members.len();
        members.retain(|id| *id != user_id);
        let removed = members.len() != before;
        if members.is_empty() {
            self.lists.remove(&category);
        }
        removed
    }

    /// Non-empty lists in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[u64])> {
        self.lists
            .iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(category, members)| (*category, members.as_slice()))
    }

    /// Every distinct member id on the sheet.
    pub fn member_ids(&self) -> BTreeSet<u64> {
        self.lists.values().flatten().copied().collect()
    }

    /// Drops every member for which `keep` returns false from all lists.
    ///
    /// Returns the distinct ids that were removed.
    pub fn retain_members(&mut self, keep: impl Fn(u64) -> bool) -> BTreeSet<u64> {
        let removed: BTreeSet<u64> = self
            .member_ids()
            .into_iter()
            .filter(|id| !keep(*id))
            .collect();

        if removed.is_empty() {
            return removed;
        }

        for members in self.lists.values_mut() {
            members.retain(|id| !removed.contains(id));
        }
        self.lists.retain(|_, members| !members.is_empty());

        removed
    }
}
