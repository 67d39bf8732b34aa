//! Customer group membership as set operations
//!
//! Membership lists are treated as sets: order is irrelevant and an id is
//! present at most once. Storage writes wrap these in a version check.

use crate::models::{CustomerGroup, Inquiry};

/// Membership change requested by the group screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Add(i64),
    Remove(i64),
}

impl MembershipChange {
    pub fn apply(&self, customers: &[i64]) -> Vec<i64> {
        match *self {
            Self::Add(id) => add_member(customers, id),
            Self::Remove(id) => remove_member(customers, id),
        }
    }
}

/// Append `id` unless it is already a member
pub fn add_member(customers: &[i64], id: i64) -> Vec<i64> {
    let mut next = customers.to_vec();
    if !next.contains(&id) {
        next.push(id);
    }
    next
}

/// Drop every occurrence of `id`
pub fn remove_member(customers: &[i64], id: i64) -> Vec<i64> {
    customers.iter().copied().filter(|c| *c != id).collect()
}

/// Add when absent, remove when present
pub fn toggle_member(customers: &[i64], id: i64) -> Vec<i64> {
    if customers.contains(&id) {
        remove_member(customers, id)
    } else {
        add_member(customers, id)
    }
}

/// Inquiries that belong to the group, skipping ids that no longer resolve
pub fn resolve_members<'a>(group: &CustomerGroup, inquiries: &'a [Inquiry]) -> Vec<&'a Inquiry> {
    inquiries
        .iter()
        .filter(|i| group.customers.contains(&i.id))
        .collect()
}
