//! The member registry

use crate::collection::{InsertError, OwnedCollection};
use crate::record::Member;

/// Registered members in registration order, keyed by `member_id`.
///
/// Registering a second member with an existing id is allowed; lookups
/// return the earliest one.
#[derive(Debug, Clone, Default)]
pub struct MemberRegistry {
    members: OwnedCollection<Member>,
}

impl MemberRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry on top of an existing collection
    pub fn from_collection(members: OwnedCollection<Member>) -> Self {
        Self { members }
    }

    /// Append a member to the registry
    pub fn register_member(&mut self, member: Member) -> Result<&mut Member, InsertError<Member>> {
        self.members.add(member)
    }

    /// Remove the first member with the given id
    pub fn remove_member(&mut self, member_id: &str) -> bool {
        self.members.remove(|m| m.member_id == member_id)
    }

    /// Overwrite the name and id of the first member with `member_id`.
    ///
    /// Changing the id does not move any loans recorded under the old id.
    pub fn update_member(&mut self, member_id: &str, updated: &Member) -> bool {
        self.members.update(|m| m.member_id == member_id, updated)
    }

    /// First member with the given id
    pub fn find_member(&self, member_id: &str) -> Option<&Member> {
        self.members.find(|m| m.member_id == member_id)
    }

    /// First member with the given id, for in-place edits
    pub fn find_member_mut(&mut self, member_id: &str) -> Option<&mut Member> {
        self.members.find_mut(|m| m.member_id == member_id)
    }

    /// All members in registration order
    pub fn members(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
