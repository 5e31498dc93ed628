// ==========================================
// OBEDIO Duty Scheduling Core - Group Registry
// ==========================================
// Named crew teams used for bulk scheduling. Groups are scheduling
// conveniences: deleting or editing one never cascades into
// committed assignments.

use tracing::debug;
use uuid::Uuid;

use crate::domain::group::{Group, GroupMember};
use crate::registry::error::{RegistryError, RegistryResult};

/// Default title for a freshly created group.
const DEFAULT_GROUP_TITLE: &str = "New group";

/// Default target slot count for a freshly created group.
const DEFAULT_TARGET_SLOTS: u32 = 2;

#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: Vec<Group>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    // ==========================================
    // Mutations
    // ==========================================

    /// Creates a group with console defaults: placeholder title, two
    /// target slots, no members, no preferred lane.
    pub fn create(&mut self) -> &Group {
        let group = Group {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_GROUP_TITLE.to_string(),
            target_slots: DEFAULT_TARGET_SLOTS,
            preferred_lane_id: None,
            members: Vec::new(),
        };
        debug!(group_id = %group.id, "group created");
        self.groups.push(group);
        self.groups.last().unwrap()
    }

    pub fn rename(&mut self, group_id: &str, title: impl Into<String>) -> RegistryResult<()> {
        self.get_mut(group_id)?.title = title.into();
        Ok(())
    }

    pub fn set_target_slots(&mut self, group_id: &str, target_slots: u32) -> RegistryResult<()> {
        if target_slots < 1 {
            return Err(RegistryError::invalid_argument(
                "target_slots",
                "target slot count must be at least 1",
            ));
        }
        self.get_mut(group_id)?.target_slots = target_slots;
        Ok(())
    }

    /// Appends a member; insertion order is preserved and meaningful.
    pub fn add_member(&mut self, group_id: &str, member: GroupMember) -> RegistryResult<()> {
        let group = self.get_mut(group_id)?;
        if group.contains_member(&member.id) {
            return Err(RegistryError::DuplicateMember {
                group_id: group.id.clone(),
                member_id: member.id,
            });
        }
        group.members.push(member);
        Ok(())
    }

    pub fn remove_member(&mut self, group_id: &str, member_id: &str) -> RegistryResult<()> {
        let group = self.get_mut(group_id)?;
        let index = group
            .members
            .iter()
            .position(|m| m.id == member_id)
            .ok_or_else(|| RegistryError::not_found("GroupMember", member_id))?;
        group.members.remove(index);
        Ok(())
    }

    /// Sets or clears the lane hint. The lane is not validated here;
    /// it is only a hint the engine resolves at distribution time.
    pub fn set_preferred_lane(
        &mut self,
        group_id: &str,
        lane_id: Option<String>,
    ) -> RegistryResult<()> {
        self.get_mut(group_id)?.preferred_lane_id = lane_id;
        Ok(())
    }

    pub fn delete(&mut self, group_id: &str) -> RegistryResult<Group> {
        let index = self
            .groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or_else(|| RegistryError::not_found("Group", group_id))?;
        Ok(self.groups.remove(index))
    }

    // ==========================================
    // Reads
    // ==========================================

    pub fn get(&self, group_id: &str) -> RegistryResult<&Group> {
        self.groups
            .iter()
            .find(|g| g.id == group_id)
            .ok_or_else(|| RegistryError::not_found("Group", group_id))
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn get_mut(&mut self, group_id: &str) -> RegistryResult<&mut Group> {
        self.groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or_else(|| RegistryError::not_found("Group", group_id))
    }
}
