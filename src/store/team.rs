//! Team Roster Store

use uuid::Uuid;

use crate::store::{
    backend::{StorageBackend, read_collection, write_collection},
    errors::StoreError,
    models::TeamMember,
};

/// Storage key for the team roster.
pub const TEAM_KEY: &str = "team";

/// Repository over the team roster.
#[derive(Debug, Clone)]
pub struct TeamStore<B> {
    backend: B,
}

impl<B: StorageBackend> TeamStore<B> {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the full roster. Missing or unparseable blobs read as empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be read.
    pub fn get_all(&self) -> Result<Vec<TeamMember>, StoreError> {
        read_collection(&self.backend, TEAM_KEY)
    }

    /// Insert or update a roster entry, keyed by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serialize`] if the
    /// write-back fails.
    pub fn save(&mut self, member: TeamMember) -> Result<(), StoreError> {
        let mut members = self.get_all()?;

        if let Some(existing) = members.iter_mut().find(|m| m.id == member.id) {
            *existing = member;
        } else {
            members.push(member);
        }

        write_collection(&mut self.backend, TEAM_KEY, &members)
    }

    /// Delete the roster entry with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry has that id, and
    /// [`StoreError::Io`] or [`StoreError::Serialize`] if the write-back
    /// fails.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let mut members = self.get_all()?;
        let before = members.len();

        members.retain(|m| m.id != id);

        if members.len() == before {
            return Err(StoreError::NotFound(id));
        }

        write_collection(&mut self.backend, TEAM_KEY, &members)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::store::{MemoryBackend, TeamMember};

    use super::TeamStore;

    #[test]
    fn roster_round_trips_through_save() -> TestResult {
        let mut store = TeamStore::new(MemoryBackend::new());

        let mut lee = TeamMember::new("Lee Ortiz", "Technician");
        lee.email = Some("lee@example.com".to_owned());
        store.save(lee.clone())?;

        assert_eq!(store.get_all()?, vec![lee]);
        Ok(())
    }

    #[test]
    fn delete_shrinks_the_roster() -> TestResult {
        let mut store = TeamStore::new(MemoryBackend::new());

        let lee = TeamMember::new("Lee Ortiz", "Technician");
        let sam = TeamMember::new("Sam Carter", "Foreman");
        store.save(lee.clone())?;
        store.save(sam.clone())?;

        store.delete(lee.id)?;

        assert_eq!(store.get_all()?, vec![sam]);
        Ok(())
    }
}
