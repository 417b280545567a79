use std::fmt;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use super::domain::{
    Employer, EmployerId, Job, JobId, Message, MessageId, Recruiter, RecruiterId, Submission,
    SubmissionId, TeamMember, TeamMemberId,
};

/// Kinds of records held by the desk, used for not-found reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Job,
    Candidate,
    Recruiter,
    Message,
    TeamMember,
    Employer,
}

impl EntityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Job => "Job",
            Self::Candidate => "Candidate",
            Self::Recruiter => "Recruiter",
            Self::Message => "Message",
            Self::TeamMember => "Team member",
            Self::Employer => "Employer",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Record addressable by identifier inside an [`EntityStore`].
pub trait Entity: Clone + Send + Sync {
    type Id: PartialEq + fmt::Display;
    const KIND: EntityKind;

    fn id(&self) -> &Self::Id;
}

macro_rules! impl_entity {
    ($ty:ty, $id:ty, $kind:expr) => {
        impl Entity for $ty {
            type Id = $id;
            const KIND: EntityKind = $kind;

            fn id(&self) -> &Self::Id {
                &self.id
            }
        }
    };
}

impl_entity!(Job, JobId, EntityKind::Job);
impl_entity!(Submission, SubmissionId, EntityKind::Candidate);
impl_entity!(Recruiter, RecruiterId, EntityKind::Recruiter);
impl_entity!(Message, MessageId, EntityKind::Message);
impl_entity!(TeamMember, TeamMemberId, EntityKind::TeamMember);
impl_entity!(Employer, EmployerId, EntityKind::Employer);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found")]
    NotFound { kind: EntityKind, id: String },
}

impl StoreError {
    pub fn not_found<T: Entity>(id: &T::Id) -> Self {
        Self::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }
}

/// Ordered, copy-on-write collection. Readers hold an `Arc` snapshot while
/// every mutation builds a fresh vector and swaps it in.
pub struct EntityStore<T> {
    items: RwLock<Arc<Vec<T>>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Arc::new(Vec::new())),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(Arc::new(items)),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<T>> {
        self.items.read().expect("entity store lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.snapshot().iter().find(|item| item.id() == id).cloned()
    }

    pub fn fetch(&self, id: &T::Id) -> Result<T, StoreError> {
        self.get(id).ok_or_else(|| StoreError::not_found::<T>(id))
    }

    pub fn append(&self, item: T) -> T {
        self.mutate(|items| items.push(item.clone()));
        item
    }

    pub fn prepend(&self, item: T) -> T {
        self.mutate(|items| items.insert(0, item.clone()));
        item
    }

    pub fn replace_all(&self, items: Vec<T>) {
        *self.items.write().expect("entity store lock poisoned") = Arc::new(items);
    }

    pub fn update<F>(&self, id: &T::Id, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        self.try_update(id, |item| {
            apply(item);
            Ok::<(), StoreError>(())
        })
    }

    /// Apply a fallible edit to one record. The collection is left untouched
    /// when the record is missing or the edit returns an error.
    pub fn try_update<F, E>(&self, id: &T::Id, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
        E: From<StoreError>,
    {
        let mut guard = self.items.write().expect("entity store lock poisoned");
        let position = guard
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| StoreError::not_found::<T>(id))?;

        let mut next = guard.as_ref().clone();
        apply(&mut next[position])?;
        let updated = next[position].clone();
        *guard = Arc::new(next);
        Ok(updated)
    }

    pub fn update_all<F>(&self, apply: F)
    where
        F: FnMut(&mut T),
    {
        self.mutate(|items| items.iter_mut().for_each(apply));
    }

    pub fn remove(&self, id: &T::Id) -> Result<T, StoreError> {
        let mut guard = self.items.write().expect("entity store lock poisoned");
        let position = guard
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| StoreError::not_found::<T>(id))?;

        let mut next = guard.as_ref().clone();
        let removed = next.remove(position);
        *guard = Arc::new(next);
        Ok(removed)
    }

    fn mutate<F>(&self, apply: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        let mut guard = self.items.write().expect("entity store lock poisoned");
        let mut next = guard.as_ref().clone();
        apply(&mut next);
        *guard = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::pipeline::domain::{MessageKind, MessageId};
    use chrono::{TimeZone, Utc};

    fn message(id: &str) -> Message {
        Message {
            id: MessageId::new(id),
            title: format!("title {id}"),
            content: String::new(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            read: false,
            kind: MessageKind::Info,
        }
    }

    #[test]
    fn snapshots_are_unaffected_by_later_writes() {
        let store = EntityStore::new(vec![message("1")]);
        let before = store.snapshot();
        store.append(message("2"));

        assert_eq!(before.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn prepend_places_item_first() {
        let store = EntityStore::new(vec![message("1")]);
        store.prepend(message("0"));
        let ids: Vec<_> = store.snapshot().iter().map(|m| m.id.0.clone()).collect();
        assert_eq!(ids, vec!["0", "1"]);
    }

    #[test]
    fn failed_edit_leaves_collection_unchanged() {
        let store = EntityStore::new(vec![message("1")]);
        let result: Result<Message, StoreError> = store.try_update(&MessageId::new("1"), |m| {
            m.read = true;
            Err(StoreError::not_found::<Message>(&m.id))
        });

        assert!(result.is_err());
        assert!(!store.fetch(&MessageId::new("1")).unwrap().read);
    }

    #[test]
    fn missing_ids_report_entity_kind() {
        let store: EntityStore<Message> = EntityStore::default();
        let err = store.remove(&MessageId::new("nope")).unwrap_err();
        assert_eq!(err.to_string(), "Message not found");
    }
}
