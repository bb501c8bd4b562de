//! In-memory table backing the in-memory repository adapters.
//!
//! Intended for tests/dev and the `memory` storage backend. Rows are kept in a
//! `BTreeMap` so scans come back in ascending identity (insertion) order.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::traits::Identifiable;
use crate::core::{AppError, Result};

/// Rows plus the identity sequence, guarded together so a create is one atomic step.
#[derive(Debug, Clone)]
pub struct TableState<T> {
    resource: &'static str,
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Identifiable> TableState<T> {
    fn new(resource: &'static str) -> Self {
        Self {
            resource,
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Store a new row, assigning the next identity when the entity has none
    pub fn insert(&mut self, entity: T) -> Result<T> {
        let id = entity.id().unwrap_or(self.next_id);
        let next_id = id
            .checked_add(1)
            .filter(|_| id > 0)
            .ok_or_else(|| {
                AppError::validation(format!("{} ID {} cannot be assigned", self.resource, id))
            })?;
        if self.rows.contains_key(&id) {
            return Err(AppError::conflict(format!(
                "{} with ID {} already exists",
                self.resource, id
            )));
        }

        let stored = entity.assign_id(id);
        self.rows.insert(id, stored.clone());
        self.next_id = self.next_id.max(next_id);

        Ok(stored)
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn page(&self, limit: Option<u32>, offset: Option<u32>) -> Vec<T> {
        let offset = offset.unwrap_or(0) as usize;
        let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);

        self.rows.values().skip(offset).take(limit).cloned().collect()
    }

    /// Replace a stored row wholesale
    pub fn replace(&mut self, entity: T) -> Result<T> {
        let id = entity.id().ok_or_else(|| {
            AppError::validation(format!("{} ID is required for update", self.resource))
        })?;

        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::not_found(format!(
                "{} with ID {} not found",
                self.resource, id
            ))),
        }
    }

    pub fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn len(&self) -> u64 {
        self.rows.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Thread-safe table of entities keyed by identity.
#[derive(Debug)]
pub struct InMemoryTable<T> {
    state: RwLock<TableState<T>>,
}

impl<T: Identifiable> InMemoryTable<T> {
    pub fn new(resource: &'static str) -> Self {
        Self {
            state: RwLock::new(TableState::new(resource)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, TableState<T>>> {
        self.state
            .read()
            .map_err(|_| AppError::internal("in-memory table lock poisoned"))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, TableState<T>>> {
        self.state
            .write()
            .map_err(|_| AppError::internal("in-memory table lock poisoned"))
    }

    /// Apply `f` to a staged copy and publish it only if `f` succeeds.
    pub fn transaction<R>(&self, f: impl FnOnce(&mut TableState<T>) -> Result<R>) -> Result<R> {
        let mut state = self.write()?;
        let mut staged = state.clone();
        let result = f(&mut staged)?;
        *state = staged;
        Ok(result)
    }
}
