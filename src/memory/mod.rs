//! In-process collaborators for the CLI and tests.

mod auth;
mod backend;

pub use auth::*;
pub use backend::*;

use std::sync::{RwLockReadGuard, RwLockWriteGuard, RwLock};

fn read<T>(lock: &RwLock<T>) -> fridgeplan_shared::Result<RwLockReadGuard<'_, T>> {
    match lock.read() {
        Ok(guard) => Ok(guard),
        Err(_) => fridgeplan_shared::bail!("memory store lock poisoned"),
    }
}

fn write<T>(lock: &RwLock<T>) -> fridgeplan_shared::Result<RwLockWriteGuard<'_, T>> {
    match lock.write() {
        Ok(guard) => Ok(guard),
        Err(_) => fridgeplan_shared::bail!("memory store lock poisoned"),
    }
}
