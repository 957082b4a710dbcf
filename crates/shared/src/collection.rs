//! Copy-on-write helpers over entity collections.
//!
//! Every helper takes the current collection by reference and returns a new
//! one. Insertion order is display order, so positions are preserved.

use ulid::Ulid;

use crate::Result;

pub trait Entity {
    fn id(&self) -> &str;
}

pub fn find<'a, T: Entity>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

pub fn position<T: Entity>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Generates an id that no entity in `items` uses yet.
pub fn next_id<T: Entity>(items: &[T]) -> String {
    loop {
        let id = Ulid::new().to_string();
        if find(items, &id).is_none() {
            return id;
        }
    }
}

pub fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);

    next
}

/// Replaces the entity with `id` by the result of `f`, keeping its position.
pub fn replace_with<T, F>(items: &[T], id: &str, kind: &str, f: F) -> Result<Vec<T>>
where
    T: Entity + Clone,
    F: FnOnce(&T) -> Result<T>,
{
    let Some(index) = position(items, id) else {
        crate::not_found!("{kind} {id}");
    };

    let replacement = f(&items[index])?;
    let mut next = items.to_vec();
    next[index] = replacement;

    Ok(next)
}

/// Removes the entity with `id`. An unknown id leaves the collection as is.
pub fn remove<T: Entity + Clone>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}
