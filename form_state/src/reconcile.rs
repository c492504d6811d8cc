use types::{ChannelSummary, Podcast};

/// Entities that can be matched by identifier.
pub trait Identified {
    type Id: PartialEq + Clone + std::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

impl Identified for ChannelSummary {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl Identified for Podcast {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

/// A mutation the backend confirmed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T: Identified> {
    Created(T),
    Updated(T),
    Deleted(T::Id),
}

/// Folds a confirmed mutation into an ordered list and returns the new
/// list. New entities go first, updates keep their position, and
/// untouched entities keep their relative order. An id that matches
/// nothing leaves the contents as they were.
#[must_use]
pub fn reconcile<T>(list: &[T], outcome: Outcome<T>) -> Vec<T>
where
    T: Identified + Clone,
{
    match outcome {
        Outcome::Created(entity) => {
            let mut next = Vec::with_capacity(list.len() + 1);
            next.push(entity);
            next.extend_from_slice(list);
            next
        }
        Outcome::Updated(entity) => list
            .iter()
            .map(|item| {
                if item.id() == entity.id() {
                    entity.clone()
                } else {
                    item.clone()
                }
            })
            .collect(),
        Outcome::Deleted(id) => {
            list.iter().filter(|item| *item.id() != id).cloned().collect()
        }
    }
}
