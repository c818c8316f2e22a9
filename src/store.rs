use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Where freshly created records land in the feed. Complaint pages show the
/// newest entry first; report logs read top-down in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOrder {
    Front,
    Back,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot change status from {from} to {to}")]
pub struct TransitionError {
    pub from: &'static str,
    pub to: &'static str,
}

/// A record the generic store can mint: the store owns id and timestamp
/// assignment, the record type owns its field schema and initial status.
pub trait Record {
    type Fields;

    fn build(id: String, created_at: String, fields: Self::Fields) -> Self;
    fn id(&self) -> &str;
}

/// Records with a status-like field and a transition rule. Only the status
/// field may change after creation; content fields are immutable.
pub trait StatusRecord: Record {
    type Status: Copy;

    fn transition(&mut self, next: Self::Status) -> Result<(), TransitionError>;
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Ordered in-memory collection backing one feature page. Single-writer by
/// construction: every mutation happens inside a request handler.
#[derive(Debug)]
pub struct Store<R: Record> {
    items: Vec<R>,
    order: InsertOrder,
}

impl<R: Record> Store<R> {
    pub fn new(order: InsertOrder) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Mint a record from `fields` and insert it. Never rejects and never
    /// deduplicates; validation happens before this point.
    pub fn create(&mut self, fields: R::Fields) -> &R {
        let record = R::build(new_id(), now_rfc3339(), fields);
        match self.order {
            InsertOrder::Front => {
                self.items.insert(0, record);
                &self.items[0]
            }
            InsertOrder::Back => {
                self.items.push(record);
                self.items.last().expect("just pushed")
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Apply `f` to the record with `id`; `None` when the id is absent.
    pub fn update<T>(&mut self, id: &str, f: impl FnOnce(&mut R) -> T) -> Option<T> {
        self.items.iter_mut().find(|r| r.id() == id).map(f)
    }

    /// Remove by id. Idempotent: a second call is a no-op reported as false.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        self.items.len() != before
    }

    pub fn list(&self) -> &[R] {
        &self.items
    }

    pub fn list_where<'a>(&'a self, pred: impl Fn(&R) -> bool + 'a) -> Vec<&'a R> {
        self.items.iter().filter(|r| pred(r)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R: StatusRecord> Store<R> {
    /// Replace only the status field. `Ok(false)` when the id is absent (a
    /// silent no-op for callers), `Err` when the record rejects the
    /// transition.
    pub fn set_status(&mut self, id: &str, next: R::Status) -> Result<bool, TransitionError> {
        match self.update(id, |r| r.transition(next)) {
            None => Ok(false),
            Some(Ok(())) => Ok(true),
            Some(Err(e)) => Err(e),
        }
    }
}
