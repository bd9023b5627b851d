use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::LendingStatus;

pub mod model;

// LendingOutcome is the business result of a borrow or return attempt. The
// no-op variants are not errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LendingOutcome {
    Borrowed,
    AlreadyBorrowed,
    Returned,
    NotBorrowed,
}

impl LendingOutcome {
    // true when the attempt moved the item to another status
    pub fn changed(&self) -> bool {
        matches!(self, LendingOutcome::Borrowed | LendingOutcome::Returned)
    }
}

/// The console line produced by a lending transition.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct LendingNotice {
    pub title: String,
    pub outcome: LendingOutcome,
}

impl LendingNotice {
    pub fn new(title: &str, outcome: LendingOutcome) -> Self {
        Self {
            title: title.to_string(),
            outcome,
        }
    }
}

impl Display for LendingNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            LendingOutcome::Borrowed => write!(f, "{} has been borrowed.", self.title),
            LendingOutcome::AlreadyBorrowed => write!(f, "{} is already borrowed.", self.title),
            LendingOutcome::Returned => write!(f, "{} has been returned.", self.title),
            LendingOutcome::NotBorrowed => write!(f, "{} was not borrowed.", self.title),
        }
    }
}

/// Lendable is the borrow/return capability. Only items constructed with a
/// lending state expose it, see [`model::CatalogItem::as_lendable`].
pub trait Lendable: Identifiable {
    fn status(&self) -> LendingStatus;
    fn check_out(&mut self) -> LendingNotice;
    fn return_item(&mut self) -> LendingNotice;
}
