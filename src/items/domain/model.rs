use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::{Identifiable, ItemId};
use crate::core::library::{ItemKind, LendingStatus};
use crate::items::domain::{Lendable, LendingNotice, LendingOutcome};

// ItemFormat carries the variant specific attributes of a catalog item.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ItemFormat {
    Book {
        author: String,
        isbn: String,
    },
    Magazine {
        issue_number: i32,
    },
    Dvd {
        director: String,
        duration_minutes: u32,
    },
}

impl ItemFormat {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemFormat::Book { .. } => ItemKind::Book,
            ItemFormat::Magazine { .. } => ItemKind::Magazine,
            ItemFormat::Dvd { .. } => ItemKind::Dvd,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct LendingState {
    pub status: LendingStatus,
}

impl Default for LendingState {
    fn default() -> Self {
        Self { status: LendingStatus::Available }
    }
}

// CatalogItem abstracts anything describable in the library. Descriptive
// fields never change after construction; only the lending state moves.
// Not Clone: a copy would share the ItemId of its source.
#[derive(Debug, PartialEq)]
pub struct CatalogItem {
    id: ItemId,
    title: String,
    publication_year: i32,
    format: ItemFormat,
    lending: Option<LendingState>,
}

impl CatalogItem {
    pub fn new(title: &str, publication_year: i32, format: ItemFormat) -> Self {
        Self {
            id: ItemId::new(),
            title: title.to_string(),
            publication_year,
            format,
            lending: None,
        }
    }

    pub fn book(title: &str, publication_year: i32, author: &str, isbn: &str) -> Self {
        Self::new(title, publication_year, ItemFormat::Book {
            author: author.to_string(),
            isbn: isbn.to_string(),
        })
    }

    pub fn magazine(title: &str, publication_year: i32, issue_number: i32) -> Self {
        Self::new(title, publication_year, ItemFormat::Magazine { issue_number })
    }

    pub fn dvd(title: &str, publication_year: i32, director: &str, duration_minutes: u32) -> Self {
        Self::new(title, publication_year, ItemFormat::Dvd {
            director: director.to_string(),
            duration_minutes,
        })
    }

    pub fn lendable_book(title: &str, publication_year: i32, author: &str, isbn: &str) -> Self {
        Self::book(title, publication_year, author, isbn).lendable()
    }

    pub fn lendable_dvd(title: &str, publication_year: i32, director: &str, duration_minutes: u32) -> Self {
        Self::dvd(title, publication_year, director, duration_minutes).lendable()
    }

    /// Attaches the lending capability, starting out available.
    pub fn lendable(mut self) -> Self {
        self.lending.get_or_insert_with(LendingState::default);
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn format(&self) -> &ItemFormat {
        &self.format
    }

    pub fn kind(&self) -> ItemKind {
        self.format.kind()
    }

    pub fn is_lendable(&self) -> bool {
        self.lending.is_some()
    }

    pub fn status(&self) -> Option<LendingStatus> {
        self.lending.map(|l| l.status)
    }

    pub fn is_borrowed(&self) -> bool {
        self.status() == Some(LendingStatus::Borrowed)
    }

    pub fn as_lendable(&mut self) -> Option<LendableItem<'_>> {
        let id = self.id;
        let title = self.title.as_str();
        self.lending.as_mut().map(|state| LendableItem { id, title, state })
    }

    pub fn render_details(&self) -> String {
        match &self.format {
            ItemFormat::Book { author, isbn } => {
                format!("Book: {}, Year: {}, Author: {}, ISBN: {}",
                        self.title, self.publication_year, author, isbn)
            }
            ItemFormat::Magazine { issue_number } => {
                format!("Magazine: {}, Year: {}, Issue Number: {}",
                        self.title, self.publication_year, issue_number)
            }
            ItemFormat::Dvd { director, duration_minutes } => {
                format!("DVD: {}, Year: {}, Director: {}, Duration: {} minutes",
                        self.title, self.publication_year, director, duration_minutes)
            }
        }
    }
}

impl Identifiable for CatalogItem {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl Display for CatalogItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.render_details().as_str())
    }
}

/// Mutable view over the lending state of a catalog item.
pub struct LendableItem<'a> {
    id: ItemId,
    title: &'a str,
    state: &'a mut LendingState,
}

impl LendableItem<'_> {
    pub fn title(&self) -> &str {
        self.title
    }
}

impl Identifiable for LendableItem<'_> {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl Lendable for LendableItem<'_> {
    fn status(&self) -> LendingStatus {
        self.state.status
    }

    fn check_out(&mut self) -> LendingNotice {
        let outcome = match self.state.status {
            LendingStatus::Available => {
                self.state.status = LendingStatus::Borrowed;
                LendingOutcome::Borrowed
            }
            LendingStatus::Borrowed => LendingOutcome::AlreadyBorrowed,
        };
        LendingNotice::new(self.title, outcome)
    }

    fn return_item(&mut self) -> LendingNotice {
        let outcome = match self.state.status {
            LendingStatus::Borrowed => {
                self.state.status = LendingStatus::Available;
                LendingOutcome::Returned
            }
            LendingStatus::Available => LendingOutcome::NotBorrowed,
        };
        LendingNotice::new(self.title, outcome)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::{ItemKind, LendingStatus};
    use crate::items::domain::model::CatalogItem;
    use crate::items::domain::{Lendable, LendingOutcome};

    #[test]
    fn test_should_render_book() {
        let book = CatalogItem::book("Effective Java", 2008, "Joshua Bloch", "123456789");
        assert_eq!("Book: Effective Java, Year: 2008, Author: Joshua Bloch, ISBN: 123456789", book.render_details());
        assert_eq!(book.render_details(), book.to_string());
        assert_eq!(ItemKind::Book, book.kind());
    }

    #[test]
    fn test_should_render_magazine() {
        let magazine = CatalogItem::magazine("National Geographic", 2023, 10);
        assert_eq!("Magazine: National Geographic, Year: 2023, Issue Number: 10", magazine.render_details());
        assert_eq!(ItemKind::Magazine, magazine.kind());
    }

    #[test]
    fn test_should_render_dvd() {
        let dvd = CatalogItem::dvd("Inception", 2010, "Christopher Nolan", 148);
        assert_eq!("DVD: Inception, Year: 2010, Director: Christopher Nolan, Duration: 148 minutes", dvd.render_details());
        assert_eq!(ItemKind::Dvd, dvd.kind());
    }

    #[test]
    fn test_should_accept_unvalidated_fields() {
        let book = CatalogItem::book("", -300, "", "not-an-isbn");
        assert_eq!("Book: , Year: -300, Author: , ISBN: not-an-isbn", book.render_details());
    }

    #[test]
    fn test_should_not_lend_plain_items() {
        let mut magazine = CatalogItem::magazine("National Geographic", 2023, 10);
        assert!(!magazine.is_lendable());
        assert_eq!(None, magazine.status());
        assert!(magazine.as_lendable().is_none());
    }

    #[test]
    fn test_should_start_available() {
        let dvd = CatalogItem::lendable_dvd("Inception", 2010, "Christopher Nolan", 148);
        assert!(dvd.is_lendable());
        assert_eq!(Some(LendingStatus::Available), dvd.status());
        assert!(!dvd.is_borrowed());
    }

    #[test]
    fn test_should_check_out_once() {
        let mut book = CatalogItem::lendable_book("Effective Java", 2008, "Joshua Bloch", "123456789");
        let mut lendable = book.as_lendable().expect("should be lendable");
        assert_eq!(LendingOutcome::Borrowed, lendable.check_out().outcome);
        assert_eq!(LendingStatus::Borrowed, lendable.status());
        let again = lendable.check_out();
        assert_eq!(LendingOutcome::AlreadyBorrowed, again.outcome);
        assert_eq!("Effective Java is already borrowed.", again.to_string());
        assert!(book.is_borrowed());
    }

    #[test]
    fn test_should_return_once() {
        let mut book = CatalogItem::lendable_book("Effective Java", 2008, "Joshua Bloch", "123456789");
        let mut lendable = book.as_lendable().expect("should be lendable");
        assert_eq!("Effective Java was not borrowed.", lendable.return_item().to_string());
        assert_eq!(LendingStatus::Available, lendable.status());
        let _ = lendable.check_out();
        assert_eq!("Effective Java has been returned.", lendable.return_item().to_string());
        assert_eq!(LendingStatus::Available, lendable.status());
        assert_eq!(LendingOutcome::NotBorrowed, lendable.return_item().outcome);
    }

    #[test]
    fn test_should_cycle_lending_state() {
        let mut dvd = CatalogItem::lendable_dvd("Inception", 2010, "Christopher Nolan", 148);
        for _ in 0..3 {
            let mut lendable = dvd.as_lendable().expect("should be lendable");
            assert_eq!(LendingOutcome::Borrowed, lendable.check_out().outcome);
            assert_eq!(LendingOutcome::Returned, lendable.return_item().outcome);
        }
        assert!(!dvd.is_borrowed());
    }

    #[test]
    fn test_should_keep_identity_per_instance() {
        let a = CatalogItem::magazine("National Geographic", 2023, 10);
        let b = CatalogItem::magazine("National Geographic", 2023, 10);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.render_details(), b.render_details());
    }

    #[test]
    fn test_should_make_lendable_idempotent() {
        let mut book = CatalogItem::lendable_book("Effective Java", 2008, "Joshua Bloch", "123456789");
        let _ = book.as_lendable().map(|mut l| l.check_out());
        let book = book.lendable();
        assert!(book.is_borrowed());
    }

    #[test]
    fn test_should_expose_lending_view() {
        let mut book = CatalogItem::lendable_book("Effective Java", 2008, "Joshua Bloch", "123456789");
        let id = book.id();
        let mut lendable = book.as_lendable().expect("should be lendable");
        assert_eq!(id, lendable.id());
        assert_eq!("Effective Java", lendable.title());
        assert_eq!(LendingStatus::Available, lendable.status());
        let _ = lendable.check_out();
        assert_eq!(Some(LendingStatus::Borrowed), book.status());
    }
}
