pub mod service;

use crate::core::domain::ItemId;
use crate::core::library::LibraryResult;
use crate::items::domain::LendingNotice;
use crate::items::domain::model::CatalogItem;

/// Handle to a catalog item that carries the lending capability. Only
/// [`CatalogService::lendable`] hands these out, so borrow and return can never
/// be called with a magazine or any other non-lendable item.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct LendableId(ItemId);

impl LendableId {
    pub fn id(&self) -> ItemId {
        self.0
    }
}

pub trait CatalogService {
    // appends to the catalog, never deduplicates
    fn add_item(&mut self, item: CatalogItem) -> ItemId;
    fn lendable(&self, id: ItemId) -> LibraryResult<LendableId>;
    fn borrow_item(&mut self, item: LendableId) -> LibraryResult<LendingNotice>;
    fn return_item(&mut self, item: LendableId) -> LibraryResult<LendingNotice>;
    fn find_item(&self, id: ItemId) -> LibraryResult<&CatalogItem>;
    fn list_all_items(&self) -> Box<dyn Iterator<Item = &CatalogItem> + '_>;
    fn list_borrowed_items(&self) -> Box<dyn Iterator<Item = &CatalogItem> + '_>;
}
