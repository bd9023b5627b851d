use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::catalog::domain::{CatalogService, LendableId};
use crate::core::domain::{Configuration, Identifiable, ItemId};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::items::domain::{Lendable, LendingNotice};
use crate::items::domain::model::CatalogItem;
use crate::items::dto::ItemDto;

// LibraryRegistry keeps every catalog item in insertion order together with the
// handles of the items currently lent out. The item's own lending status is
// authoritative: a handle is tracked as borrowed exactly while its item is in
// the Borrowed state, so the borrowed list never holds duplicates.
pub struct LibraryRegistry {
    branch_id: String,
    items: Vec<CatalogItem>,
    borrowed: Vec<ItemId>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LibraryRegistry {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            items: vec![],
            borrowed: vec![],
            events_publisher,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_in(items: &mut [CatalogItem], id: ItemId) -> LibraryResult<&mut CatalogItem> {
        items.iter_mut().find(|item| item.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("item with id {} not found", id).as_str()))
    }

    // Events are diagnostics only; a failed publish never undoes a transition.
    fn publish<F>(&self, build: F)
        where F: FnOnce(&HashMap<String, String>) -> serde_json::Result<DomainEvent> {
        let metadata = HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]);
        let res = build(&metadata).map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!(error = %err, "failed to publish catalog event");
        }
    }
}

impl CatalogService for LibraryRegistry {
    fn add_item(&mut self, item: CatalogItem) -> ItemId {
        let id = item.id();
        let dto = ItemDto::from(&item);
        debug!(item_id = %id, title = item.title(), kind = %item.kind(), "adding catalog item");
        // an item checked out before it was added is already lent out
        if item.is_borrowed() {
            self.borrowed.push(id);
        }
        self.items.push(item);
        self.publish(|metadata| DomainEvent::added(
            "item_added", "catalog", id.to_string().as_str(), metadata, &dto));
        id
    }

    fn lendable(&self, id: ItemId) -> LibraryResult<LendableId> {
        let item = self.find_item(id)?;
        if item.is_lendable() {
            Ok(LendableId(id))
        } else {
            Err(LibraryError::not_lendable(format!("{} {} cannot be borrowed",
                                                   item.kind(), item.title()).as_str()))
        }
    }

    fn borrow_item(&mut self, item: LendableId) -> LibraryResult<LendingNotice> {
        let id = item.id();
        let entry = Self::find_in(&mut self.items, id)?;
        let notice = entry.as_lendable()
            .ok_or_else(|| LibraryError::not_lendable(format!("item {} cannot be borrowed", id).as_str()))?
            .check_out();
        let dto = ItemDto::from(&*entry);
        if notice.outcome.changed() {
            self.borrowed.push(id);
            info!(item_id = %id, title = notice.title.as_str(), "item borrowed");
            self.publish(|metadata| DomainEvent::borrowed(
                "item_borrowed", "catalog", id.to_string().as_str(), metadata, &dto));
        } else {
            debug!(item_id = %id, title = notice.title.as_str(), "item already borrowed");
        }
        Ok(notice)
    }

    fn return_item(&mut self, item: LendableId) -> LibraryResult<LendingNotice> {
        let id = item.id();
        let entry = Self::find_in(&mut self.items, id)?;
        let notice = entry.as_lendable()
            .ok_or_else(|| LibraryError::not_lendable(format!("item {} cannot be returned", id).as_str()))?
            .return_item();
        let dto = ItemDto::from(&*entry);
        if notice.outcome.changed() {
            if let Some(pos) = self.borrowed.iter().position(|b| *b == id) {
                self.borrowed.remove(pos);
            }
            info!(item_id = %id, title = notice.title.as_str(), "item returned");
            self.publish(|metadata| DomainEvent::returned(
                "item_returned", "catalog", id.to_string().as_str(), metadata, &dto));
        } else {
            debug!(item_id = %id, title = notice.title.as_str(), "item was not borrowed");
        }
        Ok(notice)
    }

    fn find_item(&self, id: ItemId) -> LibraryResult<&CatalogItem> {
        self.items.iter().find(|item| item.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("item with id {} not found", id).as_str()))
    }

    fn list_all_items(&self) -> Box<dyn Iterator<Item = &CatalogItem> + '_> {
        Box::new(self.items.iter())
    }

    fn list_borrowed_items(&self) -> Box<dyn Iterator<Item = &CatalogItem> + '_> {
        Box::new(self.borrowed.iter().filter_map(|id| self.find_item(*id).ok()))
    }
}
