use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::ItemId;
use crate::items::domain::LendingNotice;

pub struct BorrowItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> BorrowItemCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowItemCommandRequest {
    item_id: ItemId,
}

impl BorrowItemCommandRequest {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowItemCommandResponse {
    item_id: ItemId,
    notice: LendingNotice,
}

impl BorrowItemCommandResponse {
    pub fn new(item_id: ItemId, notice: LendingNotice) -> Self {
        Self {
            item_id,
            notice,
        }
    }

    pub fn notice(&self) -> &LendingNotice {
        &self.notice
    }
}

impl Command<BorrowItemCommandRequest, BorrowItemCommandResponse> for BorrowItemCommand<'_> {
    fn execute(&mut self, req: BorrowItemCommandRequest) -> Result<BorrowItemCommandResponse, CommandError> {
        let handle = self.catalog_service.lendable(req.item_id)?;
        let notice = self.catalog_service.borrow_item(handle)?;
        Ok(BorrowItemCommandResponse::new(req.item_id, notice))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, ItemId};
    use crate::gateway::GatewayPublisherVia;
    use crate::items::domain::LendingOutcome;
    use crate::items::domain::model::CatalogItem;

    #[test]
    fn test_should_run_borrow_item() {
        let mut svc = create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let book = svc.add_item(CatalogItem::lendable_book("Effective Java", 2008, "Joshua Bloch", "123456789"));
        let mut cmd = BorrowItemCommand::new(&mut *svc);
        let res = cmd.execute(BorrowItemCommandRequest::new(book)).expect("should borrow");
        assert_eq!(book, res.item_id);
        assert_eq!("Effective Java has been borrowed.", res.notice().to_string());
        let res = cmd.execute(BorrowItemCommandRequest::new(book)).expect("should borrow");
        assert_eq!(LendingOutcome::AlreadyBorrowed, res.notice().outcome);
    }

    #[test]
    fn test_should_fail_borrow_magazine() {
        let mut svc = create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let magazine = svc.add_item(CatalogItem::magazine("National Geographic", 2023, 10));
        let res = BorrowItemCommand::new(&mut *svc).execute(BorrowItemCommandRequest::new(magazine));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        assert_eq!(0, svc.list_borrowed_items().count());
    }

    #[test]
    fn test_should_fail_borrow_unknown() {
        let mut svc = create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let res = BorrowItemCommand::new(&mut *svc).execute(BorrowItemCommandRequest::new(ItemId::new()));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
