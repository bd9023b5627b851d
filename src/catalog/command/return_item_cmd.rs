use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::ItemId;
use crate::items::domain::LendingNotice;

pub struct ReturnItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnItemCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnItemCommandRequest {
    item_id: ItemId,
}

impl ReturnItemCommandRequest {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnItemCommandResponse {
    item_id: ItemId,
    notice: LendingNotice,
}

impl ReturnItemCommandResponse {
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

impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand<'_> {
    fn execute(&mut self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        let handle = self.catalog_service.lendable(req.item_id)?;
        let notice = self.catalog_service.return_item(handle)?;
        Ok(ReturnItemCommandResponse::new(req.item_id, notice))
    }
}
