use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ListScope {
    All,
    Borrowed,
}

pub struct ListItemsCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListItemsCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListItemsCommandRequest {
    scope: ListScope,
}

impl ListItemsCommandRequest {
    pub fn new(scope: ListScope) -> Self {
        Self {
            scope,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListItemsCommandResponse {
    pub items: Vec<ItemDto>,
    // rendered details, one per item
    pub lines: Vec<String>,
}

impl Command<ListItemsCommandRequest, ListItemsCommandResponse> for ListItemsCommand<'_> {
    fn execute(&mut self, req: ListItemsCommandRequest) -> Result<ListItemsCommandResponse, CommandError> {
        let iter = match req.scope {
            ListScope::All => self.catalog_service.list_all_items(),
            ListScope::Borrowed => self.catalog_service.list_borrowed_items(),
        };
        let (items, lines): (Vec<ItemDto>, Vec<String>) = iter.map(|item| (ItemDto::from(item), item.render_details())).unzip();
        Ok(ListItemsCommandResponse { items, lines })
    }
}
