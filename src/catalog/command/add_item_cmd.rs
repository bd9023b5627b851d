use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::domain::model::{CatalogItem, ItemFormat};
use crate::items::dto::ItemDto;

pub struct AddItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddItemCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemCommandRequest {
    pub title: String,
    pub publication_year: i32,
    pub format: ItemFormat,
    #[serde(default)]
    pub lendable: bool,
}

impl AddItemCommandRequest {
    pub fn new(title: &str, publication_year: i32, format: ItemFormat, lendable: bool) -> Self {
        Self {
            title: title.to_string(),
            publication_year,
            format,
            lendable,
        }
    }

    pub fn build_item(self) -> CatalogItem {
        let item = CatalogItem::new(self.title.as_str(), self.publication_year, self.format);
        if self.lendable {
            item.lendable()
        } else {
            item
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand<'_> {
    fn execute(&mut self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        let item = req.build_item();
        let dto = ItemDto::from(&item);
        let _ = self.catalog_service.add_item(item);
        Ok(AddItemCommandResponse::new(dto))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::{ItemKind, LendingStatus};
    use crate::gateway::GatewayPublisherVia;
    use crate::items::domain::model::ItemFormat;

    #[test]
    fn test_should_run_add_item() {
        let mut svc = create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let req = AddItemCommandRequest::new("Inception", 2010, ItemFormat::Dvd {
            director: "Christopher Nolan".to_string(),
            duration_minutes: 148,
        }, true);
        let res = AddItemCommand::new(&mut *svc).execute(req).expect("should add item");
        assert_eq!(ItemKind::Dvd, res.item.kind);
        assert_eq!(Some(LendingStatus::Available), res.item.lending_status);
        let loaded = svc.find_item(res.item.item_id).expect("should find item");
        assert_eq!("Inception", loaded.title());
    }

    #[test]
    fn test_should_parse_add_item_request() {
        let req: AddItemCommandRequest = serde_json::from_str(
            r#"{"title":"National Geographic","publication_year":2023,"format":{"Magazine":{"issue_number":10}}}"#)
            .expect("should parse request");
        assert!(!req.lendable);
        let item = req.build_item();
        assert!(!item.is_lendable());
        assert_eq!("Magazine: National Geographic, Year: 2023, Issue Number: 10", item.render_details());
    }
}
