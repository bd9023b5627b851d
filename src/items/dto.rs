use serde::{Deserialize, Serialize};
use crate::core::domain::{Identifiable, ItemId};
use crate::core::library::{ItemKind, LendingStatus};
use crate::items::domain::model::{CatalogItem, ItemFormat};

// ItemDto is a data transfer object for catalog item snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub item_id: ItemId,
    pub kind: ItemKind,
    pub title: String,
    pub publication_year: i32,
    pub format: ItemFormat,
    pub lending_status: Option<LendingStatus>,
}

impl Identifiable for ItemDto {
    fn id(&self) -> ItemId {
        self.item_id
    }
}

impl From<&CatalogItem> for ItemDto {
    fn from(other: &CatalogItem) -> Self {
        Self {
            item_id: other.id(),
            kind: other.kind(),
            title: other.title().to_string(),
            publication_year: other.publication_year(),
            format: other.format().clone(),
            lending_status: other.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::{ItemKind, LendingStatus};
    use crate::items::domain::model::CatalogItem;
    use crate::items::dto::ItemDto;

    #[test]
    fn test_should_build_dto() {
        let dvd = CatalogItem::lendable_dvd("Inception", 2010, "Christopher Nolan", 148);
        let dto = ItemDto::from(&dvd);
        assert_eq!(dvd.id(), dto.id());
        assert_eq!(ItemKind::Dvd, dto.kind);
        assert_eq!("Inception", dto.title.as_str());
        assert_eq!(Some(LendingStatus::Available), dto.lending_status);
    }

    #[test]
    fn test_should_serialize_dto() {
        let magazine = CatalogItem::magazine("National Geographic", 2023, 10);
        let json = serde_json::to_value(ItemDto::from(&magazine)).expect("should serialize");
        assert_eq!("Magazine", json["kind"]);
        assert_eq!(10, json["format"]["Magazine"]["issue_number"]);
        assert!(json["lending_status"].is_null());
    }
}
