use crate::domain::clothing_item::ClothingItem;
use crate::domain::types::ClothingItemId;
use crate::forms::clothing::AddClothingItemFormPayload;
use crate::repository::{ClothingItemReader, ClothingItemWriter};

use super::{ServiceError, ServiceResult};

pub fn list_clothing_items<R>(repo: &R) -> ServiceResult<Vec<ClothingItem>>
where
    R: ClothingItemReader,
{
    repo.list_clothing_items().map_err(|e| {
        log::error!("Failed to list clothing items: {e}");
        ServiceError::Internal
    })
}

pub fn get_clothing_item<R>(id: i32, repo: &R) -> ServiceResult<ClothingItem>
where
    R: ClothingItemReader,
{
    let id = ClothingItemId::new(id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_clothing_item_by_id(id) {
        Ok(Some(item)) => Ok(item),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get clothing item {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn add_clothing_item<R>(
    payload: AddClothingItemFormPayload,
    repo: &R,
) -> ServiceResult<ClothingItem>
where
    R: ClothingItemWriter,
{
    let item = payload.into_new_clothing_item();
    repo.create_clothing_item(&item).map_err(|e| {
        log::error!("Failed to create clothing item: {e}");
        ServiceError::Internal
    })
}

/// Delete an item; unknown ids are a no-op.
pub fn delete_clothing_item<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ClothingItemWriter,
{
    let Ok(id) = ClothingItemId::new(id) else {
        return Ok(());
    };

    match repo.delete_clothing_item(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete clothing item {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::clothing_item::NewClothingItem;
    use crate::domain::types::{ColorName, ItemImage, ItemName, ItemType, Occasion, Season};
    use crate::repository::test::TestRepository;

    pub(crate) fn new_item(name: &str, item_type: &str) -> NewClothingItem {
        NewClothingItem {
            name: ItemName::new(name).unwrap(),
            item_type: ItemType::new(item_type).unwrap(),
            color: ColorName::new("black").unwrap(),
            season: Season::new("all").unwrap(),
            occasion: Occasion::new("casual").unwrap(),
            image_url: ItemImage::new(format!("https://example.com/{item_type}.jpg")).unwrap(),
        }
    }

    fn payload(name: &str) -> AddClothingItemFormPayload {
        let item = new_item(name, "shirt");
        AddClothingItemFormPayload {
            name: item.name,
            item_type: item.item_type,
            color: item.color,
            season: item.season,
            occasion: item.occasion,
            image_url: item.image_url,
        }
    }

    #[test]
    fn created_item_is_listed_with_assigned_id() {
        let repo = TestRepository::new();
        let created = add_clothing_item(payload("Tee"), &repo).unwrap();
        let items = list_clothing_items(&repo).unwrap();
        assert_eq!(items, vec![created.clone()]);
        assert!(created.id.get() > 0);
    }

    #[test]
    fn deleted_item_disappears() {
        let repo = TestRepository::new();
        let created = add_clothing_item(payload("Tee"), &repo).unwrap();
        delete_clothing_item(created.id.get(), &repo).unwrap();
        assert!(list_clothing_items(&repo).unwrap().is_empty());
        assert_eq!(
            get_clothing_item(created.id.get(), &repo),
            Err(ServiceError::NotFound)
        );
    }

    #[test]
    fn deleting_unknown_item_is_not_an_error() {
        let repo = TestRepository::new();
        assert_eq!(delete_clothing_item(42, &repo), Ok(()));
        assert_eq!(delete_clothing_item(-1, &repo), Ok(()));
    }

    #[test]
    fn non_positive_ids_are_not_found() {
        let repo = TestRepository::new();
        assert_eq!(get_clothing_item(0, &repo), Err(ServiceError::NotFound));
    }
}
