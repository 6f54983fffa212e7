//! Manage products

use super::{AdminResource, CrudScreen};
use crate::ClientResult;
use crate::api::Api;
use crate::http::HttpClient;
use async_trait::async_trait;
use shared::models::{Product, ProductCreate};
use shared::validation::{ValidationError, require_all};
use shared::{Money, Quantity};

const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Product form; price and stock hold the raw text of their fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub desc: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub image: String,
}

impl ProductDraft {
    fn to_create(&self) -> Result<ProductCreate, ValidationError> {
        let price = Money::parse(&self.price)
            .map_err(|_| ValidationError::InvalidAmount(self.price.clone()))?;
        let stock: Quantity = self
            .stock
            .parse()
            .map_err(|_| ValidationError::InvalidQuantity)?;
        Ok(ProductCreate {
            name: self.name.clone(),
            desc: self.desc.clone(),
            price,
            stock,
            category: self.category.clone(),
            image: self.image.clone(),
        })
    }
}

pub struct ProductAdmin;

#[async_trait]
impl AdminResource for ProductAdmin {
    type Record = Product;
    type Draft = ProductDraft;

    const LABEL: &'static str = "Product";
    const RELOAD_AFTER_UPDATE: bool = false;

    fn id(record: &Product) -> i64 {
        record.id
    }

    fn draft_of(record: &Product) -> ProductDraft {
        ProductDraft {
            name: record.name.clone(),
            desc: record.desc.clone(),
            price: record.price.to_string(),
            stock: record.stock.to_string(),
            category: record.category.clone(),
            image: record.image.clone(),
        }
    }

    fn check(draft: &ProductDraft) -> Result<(), ValidationError> {
        require_all(
            &[
                draft.name.as_str(),
                draft.desc.as_str(),
                draft.price.as_str(),
                draft.stock.as_str(),
                draft.category.as_str(),
                draft.image.as_str(),
            ],
            ALL_FIELDS_REQUIRED,
        )?;
        draft.to_create().map(|_| ())
    }

    async fn fetch_all<C: HttpClient>(api: &Api<C>) -> ClientResult<Vec<Product>> {
        api.products().list().await
    }

    async fn create<C: HttpClient>(api: &Api<C>, draft: &ProductDraft) -> ClientResult<Product> {
        let body = draft.to_create()?;
        api.products().create(&body).await
    }

    /// PUT the record built from the form; no fresh read
    async fn update<C: HttpClient>(
        api: &Api<C>,
        id: i64,
        draft: &ProductDraft,
    ) -> ClientResult<Product> {
        let body = draft.to_create()?.into_product(id);
        api.products().update(id, &body).await
    }

    async fn delete<C: HttpClient>(api: &Api<C>, id: i64) -> ClientResult<()> {
        api.products().delete(id).await
    }
}

impl<C: HttpClient> CrudScreen<ProductAdmin, C> {
    /// Category names offered by the form's category picker
    pub async fn category_names(&self) -> ClientResult<Vec<String>> {
        let categories = self.context().api.categories().list().await?;
        Ok(categories.into_iter().map(|c| c.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Nasi Lemak".into(),
            desc: "Coconut rice".into(),
            price: "8.50".into(),
            stock: "20".into(),
            category: "Mains".into(),
            image: "http://img/nasi.png".into(),
        }
    }

    #[test]
    fn test_check_requires_every_field() {
        assert!(ProductAdmin::check(&draft()).is_ok());
        let mut missing = draft();
        missing.image = "  ".into();
        assert_eq!(
            ProductAdmin::check(&missing),
            Err(ValidationError::Required(ALL_FIELDS_REQUIRED))
        );
    }

    #[test]
    fn test_check_rejects_unparseable_price_and_stock() {
        let mut bad_price = draft();
        bad_price.price = "cheap".into();
        assert!(matches!(
            ProductAdmin::check(&bad_price),
            Err(ValidationError::InvalidAmount(_))
        ));

        let mut bad_stock = draft();
        bad_stock.stock = "-3".into();
        assert_eq!(
            ProductAdmin::check(&bad_stock),
            Err(ValidationError::InvalidQuantity)
        );
    }

    #[test]
    fn test_draft_round_trips_record() {
        let product = draft().to_create().unwrap().into_product(4);
        assert_eq!(ProductAdmin::draft_of(&product), draft());
    }
}
