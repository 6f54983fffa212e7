//! Manage categories

use super::AdminResource;
use crate::ClientResult;
use crate::api::Api;
use crate::http::HttpClient;
use async_trait::async_trait;
use shared::models::{Category, CategoryCreate};
use shared::validation::{ValidationError, require_all};

const NAME_AND_DESC_REQUIRED: &str = "Name and description are required fields.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub desc: String,
}

pub struct CategoryAdmin;

#[async_trait]
impl AdminResource for CategoryAdmin {
    type Record = Category;
    type Draft = CategoryDraft;

    const LABEL: &'static str = "Category";
    const RELOAD_AFTER_UPDATE: bool = true;

    fn id(record: &Category) -> i64 {
        record.id
    }

    fn draft_of(record: &Category) -> CategoryDraft {
        CategoryDraft {
            name: record.name.clone(),
            desc: record.desc.clone(),
        }
    }

    fn check(draft: &CategoryDraft) -> Result<(), ValidationError> {
        require_all(&[draft.name.as_str(), draft.desc.as_str()], NAME_AND_DESC_REQUIRED)
    }

    async fn fetch_all<C: HttpClient>(api: &Api<C>) -> ClientResult<Vec<Category>> {
        api.categories().list().await
    }

    async fn create<C: HttpClient>(api: &Api<C>, draft: &CategoryDraft) -> ClientResult<Category> {
        let body = CategoryCreate {
            name: draft.name.clone(),
            desc: draft.desc.clone(),
        };
        api.categories().create(&body).await
    }

    async fn update<C: HttpClient>(
        api: &Api<C>,
        id: i64,
        draft: &CategoryDraft,
    ) -> ClientResult<Category> {
        let categories = api.categories();
        let current = categories.get(id).await?;
        let body = Category {
            id: current.id,
            name: draft.name.clone(),
            desc: draft.desc.clone(),
        };
        categories.update(id, &body).await
    }

    async fn delete<C: HttpClient>(api: &Api<C>, id: i64) -> ClientResult<()> {
        api.categories().delete(id).await
    }
}
