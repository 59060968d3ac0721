use crate::catalog::{CategoryId, GoalTypeId};
use crate::errors::Result;
use crate::templates::templates_model::{NewTemplate, Template, TemplateUpdate};
use async_trait::async_trait;

/// Trait for template service operations
#[async_trait]
pub trait TemplateServiceTrait: Send + Sync {
    fn get_templates(
        &self,
        category_id: Option<CategoryId>,
        goal_type_id: Option<GoalTypeId>,
    ) -> Result<Vec<Template>>;
    fn get_template(&self, template_id: &str) -> Result<Option<Template>>;
    async fn create_template(&self, new_template: NewTemplate) -> Result<Template>;
    async fn update_template(&self, template_id: &str, update: TemplateUpdate) -> Result<()>;
    async fn delete_template(&self, template_id: &str) -> Result<()>;
    async fn seed_starter_templates(&self, user_id: &str) -> Result<Vec<Template>>;
}
