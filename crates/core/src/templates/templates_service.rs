use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::catalog::{CategoryId, GoalTypeId};
use crate::errors::Result;
use crate::store::AppStore;

use super::templates_constants::starter_templates;
use super::templates_model::{NewTemplate, Template, TemplateUpdate};
use super::templates_traits::TemplateServiceTrait;

pub struct TemplateService {
    store: Arc<AppStore>,
}

impl TemplateService {
    pub fn new(store: Arc<AppStore>) -> Self {
        TemplateService { store }
    }
}

#[async_trait]
impl TemplateServiceTrait for TemplateService {
    fn get_templates(
        &self,
        category_id: Option<CategoryId>,
        goal_type_id: Option<GoalTypeId>,
    ) -> Result<Vec<Template>> {
        let mut templates = self.store.templates();
        if let Some(category_id) = category_id {
            templates.retain(|t| t.category.id == category_id);
        }
        if let Some(goal_type_id) = goal_type_id {
            templates.retain(|t| t.goal_type.id == goal_type_id);
        }
        Ok(templates)
    }

    fn get_template(&self, template_id: &str) -> Result<Option<Template>> {
        Ok(self
            .store
            .templates()
            .into_iter()
            .find(|t| t.id == template_id))
    }

    async fn create_template(&self, new_template: NewTemplate) -> Result<Template> {
        new_template.validate()?;

        let now = Utc::now();
        let template = Template {
            id: Uuid::new_v4().to_string(),
            user_id: new_template.user_id,
            title: new_template.title,
            description: new_template.description,
            category: new_template.category,
            goal_type: new_template.goal_type,
            default_metrics: new_template.default_metrics,
            icon: new_template.icon,
            is_custom: new_template.is_custom,
            created_at: now,
            updated_at: now,
        };
        self.store.add_template(template.clone());
        Ok(template)
    }

    async fn update_template(&self, template_id: &str, update: TemplateUpdate) -> Result<()> {
        self.store.update_template(template_id, update);
        Ok(())
    }

    async fn delete_template(&self, template_id: &str) -> Result<()> {
        self.store.delete_template(template_id);
        Ok(())
    }

    /// Installs the built-in starter templates for a new user. A no-op when
    /// the store already has templates (starters are seeded exactly once).
    async fn seed_starter_templates(&self, user_id: &str) -> Result<Vec<Template>> {
        if !self.store.templates().is_empty() {
            return Ok(Vec::new());
        }
        let starters = starter_templates(user_id);
        for template in &starters {
            self.store.add_template(template.clone());
        }
        Ok(starters)
    }
}
