//! Templates module - domain models, starter set, service, and traits.

mod templates_constants;
mod templates_model;
mod templates_service;
mod templates_traits;

pub use templates_constants::starter_templates;
pub use templates_model::{NewTemplate, Template, TemplateUpdate};
pub use templates_service::TemplateService;
pub use templates_traits::TemplateServiceTrait;
