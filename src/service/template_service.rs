use crate::common::*;

use crate::traits::service::template_service_trait::*;

use tera::{Context as TeraContext, Tera};

#[doc = "tera 로 `<template_name>.html` 템플릿을 렌더링해주는 서비스"]
pub struct TemplateServiceImpl {
    engine: Tera,
}

impl TemplateServiceImpl {
    #[doc = "Loads every `*.html` file found under `template_dir`."]
    pub fn new(template_dir: &str) -> Result<Self, anyhow::Error> {
        let glob: String = format!("{}/**/*.html", template_dir.trim_end_matches('/'));

        let engine: Tera = Tera::new(&glob).map_err(|e| {
            anyhow!(
                "[TemplateServiceImpl::new] Failed to load templates from '{}': {:?}",
                template_dir,
                e
            )
        })?;

        info!(
            "[TemplateServiceImpl::new] {} template(s) loaded from '{}'",
            engine.get_template_names().count(),
            template_dir
        );

        Ok(TemplateServiceImpl { engine })
    }

    #[cfg(test)]
    pub fn from_raw_templates(templates: Vec<(&str, &str)>) -> Result<Self, anyhow::Error> {
        let mut engine: Tera = Tera::default();
        engine.add_raw_templates(templates)?;
        Ok(TemplateServiceImpl { engine })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render_html(
        &self,
        template_name: &str,
        html_form_map: &HashMap<String, String>,
    ) -> Result<String, anyhow::Error> {
        let mut context: TeraContext = TeraContext::new();

        for (key, value) in html_form_map {
            context.insert(key.as_str(), value);
        }

        let html: String = self
            .engine
            .render(&format!("{}.html", template_name), &context)?;

        Ok(html)
    }
}
