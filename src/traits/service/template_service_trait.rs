use crate::common::*;

pub trait TemplateService: Send + Sync {
    fn render_html(
        &self,
        template_name: &str,
        html_form_map: &HashMap<String, String>,
    ) -> Result<String, anyhow::Error>;
}
