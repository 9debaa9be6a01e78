//! Deterministic image URLs derived from entity ids.

/// URL template with an `{id}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTemplate(String);

impl SpriteTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn url_for(&self, id: &str) -> String {
        self.0.replace("{id}", id)
    }
}

impl Default for SpriteTemplate {
    fn default() -> Self {
        Self::new(crate::config::ApiConfig::default().sprite_url_template)
    }
}
