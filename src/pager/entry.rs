use serde::Serialize;

use crate::api::NamedResource;
use crate::sprite::SpriteTemplate;

/// One row of the catalog list.
///
/// `tags` starts empty and is filled once by the backfill pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub tags: Vec<String>,
}

impl SummaryEntry {
    pub fn from_resource(item: &NamedResource, sprites: &SpriteTemplate) -> Self {
        let id = item.id().to_string();
        Self {
            image_url: sprites.url_for(&id),
            name: item.name.clone(),
            tags: Vec::new(),
            id,
        }
    }

    pub fn needs_tags(&self) -> bool {
        self.tags.is_empty()
    }
}
