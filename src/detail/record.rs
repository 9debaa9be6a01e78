use serde::Serialize;

use crate::api::types::{RawDetail, RawSpecies};
use crate::evolution::EvolutionNode;
use crate::sprite::SpriteTemplate;

/// A fully assembled detail record: entity, species text and evolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRecord {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub height: u32,
    pub weight: u32,
    pub metrics: Vec<Metric>,
    pub description: String,
    pub evolutions: Vec<EvolutionNode>,
}

/// A named base stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub name: String,
    pub value: u32,
}

impl DetailRecord {
    /// Combine the three API responses into one record.
    pub fn assemble(
        detail: RawDetail,
        species: &RawSpecies,
        evolutions: Vec<EvolutionNode>,
        sprites: &SpriteTemplate,
        language: &str,
    ) -> Self {
        let id = detail.id.to_string();
        let image_url = detail
            .sprites
            .best()
            .map(str::to_string)
            .unwrap_or_else(|| sprites.url_for(&id));

        Self {
            image_url,
            name: detail.name,
            tags: detail.types.into_iter().map(|slot| slot.kind.name).collect(),
            height: detail.height,
            weight: detail.weight,
            metrics: detail
                .stats
                .into_iter()
                .map(|slot| Metric {
                    name: capitalize(&slot.stat.name),
                    value: slot.base_stat,
                })
                .collect(),
            description: species.description(language),
            evolutions,
            id,
        }
    }
}

/// Upper-case the first character, leaving the rest untouched.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
