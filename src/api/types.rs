//! Wire types for the PokéAPI JSON responses.
//!
//! Only the fields the catalog uses are declared; serde skips everything
//! else, so new upstream fields never break decoding.

use serde::Deserialize;

/// A `{name, url}` reference as used throughout the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Entity id taken from the reference URL.
    pub fn id(&self) -> &str {
        id_from_url(&self.url)
    }
}

/// Last non-empty path segment of a resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `"25"`.
pub fn id_from_url(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

/// One page of the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage {
    #[serde(rename = "results")]
    pub items: Vec<NamedResource>,
}

/// Raw response of `pokemon/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetail {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    /// Official artwork when present, else the plain front sprite.
    pub fn best(&self) -> Option<&str> {
        self.other
            .official_artwork
            .as_ref()
            .and_then(|art| art.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

/// Raw response of `pokemon-species/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpecies {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub evolution_chain: Option<ResourceLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

impl RawSpecies {
    /// First flavor text in `language`, with control line breaks flattened.
    ///
    /// Returns an empty string when no entry matches.
    pub fn description(&self, language: &str) -> String {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| normalize_flavor_text(&entry.flavor_text))
            .unwrap_or_default()
    }

    /// URL of the evolution chain resource, if the species has one.
    pub fn evolution_chain_url(&self) -> Option<&str> {
        self.evolution_chain.as_ref().map(|link| link.url.as_str())
    }
}

/// Replace each newline and form feed with a single space.
pub fn normalize_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\u{000C}' => ' ',
            other => other,
        })
        .collect()
}

/// Envelope of the evolution-chain endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainResponse {
    pub chain: RawChainNode,
}

/// A node of the evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawChainNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<RawChainNode>,
}
