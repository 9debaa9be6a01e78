//! Flattening of evolution trees into display order.

use serde::Serialize;

use crate::api::RawChainNode;
use crate::sprite::SpriteTemplate;

/// One member of a flattened evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionNode {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

/// Flatten an evolution tree in pre-order.
///
/// Each node is emitted before its children and siblings keep their
/// upstream order, so a whole branch is listed before the next one
/// starts. Iterative, so tree depth never grows the call stack.
pub fn flatten(root: &RawChainNode, sprites: &SpriteTemplate) -> Vec<EvolutionNode> {
    let mut nodes = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        let id = node.species.id().to_string();
        nodes.push(EvolutionNode {
            image_url: sprites.url_for(&id),
            name: node.species.name.clone(),
            id,
        });
        // Reversed so the leftmost child is popped first.
        stack.extend(node.evolves_to.iter().rev());
    }

    nodes
}
