//! Inventory matching for blankets and paired liners

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Blanket, Liner};

/// Best blanket/liner pick for a target fill weight
#[derive(Debug, Clone, Default)]
pub struct InventoryMatch {
    pub blanket: Option<Blanket>,
    pub liner: Option<Liner>,
    pub combined_grams: i32,
}

/// Rank the inventory by closeness to the target grams and pick the best
/// candidate that satisfies the waterproof requirement.
///
/// A liner paired with a blanket counts toward that blanket's effective
/// grams (first liner wins if several reference the same blanket). When no
/// candidate is waterproof but waterproofing is needed, the closest-by-grams
/// candidate is still returned. An empty inventory yields an empty match.
pub fn match_inventory(
    blankets: &[Blanket],
    liners: &[Liner],
    grams_needed: i32,
    needs_waterproof: bool,
    include_liners: bool,
) -> InventoryMatch {
    let mut paired: HashMap<Uuid, &Liner> = HashMap::new();
    if include_liners {
        for liner in liners {
            if let Some(blanket_id) = liner.paired_with_blanket_id {
                paired.entry(blanket_id).or_insert(liner);
            }
        }
    }

    let mut candidates: Vec<(&Blanket, Option<&Liner>, i32)> = blankets
        .iter()
        .map(|blanket| {
            let liner = paired.get(&blanket.id).copied();
            let effective_grams = blanket.grams + liner.map_or(0, |l| l.grams);
            (blanket, liner, effective_grams)
        })
        .collect();

    // Stable sort keeps inventory order for equally close candidates
    candidates.sort_by_key(|(_, _, effective_grams)| (effective_grams - grams_needed).abs());

    let selected = candidates
        .iter()
        .find(|(blanket, _, _)| !needs_waterproof || blanket.waterproof)
        .or_else(|| candidates.first());

    match selected {
        Some((blanket, liner, effective_grams)) => InventoryMatch {
            blanket: Some((*blanket).clone()),
            liner: liner.cloned(),
            combined_grams: *effective_grams,
        },
        None => InventoryMatch::default(),
    }
}
