//! Correction passes run after every node has been clustered

use crate::cluster::{Community, CommunityId};
use crate::graph::Graph;
use std::collections::HashMap;

/// Find the community with the heaviest total edge weight into `community`.
///
/// Ties go to the community reached first. Returns `None` when no member has
/// a neighbour outside the community.
pub fn find_closest_community(graph: &Graph, community: &Community) -> Option<CommunityId> {
    // first-seen order keeps tie-breaking deterministic
    let mut weights: Vec<(CommunityId, f64)> = Vec::new();
    let mut slots: HashMap<CommunityId, usize> = HashMap::new();

    for &member in community.members() {
        let node = graph.node(member);
        for &(nb, edge) in node.neighbors() {
            let Some(other) = graph.node(nb).community else {
                continue;
            };
            if Some(other) == node.community {
                continue;
            }

            let weight = graph.edge(edge).weight;
            match slots.get(&other) {
                Some(&slot) => weights[slot].1 += weight,
                None => {
                    slots.insert(other, weights.len());
                    weights.push((other, weight));
                }
            }
        }
    }

    let mut best = None;
    let mut best_weight = f64::NEG_INFINITY;
    for (id, weight) in weights {
        if weight > best_weight {
            best = Some(id);
            best_weight = weight;
        }
    }
    best
}

/// Merge every non-empty community smaller than `min_size` into its closest
/// neighbouring community, in id order.
///
/// Merged-away communities stay in the list as empty placeholders so ids keep
/// matching positions. Communities with no outside connection are left as they are.
pub fn merge_small_communities(
    graph: &mut Graph,
    communities: &mut [Community],
    min_size: usize,
) -> usize {
    let mut merged = 0;

    for source in 0..communities.len() {
        let size = communities[source].len();
        if size == 0 || size >= min_size {
            continue;
        }

        let Some(target) = find_closest_community(graph, &communities[source]) else {
            log::debug!("Community {} has no outside connections, left unmerged", source);
            continue;
        };

        for node in communities[source].take_members() {
            graph.node_mut(node).community = Some(target);
            communities[target].insert(node);
        }
        log::debug!("Merged community {} ({} members) into {}", source, size, target);
        merged += 1;
    }

    merged
}

/// Move every degree-1 node into its only neighbour's current community.
///
/// Nodes are visited in graph order. Only the moved node leaves its old
/// community; a node already sharing its neighbour's community stays put.
pub fn merge_dangling_nodes(graph: &mut Graph, communities: &mut [Community]) -> usize {
    let mut moved = 0;

    for idx in 0..graph.node_count() {
        let node = graph.node(idx);
        if node.degree() != 1 {
            continue;
        }

        let (nb, _) = node.neighbors()[0];
        let (Some(old), Some(target)) = (node.community, graph.node(nb).community) else {
            continue;
        };
        if old == target {
            continue;
        }

        communities[old].remove(idx);
        communities[target].insert(idx);
        graph.node_mut(idx).community = Some(target);
        moved += 1;
    }

    moved
}
