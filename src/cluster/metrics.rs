//! Edge support and strength metrics.
//!
//! Both metrics are computed lazily, once per edge, and written into the shared
//! edge record. Support of an edge is its weighted triangle count; strength
//! normalises support by the strongest incident support known at each endpoint.

use crate::config::Mean;
use crate::error::SiwoError;
use crate::graph::{EdgeIndex, Graph, NodeIndex};

/// Compute the support of the edge between `u` and `v`.
///
/// Returns the stored value without recomputing if the edge is already done.
pub fn calculate_support(
    graph: &mut Graph,
    mean: Mean,
    u: NodeIndex,
    v: NodeIndex,
) -> Result<f64, SiwoError> {
    let edge = graph
        .node(u)
        .edge_to(v)
        .ok_or_else(|| SiwoError::MissingEdge(graph.node(u).id(), graph.node(v).id()))?;
    Ok(support_of_edge(graph, mean, u, v, edge))
}

pub(crate) fn support_of_edge(
    graph: &mut Graph,
    mean: Mean,
    u: NodeIndex,
    v: NodeIndex,
    edge: EdgeIndex,
) -> f64 {
    if graph.edge(edge).support_calculated {
        return graph.edge(edge).support;
    }

    let w1 = graph.edge(edge).weight;
    let node_v = graph.node(v);
    let mut total = 0.0;

    for &(w, uw) in graph.node(u).neighbors() {
        if let Some(vw) = node_v.edge_to(w) {
            total += mean.combine(w1, graph.edge(uw).weight, graph.edge(vw).weight);
        }
    }

    let record = graph.edge_mut(edge);
    record.support = total;
    record.support_calculated = true;

    for endpoint in [u, v] {
        let node = graph.node_mut(endpoint);
        if total > node.max_support {
            node.max_support = total;
        }
    }

    total
}

/// Compute support for every edge incident to `node`
pub fn calculate_local_support(graph: &mut Graph, mean: Mean, node: NodeIndex) {
    for slot in 0..graph.node(node).degree() {
        let (nb, edge) = graph.node(node).neighbors()[slot];
        if !graph.edge(edge).support_calculated {
            support_of_edge(graph, mean, node, nb, edge);
        }
    }
    graph.node_mut(node).support_calculated = true;
}

/// Compute strength for every edge incident to `node`.
///
/// Each neighbour's local support is completed first so its max support is
/// known; a neighbour's max support may still grow later, and strengths already
/// written keep the value they were computed with.
pub fn calculate_local_strength(graph: &mut Graph, mean: Mean, node: NodeIndex) {
    if graph.node(node).strength_calculated {
        return;
    }
    if !graph.node(node).support_calculated {
        calculate_local_support(graph, mean, node);
    }

    for slot in 0..graph.node(node).degree() {
        let (nb, edge) = graph.node(node).neighbors()[slot];
        if graph.node(nb).strength_calculated || graph.edge(edge).strength_calculated {
            continue;
        }
        if !graph.node(nb).support_calculated {
            calculate_local_support(graph, mean, nb);
        }

        let support = graph.edge(edge).support;
        let strength = ratio(support, graph.node(node).max_support)
            + ratio(support, graph.node(nb).max_support)
            - 1.0;

        let record = graph.edge_mut(edge);
        record.strength = strength;
        record.strength_calculated = true;
    }
    graph.node_mut(node).strength_calculated = true;
}

#[inline]
fn ratio(support: f64, max_support: f64) -> f64 {
    if max_support > 0.0 {
        support / max_support
    } else {
        0.0
    }
}
