use super::*;
use crate::config::RenderConfig;
use crate::layout::types::{LaidOutLink, LaidOutNode, LayoutOutput, LayoutRequest};
use crate::layout::{LayoutAdapter, StageLayout};
use crate::parsers::parse;

fn rendered(src: &str) -> RenderedGraph {
    let g = parse(src);
    let req = LayoutRequest::from_config(&g, &RenderConfig::default());
    RenderedGraph::from_layout(StageLayout.layout(&req).unwrap())
}

fn slot(g: &RenderedGraph, name: &str) -> usize {
    g.nodes.iter().position(|n| n.name == name).unwrap()
}

fn link_pos(g: &RenderedGraph, from: &str, to: &str) -> usize {
    let (s, t) = (slot(g, from), slot(g, to));
    (0..g.link_count()).find(|&p| g.ends(p) == (s, t)).unwrap()
}

fn palette() -> Palette {
    Palette::default()
}

#[test]
fn test_reference_example() {
    let g = rendered("A [10] B\nA [5] C\nB [10] D\n");
    let p = palette();
    let c = propagate(&g, &p);
    let names: Vec<&str> = g.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);

    assert_eq!(c.node(slot(&g, "A")), p.color(0));
    assert_eq!(c.link(link_pos(&g, "A", "B")), p.color(0));
    assert_eq!(c.link(link_pos(&g, "A", "C")), p.color(1));
    assert_eq!(c.node(slot(&g, "B")), p.color(0));
    assert_eq!(c.node(slot(&g, "C")), p.color(1));
    assert_eq!(c.link(link_pos(&g, "B", "D")), p.color(0));
    assert_eq!(c.node(slot(&g, "D")), p.color(0));
}

#[test]
fn test_branches_get_distinct_colors() {
    let g = rendered("A [1] B\nA [1] C\nA [1] D");
    let p = palette();
    let c = propagate(&g, &p);
    let a = slot(&g, "A");
    let colors: Vec<&str> = g.outgoing(a).iter().map(|&pos| c.link(pos)).collect();
    assert_eq!(colors, vec![p.color(0), p.color(1), p.color(2)]);
    assert_eq!(colors[0], c.node(a));
}

#[test]
fn test_roots_colored_in_node_order() {
    let g = rendered("A [1] C\nB [1] C");
    let p = palette();
    let c = propagate(&g, &p);
    assert_eq!(c.node(slot(&g, "A")), p.color(0));
    assert_eq!(c.node(slot(&g, "B")), p.color(1));
    // First writer wins: A is dequeued before B.
    assert_eq!(c.node(slot(&g, "C")), p.color(0));
    assert_eq!(c.link(link_pos(&g, "B", "C")), p.color(1));
}

#[test]
fn test_visit_once_on_diamond() {
    let g = rendered("A [1] B\nA [1] C\nB [1] D\nC [1] D\nD [1] E");
    let p = palette();
    let c = propagate(&g, &p);
    assert_eq!(c.node(slot(&g, "D")), p.color(0));
    assert_eq!(c.link(link_pos(&g, "C", "D")), p.color(1));
    // D is visited once, so D->E is colored once with D's color.
    assert_eq!(c.link(link_pos(&g, "D", "E")), p.color(0));
}

#[test]
fn test_orphan_cycle_uses_fallback() {
    let g = rendered("A [1] B\nX [1] Y\nY [1] X");
    let p = palette();
    let c = propagate(&g, &p);
    assert_eq!(c.node(slot(&g, "A")), p.color(0));
    assert_eq!(c.node(slot(&g, "X")), p.fallback());
    assert_eq!(c.node(slot(&g, "Y")), p.fallback());
    assert_eq!(c.link(link_pos(&g, "X", "Y")), p.fallback());
    assert!(!c.is_node_reached(slot(&g, "X")));
    assert!(c.is_node_reached(slot(&g, "B")));
}

#[test]
fn test_palette_wraps() {
    let g = rendered("A [1] B\nA [1] C\nA [1] D");
    let p = Palette::new(["#000000", "#ffffff"]).unwrap();
    let c = propagate(&g, &p);
    let a = slot(&g, "A");
    let colors: Vec<&str> = g.outgoing(a).iter().map(|&pos| c.link(pos)).collect();
    assert_eq!(colors, vec!["#000000", "#ffffff", "#000000"]);
}

#[test]
fn test_every_color_in_palette() {
    let g = rendered("a [3] b\nb [1] c\nb [2] d\nq [1] r\nr [1] q\nd [1] a");
    let p = palette();
    let c = propagate(&g, &p);
    for s in 0..g.node_count() {
        assert!(p.contains(c.node(s)));
    }
    for pos in 0..g.link_count() {
        assert!(p.contains(c.link(pos)));
    }
}

#[test]
fn test_idempotent() {
    let src = "x [2] y\nx [1] z\nz [4] w\ny [1] w";
    let p = palette();
    let first = propagate(&rendered(src), &p);
    let second = propagate(&rendered(src), &p);
    assert_eq!(first, second);
}

#[test]
fn test_shadow_links_do_not_affect_roots() {
    let mut shadow_node = LaidOutNode::new(7, "shadow", 1.0);
    shadow_node.is_shadow = true;
    let mut shadow_link = LaidOutLink::new(1, 7, 1, 1.0);
    shadow_link.is_shadow = true;
    let out = LayoutOutput {
        nodes: vec![
            LaidOutNode::new(0, "A", 1.0),
            LaidOutNode::new(1, "B", 1.0),
            shadow_node,
        ],
        links: vec![shadow_link],
    };
    let g = RenderedGraph::from_layout(out);
    let p = palette();
    let c = propagate(&g, &p);
    assert_eq!(c.node(0), p.color(0));
    assert_eq!(c.node(1), p.color(1));
}

#[test]
fn test_self_loop_only_graph_falls_back() {
    let g = rendered("A [1] A");
    let p = palette();
    let c = propagate(&g, &p);
    assert_eq!(c.node(0), p.fallback());
    assert_eq!(c.link(0), p.fallback());
}

#[test]
fn test_parallel_links_keep_own_colors() {
    let g = rendered("A [1] B\nA [1] B");
    let p = palette();
    let c = propagate(&g, &p);
    let a = slot(&g, "A");
    let b = slot(&g, "B");
    assert_eq!(g.link_count(), 2);
    assert_eq!(c.link(0), p.color(0));
    assert_eq!(c.link(1), p.color(1));
    assert_eq!(c.link(1), "#10b981");
    // The first link reaches B first.
    assert_eq!(c.node(b), c.node(a));
}
