use super::*;

#[test]
fn test_flow_node_new() {
    let n = FlowNode::new("Revenue", 3, 1);
    assert_eq!(n.name, "Revenue");
    assert_eq!(n.source_row, 3);
    assert_eq!(n.index, 1);
}

#[test]
fn test_flow_link_new() {
    let l = FlowLink::new(0, 2, 12.5, 4, 4);
    assert_eq!(l.source, 0);
    assert_eq!(l.target, 2);
    assert_eq!(l.value, 12.5);
    assert!(!l.is_self_loop());
}

#[test]
fn test_flow_link_self_loop() {
    let l = FlowLink::new(1, 1, 2.0, 0, 0);
    assert!(l.is_self_loop());
}

#[test]
fn test_flow_graph_new_is_empty() {
    let g = FlowGraph::new();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.link_count(), 0);
}

#[test]
fn test_flow_graph_lookup() {
    let g = FlowGraph {
        nodes: vec![FlowNode::new("A", 0, 0), FlowNode::new("B", 0, 1)],
        links: vec![FlowLink::new(0, 1, 1.0, 0, 0)],
    };
    assert_eq!(g.node("B").map(|n| n.index), Some(1));
    assert!(g.node("Z").is_none());
    assert_eq!(g.name_of(0), Some("A"));
    assert_eq!(g.name_of(7), None);
}

#[test]
fn test_check_indices() {
    let mut g = FlowGraph {
        nodes: vec![FlowNode::new("A", 0, 0), FlowNode::new("B", 0, 1)],
        links: vec![FlowLink::new(0, 1, 1.0, 0, 0)],
    };
    assert!(g.check_indices().is_ok());

    g.links.push(FlowLink::new(1, 2, 1.0, 1, 1));
    assert_eq!(
        g.check_indices().unwrap_err(),
        "link 1 (1 -> 2) references a missing node (2 nodes)"
    );

    g.links.pop();
    g.nodes[1].index = 4;
    assert_eq!(
        g.check_indices().unwrap_err(),
        "node 'B' at position 1 has index 4"
    );
}
