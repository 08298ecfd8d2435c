use std::collections::{HashMap, HashSet};

use node_board::geometry::rescale;
use node_board::{
    BoardConfig, BoardEvent, Graph, InteractionEngine, NodeDeletion, NodeId, Point, PointerEvent,
    PointerTarget, PortCounts, PortGeometry, PortSide, ScrollViewport, Selection, Size,
    ViewportState,
};
use node_board::interaction::InteractionContext;

/// Port centers laid out the way a simple renderer would: inputs on the left
/// edge of the node, outputs on the right, one row per port.
struct LaidOutPorts {
    centers: HashMap<(NodeId, PortSide, usize), Point>,
}

impl LaidOutPorts {
    fn measure(graph: &Graph, viewport: &dyn ViewportState, scale: f32) -> Self {
        let mut centers = HashMap::new();
        let scroll = viewport.scroll_offset();
        for node in graph.nodes() {
            let origin = node.curr_position * scale - scroll;
            for i in 0..node.ports.inputs() {
                let offset = Point::new(0.0, 20.0 + 16.0 * i as f32) * scale;
                centers.insert((node.id, PortSide::Input, i), origin + offset);
            }
            for i in 0..node.ports.outputs() {
                let offset = Point::new(120.0, 20.0 + 16.0 * i as f32) * scale;
                centers.insert((node.id, PortSide::Output, i), origin + offset);
            }
        }
        Self { centers }
    }
}

impl PortGeometry for LaidOutPorts {
    fn port_center(&self, node: NodeId, side: PortSide, index: usize) -> Option<Point> {
        self.centers.get(&(node, side, index)).copied()
    }
}

fn counts(inputs: i64, outputs: i64) -> PortCounts {
    PortCounts::new(inputs, outputs, 4).unwrap()
}

fn viewport() -> ScrollViewport {
    ScrollViewport::new(Size::new(800.0, 600.0), Size::new(3200.0, 2400.0))
}

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

/// Run one event with port geometry measured from the current state, the way
/// a renderer re-measures every frame.
fn send(
    engine: &mut InteractionEngine,
    graph: &mut Graph,
    viewport: &mut ScrollViewport,
    event: BoardEvent,
) -> bool {
    let ports = LaidOutPorts::measure(graph, viewport, engine.scale());
    let mut ctx = InteractionContext {
        graph,
        viewport,
        ports: &ports,
    };
    engine.handle(event, &mut ctx)
}

#[test]
fn added_nodes_have_distinct_ids_and_settled_positions() {
    let mut graph = Graph::with_seed(42);
    let mut vp = viewport();
    let mut engine = InteractionEngine::default();

    for i in 0..50 {
        send(
            &mut engine,
            &mut graph,
            &mut vp,
            BoardEvent::AddNode(counts(i % 5, (i + 2) % 5)),
        );
    }

    let ids: HashSet<NodeId> = graph.nodes().iter().map(|n| n.id).collect();
    assert_eq!(ids.len(), 50);
    for node in graph.nodes() {
        assert_eq!(node.prev_position, node.curr_position);
    }
}

#[test]
fn duplicate_edge_is_rejected_and_lists_hold_id_once() {
    let mut graph = Graph::with_seed(1);
    let a = graph.add_node(counts(1, 1), Point::ZERO, Size::new(100.0, 100.0)).id;
    let b = graph.add_node(counts(1, 1), Point::ZERO, Size::new(100.0, 100.0)).id;

    let first = graph.try_add_edge(a, 0, b, 0).map(|e| e.id);
    let second = graph.try_add_edge(a, 0, b, 0).map(|e| e.id);

    let id = first.expect("first connection succeeds");
    assert!(second.is_none());
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.find_node(a).unwrap().output_edges(), &[id]);
    assert_eq!(graph.find_node(b).unwrap().input_edges(), &[id]);
}

#[test]
fn drag_matches_formula_at_non_unit_scale() {
    let mut graph = Graph::with_seed(9);
    let mut vp = viewport();
    let mut engine = InteractionEngine::default();

    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    // -100 * -0.005 = +0.5
    send(&mut engine, &mut graph, &mut vp, BoardEvent::Wheel { delta_y: -100.0 });
    let s = engine.scale();
    assert!((s - 1.5).abs() < 1e-6);

    let id = graph.nodes()[0].id;
    let start = graph.nodes()[0].curr_position;
    let press = Point::new(300.0, 200.0);
    send(
        &mut engine,
        &mut graph,
        &mut vp,
        BoardEvent::PointerDown(PointerEvent::primary(press, PointerTarget::Node(id))),
    );
    assert_eq!(graph.find_node(id).unwrap().prev_position, rescale(start, s));

    // Intermediate moves do not accumulate: only the final pointer matters.
    send(&mut engine, &mut graph, &mut vp, BoardEvent::PointerMove(Point::new(310.0, 190.0)));
    let (dx, dy) = (45.0, -30.0);
    send(
        &mut engine,
        &mut graph,
        &mut vp,
        BoardEvent::PointerMove(press + Point::new(dx, dy)),
    );

    let expected = Point::new((start.x * s + dx) / s, (start.y * s + dy) / s);
    let actual = graph.find_node(id).unwrap().curr_position;
    assert!(approx(actual, expected), "{actual:?} != {expected:?}");

    send(&mut engine, &mut graph, &mut vp, BoardEvent::PointerUp(press));
    assert_eq!(engine.selection(), Selection::Node(id));
    // Canvas scroll is untouched by a node drag.
    assert_eq!(vp.scroll_offset(), Point::ZERO);
}

#[test]
fn drag_moves_attached_edge_endpoints() {
    let mut graph = Graph::with_seed(5);
    let mut vp = viewport();
    let mut engine = InteractionEngine::default();
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    let a = graph.nodes()[0].id;
    let b = graph.nodes()[1].id;

    connect(&mut engine, &mut graph, &mut vp, a, 0, b, 0);
    let edge_id = graph.edges()[0].id;
    let before = graph.find_edge(edge_id).unwrap().clone();

    send(&mut engine, &mut graph, &mut vp, BoardEvent::Wheel { delta_y: -200.0 });
    let s = engine.scale();

    let press = Point::new(10.0, 10.0);
    send(
        &mut engine,
        &mut graph,
        &mut vp,
        BoardEvent::PointerDown(PointerEvent::primary(press, PointerTarget::Node(b))),
    );
    send(
        &mut engine,
        &mut graph,
        &mut vp,
        BoardEvent::PointerMove(press + Point::new(20.0, 40.0)),
    );
    send(&mut engine, &mut graph, &mut vp, BoardEvent::PointerUp(press));

    let after = graph.find_edge(edge_id).unwrap();
    // b is the end node: only the end point follows it.
    assert!(approx(after.curr_start, before.curr_start));
    let expected_end = (before.curr_end * s + Point::new(20.0, 40.0)) / s;
    assert!(approx(after.curr_end, expected_end));
}

/// Press on `node`, move by `delta` and release.
fn drag(
    engine: &mut InteractionEngine,
    graph: &mut Graph,
    vp: &mut ScrollViewport,
    node: NodeId,
    delta: Point,
) {
    let press = Point::new(10.0, 20.0);
    send(
        engine,
        graph,
        vp,
        BoardEvent::PointerDown(PointerEvent::primary(press, PointerTarget::Node(node))),
    );
    send(engine, graph, vp, BoardEvent::PointerMove(press + delta));
    send(engine, graph, vp, BoardEvent::PointerUp(press + delta));
}

#[test]
fn dragging_start_node_moves_only_edge_start() {
    let mut graph = Graph::with_seed(6);
    let mut vp = viewport();
    let mut engine = InteractionEngine::default();
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    let a = graph.nodes()[0].id;
    let b = graph.nodes()[1].id;

    connect(&mut engine, &mut graph, &mut vp, a, 0, b, 0);
    let edge_id = graph.edges()[0].id;
    let before = graph.find_edge(edge_id).unwrap().clone();

    send(&mut engine, &mut graph, &mut vp, BoardEvent::Wheel { delta_y: -100.0 });
    let s = engine.scale();
    assert!((s - 1.5).abs() < 1e-6);

    let delta = Point::new(30.0, -15.0);
    drag(&mut engine, &mut graph, &mut vp, a, delta);

    let after = graph.find_edge(edge_id).unwrap();
    let expected_start = (before.curr_start * s + delta) / s;
    assert!(approx(after.curr_start, expected_start), "{:?}", after.curr_start);
    assert!(approx(after.prev_start, before.curr_start * s));
    assert!(approx(after.curr_end, before.curr_end));
}

#[test]
fn dragging_self_loop_node_moves_both_endpoints() {
    let mut graph = Graph::with_seed(9);
    let mut vp = viewport();
    let mut engine = InteractionEngine::default();
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    let a = graph.nodes()[0].id;

    connect(&mut engine, &mut graph, &mut vp, a, 0, a, 0);
    assert_eq!(graph.edge_count(), 1);
    let edge_id = graph.edges()[0].id;
    let before = graph.find_edge(edge_id).unwrap().clone();

    send(&mut engine, &mut graph, &mut vp, BoardEvent::Wheel { delta_y: -100.0 });
    let s = engine.scale();

    let delta = Point::new(-12.0, 24.0);
    drag(&mut engine, &mut graph, &mut vp, a, delta);

    let after = graph.find_edge(edge_id).unwrap();
    assert!(approx(after.curr_start, (before.curr_start * s + delta) / s));
    assert!(approx(after.curr_end, (before.curr_end * s + delta) / s));
}

#[test]
fn nan_wheel_leaves_scale_in_range() {
    let mut engine = InteractionEngine::default();
    engine.wheel(-100.0);
    engine.wheel(f32::NAN);
    let s = engine.scale();
    assert!((1.0..=2.0).contains(&s), "scale = {}", s);
}

#[test]
fn wheel_clamps_to_bounds() {
    let mut engine = InteractionEngine::default();
    for _ in 0..10 {
        engine.wheel(150.0);
    }
    assert_eq!(engine.scale(), 1.0);
    for _ in 0..10 {
        engine.wheel(-150.0);
    }
    assert_eq!(engine.scale(), 2.0);
}

#[test]
fn releasing_without_hover_discards_pending_edge() {
    let mut graph = Graph::with_seed(2);
    let mut vp = viewport();
    let mut engine = InteractionEngine::default();
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(0, 1)));
    let a = graph.nodes()[0].id;

    send(
        &mut engine,
        &mut graph,
        &mut vp,
        BoardEvent::PointerDown(PointerEvent::primary(
            Point::new(50.0, 50.0),
            PointerTarget::OutputPort { node: a, index: 0 },
        )),
    );
    assert!(engine.pending_edge().is_some());

    send(&mut engine, &mut graph, &mut vp, BoardEvent::PointerMove(Point::new(400.0, 300.0)));
    let pending = engine.pending_edge().unwrap();
    assert_eq!(pending.curr_end, Point::new(400.0, 300.0));
    assert_eq!(pending.prev_start, pending.curr_start);

    send(&mut engine, &mut graph, &mut vp, BoardEvent::PointerUp(Point::new(400.0, 300.0)));
    assert!(engine.pending_edge().is_none());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.find_node(a).unwrap().output_edges().is_empty());
}

#[test]
fn removing_edge_updates_both_nodes() {
    let mut graph = Graph::with_seed(3);
    let mut vp = viewport();
    let mut engine = InteractionEngine::default();
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    let a = graph.nodes()[0].id;
    let b = graph.nodes()[1].id;
    connect(&mut engine, &mut graph, &mut vp, a, 0, b, 0);
    let id = graph.edges()[0].id;

    send(
        &mut engine,
        &mut graph,
        &mut vp,
        BoardEvent::PointerDown(PointerEvent::primary(Point::ZERO, PointerTarget::Edge(id))),
    );
    assert_eq!(engine.selection(), Selection::Edge(id));

    assert!(send(&mut engine, &mut graph, &mut vp, BoardEvent::DeleteEdge(id)));
    assert_eq!(engine.selection(), Selection::None);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.find_node(a).unwrap().output_edges().is_empty());
    assert!(graph.find_node(b).unwrap().input_edges().is_empty());

    // Gone already: no-op.
    assert!(graph.remove_edge(id).is_none());
    assert!(!send(&mut engine, &mut graph, &mut vp, BoardEvent::DeleteEdge(id)));
}

#[test]
fn end_to_end_connect_two_nodes() {
    let mut graph = Graph::with_seed(2024);
    let mut vp = viewport();
    vp.scroll_by(30.0, 60.0);
    let mut engine = InteractionEngine::default();

    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(2, 1)));
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 2)));
    let a = graph.nodes()[0].id;
    let b = graph.nodes()[1].id;

    let ports = LaidOutPorts::measure(&graph, &vp, engine.scale());
    let out_center = ports.port_center(a, PortSide::Output, 0).unwrap();
    let in_center = ports.port_center(b, PortSide::Input, 0).unwrap();

    send(
        &mut engine,
        &mut graph,
        &mut vp,
        BoardEvent::PointerDown(PointerEvent::primary(
            out_center,
            PointerTarget::OutputPort { node: a, index: 0 },
        )),
    );
    send(&mut engine, &mut graph, &mut vp, BoardEvent::PointerMove(in_center));
    send(&mut engine, &mut graph, &mut vp, BoardEvent::InputEnter { node: b, index: 0 });
    assert_eq!(engine.hover_target().unwrap().node, b);
    send(&mut engine, &mut graph, &mut vp, BoardEvent::PointerUp(in_center));

    assert!(engine.pending_edge().is_none());
    assert_eq!(graph.edge_count(), 1);
    let edge = &graph.edges()[0];
    assert_eq!(edge.start_node(), a);
    assert_eq!(edge.end_node(), b);
    assert_eq!(edge.id.output_index, 0);
    assert_eq!(edge.id.input_index, 0);
    assert_eq!(graph.find_node(a).unwrap().output_edges(), &[edge.id]);
    assert_eq!(graph.find_node(b).unwrap().input_edges(), &[edge.id]);
    assert!(graph.find_node(a).unwrap().input_edges().is_empty());

    // Endpoints sit on the port centers in canvas space.
    let scroll = vp.scroll_offset();
    assert!(approx(edge.curr_start, out_center + scroll));
    assert!(approx(edge.curr_end, in_center + scroll));
    assert_eq!(edge.prev_end, edge.curr_end);
}

#[test]
fn connecting_same_ports_twice_keeps_one_edge() {
    let mut graph = Graph::with_seed(8);
    let mut vp = viewport();
    let mut engine = InteractionEngine::default();
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
    let a = graph.nodes()[0].id;
    let b = graph.nodes()[1].id;

    connect(&mut engine, &mut graph, &mut vp, a, 0, b, 0);
    connect(&mut engine, &mut graph, &mut vp, a, 0, b, 0);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.find_node(a).unwrap().output_edges().len(), 1);
    assert_eq!(graph.find_node(b).unwrap().input_edges().len(), 1);
    assert!(engine.pending_edge().is_none());
}

#[test]
fn deleting_selected_node_respects_configured_policy() {
    for (policy, remaining_edges) in [(NodeDeletion::KeepEdges, 1), (NodeDeletion::Cascade, 0)] {
        let mut config = BoardConfig::default();
        config.graph.node_deletion = policy;
        let mut engine = InteractionEngine::new(&config);
        let mut graph = Graph::with_seed(4);
        let mut vp = viewport();

        send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
        send(&mut engine, &mut graph, &mut vp, BoardEvent::AddNode(counts(1, 1)));
        let a = graph.nodes()[0].id;
        let b = graph.nodes()[1].id;
        connect(&mut engine, &mut graph, &mut vp, a, 0, b, 0);

        send(
            &mut engine,
            &mut graph,
            &mut vp,
            BoardEvent::PointerDown(PointerEvent::primary(Point::ZERO, PointerTarget::Node(a))),
        );
        send(&mut engine, &mut graph, &mut vp, BoardEvent::PointerUp(Point::ZERO));
        send(&mut engine, &mut graph, &mut vp, BoardEvent::DeleteSelectedNode);

        assert!(graph.find_node(a).is_none());
        assert_eq!(engine.selection(), Selection::None);
        assert_eq!(graph.edge_count(), remaining_edges, "{policy:?}");
        assert_eq!(
            graph.find_node(b).unwrap().input_edges().len(),
            remaining_edges,
            "{policy:?}"
        );
    }
}

fn connect(
    engine: &mut InteractionEngine,
    graph: &mut Graph,
    vp: &mut ScrollViewport,
    from: NodeId,
    output: usize,
    to: NodeId,
    input: usize,
) {
    let ports = LaidOutPorts::measure(graph, vp, engine.scale());
    let target = ports.port_center(to, PortSide::Input, input).unwrap();
    send(
        engine,
        graph,
        vp,
        BoardEvent::PointerDown(PointerEvent::primary(
            ports.port_center(from, PortSide::Output, output).unwrap(),
            PointerTarget::OutputPort {
                node: from,
                index: output,
            },
        )),
    );
    send(engine, graph, vp, BoardEvent::PointerMove(target));
    send(engine, graph, vp, BoardEvent::InputEnter { node: to, index: input });
    send(engine, graph, vp, BoardEvent::PointerUp(target));
    send(engine, graph, vp, BoardEvent::InputLeave { node: to, index: input });
}
