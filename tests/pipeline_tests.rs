mod common;

use std::collections::HashMap;

use common::{canonical_graph, canonical_listing};
use ttt_atlas::{
    Atlas, AtlasConfig, GameGraph, GraphShape, Outcome, evaluate,
    layout::compute_layout,
    render::{EdgeClass, count_edge_classes},
    render_document,
};

#[test]
fn generated_listing_has_every_canonical_position() {
    let graph = canonical_graph();
    assert_eq!(graph.len(), 765);

    let mut per_ply = [0usize; 10];
    for vertex in graph.vertices() {
        per_ply[vertex.ply()] += 1;
    }
    assert_eq!(per_ply, [1, 3, 12, 38, 108, 174, 204, 153, 57, 15]);
}

#[test]
fn generated_listing_loads_with_canonical_counts() {
    let graph = GameGraph::parse(&canonical_listing(), &GraphShape::canonical()).unwrap();
    assert_eq!(graph.len(), 765);
    assert_eq!(graph.edge_count(), 2096);
}

#[test]
fn canonical_counts_reject_a_truncated_listing() {
    let listing = canonical_listing();
    let truncated: String = listing
        .lines()
        .take(765 + 2000)
        .map(|line| format!("{line}\n"))
        .collect();
    let err = GameGraph::parse(&truncated, &GraphShape::canonical()).unwrap_err();
    assert!(matches!(
        err,
        ttt_atlas::Error::MissingEdgeLines {
            expected: 2096,
            got: 2000
        }
    ));
}

#[test]
fn every_move_goes_one_ply_deeper() {
    let graph = canonical_graph();
    assert_eq!(graph.edge_count(), 2096);
    for (u, w) in graph.edges() {
        assert!(u < w);
        assert_eq!(graph.ply(u) + 1, graph.ply(w));
    }
}

#[test]
fn perfect_play_is_a_draw() {
    let graph = canonical_graph();
    let evaluation = evaluate(&graph);
    assert_eq!(evaluation.root_outcome(), Some(Outcome::Draw));

    // every opening keeps the draw
    for &child in graph.children(0) {
        assert_eq!(evaluation.outcome(child), Outcome::Draw);
    }
}

#[test]
fn won_positions_score_for_the_winner() {
    let graph = canonical_graph();
    let evaluation = evaluate(&graph);
    for v in 0..graph.len() {
        let state = &graph.vertex(v).state;
        if let Some(winner) = state.winner() {
            let expected = match winner {
                ttt_atlas::tictactoe::Player::X => Outcome::XWins,
                ttt_atlas::tictactoe::Player::O => Outcome::OWins,
            };
            assert_eq!(evaluation.outcome(v), expected, "{}", state.label());
        }
    }
}

#[test]
fn centre_opening_reply_values() {
    let graph = canonical_graph();
    let evaluation = evaluate(&graph);
    let by_label: HashMap<String, Outcome> = graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(v, vertex)| (vertex.label(), evaluation.outcome(v)))
        .collect();

    // O answers a centre opening on an edge and loses
    let edge_reply = ttt_atlas::tictactoe::BoardState::from_label("-O--X----")
        .unwrap()
        .canonical()
        .label();
    assert_eq!(by_label[&edge_reply], Outcome::XWins);

    let corner_reply = ttt_atlas::tictactoe::BoardState::from_label("O---X----")
        .unwrap()
        .canonical()
        .label();
    assert_eq!(by_label[&corner_reply], Outcome::Draw);
}

#[test]
fn every_board_sits_inside_its_band() {
    let graph = canonical_graph();
    let evaluation = evaluate(&graph);
    let config = AtlasConfig::default();
    let layout = compute_layout(&graph, &evaluation, &config);

    for v in 0..graph.len() {
        let placement = layout.placement(v);
        let (start, end) = layout.band_extent(evaluation.outcome(v));
        assert!(start < placement.x && placement.x < end);
        assert!(placement.size > 0.0 && placement.size <= config.max_node_size_mm);
    }
}

#[test]
fn edge_classes_partition_all_moves() {
    let graph = canonical_graph();
    let evaluation = evaluate(&graph);
    let (core, informational) = count_edge_classes(&graph, &evaluation);
    assert_eq!(core + informational, graph.edge_count());

    let recount = graph
        .edges()
        .filter(|&(u, w)| {
            EdgeClass::classify(evaluation.outcome(u), evaluation.outcome(w)) == EdgeClass::Core
        })
        .count();
    assert_eq!(recount, core);
}

#[test]
fn seeded_documents_are_byte_identical() {
    let listing = canonical_listing();
    let config = AtlasConfig::default().with_seed(2024);
    let first = render_document(&listing, &config).unwrap();
    let second = render_document(&listing, &config).unwrap();
    assert_eq!(first, second);

    assert_eq!(first.matches(r"\draw [black,fill=").count(), 765 * 9);
}

#[test]
fn different_seeds_only_move_informational_edges() {
    let listing = canonical_listing();
    let a = render_document(&listing, &AtlasConfig::default().with_seed(1)).unwrap();
    let b = render_document(&listing, &AtlasConfig::default().with_seed(2)).unwrap();
    assert_ne!(a, b);

    let fixed = |doc: &str| -> Vec<String> {
        doc.lines()
            .filter(|line| !line.contains("rounded corners"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(fixed(&a), fixed(&b));
}

#[test]
fn summary_matches_graph() {
    let atlas = Atlas::build(&canonical_listing(), &AtlasConfig::default()).unwrap();
    let summary = atlas.summary();
    assert_eq!(summary.vertices, 765);
    assert_eq!(summary.edges, atlas.graph.edge_count());
    assert_eq!(summary.plies.len(), 10);
    let total: usize = summary
        .plies
        .iter()
        .map(|p| p.o_wins + p.draws + p.x_wins)
        .sum();
    assert_eq!(total, 765);
}
