//! Backward-induction evaluation of the state graph
//!
//! Vertices are sorted by ascending ply and every stored edge points to a
//! higher index, so one reverse sweep sees each child before its parents.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    graph::GameGraph,
    tictactoe::{BoardState, Player},
};

/// Game value under optimal play, ordered from O's best to X's best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Outcome {
    OWins = -1,
    Draw = 0,
    XWins = 1,
}

impl Outcome {
    /// Left-to-right band order
    pub const ALL: [Outcome; 3] = [Outcome::OWins, Outcome::Draw, Outcome::XWins];

    pub fn value(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::OWins => "O wins",
            Outcome::Draw => "draw",
            Outcome::XWins => "X wins",
        };
        f.write_str(name)
    }
}

/// Score of a full board: X wins if X completed a line, otherwise draw.
///
/// O lines are not checked; a legal game never fills the board after O
/// has already won.
pub fn score_full_board(state: &BoardState) -> Outcome {
    if state.has_won(Player::X) {
        Outcome::XWins
    } else {
        Outcome::Draw
    }
}

/// Outcome per vertex, indexed like the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    outcomes: Vec<Outcome>,
}

impl Evaluation {
    pub fn outcome(&self, v: usize) -> Outcome {
        self.outcomes[v]
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcome of the first (lowest ply) vertex
    pub fn root_outcome(&self) -> Option<Outcome> {
        self.outcomes.first().copied()
    }

    /// Per-ply counts of `[O wins, draw, X wins]`, for plies 0 through 9
    pub fn counts_by_ply(&self, graph: &GameGraph) -> [[usize; 3]; 10] {
        let mut counts = [[0usize; 3]; 10];
        for (v, &outcome) in self.outcomes.iter().enumerate() {
            let ply = graph.ply(v).min(9);
            counts[ply][band_index(outcome)] += 1;
        }
        counts
    }
}

/// Position of an outcome in `Outcome::ALL`
pub fn band_index(outcome: Outcome) -> usize {
    (outcome.value() + 1) as usize
}

/// Evaluate every vertex by backward induction.
///
/// Full boards are scored by [`score_full_board`]. With X to move (even
/// ply) the value is the maximum of `OWins` and the children's values; with
/// O to move it is the minimum of `XWins` and the children's values. A
/// non-terminal vertex without children therefore scores as a loss for the
/// side to move.
pub fn evaluate(graph: &GameGraph) -> Evaluation {
    // placeholder until the sweep reaches each vertex
    let mut outcomes = vec![Outcome::Draw; graph.len()];

    for v in (0..graph.len()).rev() {
        let vertex = graph.vertex(v);
        let ply = vertex.ply();
        let children = graph.children(v).iter().map(|&w| outcomes[w]);
        outcomes[v] = if ply == 9 {
            score_full_board(&vertex.state)
        } else if ply % 2 == 0 {
            children.fold(Outcome::OWins, Outcome::max)
        } else {
            children.fold(Outcome::XWins, Outcome::min)
        };
    }

    let evaluation = Evaluation { outcomes };
    if let Some(root) = evaluation.root_outcome() {
        info!(vertices = evaluation.len(), %root, "evaluated game values");
    }
    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphShape;

    fn load(input: &str) -> GameGraph {
        GameGraph::parse(input, &GraphShape::default()).unwrap()
    }

    #[test]
    fn outcome_order_supports_minimax() {
        assert!(Outcome::OWins < Outcome::Draw);
        assert!(Outcome::Draw < Outcome::XWins);
        assert_eq!(Outcome::XWins.value(), 1);
        assert_eq!(Outcome::OWins.value(), -1);
    }

    #[test]
    fn full_board_scores_x_line_as_win() {
        let state = BoardState::from_label("XXXOOXOXO").unwrap();
        assert_eq!(score_full_board(&state), Outcome::XWins);
    }

    #[test]
    fn full_board_without_x_line_is_draw() {
        let state = BoardState::from_label("XOXXOOOXX").unwrap();
        assert_eq!(score_full_board(&state), Outcome::Draw);
    }

    #[test]
    fn full_board_with_only_o_line_still_scores_draw() {
        // OOO / XXO / XOX
        let state = BoardState::from_label("OOOXXOXOX").unwrap();
        assert!(state.has_won(Player::O));
        assert_eq!(score_full_board(&state), Outcome::Draw);
    }

    #[test]
    fn lone_empty_board_scores_as_o_win() {
        // ply 0, X to move, no children: max over the OWins seed alone
        let graph = load("---------\n");
        let evaluation = evaluate(&graph);
        assert_eq!(evaluation.outcome(0), Outcome::OWins);
    }

    #[test]
    fn childless_odd_ply_scores_as_x_win() {
        // X completed a line before the board filled; O has no reply
        let graph = load("XXXOO----\n");
        assert_eq!(evaluate(&graph).outcome(0), Outcome::XWins);
    }

    #[test]
    fn x_win_propagates_up_a_chain() {
        // ply 7 -> ply 8 -> full board with X across the top row;
        // labels only need consistent plies, not legal continuations
        let input = "\
XXOOX-XO-
XXOOX-XOO
XXXOXOXOO
(1,2)
(2,3)
";
        let graph = load(input);
        let evaluation = evaluate(&graph);
        assert_eq!(graph.ply(0), 7);
        assert_eq!(evaluation.outcome(2), Outcome::XWins);
        assert_eq!(evaluation.outcome(1), Outcome::XWins);
        assert_eq!(evaluation.outcome(0), Outcome::XWins);
    }

    const FULL_DRAW: &str = "XOXXOOOXX";
    const FULL_X_WIN: &str = "XXXOXOXOO";

    #[test]
    fn maximizer_takes_best_child() {
        let input = format!("XOXXOOOX-\n{FULL_DRAW}\n{FULL_X_WIN}\n(1,2)\n(1,3)\n");
        let graph = load(&input);
        let evaluation = evaluate(&graph);
        assert_eq!(evaluation.outcome(1), Outcome::Draw);
        assert_eq!(evaluation.outcome(2), Outcome::XWins);
        assert_eq!(evaluation.outcome(0), Outcome::XWins);
    }

    #[test]
    fn minimizer_takes_worst_child() {
        let input = format!(
            "XOXXO-OX-\nXOXXOOOX-\nXOXXO-OXO\n{FULL_DRAW}\n{FULL_X_WIN}\n(1,2)\n(1,3)\n(2,4)\n(3,5)\n"
        );
        let graph = load(&input);
        let evaluation = evaluate(&graph);
        assert_eq!(evaluation.outcome(1), Outcome::Draw);
        assert_eq!(evaluation.outcome(2), Outcome::XWins);
        assert_eq!(evaluation.outcome(0), Outcome::Draw);
    }

    #[test]
    fn o_win_before_full_board_is_terminal_loss_for_x() {
        // XXO / OOX / -X- with O to move: O completes 2-4-6 or the game draws
        let input = "\
XXOOOX-X-
XXOOOXOX-
XXOOOX-XO
XXOOOXXXO
(1,2)
(1,3)
(3,4)
";
        let graph = load(input);
        let evaluation = evaluate(&graph);
        assert_eq!(evaluation.outcome(1), Outcome::OWins);
        assert_eq!(evaluation.outcome(3), Outcome::Draw);
        assert_eq!(evaluation.outcome(2), Outcome::Draw);
        assert_eq!(evaluation.outcome(0), Outcome::OWins);
    }

    #[test]
    fn counts_by_ply_tallies_each_band() {
        let graph = load("---------\nXXXOO----\n");
        let evaluation = evaluate(&graph);
        let counts = evaluation.counts_by_ply(&graph);
        assert_eq!(counts[0], [1, 0, 0]);
        assert_eq!(counts[5], [0, 0, 1]);
        assert_eq!(band_index(Outcome::Draw), 1);
    }
}
