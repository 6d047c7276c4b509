//! TikZ output for an evaluated, laid-out graph
//!
//! The document draws, in order: the three outcome bands, edges whose
//! endpoints differ in value, edges that keep the value, then one 3x3 grid
//! per board. All coordinates are millimetres.

use std::fmt::{self, Write};

use rand::Rng;
use tracing::info;

use crate::{
    Result,
    config::AtlasConfig,
    graph::GameGraph,
    layout::Layout,
    minimax::{Evaluation, Outcome},
    tictactoe::Cell,
};

const PREAMBLE: &str = r"\documentclass{article}

\usepackage{tikz}

\newcommand{\xcol}{red}
\newcommand{\ocol}{blue}
\newcommand{\ecol}{white}

\usepackage[a1paper,margin=1cm]{geometry}

\pagestyle{empty}

\begin{document}
\begin{tikzpicture}
";

const FOOTER: &str = r"\end{tikzpicture}
\end{document}
";

/// The fixed palette of TikZ colour keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
    Blue,
    Cyan,
    Pink,
    LightGray,
    Black,
}

impl Color {
    pub fn keyword(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Pink => "pink",
            Color::LightGray => "lightgray",
            Color::Black => "black",
        }
    }

    /// Fill for a board cell
    pub fn for_cell(cell: Cell) -> Color {
        match cell {
            Cell::Empty => Color::White,
            Cell::X => Color::Red,
            Cell::O => Color::Blue,
        }
    }

    /// Background of an outcome band
    pub fn for_band(outcome: Outcome) -> Color {
        match outcome {
            Outcome::OWins => Color::Cyan,
            Outcome::Draw => Color::White,
            Outcome::XWins => Color::Pink,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Whether a move keeps the game value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeClass {
    /// Parent and child share an outcome
    Core,
    /// The move changes the outcome
    Informational,
}

impl EdgeClass {
    pub fn classify(parent: Outcome, child: Outcome) -> EdgeClass {
        if parent == child {
            EdgeClass::Core
        } else {
            EdgeClass::Informational
        }
    }
}

/// `(core, informational)` edge counts
pub fn count_edge_classes(graph: &GameGraph, evaluation: &Evaluation) -> (usize, usize) {
    graph.edges().fold((0, 0), |(core, info), (u, w)| {
        match EdgeClass::classify(evaluation.outcome(u), evaluation.outcome(w)) {
            EdgeClass::Core => (core + 1, info),
            EdgeClass::Informational => (core, info + 1),
        }
    })
}

fn point(x: f64, y: f64) -> String {
    format!("({x:.2}mm,{y:.2}mm)")
}

/// Writes the drawing commands for one atlas
pub struct TikzRenderer<'a> {
    graph: &'a GameGraph,
    evaluation: &'a Evaluation,
    layout: &'a Layout,
    config: &'a AtlasConfig,
}

impl<'a> TikzRenderer<'a> {
    pub fn new(
        graph: &'a GameGraph,
        evaluation: &'a Evaluation,
        layout: &'a Layout,
        config: &'a AtlasConfig,
    ) -> Self {
        Self {
            graph,
            evaluation,
            layout,
            config,
        }
    }

    /// Render the whole document.
    ///
    /// `rng` only drives the mid-height of informational edges, so a seeded
    /// generator gives byte-identical output.
    pub fn render<R: Rng>(&self, rng: &mut R) -> Result<String> {
        let mut out = String::from(PREAMBLE);
        self.write_bands(&mut out)?;
        let informational = self.write_informational_edges(&mut out, rng)?;
        let core = self.write_core_edges(&mut out)?;
        self.write_boards(&mut out)?;
        out.push_str(FOOTER);

        info!(
            core,
            informational,
            boards = self.graph.len(),
            bytes = out.len(),
            "rendered atlas"
        );
        Ok(out)
    }

    fn write_bands(&self, out: &mut String) -> fmt::Result {
        let page = self.config.page;
        for (outcome, (start, _)) in Outcome::ALL.into_iter().zip(self.layout.band_extents()) {
            let color = Color::for_band(outcome);
            writeln!(
                out,
                r"\draw [{color},fill={color}] {} rectangle {};",
                point(start, 0.0),
                point(page.width_mm, page.height_mm)
            )?;
        }
        Ok(())
    }

    /// Routed paths fanned across the parent's bottom edge
    fn write_informational_edges<R: Rng>(
        &self,
        out: &mut String,
        rng: &mut R,
    ) -> Result<usize> {
        let jitter = self.config.jitter_mm;
        let mut written = 0;

        for u in 0..self.graph.len() {
            let parent_outcome = self.evaluation.outcome(u);
            let targets: Vec<usize> = self
                .graph
                .children(u)
                .iter()
                .copied()
                .filter(|&w| {
                    EdgeClass::classify(parent_outcome, self.evaluation.outcome(w))
                        == EdgeClass::Informational
                })
                .collect();
            if targets.is_empty() {
                continue;
            }

            let from = self.layout.placement(u);
            let step = from.size / (targets.len() + 1) as f64;
            let mut fan_x = from.left();
            for w in targets {
                let to = self.layout.placement(w);
                let (lo, hi) = {
                    let a = from.y - jitter;
                    let b = to.y + jitter;
                    if a <= b { (a, b) } else { (b, a) }
                };
                let mid_y = if hi > lo { rng.random_range(lo..=hi) } else { lo };

                let path = [
                    point(from.x, from.bottom()),
                    point(fan_x, mid_y),
                    point(to.x, mid_y),
                    point(to.x, to.top()),
                ]
                .join("--");
                writeln!(
                    out,
                    r"\draw [{}, rounded corners] {path};",
                    Color::LightGray
                )?;
                fan_x += step;
                written += 1;
            }
        }

        Ok(written)
    }

    /// Straight lines from parent bottom to child top
    fn write_core_edges(&self, out: &mut String) -> Result<usize> {
        let mut written = 0;
        for (u, w) in self.graph.edges() {
            let class = EdgeClass::classify(self.evaluation.outcome(u), self.evaluation.outcome(w));
            if class != EdgeClass::Core {
                continue;
            }
            let from = self.layout.placement(u);
            let to = self.layout.placement(w);
            writeln!(
                out,
                r"\draw [{}] {}--{};",
                Color::Black,
                point(from.x, from.bottom()),
                point(to.x, to.top())
            )?;
            written += 1;
        }
        Ok(written)
    }

    /// One line of nine filled squares per board, first label row on top
    fn write_boards(&self, out: &mut String) -> fmt::Result {
        for v in 0..self.graph.len() {
            let placement = self.layout.placement(v);
            let cell = placement.size / 3.0;
            let left = placement.left();
            let bottom = placement.bottom();
            for (i, &symbol) in self.graph.vertex(v).state.cells.iter().enumerate() {
                let x0 = left + (i % 3) as f64 * cell;
                let y0 = bottom + (2 - i / 3) as f64 * cell;
                write!(
                    out,
                    r"\draw [{},fill={}] {} rectangle {};",
                    Color::Black,
                    Color::for_cell(symbol),
                    point(x0, y0),
                    point(x0 + cell, y0 + cell)
                )?;
            }
            out.push('\n');
        }
        Ok(())
    }
}
