//! Cell-by-cell agreement between a reference grid and a candidate grid.

use mandelbench_core::ResultGrid;
use serde::Serialize;
use std::fmt;

/// How a single candidate cell relates to the reference cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellAgreement {
    Equal,
    /// Candidate is exactly one below an escaping reference cell.
    OneBelow,
    Mismatch,
}

/// Classify one cell. `max_iterations` identifies bounded reference cells,
/// which must match exactly.
pub fn classify(reference: u32, candidate: u32, max_iterations: u32) -> CellAgreement {
    if reference == candidate {
        CellAgreement::Equal
    } else if reference < max_iterations && candidate + 1 == reference {
        CellAgreement::OneBelow
    } else {
        CellAgreement::Mismatch
    }
}

/// Grids with different shapes or caps cannot be compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub reference: (usize, usize, u32),
    pub candidate: (usize, usize, u32),
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rh, rw, rm) = self.reference;
        let (ch, cw, cm) = self.candidate;
        write!(
            f,
            "cannot compare {rh}x{rw} grid (cap {rm}) with {ch}x{cw} grid (cap {cm})"
        )
    }
}

impl std::error::Error for ShapeMismatch {}

/// Summary of a grid comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GridComparison {
    pub cells: usize,
    pub equal: usize,
    pub one_below: usize,
    pub mismatched: usize,
    /// Reference cells at the cap that the candidate also reports at the cap.
    pub bounded_agreeing: usize,
    pub bounded_total: usize,
}

impl GridComparison {
    /// Every cell is equal or one below an escaping reference cell.
    pub fn within_tolerance(&self) -> bool {
        self.mismatched == 0
    }

    /// Every cell matches exactly.
    pub fn identical(&self) -> bool {
        self.equal == self.cells
    }

    /// Both grids agree on set membership for every bounded reference cell.
    pub fn membership_agrees(&self) -> bool {
        self.bounded_agreeing == self.bounded_total
    }
}

/// Compare `candidate` against `reference` cell by cell.
pub fn compare(
    reference: &ResultGrid,
    candidate: &ResultGrid,
) -> Result<GridComparison, ShapeMismatch> {
    let max = reference.max_iterations();
    if reference.shape() != candidate.shape() || max != candidate.max_iterations() {
        let (rh, rw) = reference.shape();
        let (ch, cw) = candidate.shape();
        return Err(ShapeMismatch {
            reference: (rh, rw, max),
            candidate: (ch, cw, candidate.max_iterations()),
        });
    }

    let mut summary = GridComparison {
        cells: reference.as_slice().len(),
        ..Default::default()
    };

    for (&r, &c) in reference.as_slice().iter().zip(candidate.as_slice()) {
        match classify(r, c, max) {
            CellAgreement::Equal => summary.equal += 1,
            CellAgreement::OneBelow => summary.one_below += 1,
            CellAgreement::Mismatch => summary.mismatched += 1,
        }
        if r == max {
            summary.bounded_total += 1;
            if c == max {
                summary.bounded_agreeing += 1;
            }
        }
    }

    Ok(summary)
}
