//! Seeded generation of solvable puzzle instances
//!
//! A solved board is laid out first: every internal edge gets a random label
//! and polarity shared (with opposite polarity) by the two pieces meeting
//! there, and every border edge gets a label used nowhere else. The pieces are
//! then shuffled and randomly rotated.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::connector::{Connector, Polarity};
use crate::spatial::piece::{Piece, PieceId};

/// Generate the pieces of a solvable `width`×`height` puzzle
///
/// Internal edges draw from `label_count` labels; fewer labels mean more
/// coincidental matches and more solutions. Ids are assigned in output
/// order. The same seed always yields the same pieces.
///
/// # Errors
///
/// Returns an error if a dimension is zero or too large, or if
/// `label_count` is zero
pub fn generate(width: usize, height: usize, label_count: usize, seed: u64) -> Result<Vec<Piece>> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 || value > MAX_BOARD_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must be between 1 and {MAX_BOARD_DIMENSION}"),
            ));
        }
    }
    if label_count == 0 {
        return Err(invalid_parameter(
            "label_count",
            &label_count,
            &"at least one label is needed",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut border_labels = 0_usize;
    let mut border = |rng: &mut StdRng| {
        border_labels += 1;
        Connector::new(&format!("edge{border_labels}"), random_polarity(rng))
    };
    let internal = |rng: &mut StdRng| {
        let label = format!("l{}", rng.random_range(0..label_count));
        Connector::new(&label, random_polarity(rng))
    };

    let mut solved = Vec::with_capacity(width * height);
    let mut downs_above: Vec<Connector> = Vec::new();
    for row in 0..height {
        let mut downs = Vec::with_capacity(width);
        let mut right_of_previous: Option<Connector> = None;
        for col in 0..width {
            let left = match right_of_previous.take() {
                Some(neighbour) => neighbour.counterpart(),
                None => border(&mut rng),
            };
            let up = match downs_above.get(col) {
                Some(neighbour) => neighbour.counterpart(),
                None => border(&mut rng),
            };
            let right = if col + 1 < width {
                internal(&mut rng)
            } else {
                border(&mut rng)
            };
            let down = if row + 1 < height {
                internal(&mut rng)
            } else {
                border(&mut rng)
            };

            right_of_previous = Some(right.clone());
            downs.push(down.clone());
            solved.push((left, up, right, down));
        }
        downs_above = downs;
    }

    solved.shuffle(&mut rng);
    let pieces = solved
        .into_iter()
        .enumerate()
        .map(|(id, (left, up, right, down))| {
            Piece::from_sides(PieceId(id), left, up, right, down)
                .rotated_clockwise(rng.random_range(0..4))
        })
        .collect();
    Ok(pieces)
}

fn random_polarity(rng: &mut StdRng) -> Polarity {
    if rng.random_bool(0.5) {
        Polarity::Head
    } else {
        Polarity::Tail
    }
}
