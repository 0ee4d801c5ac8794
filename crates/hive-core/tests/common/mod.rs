//! Shared helpers for the integration tests.
#![allow(dead_code)]

use hive_core::{Board, HexCoord, Piece, DIRECTIONS};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test harness, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Lay pieces out in rings around the centre.
///
/// `"wB bb wh"` puts a white queen at the centre, a black beetle one step
/// out and a white grasshopper two steps out. Each token is repeated along
/// every `step`-th direction, so `step = 6` draws a single ray east,
/// `step = 3` a line through the centre, `step = 2` a three-armed star and
/// `step = 1` full rings. `-` leaves that distance empty.
pub fn add_tokens(board: &mut Board, layout: &str, step: usize) {
    for (distance, token) in layout.split_whitespace().enumerate() {
        if token == "-" {
            continue;
        }
        let piece = Piece::from_code(token).unwrap_or_else(|| panic!("bad token {:?}", token));
        for direction in DIRECTIONS.iter().step_by(step) {
            board.insert(*direction * distance as i32, piece);
        }
    }
}

/// A fresh board laid out with [`add_tokens`]
pub fn layout(layout: &str, step: usize) -> Board {
    init_tracing();
    let mut board = Board::new();
    add_tokens(&mut board, layout, step);
    board
}

/// Straight ray east: the default layout
pub fn ray(tokens: &str) -> Board {
    layout(tokens, 6)
}

pub fn east(distance: i32) -> HexCoord {
    DIRECTIONS[0] * distance
}
