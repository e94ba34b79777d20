use std::collections::BTreeSet;

use tesseract_chess::board::{Board, PieceId};
use tesseract_chess::coord::{Coord, Dims};
use tesseract_chess::pieces::{Piece, PieceKind};
use tesseract_chess::player::{default_players, Player};
use tesseract_chess::rules::movegen::legal_moves;

fn spawn(board: &mut Board, kind: PieceKind, player: &Player, at: Coord) -> PieceId {
    board.spawn(Piece::new(kind, player), at).unwrap()
}

#[test]
fn rook_slides_along_all_four_axes() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let rook = spawn(&mut board, PieceKind::Rook, &players[0], Coord::new(1, 1, 1, 1));

    let moves = legal_moves(&board, rook);
    assert!(moves.contains(&Coord::new(0, 1, 1, 1)));
    assert!(moves.contains(&Coord::new(1, 0, 1, 1)));
    assert!(moves.contains(&Coord::new(1, 1, 3, 1)));
    assert!(moves.contains(&Coord::new(1, 1, 1, 3)));
    // Axis-aligned only: never a diagonal.
    assert!(!moves.contains(&Coord::new(2, 2, 1, 1)));
    // 4 axes x (1 step down + 2 steps up) from component value 1.
    assert_eq!(moves.len(), 12);
}

#[test]
fn sliding_stops_at_blockers_and_only_enemy_blockers_are_destinations() {
    let players = default_players();
    let mut board = Board::new(Dims::new([8, 8, 8, 8]));
    let rook = spawn(&mut board, PieceKind::Rook, &players[0], Coord::new(1, 1, 1, 1));
    // Own piece ahead on axis 1, enemy ahead on axis 2.
    spawn(&mut board, PieceKind::Pawn, &players[0], Coord::new(1, 4, 1, 1));
    spawn(&mut board, PieceKind::Pawn, &players[1], Coord::new(1, 1, 4, 1));

    let moves = legal_moves(&board, rook);
    // Up to, but not including, the own blocker.
    assert!(moves.contains(&Coord::new(1, 3, 1, 1)));
    assert!(!moves.contains(&Coord::new(1, 4, 1, 1)));
    assert!(!moves.contains(&Coord::new(1, 5, 1, 1)));
    // Up to and including the enemy blocker, nothing beyond.
    assert!(moves.contains(&Coord::new(1, 1, 3, 1)));
    assert!(moves.contains(&Coord::new(1, 1, 4, 1)));
    assert!(!moves.contains(&Coord::new(1, 1, 5, 1)));
}

#[test]
fn bishop_moves_only_along_full_diagonals() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let bishop = spawn(&mut board, PieceKind::Bishop, &players[0], Coord::new(1, 1, 1, 1));

    let moves = legal_moves(&board, bishop);
    assert!(moves.contains(&Coord::new(0, 0, 0, 0)));
    assert!(moves.contains(&Coord::new(2, 2, 2, 2)));
    assert!(moves.contains(&Coord::new(3, 3, 3, 3)));
    assert!(moves.contains(&Coord::new(2, 0, 2, 0)));
    // Pairwise diagonals that leave other axes fixed are not bishop moves.
    assert!(!moves.contains(&Coord::new(2, 2, 1, 1)));
    assert!(!moves.contains(&Coord::new(0, 1, 1, 1)));
}

#[test]
fn queen_unions_rook_and_every_mixed_direction() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let queen = spawn(&mut board, PieceKind::Queen, &players[0], Coord::new(1, 1, 1, 1));

    let moves = legal_moves(&board, queen);
    assert!(moves.contains(&Coord::new(3, 1, 1, 1))); // rook ray
    assert!(moves.contains(&Coord::new(2, 2, 2, 2))); // bishop ray
    assert!(moves.contains(&Coord::new(3, 3, 1, 1))); // two-axis mixed ray
    assert!(moves.contains(&Coord::new(0, 2, 2, 1))); // three-axis mixed ray
}

#[test]
fn king_steps_one_in_any_of_the_80_directions() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let king = spawn(&mut board, PieceKind::King, &players[0], Coord::new(1, 1, 1, 1));

    let moves = legal_moves(&board, king);
    assert_eq!(moves.len(), 80);
    assert!(moves.contains(&Coord::new(2, 2, 2, 2)));
    assert!(moves.contains(&Coord::new(0, 1, 1, 1)));
    assert!(!moves.contains(&Coord::new(3, 1, 1, 1)));
}

#[test]
fn alien_moves_like_a_king() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let alien = spawn(&mut board, PieceKind::Alien, &players[0], Coord::new(2, 2, 2, 2));
    let moves = legal_moves(&board, alien);
    assert_eq!(moves.len(), 80);
    assert!(moves.contains(&Coord::new(1, 2, 3, 2)));
}

#[test]
fn knight_leaps_in_l_shapes_over_axis_pairs() {
    let players = default_players();
    let mut board = Board::new(Dims::new([5, 5, 5, 5]));
    let knight = spawn(&mut board, PieceKind::Knight, &players[0], Coord::new(2, 2, 2, 2));

    let moves = legal_moves(&board, knight);
    assert!(moves.contains(&Coord::new(4, 3, 2, 2)));
    assert!(moves.contains(&Coord::new(0, 1, 2, 2)));
    assert!(moves.contains(&Coord::new(2, 0, 1, 2)));
    // From the center of a 5-board every one of the 48 offsets stays inside.
    assert_eq!(moves.len(), 48);
}

#[test]
fn knight_can_capture_but_not_land_on_own_piece() {
    let players = default_players();
    let mut board = Board::new(Dims::new([5, 5, 5, 5]));
    let knight = spawn(&mut board, PieceKind::Knight, &players[0], Coord::new(2, 2, 2, 2));
    spawn(&mut board, PieceKind::Pawn, &players[0], Coord::new(4, 3, 2, 2));
    spawn(&mut board, PieceKind::Pawn, &players[1], Coord::new(0, 1, 2, 2));

    let moves = legal_moves(&board, knight);
    assert!(!moves.contains(&Coord::new(4, 3, 2, 2)));
    assert!(moves.contains(&Coord::new(0, 1, 2, 2)));
}

#[test]
fn pawn_forward_double_and_diagonal_capture() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let pawn = spawn(&mut board, PieceKind::Pawn, &players[0], Coord::new(1, 1, 1, 1));
    spawn(&mut board, PieceKind::Pawn, &players[1], Coord::new(2, 2, 1, 1));

    let moves = legal_moves(&board, pawn);
    assert!(moves.contains(&Coord::new(2, 1, 1, 1))); // forward
    assert!(moves.contains(&Coord::new(3, 1, 1, 1))); // double step, unmoved
    assert!(moves.contains(&Coord::new(2, 2, 1, 1))); // capture
    assert!(!moves.contains(&Coord::new(2, 0, 1, 1))); // empty diagonal
    assert!(!moves.contains(&Coord::new(0, 1, 1, 1))); // never backwards
}

#[test]
fn pawn_double_step_gone_once_moved_or_blocked() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let pawn = spawn(&mut board, PieceKind::Pawn, &players[0], Coord::new(0, 1, 1, 1));

    board
        .move_piece(Coord::new(0, 1, 1, 1), Coord::new(1, 1, 1, 1))
        .unwrap();
    let moves = legal_moves(&board, pawn);
    assert!(moves.contains(&Coord::new(2, 1, 1, 1)));
    assert!(!moves.contains(&Coord::new(3, 1, 1, 1)));

    // A blocked intermediate square also kills both steps for a fresh pawn.
    let blocked = spawn(&mut board, PieceKind::Pawn, &players[0], Coord::new(0, 2, 1, 1));
    spawn(&mut board, PieceKind::Rook, &players[1], Coord::new(1, 2, 1, 1));
    let moves = legal_moves(&board, blocked);
    assert!(!moves.contains(&Coord::new(1, 2, 1, 1)));
    assert!(!moves.contains(&Coord::new(2, 2, 1, 1)));
}

#[test]
fn pawn_orientation_follows_the_owning_player() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    // Beta advances along axis 0 in the negative direction.
    let pawn = spawn(&mut board, PieceKind::Pawn, &players[1], Coord::new(3, 1, 1, 1));
    let moves = legal_moves(&board, pawn);
    assert!(moves.contains(&Coord::new(2, 1, 1, 1)));
    assert!(moves.contains(&Coord::new(1, 1, 1, 1)));
    assert!(!moves.contains(&Coord::new(3, 0, 1, 1)));
}

#[test]
fn cat_dimension_hop_reaches_coordinate_permutations() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let cat = spawn(&mut board, PieceKind::Cat, &players[0], Coord::new(1, 2, 3, 0));

    let moves = legal_moves(&board, cat);
    assert!(moves.contains(&Coord::new(3, 2, 1, 0)));
    assert!(moves.contains(&Coord::new(0, 1, 2, 3)));
    assert!(!moves.contains(&Coord::new(1, 2, 3, 0))); // the identity is not a move
}

#[test]
fn cat_linear_slip_changes_one_or_two_axes() {
    let players = default_players();
    let mut board = Board::new(Dims::new([8, 8, 8, 8]));
    let cat = spawn(&mut board, PieceKind::Cat, &players[0], Coord::new(3, 3, 3, 3));

    let moves = legal_moves(&board, cat);
    assert!(moves.contains(&Coord::new(6, 5, 3, 3))); // two axes at once
    assert!(moves.contains(&Coord::new(0, 3, 3, 3))); // one axis, long leap
    assert!(moves.contains(&Coord::new(3, 3, 7, 3)));
    // Three simultaneous axis changes are not a slip (nor a permutation here).
    assert!(!moves.contains(&Coord::new(4, 4, 4, 3)));
}

#[test]
fn cat_linear_slip_ignores_intervening_pieces() {
    // Explicit assumption: the slip is a leap, not a slide. A piece standing
    // on the path does not block the landing square.
    let players = default_players();
    let mut board = Board::new(Dims::new([8, 8, 8, 8]));
    let cat = spawn(&mut board, PieceKind::Cat, &players[0], Coord::new(0, 0, 0, 0));
    spawn(&mut board, PieceKind::Pawn, &players[0], Coord::new(1, 0, 0, 0));

    let moves = legal_moves(&board, cat);
    assert!(moves.contains(&Coord::new(3, 0, 0, 0)));
    assert!(!moves.contains(&Coord::new(1, 0, 0, 0))); // own-occupied
}

#[test]
fn captured_piece_generates_no_moves() {
    let players = default_players();
    let mut board = Board::new(Dims::new([4, 4, 4, 4]));
    let at = Coord::new(1, 1, 1, 1);
    let rook = spawn(&mut board, PieceKind::Rook, &players[0], at);
    board.remove(at);

    assert_eq!(legal_moves(&board, rook), BTreeSet::new());
}
