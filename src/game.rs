//! Turn orchestration: sequencing, initial layout, and the king-capture win
//! rule, layered over the board store and the movement engine.

use thiserror::Error;

use crate::board::{Board, PieceId};
use crate::coord::{Coord, Dims, AXES};
use crate::error::BoardError;
use crate::pieces::{Movement, Piece, PieceKind};
use crate::player::{default_players, Player};
use crate::rules::movegen::legal_moves;
use crate::transform::TransformOutcome;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("player count must be between 2 and 4, got {0}")]
    PlayerCount(usize),

    #[error("game already finished")]
    Finished,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },

    #[error("player {0} does not have an active Alien")]
    NoAlien(&'static str),
}

/// A global board rewrite requested through a player's Alien.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlienOp {
    Transpose([usize; AXES]),
    SwapAxes(usize, usize),
    MoveAxis(usize, usize),
    ReshapeAxis(usize, i32),
}

/// What a completed move did, for callers that report or render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Captured(PieceId),
    /// The Cat scratched this piece: it survived, turned pawn-mover, and was
    /// pushed to the Cat's former square.
    Scratched(PieceId),
}

pub struct Game {
    pub board: Board,
    players: Vec<Player>,
    rosters: Vec<Vec<PieceId>>,
    turn_index: usize,
    winner: Option<usize>,
}

impl Game {
    /// Set up a match with the standard initial layout.
    pub fn new(player_count: usize, dims: Dims) -> Result<Self, GameError> {
        if !(2..=4).contains(&player_count) {
            return Err(GameError::PlayerCount(player_count));
        }
        let mut players = default_players();
        players.truncate(player_count);
        let rosters = vec![Vec::new(); player_count];
        let mut game = Self {
            board: Board::new(dims),
            players,
            rosters,
            turn_index: 0,
            winner: None,
        };
        game.setup_initial_positions()?;
        Ok(game)
    }

    /// An empty board with the same players, for bespoke positions.
    pub fn empty(player_count: usize, dims: Dims) -> Result<Self, GameError> {
        if !(2..=4).contains(&player_count) {
            return Err(GameError::PlayerCount(player_count));
        }
        let mut players = default_players();
        players.truncate(player_count);
        let rosters = vec![Vec::new(); player_count];
        Ok(Self {
            board: Board::new(dims),
            players,
            rosters,
            turn_index: 0,
            winner: None,
        })
    }

    fn setup_initial_positions(&mut self) -> Result<(), GameError> {
        use PieceKind::*;
        let dims = self.board.dims();
        let z_corners = [0, 0, dims.size(2) - 1, dims.size(2) - 1];
        let w_corners = [0, dims.size(3) - 1, 0, dims.size(3) - 1];
        let home_order = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for player_index in 0..self.players.len() {
            let player = self.players[player_index].clone();
            let base_z = z_corners[player.index % z_corners.len()];
            let base_w = w_corners[player.index % w_corners.len()];
            let forward_axis = player.forward_axis;
            let rank_axis = if forward_axis == 0 { 1 } else { 0 };
            let home_rank = if player.forward_direction > 0 {
                0
            } else {
                dims.size(forward_axis) - 1
            };
            let pawn_rank = home_rank + player.forward_direction;

            let base = Coord::new(0, 0, base_z, base_w);
            for (file, &kind) in home_order.iter().enumerate() {
                let at = base
                    .with_axis(forward_axis, home_rank)
                    .with_axis(rank_axis, file as i32);
                self.register(Piece::new(kind, &player), at)?;
            }
            for file in 0..dims.size(rank_axis) {
                let at = base
                    .with_axis(forward_axis, pawn_rank)
                    .with_axis(rank_axis, file);
                self.register(Piece::new(Pawn, &player), at)?;
            }
            // The Cat sits off the queen file, displaced along the z axis.
            let queen_file = 3;
            let cat_at = base
                .with_axis(forward_axis, home_rank)
                .with_axis(rank_axis, queen_file)
                .with_axis(2, offset_within(base_z, dims.size(2)));
            self.register(Piece::new(Cat, &player), cat_at)?;
            // The Alien sits off the king file, displaced along the w axis.
            let king_file = 4;
            let alien_at = base
                .with_axis(forward_axis, home_rank)
                .with_axis(rank_axis, king_file)
                .with_axis(3, offset_within(base_w, dims.size(3)));
            self.register(Piece::new(Alien, &player), alien_at)?;
        }
        Ok(())
    }

    /// Spawn a piece and record it in its owner's roster.
    pub fn register(&mut self, piece: Piece, at: Coord) -> Result<PieceId, GameError> {
        let owner = piece.owner;
        let id = self.board.spawn(piece, at)?;
        self.rosters[owner].push(id);
        Ok(id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_index]
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }

    /// Sorted legal destinations of the piece at `position`; empty when the
    /// square is vacant.
    pub fn legal_moves_from(&self, position: Coord) -> Vec<Coord> {
        match self.board.piece_at(position) {
            Some(id) => legal_moves(&self.board, id).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Active pieces belonging to `player`.
    pub fn pieces_for_player(&self, player: usize) -> Vec<PieceId> {
        self.rosters[player]
            .iter()
            .copied()
            .filter(|&id| self.board.piece(id).active)
            .collect()
    }

    /// Play the current player's move from `start` to `end`.
    ///
    /// A Cat landing on an enemy scratches instead of capturing: the victim's
    /// movement becomes pawn-like (oriented to the victim's own player) and
    /// the two pieces exchange squares.
    pub fn play_move(&mut self, start: Coord, end: Coord) -> Result<MoveOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::Finished);
        }
        let id = self
            .board
            .piece_at(start)
            .ok_or(BoardError::NoPiece(start))?;
        if self.board.piece(id).owner != self.turn_index {
            return Err(GameError::NotYourTurn);
        }
        if !legal_moves(&self.board, id).contains(&end) {
            return Err(GameError::IllegalMove { from: start, to: end });
        }

        let kind = self.board.piece(id).kind;
        let target = self
            .board
            .piece_at(end)
            .filter(|&t| self.board.piece(t).owner != self.turn_index);

        let outcome = match (kind, target) {
            (PieceKind::Cat, Some(victim)) => {
                let victim_player = self.players[self.board.piece(victim).owner].clone();
                self.board.piece_mut(victim).movement = Movement::Pawn {
                    axis: victim_player.forward_axis,
                    dir: victim_player.forward_direction,
                };
                self.board.swap(start, end, id, victim)?;
                MoveOutcome::Scratched(victim)
            }
            _ => match self.board.move_piece(start, end)? {
                Some(captured) => MoveOutcome::Captured(captured),
                None => MoveOutcome::Moved,
            },
        };

        self.advance_turn();
        self.update_winner();
        Ok(outcome)
    }

    /// Perform a board transformation through `player`'s active Alien.
    pub fn alien_op(
        &mut self,
        player: usize,
        op: AlienOp,
    ) -> Result<TransformOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::Finished);
        }
        if player != self.turn_index {
            return Err(GameError::NotYourTurn);
        }
        let alien = self.find_alien(player)?;
        let outcome = match op {
            AlienOp::Transpose(order) => self.board.transpose(order, alien)?,
            AlienOp::SwapAxes(a, b) => self.board.swap_axes(a, b, alien)?,
            AlienOp::MoveAxis(src, dst) => self.board.move_axis(src, dst, alien)?,
            AlienOp::ReshapeAxis(axis, size) => self.board.reshape_axis(axis, size, alien)?,
        };
        self.advance_turn();
        self.update_winner();
        Ok(outcome)
    }

    /// The player's active Alien, required for alien operations.
    pub fn find_alien(&self, player: usize) -> Result<PieceId, GameError> {
        self.rosters[player]
            .iter()
            .copied()
            .find(|&id| {
                let piece = self.board.piece(id);
                piece.kind == PieceKind::Alien && piece.active
            })
            .ok_or(GameError::NoAlien(self.players[player].identifier))
    }

    pub fn king_alive(&self, player: usize) -> bool {
        self.rosters[player].iter().any(|&id| {
            let piece = self.board.piece(id);
            piece.kind == PieceKind::King && piece.active
        })
    }

    fn advance_turn(&mut self) {
        self.turn_index = (self.turn_index + 1) % self.players.len();
    }

    /// A player wins once every other king has been captured.
    pub fn update_winner(&mut self) {
        let alive: Vec<usize> = (0..self.players.len())
            .filter(|&p| self.king_alive(p))
            .collect();
        if let [only] = alive[..] {
            self.winner = Some(only);
        }
    }

    pub fn status_report(&self) -> String {
        let mut lines = vec![format!("Turn: {}", self.current_player())];
        for player in &self.players {
            let state = if self.king_alive(player.index) {
                "alive"
            } else {
                "captured"
            };
            lines.push(format!("{} king: {state}", player.identifier));
        }
        if let Some(winner) = self.winner() {
            lines.push(format!("Winner: {winner}"));
        }
        lines.join("\n")
    }
}

/// A coordinate adjacent to `base` along one axis, staying inside `0..limit`.
fn offset_within(base: i32, limit: i32) -> i32 {
    if base + 1 < limit {
        base + 1
    } else if base > 0 {
        base - 1
    } else {
        base
    }
}
