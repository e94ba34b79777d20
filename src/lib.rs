//! A chess variant on a four-dimensional lattice: up to four players,
//! generalized movement patterns, and destructive whole-board axis
//! transformations triggered through the Alien piece.

pub mod board;
pub mod coord;
pub mod error;
pub mod game;
pub mod pieces;
pub mod player;
pub mod project;
pub mod rules;
pub mod transform;
