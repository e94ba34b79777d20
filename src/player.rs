use std::fmt;

/// One participant in a match. Pieces refer back to their player by index
/// only; the player table is owned by the orchestration layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub index: usize,
    pub identifier: &'static str,
    pub color: &'static str,
    /// Axis along which this player's pawns advance.
    pub forward_axis: usize,
    /// +1 or -1 along `forward_axis`.
    pub forward_direction: i32,
}

impl Player {
    /// Rank index of this player's home rank on its forward axis, with -1
    /// meaning "last rank of the axis".
    #[inline]
    pub fn home_rank(&self) -> i32 {
        if self.forward_direction > 0 {
            0
        } else {
            -1
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier)
    }
}

/// The default set of up to four players. Alpha/Beta face each other along
/// axis 0, Gamma/Delta along axis 1.
pub fn default_players() -> Vec<Player> {
    vec![
        Player {
            index: 0,
            identifier: "Alpha",
            color: "White",
            forward_axis: 0,
            forward_direction: 1,
        },
        Player {
            index: 1,
            identifier: "Beta",
            color: "Black",
            forward_axis: 0,
            forward_direction: -1,
        },
        Player {
            index: 2,
            identifier: "Gamma",
            color: "Gold",
            forward_axis: 1,
            forward_direction: 1,
        },
        Player {
            index: 3,
            identifier: "Delta",
            color: "Azure",
            forward_axis: 1,
            forward_direction: -1,
        },
    ]
}
