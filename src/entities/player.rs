//! Player state

use crate::world::{Direction, Position};

/// Where the miner stands and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    pub facing: Direction,
    /// Whether the facing marker is currently drawn (blink phase)
    pub facing_visible: bool,
}

impl Player {
    pub fn new(position: Position, facing: Direction) -> Self {
        Self {
            position,
            facing,
            facing_visible: true,
        }
    }

    /// The square in front of the player; may lie just outside the field
    pub fn facing_target(&self) -> Position {
        self.position.step(self.facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_target_can_leave_the_field() {
        let player = Player::new(Position::new(0, 0), Direction::Left);
        assert_eq!(player.facing_target(), Position::new(-1, 0));
        assert!(player.facing_visible);

        let player = Player::new(Position::new(0, 0), Direction::Right);
        assert_eq!(player.facing_target(), Position::new(1, 0));
    }
}
