//! Game state
//!
//! Owns the grid and the player, and applies player actions to them. Every
//! visible change is reported through the [`RenderSink`] passed to the call.

use serde::{Deserialize, Serialize};

use crate::data::GameConfig;
use crate::entities::Player;
use crate::render::{DisplayCode, RenderSink};
use crate::world::{reveal, reveal_opened, Direction, Grid, Layout, LayoutError, Position, TerrainKind};

/// Where the player starts on the shipped level
pub const PLAYER_START: Position = Position { x: 0, y: 0 };
/// Which way the player initially faces
pub const FACING_START: Direction = Direction::Right;

/// What walking into a breakable wall does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallPolicy {
    /// The wall blocks movement; it has to be broken with an explicit action
    #[default]
    Blocking,
    /// The wall breaks and the player steps into the opened square
    BreakOnMove,
}

/// Outcome of a move request
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stepped onto an open square
    Moved { from: Position, to: Position },
    /// Broke a wall, stepped into it and revealed `revealed` new squares
    BrokeThrough { from: Position, to: Position, revealed: usize },
    /// The destination is terrain the player cannot enter
    Blocked(TerrainKind),
    /// The destination lies outside the field
    OffGrid,
    /// The delta was not one of the four unit directions
    InvalidDirection,
}

impl MoveOutcome {
    /// Whether the player changed square
    pub const fn has_moved(self) -> bool {
        matches!(self, Self::Moved { .. } | Self::BrokeThrough { .. })
    }
}

/// Outcome of trying to break the faced square
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BreakOutcome {
    Broke { at: Position, revealed: usize },
    /// The faced square is not a breakable wall
    NothingToBreak(TerrainKind),
    OffGrid,
}

/// The whole state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    layout: Layout,
    grid: Grid,
    player: Player,
    start: Position,
    start_facing: Direction,
    wall_policy: WallPolicy,
}

impl GameState {
    /// The shipped level with default rules
    pub fn new() -> Self {
        Self {
            grid: Layout::default().into_grid(),
            layout: Layout::default(),
            player: Player::new(PLAYER_START, FACING_START),
            start: PLAYER_START,
            start_facing: FACING_START,
            wall_policy: WallPolicy::default(),
        }
    }

    /// A game on a custom layout. Fails if the player could not stand at `start`.
    pub fn with_layout(
        layout: Layout,
        start: Position,
        facing: Direction,
        wall_policy: WallPolicy,
    ) -> Result<Self, LayoutError> {
        layout.validate_start(start)?;
        Ok(Self {
            grid: layout.clone().into_grid(),
            layout,
            player: Player::new(start, facing),
            start,
            start_facing: facing,
            wall_policy,
        })
    }

    /// A game set up from configuration
    pub fn from_config(config: &GameConfig) -> Result<Self, LayoutError> {
        Self::with_layout(
            config.layout()?,
            Position::from(config.start),
            config.facing,
            config.wall_policy,
        )
    }

    /// Set up the field and draw it: everything undiscovered, then discovery
    /// from the start square, then the player and facing markers on top.
    pub fn initialize(&mut self, sink: &mut impl RenderSink) {
        self.grid = self.layout.clone().into_grid();
        self.player = Player::new(self.start, self.start_facing);

        for pos in self.grid.positions() {
            sink.render(pos.x, pos.y, DisplayCode::Undiscovered);
        }

        let start = self.player.position;
        let revealed = reveal(&mut self.grid, start.x, start.y, sink);
        sink.render(start.x, start.y, DisplayCode::Player);
        self.draw_facing_marker(sink);

        log::info!(
            "Game initialised at ({}, {}) facing {:?}, {} squares discovered",
            start.x,
            start.y,
            self.player.facing,
            revealed
        );
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn position(&self) -> Position {
        self.player.position
    }

    pub fn facing(&self) -> Direction {
        self.player.facing
    }

    pub fn facing_visible(&self) -> bool {
        self.player.facing_visible
    }

    pub fn wall_policy(&self) -> WallPolicy {
        self.wall_policy
    }

    /// Move by a raw delta; anything but a unit orthogonal step is ignored
    pub fn move_by(&mut self, dx: i32, dy: i32, sink: &mut impl RenderSink) -> MoveOutcome {
        match Direction::from_delta(dx, dy) {
            Some(direction) => self.move_player(direction, sink),
            None => {
                log::warn!("Ignoring move with invalid delta ({}, {})", dx, dy);
                MoveOutcome::InvalidDirection
            }
        }
    }

    /// Try to step one square in `direction`.
    ///
    /// A rejected move changes nothing and draws nothing. An accepted move
    /// redraws the vacated square as its terrain and the destination as the
    /// player, and faces the player in `direction`.
    pub fn move_player(&mut self, direction: Direction, sink: &mut impl RenderSink) -> MoveOutcome {
        let from = self.player.position;
        let to = from.step(direction);

        if !self.grid.contains(to) {
            log::debug!("Move {:?} from ({}, {}) leaves the field", direction, from.x, from.y);
            return MoveOutcome::OffGrid;
        }

        let terrain = self.grid.terrain_at(to.x, to.y);
        let breaks_wall = match terrain {
            t if t.is_walkable() => false,
            TerrainKind::BreakableWall if self.wall_policy == WallPolicy::BreakOnMove => true,
            _ => {
                log::debug!("Move {:?} into ({}, {}) blocked by {}", direction, to.x, to.y, terrain.name());
                return MoveOutcome::Blocked(terrain);
            }
        };

        // turning leaves the old marker behind, put its square back first
        if self.player.facing_target() != to {
            self.hide_facing_marker(sink);
        }

        let under = self.grid.terrain_at(from.x, from.y);
        sink.render(from.x, from.y, under.display());

        if breaks_wall {
            self.grid.break_wall(to.x, to.y);
        }

        self.player.position = to;
        self.player.facing = direction;
        // the marker is shown again on the next blink
        self.player.facing_visible = false;
        sink.render(to.x, to.y, DisplayCode::Player);

        if breaks_wall {
            let revealed = reveal_opened(&mut self.grid, to.x, to.y, sink);
            sink.render(to.x, to.y, DisplayCode::Player);
            log::debug!("Broke through to ({}, {}), {} squares revealed", to.x, to.y, revealed);
            return MoveOutcome::BrokeThrough { from, to, revealed };
        }

        log::debug!("Moved from ({}, {}) to ({}, {})", from.x, from.y, to.x, to.y);
        MoveOutcome::Moved { from, to }
    }

    /// Turn to face `direction` without moving. Returns whether anything changed.
    pub fn face(&mut self, direction: Direction, sink: &mut impl RenderSink) -> bool {
        if self.player.facing == direction {
            return false;
        }
        self.hide_facing_marker(sink);
        self.player.facing = direction;
        self.draw_facing_marker(sink);
        true
    }

    /// Break the breakable wall the player is facing and reveal what lies
    /// behind it.
    pub fn break_facing(&mut self, sink: &mut impl RenderSink) -> BreakOutcome {
        let target = self.player.facing_target();
        if !self.grid.contains(target) {
            return BreakOutcome::OffGrid;
        }
        if !self.grid.break_wall(target.x, target.y) {
            return BreakOutcome::NothingToBreak(self.grid.terrain_at(target.x, target.y));
        }

        let revealed = reveal_opened(&mut self.grid, target.x, target.y, sink);
        // the search redrew the square as empty
        self.player.facing_visible = false;
        log::debug!("Broke wall at ({}, {}), {} squares revealed", target.x, target.y, revealed);
        BreakOutcome::Broke { at: target, revealed }
    }

    /// Blink the facing marker.
    ///
    /// Only squares inside the field blink; the marker is never drawn over an
    /// undiscovered square, though the blink phase still advances.
    pub fn toggle_facing_blink(&mut self, sink: &mut impl RenderSink) {
        let target = self.player.facing_target();
        if !self.grid.contains(target) {
            return;
        }

        self.player.facing_visible = !self.player.facing_visible;
        if self.grid.is_discovered(target.x, target.y) {
            let code = if self.player.facing_visible {
                DisplayCode::Facing
            } else {
                self.grid.display_at(target.x, target.y)
            };
            sink.render(target.x, target.y, code);
        }
    }

    /// The game never ends on its own yet
    pub fn is_game_over(&self) -> bool {
        false
    }

    fn marker_drawable(&self, target: Position) -> bool {
        self.grid.contains(target) && self.grid.is_discovered(target.x, target.y)
    }

    fn draw_facing_marker(&mut self, sink: &mut impl RenderSink) {
        let target = self.player.facing_target();
        self.player.facing_visible = true;
        if self.marker_drawable(target) {
            sink.render(target.x, target.y, DisplayCode::Facing);
        }
    }

    fn hide_facing_marker(&mut self, sink: &mut impl RenderSink) {
        let target = self.player.facing_target();
        if self.player.facing_visible && self.marker_drawable(target) {
            sink.render(target.x, target.y, self.grid.display_at(target.x, target.y));
        }
        self.player.facing_visible = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
