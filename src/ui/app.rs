//! Main UI Application
//!
//! Maps keys to game actions and paints the field with ratatui.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::{BreakOutcome, GameState, MoveOutcome};
use crate::render::{RenderMode, Screen, TileRenderer};
use crate::world::Direction;

/// What a key asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Move(Direction),
    Face(Direction),
    Break,
    ToggleGlyphs,
    Restart,
    Quit,
}

/// Main UI application
pub struct App {
    game: GameState,
    /// What the engine has drawn so far
    screen: Screen,
    render_mode: RenderMode,
    tile_renderer: TileRenderer,
    /// Last thing worth telling the player
    status: String,
    game_over: bool,
}

impl App {
    /// Wrap a game and draw its opening state
    pub fn new(mut game: GameState, render_mode: RenderMode) -> Self {
        let mut screen = Screen::new(game.grid().width(), game.grid().height());
        game.initialize(&mut screen);

        let tile_renderer = TileRenderer::new(render_mode);
        log::info!("Using render mode: {:?}", tile_renderer.mode);

        Self {
            game,
            screen,
            render_mode: tile_renderer.mode,
            tile_renderer,
            status: String::from("Find the diamonds. Arrows move, Shift turns, space breaks."),
            game_over: false,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Switch between ASCII and Unicode glyphs
    pub fn cycle_render_mode(&mut self) {
        self.render_mode = self.render_mode.toggled();
        self.tile_renderer = TileRenderer::new(self.render_mode);
        log::info!("Switched to render mode: {:?}", self.render_mode);
    }

    /// Advance the facing marker blink by one phase
    pub fn tick_blink(&mut self) {
        if !self.game_over {
            self.game.toggle_facing_blink(&mut self.screen);
        }
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        let Some(action) = key_action(key) else {
            return Ok(false);
        };

        match action {
            Action::Quit => return Ok(true),
            Action::ToggleGlyphs => {
                self.cycle_render_mode();
                self.status = format!("Glyphs: {}", self.render_mode.name());
            }
            Action::Restart => {
                self.game.initialize(&mut self.screen);
                self.game_over = false;
                self.status = String::from("New game");
            }
            _ if self.game_over => {}
            Action::Move(direction) => self.try_move(direction),
            Action::Face(direction) => {
                if self.game.face(direction, &mut self.screen) {
                    self.status = format!("Facing {:?}", direction);
                }
            }
            Action::Break => self.try_break(),
        }

        Ok(false)
    }

    fn try_move(&mut self, direction: Direction) {
        let outcome = self.game.move_player(direction, &mut self.screen);
        log::debug!("Move {:?}: {:?}", direction, outcome);

        self.status = match outcome {
            MoveOutcome::Moved { to, .. } => format!("Moved to ({}, {})", to.x, to.y),
            MoveOutcome::BrokeThrough { revealed, .. } => {
                format!("Broke through, {} squares revealed", revealed)
            }
            MoveOutcome::Blocked(terrain) => format!("Blocked by {}", terrain.name()),
            MoveOutcome::OffGrid => String::from("The edge of the mine"),
            MoveOutcome::InvalidDirection => return,
        };

        if outcome.has_moved() && self.game.is_game_over() {
            self.game_over = true;
            self.status = String::from("GAME OVER");
            log::info!("Game over");
        }
    }

    fn try_break(&mut self) {
        self.status = match self.game.break_facing(&mut self.screen) {
            BreakOutcome::Broke { revealed, .. } => {
                format!("Wall broken, {} squares revealed", revealed)
            }
            BreakOutcome::NothingToBreak(terrain) => {
                format!("Cannot break {}", terrain.name())
            }
            BreakOutcome::OffGrid => String::from("Nothing there"),
        };
    }

    /// Render the current frame
    pub fn render(&self, frame: &mut Frame) {
        let [map_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        self.render_map(frame, map_area);
        self.render_status(frame, status_area);
    }

    fn render_map(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Diamond Miners [{}] ", self.render_mode.name()))
            .border_style(Style::default().fg(Color::Rgb(140, 120, 90)));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = self.screen.width();
        let height = self.screen.height();
        let buf = frame.buffer_mut();

        for y in 0..height {
            // game y grows upwards, terminal rows grow downwards
            let screen_y = height - 1 - y;
            if screen_y >= inner.height as i32 {
                continue;
            }
            for x in 0..width {
                if x >= inner.width as i32 {
                    break;
                }
                let code = self.screen.get(x, y);
                let cell_x = inner.x + x as u16;
                let cell_y = inner.y + screen_y as u16;

                buf[(cell_x, cell_y)]
                    .set_char(self.tile_renderer.glyph(code))
                    .set_fg(self.tile_renderer.fg_color(code))
                    .set_bg(self.tile_renderer.bg_color(code));
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let style = if self.game_over {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let line = Line::from(vec![
            Span::styled(self.status.as_str(), style),
            Span::styled("  q quit  r glyphs  n new", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Translate a key press into an action
fn key_action(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let arrow = match key.code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    };
    if let Some(direction) = arrow {
        return Some(if shift { Action::Face(direction) } else { Action::Move(direction) });
    }

    let action = match key.code {
        KeyCode::Char('w') | KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('l') => Action::Move(Direction::Right),
        KeyCode::Char('W') => Action::Face(Direction::Up),
        KeyCode::Char('S') => Action::Face(Direction::Down),
        KeyCode::Char('A') => Action::Face(Direction::Left),
        KeyCode::Char('D') => Action::Face(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Char('b') => Action::Break,
        KeyCode::Char('r') => Action::ToggleGlyphs,
        KeyCode::Char('n') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WallPolicy;
    use crate::render::DisplayCode;
    use crate::world::{Layout, Position, TerrainKind};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn strip_app() -> App {
        let layout = Layout::from_strings(&["0 3 0 5"]).unwrap();
        let game = GameState::with_layout(layout, Position::new(0, 0), Direction::Right, WallPolicy::Blocking)
            .unwrap();
        App::new(game, RenderMode::Ascii)
    }

    #[test]
    fn test_new_app_draws_opening_state() {
        let app = App::new(GameState::new(), RenderMode::Ascii);
        assert_eq!(app.screen().get(0, 0), DisplayCode::Player);
        assert_eq!(app.screen().get(1, 0), DisplayCode::Facing);
        assert_eq!(app.render_mode(), RenderMode::Ascii);
        assert!(!app.is_game_over());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = strip_app();
        assert!(app.handle_input(press(KeyCode::Char('q'))).unwrap());
        assert!(app.handle_input(press(KeyCode::Esc)).unwrap());
        assert!(app
            .handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap());
        assert!(!app.handle_input(press(KeyCode::Char('x'))).unwrap());
    }

    #[test]
    fn test_move_keys() {
        let mut app = App::new(GameState::new(), RenderMode::Ascii);
        app.handle_input(press(KeyCode::Right)).unwrap();
        assert_eq!(app.game().position(), Position::new(1, 0));
        app.handle_input(press(KeyCode::Char('k'))).unwrap();
        assert_eq!(app.game().position(), Position::new(1, 1));
        app.handle_input(press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.game().position(), Position::new(0, 1));
        assert_eq!(app.screen().get(0, 1), DisplayCode::Player);
    }

    #[test]
    fn test_shift_turns_without_moving() {
        let mut app = App::new(GameState::new(), RenderMode::Ascii);
        app.handle_input(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT)).unwrap();
        assert_eq!(app.game().position(), Position::new(0, 0));
        assert_eq!(app.game().facing(), Direction::Up);

        app.handle_input(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(app.game().facing(), Direction::Right);
        assert_eq!(app.game().position(), Position::new(0, 0));
    }

    #[test]
    fn test_blocked_move_reports_terrain() {
        let mut app = strip_app();
        app.handle_input(press(KeyCode::Right)).unwrap();
        assert_eq!(app.game().position(), Position::new(0, 0));
        assert!(app.status().contains(TerrainKind::BreakableWall.name()));
    }

    #[test]
    fn test_break_key_opens_wall() {
        let mut app = strip_app();
        app.handle_input(press(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.game().grid().terrain_at(1, 0), TerrainKind::Empty);
        assert_eq!(app.screen().get(3, 0), DisplayCode::Diamond);

        app.handle_input(press(KeyCode::Right)).unwrap();
        assert_eq!(app.game().position(), Position::new(1, 0));
    }

    #[test]
    fn test_blink_and_restart() {
        let mut app = App::new(GameState::new(), RenderMode::Ascii);
        app.tick_blink();
        assert_eq!(app.screen().get(1, 0), DisplayCode::Empty);
        app.tick_blink();
        assert_eq!(app.screen().get(1, 0), DisplayCode::Facing);

        app.handle_input(press(KeyCode::Right)).unwrap();
        app.handle_input(press(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.game().position(), Position::new(0, 0));
        assert_eq!(app.screen().get(0, 0), DisplayCode::Player);
        assert_eq!(app.screen().get(1, 0), DisplayCode::Facing);
    }

    #[test]
    fn test_toggle_glyphs() {
        let mut app = strip_app();
        app.handle_input(press(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.render_mode(), RenderMode::Unicode);
        app.handle_input(press(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.render_mode(), RenderMode::Ascii);
    }
}
