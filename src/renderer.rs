use crate::app::ScreenState;
use crate::consts::{
    ARENA_HEIGHT, ARENA_WIDTH, ENEMY_HEIGHT, ENEMY_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH,
    PROJECTILE_HEIGHT, PROJECTILE_WIDTH,
};
use crate::engine::Snapshot;
use crate::entities::Player;
use rand::Rng;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: u32 = 2;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub state: ScreenState,
    pub snapshot: &'a Snapshot,
    pub area: Rect,
    pub fps: u32,
}

/// Maps arena units onto a rectangle of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaProjection {
    pub inner: Rect,
}

impl ArenaProjection {
    pub fn new(inner: Rect) -> Self {
        Self { inner }
    }

    /// Cell holding the arena point, clamped inside the projection
    pub fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x / ARENA_WIDTH * self.inner.width as f32).floor() as i64;
        let row = (y / ARENA_HEIGHT * self.inner.height as f32).floor() as i64;
        let col = col.clamp(0, self.inner.width.saturating_sub(1) as i64) as u16;
        let row = row.clamp(0, self.inner.height.saturating_sub(1) as i64) as u16;
        (self.inner.x + col, self.inner.y + row)
    }

    /// Number of columns an arena width covers, never less than one
    pub fn columns(&self, width: f32) -> u16 {
        ((width / ARENA_WIDTH * self.inner.width as f32).round() as u16).max(1)
    }

    /// Number of rows an arena height covers, never less than one
    pub fn rows(&self, height: f32) -> u16 {
        ((height / ARENA_HEIGHT * self.inner.height as f32).round() as u16).max(1)
    }

    /// Fills the box with `symbol`, cut at the projection's edges
    fn fill(
        &self,
        buffer: &mut Buffer,
        (x, y): (f32, f32),
        (w, h): (f32, f32),
        symbol: &str,
        style: Style,
    ) {
        let (col, row) = self.cell(x, y);
        let right = self.inner.x + self.inner.width;
        let bottom = self.inner.y + self.inner.height;
        let width = self.columns(w).min(right - col);
        let height = self.rows(h).min(bottom - row);
        let line = symbol.repeat(width as usize);
        for dy in 0..height {
            buffer.set_string(col, row + dy, &line, style);
        }
    }
}

/// Carves the largest bordered arena with a 3:2 on-screen ratio out of `area`
pub fn arena_rect(area: Rect) -> Rect {
    let max_height = area.height as u32;
    let max_width = area.width as u32;
    let ratio_width = max_height * CELL_ASPECT * ARENA_WIDTH as u32 / ARENA_HEIGHT as u32;
    let (width, height) = if ratio_width <= max_width {
        (ratio_width, max_height)
    } else {
        let h = max_width * ARENA_HEIGHT as u32 / (ARENA_WIDTH as u32 * CELL_ASPECT);
        (max_width, h)
    };
    Rect {
        x: area.x + (area.width - width as u16) / 2,
        y: area.y + (area.height - height as u16) / 2,
        width: width as u16,
        height: height as u16,
    }
}

/// Handles all rendering responsibilities for the game
#[derive(Debug, Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_game(frame, view);
        match view.state {
            ScreenState::Playing => {}
            ScreenState::Paused => self.render_paused(frame, view),
            ScreenState::Cleared => self.render_cleared(frame, view),
            ScreenState::GameOver => self.render_game_over(frame, view),
        }
    }

    /// Renders the arena, entities and HUD
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let snapshot = view.snapshot;

        // HUD on the first row, controls on the last
        let field = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(2),
        };
        let outer = arena_rect(field);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(outer);
        frame.render_widget(block, outer);

        let projection = ArenaProjection::new(inner);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Sparse star field
        let buffer = frame.buffer_mut();
        let mut rng = rand::rng();
        for _ in 0..(inner.width as usize * inner.height as usize / 60) {
            let col = inner.x + rng.random_range(0..inner.width);
            let row = inner.y + rng.random_range(0..inner.height);
            buffer.set_string(col, row, ".", Style::default().fg(Color::DarkGray));
        }

        for enemy in &snapshot.enemies {
            projection.fill(
                buffer,
                (enemy.x, enemy.y),
                (ENEMY_WIDTH, ENEMY_HEIGHT),
                "█",
                Style::default().fg(Color::Green),
            );
        }

        for projectile in &snapshot.projectiles {
            projection.fill(
                buffer,
                (projectile.x, projectile.y),
                (PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
                "|",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
        }

        projection.fill(
            buffer,
            (snapshot.player_x, Player::y()),
            (PLAYER_WIDTH, PLAYER_HEIGHT),
            "▀",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        let stats = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enemies: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.enemies.len()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1u16.min(area.height),
        };
        frame.render_widget(Paragraph::new(stats).centered(), stats_area);

        let controls = Line::from(vec![Span::styled(
            "[A/D/Arrows: Move] [Space: Shoot] [P: Pause] [R: Restart] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1u16.min(area.height),
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the pause overlay
    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];
        self.render_overlay(frame, view.area, text, Color::Yellow);
    }

    /// Renders the all-enemies-destroyed overlay
    fn render_cleared(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from("INVADERS DESTROYED!").centered().green().bold(),
            Line::from(format!("Score: {}", view.snapshot.score))
                .centered()
                .yellow()
                .bold(),
            Line::from("Press R to play again").centered().white(),
        ];
        self.render_overlay(frame, view.area, text, Color::Green);
    }

    /// Renders the game over overlay
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from("GAME OVER!").centered().red().bold(),
            Line::from(format!("Final Score: {}", view.snapshot.score))
                .centered()
                .yellow()
                .bold(),
            Line::from("Press R to restart").centered().white(),
        ];
        self.render_overlay(frame, view.area, text, Color::Red);
    }

    fn render_overlay(&self, frame: &mut Frame, area: Rect, text: Vec<Line>, color: Color) {
        let width = 30u16.min(area.width);
        let height = 6u16.min(area.height);
        let overlay = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, overlay);
        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .alignment(Alignment::Center),
            overlay,
        );
    }
}
