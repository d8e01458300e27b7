//! Date-idea wheel
//!
//! A spin draws the result straight away and animates the pointer through
//! 6-11 full turns. The result is not derived from the final angle.

use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, BorderType, Borders, List, ListItem, Paragraph,
    },
};
use std::ops::Range;
use std::time::{Duration, Instant};

use crate::anim::{Easing, Tween};
use crate::models::WHEEL_IDEAS;
use crate::ui::Theme;

/// Extra full rotations per spin
pub const SPIN_TURNS: Range<u32> = 6..12;

pub const DEFAULT_SPIN_DURATION: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, PartialEq)]
pub struct WheelView {
    /// Pointer angle in degrees, clockwise from 12 o'clock
    rotation: f32,
    spin: Option<Tween>,
    selected: Option<String>,
    duration: Duration,
}

impl Default for WheelView {
    fn default() -> Self {
        Self::new(DEFAULT_SPIN_DURATION)
    }
}

impl WheelView {
    pub fn new(duration: Duration) -> Self {
        Self {
            rotation: 0.0,
            spin: None,
            selected: None,
            duration,
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Start a spin and return the number of extra turns drawn.
    ///
    /// A spin already in flight is replaced; the new one starts from the
    /// pointer's current animated angle.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> u32 {
        if let Some(tween) = self.spin.take() {
            self.rotation = tween.value_at(now);
        }

        let turns = rng.gen_range(SPIN_TURNS);
        let idx = rng.gen_range(0..WHEEL_IDEAS.len());
        self.selected = Some(WHEEL_IDEAS[idx].to_string());

        let end = self.rotation + 360.0 * turns as f32;
        self.spin = Some(Tween::new(
            self.rotation,
            end,
            now,
            self.duration,
            Easing::FAST_OUT_SLOW_IN,
        ));
        turns
    }

    /// Advance the animation; on completion fold the angle back into [0, 360)
    pub fn tick(&mut self, now: Instant) {
        let Some(tween) = self.spin else {
            return;
        };

        if tween.is_finished(now) {
            self.rotation = tween.to.rem_euclid(360.0);
            self.spin = None;
        } else {
            self.rotation = tween.value_at(now);
        }
    }

    pub fn handle_key<R: Rng + ?Sized>(&mut self, key: KeyEvent, rng: &mut R, now: Instant) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => {
                self.spin(rng, now);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Title
                Constraint::Length(11), // Wheel
                Constraint::Length(2),  // Result
                Constraint::Min(3),     // Idea list
            ])
            .split(area);

        let title = Paragraph::new(Span::styled("Spin the Wheel Ide Kencan", theme.title()))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        // Square-ish wheel: terminal cells are about twice as tall as wide
        let wheel_height = chunks[1].height;
        let wheel_width = (wheel_height * 2).min(chunks[1].width);
        let wheel_area = Rect {
            x: chunks[1].x + (chunks[1].width.saturating_sub(wheel_width)) / 2,
            y: chunks[1].y,
            width: wheel_width,
            height: wheel_height,
        };

        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let primary = theme.primary;
        let rim = theme.dim;
        let wheel = Canvas::default()
            .background_color(theme.background)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 0.95,
                    color: rim,
                });
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 0.8 * sin as f64,
                    y2: 0.8 * cos as f64,
                    color: primary,
                });
            });
        if !wheel_area.is_empty() {
            frame.render_widget(wheel, wheel_area);
        }

        let result = match &self.selected {
            Some(idea) => Paragraph::new(Span::styled(idea.as_str(), theme.title())),
            None => Paragraph::new(Span::styled("Tekan Enter untuk Putar Roda", theme.dimmed())),
        }
        .alignment(Alignment::Center);
        frame.render_widget(result, chunks[2]);

        let items: Vec<ListItem> = WHEEL_IDEAS
            .iter()
            .map(|idea| ListItem::new(Line::from(Span::styled(format!("• {}", idea), theme.text()))))
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border())
                .title(Span::styled(" Ide lainnya ", theme.bold())),
        );
        frame.render_widget(list, chunks[3]);
    }
}
