//! Cosmetic animation timing
//!
//! Durations here must match the CSS keyframes in the stylesheet.

use serde::{Deserialize, Serialize};

/// Fade/slide-out of a removed field or object row
pub const ROW_EXIT_MS: u32 = 300;

/// Per-row stagger of the slide-in after a table sort
pub const ROW_STAGGER_S: f64 = 0.05;

/// Body transition while switching theme
pub const THEME_TRANSITION_MS: u32 = 300;

/// Number of strips in the shredder effect
pub const SHREDDER_PIECES: usize = 8;

/// Effect played on an analysis card before it is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeleteAnimation {
    #[default]
    Zoom,
    Slide,
    Fall,
    Shredder,
}

impl DeleteAnimation {
    pub const ALL: [DeleteAnimation; 4] = [
        DeleteAnimation::Zoom,
        DeleteAnimation::Slide,
        DeleteAnimation::Fall,
        DeleteAnimation::Shredder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteAnimation::Zoom => "zoom",
            DeleteAnimation::Slide => "slide",
            DeleteAnimation::Fall => "fall",
            DeleteAnimation::Shredder => "shredder",
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL.into_iter().find(|a| a.as_str() == s).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeleteAnimation::Zoom => "🎯 Zoom Out",
            DeleteAnimation::Slide => "➡️ Slide Away",
            DeleteAnimation::Fall => "⬇️ Fall Away",
            DeleteAnimation::Shredder => "✂️ Shredder Effect",
        }
    }

    /// Time to wait before the delete request goes out
    pub fn duration_ms(&self) -> u32 {
        match self {
            DeleteAnimation::Zoom => 700,
            DeleteAnimation::Slide | DeleteAnimation::Fall => 1000,
            DeleteAnimation::Shredder => 1700,
        }
    }

    pub fn class(&self) -> String {
        format!("deleting-{}", self.as_str())
    }
}

/// One strip of the shredder effect
#[derive(Debug, Clone, PartialEq)]
pub struct ShredderPiece {
    pub class: String,
    pub clip_path: String,
    pub delay: String,
}

/// Vertical strips covering the card left to right, alternating fall direction
pub fn shredder_pieces(count: usize) -> Vec<ShredderPiece> {
    let width = 100.0 / count as f64;
    (0..count)
        .map(|i| ShredderPiece {
            class: format!("shredder-piece piece-{}", i % 2 + 1),
            clip_path: format!(
                "inset(0 {}% 0 {}%)",
                trim_float((count - i - 1) as f64 * width),
                trim_float(i as f64 * width)
            ),
            delay: format!("{}s", trim_float(i as f64 * 0.1)),
        })
        .collect()
}

fn trim_float(v: f64) -> String {
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Count-up of a dashboard statistic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub target: u32,
    pub steps: u32,
    pub duration_ms: u32,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self { target, steps: 60, duration_ms: 2000 }
    }

    pub fn interval_ms(&self) -> u32 {
        self.duration_ms / self.steps.max(1)
    }

    /// Displayed value after `step` ticks; reaches the target exactly on the last one
    pub fn value_at(&self, step: u32) -> u32 {
        if step >= self.steps {
            return self.target;
        }
        let current = f64::from(self.target) / f64::from(self.steps) * f64::from(step);
        (current.floor() as u32).min(self.target)
    }

    pub fn is_done(&self, step: u32) -> bool {
        step >= self.steps
    }
}

/// Inline style restarting the slide-in for a row after a sort
pub fn row_slide_in(index: usize) -> String {
    format!("animation: slideIn 0.3s ease-out {}s", trim_float(index as f64 * ROW_STAGGER_S))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_animation_durations() {
        assert_eq!(DeleteAnimation::Zoom.duration_ms(), 700);
        assert_eq!(DeleteAnimation::Shredder.duration_ms(), 1700);
        assert_eq!(DeleteAnimation::parse("fall"), DeleteAnimation::Fall);
        assert_eq!(DeleteAnimation::parse("spin"), DeleteAnimation::Zoom);
        assert_eq!(DeleteAnimation::Slide.class(), "deleting-slide");
    }

    #[test]
    fn test_shredder_pieces_cover_card() {
        let pieces = shredder_pieces(SHREDDER_PIECES);
        assert_eq!(pieces.len(), 8);
        assert_eq!(pieces[0].clip_path, "inset(0 87.5% 0 0%)");
        assert_eq!(pieces[7].clip_path, "inset(0 0% 0 87.5%)");
        assert_eq!(pieces[0].class, "shredder-piece piece-1");
        assert_eq!(pieces[1].class, "shredder-piece piece-2");
        assert_eq!(pieces[3].delay, "0.3s");
    }

    #[test]
    fn test_counter_reaches_target() {
        let counter = CounterAnimation::new(7);
        assert_eq!(counter.interval_ms(), 33);
        assert_eq!(counter.value_at(0), 0);
        assert_eq!(counter.value_at(30), 3);
        assert_eq!(counter.value_at(59), 6);
        assert_eq!(counter.value_at(60), 7);
        assert!(counter.is_done(60));
    }

    #[test]
    fn test_row_slide_in_stagger() {
        assert_eq!(row_slide_in(0), "animation: slideIn 0.3s ease-out 0s");
        assert_eq!(row_slide_in(3), "animation: slideIn 0.3s ease-out 0.15s");
    }
}
