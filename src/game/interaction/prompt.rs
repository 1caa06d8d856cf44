// Crosshair prompt panel with fade and text-swap animations

use crate::engine::tween::{Ease, Tween};

/// Fade-in duration when the prompt appears
const FADE_IN_DURATION: f32 = 0.2;
/// Fade-out duration when the prompt disappears
const FADE_OUT_DURATION: f32 = 0.15;
/// Half-fade used on each side of a text swap
const TEXT_SWAP_DURATION: f32 = 0.1;

/// In-flight prompt animation
#[derive(Debug)]
enum PromptAnimation {
    /// Plain alpha fade toward a target
    Fade(Tween),
    /// Fading out before replacing the text
    SwapOut { tween: Tween, next_text: String },
    /// Fading back in with the new text already applied
    SwapIn(Tween),
}

/// The interaction prompt shown at the crosshair
///
/// Text changes while visible play a quick fade-out, swap, fade-in so the
/// label never pops. A new animation request kills whatever is in flight.
#[derive(Debug, Default)]
pub struct PromptPanel {
    text: String,
    alpha: f32,
    visible: bool,
    animation: Option<PromptAnimation>,
}

impl PromptPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the prompt with the given text, fading in if it was hidden
    pub fn show(&mut self, text: &str) {
        self.text = text.to_string();

        if self.visible {
            return;
        }
        self.visible = true;
        self.animation = Some(PromptAnimation::Fade(Tween::new(
            self.alpha,
            1.0,
            FADE_IN_DURATION,
            Ease::OutQuad,
        )));
    }

    /// Hide the prompt; `immediate` skips the fade-out
    pub fn hide(&mut self, immediate: bool) {
        if !self.visible && self.animation.is_none() {
            return;
        }
        self.visible = false;
        self.text.clear();

        if immediate {
            self.alpha = 0.0;
            self.animation = None;
        } else {
            self.animation = Some(PromptAnimation::Fade(Tween::new(
                self.alpha,
                0.0,
                FADE_OUT_DURATION,
                Ease::InQuad,
            )));
        }
    }

    /// Change the text of an already-visible prompt with a swap animation
    ///
    /// Ignored while hidden, while the text already matches, or while a
    /// previous swap is still in flight.
    pub fn refresh(&mut self, text: &str) {
        if !self.visible || self.text == text || self.is_swapping() {
            return;
        }
        self.animation = Some(PromptAnimation::SwapOut {
            tween: Tween::new(self.alpha, 0.0, TEXT_SWAP_DURATION, Ease::InOutQuad),
            next_text: text.to_string(),
        });
    }

    /// Advance the active animation
    pub fn update(&mut self, dt: f32) {
        let Some(animation) = self.animation.take() else {
            return;
        };

        self.animation = match animation {
            PromptAnimation::Fade(mut tween) => {
                self.alpha = tween.update(dt);
                if tween.finished() {
                    None
                } else {
                    Some(PromptAnimation::Fade(tween))
                }
            }
            PromptAnimation::SwapOut {
                mut tween,
                next_text,
            } => {
                self.alpha = tween.update(dt);
                if tween.finished() {
                    self.text = next_text;
                    Some(PromptAnimation::SwapIn(Tween::new(
                        0.0,
                        1.0,
                        TEXT_SWAP_DURATION,
                        Ease::InOutQuad,
                    )))
                } else {
                    Some(PromptAnimation::SwapOut { tween, next_text })
                }
            }
            PromptAnimation::SwapIn(mut tween) => {
                self.alpha = tween.update(dt);
                if tween.finished() {
                    None
                } else {
                    Some(PromptAnimation::SwapIn(tween))
                }
            }
        };
    }

    /// Current prompt text (empty while hidden)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current opacity in [0, 1]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether the prompt is logically shown (independent of fade progress)
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_swapping(&self) -> bool {
        matches!(
            self.animation,
            Some(PromptAnimation::SwapOut { .. }) | Some(PromptAnimation::SwapIn(_))
        )
    }
}
