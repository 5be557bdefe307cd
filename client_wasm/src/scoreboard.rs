//! Score text shown next to the canvas

use game_core::Score;

pub const PLAYER_SCORE_ID: &str = "playerScore";
pub const COMPUTER_SCORE_ID: &str = "computerScore";

pub fn player_label(score: &Score) -> String {
    format!("Player: {}", score.left)
}

pub fn computer_label(score: &Score) -> String {
    format!("Computer: {}", score.right)
}

/// Writes the score into two DOM elements
#[cfg(target_arch = "wasm32")]
pub struct DomScoreboard {
    document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl DomScoreboard {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.document.get_element_by_id(id) {
            Some(element) => element.set_text_content(Some(text)),
            None => tracing::warn!(id, "Score element missing"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl game_core::Scoreboard for DomScoreboard {
    fn show(&mut self, score: &Score) {
        self.set_text(PLAYER_SCORE_ID, &player_label(score));
        self.set_text(COMPUTER_SCORE_ID, &computer_label(score));
    }
}
