//! UI sink.
//!
//! The race core does not draw anything. It publishes what the UI should
//! show through [`UiPanels`] and the UI layer renders it.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UiPhase {
    /// Waiting for the player to start.
    #[default]
    Begin,
    Gameplay,
    Win,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiPanels {
    pub phase: UiPhase,
    pub painting_panel: bool,
    pub sorting_panel: bool,
    /// Rank of the controlled actor, formatted for display.
    pub rank_text: String,
}

impl UiPanels {
    pub fn show_painting(&mut self) {
        self.painting_panel = true;
        self.sorting_panel = false;
    }

    pub fn show_sorting(&mut self) {
        self.painting_panel = false;
        self.sorting_panel = true;
    }

    pub fn set_rank(&mut self, rank: usize) {
        let text = rank.to_string();
        if self.rank_text != text {
            self.rank_text = text;
        }
    }
}
