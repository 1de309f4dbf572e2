//! Player identities configured at session start.

use super::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One selectable player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GlyphOption {
    /// The symbol drawn on the board.
    pub glyph: &'static str,
    /// Short name shown next to the symbol while choosing.
    pub label: &'static str,
}

const FIRST_GLYPHS: [GlyphOption; 4] = [
    GlyphOption { glyph: "❌", label: "X" },
    GlyphOption { glyph: "🔥", label: "Fire" },
    GlyphOption { glyph: "⭐", label: "Star" },
    GlyphOption { glyph: "🎯", label: "Target" },
];

const SECOND_GLYPHS: [GlyphOption; 4] = [
    GlyphOption { glyph: "⭕", label: "O" },
    GlyphOption { glyph: "💧", label: "Water" },
    GlyphOption { glyph: "💎", label: "Diamond" },
    GlyphOption { glyph: "🎪", label: "Circus" },
];

impl Mark {
    /// Glyphs offered to the player holding this mark. The first is the default.
    pub fn glyph_options(self) -> &'static [GlyphOption] {
        match self {
            Mark::First => &FIRST_GLYPHS,
            Mark::Second => &SECOND_GLYPHS,
        }
    }

    /// Default glyph for this mark.
    pub fn default_glyph(self) -> &'static str {
        self.glyph_options()[0].glyph
    }

    /// Name used before a player has entered one.
    pub fn default_name(self) -> &'static str {
        match self {
            Mark::First => "Player 1",
            Mark::Second => "Player 2",
        }
    }
}

/// Mutable player settings collected during setup.
///
/// Handed to [`Engine::start_round`](super::Engine::start_round), which
/// validates it and freezes it into a [`Player`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(into)]
pub struct PlayerSetup {
    /// Name entered for the player.
    pub display_name: String,
    /// Symbol the player draws with.
    pub glyph: String,
}

impl PlayerSetup {
    /// Creates setup values with the given name and the mark's default glyph.
    #[instrument(skip(display_name))]
    pub fn new(mark: Mark, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            glyph: mark.default_glyph().to_string(),
        }
    }

    /// Setup values a fresh form starts from.
    pub fn default_for(mark: Mark) -> Self {
        Self::new(mark, mark.default_name())
    }
}

/// A configured player. Immutable for the duration of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Player {
    /// The mark this player places.
    mark: Mark,
    /// Trimmed, non-empty display name.
    display_name: String,
    /// Symbol the player draws with.
    glyph: String,
}

impl Player {
    /// Validates setup values and binds them to `mark`.
    ///
    /// Returns `None` when the name is empty after trimming.
    pub(crate) fn from_setup(mark: Mark, setup: PlayerSetup) -> Option<Self> {
        let name = setup.display_name.trim();
        if name.is_empty() {
            return None;
        }
        let glyph = match setup.glyph.trim() {
            "" => mark.default_glyph().to_string(),
            g => g.to_string(),
        };
        Some(Self {
            mark,
            display_name: name.to_string(),
            glyph,
        })
    }
}

/// The two configured players of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Players {
    /// Holder of [`Mark::First`].
    first: Player,
    /// Holder of [`Mark::Second`].
    second: Player,
}

impl Players {
    pub(crate) fn new(first: Player, second: Player) -> Self {
        Self { first, second }
    }

    /// The player holding `mark`.
    pub fn get(&self, mark: Mark) -> &Player {
        match mark {
            Mark::First => &self.first,
            Mark::Second => &self.second,
        }
    }
}
