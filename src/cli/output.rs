//! Summary output for the `simulate` command.

use serde::Serialize;
use skirmish::game::{Faction, GameState, Outcome, TickReport};
use skirmish::render::render_frame;
use std::fmt::Write;

/// End-of-run totals for one faction.
#[derive(Debug, Serialize)]
pub(crate) struct FactionSummary {
    pub(crate) units: usize,
    pub(crate) money: u32,
    pub(crate) castle_health: i32,
    pub(crate) losses: u32,
}

impl FactionSummary {
    fn new(faction: &Faction, losses: u32) -> Self {
        Self {
            units: faction.units.len(),
            money: faction.money,
            castle_health: faction.castle.health,
            losses,
        }
    }
}

/// Running totals collected from tick reports.
#[derive(Debug, Default)]
pub(crate) struct Totals {
    hits: u64,
    player_losses: u32,
    enemy_losses: u32,
    avatar_deaths: u32,
}

impl Totals {
    /// Fold one tick into the totals.
    pub(crate) fn record(&mut self, report: &TickReport) {
        self.hits += u64::from(report.hits);
        self.player_losses = self.player_losses.saturating_add(report.player_losses);
        self.enemy_losses = self.enemy_losses.saturating_add(report.enemy_losses);
        self.avatar_deaths += u32::from(report.avatar_respawned);
    }
}

/// JSON-serializable summary of a headless run.
#[derive(Debug, Serialize)]
pub(crate) struct MatchSummary {
    pub(crate) ticks: u64,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) hits: u64,
    pub(crate) avatar_deaths: u32,
    pub(crate) player: FactionSummary,
    pub(crate) enemy: FactionSummary,
}

impl MatchSummary {
    /// Summarize the final state.
    pub(crate) fn new(state: &GameState, totals: &Totals) -> Self {
        let bounds = state.bounds();
        Self {
            ticks: state.ticks(),
            width: bounds.width(),
            height: bounds.height(),
            outcome: state.outcome(),
            hits: totals.hits,
            avatar_deaths: totals.avatar_deaths,
            player: FactionSummary::new(&state.player, totals.player_losses),
            enemy: FactionSummary::new(&state.enemy, totals.enemy_losses),
        }
    }
}

/// Format a run as human-readable text, final map included.
pub(crate) fn format_text(state: &GameState, summary: &MatchSummary) -> String {
    let mut output = render_frame(state).to_text();

    let result = match summary.outcome {
        Some(Outcome::Victory) => "victory",
        Some(Outcome::Defeat) => "defeat",
        Some(Outcome::Draw) => "draw",
        None => "undecided",
    };

    let _ = writeln!(output);
    let _ = writeln!(output, "Ticks: {}  Result: {result}", summary.ticks);
    let _ = writeln!(
        output,
        "Hits: {}  Avatar deaths: {}",
        summary.hits, summary.avatar_deaths
    );
    for (name, faction) in [("Player", &summary.player), ("Enemy", &summary.enemy)] {
        let _ = writeln!(
            output,
            "{name:<7} units: {:>3}  money: {:>4}  castle: {:>3}  losses: {}",
            faction.units, faction.money, faction.castle_health, faction.losses
        );
    }

    output
}
