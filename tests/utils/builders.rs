use puckstats::stats_source::{GameLogEntry, SkaterSummary};

// ============================================================================
// Upstream Record Builders
// ============================================================================

pub fn skater(player_id: i64, name: &str) -> SkaterSummary {
    SkaterSummary {
        player_id,
        skater_full_name: name.to_string(),
        team_abbrevs: Some("MTL".to_string()),
        position_code: Some("C".to_string()),
        games_played: 20,
        goals: 10,
        assists: 8,
        points: 18,
        shots: 60,
    }
}

/// Builds a chronological game log, one `game` call per entry.
pub struct GameLogBuilder {
    entries: Vec<GameLogEntry>,
}

impl GameLogBuilder {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    pub fn game(self, shots: u32, goals: u32, toi: &str) -> Self {
        self.game_with_power_play(shots, goals, 0, toi)
    }

    pub fn game_with_power_play(
        mut self,
        shots: u32,
        goals: u32,
        power_play_goals: u32,
        toi: &str,
    ) -> Self {
        let game_number = self.entries.len() as i64 + 1;
        self.entries.push(GameLogEntry {
            game_id: 2023020000 + game_number,
            game_date: Some(format!("2023-10-{:02}", game_number)),
            opponent_abbrev: Some("TOR".to_string()),
            goals,
            assists: 0,
            shots,
            power_play_goals: Some(power_play_goals),
            toi: Some(toi.to_string()),
        });
        self
    }

    /// Repeats the same line `count` times.
    pub fn games(mut self, count: usize, shots: u32, goals: u32, toi: &str) -> Self {
        for _ in 0..count {
            self = self.game(shots, goals, toi);
        }
        self
    }

    pub fn build(self) -> Vec<GameLogEntry> {
        self.entries
    }

    /// Same games listed latest first, as the game log endpoint may return them.
    pub fn build_newest_first(self) -> Vec<GameLogEntry> {
        let mut entries = self.entries;
        entries.reverse();
        entries
    }
}
