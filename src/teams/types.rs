use serde::{Deserialize, Serialize};

use crate::stats_source::TeamSummary;

/// Team standings row served to the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub team_name: String,
    pub goals_for: u32,
    #[serde(rename = "goalsForPG")]
    pub goals_for_pg: f64,
    pub goals_against: u32,
    #[serde(rename = "shotsForPG")]
    pub shots_for_pg: f64,
    #[serde(rename = "shotsAgainstPG")]
    pub shots_against_pg: f64,
    #[serde(rename = "goalsAgainstPG")]
    pub goals_against_pg: f64,
    pub wins: u32,
    pub regulation_wins: u32,
    pub shootout_wins: u32,
    pub losses: u32,
    pub ot_losses: u32,
    pub points: u32,
}

impl From<TeamSummary> for TeamStats {
    fn from(team: TeamSummary) -> Self {
        Self {
            team_name: team.team_full_name,
            goals_for: team.goals_for,
            goals_for_pg: team.goals_for_per_game,
            goals_against: team.goals_against,
            shots_for_pg: team.shots_for_per_game,
            shots_against_pg: team.shots_against_per_game,
            goals_against_pg: team.goals_against_per_game,
            wins: team.wins,
            regulation_wins: team.wins_in_regulation,
            shootout_wins: team.wins_in_shootout,
            losses: team.losses,
            ot_losses: team.ot_losses,
            points: team.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_upstream_team_summary() {
        let summary: TeamSummary = serde_json::from_value(serde_json::json!({
            "teamFullName": "Montréal Canadiens",
            "teamId": 8,
            "goalsFor": 236,
            "goalsForPerGame": 2.878,
            "goalsAgainst": 289,
            "goalsAgainstPerGame": 3.524,
            "shotsForPerGame": 28.4,
            "shotsAgainstPerGame": 32.1,
            "wins": 30,
            "winsInRegulation": 22,
            "winsInShootout": 3,
            "losses": 36,
            "otLosses": 16,
            "points": 76
        }))
        .unwrap();

        let json = serde_json::to_value(TeamStats::from(summary)).unwrap();
        assert_eq!(json["teamName"], "Montréal Canadiens");
        assert_eq!(json["goalsForPG"], 2.878);
        assert_eq!(json["shotsAgainstPG"], 32.1);
        assert_eq!(json["regulationWins"], 22);
        assert_eq!(json["shootoutWins"], 3);
        assert_eq!(json["otLosses"], 16);
        assert_eq!(json["points"], 76);
    }
}
