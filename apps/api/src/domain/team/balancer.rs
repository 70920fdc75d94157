//! Splits an outing roster into balanced teams.
//!
//! Members are grouped by gender, each group is ordered best score first,
//! and the groups are dealt across the teams in snake order
//! (`1, 2, .., n, n, .., 2, 1, 1, 2, ..`). Dealing continues across group
//! boundaries, so strong players and each gender spread over all teams.
//!
//! When the roster does not divide evenly, the final partial round is dealt
//! forward: the earliest teams receive one extra member, whatever the
//! gender of the players left over.

use super::team::Team;
use crate::domain::participant::{Gender, Participant};

/// Players per team when the caller does not choose
pub const DEFAULT_TEAM_SIZE: usize = 4;

/// Balances `participants` into teams of at most `team_size` members
///
/// Every participant lands in exactly one team, team sizes differ by at
/// most one and teams are numbered from 1. An empty roster yields no teams
/// and a `team_size` of zero is treated as one. The result depends only on
/// the input, including its order.
///
/// # Example
/// ```
/// use golfjoin_api::domain::participant::{Gender, Participant};
/// use golfjoin_api::domain::team::balancer::balance_teams;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let roster: Vec<Participant> = (0..5)
///     .map(|i| {
///         let score = Some(Decimal::from(80 + i * 5));
///         Participant::new(Uuid::new_v4(), None, Gender::Male, score, i as u32)
///     })
///     .collect();
///
/// let teams = balance_teams(&roster, 4);
/// assert_eq!(teams.len(), 2);
/// assert_eq!(teams[0].members.len(), 3);
/// assert_eq!(teams[1].members.len(), 2);
/// ```
pub fn balance_teams(participants: &[Participant], team_size: usize) -> Vec<Team> {
    if participants.is_empty() {
        return Vec::new();
    }

    let team_size = team_size.max(1);
    let team_count = participants.len().div_ceil(team_size);
    let full_rounds = participants.len() / team_count;

    let mut rosters: Vec<Vec<Participant>> = vec![Vec::new(); team_count];
    for (index, participant) in dealing_order(participants).into_iter().enumerate() {
        let slot = snake_slot(index, team_count, full_rounds);
        rosters[slot].push(participant.clone());
    }

    rosters
        .into_iter()
        .filter(|members| !members.is_empty())
        .zip(1u32..)
        .map(|(members, team_number)| Team::new(team_number, members))
        .collect()
}

/// Male, female, then other members, each best score first
fn dealing_order(participants: &[Participant]) -> Vec<&Participant> {
    let mut male = Vec::new();
    let mut female = Vec::new();
    let mut other = Vec::new();

    for participant in participants {
        match participant.gender {
            Gender::Male => male.push(participant),
            Gender::Female => female.push(participant),
            Gender::Other => other.push(participant),
        }
    }

    let mut order = Vec::with_capacity(participants.len());
    for mut bucket in [male, female, other] {
        // stable: equal score and registration keep their input order
        bucket.sort_by_key(|p| (p.effective_score(), p.registration_order));
        order.extend(bucket);
    }
    order
}

fn snake_slot(index: usize, team_count: usize, full_rounds: usize) -> usize {
    let round = index / team_count;
    let position = index % team_count;

    if round < full_rounds && round % 2 == 1 {
        team_count - 1 - position
    } else {
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn player(gender: Gender, score: Option<i64>, order: u32) -> Participant {
        Participant::new(
            Uuid::new_v4(),
            Some(format!("player-{order}")),
            gender,
            score.map(Decimal::from),
            order,
        )
    }

    fn roster(size: usize) -> Vec<Participant> {
        (0..size)
            .map(|i| {
                let gender = match i % 3 {
                    0 => Gender::Male,
                    1 => Gender::Female,
                    _ => Gender::Other,
                };
                player(gender, Some(70 + (i as i64 * 7) % 30), i as u32)
            })
            .collect()
    }

    fn scores(team: &Team) -> Vec<i64> {
        team.members
            .iter()
            .map(|m| m.effective_score().to_i64().unwrap())
            .collect()
    }

    #[test]
    fn empty_roster_yields_no_teams() {
        assert!(balance_teams(&[], DEFAULT_TEAM_SIZE).is_empty());
    }

    #[test]
    fn small_roster_forms_a_single_team() {
        for size in 1..=DEFAULT_TEAM_SIZE {
            let teams = balance_teams(&roster(size), DEFAULT_TEAM_SIZE);
            assert_eq!(teams.len(), 1);
            assert_eq!(teams[0].members.len(), size);
            assert_eq!(teams[0].team_number, 1);
        }
    }

    #[test]
    fn every_participant_is_assigned_exactly_once() {
        for size in 0..40 {
            for team_size in 1..7 {
                let input = roster(size);
                let teams = balance_teams(&input, team_size);

                let assigned: Vec<Uuid> = teams
                    .iter()
                    .flat_map(|t| t.members.iter().map(|m| m.user_id))
                    .collect();
                let unique: HashSet<Uuid> = assigned.iter().copied().collect();

                assert_eq!(assigned.len(), size);
                assert_eq!(unique.len(), size);
                assert!(input.iter().all(|p| unique.contains(&p.user_id)));
            }
        }
    }

    #[test]
    fn team_sizes_differ_by_at_most_one() {
        for size in 1..40 {
            for team_size in 1..7 {
                let teams = balance_teams(&roster(size), team_size);

                assert_eq!(teams.len(), size.div_ceil(team_size));
                let floor = size / teams.len();
                let ceil = size.div_ceil(teams.len());
                for team in &teams {
                    assert!(team.members.len() == floor || team.members.len() == ceil);
                    assert!(team.members.len() <= team_size);
                }
            }
        }
    }

    #[test]
    fn extra_members_go_to_the_earliest_teams() {
        let teams = balance_teams(&roster(10), 4);

        let sizes: Vec<usize> = teams.iter().map(|t| t.members.len()).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
    }

    #[test]
    fn five_players_split_three_and_two() {
        let teams = balance_teams(&roster(5), 4);

        let sizes: Vec<usize> = teams.iter().map(|t| t.members.len()).collect();
        assert_eq!(sizes, vec![3, 2]);
    }

    #[test]
    fn teams_are_numbered_sequentially_from_one() {
        let teams = balance_teams(&roster(13), 4);

        let numbers: Vec<u32> = teams.iter().map(|t| t.team_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn same_input_gives_same_output() {
        let input = roster(17);

        assert_eq!(balance_teams(&input, 4), balance_teams(&input, 4));
    }

    #[test]
    fn mixed_foursomes_are_balanced() {
        let mut input = Vec::new();
        for (i, score) in [80, 85, 90, 95].into_iter().enumerate() {
            input.push(player(Gender::Male, Some(score), i as u32));
        }
        for (i, score) in [82, 88, 92, 98].into_iter().enumerate() {
            input.push(player(Gender::Female, Some(score), 4 + i as u32));
        }

        let teams = balance_teams(&input, 4);

        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|t| t.members.len() == 4));
        assert!((teams[0].average_score - teams[1].average_score).abs() <= 5);

        for team in &teams {
            let males = team.members.iter().filter(|m| m.gender == Gender::Male).count();
            assert_eq!(males, 2);
            // each team gets at least one of the four strongest players
            assert!(scores(team).iter().any(|s| [80, 82, 85, 88].contains(s)));
        }
    }

    #[test]
    fn single_gender_roster_mixes_skill_levels() {
        let input: Vec<Participant> = [70, 75, 80, 85, 90, 95]
            .into_iter()
            .enumerate()
            .map(|(i, score)| player(Gender::Male, Some(score), i as u32))
            .collect();

        let teams = balance_teams(&input, 3);

        assert_eq!(teams.len(), 2);
        assert_eq!(scores(&teams[0]), vec![70, 85, 90]);
        assert_eq!(scores(&teams[1]), vec![75, 80, 95]);
        assert_eq!(teams[0].average_score, 82);
        assert_eq!(teams[1].average_score, 83);
    }

    #[test]
    fn equal_scores_break_ties_on_registration_order() {
        let late = player(Gender::Male, Some(80), 9);
        let early = player(Gender::Male, Some(80), 2);

        let teams = balance_teams(&[late.clone(), early.clone()], 1);

        assert_eq!(teams[0].members[0].user_id, early.user_id);
        assert_eq!(teams[1].members[0].user_id, late.user_id);
    }

    #[test]
    fn missing_scores_are_ranked_as_ninety() {
        let unknown = player(Gender::Female, None, 0);
        let strong = player(Gender::Female, Some(85), 1);
        let weak = player(Gender::Female, Some(95), 2);

        let teams = balance_teams(&[weak.clone(), unknown.clone(), strong.clone()], 1);

        let order: Vec<Uuid> = teams.iter().map(|t| t.members[0].user_id).collect();
        assert_eq!(order, vec![strong.user_id, unknown.user_id, weak.user_id]);
    }

    #[test]
    fn zero_team_size_is_treated_as_one() {
        let teams = balance_teams(&roster(3), 0);

        assert_eq!(teams.len(), 3);
        assert!(teams.iter().all(|t| t.members.len() == 1));
    }

    #[test]
    fn genders_are_spread_across_teams() {
        let mut input = Vec::new();
        for i in 0..4 {
            input.push(player(Gender::Female, Some(80 + i), i as u32));
        }
        for i in 0..8 {
            input.push(player(Gender::Male, Some(80 + i), 10 + i as u32));
        }

        let teams = balance_teams(&input, 4);

        assert_eq!(teams.len(), 3);
        for team in &teams {
            let females = team.members.iter().filter(|m| m.gender == Gender::Female).count();
            assert!((1..=2).contains(&females));
        }
    }
}
