//! Team planner: baseline roster from raw function points, scaled per option.

use estimator_core::config::TeamConfig;
use estimator_core::models::{AiNovelty, RequirementsInput, TeamMember, TeamRole};

/// Baseline roster, in the fixed role order
/// Fullstack Dev, AI Engineer, DevOps Engineer, Mobile Dev, QA Engineer.
///
/// Sized from raw (unbuffered) function points. Counts may be zero here;
/// [`scale`] lifts every entry to at least one.
pub fn plan(input: &RequirementsInput, total_fp: f64, config: &TeamConfig) -> Vec<TeamMember> {
    let mut team = Vec::with_capacity(5);

    team.push(TeamMember::new(
        TeamRole::FullstackDev,
        per_capacity(total_fp, config.fp_per_developer),
    ));

    if input.includes_ai {
        let count = if input.ai_novelty == AiNovelty::High { 2 } else { 1 };
        team.push(TeamMember::new(TeamRole::AiEngineer, count));
    }

    if input.integrations.len() > config.devops_integration_threshold {
        team.push(TeamMember::new(TeamRole::DevOpsEngineer, 1));
    }

    if input.has_mobile() {
        let count = if input.build_types.len() > 1 { 2 } else { 1 };
        team.push(TeamMember::new(TeamRole::MobileDev, count));
    }

    team.push(TeamMember::new(
        TeamRole::QaEngineer,
        per_capacity(total_fp, config.fp_per_qa),
    ));

    team
}

/// Scale every entry by `multiplier`, rounding up, with a floor of one.
pub fn scale(team: &[TeamMember], multiplier: f64) -> Vec<TeamMember> {
    team.iter()
        .map(|m| {
            let scaled = (f64::from(m.count) * multiplier).ceil().max(1.0);
            TeamMember::new(m.role, scaled as u32)
        })
        .collect()
}

fn per_capacity(fp: f64, capacity: f64) -> u32 {
    (fp / capacity).ceil().max(0.0) as u32
}
