use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generation::pools::EXTRACTION_SKILLS;
use crate::models::JobDescription;

const MIN_EXTRACT_DRAWS: usize = 5;
const MAX_EXTRACT_DRAWS: usize = 10;
const MIN_TERM_LEN: usize = 4;
const MAX_MISSING_SKILLS: usize = 5;

/// Result of comparing one resume's skills against a job's requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMatch {
    pub match_score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Draws 5–10 times from the extraction pool, keeping first occurrences.
/// Repeated draws are discarded, so fewer than 5 skills can come back.
pub fn draw_extracted_skills<R: Rng>(rng: &mut R) -> Vec<String> {
    let draws = rng.random_range(MIN_EXTRACT_DRAWS..=MAX_EXTRACT_DRAWS);
    let mut seen = HashSet::new();
    let mut skills = Vec::with_capacity(draws);

    for _ in 0..draws {
        if let Some(skill) = EXTRACTION_SKILLS.choose(rng) {
            if seen.insert(*skill) {
                skills.push(skill.to_string());
            }
        }
    }
    skills
}

/// Capitalized words longer than three characters, across all requirements.
pub fn required_terms(job: &JobDescription) -> Vec<String> {
    job.requirements
        .iter()
        .flat_map(|req| req.split_whitespace())
        .filter(|word| word.chars().count() >= MIN_TERM_LEN)
        .filter(|word| word.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
        .map(str::to_string)
        .collect()
}

/// Deterministic part of resume matching.
///
/// - matched: skills contained (case-insensitive) in at least one required term
/// - missing: required terms that no skill contains, first five only
/// - score: `min(100, round(matched / max(1, terms) * 100))`
pub fn score_skill_match(skills: &[String], job: &JobDescription) -> ResumeMatch {
    let terms = required_terms(job);
    let terms_lower: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
    let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let matched_skills: Vec<String> = skills
        .iter()
        .zip(&skills_lower)
        .filter(|(_, lower)| terms_lower.iter().any(|t| t.contains(lower.as_str())))
        .map(|(skill, _)| skill.clone())
        .collect();

    let missing_skills: Vec<String> = terms
        .iter()
        .zip(&terms_lower)
        .filter(|(_, lower)| !skills_lower.iter().any(|s| s.contains(lower.as_str())))
        .map(|(term, _)| term.clone())
        .take(MAX_MISSING_SKILLS)
        .collect();

    let ratio = matched_skills.len() as f64 / terms.len().max(1) as f64;
    let match_score = ((ratio * 100.0).round() as u32).min(100);

    ResumeMatch {
        match_score,
        matched_skills,
        missing_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn job_with(requirements: &[&str]) -> JobDescription {
        let mut job = JobDescription::titled("Frontend Developer");
        for req in requirements {
            job.add_requirement(req);
        }
        job
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_required_terms_are_capitalized_long_words() {
        let job = job_with(&["Strong React skills", "Experience with TypeScript and CSS"]);
        assert_eq!(
            required_terms(&job),
            vec!["Strong", "React", "Experience", "TypeScript"]
        );
    }

    #[test]
    fn test_full_overlap_scores_100() {
        let job = job_with(&["React", "Redux"]);
        let report = score_skill_match(&skills(&["React", "Redux"]), &job);
        assert_eq!(report.match_score, 100);
        assert_eq!(report.matched_skills, vec!["React", "Redux"]);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_partial_overlap() {
        let job = job_with(&["Python Django Kubernetes"]);
        let report = score_skill_match(&skills(&["Python", "Ruby"]), &job);
        // 1 of 3 terms matched
        assert_eq!(report.match_score, 33);
        assert_eq!(report.matched_skills, vec!["Python"]);
        assert_eq!(report.missing_skills, vec!["Django", "Kubernetes"]);
    }

    #[test]
    fn test_skill_may_be_substring_of_term() {
        // "Java" is contained in "JavaScript"
        let job = job_with(&["JavaScript"]);
        let report = score_skill_match(&skills(&["Java"]), &job);
        assert_eq!(report.matched_skills, vec!["Java"]);
        // but the term is not contained in the skill
        assert_eq!(report.missing_skills, vec!["JavaScript"]);
    }

    #[test]
    fn test_score_is_capped_at_100() {
        // two skills both hit the single term
        let job = job_with(&["ReactRedux"]);
        let report = score_skill_match(&skills(&["React", "Redux"]), &job);
        assert_eq!(report.match_score, 100);
    }

    #[test]
    fn test_no_requirements_scores_zero() {
        let report = score_skill_match(&skills(&["Go"]), &JobDescription::titled("Engineer"));
        assert_eq!(report.match_score, 0);
        assert!(report.matched_skills.is_empty());
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_missing_skills_limited_to_five() {
        let job = job_with(&["Alpha Bravo Charlie Delta Echo Foxtrot Golf"]);
        let report = score_skill_match(&[], &job);
        assert_eq!(report.missing_skills.len(), 5);
        assert_eq!(report.missing_skills[0], "Alpha");
    }

    #[test]
    fn test_extracted_skills_are_distinct_pool_entries() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..100 {
            let drawn = draw_extracted_skills(&mut rng);
            assert!(!drawn.is_empty() && drawn.len() <= MAX_EXTRACT_DRAWS);
            let unique: HashSet<_> = drawn.iter().collect();
            assert_eq!(unique.len(), drawn.len());
            assert!(drawn.iter().all(|s| EXTRACTION_SKILLS.contains(&s.as_str())));
        }
    }
}
