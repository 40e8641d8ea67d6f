//! Candidate Generator — fabricates ranked candidate records from the fixed pools.
//!
//! The random source is injected, so a seeded `StdRng` reproduces a run exactly.
//! Output is always sorted descending by `match_score`, ties in generation order.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::generation::pools::{EDUCATION, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES, SKILLS};
use crate::models::{BiasMetrics, Candidate};

pub const MIN_MATCH_SCORE: i32 = 30;
pub const MAX_MATCH_SCORE: i32 = 98;
pub const MIN_SKILLS: usize = 4;
pub const MAX_SKILLS: usize = 8;
pub const MIN_EXPERIENCE: i32 = 1;
pub const MAX_EXPERIENCE: i32 = 15;

const BIAS_FLOOR: f64 = 5.0;
const BIAS_JITTER: i32 = 10;
const TOKEN_LEN: usize = 9;
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RESUME_URL_PREFIX: &str = "https://example.com/resumes/";

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

pub struct CandidateGenerator<R> {
    rng: R,
}

impl<R: Rng> CandidateGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns exactly `count` candidates, sorted descending by match score.
    pub fn generate(&mut self, count: usize) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> =
            (0..count).map(|_| self.generate_candidate()).collect();

        // stable: equal scores keep generation order
        candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        debug!("Generated {} candidates", candidates.len());
        candidates
    }

    /// Builds one candidate. Draw order is fixed so seeded runs are reproducible.
    pub fn generate_candidate(&mut self) -> Candidate {
        let first = pick(&mut self.rng, FIRST_NAMES);
        let last = pick(&mut self.rng, LAST_NAMES);
        let domain = pick(&mut self.rng, EMAIL_DOMAINS);
        let id = random_token(&mut self.rng);
        let match_score = self.rng.random_range(MIN_MATCH_SCORE..=MAX_MATCH_SCORE);
        let bias_metrics = jittered_bias_metrics(&mut self.rng, match_score);
        let skills = random_skills(&mut self.rng);
        let experience = self.rng.random_range(MIN_EXPERIENCE..=MAX_EXPERIENCE);
        let education = pick(&mut self.rng, EDUCATION);
        let resume_token = random_token(&mut self.rng);

        Candidate {
            id,
            name: format!("{first} {last}"),
            email: email_for(first, last, domain),
            resume_url: format!("{RESUME_URL_PREFIX}{resume_token}.pdf"),
            match_score,
            skills,
            experience,
            education: education.to_string(),
            bias_metrics,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bias model
// ────────────────────────────────────────────────────────────────────────────

/// Unjittered bias baseline: `max(5, 50 - match_score / 2)`.
/// Higher match scores give a lower baseline.
pub fn baseline_bias(match_score: i32) -> f64 {
    (50.0 - f64::from(match_score) / 2.0).max(BIAS_FLOOR)
}

/// `overall` tracks the baseline only, never the jittered sub-metrics.
pub fn overall_bias(match_score: i32) -> i32 {
    round_half_up(baseline_bias(match_score))
}

/// Sub-metrics get independent jitter in [-10, 10] and are NOT clamped, so
/// a metric can land slightly below 0.
fn jittered_bias_metrics<R: Rng>(rng: &mut R, match_score: i32) -> BiasMetrics {
    let base = baseline_bias(match_score);
    let mut jitter = || f64::from(rng.random_range(-BIAS_JITTER..=BIAS_JITTER));

    BiasMetrics {
        gender: round_half_up(base + jitter()),
        ethnicity: round_half_up(base + jitter()),
        age: round_half_up(base + jitter()),
        overall: round_half_up(base),
    }
}

/// Rounds .5 toward positive infinity (15.5 → 16, -4.5 → -4).
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

// ────────────────────────────────────────────────────────────────────────────
// Field helpers
// ────────────────────────────────────────────────────────────────────────────

pub fn email_for(first: &str, last: &str, domain: &str) -> String {
    format!("{}.{}@{}", first.to_lowercase(), last.to_lowercase(), domain)
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    // pools are non-empty constants
    pool.choose(rng).copied().unwrap_or_default()
}

fn random_token<R: Rng>(rng: &mut R) -> String {
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Shuffles the pool and keeps a prefix of 4–8 entries, so no duplicates.
fn random_skills<R: Rng>(rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = SKILLS.to_vec();
    pool.shuffle(rng);
    let count = rng.random_range(MIN_SKILLS..=MAX_SKILLS);
    pool.into_iter().take(count).map(str::to_string).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn generate_seeded(seed: u64, count: usize) -> Vec<Candidate> {
        CandidateGenerator::new(StdRng::seed_from_u64(seed)).generate(count)
    }

    #[test]
    fn test_generate_returns_exact_count() {
        for count in [0, 1, 5, 37, 200] {
            assert_eq!(generate_seeded(7, count).len(), count);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate_seeded(1, 0).is_empty());
    }

    #[test]
    fn test_fields_stay_in_bounds() {
        for candidate in generate_seeded(11, 500) {
            assert!((MIN_MATCH_SCORE..=MAX_MATCH_SCORE).contains(&candidate.match_score));
            assert!((MIN_EXPERIENCE..=MAX_EXPERIENCE).contains(&candidate.experience));
            assert!((MIN_SKILLS..=MAX_SKILLS).contains(&candidate.skills.len()));

            let distinct: HashSet<_> = candidate.skills.iter().collect();
            assert_eq!(distinct.len(), candidate.skills.len(), "duplicate skill");
            assert!(candidate.skills.iter().all(|s| SKILLS.contains(&s.as_str())));
            assert!(EDUCATION.contains(&candidate.education.as_str()));
        }
    }

    #[test]
    fn test_sorted_descending_by_match_score() {
        let candidates = generate_seeded(3, 100);
        assert!(candidates
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score));
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let mut rng = StdRng::seed_from_u64(57);
        let mut manual = CandidateGenerator::new(&mut rng);
        let mut expected: Vec<Candidate> =
            (0..200).map(|_| manual.generate_candidate()).collect();
        expected.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        let generated = generate_seeded(57, 200);
        // 200 draws over 69 scores guarantee ties
        let expected_ids: Vec<&str> = expected.iter().map(|c| c.id.as_str()).collect();
        let generated_ids: Vec<&str> = generated.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(generated_ids, expected_ids);
    }

    #[test]
    fn test_email_derives_from_name() {
        for candidate in generate_seeded(19, 200) {
            let (first, last) = candidate.name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));

            let (local, domain) = candidate.email.split_once('@').unwrap();
            assert_eq!(local, format!("{}.{}", first.to_lowercase(), last.to_lowercase()));
            assert!(EMAIL_DOMAINS.contains(&domain));
        }
    }

    #[test]
    fn test_overall_is_pure_function_of_match_score() {
        for candidate in generate_seeded(23, 300) {
            assert_eq!(
                candidate.bias_metrics.overall,
                overall_bias(candidate.match_score)
            );
        }
    }

    #[test]
    fn test_sub_metrics_within_jitter_of_baseline() {
        for candidate in generate_seeded(29, 300) {
            let base = baseline_bias(candidate.match_score);
            let m = candidate.bias_metrics;
            for value in [m.gender, m.ethnicity, m.age] {
                assert!((f64::from(value) - base).abs() <= 10.5, "{value} vs {base}");
            }
        }
    }

    #[test]
    fn test_sub_metrics_are_not_clamped() {
        let candidates = generate_seeded(61, 2000);
        let negative = candidates
            .iter()
            .flat_map(|c| [c.bias_metrics.gender, c.bias_metrics.ethnicity, c.bias_metrics.age])
            .filter(|&v| v < 0)
            .count();
        assert!(negative > 0, "expected some sub-metric below 0");

        // a baseline of 9.5 or more cannot drop below zero with jitter >= -10
        for c in &candidates {
            let m = c.bias_metrics;
            if m.gender.min(m.ethnicity).min(m.age) < 0 {
                assert!(c.match_score >= 82, "score {}", c.match_score);
            }
        }
    }

    #[test]
    fn test_baseline_bias_formula() {
        assert_eq!(baseline_bias(30), 35.0);
        assert_eq!(baseline_bias(69), 15.5);
        assert_eq!(baseline_bias(90), 5.0);
        // floor kicks in above 90
        assert_eq!(baseline_bias(98), 5.0);
    }

    #[test]
    fn test_overall_rounds_half_up() {
        assert_eq!(overall_bias(69), 16);
        assert_eq!(overall_bias(31), 35);
        assert_eq!(overall_bias(98), 5);
    }

    #[test]
    fn test_round_half_up_on_negatives() {
        assert_eq!(round_half_up(-4.5), -4);
        assert_eq!(round_half_up(-5.0), -5);
        assert_eq!(round_half_up(2.4), 2);
    }

    #[test]
    fn test_ids_and_urls_are_tokens() {
        for candidate in generate_seeded(31, 50) {
            assert_eq!(candidate.id.len(), TOKEN_LEN);
            assert!(candidate
                .id
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
            assert!(candidate.resume_url.starts_with(RESUME_URL_PREFIX));
            assert!(candidate.resume_url.ends_with(".pdf"));
        }
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        assert_eq!(generate_seeded(42, 10), generate_seeded(42, 10));
    }

    #[test]
    fn test_different_seeds_have_disjoint_ids() {
        let a = generate_seeded(1001, 5);
        let b = generate_seeded(2002, 5);
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), 5);
        for run in [&a, &b] {
            assert!(run.windows(2).all(|p| p[0].match_score >= p[1].match_score));
        }
        let ids: HashSet<_> = a.iter().map(|c| c.id.as_str()).collect();
        assert!(b.iter().all(|c| !ids.contains(c.id.as_str())));
    }

    #[test]
    fn test_email_for_lowercases() {
        assert_eq!(email_for("Wei", "Chen", "company.com"), "wei.chen@company.com");
    }
}
