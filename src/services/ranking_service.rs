use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::limits::{
        BODY_MATCH_WEIGHT, BODY_SCAN_CHARS, CITATION_EXCERPT_CHARS, MIN_QUESTION_WORD_LEN,
        RANKING_CANDIDATE_LIMIT, SNIPPET_WINDOW_CHARS, TITLE_MATCH_WEIGHT,
    },
    errors::AppResult,
    models::domain::{CourseMaterial, RankedCitation},
    repositories::MaterialRepository,
    services::text_helpers::{truncate_chars, window_around},
};

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("word pattern is a valid regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "are", "was", "were", "will", "can", "does", "did", "has", "have",
        "had", "this", "that", "these", "those", "what", "when", "where", "which", "who", "whom",
        "why", "how", "about", "into", "over", "under", "with", "from", "they", "them", "their",
        "its", "his", "her", "our", "your", "you", "not", "but", "all", "any", "out", "get",
        "there", "here", "than", "then", "too", "very", "just", "should", "would", "could",
    ]
    .into_iter()
    .collect()
});

/// Cheap lexical ranking of course materials against a question. Title
/// matches dominate body matches, the candidate set and the body scan are
/// both bounded, and no external search dependency is involved.
pub struct RankingService {
    materials: Arc<dyn MaterialRepository>,
}

impl RankingService {
    pub fn new(materials: Arc<dyn MaterialRepository>) -> Self {
        Self { materials }
    }

    /// Top `limit` citations for the question, score descending. Ties keep
    /// the candidate order, which is recency order.
    pub async fn rank(
        &self,
        course_id: &str,
        question: &str,
        limit: usize,
    ) -> AppResult<Vec<RankedCitation>> {
        let words = question_words(question);
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let mut citations: Vec<RankedCitation> = self
            .candidates(course_id)
            .await?
            .iter()
            .filter_map(|material| {
                let content = material.content.as_deref()?;
                let score = score_material(&material.title, content, &words);
                if score == 0 {
                    return None;
                }
                Some(RankedCitation {
                    title: material.title.clone(),
                    file_url: material.file_url.clone(),
                    snippet: snippet(content, &words),
                    score,
                    excerpt: truncate_chars(content, CITATION_EXCERPT_CHARS),
                })
            })
            .collect();

        citations.sort_by(|a, b| b.score.cmp(&a.score));
        citations.truncate(limit);

        log::debug!(
            "ranked {} citation(s) for course {} question words {:?}",
            citations.len(),
            course_id,
            words
        );

        Ok(citations)
    }

    /// The single best-matching material, used to pick a quiz source by topic.
    pub async fn best_match(
        &self,
        course_id: &str,
        query: &str,
    ) -> AppResult<Option<CourseMaterial>> {
        let words = question_words(query);
        if words.is_empty() {
            return Ok(None);
        }

        let mut scored: Vec<(i64, CourseMaterial)> = self
            .candidates(course_id)
            .await?
            .into_iter()
            .filter_map(|material| {
                let score = material
                    .content
                    .as_deref()
                    .map(|content| score_material(&material.title, content, &words))
                    .unwrap_or(0);
                (score > 0).then_some((score, material))
            })
            .collect();

        // Stable sort: ties keep recency order, same as rank().
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored.into_iter().next().map(|(_, material)| material))
    }

    async fn candidates(&self, course_id: &str) -> AppResult<Vec<CourseMaterial>> {
        self.materials
            .list_recent_with_content(course_id, RANKING_CANDIDATE_LIMIT)
            .await
    }
}

/// Distinct lowercased question words, stop words and short noise removed,
/// original order preserved.
pub fn question_words(question: &str) -> Vec<String> {
    let lowered = question.to_lowercase();
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for found in WORD_PATTERN.find_iter(&lowered) {
        let word = found.as_str();
        if word.len() < MIN_QUESTION_WORD_LEN || STOP_WORDS.contains(word) {
            continue;
        }
        if seen.insert(word.to_string()) {
            words.push(word.to_string());
        }
    }

    words
}

/// Score one material against the question words. Only a bounded prefix of
/// the body is scanned.
pub fn score_material(title: &str, body: &str, words: &[String]) -> i64 {
    let title_lowered = title.to_lowercase();
    let body_prefix: String = body
        .to_lowercase()
        .chars()
        .take(BODY_SCAN_CHARS)
        .collect();

    let mut score = 0;
    for word in words {
        if title_lowered.contains(word.as_str()) {
            score += TITLE_MATCH_WEIGHT;
        }
        if body_prefix.contains(word.as_str()) {
            score += BODY_MATCH_WEIGHT;
        }
    }
    score
}

/// Fixed-width window around the first question word found in the body. The
/// prefix of the body is the fallback, though a scored material always has a
/// match somewhere.
pub fn snippet(body: &str, words: &[String]) -> String {
    let body_lowered = body.to_lowercase();
    for word in words {
        if let Some(position) = body_lowered.find(word.as_str()) {
            return window_around(body, position, SNIPPET_WINDOW_CHARS);
        }
    }
    truncate_chars(body, SNIPPET_WINDOW_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::course_material_repository::MockMaterialRepository;

    fn material(title: &str, content: &str) -> CourseMaterial {
        CourseMaterial::new("c1", title, Some(content.to_string()), None)
    }

    #[test]
    fn question_words_drop_stop_words_short_words_and_duplicates() {
        let words = question_words("When is the midterm? Is the midterm in BYENG?");
        assert_eq!(words, vec!["midterm".to_string(), "byeng".to_string()]);
    }

    #[test]
    fn one_title_word_outranks_three_body_words() {
        let words = question_words("tcp congestion window sizing");

        // One matching word in the title only.
        let title_score = score_material("TCP Basics", "nothing relevant here", &words);
        // Three matching words in the body only.
        let body_score = score_material(
            "Lecture 4",
            "congestion control adjusts the window based on tcp feedback",
            &words,
        );

        assert_eq!(title_score, 10);
        assert_eq!(body_score, 3);
        assert!(title_score > body_score);
    }

    #[test]
    fn word_in_title_and_body_scores_both_weights() {
        let words = question_words("explain the midterm");
        let score = score_material("Midterm Review", "the midterm covers chapters 1-3", &words);
        assert_eq!(score, 11);
    }

    #[test]
    fn body_matches_outside_the_scan_prefix_do_not_score() {
        let words = question_words("capstone grading");
        let mut body = "x".repeat(BODY_SCAN_CHARS);
        body.push_str(" capstone grading rules");

        assert_eq!(score_material("Lecture 9", &body, &words), 0);
    }

    #[test]
    fn snippet_contains_the_matched_word_and_is_bounded() {
        let words = question_words("when is the midterm");
        let body = format!("{} the midterm is on 9/24 {}", "a ".repeat(200), "b ".repeat(200));

        let snippet = snippet(&body, &words);
        assert!(snippet.contains("midterm"));
        assert!(snippet.chars().count() <= SNIPPET_WINDOW_CHARS);
    }

    #[test]
    fn snippet_falls_back_to_the_body_prefix() {
        let words = question_words("quantum entanglement");
        let snippet = snippet("syllabus for a networks course", &words);
        assert!(snippet.starts_with("syllabus"));
    }

    #[tokio::test]
    async fn rank_is_deterministic_and_orders_by_score() {
        let materials = vec![
            material("Lecture1", "link layer framing and ethernet"),
            material(
                "Syllabus",
                "CSE 434 Computer Networks. The midterm exams are on 9/24 and 10/29.",
            ),
        ];

        let mut repo = MockMaterialRepository::new();
        let cloned = materials.clone();
        repo.expect_list_recent_with_content()
            .returning(move |_, _| Ok(cloned.clone()));

        let service = RankingService::new(Arc::new(repo));

        let first = service.rank("c1", "When is the midterm?", 3).await.unwrap();
        let second = service.rank("c1", "When is the midterm?", 3).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].title, "Syllabus");
        assert!(first[0].score >= 1);
        assert!(first[0].snippet.contains("midterm"));
    }

    #[tokio::test]
    async fn rank_returns_nothing_for_stop_word_only_questions() {
        let mut repo = MockMaterialRepository::new();
        repo.expect_list_recent_with_content().never();

        let service = RankingService::new(Arc::new(repo));
        let citations = service.rank("c1", "what is the how", 3).await.unwrap();

        assert!(citations.is_empty());
    }

    #[tokio::test]
    async fn best_match_prefers_the_higher_scoring_material() {
        let materials = vec![
            material("Lecture 3", "transport layer and congestion"),
            material("Congestion Control", "details on congestion windows"),
        ];

        let mut repo = MockMaterialRepository::new();
        let cloned = materials.clone();
        repo.expect_list_recent_with_content()
            .returning(move |_, _| Ok(cloned.clone()));

        let service = RankingService::new(Arc::new(repo));
        let best = service.best_match("c1", "congestion").await.unwrap();

        assert_eq!(best.unwrap().title, "Congestion Control");
    }
}
