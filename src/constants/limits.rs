//! Sizing knobs for prompt assembly, ranking, and sampling.
//!
//! The completion service has an undocumented input-size ceiling; the
//! per-section character caps below are what keep an assembled prompt under
//! it. They are tuned values, not derived ones; change with care.

/// How many of the most recent materials are excerpted into the baseline
/// context of a fresh conversation.
pub const BASELINE_MATERIAL_COUNT: i64 = 5;

/// Per-material excerpt cap inside the baseline context.
pub const BASELINE_EXCERPT_CHARS: usize = 2000;

/// How many prior messages are replayed into each prompt.
pub const HISTORY_MESSAGE_COUNT: i64 = 3;

/// Tutor answers run long, so they are truncated harder than student turns.
pub const TUTOR_HISTORY_CHARS: usize = 400;
pub const STUDENT_HISTORY_CHARS: usize = 800;

/// Candidate pool for relevance ranking: most recent materials with content.
pub const RANKING_CANDIDATE_LIMIT: i64 = 10;

/// A question word found in a title outweighs one found in the body.
pub const TITLE_MATCH_WEIGHT: i64 = 10;
pub const BODY_MATCH_WEIGHT: i64 = 1;

/// Body matching only scans this prefix; full-body scans are not worth it.
pub const BODY_SCAN_CHARS: usize = 3000;

/// Question words shorter than this are treated as noise.
pub const MIN_QUESTION_WORD_LEN: usize = 3;

/// Width of the snippet window centered on the first matched word.
pub const SNIPPET_WINDOW_CHARS: usize = 150;

/// Citations injected per prompt, and the excerpt cap for each.
pub const CITATION_LIMIT: usize = 3;
pub const CITATION_EXCERPT_CHARS: usize = 1200;

/// Source-material cap for quiz generation prompts.
pub const QUIZ_SOURCE_EXCERPT_CHARS: usize = 6000;

/// Questions handed to a student per quiz round.
pub const QUIZ_SAMPLE_SIZE: usize = 3;

/// Generated questions must come with exactly this many options.
pub const QUIZ_OPTION_COUNT: usize = 4;
