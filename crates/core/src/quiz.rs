//! Quiz rules: slug generation, field validation, and the derived question
//! count that every save of an existing quiz recomputes.

use crate::error::CoreError;

/// Maximum length of a quiz title (and therefore of its slug).
pub const MAX_TITLE_LEN: usize = 60;

/// Maximum length of a generated slug.
pub const MAX_SLUG_LEN: usize = 60;

/// Highest allowed pass mark (a percentage).
pub const MAX_PASS_MARK: i16 = 100;

// ---------------------------------------------------------------------------
// Slug
// ---------------------------------------------------------------------------

/// Slug used when a title has nothing to transliterate into `[a-z0-9]`.
pub const FALLBACK_SLUG: &str = "quiz";

/// Generate a URL-safe slug from a quiz title.
///
/// Transliterates to ASCII first ("Café" -> "cafe", "Викторина" ->
/// "viktorina"), then lowercases, replaces every other character with a
/// hyphen, collapses runs of hyphens, trims hyphens at both ends and caps the
/// result at [`MAX_SLUG_LEN`]. Never empty: a title with nothing left falls
/// back to [`FALLBACK_SLUG`]. The same title always yields the same slug.
pub fn slugify(title: &str) -> String {
    let ascii = deunicode::deunicode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_hyphen = true;

    for c in ascii.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a quiz title (non-empty after trimming, at most 60 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a pass mark. Anything outside `0..=100` is rejected.
pub fn validate_pass_mark(pass_mark: i16) -> Result<(), CoreError> {
    if pass_mark > MAX_PASS_MARK {
        return Err(CoreError::Validation(format!(
            "{pass_mark} is above {MAX_PASS_MARK}"
        )));
    }
    if pass_mark < 0 {
        return Err(CoreError::Validation(format!(
            "Pass mark must be between 0 and {MAX_PASS_MARK}, got {pass_mark}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Derived question count
// ---------------------------------------------------------------------------

/// The question count and draft override derived from a quiz's answerable
/// questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTally {
    pub number_of_questions: i16,
    /// `true` when the quiz has nothing answerable and must become a draft.
    pub force_draft: bool,
}

impl QuestionTally {
    /// Derive the tally from the result of an answerable-questions lookup.
    ///
    /// `None` is the "no questions" sentinel: the count drops to zero and the
    /// quiz is forced into draft. A present list never forces draft.
    pub fn from_answerable<T>(questions: Option<&[T]>) -> Self {
        match questions {
            None => Self {
                number_of_questions: 0,
                force_draft: true,
            },
            Some(list) => Self {
                number_of_questions: i16::try_from(list.len()).unwrap_or(i16::MAX),
                force_draft: false,
            },
        }
    }

    /// Apply the tally to a draft flag: a forced draft wins, otherwise the
    /// flag is left as the caller set it.
    pub fn resolve_draft(&self, draft: bool) -> bool {
        draft || self.force_draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn slug_from_simple_title() {
        assert_eq!(slugify("Test Quiz"), "test-quiz");
        assert_eq!(slugify("Test Title 1"), "test-title-1");
    }

    #[test]
    fn slug_collapses_and_trims_separators() {
        assert_eq!(slugify("  Rust -- Ownership & Borrowing!  "), "rust-ownership-borrowing");
        assert_eq!(slugify("???"), FALLBACK_SLUG);
    }

    #[test]
    fn slug_transliterates_accents() {
        assert_eq!(slugify("Café Quiz"), "cafe-quiz");
        assert_eq!(slugify("Über Straße"), "uber-strasse");
    }

    #[test]
    fn slug_for_non_latin_title_is_never_empty() {
        assert_eq!(slugify("Викторина"), "viktorina");
        assert_eq!(slugify(""), FALLBACK_SLUG);
        assert!(!slugify("日本語").is_empty());
    }

    #[test]
    fn slug_is_deterministic() {
        let title = "Intro to Databases (Part 2)";
        assert_eq!(slugify(title), slugify(title));
        assert_eq!(slugify(title), "intro-to-databases-part-2");
    }

    #[test]
    fn slug_is_capped() {
        let title = "a ".repeat(50);
        let slug = slugify(&title);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn title_rules() {
        assert!(validate_title("Quiz").is_ok());
        assert_matches!(validate_title("   "), Err(CoreError::Validation(_)));
        assert_matches!(validate_title(&"x".repeat(61)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn pass_mark_accepts_boundaries() {
        assert!(validate_pass_mark(0).is_ok());
        assert!(validate_pass_mark(50).is_ok());
        assert!(validate_pass_mark(100).is_ok());
    }

    #[test]
    fn pass_mark_above_100_is_rejected() {
        let err = validate_pass_mark(200).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: 200 is above 100");
    }

    #[test]
    fn negative_pass_mark_is_rejected() {
        assert_matches!(validate_pass_mark(-1), Err(CoreError::Validation(_)));
    }

    #[test]
    fn tally_for_no_questions_forces_draft() {
        let tally = QuestionTally::from_answerable::<()>(None);
        assert_eq!(tally.number_of_questions, 0);
        assert!(tally.force_draft);
        assert!(tally.resolve_draft(false));
    }

    #[test]
    fn tally_counts_answerable_questions() {
        let tally = QuestionTally::from_answerable(Some(&[1, 2][..]));
        assert_eq!(tally.number_of_questions, 2);
        assert!(!tally.force_draft);
        assert!(!tally.resolve_draft(false));
        assert!(tally.resolve_draft(true));
    }
}
