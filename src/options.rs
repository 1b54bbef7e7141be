//! Configuration options for article extraction.
//!
//! The `Options` struct controls the thresholds of the scoring, selection and
//! cleaning stages. The defaults follow the classic reader-mode heuristics.

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readable::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     url: Some("https://example.com/post".to_string()),
///     char_threshold: 250,
///     keep_classes: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Page URL used to resolve relative links and as the fallback canonical URL.
    ///
    /// Strings that do not parse as absolute URLs are ignored for resolution.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Minimum article text length (characters) for a confident extraction.
    ///
    /// Results below this length are returned with `degraded` set.
    ///
    /// Default: `500`
    pub char_threshold: usize,

    /// Number of top-scoring candidates considered by the selector.
    ///
    /// Default: `5`
    pub nb_top_candidates: usize,

    /// Fraction of the top score a sibling needs to be merged into the article.
    ///
    /// The effective threshold is never below 10.
    ///
    /// Default: `0.2`
    pub sibling_score_fraction: f64,

    /// Minimum text length (characters) for an element to contribute a score.
    ///
    /// Default: `25`
    pub min_paragraph_len: usize,

    /// Upper bound on unwrap/strip-empty passes in the cleaner.
    ///
    /// Default: `16`
    pub max_clean_passes: usize,

    /// Maximum excerpt length (characters) when no paragraph qualifies.
    ///
    /// Default: `200`
    pub excerpt_length: usize,

    /// Minimum paragraph length (characters) to be used as the excerpt.
    ///
    /// Default: `40`
    pub min_excerpt_paragraph: usize,

    /// Keep `class` attributes in the article markup.
    ///
    /// The `page` class of the article wrapper is always kept.
    ///
    /// Default: `false`
    pub keep_classes: bool,

    /// Keep embedded players whose source matches the video allow-list.
    ///
    /// Default: `true`
    pub allow_video: bool,

    /// Remove unlikely candidates (by class/id/role) before scoring.
    ///
    /// When enabled and the first attempt is too short, extraction retries
    /// once with this step disabled.
    ///
    /// Default: `true`
    pub strip_unlikely: bool,

    /// Maximum number of elements in the parsed document (`0` = unlimited).
    ///
    /// Larger documents are rejected with `Error::InvalidInput`.
    ///
    /// Default: `0`
    pub max_elems_to_parse: usize,
}

impl Options {
    /// Options with only the page URL set.
    #[must_use]
    pub fn with_url(url: Option<&str>) -> Self {
        Self {
            url: url.map(ToString::to_string),
            ..Self::default()
        }
    }

    /// Effective merge threshold for siblings of a candidate scoring `top_score`.
    #[must_use]
    pub fn sibling_threshold(&self, top_score: f64) -> f64 {
        (top_score * self.sibling_score_fraction).max(10.0)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            char_threshold: 500,
            nb_top_candidates: 5,
            sibling_score_fraction: 0.2,
            min_paragraph_len: 25,
            max_clean_passes: 16,
            excerpt_length: 200,
            min_excerpt_paragraph: 40,
            keep_classes: false,
            allow_video: true,
            strip_unlikely: true,
            max_elems_to_parse: 0,
        }
    }
}
