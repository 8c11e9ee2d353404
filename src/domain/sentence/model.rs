use std::fmt;

use chrono::{DateTime, Utc};

/// Key every record is written under when `IdMode::Fixed` is active. All
/// submissions share this one slot, so the latest write wins.
pub const FIXED_RECORD_KEY: &str = "sample_task";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Sentiment {
    /// Labels a sentiment score. NaN has no polarity and falls through to
    /// `Unknown`.
    pub fn from_score(score: f32) -> Self {
        if score.is_nan() {
            return Sentiment::Unknown;
        }
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Labels the first-sentence score of an analysis. `Unknown` when the
    /// service returned no sentences at all.
    pub fn classify(score: Option<f32>) -> Self {
        match score {
            Some(score) => Self::from_score(score),
            None => Sentiment::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Unknown => "unknown",
        }
    }

    /// Inverse of `as_str`. Anything unrecognized in the store reads back as
    /// `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            _ => Sentiment::Unknown,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission's analysis outcome as persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SentenceRecord {
    pub key: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_scores_label_positive() {
        assert_eq!(Sentiment::from_score(0.8), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(f32::MIN_POSITIVE), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(1.0), Sentiment::Positive);
    }

    #[test]
    fn negative_scores_label_negative() {
        assert_eq!(Sentiment::from_score(-0.5), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(-f32::MIN_POSITIVE), Sentiment::Negative);
    }

    #[test]
    fn zero_labels_neutral() {
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.0), Sentiment::Neutral);
    }

    #[test]
    fn nan_and_absent_label_unknown() {
        assert_eq!(Sentiment::from_score(f32::NAN), Sentiment::Unknown);
        assert_eq!(Sentiment::classify(None), Sentiment::Unknown);
    }

    #[test]
    fn labels_round_trip_through_storage_form() {
        for sentiment in [
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Neutral,
            Sentiment::Unknown,
        ] {
            assert_eq!(Sentiment::parse(sentiment.as_str()), sentiment);
        }
        assert_eq!(Sentiment::parse("garbage"), Sentiment::Unknown);
    }
}
