//! Star-rating classification: the model seam and the label policy.
//!
//! The underlying model is a 1–5 star reviewer head consumed through the
//! [`StarRater`] trait, so the HTTP layer never touches candle directly and
//! tests can inject a fixed backend. The binary POSITIVE/NEGATIVE contract
//! exposed on the wire is derived here: four stars and up is positive,
//! three and below is negative, and the model's confidence in the predicted
//! star class is passed through unchanged.
//!
//! `AppState` holds a [`ModelState`], which is either a loaded rater or the
//! degraded fail-open mode: when the model cannot be loaded at startup the
//! service keeps answering with a fixed `POSITIVE / 0.0` result instead of
//! erroring on every request.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub mod bert;

pub use bert::BertStarRater;

/// Raw model output: an ordinal star rating plus the model's confidence in
/// that star class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRating {
    /// 1..=5
    pub stars: u8,
    /// 0.0..=1.0
    pub confidence: f32,
}

/// A backend that maps UTF-8 text to a [`StarRating`].
///
/// Synchronous on purpose: inference is CPU-bound, and callers run it on a
/// blocking thread.
pub trait StarRater: Send + Sync {
    fn rate(&self, text: &str) -> Result<StarRating>;
}

/// Binary sentiment label, serialized as `"POSITIVE"` / `"NEGATIVE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Binarization policy: stars >= 4 is positive, everything else negative.
    pub fn from_stars(stars: u8) -> Self {
        if stars >= 4 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "POSITIVE"),
            Sentiment::Negative => write!(f, "NEGATIVE"),
        }
    }
}

/// Wire-level classification result: `{"label": ..., "score": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Sentiment,
    pub score: f32,
}

/// Parses the star count out of an `id2label` entry such as `"4 stars"`.
pub fn parse_star_label(label: &str) -> Result<u8> {
    label
        .split_whitespace()
        .next()
        .and_then(|s| s.parse::<u8>().ok())
        .filter(|s| (1..=5).contains(s))
        .ok_or_else(|| anyhow!("unrecognized star label: {label:?}"))
}

/// The model lifecycle state carried in `AppState`, fixed at startup.
pub enum ModelState {
    Ready(Box<dyn StarRater>),
    /// Load failed; every request gets the fixed fallback result.
    Unavailable,
}

/// The response served for every request while the model is unavailable.
const FALLBACK: Classification = Classification {
    label: Sentiment::Positive,
    score: 0.0,
};

impl ModelState {
    /// Loads the configured model, degrading to [`ModelState::Unavailable`]
    /// instead of failing: the rest of the system stays exercisable without
    /// the model.
    pub fn load(model_id: &str) -> Self {
        match BertStarRater::load(model_id) {
            Ok(rater) => {
                info!("model '{model_id}' loaded");
                ModelState::Ready(Box::new(rater))
            }
            Err(e) => {
                warn!("model '{model_id}' failed to load, serving fixed fallback responses: {e:#}");
                ModelState::Unavailable
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }

    /// Runs one classification. The confidence reported for the binary label
    /// is the model's confidence in the predicted star class, unrecalibrated.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        match self {
            ModelState::Ready(rater) => {
                let rating = rater.rate(text)?;
                Ok(Classification {
                    label: Sentiment::from_stars(rating.stars),
                    score: rating.confidence,
                })
            }
            ModelState::Unavailable => Ok(FALLBACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u8, f32);

    impl StarRater for Fixed {
        fn rate(&self, _text: &str) -> Result<StarRating> {
            Ok(StarRating {
                stars: self.0,
                confidence: self.1,
            })
        }
    }

    #[test]
    fn test_binarization_boundaries() {
        assert_eq!(Sentiment::from_stars(3), Sentiment::Negative);
        assert_eq!(Sentiment::from_stars(4), Sentiment::Positive);
    }

    #[test]
    fn test_binarization_extremes() {
        assert_eq!(Sentiment::from_stars(1), Sentiment::Negative);
        assert_eq!(Sentiment::from_stars(5), Sentiment::Positive);
    }

    #[test]
    fn test_parse_star_label() {
        assert_eq!(parse_star_label("1 star").unwrap(), 1);
        assert_eq!(parse_star_label("4 stars").unwrap(), 4);
        assert!(parse_star_label("great").is_err());
        assert!(parse_star_label("7 stars").is_err());
    }

    #[test]
    fn test_confidence_passes_through_unrecalibrated() {
        // 4 stars at 0.55 reports 0.55 as the POSITIVE score even though
        // 0.55 was the confidence in the 4-star class specifically.
        let state = ModelState::Ready(Box::new(Fixed(4, 0.55)));
        let c = state.classify("decent enough").unwrap();
        assert_eq!(c.label, Sentiment::Positive);
        assert!((c.score - 0.55).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unavailable_model_serves_fixed_fallback() {
        let state = ModelState::Unavailable;
        for text in ["anything", "", "It's horrible and disappointing."] {
            let c = state.classify(text).unwrap();
            assert_eq!(c.label, Sentiment::Positive);
            assert_eq!(c.score, 0.0);
        }
    }

    #[test]
    fn test_label_serialization() {
        let c = Classification {
            label: Sentiment::Negative,
            score: 0.87,
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["label"], "NEGATIVE");
        assert!((json["score"].as_f64().unwrap() - 0.87).abs() < 1e-6);
    }
}
