//! Word-list sentiment backend.
//!
//! A small polarity/subjectivity lexicon in the TextBlob tradition: each
//! entry carries a signed polarity and a subjectivity weight, scores are
//! averaged over the lexicon hits in the text, a preceding negator flips
//! and dampens polarity, and a preceding intensifier amplifies both
//! components. Good enough for trending over hundreds of headlines; swap
//! in another [`SentimentModel`] implementation for anything subtler.

use super::SentimentModel;

/// `(word, polarity, subjectivity)` entries. Words are matched after the
/// cleaning pass, so they are lowercase and punctuation-free.
const LEXICON: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.9, 0.9),
    ("amazing", 0.8, 0.85),
    ("wonderful", 0.9, 0.9),
    ("love", 0.8, 0.7),
    ("best", 1.0, 0.5),
    ("happy", 0.8, 0.9),
    ("success", 0.6, 0.4),
    ("successful", 0.6, 0.45),
    ("win", 0.6, 0.4),
    ("wins", 0.6, 0.4),
    ("gain", 0.4, 0.3),
    ("gains", 0.4, 0.3),
    ("growth", 0.4, 0.3),
    ("rise", 0.3, 0.25),
    ("surge", 0.4, 0.35),
    ("boost", 0.5, 0.4),
    ("improve", 0.5, 0.35),
    ("improved", 0.5, 0.35),
    ("progress", 0.4, 0.3),
    ("breakthrough", 0.7, 0.5),
    ("record", 0.3, 0.25),
    ("strong", 0.4, 0.4),
    ("approve", 0.4, 0.3),
    ("approved", 0.4, 0.3),
    ("optimistic", 0.5, 0.7),
    ("confident", 0.5, 0.65),
    ("support", 0.3, 0.3),
    ("benefit", 0.4, 0.3),
    ("promising", 0.6, 0.6),
    ("milestone", 0.5, 0.35),
    ("expand", 0.2, 0.2),
    ("expansion", 0.2, 0.2),
    // negative
    ("bad", -0.7, 0.65),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 0.6),
    ("poor", -0.6, 0.55),
    ("disappointed", -0.7, 0.75),
    ("disappointing", -0.7, 0.75),
    ("hate", -0.8, 0.8),
    ("fail", -0.6, 0.45),
    ("failure", -0.6, 0.45),
    ("failed", -0.6, 0.45),
    ("lose", -0.5, 0.4),
    ("loss", -0.5, 0.35),
    ("losses", -0.5, 0.35),
    ("drop", -0.3, 0.25),
    ("fall", -0.3, 0.25),
    ("crash", -0.7, 0.5),
    ("crisis", -0.7, 0.5),
    ("collapse", -0.7, 0.5),
    ("decline", -0.4, 0.3),
    ("weak", -0.4, 0.45),
    ("threat", -0.5, 0.4),
    ("risk", -0.3, 0.35),
    ("delay", -0.3, 0.3),
    ("delayed", -0.3, 0.3),
    ("concern", -0.3, 0.45),
    ("concerns", -0.3, 0.45),
    ("fear", -0.6, 0.6),
    ("scandal", -0.7, 0.55),
    ("protest", -0.3, 0.35),
    ("oppose", -0.4, 0.4),
    ("reject", -0.4, 0.35),
    ("rejected", -0.4, 0.35),
    ("pessimistic", -0.5, 0.7),
    ("dead", -0.6, 0.35),
    ("death", -0.6, 0.35),
    ("accident", -0.5, 0.3),
];

/// Words that flip and dampen the polarity of the next lexicon hit.
/// Contractions appear apostrophe-less because cleaning strips punctuation.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "cant", "dont", "doesnt", "didnt", "wont",
    "isnt", "wasnt", "arent", "werent", "without", "hardly", "barely",
];

/// Words that amplify the next lexicon hit.
const INTENSIFIERS: &[&str] = &["very", "really", "extremely", "absolutely", "highly", "truly"];

/// Negation dampening factor, matching the TextBlob convention of flipping
/// to half strength rather than a full mirror.
const NEGATION_FACTOR: f64 = -0.5;

/// Intensifier amplification factor.
const INTENSITY_FACTOR: f64 = 1.3;

/// Default lexicon-based [`SentimentModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconModel;

impl LexiconModel {
    pub fn new() -> Self {
        LexiconModel
    }

    fn lookup(word: &str) -> Option<(f64, f64)> {
        LEXICON
            .iter()
            .find(|(w, _, _)| *w == word)
            .map(|(_, p, s)| (*p, *s))
    }
}

impl SentimentModel for LexiconModel {
    /// Average polarity and subjectivity over the lexicon hits in `text`.
    ///
    /// Texts with no lexicon hits score `(0.0, 0.0)`. Results are clamped
    /// to the contract ranges.
    fn score(&self, text: &str) -> (f64, f64) {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some((mut polarity, mut subjectivity)) = Self::lookup(token) else {
                continue;
            };
            if let Some(prev) = i.checked_sub(1).map(|p| tokens[p]) {
                if INTENSIFIERS.contains(&prev) {
                    polarity *= INTENSITY_FACTOR;
                    subjectivity *= INTENSITY_FACTOR;
                }
                if NEGATORS.contains(&prev) {
                    polarity *= NEGATION_FACTOR;
                }
                // "not very good" — negator two back still flips.
                if let Some(prev2) = i.checked_sub(2).map(|p| tokens[p]) {
                    if INTENSIFIERS.contains(&prev) && NEGATORS.contains(&prev2) {
                        polarity *= NEGATION_FACTOR;
                    }
                }
            }
            polarity_sum += polarity;
            subjectivity_sum += subjectivity;
            hits += 1;
        }

        if hits == 0 {
            return (0.0, 0.0);
        }
        let polarity = (polarity_sum / hits as f64).clamp(-1.0, 1.0);
        let subjectivity = (subjectivity_sum / hits as f64).clamp(0.0, 1.0);
        (polarity, subjectivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LexiconModel {
        LexiconModel::new()
    }

    #[test]
    fn test_positive_text() {
        let (polarity, subjectivity) = model().score("a fantastic product i absolutely love it");
        assert!(polarity > 0.5, "polarity was {polarity}");
        assert!(subjectivity > 0.5);
    }

    #[test]
    fn test_negative_text() {
        let (polarity, _) = model().score("the service was terrible and i am disappointed");
        assert!(polarity < -0.5, "polarity was {polarity}");
    }

    #[test]
    fn test_neutral_text_without_lexicon_hits() {
        assert_eq!(model().score("the event took place in the city center"), (0.0, 0.0));
    }

    #[test]
    fn test_negation_flips_polarity() {
        let (plain, _) = model().score("the launch was good");
        let (negated, _) = model().score("the launch was not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn test_intensifier_amplifies() {
        let (plain, _) = model().score("a good outcome");
        let (boosted, _) = model().score("a very good outcome");
        assert!(boosted > plain);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let texts = [
            "excellent excellent excellent absolutely excellent",
            "terrible awful horrible worst absolutely terrible",
            "good bad good bad",
        ];
        for text in texts {
            let (polarity, subjectivity) = model().score(text);
            assert!((-1.0..=1.0).contains(&polarity), "{text}: {polarity}");
            assert!((0.0..=1.0).contains(&subjectivity), "{text}: {subjectivity}");
        }
    }
}
