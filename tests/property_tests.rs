use proptest::prelude::*;

use recipe_recommender::{Document, Recommender, TextNormalizer};

const WORDS: &[&str] = &[
    "chicken", "Chickens", "garlic,", "rice", "onions", "tomatoes", "dishes", "Berries",
    "glass", "the", "and", "2", "1/2", "cup", "cups", "lemon.", "(minced)", "boxes",
    "leaves", "fish", "description", "!!", "olive-oil", "cheese", "potatoes",
];

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "))
}

fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(text(), 1..8)
}

proptest! {
    /// Normalizing already-normalized text changes nothing.
    #[test]
    fn normalize_is_idempotent(t in text()) {
        let n = TextNormalizer::default();
        let once = n.normalize(&t);
        let twice = n.normalize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    /// Normalized terms are never empty, never stopwords and never contain digits.
    #[test]
    fn normalized_terms_are_clean(t in text()) {
        let n = TextNormalizer::default();
        for term in n.normalize(&t) {
            prop_assert!(!term.is_empty());
            prop_assert!(!n.stopwords().contains(&term));
            prop_assert!(!term.chars().any(char::is_numeric));
        }
    }

    /// Results are bounded by k and the corpus, sorted descending, scores in [0, 1].
    #[test]
    fn recommendations_are_bounded_and_sorted(texts in corpus(), query in text(), k in 1usize..10) {
        let docs: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(i.to_string(), t.clone()))
            .collect();
        let mut rec = Recommender::default();
        // corpora made only of stopwords and numbers are rejected
        prop_assume!(rec.fit(&docs).is_ok());

        let recs = rec.recommend(&query, k).unwrap();
        prop_assert_eq!(recs.len(), k.min(docs.len()));
        for r in &recs {
            prop_assert!(r.score.is_finite());
            prop_assert!(r.score >= 0.0 && r.score <= 1.0 + 1e-9, "score {}", r.score);
        }
        for pair in recs.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Equal scores keep corpus order.
    #[test]
    fn ties_are_stable(texts in corpus(), k in 1usize..10) {
        let docs: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("{i:03}"), t.clone()))
            .collect();
        let mut rec = Recommender::default();
        prop_assume!(rec.fit(&docs).is_ok());

        let recs = rec.recommend("zzzz unseen", k).unwrap();
        let ids: Vec<_> = recs.iter().map(|r| r.id.clone()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        prop_assert_eq!(ids, sorted);
        prop_assert!(recs.iter().all(|r| r.score == 0.0));
    }
}
