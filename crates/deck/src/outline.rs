//! Slide model and topic-to-slide decomposition.
//!
//! A summary is split into sentences on the literal `". "` delimiter. The count-driven policy
//! groups them three per slide and pads missing slides with a placeholder; the flat policy puts one
//! sentence on each slide.

/// Literal sentence delimiter. Sentences are never recombined once split, except by re-joining a
/// chunk with the same delimiter.
pub const SENTENCE_DELIMITER: &str = ". ";
pub const SENTENCES_PER_SLIDE: usize = 3;
/// Slide count used when the user does not ask for one (title slide included).
pub const DEFAULT_SLIDE_COUNT: usize = 8;
/// Maximum number of content slides in a flat deck.
pub const FLAT_SLIDE_LIMIT: usize = 8;

pub const TITLE_SUBTITLE: &str = "Автоматически создано ботом";
pub const FLAT_SUBTITLE: &str = "Сгенерировано автоматически";
pub const NO_MORE_INFO: &str = "Нет дополнительной информации.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    /// Centered title with a subtitle.
    Title,
    /// Title with a body text block.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub kind: SlideKind,
    pub title: String,
    /// Subtitle for [`SlideKind::Title`], body text for [`SlideKind::Content`].
    pub body: String,
}

impl Slide {
    pub fn title(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            kind: SlideKind::Title,
            title: title.into(),
            body: subtitle.into(),
        }
    }

    pub fn content(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: SlideKind::Content,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// An ordered, fully materialized slide deck. The first slide is always a title slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub topic: String,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.slides.iter().map(|s| s.title.as_str())
    }
}

/// Splits a summary into sentences on `". "`. Empty or whitespace-only input yields no sentences.
pub fn split_sentences(summary: &str) -> Vec<&str> {
    if summary.trim().is_empty() {
        return Vec::new();
    }
    summary.split(SENTENCE_DELIMITER).collect()
}

/// Groups consecutive sentences three at a time and re-joins each group with `". "`.
pub fn chunk_sentences(sentences: &[&str]) -> Vec<String> {
    sentences
        .chunks(SENTENCES_PER_SLIDE)
        .map(|group| group.join(SENTENCE_DELIMITER))
        .collect()
}

/// The first `limit` sentences of a summary, for the flat policy.
pub fn first_sentences(summary: &str, limit: usize) -> Vec<&str> {
    let mut sentences = split_sentences(summary);
    sentences.truncate(limit);
    sentences
}

/// Count-driven deck: one title slide plus `slide_count - 1` content slides titled
/// `"{topic} — часть {i}"`. Content slide `i` carries chunk `i`, or [`NO_MORE_INFO`] once chunks
/// run out. A `slide_count` of 0 or 1 yields a title-only deck.
pub fn build_chunked_deck(topic: &str, summary: &str, slide_count: usize) -> Deck {
    let sentences = split_sentences(summary);
    let mut chunks = chunk_sentences(&sentences).into_iter();

    let content_slides = slide_count.saturating_sub(1);
    let mut slides = Vec::with_capacity(content_slides + 1);
    slides.push(Slide::title(topic, TITLE_SUBTITLE));
    for i in 1..=content_slides {
        let body = chunks.next().unwrap_or_else(|| NO_MORE_INFO.to_string());
        slides.push(Slide::content(format!("{} — часть {}", topic, i), body));
    }

    Deck {
        topic: topic.to_string(),
        slides,
    }
}

/// Flat deck: one title slide plus one `"Slide {i}"` slide per sentence. The caller truncates the
/// list (see [`first_sentences`]).
pub fn build_flat_deck<S: AsRef<str>>(topic: &str, sentences: &[S]) -> Deck {
    let mut slides = Vec::with_capacity(sentences.len() + 1);
    slides.push(Slide::title(topic, FLAT_SUBTITLE));
    slides.extend(
        sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| Slide::content(format!("Slide {}", i + 1), sentence.as_ref())),
    );

    Deck {
        topic: topic.to_string(),
        slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_summary(n: usize) -> String {
        (1..=n)
            .map(|i| format!("Sentence {}", i))
            .collect::<Vec<_>>()
            .join(SENTENCE_DELIMITER)
    }

    #[test]
    fn test_split_sentences_on_period_space() {
        assert_eq!(
            split_sentences("Rome is old. It has seven hills. Capital of Italy."),
            vec!["Rome is old", "It has seven hills", "Capital of Italy."]
        );
    }

    #[test]
    fn test_split_sentences_keeps_abbreviation_breaks_literal() {
        // The delimiter is literal: "753 г. до н. э." is cut wherever ". " occurs.
        assert_eq!(
            split_sentences("Основан в 753 г. до н. э."),
            vec!["Основан в 753 г", "до н", "э."]
        );
    }

    #[test]
    fn test_split_sentences_empty_summary() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  \n ").is_empty());
    }

    #[test]
    fn test_chunk_sentences_groups_of_three() {
        let sentences = ["a", "b", "c", "d", "e", "f", "g"];
        assert_eq!(chunk_sentences(&sentences), vec!["a. b. c", "d. e. f", "g"]);
    }

    /// Great Wall scenario: 7 sentences, 3 slides → title, part 1 = s[0..3], part 2 = s[3..6].
    #[test]
    fn test_chunked_deck_great_wall_scenario() {
        let summary = numbered_summary(7);
        let deck = build_chunked_deck("Great Wall of China", &summary, 3);

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slides[0], Slide::title("Great Wall of China", TITLE_SUBTITLE));
        assert_eq!(
            deck.slides[1],
            Slide::content(
                "Great Wall of China — часть 1",
                "Sentence 1. Sentence 2. Sentence 3"
            )
        );
        assert_eq!(
            deck.slides[2],
            Slide::content(
                "Great Wall of China — часть 2",
                "Sentence 4. Sentence 5. Sentence 6"
            )
        );
    }

    #[test]
    fn test_chunked_deck_pads_with_placeholder() {
        let summary = numbered_summary(4);
        let deck = build_chunked_deck("Rome", &summary, 8);

        assert_eq!(deck.len(), 8);
        assert_eq!(deck.slides[1].body, "Sentence 1. Sentence 2. Sentence 3");
        assert_eq!(deck.slides[2].body, "Sentence 4");
        for slide in &deck.slides[3..] {
            assert_eq!(slide.body, NO_MORE_INFO);
        }
        assert_eq!(deck.slides[7].title, "Rome — часть 7");
    }

    #[test]
    fn test_chunked_deck_honors_count_for_every_size() {
        let summary = numbered_summary(10);
        let chunk_count = 4;
        for count in 1..=20 {
            let deck = build_chunked_deck("Rome", &summary, count);
            assert_eq!(deck.len(), count);

            let placeholders = deck.slides.iter().filter(|s| s.body == NO_MORE_INFO).count();
            assert_eq!(placeholders, (count - 1).saturating_sub(chunk_count), "count {}", count);
            if 10 >= SENTENCES_PER_SLIDE * (count - 1) {
                assert_eq!(placeholders, 0, "count {}", count);
            }
        }
    }

    #[test]
    fn test_chunked_deck_zero_count_is_title_only() {
        let deck = build_chunked_deck("Rome", "A. B", 0);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides[0].kind, SlideKind::Title);
    }

    #[test]
    fn test_chunked_deck_empty_summary_is_all_placeholders() {
        let deck = build_chunked_deck("Rome", "", 3);
        assert_eq!(deck.len(), 3);
        assert!(deck.slides[1..].iter().all(|s| s.body == NO_MORE_INFO));
    }

    #[test]
    fn test_chunked_deck_is_deterministic() {
        let summary = numbered_summary(9);
        assert_eq!(
            build_chunked_deck("Rome", &summary, 5),
            build_chunked_deck("Rome", &summary, 5)
        );
    }

    #[test]
    fn test_flat_deck_uses_first_eight_sentences() {
        let summary = numbered_summary(10);
        let sentences = first_sentences(&summary, FLAT_SLIDE_LIMIT);
        let deck = build_flat_deck("Rome", &sentences);

        assert_eq!(deck.len(), 9);
        assert_eq!(deck.slides[0], Slide::title("Rome", FLAT_SUBTITLE));
        let titles: Vec<&str> = deck.titles().skip(1).collect();
        assert_eq!(
            titles,
            vec![
                "Slide 1", "Slide 2", "Slide 3", "Slide 4", "Slide 5", "Slide 6", "Slide 7",
                "Slide 8"
            ]
        );
        assert_eq!(deck.slides[8].body, "Sentence 8");
    }

    #[test]
    fn test_flat_deck_short_summary() {
        let sentences = first_sentences("Only one sentence.", FLAT_SLIDE_LIMIT);
        let deck = build_flat_deck("Rome", &sentences);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[1], Slide::content("Slide 1", "Only one sentence."));
    }
}
