//! `/make` argument grammar: `<topic> [count]`.
//!
//! Rules, in order:
//! 1. A topic wrapped in quotes (`"…"`, `«…»` or `“…”`) is taken literally; after the closing quote
//!    only an optional integer count may follow.
//! 2. Otherwise the arguments are split on whitespace and the last token is the count iff it parses
//!    as an integer and at least one token precedes it. `/make 1984` is therefore the topic "1984"
//!    with the default count, while `/make Apollo 11` is the topic "Apollo" with 11 slides.
//! 3. No topic tokens at all → no request.

/// A parsed `/make` request. `slide_count` is the raw number the user typed, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeRequest {
    pub topic: String,
    pub slide_count: Option<i64>,
}

const QUOTES: &[(char, char)] = &[('"', '"'), ('«', '»'), ('“', '”')];

impl MakeRequest {
    /// Parses the argument text of a `/make` command. Returns `None` when there is no topic.
    pub fn parse(args: &str) -> Option<Self> {
        let args = args.trim();
        if let Some(request) = Self::parse_quoted(args) {
            return Some(request);
        }

        let tokens: Vec<&str> = args.split_whitespace().collect();
        let (topic_tokens, slide_count) = match tokens.split_last() {
            None => return None,
            Some((last, rest)) if !rest.is_empty() => match last.parse::<i64>() {
                Ok(count) => (rest, Some(count)),
                Err(_) => (tokens.as_slice(), None),
            },
            Some(_) => (tokens.as_slice(), None),
        };

        Some(Self {
            topic: topic_tokens.join(" "),
            slide_count,
        })
    }

    fn parse_quoted(args: &str) -> Option<Self> {
        let first = args.chars().next()?;
        let &(open, close) = QUOTES.iter().find(|(open, _)| *open == first)?;
        let rest = &args[open.len_utf8()..];
        let end = rest.find(close)?;

        let topic = rest[..end].split_whitespace().collect::<Vec<_>>().join(" ");
        if topic.is_empty() {
            return None;
        }
        let tail = rest[end + close.len_utf8()..].trim();
        let slide_count = if tail.is_empty() {
            None
        } else {
            Some(tail.parse::<i64>().ok()?)
        };
        Some(Self { topic, slide_count })
    }

    /// Effective slide count (title slide included): the default when none was given, at least 1
    /// (a title-only deck for zero or negative input). With `max` set, larger counts are clamped to
    /// it; without one the requested count is used as is.
    pub fn resolve_slide_count(&self, default: usize, max: Option<usize>) -> usize {
        let count = match self.slide_count {
            None => default.max(1),
            Some(n) if n <= 1 => 1,
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        };
        match max {
            Some(max) => count.min(max.max(1)),
            None => count,
        }
    }

    /// True when `max` is set and the requested count exceeds it.
    pub fn exceeds(&self, max: Option<usize>) -> bool {
        match (self.slide_count, max) {
            (Some(n), Some(max)) => usize::try_from(n).is_ok_and(|n| n > max),
            _ => false,
        }
    }
}
