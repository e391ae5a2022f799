//! Split a headline into characters or words with staggered entry delays.

use super::easing::CubicBezier;

/// Non-breaking space, keeps inline-block segments from collapsing
pub const NBSP: char = '\u{00A0}';

/// Per-segment transition length
pub const SEGMENT_DURATION_MS: u32 = 500;

/// Default delay between consecutive segments, in seconds
pub const DEFAULT_STAGGER_S: f64 = 0.03;

/// Unit a headline is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    #[default]
    Chars,
    Words,
}

/// Entry effect for each segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitAnimation {
    #[default]
    FadeUp,
    FadeIn,
    Blur,
    Scale,
}

impl SplitAnimation {
    /// Style for a segment that has not entered yet
    pub fn hidden_style(&self) -> &'static str {
        match self {
            SplitAnimation::FadeUp => "opacity: 0; transform: translateY(40px);",
            SplitAnimation::FadeIn => "opacity: 0;",
            SplitAnimation::Blur => "opacity: 0; filter: blur(10px);",
            SplitAnimation::Scale => "opacity: 0; transform: scale(0.8);",
        }
    }

    /// Style for a segment at rest
    pub fn visible_style(&self) -> &'static str {
        match self {
            SplitAnimation::FadeUp => "opacity: 1; transform: translateY(0);",
            SplitAnimation::FadeIn => "opacity: 1;",
            SplitAnimation::Blur => "opacity: 1; filter: blur(0px);",
            SplitAnimation::Scale => "opacity: 1; transform: scale(1);",
        }
    }
}

/// One animated piece of a split headline
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSegment {
    pub index: usize,
    pub text: String,
    /// Seconds from mount until this segment starts moving
    pub delay_s: f64,
    /// Whether this segment is only whitespace (needs `white-space: pre`)
    pub is_space: bool,
}

impl SplitSegment {
    /// Full inline style for this segment in the given state
    pub fn style(&self, animation: SplitAnimation, visible: bool) -> String {
        let state = if visible {
            animation.visible_style()
        } else {
            animation.hidden_style()
        };
        let white_space = if self.is_space { "pre" } else { "normal" };
        format!(
            "display: inline-block; white-space: {white_space}; {state} \
             transition: opacity {d}ms {ease} {delay}s, transform {d}ms {ease} {delay}s, filter {d}ms {ease} {delay}s;",
            d = SEGMENT_DURATION_MS,
            ease = CubicBezier::SPLIT_TEXT.css(),
            delay = self.delay_s,
        )
    }
}

/// Split `text` into animated segments.
///
/// Characters keep their order; spaces become non-breaking. Words are split
/// on single spaces and every word but the last carries a trailing
/// non-breaking space.
pub fn split(text: &str, mode: SplitMode, delay_s: f64, stagger_s: f64) -> Vec<SplitSegment> {
    let delay_for = |index: usize| delay_s + index as f64 * stagger_s;

    match mode {
        SplitMode::Chars => text
            .chars()
            .enumerate()
            .map(|(index, c)| {
                let is_space = c == ' ';
                SplitSegment {
                    index,
                    text: if is_space { NBSP.to_string() } else { c.to_string() },
                    delay_s: delay_for(index),
                    is_space,
                }
            })
            .collect(),
        SplitMode::Words => {
            let words: Vec<&str> = text.split(' ').collect();
            let last = words.len().saturating_sub(1);
            words
                .into_iter()
                .enumerate()
                .map(|(index, word)| {
                    let mut text = word.to_string();
                    if index < last {
                        text.push(NBSP);
                    }
                    SplitSegment {
                        index,
                        is_space: word.is_empty(),
                        text,
                        delay_s: delay_for(index),
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_chars_keeps_order_and_staggers() {
        let segments = split("Build on", SplitMode::Chars, 0.2, 0.04);
        assert_eq!(segments.len(), 8);
        assert_eq!(segments[0].text, "B");
        assert!((segments[0].delay_s - 0.2).abs() < 1e-9);
        assert!((segments[7].delay_s - (0.2 + 7.0 * 0.04)).abs() < 1e-9);
    }

    #[test]
    fn test_split_chars_replaces_spaces() {
        let segments = split("a b", SplitMode::Chars, 0.0, DEFAULT_STAGGER_S);
        assert_eq!(segments[1].text, NBSP.to_string());
        assert!(segments[1].is_space);
        assert!(!segments[0].is_space);
    }

    #[test]
    fn test_split_words_trailing_nbsp() {
        let segments = split("One system. Every phase.", SplitMode::Words, 0.0, 0.1);
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["One\u{a0}", "system.\u{a0}", "Every\u{a0}", "phase."]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split("", SplitMode::Chars, 0.0, 0.03).is_empty());
        let words = split("", SplitMode::Words, 0.0, 0.03);
        assert_eq!(words.len(), 1);
        assert!(words[0].is_space);
    }

    #[test]
    fn test_segment_style() {
        let segment = &split("Hi", SplitMode::Chars, 0.5, 0.0)[0];
        let hidden = segment.style(SplitAnimation::FadeUp, false);
        assert!(hidden.contains("translateY(40px)"));
        assert!(hidden.contains("500ms cubic-bezier(0.215, 0.61, 0.355, 1) 0.5s"));

        let shown = segment.style(SplitAnimation::Blur, true);
        assert!(shown.contains("blur(0px)"));
        assert!(shown.contains("white-space: normal"));
    }
}
