use crate::config::OverlapBoundary;
use unicode_segmentation::UnicodeSegmentation;

/// Tail of `previous` holding at most `budget` characters, cut according to
/// `boundary`. Returns `None` when nothing but whitespace would be carried.
pub fn overlap_tail(previous: &str, budget: usize, boundary: OverlapBoundary) -> Option<&str> {
    if budget == 0 || previous.is_empty() {
        return None;
    }

    let start = match boundary {
        OverlapBoundary::Char => char_tail_start(previous, budget),
        OverlapBoundary::Grapheme => grapheme_tail_start(previous, budget),
        OverlapBoundary::Word => word_tail_start(previous, grapheme_tail_start(previous, budget)),
    };

    let tail = &previous[start..];
    if tail.trim().is_empty() { None } else { Some(tail) }
}

fn char_tail_start(text: &str, budget: usize) -> usize {
    text.char_indices()
        .rev()
        .nth(budget - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

fn grapheme_tail_start(text: &str, budget: usize) -> usize {
    let mut start = text.len();
    let mut taken = 0;

    for (idx, grapheme) in text.grapheme_indices(true).rev() {
        let width = grapheme.chars().count();
        if taken + width > budget {
            break;
        }
        taken += width;
        start = idx;
    }

    start
}

/// Move `start` forward past a partial leading word
fn word_tail_start(text: &str, start: usize) -> usize {
    if start == 0 || text[..start].ends_with(char::is_whitespace) {
        return start;
    }

    let tail = &text[start..];
    let Some(gap) = tail.find(char::is_whitespace) else {
        // the whole tail is one truncated word
        return text.len();
    };

    match tail[gap..].find(|c: char| !c.is_whitespace()) {
        Some(word) => start + gap + word,
        None => text.len(),
    }
}
