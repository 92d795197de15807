//! @acp:module "Font Metrics"
//! @acp:summary "Helvetica advance widths for line wrapping"
//! @acp:domain cli
//! @acp:layer output

use super::FontStyle;

/// Millimetres per PostScript point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width used for characters outside printable ASCII
const FALLBACK_WIDTH: u16 = 556;

// Advance widths in 1/1000 em for ' ' (0x20) through '~' (0x7E), from the
// standard Helvetica and Helvetica-Bold AFM files. Oblique shares the
// regular widths.
const REGULAR: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

fn char_width(ch: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Bold => &BOLD,
        FontStyle::Normal | FontStyle::Italic => &REGULAR,
    };
    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        _ => FALLBACK_WIDTH,
    }
}

/// Rendered width of `text` in millimetres
pub fn text_width(text: &str, size: f32, style: FontStyle) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch, style))).sum();
    units as f32 / 1000.0 * size * MM_PER_PT
}

/// Greedy word wrap to `max_width` millimetres
///
/// Embedded newlines always break. A word wider than a whole line is split
/// between characters.
pub fn wrap_text(text: &str, max_width: f32, size: f32, style: FontStyle) -> Vec<String> {
    let fits = |s: &str| text_width(s, size, style) <= max_width;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current = String::new();

        for word in paragraph.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_string();
                continue;
            }

            for ch in word.chars() {
                current.push(ch);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_scales_with_size() {
        let small = text_width("Hello", 10.0, FontStyle::Normal);
        let large = text_width("Hello", 20.0, FontStyle::Normal);
        assert!((large - 2.0 * small).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider() {
        assert!(text_width("pain scale", 11.0, FontStyle::Bold) > text_width("pain scale", 11.0, FontStyle::Normal));
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_text("No response", 170.0, 10.0, FontStyle::Normal), vec!["No response"]);
    }

    #[test]
    fn test_newlines_break() {
        let lines = wrap_text("first\n\nthird", 170.0, 10.0, FontStyle::Normal);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn test_long_text_wraps_within_width() {
        let text = "customers churn because onboarding takes too long ".repeat(10);
        let lines = wrap_text(text.trim(), 170.0, 10.0, FontStyle::Normal);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 10.0, FontStyle::Normal) <= 170.0);
        }
        assert_eq!(lines.join(" "), text.trim());
    }

    #[test]
    fn test_overlong_word_is_split() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, 50.0, 10.0, FontStyle::Normal);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }
}
