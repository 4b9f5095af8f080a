use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to at most `width` terminal columns, marking the cut
/// with an ellipsis. Wide (CJK) characters count as two columns.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.push('…');
    fitted
}

#[cfg(test)]
mod tests {
    use super::fit_to_width;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("short", 10), "short");
        assert_eq!(fit_to_width("exhibition", 5), "exhi…");
        assert_eq!(fit_to_width("anything", 0), "");

        let fitted = fit_to_width("창경궁 물빛연화", 7);
        assert!(fitted.width() <= 7);
        assert!(fitted.ends_with('…'));
    }
}
