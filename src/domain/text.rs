use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` so that it fits in `width` terminal columns, ending with `…` when cut
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Put `left` and `right` on one line of `width` columns, right-aligning `right`
///
/// `left` is truncated first when both do not fit.
pub fn justify(left: &str, right: &str, width: usize) -> String {
    let right_width = right.width();
    if right_width >= width {
        return truncate_to_width(right, width);
    }
    let room = width - right_width;
    let left = truncate_to_width(left, room.saturating_sub(1));
    let gap = room - left.width();
    format!("{left}{}{right}", " ".repeat(gap))
}
