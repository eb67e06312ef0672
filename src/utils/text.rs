use unicode_width::UnicodeWidthChar;

/// 終端機上的顯示寬度，全形字元佔兩欄
pub fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum()
}

/// 依顯示寬度靠右對齊；超過寬度時不截斷
pub fn rjust(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(padding), s)
}
