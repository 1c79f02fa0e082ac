const OPERATION_KEYWORDS: [&str; 3] = [
    "mutation",
    "query",
    "subscription",
];

/// Prepare raw selection text for [`SelectionTextParser`].
///
/// Lines are trimmed, and blank lines and `#` comments are dropped. If the
/// text opens with an operation header (`query Foo {`, a bare `{`, or a
/// header whose variable list spans several lines) the header and its
/// matching final `}` are stripped so only the selections remain.
///
/// [`SelectionTextParser`]: crate::selection_text::SelectionTextParser
pub fn selection_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<&str> = text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let opens_operation = lines.first().is_some_and(|first| is_operation_header(first));
    if opens_operation {
        if let Some(header_end) = lines.iter().position(|line| line.ends_with('{')) {
            lines.drain(..=header_end);
            if lines.last() == Some(&"}") {
                lines.pop();
            }
        }
    }

    lines.into_iter().map(str::to_string).collect()
}

fn is_operation_header(line: &str) -> bool {
    if line == "{" {
        return true;
    }
    let keyword = line.split(|c: char| c.is_whitespace() || c == '(' || c == '{')
        .next()
        .unwrap_or_default();
    OPERATION_KEYWORDS.contains(&keyword)
}
