/// Collapses line breaks in a platform string into single spaces.
///
/// `\r\n` counts as one break; a bare `\r` or `\n` each become one space.
/// Absence is preserved: `None` stays `None` and an empty string stays empty.
pub fn normalize_label(value: Option<&str>) -> Option<String> {
    value.map(normalize_str)
}

pub fn normalize_str(input: &str) -> String {
    if !input.contains(['\r', '\n']) {
        return input.to_owned();
    }
    let mut out = String::with_capacity(input.len());
    let mut it = input.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a\r\nb", "a b")]
    #[case("a\nb", "a b")]
    #[case("a\rb", "a b")]
    #[case("a\n\nb", "a  b")]
    #[case("a\r\n\r\nb", "a  b")]
    #[case("\n\r", "  ")]
    #[case("plain", "plain")]
    #[case("", "")]
    fn breaks_become_spaces(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_str(input), expected);
    }

    #[rstest]
    fn absence_is_preserved() {
        assert_eq!(normalize_label(None), None);
        assert_eq!(normalize_label(Some("")), Some(String::new()));
    }

    #[rstest]
    #[case("x\r\ny\rz\n")]
    #[case("\r\r\n\n")]
    #[case("Save\tAs…")]
    fn idempotent(#[case] input: &str) {
        let once = normalize_str(input);
        assert_eq!(normalize_str(&once), once);
    }
}
