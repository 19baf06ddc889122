/// Trims, strips literal `<` and `>` and caps the result at `cap`
/// characters. Runs only after validation; the length rules judge the raw
/// value, not the sanitized one.
#[must_use]
pub fn sanitize_input(input: &str, cap: usize) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sanitize_input;

    #[test]
    fn strips_angle_brackets_after_trimming() {
        assert_eq!(
            sanitize_input("  <script>x</script>  ", 5000),
            "scriptx/script"
        );
    }

    #[test]
    fn caps_length_last() {
        assert_eq!(sanitize_input("<abcdef>", 4), "abcd");
        assert_eq!(sanitize_input("abcdef", 6), "abcdef");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(sanitize_input(" a  b ", 100), "a  b");
    }
}
