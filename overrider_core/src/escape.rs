/// Escape `value` for embedding between a pair of `quote` characters in
/// generated code.
///
/// Backslashes and the quote itself are always escaped. Single and double
/// quoted strings also escape line breaks; backtick templates escape `${` so
/// the static default never interpolates.
pub fn escape_quoted(value: &str, quote: char) -> String {
	let mut result = String::with_capacity(value.len() + 8);
	let mut chars = value.chars().peekable();

	while let Some(ch) = chars.next() {
		match ch {
			'\\' => result.push_str("\\\\"),
			'\n' if quote != '`' => result.push_str("\\n"),
			'\r' if quote != '`' => result.push_str("\\r"),
			'$' if quote == '`' && chars.peek() == Some(&'{') => result.push_str("\\$"),
			ch if ch == quote => {
				result.push('\\');
				result.push(ch);
			}
			ch => result.push(ch),
		}
	}

	result
}
