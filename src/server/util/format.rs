//! String formatting helpers for nicknames and lookup results.

/// Expand a printf-style template with string arguments.
///
/// Supports positional `%N$s` directives (1-indexed), sequential `%s` directives and the
/// `%%` escape. Arguments that are not provided expand to an empty string and any other
/// directive is copied verbatim.
///
/// ```ignore
/// assert_eq!(format_positional("[%2$s] %1$s", &["Name", "CORP"]), "[CORP] Name");
/// ```
pub fn format_positional(template: &str, args: &[&str]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        output.push_str(&rest[..pos]);
        let directive = &rest[pos + 1..];

        if let Some(after) = directive.strip_prefix('%') {
            output.push('%');
            rest = after;
            continue;
        }

        if let Some(after) = directive.strip_prefix('s') {
            output.push_str(args.get(next_arg).copied().unwrap_or_default());
            next_arg += 1;
            rest = after;
            continue;
        }

        let digits = directive.bytes().take_while(u8::is_ascii_digit).count();
        if let Some(after) = directive[digits..].strip_prefix("$s") {
            match directive[..digits].parse::<usize>() {
                Ok(index) if index > 0 => {
                    output.push_str(args.get(index - 1).copied().unwrap_or_default());
                    rest = after;
                    continue;
                }
                _ => {}
            }
        }

        output.push('%');
        rest = directive;
    }

    output.push_str(rest);
    output
}

/// Remove markup tags such as `<color=0xff>` or `</b>` from a string.
///
/// An unterminated tag removes the remainder of the string.
pub fn strip_tags(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut in_tag = false;

    for c in value.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => output.push(c),
            _ => {}
        }
    }

    output
}
