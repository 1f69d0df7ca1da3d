//! Program-number grouping for coupled and field entries.

/// Reduces a program number to the key its wagering entry groups under.
///
/// Field entries (digits then a literal `F`, e.g. "12F") all share the
/// group "F" regardless of their digits. Coupled entries (digits then a
/// single letter, e.g. "1A") group under the shared digit root. Anything
/// else passes through unchanged; an absent program is the caller's
/// `Option::map`. Matching is anchored at the start, first match wins.
pub fn resolve(program: &str) -> &str {
    let digits = program
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return program;
    }
    match program.as_bytes().get(digits) {
        Some(&b'F') => "F",
        _ => &program[..digits],
    }
}
