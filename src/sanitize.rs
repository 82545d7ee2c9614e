//! Cleaning up text typed at the console.
//!
//! Hero names are shown in every status line, so they are stripped of the
//! escape sequences a terminal sends for arrow keys and the like before a
//! session ever sees them. Raw input that only goes to the log is kept as
//! typed but escaped onto one line.

/// Longest hero name kept, in chars.
pub const NAME_MAX: usize = 32;

/// Chars of raw input shown in a log line before it is cut.
const LOG_PREVIEW: usize = 80;

/// Remove ANSI escape sequences: CSI (`ESC [ ... final`), OSC
/// (`ESC ] ... BEL` or `ESC ] ... ESC \`) and two-char `ESC x` forms.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' {
                        if chars.peek() == Some(&'\\') {
                            chars.next();
                        }
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    out
}

/// Hero name as it will be displayed: escape sequences and other control
/// characters removed, whitespace runs collapsed, capped at [`NAME_MAX`].
/// May come back empty; callers substitute their default name.
pub fn clean_name(raw: &str) -> String {
    let printable: String = strip_ansi(raw)
        .chars()
        .filter(|c| c.is_whitespace() || !c.is_control())
        .collect();
    let joined = printable.split_whitespace().collect::<Vec<_>>().join(" ");
    let capped: String = joined.chars().take(NAME_MAX).collect();
    capped.trim_end().to_string()
}

/// Single-line, length-capped rendering of raw input for log messages.
pub fn escape_log(s: &str) -> String {
    let mut out: String = s
        .chars()
        .take(LOG_PREVIEW)
        .flat_map(char::escape_debug)
        .collect();
    if s.chars().nth(LOG_PREVIEW).is_some() {
        out.push('…');
    }
    out
}
