//! Line and platform classification.
//!
//! Maps raw TfNSW line/platform descriptors to the compact labels and
//! colors the board renders. The extraction rules are explicit ordered
//! scans rather than regexes so the behavior is easy to audit: each
//! function documents its rules in match order.

/// Transit-mode letters that prefix a short line code (Train, Ferry,
/// Light rail).
const MODE_PREFIXES: [char; 3] = ['T', 'F', 'L'];

/// Default line color when nothing in the table matches.
const DEFAULT_LINE_COLOR: &str = "#ffa900";

/// Line id to display color, matching the TfNSW identity palette.
const LINE_COLORS: &[(&str, &str)] = &[
    // Rail lines
    ("T1", "#F99D1C"),
    ("T2", "#0098CD"),
    ("T3", "#F37021"),
    ("T4", "#005AA3"),
    ("T5", "#C4258F"),
    ("T6", "#7C3E21"),
    ("T7", "#6F818E"),
    ("T8", "#00954C"),
    ("T9", "#D11F2F"),
    ("Hunter", "#833134"),
    ("Regional", "#F6891F"),
    ("Coaches", "#732A82"),
    // Ferry lines
    ("F1", "#00774B"),
    ("F2", "#144734"),
    ("F3", "#648C3C"),
    ("F4", "#BFD730"),
    ("F5", "#286142"),
    ("F6", "#00AB51"),
    ("F7", "#00B189"),
    ("F8", "#55622B"),
    ("F9", "#65B32E"),
    ("Stockton", "#5AB031"),
    // Light rail lines
    ("L1", "#BE1622"),
    ("L2", "#DD1E25"),
    ("L3", "#781140"),
    ("L4", "#BB2043"),
    ("NLR", "#EE343F"),
    // Mode-level fallbacks
    ("Metro", "#168388"),
    ("SydneyTrains", "#EC6606"),
    ("NSWTL", "#DD3F1D"),
    ("Bus", "#009ED7"),
    ("LightRail", "#E4022D"),
    ("Ferry", "#009E4D"),
];

/// Extract a short line code (T4, F1, L2, ...) from a raw line name.
///
/// Rules, in order:
/// 1. empty input -> "Unknown"
/// 2. a whitespace token starting with a mode letter (T/F/L) followed by
///    a digit run or a letter run -> prefix + run
/// 3. mentions "metro" -> "Metro"
/// 4. mentions "bus" -> the first token
/// 5. mentions "train" -> "Train"
/// 6. otherwise the first 4 characters, uppercased
pub fn short_line_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Unknown".to_string();
    }

    let upper = trimmed.to_uppercase();

    for token in upper.split_whitespace() {
        if let Some(code) = mode_prefixed_code(token) {
            return code;
        }
    }

    if upper.contains("METRO") {
        return "Metro".to_string();
    }
    if upper.contains("BUS") {
        if let Some(first) = upper.split_whitespace().next() {
            return first.to_string();
        }
    }
    if upper.contains("TRAIN") {
        return "Train".to_string();
    }

    upper.chars().take(4).collect()
}

/// Match a token like "T1", "F10" or "NLR"-style letter codes against the
/// mode-prefix rule. The code after the prefix is a maximal run of digits,
/// or failing that a maximal run of letters.
fn mode_prefixed_code(token: &str) -> Option<String> {
    let mut chars = token.chars();
    let prefix = chars.next()?;
    if !MODE_PREFIXES.contains(&prefix) {
        return None;
    }

    let rest = chars.as_str();
    let first = rest.chars().next()?;

    let run: String = if first.is_ascii_digit() {
        rest.chars().take_while(char::is_ascii_digit).collect()
    } else if first.is_ascii_alphabetic() {
        rest.chars().take_while(char::is_ascii_alphabetic).collect()
    } else {
        return None;
    };

    Some(format!("{prefix}{run}"))
}

/// Look up the display color for a raw line name.
///
/// Exact table match first, then substring containment in either
/// direction, then the default color. Empty input takes the default
/// directly: an empty needle is a substring of every key.
pub fn line_color(raw: &str) -> &'static str {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_LINE_COLOR;
    }

    for (key, color) in LINE_COLORS {
        if raw == *key {
            return color;
        }
    }

    for (key, color) in LINE_COLORS {
        if raw.contains(key) || key.contains(raw) {
            return color;
        }
    }

    DEFAULT_LINE_COLOR
}

/// Pick a legible text color for the given background color.
///
/// Perceptual luminance with 0.299/0.587/0.114 channel weights; strictly
/// above 0.5 takes dark text, everything else (including exactly 0.5 and
/// unparseable input) takes light text.
pub fn contrasting_text_color(color: &str) -> &'static str {
    match parse_hex_rgb(color) {
        // Per-mille integer weights; 127_500 corresponds to luminance 0.5.
        Some((r, g, b)) if 299 * r as u32 + 587 * g as u32 + 114 * b as u32 > 127_500 => "#000000",
        _ => "#ffffff",
    }
}

/// Parse a "#RRGGBB" color string.
fn parse_hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Extract a short platform/bay label from a raw descriptor.
///
/// Rules, in order: empty -> "-"; "STOP <letter>" -> the letter;
/// "PLATFORM <digits>" -> the digits; any digit run -> it; any letter ->
/// it; otherwise the raw string unchanged.
pub fn short_platform(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }

    let upper = trimmed.to_uppercase();

    if let Some(letter) = letter_after_keyword(&upper, "STOP") {
        return letter.to_string();
    }
    if let Some(digits) = digits_after_keyword(&upper, "PLATFORM") {
        return digits;
    }
    if let Some(digits) = first_digit_run(&upper) {
        return digits;
    }
    if let Some(letter) = upper.chars().find(char::is_ascii_alphabetic) {
        return letter.to_string();
    }

    raw.to_string()
}

/// Find `keyword` and return the first letter after it, skipping spaces.
fn letter_after_keyword(text: &str, keyword: &str) -> Option<char> {
    let idx = text.find(keyword)?;
    text[idx + keyword.len()..]
        .chars()
        .find(|c| !c.is_whitespace())
        .filter(char::is_ascii_alphabetic)
}

/// Find `keyword` and return the digit run after it, skipping spaces.
fn digits_after_keyword(text: &str, keyword: &str) -> Option<String> {
    let idx = text.find(keyword)?;
    let rest = text[idx + keyword.len()..].trim_start();
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

/// The first maximal run of ASCII digits in the text.
fn first_digit_run(text: &str) -> Option<String> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    Some(digits)
}
