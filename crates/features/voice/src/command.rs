//! Transcript parsing.
//!
//! A spoken command is an ordered-prefix match: the first listed prefix that
//! starts the transcript wins and the remainder is the target phrase. A
//! transcript with no known prefix is not a command, and the node tree is
//! never scanned for it.

/// Recognized command prefixes, checked in this order.
pub const COMMAND_PREFIXES: [&str; 8] =
    ["click on ", "click ", "press ", "open ", "select ", "choose ", "tap ", "go to "];

/// Extracts the target phrase from a transcript.
///
/// The transcript is trimmed and lowercased before matching. Returns `None`
/// when no prefix matches or the remainder is empty.
#[must_use]
pub fn parse_command(transcript: &str) -> Option<String> {
    let normalized = transcript.trim().to_lowercase();

    for prefix in COMMAND_PREFIXES {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            let target = rest.trim();
            if target.is_empty() {
                return None;
            }
            return Some(target.to_owned());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_listed_prefix_wins() {
        // "click on " is checked before "click ", so the target is not
        // "on settings".
        assert_eq!(parse_command("click on settings"), Some("settings".to_owned()));
        assert_eq!(parse_command("click settings"), Some("settings".to_owned()));
    }

    #[test]
    fn all_prefixes_are_recognized() {
        for prefix in COMMAND_PREFIXES {
            let transcript = format!("{prefix}next button");
            assert_eq!(parse_command(&transcript), Some("next button".to_owned()), "{prefix}");
        }
    }

    #[test]
    fn transcript_is_normalized() {
        assert_eq!(parse_command("  Click ON Settings  "), Some("settings".to_owned()));
    }

    #[test]
    fn unknown_prefix_is_not_a_command() {
        assert_eq!(parse_command("please click settings"), None);
        assert_eq!(parse_command("settings"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn empty_target_is_not_a_command() {
        assert_eq!(parse_command("click on "), None);
        assert_eq!(parse_command("tap   "), None);
    }

    #[test]
    fn prefix_must_start_the_transcript() {
        assert_eq!(parse_command("now press enter"), None);
    }
}
