/// Result value formatting
///
/// Raw WCA results are integers whose meaning depends on the event:
/// centiseconds for timed events, a move count for fewest moves, and a
/// packed points/time/attempts value for multi-blind.

/// Fewest moves event id
pub const FEWEST_MOVES: &str = "333fm";

/// Multi-blind event id
pub const MULTI_BLIND: &str = "333mbf";

const CENTIS_PER_MINUTE: i64 = 6000;
const CENTIS_PER_SECOND: i64 = 100;

/// Textual form of a raw value, including an absent one
fn raw_text(raw: Option<i64>) -> String {
    match raw {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}

/// Format a raw result for display
///
/// Multi-blind values are shown undecoded. Negative or out-of-range values
/// are formatted arithmetically without validation.
pub fn format_time(event_id: &str, raw: Option<i64>) -> String {
    if event_id == FEWEST_MOVES {
        return format!("{} moves", raw_text(raw));
    }
    if event_id == MULTI_BLIND {
        return raw_text(raw);
    }

    let centis = match raw {
        None | Some(0) => return "-".to_string(),
        Some(value) => value,
    };

    // Floor division keeps the parts consistent for negative inputs
    let minutes = centis.div_euclid(CENTIS_PER_MINUTE);
    let seconds = centis.rem_euclid(CENTIS_PER_MINUTE).div_euclid(CENTIS_PER_SECOND);
    let hundredths = centis.rem_euclid(CENTIS_PER_SECOND);

    if minutes > 0 {
        format!("{}:{:02}.{:02}", minutes, seconds, hundredths)
    } else {
        format!("{}.{:02}", seconds, hundredths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewest_moves() {
        assert_eq!(format_time("333fm", Some(26)), "26 moves");
        assert_eq!(format_time("333fm", Some(0)), "0 moves");
        assert_eq!(format_time("333fm", None), "None moves");
    }

    #[test]
    fn test_multi_blind_is_not_decoded() {
        assert_eq!(format_time("333mbf", Some(4)), "4");
        assert_eq!(format_time("333mbf", Some(970360001)), "970360001");
        assert_eq!(format_time("333mbf", None), "None");
    }

    #[test]
    fn test_missing_or_zero_is_dash() {
        assert_eq!(format_time("333", Some(0)), "-");
        assert_eq!(format_time("333", None), "-");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_time("333", Some(7265)), "1:12.65");
        assert_eq!(format_time("444", Some(6000)), "1:00.00");
        assert_eq!(format_time("666", Some(60005)), "10:00.05");
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(format_time("333", Some(950)), "9.50");
        assert_eq!(format_time("222", Some(47)), "0.47");
        assert_eq!(format_time("333", Some(5999)), "59.99");
    }

    #[test]
    fn test_negative_values_are_not_validated() {
        // -1 floors to minute -1 with 59.99 remaining
        assert_eq!(format_time("333", Some(-1)), "59.99");
    }
}
