//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render minutes as `+02h 25m` / `-01h 10m`, or `+02:25` in short form.
/// Zero never gets a sign.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Spelled-out balance phrase: `+ 2 hours and 15 minutes`.
pub fn balance_phrase(total_min: i64) -> String {
    let sign = if total_min < 0 { "-" } else { "+" };
    let hours = total_min.abs() / 60;
    let minutes = total_min.abs() % 60;

    let mut out = format!("{} {} hours", sign, hours);
    if minutes > 0 {
        out.push_str(&format!(" and {} minutes", minutes));
    }
    out
}

/// Textual description and ANSI color for an insertion method code.
pub fn describe_method(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "clock" => ("Clocked".into(), "\x1b[32m"),
        "manual" => ("Manual".into(), "\x1b[33m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mins2readable_signs_and_forms() {
        assert_eq!(mins2readable(145, true, false), "+02h 25m");
        assert_eq!(mins2readable(-70, true, false), "-01h 10m");
        assert_eq!(mins2readable(0, true, false), "00h 00m");
        assert_eq!(mins2readable(145, true, true), "+02:25");
        assert_eq!(mins2readable(145, false, false), "02h 25m");
    }

    #[test]
    fn balance_phrase_omits_zero_minutes() {
        assert_eq!(balance_phrase(120), "+ 2 hours");
        assert_eq!(balance_phrase(-135), "- 2 hours and 15 minutes");
        assert_eq!(balance_phrase(0), "+ 0 hours");
    }
}
