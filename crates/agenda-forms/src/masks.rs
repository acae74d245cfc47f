//! Input masks for the national-ID fields.
//!
//! These mirror the client-side formatting scripts character for character,
//! so server-rendered initial values match what the enhancement script would
//! produce. Both masks are progressive: partial input yields a partially
//! formatted value.

/// Maximum digits of a CPF.
const CPF_DIGITS: usize = 11;

/// Formats a CPF progressively: `000.000.000-00`.
///
/// Non-digits are stripped, input is capped at 11 digits, and separators
/// appear as soon as the following group starts (`"1234"` → `"123.4"`).
#[must_use]
pub fn format_cpf(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(CPF_DIGITS)
        .collect();

    let group = |from: usize, to: usize| digits.get(from..to.min(digits.len())).unwrap_or("");
    let (p1, p2, p3, p4) = (group(0, 3), group(3, 6), group(6, 9), group(9, 11));

    let mut out = String::from(p1);
    if !p2.is_empty() {
        if !out.is_empty() {
            out.push('.');
        }
        out.push_str(p2);
    }
    if !p3.is_empty() {
        out.push('.');
        out.push_str(p3);
    }
    if !p4.is_empty() {
        out.push('-');
        out.push_str(p4);
    }
    out
}

/// The submit-time normalization: digits only, 11 at most.
#[must_use]
pub fn strip_cpf(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(CPF_DIGITS)
        .collect()
}

fn sanitize_crp(raw: &str) -> String {
    let compact: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let rest = compact.strip_prefix("CRP").map_or(compact.as_str(), |r| {
        r.strip_prefix(':').unwrap_or(r)
    });
    rest.chars()
        .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase() || *c == '/' || *c == '-')
        .collect()
}

/// Formats a CRP registry number progressively.
///
/// Accepted final shapes are region/sequence pairs like `06/124424`,
/// `14/05473-7` and `02/IS265`: two region digits, a slash (inserted
/// automatically), then either a 1-2 letter prefix plus up to six digits,
/// digits with an optional check-digit hyphen (5+1), or up to seven plain
/// digits. A leading `CRP:` prefix and stray spacing are discarded.
#[must_use]
pub fn format_crp(raw: &str) -> String {
    let mut s = sanitize_crp(raw);

    let bytes = s.as_bytes();
    if bytes.len() >= 2
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes.get(2) != Some(&b'/')
    {
        s.insert(2, '/');
    }

    let Some(slash) = s.find('/') else {
        return s.chars().filter(char::is_ascii_digit).take(2).collect();
    };

    let region: String = s[..slash]
        .chars()
        .filter(char::is_ascii_digit)
        .take(2)
        .collect();
    let sep = if region.is_empty() { "" } else { "/" };
    let tail: String = s[slash + 1..].chars().filter(|c| *c != '/').collect();

    // 1-2 letter prefix followed by digits.
    let letters: String = tail
        .chars()
        .take_while(char::is_ascii_uppercase)
        .take(2)
        .collect();
    if !letters.is_empty() {
        let digits: String = tail
            .chars()
            .skip(letters.len())
            .filter(char::is_ascii_digit)
            .take(6)
            .collect();
        return format!("{region}{sep}{letters}{digits}");
    }

    let mut t: String = tail
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    while t.contains("--") {
        t = t.replace("--", "-");
    }

    if t.contains('-') {
        // Check-digit shape: five digits, hyphen, one digit.
        let digits: String = t.chars().filter(char::is_ascii_digit).collect();
        let pre: String = digits.chars().take(5).collect();
        let dv: String = digits.chars().skip(5).take(1).collect();
        if dv.is_empty() {
            format!("{region}{sep}{pre}-")
        } else {
            format!("{region}{sep}{pre}-{dv}")
        }
    } else {
        let seq: String = t.chars().take(7).collect();
        format!("{region}{sep}{seq}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_full() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
        assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
    }

    #[test]
    fn cpf_partial_stays_partial() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("1"), "1");
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234"), "123.4");
        assert_eq!(format_cpf("123456"), "123.456");
        assert_eq!(format_cpf("1234567"), "123.456.7");
        assert_eq!(format_cpf("123456789"), "123.456.789");
        assert_eq!(format_cpf("1234567890"), "123.456.789-0");
    }

    #[test]
    fn cpf_caps_at_eleven_digits() {
        assert_eq!(format_cpf("123456789012345"), "123.456.789-01");
    }

    #[test]
    fn cpf_strip() {
        assert_eq!(strip_cpf("123.456.789-01"), "12345678901");
        assert_eq!(strip_cpf("abc"), "");
    }

    #[test]
    fn crp_inserts_slash_after_region() {
        assert_eq!(format_crp("0"), "0");
        assert_eq!(format_crp("06"), "06/");
        assert_eq!(format_crp("061"), "06/1");
        assert_eq!(format_crp("06124424"), "06/124424");
    }

    #[test]
    fn crp_strips_prefix_and_spacing() {
        assert_eq!(format_crp("CRP 06/124424"), "06/124424");
        assert_eq!(format_crp("crp: 06 / 124424"), "06/124424");
    }

    #[test]
    fn crp_letter_prefix() {
        assert_eq!(format_crp("02/is265"), "02/IS265");
        assert_eq!(format_crp("04/IP003974"), "04/IP003974");
        // Digits cap at six after the letters.
        assert_eq!(format_crp("04/IP0039741"), "04/IP003974");
    }

    #[test]
    fn crp_check_digit_shape() {
        assert_eq!(format_crp("14/05473-7"), "14/05473-7");
        assert_eq!(format_crp("14/05473-"), "14/05473-");
        assert_eq!(format_crp("14/05473--7"), "14/05473-7");
    }

    #[test]
    fn crp_plain_digits_cap_at_seven() {
        assert_eq!(format_crp("03/00103271"), "03/0010327");
    }

    #[test]
    fn crp_garbage_reduces_to_digits() {
        assert_eq!(format_crp("abc"), "");
        assert_eq!(format_crp("x1y2z3"), "12");
    }
}
