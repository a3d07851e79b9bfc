use std::sync::OnceLock;

use regex::Regex;

const MAX_ADDRESS_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;
const IPV6_TAG: &str = "IPv6:";

fn local_part_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Each dot-separated word is either an atom or a quoted string with backslash escapes.
        Regex::new(
            r#"^(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+|"(?:[\x01-\x08\x0B\x0C\x0E-\x1F\x21\x23-\x5B\x5D-\x7F]|\\[\x00-\x7F])*")(?:\.(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+|"(?:[\x01-\x08\x0B\x0C\x0E-\x1F\x21\x23-\x5B\x5D-\x7F]|\\[\x00-\x7F])*"))*$"#,
        )
        .expect("local part pattern compiles")
    })
}

fn hostname_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:(?:xn--)?[a-z0-9]+(?:-+[a-z0-9]+)*\.)+(?:[a-z][a-z0-9]*|xn--[a-z0-9]+)(?:-+[a-z0-9]+)*$",
        )
        .expect("hostname pattern compiles")
    })
}

fn ipv4_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$",
        )
        .expect("ipv4 pattern compiles")
    })
}

/// Syntax check for `local-part@domain` addresses, following PHP's `FILTER_VALIDATE_EMAIL`.
///
/// The local part is a sequence of atoms or quoted strings. The domain is a dotted
/// hostname or a bracketed IPv4 / `IPv6:` literal. Addresses longer than 254
/// characters are rejected.
pub(crate) fn is_valid_email(candidate: &str) -> bool {
    if candidate.len() > MAX_ADDRESS_LENGTH {
        return false;
    }

    // Quoted local parts may contain '@'; domains never do.
    let Some((local, domain)) = candidate.rsplit_once('@') else {
        return false;
    };

    if local.len() > MAX_LOCAL_PART_LENGTH || !local_part_pattern().is_match(local) {
        return false;
    }

    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return is_valid_address_literal(literal);
    }

    domain
        .split('.')
        .all(|label| label.len() <= MAX_LABEL_LENGTH)
        && hostname_pattern().is_match(domain)
}

fn is_valid_address_literal(literal: &str) -> bool {
    let tagged = literal
        .get(..IPV6_TAG.len())
        .is_some_and(|tag| tag.eq_ignore_ascii_case(IPV6_TAG));
    if !tagged {
        return ipv4_pattern().is_match(literal);
    }

    let address = &literal[IPV6_TAG.len()..];
    if !address.contains('.') {
        return is_valid_ipv6(address, 8, 6);
    }

    // IPv4-mapped form: six hex groups, or at most four around a "::", then a dotted quad.
    let Some(split) = address.rfind(':') else {
        return false;
    };
    let (groups, ipv4) = address.split_at(split + 1);
    let groups = if groups.ends_with("::") {
        groups
    } else {
        &groups[..groups.len() - 1]
    };

    ipv4_pattern().is_match(ipv4) && is_valid_ipv6(groups, 6, 4)
}

/// `full` groups without compression, or at most `compressed` groups around one "::".
fn is_valid_ipv6(address: &str, full: usize, compressed: usize) -> bool {
    match address.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return false;
            }
            match (count_hex_groups(head), count_hex_groups(tail)) {
                (Some(head), Some(tail)) => head + tail <= compressed,
                _ => false,
            }
        }
        None => count_hex_groups(address) == Some(full),
    }
}

fn count_hex_groups(part: &str) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }

    part.split(':').try_fold(0, |count, group| {
        let valid = (1..=4).contains(&group.len()) && group.chars().all(|c| c.is_ascii_hexdigit());
        valid.then_some(count + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_common_addresses() {
        for address in [
            "a@b.com",
            "jan.kowalski@wiseb2b.eu",
            "orders+gpsr@my-company.eu",
            "OFFICE@EXAMPLE.COM",
            "kontakt@xn--d1acufc.xn--p1ai",
            "ops@sub.domain-with--hyphens.pl",
            "root@[192.168.0.1]",
        ] {
            assert!(is_valid_email(address), "{address} should be valid");
        }
    }

    #[test]
    fn accepts_quoted_local_parts() {
        for address in [
            r#""john.doe"@example.com"#,
            r#""john\ doe"@example.com"#,
            r#""a@b"@example.com"#,
            r#"first."quoted".last@example.com"#,
            r#"""@example.com"#,
        ] {
            assert!(is_valid_email(address), "{address} should be valid");
        }
    }

    #[test]
    fn quoted_text_excludes_bare_whitespace_and_quotes() {
        for address in [
            r#""john doe"@example.com"#,
            r#""john"doe"@example.com"#,
            r#""unterminated@example.com"#,
        ] {
            assert!(!is_valid_email(address), "{address} should be invalid");
        }
    }

    #[test]
    fn accepts_ipv6_literals() {
        for address in [
            "user@[IPv6:2001:db8::1]",
            "user@[ipv6:2001:0db8:85a3:0000:0000:8a2e:0370:7334]",
            "user@[IPv6:::]",
            "user@[IPv6:::ffff:192.0.2.1]",
            "user@[IPv6:1:2:3:4:5:6:192.0.2.1]",
        ] {
            assert!(is_valid_email(address), "{address} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_ipv6_literals() {
        for address in [
            "user@[2001:db8::1]",
            "user@[IPv6:2001:db8:1]",
            "user@[IPv6:1:2:3:4:5:6:7::]",
            "user@[IPv6:1::2::3]",
            "user@[IPv6:12345::1]",
            "user@[IPv6:1:2:3:4:5::192.0.2.1]",
            "user@[IPv6:::ffff:300.0.2.1]",
        ] {
            assert!(!is_valid_email(address), "{address} should be invalid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for address in [
            "",
            "wiseb2b.eu",
            "@example.com",
            "user@",
            "user@localhost",
            "user@@example.com",
            "user@exa@mple.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example-.com",
            "user@example.1com",
            "user @example.com",
            " user@example.com",
            "user@example.com\n",
            "user@[300.1.1.1]",
            "user@[192.168.0.1",
        ] {
            assert!(!is_valid_email(address), "{address:?} should be invalid");
        }
    }

    #[test]
    fn enforces_length_limits() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!is_valid_email(&long_local));

        let long_label = format!("user@{}.com", "a".repeat(64));
        assert!(!is_valid_email(&long_label));

        let max_local = format!("{}@example.com", "a".repeat(64));
        assert!(is_valid_email(&max_local));
    }

    #[test]
    fn caps_whole_address_at_254_characters() {
        let address = |tld_length: usize| {
            format!(
                "{}@{}{}",
                "b".repeat(64),
                format!("{}.", "a".repeat(60)).repeat(3),
                "c".repeat(tld_length)
            )
        };

        let longest = address(6);
        assert_eq!(longest.len(), 254);
        assert!(is_valid_email(&longest));

        let too_long = address(7);
        assert_eq!(too_long.len(), 255);
        assert!(!is_valid_email(&too_long));

        let sprawling = format!(
            "{}@{}com",
            "b".repeat(64),
            format!("{}.", "a".repeat(60)).repeat(4)
        );
        assert!(!is_valid_email(&sprawling));
    }
}
