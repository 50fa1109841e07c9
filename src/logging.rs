use std::fmt;

/// Display wrapper that hides most of an email address in log output.
///
/// Keeps the first character of the local part and the whole domain:
/// `olivia.martin@email.com` is written as `o***@email.com`. Values without
/// an `@` are fully redacted.
///
/// Every email that reaches a `tracing` field goes through this wrapper.
///
/// ```
/// use business_access::MaskedEmail;
///
/// assert_eq!(MaskedEmail("olivia.martin@email.com").to_string(), "o***@email.com");
/// assert_eq!(MaskedEmail("no-at-sign").to_string(), "[REDACTED]");
/// ```
#[derive(Clone, Copy)]
pub struct MaskedEmail<'a>(pub &'a str);

impl fmt::Display for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => write!(f, "{}***@{}", first, domain),
                None => write!(f, "***@{}", domain),
            },
            None => f.write_str("[REDACTED]"),
        }
    }
}

impl fmt::Debug for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Masks an optional email, writing `-` when absent.
pub(crate) struct MaybeEmail<'a>(pub Option<&'a str>);

impl fmt::Display for MaybeEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(email) => fmt::Display::fmt(&MaskedEmail(email), f),
            None => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_part_is_hidden() {
        let out = MaskedEmail("owner@techsolutions.com").to_string();
        assert_eq!(out, "o***@techsolutions.com");
        assert!(!out.contains("owner"));
    }

    #[test]
    fn debug_matches_display() {
        let masked = MaskedEmail("a@x.com");
        assert_eq!(format!("{:?}", masked), format!("{}", masked));
    }

    #[test]
    fn empty_local_part() {
        assert_eq!(MaskedEmail("@x.com").to_string(), "***@x.com");
    }

    #[test]
    fn absent_email_is_a_dash() {
        assert_eq!(MaybeEmail(None).to_string(), "-");
        assert_eq!(MaybeEmail(Some("b@x.com")).to_string(), "b***@x.com");
    }
}
