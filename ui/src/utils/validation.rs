/// Required-field rule: whitespace-only input counts as missing
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Email presence check: one @ with text on both sides and no inner spaces
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local_part, domain_part)) => {
            !local_part.is_empty() && !domain_part.is_empty() && !domain_part.contains('@')
        }
        None => false,
    }
}

pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" Ana "));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ana@example.org"));
        assert!(is_valid_email("  ana.silva@mail.example.fr "));
        assert!(is_valid_email("ana@localhost"));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@@example.org"));
        assert!(!is_valid_email("ana@ex@ample.org"));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana silva@example.org"));
    }
}
