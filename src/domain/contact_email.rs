#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Accepts anything shaped like `local@domain.tld`: no whitespace,
    /// exactly one `@`, and a dot inside the domain part. Stores the
    /// trimmed value.
    pub fn parse(s: String) -> Result<ContactEmail, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Email is required".to_string());
        }
        if !has_email_shape(trimmed) {
            return Err("Please enter a valid email address".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Equivalent to the shape `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
fn has_email_shape(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        }
        _ => false,
    }
}
