#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    /// Stores the trimmed value; whitespace-only input is rejected.
    pub fn parse(s: String) -> Result<ContactName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("Name is required".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
