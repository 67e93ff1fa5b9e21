use crate::domain::{ContactEmail, ContactMessage, ContactName};

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessage,
}

impl ContactSubmission {
    /// Validates the three fields in display order, short-circuiting on the
    /// first failure. The same rules run on the client before submitting
    /// and on the server before forwarding.
    pub fn parse(
        name: String,
        email: String,
        message: String,
    ) -> Result<ContactSubmission, String> {
        let name = ContactName::parse(name)?;
        let email = ContactEmail::parse(email)?;
        let message = ContactMessage::parse(message)?;
        Ok(Self { name, email, message })
    }
}
