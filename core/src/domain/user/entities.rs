use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl UserProfile {
    /// Name shown next to the user's content: display name, else email.
    pub fn public_name(&self) -> Option<String> {
        self.display_name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| self.email.clone().filter(|email| !email.is_empty()))
    }
}
