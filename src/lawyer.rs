use serde::{Deserialize, Serialize};

/// A matter a lawyer is acting on and wants to find in the cause list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedMatter {
    pub client_name: String,
    /// Empty when the matter is not tied to a single tenement.
    #[serde(default)]
    pub tenement_number: String,
    #[serde(default)]
    pub other_party_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawyer {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub assigned: Vec<AssignedMatter>,
}

impl Lawyer {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            assigned: Vec::new(),
        }
    }

    pub fn add_assigned_matter(
        &mut self,
        client_name: &str,
        tenement_number: &str,
        other_party_names: &[&str],
    ) {
        self.assigned.push(AssignedMatter {
            client_name: client_name.to_string(),
            tenement_number: tenement_number.to_string(),
            other_party_names: other_party_names.iter().map(|s| s.to_string()).collect(),
        });
    }
}
