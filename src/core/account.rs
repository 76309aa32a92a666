use std::fmt;

pub type AccountId = u64;

/// A user as the server keeps it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
}

impl Account {
    pub fn new(id: AccountId, name: &str) -> Account {
        Account { id, name: name.to_owned() }
    }

    pub fn info(&self) -> String {
        format!("User: {}", self.name)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
