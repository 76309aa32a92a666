use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;

use crate::backend::interface::UserStore;
use crate::core::{Account, AccountId};

#[derive(Default)]
pub struct MemoryStore {
    accounts: HashMap<AccountId, Account>
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore { accounts: HashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl UserStore for MemoryStore {
    fn get(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    fn create(&mut self, id: AccountId, name: &str) -> Option<Account> {
        match self.accounts.entry(id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let account = slot.insert(Account::new(id, name));
                debug!("created user {}", account);
                Some(account.clone())
            }
        }
    }

    fn update(&mut self, id: AccountId, name: &str) -> Option<Account> {
        let account = self.accounts.get_mut(&id)?;
        let previous = account.name.clone();
        account.name = name.to_owned();
        debug!("renamed user {} to {}", previous, account);
        return Some(account.clone());
    }

    fn delete(&mut self, id: AccountId) {
        if let Some(account) = self.accounts.remove(&id) {
            debug!("deleted user {}", account);
        }
    }
}
