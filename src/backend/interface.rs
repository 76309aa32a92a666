use crate::core::{Account, AccountId};

pub trait UserStore {
    fn get(&self, id: AccountId) -> Option<Account>;
    /// Returns `None` when the id is already taken.
    fn create(&mut self, id: AccountId, name: &str) -> Option<Account>;
    /// Returns `None` when there is no such id.
    fn update(&mut self, id: AccountId, name: &str) -> Option<Account>;
    fn delete(&mut self, id: AccountId);
}
