use sha2::{Digest, Sha256};

use crate::error::{AppError, Result};
use crate::models::Account;
use crate::storage::StoreRef;

#[derive(Clone)]
pub struct AccountRepository {
    store: StoreRef<Account>,
}

impl AccountRepository {
    pub fn new(store: StoreRef<Account>) -> Self {
        Self { store }
    }

    pub async fn count(&self) -> Result<usize> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || Ok(store.load()?.len()))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let store = self.store.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || {
            let account = store
                .load()?
                .into_iter()
                .find(|account| account.username == username);
            Ok(account)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Create an account. Usernames are compared exactly, case included.
    pub async fn register(&self, username: &str, password: &str) -> Result<Account> {
        let account = Account {
            username: username.to_string(),
            password_hash: hash_password(password),
        };

        let store = self.store.clone();
        let new_account = account.clone();
        tokio::task::spawn_blocking(move || {
            store.modify(|accounts| {
                if accounts.iter().any(|a| a.username == new_account.username) {
                    return Err(AppError::DuplicateUser);
                }
                accounts.push(new_account);
                Ok(())
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        tracing::info!("Registered user {}", account.username);
        Ok(account)
    }

    /// Check a username/password pair.
    ///
    /// Unknown users and wrong passwords both yield `InvalidCredentials`.
    pub async fn verify(&self, username: &str, password: &str) -> Result<Account> {
        let account = self.find_by_username(username).await?;

        match account {
            Some(account) if verify_password(password, &account.password_hash) => Ok(account),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}

fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

fn verify_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}
