pub mod credentials;
pub mod keychain;
