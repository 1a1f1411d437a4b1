//! Simulated wallet identity.
//!
//! Real wallet login is delegated to an external identity provider. The
//! notepad only observes whether a wallet is connected and which address it
//! is, so that is all a [`Session`] holds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NotepadError, Result};
use crate::storage::KeyValueStore;

/// Address the demo connect flow hands out when none is supplied.
pub const DEMO_WALLET_ADDRESS: &str = "0x742d35Cc6bF3A8c3bCf3654E64b1fc7BA7A92A39";

/// Store key holding the connected address.
pub const SESSION_KEY: &str = "walletConnected";

const ADDRESS_HEX_LEN: usize = 40;

/// An EVM-style account address: `0x` followed by 40 hex digits.
///
/// Original casing is kept for display; comparisons and slot keys use the
/// lowercase form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| NotepadError::InvalidAddress(format!("{} (missing 0x prefix)", trimmed)))?;
        if hex.len() != ADDRESS_HEX_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(NotepadError::InvalidAddress(format!(
                "{} (expected 0x followed by {} hex digits)",
                trimmed, ADDRESS_HEX_LEN
            )));
        }
        Ok(Self(format!("0x{}", hex)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased address, used for slot keys.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Abbreviated form for headers: `0x742d...2A39`.
    pub fn short(&self) -> String {
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl PartialEq for WalletAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for WalletAddress {}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = NotepadError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = NotepadError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}

/// Wallet connection state as observed by the notepad.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    address: Option<WalletAddress>,
}

impl Session {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: WalletAddress) -> Self {
        Self {
            address: Some(address),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&WalletAddress> {
        self.address.as_ref()
    }

    /// The connected address, or `NotepadError::NotAuthenticated`.
    pub fn require(&self) -> Result<&WalletAddress> {
        self.address.as_ref().ok_or(NotepadError::NotAuthenticated)
    }

    pub fn connect(&mut self, address: WalletAddress) {
        self.address = Some(address);
    }

    pub fn disconnect(&mut self) {
        self.address = None;
    }

    /// Read the session saved by a previous [`Session::persist`].
    ///
    /// A missing key means disconnected. A stored value that is not a valid
    /// address is reported rather than silently ignored.
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        match store.get(SESSION_KEY)? {
            Some(value) => Ok(Self::connected(WalletAddress::parse(&value)?)),
            None => Ok(Self::disconnected()),
        }
    }

    /// Save this session so later runs see the same connection state.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        match &self.address {
            Some(address) => store.set(SESSION_KEY, address.as_str()),
            None => store.delete(SESSION_KEY).map(|_| ()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_demo_address_parses() {
        let address = WalletAddress::parse(DEMO_WALLET_ADDRESS).unwrap();
        assert_eq!(address.as_str(), DEMO_WALLET_ADDRESS);
        assert_eq!(address.short(), "0x742d...2A39");
    }

    #[test]
    fn test_invalid_addresses_rejected() {
        for input in [
            "",
            "742d35Cc6bF3A8c3bCf3654E64b1fc7BA7A92A39",
            "0x742d",
            "0x742d35Cc6bF3A8c3bCf3654E64b1fc7BA7A92A3Z",
            "0x742d35Cc6bF3A8c3bCf3654E64b1fc7BA7A92A3900",
        ] {
            assert!(
                matches!(
                    WalletAddress::parse(input),
                    Err(NotepadError::InvalidAddress(_))
                ),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_address_equality_ignores_case() {
        let mixed = WalletAddress::parse(DEMO_WALLET_ADDRESS).unwrap();
        let lower = WalletAddress::parse(&DEMO_WALLET_ADDRESS.to_lowercase()).unwrap();
        assert_eq!(mixed, lower);
        assert_eq!(mixed.normalized(), lower.normalized());
    }

    #[test]
    fn test_require_when_disconnected() {
        let session = Session::disconnected();
        assert!(matches!(
            session.require(),
            Err(NotepadError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_connect_disconnect() {
        let mut session = Session::disconnected();
        session.connect(WalletAddress::parse(DEMO_WALLET_ADDRESS).unwrap());
        assert!(session.is_connected());
        session.disconnect();
        assert!(!session.is_connected());
    }

    #[test]
    fn test_persist_and_restore() {
        let mut store = MemoryStore::new();
        assert_eq!(Session::restore(&store).unwrap(), Session::disconnected());

        let session = Session::connected(WalletAddress::parse(DEMO_WALLET_ADDRESS).unwrap());
        session.persist(&mut store).unwrap();
        assert_eq!(Session::restore(&store).unwrap(), session);

        Session::disconnected().persist(&mut store).unwrap();
        assert!(!Session::restore(&store).unwrap().is_connected());
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "true").unwrap();
        assert!(matches!(
            Session::restore(&store),
            Err(NotepadError::InvalidAddress(_))
        ));
    }
}
