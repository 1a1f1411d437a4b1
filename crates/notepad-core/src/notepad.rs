//! The notepad service: encrypt, decrypt, save, load, wipe.
//!
//! `Notepad` owns a persistence collaborator and the current wallet session.
//! Encryption never needs a session; every slot operation does.

use chrono::Utc;

use crate::crypto::{self, require_present, Envelope};
use crate::error::Result;
use crate::identity::{Session, WalletAddress};
use crate::persistence::{slot_key, NotePersistence};
use crate::storage::NoteRecord;

pub struct Notepad<P> {
    persistence: P,
    session: Session,
}

impl<P: NotePersistence> Notepad<P> {
    pub fn new(persistence: P, session: Session) -> Self {
        Self {
            persistence,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn connect(&mut self, address: WalletAddress) {
        tracing::info!(address = %address.short(), "wallet connected");
        self.session.connect(address);
    }

    pub fn disconnect(&mut self) {
        if let Some(address) = self.session.address() {
            tracing::info!(address = %address.short(), "wallet disconnected");
        }
        self.session.disconnect();
    }

    /// Encrypt a note. See [`crypto::encrypt`].
    pub fn encrypt_note(&self, plaintext: &str, passphrase: &str) -> Result<Envelope> {
        let envelope = crypto::encrypt(plaintext, passphrase)?;
        tracing::debug!(bytes = envelope.as_str().len(), "note encrypted");
        Ok(envelope)
    }

    /// Decrypt a note. See [`crypto::decrypt`].
    pub fn decrypt_note(&self, envelope: &Envelope, passphrase: &str) -> Result<String> {
        let plaintext = crypto::decrypt(envelope, passphrase)?;
        tracing::debug!("note decrypted");
        Ok(plaintext)
    }

    /// Save `envelope` into the connected identity's slot, replacing any
    /// previous note.
    ///
    /// # Errors
    ///
    /// - `NotepadError::NotAuthenticated` without a connected wallet
    /// - `NotepadError::MissingInput` for a blank envelope
    /// - `NotepadError::Persistence` if the write outcome is a failure
    pub async fn save(&mut self, envelope: &Envelope) -> Result<NoteRecord> {
        let slot = slot_key(self.session.require()?);
        require_present("encrypted content", envelope.as_str())?;

        let record = NoteRecord::seal(envelope.clone(), Utc::now());
        self.persistence.write(&slot, &record).await?;

        tracing::info!(slot = %slot, id = %record.id, hash = %record.hash, "note saved");
        Ok(record)
    }

    /// Encrypt `plaintext` and save the resulting envelope.
    pub async fn encrypt_and_save(
        &mut self,
        plaintext: &str,
        passphrase: &str,
    ) -> Result<NoteRecord> {
        self.session.require()?;
        let envelope = self.encrypt_note(plaintext, passphrase)?;
        self.save(&envelope).await
    }

    /// Load the connected identity's note, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// - `NotepadError::NotAuthenticated` without a connected wallet
    /// - `NotepadError::Integrity` if the stored hash does not match the content
    pub async fn load(&self) -> Result<Option<NoteRecord>> {
        let slot = slot_key(self.session.require()?);
        let record = self.persistence.read(&slot).await?;

        match &record {
            Some(record) => {
                record.verify()?;
                tracing::info!(slot = %slot, id = %record.id, "note loaded");
            }
            None => tracing::info!(slot = %slot, "no saved note"),
        }
        Ok(record)
    }

    /// Remove the connected identity's note. Returns whether one existed.
    pub async fn wipe(&mut self) -> Result<bool> {
        let slot = slot_key(self.session.require()?);
        let removed = self.persistence.erase(&slot).await?;
        tracing::info!(slot = %slot, removed, "slot wiped");
        Ok(removed)
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn into_parts(self) -> (P, Session) {
        (self.persistence, self.session)
    }
}
