use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::prelude::*;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

const NONCE_LEN: usize = 12;
const SALT_LEN: usize = 32;
const SESSION_FILE: &str = "session.dat";
const SALT_FILE: &str = "install.salt";

/// Bearer token persisted between launches, encrypted with AES-256-GCM
///
/// The key is SHA-256 over a random per-install salt, so a copied
/// `session.dat` is useless without the salt file next to it.
#[derive(Debug, Clone)]
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn salt_path(&self) -> PathBuf {
        self.dir.join(SALT_FILE)
    }

    /// Read the install salt, creating it on first use
    fn salt(&self, create: bool) -> Result<Vec<u8>, String> {
        let path = self.salt_path();
        match fs::read(&path) {
            Ok(bytes) if bytes.len() == SALT_LEN => Ok(bytes),
            Ok(_) | Err(_) if create => {
                let mut salt = vec![0u8; SALT_LEN];
                rand::rng().fill_bytes(&mut salt);
                fs::create_dir_all(&self.dir)
                    .map_err(|e| format!("Failed to create data dir: {}", e))?;
                fs::write(&path, &salt).map_err(|e| format!("Failed to write salt: {}", e))?;
                log::debug!("[TokenStore] Created new install salt");
                Ok(salt)
            }
            Ok(_) => Err("Install salt is corrupt".to_string()),
            Err(e) => Err(format!("Failed to read salt: {}", e)),
        }
    }

    pub fn save(&self, token: &str) -> Result<(), String> {
        let salt = self.salt(true)?;
        let encoded = encrypt_text(&derive_key(&salt), token)?;
        write_private(&self.session_path(), encoded.as_bytes())?;
        log::info!("[TokenStore] Session saved");
        Ok(())
    }

    pub fn load(&self) -> Option<String> {
        let encoded = fs::read_to_string(self.session_path()).ok()?;
        let salt = match self.salt(false) {
            Ok(salt) => salt,
            Err(e) => {
                log::warn!("[TokenStore] {}", e);
                return None;
            }
        };
        let token = decrypt_text(&derive_key(&salt), encoded.trim());
        if token.is_none() {
            log::warn!("[TokenStore] Stored session could not be decrypted");
        }
        token
    }

    pub fn delete(&self) -> Result<(), String> {
        match fs::remove_file(self.session_path()) {
            Ok(()) => {
                log::info!("[TokenStore] Session deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("Failed to delete session: {}", e)),
        }
    }
}

fn derive_key(salt: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(b"SoulMate-session-v1");
    let result = hasher.finalize();
    let mut key = [0u8; 32];
    key.copy_from_slice(&result);
    key
}

fn encrypt_text(key_bytes: &[u8; 32], plain: &str) -> Result<String, String> {
    let key = Key::<Aes256Gcm>::from(*key_bytes);
    let cipher = Aes256Gcm::new(&key);

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from(nonce_bytes);

    let ciphertext = cipher
        .encrypt(&nonce, plain.as_bytes())
        .map_err(|e| format!("Encryption failed: {}", e))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce_bytes);
    output.extend_from_slice(&ciphertext);
    Ok(BASE64_STANDARD.encode(output))
}

fn decrypt_text(key_bytes: &[u8; 32], cipher_text: &str) -> Option<String> {
    let raw = BASE64_STANDARD.decode(cipher_text).ok()?;
    if raw.len() <= NONCE_LEN {
        return None;
    }

    let (nonce_bytes, cipher_bytes) = raw.split_at(NONCE_LEN);
    let key = Key::<Aes256Gcm>::from(*key_bytes);
    let cipher = Aes256Gcm::new(&key);

    let mut nonce_array = [0u8; NONCE_LEN];
    nonce_array.copy_from_slice(nonce_bytes);
    let nonce = Nonce::from(nonce_array);

    cipher
        .decrypt(&nonce, cipher_bytes)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
}

fn write_private(path: &Path, contents: &[u8]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create data dir: {}", e))?;
    }
    fs::write(path, contents).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());
        assert_eq!(store.load(), None);

        store.save("jwt.token.value").unwrap();
        assert_eq!(store.load().as_deref(), Some("jwt.token.value"));

        let on_disk = fs::read_to_string(dir.path().join(SESSION_FILE)).unwrap();
        assert!(!on_disk.contains("jwt.token.value"));
    }

    #[test]
    fn test_delete_clears_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());
        store.save("abc").unwrap();
        store.delete().unwrap();
        assert_eq!(store.load(), None);
        // Deleting twice is fine
        store.delete().unwrap();
    }

    #[test]
    fn test_session_unreadable_with_other_salt() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        TokenStore::new(first.path()).save("secret").unwrap();
        TokenStore::new(second.path()).save("other").unwrap();

        fs::copy(
            first.path().join(SESSION_FILE),
            second.path().join(SESSION_FILE),
        )
        .unwrap();
        assert_eq!(TokenStore::new(second.path()).load(), None);
    }

    #[test]
    fn test_garbage_session_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());
        store.save("abc").unwrap();
        fs::write(dir.path().join(SESSION_FILE), "not base64 !!").unwrap();
        assert_eq!(store.load(), None);
    }
}
