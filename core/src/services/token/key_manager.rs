//! RS256 key material loading for JWT signing and verification

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::{DomainError, DomainResult};

/// RS256 key pair held for the lifetime of the process.
///
/// Loaded once at startup; a load failure is fatal and must prevent the
/// process from serving requests. No runtime mutation.
#[derive(Clone)]
pub struct SigningKeys {
    /// Private key for signing
    encoding_key: EncodingKey,
    /// Public key for verification
    decoding_key: DecodingKey,
    /// Where the private key came from
    private_key_path: PathBuf,
    /// Where the public key came from
    public_key_path: PathBuf,
}

impl std::fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeys")
            .field("private_key_path", &self.private_key_path)
            .field("public_key_path", &self.public_key_path)
            .finish()
    }
}

impl SigningKeys {
    /// Loads the key pair from PEM files.
    ///
    /// # Arguments
    ///
    /// * `private_key_path` - path to the PEM-encoded RSA private key
    /// * `public_key_path` - path to the PEM-encoded RSA public key
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKeys)` - both keys loaded and parsed
    /// * `Err(DomainError::Signing)` - a file was unreadable or malformed
    pub fn load<P: AsRef<Path>>(private_key_path: P, public_key_path: P) -> DomainResult<Self> {
        let private_key_path = private_key_path.as_ref().to_path_buf();
        let public_key_path = public_key_path.as_ref().to_path_buf();

        let private_key_pem = fs::read(&private_key_path).map_err(|e| {
            DomainError::signing(format!(
                "failed to read private key {}: {e}",
                private_key_path.display()
            ))
        })?;

        let encoding_key = EncodingKey::from_rsa_pem(&private_key_pem).map_err(|e| {
            DomainError::signing(format!(
                "invalid private key {}: {e}",
                private_key_path.display()
            ))
        })?;

        let public_key_pem = fs::read(&public_key_path).map_err(|e| {
            DomainError::signing(format!(
                "failed to read public key {}: {e}",
                public_key_path.display()
            ))
        })?;

        let decoding_key = DecodingKey::from_rsa_pem(&public_key_pem).map_err(|e| {
            DomainError::signing(format!(
                "invalid public key {}: {e}",
                public_key_path.display()
            ))
        })?;

        Ok(Self {
            encoding_key,
            decoding_key,
            private_key_path,
            public_key_path,
        })
    }

    /// Builds the key pair from in-memory PEM strings.
    pub fn from_pem_strings(private_key_pem: &str, public_key_pem: &str) -> DomainResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| DomainError::signing(format!("invalid private key: {e}")))?;

        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| DomainError::signing(format!("invalid public key: {e}")))?;

        Ok(Self {
            encoding_key,
            decoding_key,
            private_key_path: PathBuf::from("memory"),
            public_key_path: PathBuf::from("memory"),
        })
    }

    /// Key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}
