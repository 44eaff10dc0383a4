//! SRP client seed
//!
//! Generates the ephemeral key pair the client sends during connect
//! negotiation: a random secret `a` and the public value `A = g^a mod N`.
//! The proof computation that completes the exchange belongs to the operation
//! layer (`WireProtocol::op_accept`), which receives both halves.

use crate::protocol::constants::srp::{GENERATOR, PRIME_HEX, SECRET_BYTES};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use rand::Rng;
use std::fmt;

static PRIME: Lazy<BigUint> =
    Lazy::new(|| BigUint::parse_bytes(PRIME_HEX.as_bytes(), 16).expect("SRP prime is valid hex"));

/// SRP group prime `N`
pub fn prime() -> &'static BigUint {
    &PRIME
}

/// Ephemeral client key pair for one handshake
///
/// Kept on the session after the handshake so the operation layer can
/// re-authenticate; it is ordinary reconstructible material.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSeed {
    public: BigUint,
    secret: BigUint,
}

impl ClientSeed {
    /// Generate a fresh key pair from the thread RNG
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        loop {
            let bytes: Vec<u8> = (0..SECRET_BYTES).map(|_| rng.gen()).collect();
            let secret = BigUint::from_bytes_be(&bytes);
            if secret != BigUint::default() {
                return Self::from_secret(secret);
            }
        }
    }

    /// Derive the key pair for a known secret
    pub fn from_secret(secret: BigUint) -> Self {
        let public = BigUint::from(GENERATOR).modpow(&secret, prime());
        Self { public, secret }
    }

    /// Public value `A`
    pub fn public(&self) -> &BigUint {
        &self.public
    }

    /// Secret exponent `a`
    pub fn secret(&self) -> &BigUint {
        &self.secret
    }

    /// Public value as lowercase hex, the form sent in the connect request
    pub fn public_hex(&self) -> String {
        format!("{:x}", self.public)
    }
}

impl fmt::Debug for ClientSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSeed")
            .field("public", &self.public_hex())
            .field("secret", &"<redacted>")
            .finish()
    }
}
