use base64::{Engine, engine::general_purpose::STANDARD_NO_PAD};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SCHEME: &str = "pbkdf2_sha256";
const ITERATIONS: u32 = 260000;
const SALT_LENGTH: usize = 16;
const KEY_LENGTH: usize = 32;

/// Hash un mot de passe avec PBKDF2-HMAC-SHA256 et un salt aléatoire de 16 bytes
/// Format: pbkdf2_sha256$iterations$salt$hash (base64 sans padding)
pub fn hash_password(password: &str) -> Result<String, String> {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill(&mut salt);

    let key = derive_key(password, &salt, ITERATIONS, KEY_LENGTH)?;

    Ok(format!(
        "{}${}${}${}",
        SCHEME,
        ITERATIONS,
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(key)
    ))
}

/// Vérifie un mot de passe contre un hash stocké.
/// Un hash mal formé est une erreur, un mauvais mot de passe retourne Ok(false).
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, String> {
    let parts: Vec<&str> = stored_hash.split('$').collect();
    let [scheme, iterations, salt, expected] = parts.as_slice() else {
        return Err("Invalid hash format".to_string());
    };

    if *scheme != SCHEME {
        return Err(format!("Unsupported hash scheme: {}", scheme));
    }

    let iterations = iterations
        .parse::<u32>()
        .map_err(|_| "Invalid iterations".to_string())?;
    let salt = STANDARD_NO_PAD
        .decode(salt)
        .map_err(|e| format!("Invalid salt: {}", e))?;
    let expected = STANDARD_NO_PAD
        .decode(expected)
        .map_err(|e| format!("Invalid hash: {}", e))?;

    let computed = derive_key(password, &salt, iterations, expected.len())?;

    Ok(constant_time_eq(&computed, &expected))
}

fn derive_key(password: &str, salt: &[u8], iterations: u32, len: usize) -> Result<Vec<u8>, String> {
    let mut key = vec![0u8; len];
    pbkdf2::<HmacSha256>(password.as_bytes(), salt, iterations, &mut key)
        .map_err(|e| format!("PBKDF2 failed: {}", e))?;
    Ok(key)
}

// Comparaison sans court-circuit (timing attacks)
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(hash.starts_with("pbkdf2_sha256$260000$"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let first = hash_password("secret123").unwrap();
        let second = hash_password("secret123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_rejected() {
        assert!(verify_password("secret", "not-a-hash").is_err());
        assert!(verify_password("secret", "md5$1$abc$def").is_err());
    }
}
