// tests/block_tests.rs
use quickcrypt::consts::{AES_KEY_LENGTHS, BLOCK_SIZE};
use quickcrypt::error::CryptoError;
use quickcrypt::{BlockCipher, Mode};

#[cfg(feature = "logging")]
use tracing::info;

fn init_tracing() {
    #[cfg(feature = "logging")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        });
    }
}

const ALL_MODES: [Mode; 5] = [Mode::Ecb, Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb];

const KEYS: [&[u8]; 3] = [
    b"0123456789abcdef",
    b"0123456789abcdef01234567",
    b"0123456789abcdef0123456789abcdef",
];

#[test]
fn test_roundtrip_all_modes_all_key_lengths() {
    init_tracing();

    for (key, expected) in KEYS.iter().zip(AES_KEY_LENGTHS) {
        assert_eq!(key.len(), expected);
    }

    let plaintexts: [&[u8]; 5] = [
        b"",
        b"a",
        b"hello world",
        b"exactly 16 bytes",
        b"a considerably longer plaintext that spans several AES blocks and then some",
    ];

    for mode in ALL_MODES {
        let cipher = BlockCipher::with_mode(mode);
        for key in KEYS {
            for plaintext in plaintexts {
                #[cfg(feature = "logging")]
                info!("roundtrip {mode:?} key_len={} pt_len={}", key.len(), plaintext.len());

                let ciphertext = cipher.encrypt(plaintext, key).unwrap();
                let decrypted = cipher.decrypt(&ciphertext, key).unwrap();
                assert_eq!(
                    decrypted,
                    plaintext,
                    "roundtrip failed for {mode:?} with {}-byte key",
                    key.len()
                );
            }
        }
    }
}

#[test]
fn test_hello_world_scenario_all_modes() {
    let plaintext = b"hello world";
    let key = b"1443flfsaWfdas12";

    for mode in ALL_MODES {
        let cipher = BlockCipher::with_mode(mode);
        let ciphertext = cipher.encrypt(plaintext, key).unwrap();
        assert_ne!(ciphertext, plaintext.to_vec());
        assert_eq!(cipher.decrypt(&ciphertext, key).unwrap(), plaintext);
    }
}

#[test]
fn test_default_mode_is_cbc() {
    let cipher = BlockCipher::new();
    assert_eq!(cipher.mode(), Mode::Cbc);
    assert_eq!(Mode::default(), Mode::Cbc);
}

#[test]
fn test_mode_ids_and_fallback() {
    assert_eq!(Mode::from_id(1), Mode::Ecb);
    assert_eq!(Mode::from_id(2), Mode::Cbc);
    assert_eq!(Mode::from_id(3), Mode::Ctr);
    assert_eq!(Mode::from_id(4), Mode::Cfb);
    assert_eq!(Mode::from_id(5), Mode::Ofb);

    // Unrecognized ids fall back to the default mode
    assert_eq!(Mode::from_id(0), Mode::Cbc);
    assert_eq!(Mode::from_id(99), Mode::Cbc);

    for mode in ALL_MODES {
        assert_eq!(Mode::from_id(mode.id()), mode);
    }
}

#[test]
fn test_set_mode_replaces_active_mode() {
    let mut cipher = BlockCipher::new();
    let key = b"0123456789abcdef";

    cipher.set_mode(Mode::Ctr);
    assert_eq!(cipher.mode(), Mode::Ctr);

    let ciphertext = cipher.encrypt(b"payload", key).unwrap();
    cipher.set_mode(Mode::Cbc);
    // A CTR ciphertext is not a valid CBC one: its body is not block-aligned
    assert!(cipher.decrypt(&ciphertext, key).is_err());

    cipher.set_mode(Mode::Ctr);
    assert_eq!(cipher.decrypt(&ciphertext, key).unwrap(), b"payload");
}

#[test]
fn test_ecb_accepts_arbitrary_key_lengths() {
    let cipher = BlockCipher::with_mode(Mode::Ecb);
    for key in [&b"k"[..], b"short", b"a 20-byte long key!!", &[7u8; 40]] {
        let ciphertext = cipher.encrypt(b"fold me", key).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext, key).unwrap(), b"fold me");
    }
}

#[test]
fn test_ecb_is_deterministic_and_leaks_repeated_blocks() {
    let cipher = BlockCipher::with_mode(Mode::Ecb);
    let key = b"1443flfsaWfdas12";
    // Two identical plaintext blocks
    let plaintext = [b'A'; 2 * BLOCK_SIZE];

    let c1 = cipher.encrypt(&plaintext, key).unwrap();
    let c2 = cipher.encrypt(&plaintext, key).unwrap();
    assert_eq!(c1, c2);
    assert_eq!(c1[..BLOCK_SIZE], c1[BLOCK_SIZE..2 * BLOCK_SIZE]);
}

#[test]
fn test_iv_modes_randomize_ciphertext() {
    let key = b"0123456789abcdef";
    for mode in [Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb] {
        let cipher = BlockCipher::with_mode(mode);
        let c1 = cipher.encrypt(b"same input", key).unwrap();
        let c2 = cipher.encrypt(b"same input", key).unwrap();
        assert_ne!(c1, c2, "{mode:?} reused an IV");
    }
}

#[test]
fn test_stream_modes_preserve_length() {
    let key = b"0123456789abcdef";
    let plaintext = b"neither empty nor block-aligned";
    for mode in [Mode::Ctr, Mode::Cfb] {
        let cipher = BlockCipher::with_mode(mode);
        let ciphertext = cipher.encrypt(plaintext, key).unwrap();
        assert_eq!(ciphertext.len(), BLOCK_SIZE + plaintext.len());
    }
}

#[test]
fn test_invalid_key_length_is_an_error() {
    let bad_key = b"ten bytes!";
    for mode in [Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb] {
        let cipher = BlockCipher::with_mode(mode);
        let result = cipher.encrypt(b"data", bad_key);
        assert!(
            matches!(result, Err(CryptoError::InvalidKeyLength(10))),
            "{mode:?} accepted a 10-byte key"
        );
    }
}

#[test]
fn test_short_ciphertext_is_an_error_not_a_panic() {
    let key = b"0123456789abcdef";
    for mode in [Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb] {
        let cipher = BlockCipher::with_mode(mode);
        for short in [&b""[..], b"x", b"fifteen bytes.."] {
            let result = cipher.decrypt(short, key);
            assert!(
                matches!(result, Err(CryptoError::CiphertextTooShort { .. })),
                "{mode:?} accepted a {}-byte ciphertext",
                short.len()
            );
        }
    }
}

#[test]
fn test_ofb_rejects_unaligned_body() {
    let cipher = BlockCipher::with_mode(Mode::Ofb);
    let key = b"0123456789abcdef";
    // 16-byte IV plus a 5-byte body
    let bogus = [0u8; BLOCK_SIZE + 5];
    let result = cipher.decrypt(&bogus, key);
    assert!(matches!(result, Err(CryptoError::NotBlockAligned(5))));
}

#[test]
fn test_cbc_rejects_unaligned_body() {
    let cipher = BlockCipher::with_mode(Mode::Cbc);
    let key = b"0123456789abcdef";
    let bogus = [0u8; BLOCK_SIZE + 7];
    let result = cipher.decrypt(&bogus, key);
    assert!(matches!(result, Err(CryptoError::NotBlockAligned(7))));
}

#[test]
fn test_ecb_rejects_unaligned_ciphertext() {
    let cipher = BlockCipher::with_mode(Mode::Ecb);
    let key = b"1443flfsaWfdas12";
    for bad in [&[0u8; 0][..], &[0u8; 15], &[0u8; 17]] {
        let result = cipher.decrypt(bad, key);
        assert!(matches!(result, Err(CryptoError::NotBlockAligned(_))));
    }
}

#[test]
fn test_cbc_wrong_key_never_recovers_plaintext() {
    let cipher = BlockCipher::with_mode(Mode::Cbc);
    let plaintext = b"top secret payload";
    let ciphertext = cipher.encrypt(plaintext, b"0123456789abcdef").unwrap();

    // Wrong key: either a padding failure or garbage, never the plaintext
    match cipher.decrypt(&ciphertext, b"fedcba9876543210") {
        Ok(decrypted) => assert_ne!(decrypted, plaintext),
        Err(e) => assert!(matches!(e, CryptoError::InvalidPadding)),
    }
}
