use pretty_assertions::assert_eq;
use rand_chacha::rand_core::{RngCore, SeedableRng};

use rs255::{correct, decode, encode, verify, Error, K, N, PARITY_LEN, T};

/// Deterministic tiny RNG for repeatable tests
struct TestRng {
    rng: rand_chacha::ChaCha8Rng,
}

impl TestRng {
    fn new(seed: u64) -> Self {
        Self {
            rng: rand_chacha::ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn gen_usize(&mut self, upper: usize) -> usize {
        (self.rng.next_u32() as usize) % upper
    }

    fn non_zero_byte(&mut self) -> u8 {
        (self.gen_usize(255) + 1) as u8
    }

    fn message(&mut self, len: usize) -> Vec<u8> {
        let mut m = vec![0u8; len];
        self.rng.fill_bytes(&mut m);
        m
    }

    /// Add errors at `count` distinct positions.
    fn corrupt(&mut self, codeword: &mut [u8], count: usize) -> Vec<usize> {
        let mut positions = Vec::with_capacity(count);
        while positions.len() < count {
            let p = self.gen_usize(codeword.len());
            if !positions.contains(&p) {
                positions.push(p);
            }
        }
        for p in &positions {
            codeword[*p] ^= self.non_zero_byte();
        }
        positions
    }
}

#[test]
fn hello_world_scenario() {
    let codeword = encode(b"Hello, World!").unwrap();
    assert_eq!(codeword.len(), 45);
    assert!(verify(&codeword));

    let mut one_error = codeword.clone();
    one_error[7] ^= 0x01;
    assert_eq!(decode(&one_error).unwrap(), b"Hello, World!");

    let mut rng = TestRng::new(17);
    for _ in 0..20 {
        let mut received = codeword.clone();
        rng.corrupt(&mut received, 17);
        assert_eq!(decode(&received), Err(Error::Uncorrectable));
    }
}

#[test]
fn full_block_of_a() {
    let message = [0x41; K];
    let codeword = encode(&message).unwrap();
    assert_eq!(codeword.len(), N);
    assert!(verify(&codeword));
    assert_eq!(decode(&codeword).unwrap(), message);
}

#[test]
fn roundtrip_all_lengths() {
    let mut rng = TestRng::new(1);
    for len in 0..=K {
        let message = rng.message(len);
        let codeword = encode(&message).unwrap();
        assert_eq!(codeword.len(), len + PARITY_LEN);
        assert_eq!(&codeword[..len], &message[..]);
        assert!(verify(&codeword), "length {}", len);
        assert_eq!(decode(&codeword).unwrap(), message, "length {}", len);
    }
}

#[test]
fn leading_zero_bytes_are_kept() {
    let message = [0, 0, 0, 1, 2, 3];
    let mut codeword = encode(&message).unwrap();
    assert_eq!(decode(&codeword).unwrap(), message);
    codeword[1] = 0xee;
    assert_eq!(decode(&codeword).unwrap(), message);
}

#[test]
fn correctable_error_patterns() {
    let mut rng = TestRng::new(2);
    for round in 0..300 {
        let len = 1 + rng.gen_usize(K);
        let message = rng.message(len);
        let codeword = encode(&message).unwrap();
        let count = 1 + rng.gen_usize(T);
        let mut received = codeword.clone();
        rng.corrupt(&mut received, count);
        assert!(!verify(&received));
        assert_eq!(
            decode(&received).unwrap(),
            message,
            "round {}, {} errors in {} bytes",
            round,
            count,
            received.len()
        );
    }
}

#[test]
fn correct_in_place_counts_errors() {
    let mut rng = TestRng::new(3);
    for count in 0..=T {
        let codeword = encode(&rng.message(K)).unwrap();
        let mut received = codeword.clone();
        rng.corrupt(&mut received, count);
        assert_eq!(correct(&mut received), Ok(count));
        assert_eq!(received, codeword);
    }
}

#[test]
fn parity_errors_only() {
    let codeword = encode(b"only parity is hit").unwrap();
    let mut received = codeword.clone();
    let len = received.len();
    for b in &mut received[len - T..] {
        *b ^= 0xa5;
    }
    assert_eq!(correct(&mut received), Ok(T));
    assert_eq!(received, codeword);
}

#[test]
fn too_many_errors_are_detected() {
    let mut rng = TestRng::new(4);
    for _ in 0..100 {
        let message = rng.message(K);
        let codeword = encode(&message).unwrap();
        let count = T + 1 + rng.gen_usize(16);
        let mut received = codeword.clone();
        rng.corrupt(&mut received, count);
        let before = received.clone();
        assert_eq!(correct(&mut received), Err(Error::Uncorrectable));
        assert_eq!(received, before);
    }
}

#[test]
fn verify_is_repeatable() {
    let mut rng = TestRng::new(5);
    let codeword = encode(&rng.message(100)).unwrap();
    let mut broken = codeword.clone();
    rng.corrupt(&mut broken, 3);
    for _ in 0..3 {
        assert!(verify(&codeword));
        assert!(!verify(&broken));
    }
}

#[test]
fn invalid_input_lengths() {
    assert_eq!(
        encode(&[1; K + 1]),
        Err(Error::MessageTooLong { len: K + 1, max: K })
    );
    assert_eq!(
        decode(&[1; PARITY_LEN - 1]),
        Err(Error::InvalidCodewordLength {
            len: PARITY_LEN - 1
        })
    );
    assert_eq!(
        correct(&mut [1; N + 1]),
        Err(Error::InvalidCodewordLength { len: N + 1 })
    );
    assert!(!verify(&[0; N + 1]));
}

#[test]
fn concurrent_use() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = TestRng::new(100 + seed);
                for _ in 0..20 {
                    let len = 1 + rng.gen_usize(K);
                    let message = rng.message(len);
                    let mut received = encode(&message).unwrap();
                    rng.corrupt(&mut received, T);
                    assert_eq!(decode(&received).unwrap(), message);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
