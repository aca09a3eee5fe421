use crate::encoding::PARITY_LEN;
use crate::galois::GF;
use crate::poly::Poly;

/// The syndromes S_1, ..., S_32 of a received word, S_j = r(α^j).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Syndromes([GF; PARITY_LEN]);

impl Syndromes {
    pub(crate) fn compute(received: &Poly) -> Self {
        let mut s = [GF(0); PARITY_LEN];
        for (j, sj) in s.iter_mut().enumerate() {
            *sj = received.evaluate(GF::primitive_power(j + 1));
        }
        Self(s)
    }

    /// All syndromes vanish iff the word is a codeword.
    pub(crate) fn is_zero(&self) -> bool {
        self.0.iter().all(|s| s.is_zero())
    }

    /// The syndromes in order, index j holds S_(j+1).
    pub(crate) fn as_slice(&self) -> &[GF] {
        &self.0
    }

    /// S(x) = S_1 + S_2 x + ... + S_32 x^31.
    pub(crate) fn polynomial(&self) -> Poly {
        self.0.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn syndromes_of_codeword_vanish() {
    let codeword = crate::encode(b"syndromes").unwrap();
    let s = Syndromes::compute(&Poly::from_bytes(&codeword));
    assert!(s.is_zero());
    assert_eq!(s.polynomial(), Poly::zero());
}

#[test]
fn syndromes_of_single_error() {
    // e(x) = y x^i gives S_j = y α^(ij)
    let y = GF(0x5a);
    let i = 17;
    let s = Syndromes::compute(&Poly::monomial(y, i));
    assert!(!s.is_zero());
    for (j, sj) in s.as_slice().iter().enumerate() {
        assert_eq!(*sj, y * GF::primitive_power(i * (j + 1)), "S_{}", j + 1);
    }
    assert_eq!(s.polynomial().coefficient(0), s.as_slice()[0]);
    assert_eq!(s.polynomial().coefficient(31), s.as_slice()[31]);
}

#[test]
fn syndromes_agree_with_verify() {
    let mut codeword = crate::encode(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    for i in 0..codeword.len() {
        codeword[i] ^= 0x80;
        let s = Syndromes::compute(&Poly::from_bytes(&codeword));
        assert_eq!(s.is_zero(), crate::verify(&codeword));
        assert!(!s.is_zero());
        codeword[i] ^= 0x80;
    }
}
