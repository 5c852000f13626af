//! Legacy siad recovery phrase (28/29 words, base-1626 big-integer encoding).

use super::wordlist::WORDLIST;
use super::PhraseError;

/// NFC-normalize a word. The bundled dictionary is pure ASCII, for which
/// NFC normalization is always the identity transform, so no normalization
/// library is pulled in just for this.
fn nfc_normalize(word: &str) -> String {
    word.to_string()
}

const RADIX: u32 = 1626;

/// Decode a legacy phrase into a 32-byte seed.
///
/// Each word is NFC-normalized and matched by its first three characters
/// against the dictionary; the resulting indices form digits of a
/// big-integer in base 1626 with a "+1 / -1" offset scheme that preserves
/// leading zeros on round-trip.
pub fn decode_legacy(words: &[&str]) -> Result<[u8; 32], PhraseError> {
    let mut result = BigUint::zero();
    let radix = BigUint::from_u64(RADIX as u64);

    for word in words {
        let normalized = nfc_normalize(word);
        let prefix: String = normalized.chars().take(3).collect();
        let index = WORDLIST
            .iter()
            .position(|w| nfc_normalize(w).starts_with(&prefix))
            .ok_or_else(|| PhraseError::UnknownWord((*word).to_string()))?;

        // Accumulate left-to-right as result = result*radix + (index+1), then
        // subtract 1 once at the end — algebraically equivalent to
        // sum (index_k + 1) * 1626^k with the first word most significant.
        let digit = BigUint::from_u64((index as u64) + 1);
        result = result.checked_mul(&radix);
        result = result.checked_add(&digit);
    }
    result = result.checked_sub_one();

    let mut bytes = result.to_le_bytes();
    bytes.resize(32, 0);

    let mut seed = [0u8; 32];
    seed.copy_from_slice(&bytes[..32]);
    Ok(seed)
}

const LEGACY_WORDS: usize = 29;

/// Smallest `K` such that `K·2^256` already clears the minimum value a
/// 29-digit bijective-base-1626 number can hold (all 29 digits at their
/// floor of 1). A fixed-length bijective representation has no digit
/// sequence below that floor, so a 32-byte seed — at most 2^256 − 1 — can
/// never be encoded directly; offsetting by `K·2^256` lands every seed in
/// the representable window, and truncating the decoded value back to its
/// low 32 bytes (see [`decode_legacy`]) discards the offset again.
fn leading_offset() -> BigUint {
    const K: u64 = 7_046_337_505_618;
    let mut limbs = vec![0u32; 8];
    limbs.push((K & 0xFFFF_FFFF) as u32);
    limbs.push((K >> 32) as u32);
    BigUint { limbs }.normalized()
}

/// Encode a 32-byte seed into a 29-word legacy phrase (a right inverse of
/// [`decode_legacy`]: decoding the result always recovers `seed`, though
/// other 29-word phrases may decode to the same seed too).
///
/// `Σ (j_k+1)·1626^k` is bijective base-1626: digits run 1..=1626 rather
/// than 0..=1625, so unlike ordinary positional notation a zero remainder
/// means "digit 1626, carry one fewer into the next power" rather than
/// "digit 0". Starting the digit-extraction loop from `seed + leading_offset()`
/// rather than from the seed alone means it always runs exactly
/// `LEGACY_WORDS` times, so no separate padding step is needed.
pub fn encode_legacy(seed: &[u8; 32]) -> String {
    let mut value = BigUint::from_le_bytes(seed)
        .checked_add(&leading_offset())
        .checked_add_one();
    let radix = BigUint::from_u64(RADIX as u64);

    let mut digits: Vec<u64> = Vec::new();
    while !value.is_zero() {
        let (q, r) = value.div_rem(&radix);
        if r == 0 {
            digits.push(RADIX as u64);
            value = q.checked_sub_one();
        } else {
            digits.push(r);
            value = q;
        }
    }
    digits.reverse();
    debug_assert_eq!(digits.len(), LEGACY_WORDS);

    digits
        .into_iter()
        .map(|d| WORDLIST[(d - 1) as usize].to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimal unsigned big-integer, little-endian limbs of u32, sufficient for
/// the base-1626 codec above. Not a general-purpose bignum: only the
/// operations the codec needs are implemented.
#[derive(Clone, Debug)]
struct BigUint {
    limbs: Vec<u32>,
}

impl BigUint {
    fn zero() -> Self {
        Self { limbs: vec![0] }
    }

    fn from_u64(v: u64) -> Self {
        Self {
            limbs: vec![(v & 0xFFFF_FFFF) as u32, (v >> 32) as u32],
        }
        .normalized()
    }

    fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut limbs = Vec::new();
        for chunk in bytes.chunks(4) {
            let mut b = [0u8; 4];
            b[..chunk.len()].copy_from_slice(chunk);
            limbs.push(u32::from_le_bytes(b));
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        Self { limbs }.normalized()
    }

    fn normalized(mut self) -> Self {
        while self.limbs.len() > 1 && *self.limbs.last().unwrap() == 0 {
            self.limbs.pop();
        }
        self
    }

    fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    fn checked_mul(&self, other: &BigUint) -> Self {
        let mut result = vec![0u64; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.limbs.iter().enumerate() {
                let idx = i + j;
                let prod = a as u64 * b as u64 + result[idx] + carry;
                result[idx] = prod & 0xFFFF_FFFF;
                carry = prod >> 32;
            }
            let mut k = i + other.limbs.len();
            while carry > 0 {
                let sum = result[k] + carry;
                result[k] = sum & 0xFFFF_FFFF;
                carry = sum >> 32;
                k += 1;
            }
        }
        Self {
            limbs: result.into_iter().map(|l| l as u32).collect(),
        }
        .normalized()
    }

    fn checked_add(&self, other: &BigUint) -> Self {
        let len = self.limbs.len().max(other.limbs.len()) + 1;
        let mut out = vec![0u32; len];
        let mut carry = 0u64;
        for i in 0..len {
            let a = *self.limbs.get(i).unwrap_or(&0) as u64;
            let b = *other.limbs.get(i).unwrap_or(&0) as u64;
            let sum = a + b + carry;
            out[i] = (sum & 0xFFFF_FFFF) as u32;
            carry = sum >> 32;
        }
        Self { limbs: out }.normalized()
    }

    fn checked_add_one(&self) -> Self {
        self.checked_add(&BigUint::from_u64(1))
    }

    fn checked_sub_one(&self) -> Self {
        let mut limbs = self.limbs.clone();
        let mut i = 0;
        loop {
            if limbs[i] == 0 {
                limbs[i] = u32::MAX;
                i += 1;
                if i == limbs.len() {
                    break;
                }
            } else {
                limbs[i] -= 1;
                break;
            }
        }
        Self { limbs }.normalized()
    }

    fn div_rem(&self, divisor: &BigUint) -> (BigUint, u64) {
        // divisor fits in a u32 for this codec's use (RADIX = 1626), so a
        // simple long-division from the most significant limb suffices.
        debug_assert!(divisor.limbs.len() == 1);
        let d = divisor.limbs[0] as u64;
        let mut quotient = vec![0u32; self.limbs.len()];
        let mut rem = 0u64;
        for i in (0..self.limbs.len()).rev() {
            let cur = (rem << 32) | self.limbs[i] as u64;
            quotient[i] = (cur / d) as u32;
            rem = cur % d;
        }
        (Self { limbs: quotient }.normalized(), rem)
    }

    fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.limbs.len() * 4);
        for limb in &self.limbs {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_zero_seed() {
        let seed = [0u8; 32];
        let phrase = encode_legacy(&seed);
        let words: Vec<&str> = phrase.split_whitespace().collect();
        assert_eq!(words.len(), 29);
        let decoded = decode_legacy(&words).unwrap();
        assert_eq!(decoded, seed);
    }

    #[test]
    fn round_trip_arbitrary_seed() {
        let mut seed = [0u8; 32];
        for (i, b) in seed.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        let phrase = encode_legacy(&seed);
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let decoded = decode_legacy(&words).unwrap();
        assert_eq!(decoded, seed);
    }

    #[test]
    fn rejects_unknown_word() {
        let words = vec!["zzzzznotaword"; 29];
        assert!(decode_legacy(&words).is_err());
    }

    #[test]
    fn scenario_1_phrase_decodes_to_documented_seed() {
        let phrase = "mocked southern dehydrate unusual navy pegs aided ruined \
                       festival yearbook total building wife greater befit drunk \
                       judge thwart erosion hefty saucepan hijack request welders \
                       bomb remedy each sayings actress";
        let words: Vec<&str> = phrase.split_whitespace().collect();
        assert_eq!(words.len(), 29);

        let seed = decode_legacy(&words).unwrap();
        assert_eq!(
            hex::encode(seed),
            "de67ef93cd0adb3418aa4ce71d2504636533b36d36a0d5211bfccc331dea7b41"
        );
    }
}
