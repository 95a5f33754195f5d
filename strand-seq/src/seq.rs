//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction checks that the input is non-empty
//! and that every byte is a member of the alphabet, so every core operation
//! can treat its input as well-formed. Values are immutable: transforms build
//! new sequences.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;

use strand_core::{hash, ContentAddressable, Sequence, StrandError, Summarizable};

use crate::alphabet::Alphabet;
use crate::validate::{check, normalize};

/// A validated nucleotide sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA. The inner bytes are always uppercase ASCII and never empty.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Validation is case-sensitive. Use [`ValidatedSeq::from_input`] for
    /// text typed by a user.
    pub fn new(bytes: impl AsRef<[u8]>) -> strand_core::Result<Self> {
        let bytes = bytes.as_ref();
        check::<A>(bytes)?;
        Ok(Self::from_validated(bytes.to_vec()))
    }

    /// Normalize external input (trim, uppercase) and validate it.
    pub fn from_input(input: &str) -> strand_core::Result<Self> {
        let normalized = normalize(input);
        check::<A>(normalized.as_bytes())?;
        Ok(Self::from_validated(normalized.into_bytes()))
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee the bytes are non-empty uppercase members of `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        debug_assert!(crate::validate::is_valid_in::<A>(&data));
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// The sequence as a string slice.
    pub fn as_str(&self) -> &str {
        // Validated bytes are ASCII.
        std::str::from_utf8(&self.data).unwrap_or_default()
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> ContentAddressable for ValidatedSeq<A> {
    fn content_hash(&self) -> String {
        hash::sha256(&self.data)
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = &self.as_str()[..preview_len];
        if self.data.len() > 20 {
            format!("{} sequence ({} bp): {}...", A::NAME, self.data.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", A::NAME, self.data.len(), preview)
        }
    }
}

impl<A: Alphabet> FromStr for ValidatedSeq<A> {
    type Err = StrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, self.as_str())
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::DnaAlphabet;

    type DnaSeq = ValidatedSeq<DnaAlphabet>;

    #[test]
    fn new_is_case_sensitive() {
        assert!(DnaSeq::new(b"acgt").is_err());
        assert_eq!(DnaSeq::new(b"ACGT").unwrap().as_bytes(), b"ACGT");
    }

    #[test]
    fn from_input_normalizes() {
        let seq = DnaSeq::from_input("  acGt \n").unwrap();
        assert_eq!(seq.as_str(), "ACGT");
    }

    #[test]
    fn empty_sequence_rejected() {
        assert!(matches!(
            DnaSeq::new(b""),
            Err(StrandError::EmptySequence { .. })
        ));
        assert!(DnaSeq::from_input("   ").is_err());
    }

    #[test]
    fn rejects_invalid_bytes() {
        assert!(DnaSeq::new(b"ACGX").is_err());
        assert!(DnaSeq::from_input("acgn").is_err());
    }

    #[test]
    fn deref_to_slice() {
        let seq = DnaSeq::new(b"ACGT").unwrap();
        let slice: &[u8] = &seq;
        assert_eq!(slice, b"ACGT");
        assert_eq!(seq[0], b'A');
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn parse_and_display() {
        let seq: DnaSeq = "GATTACA".parse().unwrap();
        assert_eq!(seq.to_string(), "GATTACA");
        assert_eq!(format!("{seq:?}"), "DNA(\"GATTACA\")");
    }

    #[test]
    fn content_addressable_deterministic() {
        let seq1 = DnaSeq::new(b"ACGT").unwrap();
        let seq2 = DnaSeq::from_input("acgt").unwrap();
        assert_eq!(seq1.content_hash(), seq2.content_hash());
        assert_eq!(seq1.content_hash().len(), 64);
    }

    #[test]
    fn summary_truncates_long_sequences() {
        let short = DnaSeq::new(b"ACGT").unwrap();
        assert_eq!(short.summary(), "DNA sequence (4 bp): ACGT");
        let long = DnaSeq::new(b"ACGTACGTACGTACGTACGTACGT").unwrap();
        assert_eq!(long.summary(), "DNA sequence (24 bp): ACGTACGTACGTACGTACGT...");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_validates() {
        let seq = DnaSeq::new(b"ACGT").unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"ACGT\"");
        let back: DnaSeq = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
        assert!(serde_json::from_str::<DnaSeq>("\"ACGU\"").is_err());
    }
}
