use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    marker::PhantomData,
};

/// An error to describe a value that does not fit in the targeted bit field.
///
/// The register value is left unmodified when this error is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeError {
    /// The rejected value.
    pub value: u8,
    /// The greatest value the field can hold.
    pub max: u8,
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "value out of legal range: {} (allowed 0 - {})",
            self.value, self.max
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

#[cfg(feature = "defmt")]
impl defmt::Format for RangeError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "value out of legal range: {} (allowed 0 - {})",
            self.value,
            self.max
        )
    }
}

/// A contiguous run of bits within a one-byte register value.
///
/// Reading isolates the field with a mask and shifts it down.
/// Writing clears only the field's bits before OR-ing in the shifted value,
/// so every bit outside the field is preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitField {
    mask: u8,
    offset: u8,
}

impl BitField {
    /// A field of `width` bits starting at bit `offset` (bit 0 is the LSBit).
    pub const fn new(offset: u8, width: u8) -> Self {
        let mask = ((((1u16 << width) - 1) << offset) & 0xFF) as u8;
        Self { mask, offset }
    }

    /// The mask isolating this field in a register byte.
    pub const fn mask(&self) -> u8 {
        self.mask
    }

    /// The position of the field's least significant bit.
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// The greatest value this field can hold.
    pub const fn max(&self) -> u8 {
        self.mask >> self.offset
    }

    pub const fn decode(&self, raw: u8) -> u8 {
        (raw & self.mask) >> self.offset
    }

    pub const fn encode(&self, current: u8, value: u8) -> Result<u8, RangeError> {
        if value > self.max() {
            return Err(RangeError {
                value,
                max: self.max(),
            });
        }
        Ok(current & !self.mask | (value << self.offset))
    }

    /// Validate `value` without encoding it.
    pub fn check(&self, value: u8) -> Result<(), RangeError> {
        self.encode(0, value).map(|_| ())
    }
}

/// A [`BitField`] bound to the register kind `K` it belongs to.
///
/// This keeps a field of one register from being applied to another.
pub struct Field<K> {
    bits: BitField,
    _kind: PhantomData<K>,
}

// manual impls: a derive would require `K: Clone`
impl<K> Clone for Field<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Field<K> {}

impl<K> core::fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Field")
            .field("mask", &self.bits.mask)
            .field("offset", &self.bits.offset)
            .finish()
    }
}

impl<K> Field<K> {
    pub const fn new(offset: u8, width: u8) -> Self {
        Self {
            bits: BitField::new(offset, width),
            _kind: PhantomData,
        }
    }

    /// A single bit flag at `offset`.
    pub const fn flag(offset: u8) -> Self {
        Self::new(offset, 1)
    }

    pub const fn bits(&self) -> BitField {
        self.bits
    }

    pub const fn mask(&self) -> u8 {
        self.bits.mask()
    }

    pub const fn max(&self) -> u8 {
        self.bits.max()
    }

    pub const fn decode(&self, raw: u8) -> u8 {
        self.bits.decode(raw)
    }

    pub const fn encode(&self, current: u8, value: u8) -> Result<u8, RangeError> {
        self.bits.encode(current, value)
    }

    pub fn check(&self, value: u8) -> Result<(), RangeError> {
        self.bits.check(value)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::{BitField, RangeError};

    #[test]
    fn masks() {
        assert_eq!(BitField::new(1, 2).mask(), 0b0000_0110);
        assert_eq!(BitField::new(4, 4).mask(), 0xF0);
        assert_eq!(BitField::new(0, 8).mask(), 0xFF);
        assert_eq!(BitField::new(0, 8).max(), 0xFF);
        assert_eq!(BitField::new(6, 1).max(), 1);
    }

    #[test]
    fn decode_isolates_field() {
        let field = BitField::new(4, 3);
        assert_eq!(field.decode(0b1101_0110), 0b101);
        assert_eq!(field.decode(0b1000_1111), 0);
    }

    #[test]
    fn encode_preserves_other_bits() {
        let field = BitField::new(2, 3);
        for raw in 0..=u8::MAX {
            for value in 0..=field.max() {
                let out = field.encode(raw, value).unwrap();
                assert_eq!(field.decode(out), value);
                assert_eq!(out & !field.mask(), raw & !field.mask());
            }
        }
    }

    #[test]
    fn encode_out_of_range() {
        let field = BitField::new(0, 4);
        assert_eq!(field.encode(0xAA, 16), Err(RangeError { value: 16, max: 15 }));
        assert_eq!(field.check(15), Ok(()));
        assert!(field.check(200).is_err());
    }
}
