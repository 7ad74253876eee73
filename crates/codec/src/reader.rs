//! Instruction data deserialization helpers
//!
//! Bounds-checked little-endian reads over byte slices. Every read either
//! returns the value or a `CodecError` describing how many bytes were missing.

use crate::error::CodecError;
use solana_program::pubkey::Pubkey;

#[inline]
fn check(data: &[u8], offset: usize, needed: usize) -> Result<(), CodecError> {
    match offset.checked_add(needed) {
        Some(end) if end <= data.len() => Ok(()),
        _ => Err(CodecError::UnexpectedEof {
            offset,
            needed,
            remaining: data.len().saturating_sub(offset),
        }),
    }
}

/// Read a u8 from instruction data
#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> Result<u8, CodecError> {
    check(data, offset, 1)?;
    Ok(data[offset])
}

/// Read a u16 (little-endian) from instruction data
#[inline]
pub fn read_u16(data: &[u8], offset: usize) -> Result<u16, CodecError> {
    Ok(u16::from_le_bytes(read_bytes(data, offset)?))
}

/// Read a u32 (little-endian) from instruction data
#[inline]
pub fn read_u32(data: &[u8], offset: usize) -> Result<u32, CodecError> {
    Ok(u32::from_le_bytes(read_bytes(data, offset)?))
}

/// Read an i32 (little-endian) from instruction data
#[inline]
pub fn read_i32(data: &[u8], offset: usize) -> Result<i32, CodecError> {
    Ok(i32::from_le_bytes(read_bytes(data, offset)?))
}

/// Read a u64 (little-endian) from instruction data
#[inline]
pub fn read_u64(data: &[u8], offset: usize) -> Result<u64, CodecError> {
    Ok(u64::from_le_bytes(read_bytes(data, offset)?))
}

/// Read an i64 (little-endian) from instruction data
#[inline]
pub fn read_i64(data: &[u8], offset: usize) -> Result<i64, CodecError> {
    Ok(i64::from_le_bytes(read_bytes(data, offset)?))
}

/// Read a fixed-size byte array from instruction data
#[inline]
pub fn read_bytes<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], CodecError> {
    check(data, offset, N)?;
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&data[offset..offset + N]);
    Ok(bytes)
}

/// Sequential reader with tracked offset
pub struct InstructionReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> InstructionReader<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Fails with `TrailingBytes` unless every byte has been consumed.
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        let val = read_u8(self.data, self.offset)?;
        self.offset += 1;
        Ok(val)
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        let val = read_u16(self.data, self.offset)?;
        self.offset += 2;
        Ok(val)
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        let val = read_u32(self.data, self.offset)?;
        self.offset += 4;
        Ok(val)
    }

    #[inline]
    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        let val = read_i32(self.data, self.offset)?;
        self.offset += 4;
        Ok(val)
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        let val = read_u64(self.data, self.offset)?;
        self.offset += 8;
        Ok(val)
    }

    #[inline]
    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        let val = read_i64(self.data, self.offset)?;
        self.offset += 8;
        Ok(val)
    }

    #[inline]
    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let val = read_bytes(self.data, self.offset)?;
        self.offset += N;
        Ok(val)
    }

    /// Read `len` bytes as a borrowed slice and advance offset
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        check(self.data, self.offset, len)?;
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Read a bool, rejecting anything other than 0 or 1
    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::InvalidBool(other)),
        }
    }

    /// Read an `Option` tag: `Ok(true)` means a payload follows
    pub fn read_option_tag(&mut self) -> Result<bool, CodecError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::InvalidOptionTag(other)),
        }
    }

    #[inline]
    pub fn read_pubkey(&mut self) -> Result<Pubkey, CodecError> {
        Ok(Pubkey::new_from_array(self.read_bytes::<32>()?))
    }
}
