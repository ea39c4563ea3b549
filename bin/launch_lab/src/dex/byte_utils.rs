use crate::error::{LaunchLabError, Result};
use solana_sdk::pubkey::Pubkey;

/// 顺序读取的字节游标，只前进不回退
#[derive(Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(LaunchLabError::OutOfBounds {
                offset: self.offset,
                needed: len,
                len: self.bytes.len(),
            })?;
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    pub fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0_u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_fixed_bytes::<4>().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_fixed_bytes::<8>().map(u64::from_le_bytes)
    }

    #[inline]
    pub fn read_pubkey(&mut self) -> Result<Pubkey> {
        self.read_fixed_bytes::<32>().map(Pubkey::new_from_array)
    }

    /// u32 小端长度前缀 + UTF-8，非法字节替换为 U+FFFD
    pub fn read_length_prefixed_utf8(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let raw = self.take(len)?;
        Ok(String::from_utf8_lossy(raw).into_owned())
    }
}
