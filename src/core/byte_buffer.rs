//! Fixed-Capacity Big-Endian Byte Buffer
//!
//! Satu region byte yang dialokasi sekali, dengan dua cara akses:
//! - Absolute: `get_*`/`put_*` pada offset eksplisit, cursor tidak bergerak
//! - Cursor: `read_*`/`write_*` pada posisi internal, cursor maju selebar nilai
//!
//! Siklus staging: write → `flip()` → read → `reset()`.

use std::alloc::{self, Layout};
use std::fmt;
use std::ptr;

use tracing::{error, trace};

use super::endian::{decode_be, encode_be};
use crate::error::{BufferError, BufferResult};

/// Pre-allocated big-endian byte buffer
///
/// Storage tidak pernah tumbuh atau dipindah setelah `new`. Semua integer
/// multi-byte disimpan most-significant byte first.
///
/// Invariant `offset <= limit <= capacity` adalah tanggung jawab caller:
/// `set_limit`/`set_offset` tidak memvalidasi dan accessor tidak melihat
/// `limit`. Akses di luar capacity panic (slice bounds check), tidak pernah
/// membaca memori lain.
pub struct ByteBuffer {
    data: Box<[u8]>,
    limit: usize,
    offset: usize,
}

impl ByteBuffer {
    /// Alokasi buffer dengan capacity tertentu
    ///
    /// `limit` dimulai sama dengan capacity, `offset` di 0. Isi awal adalah
    /// nol.
    ///
    /// # Errors
    /// [`BufferError::Alloc`] jika allocator menolak request. Storage
    /// di-zero secara lazy (`alloc_zeroed`), page tidak disentuh di sini.
    /// Pada kernel dengan overcommit, request yang diterima allocator
    /// tetap bisa gagal belakangan saat page pertama kali ditulis.
    pub fn new(capacity: usize) -> BufferResult<Self> {
        let Some(data) = alloc_zeroed_storage(capacity) else {
            error!(capacity, "byte buffer allocation failed");
            return Err(BufferError::Alloc { capacity });
        };

        trace!(capacity, "byte buffer allocated");

        Ok(Self {
            data,
            limit: capacity,
            offset: 0,
        })
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Overwrite limit tanpa validasi
    #[inline(always)]
    pub fn set_limit(&mut self, new_limit: usize) {
        self.limit = new_limit;
    }

    /// Overwrite cursor tanpa validasi
    #[inline(always)]
    pub fn set_offset(&mut self, new_offset: usize) {
        self.offset = new_offset;
    }

    /// Write → read: region `[0, offset)` jadi region aktif, cursor ke awal
    #[inline]
    pub fn flip(&mut self) {
        trace!(written = self.offset, "byte buffer flip");
        self.limit = self.offset;
        self.offset = 0;
    }

    /// Reset untuk reuse: limit kembali ke capacity, cursor ke awal
    #[inline]
    pub fn reset(&mut self) {
        trace!(limit = self.limit, offset = self.offset, "byte buffer reset");
        self.limit = self.data.len();
        self.offset = 0;
    }

    /// Bytes antara cursor dan limit (0 jika cursor sudah melewati limit)
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.offset)
    }

    #[inline(always)]
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Region aktif `[0, limit)`, dipotong ke capacity
    ///
    /// Setelah `flip()`, ini tepat data yang sudah ditulis.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.limit.min(self.data.len());
        &self.data[..end]
    }

    /// Seluruh storage, untuk reader yang mengisi buffer langsung
    /// lalu memanggil `set_limit(n)`.
    #[inline(always)]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Storage mulai dari cursor, `[offset, capacity)`
    ///
    /// # Panics
    /// Jika cursor melewati capacity.
    #[inline(always)]
    pub fn as_bytes_at_offset(&self) -> &[u8] {
        &self.data[self.offset..]
    }

    /// Storage mulai dari cursor, untuk receive parsial langsung ke buffer.
    /// Cursor tidak bergerak; caller memanggil `set_offset` setelah receive.
    ///
    /// # Panics
    /// Jika cursor melewati capacity.
    #[inline(always)]
    pub fn as_mut_bytes_at_offset(&mut self) -> &mut [u8] {
        &mut self.data[self.offset..]
    }

    /// Validasi range sebelum akses
    ///
    /// Accessor sendiri tidak pernah mengecek; codec yang butuh error yang
    /// jelas (bukan panic) memanggil ini dulu.
    ///
    /// # Errors
    /// [`BufferError::OutOfRange`] jika `offset + len` melewati capacity.
    pub fn check_range(&self, offset: usize, len: usize) -> BufferResult<()> {
        let capacity = self.data.len();
        match offset.checked_add(len) {
            Some(end) if end <= capacity => Ok(()),
            _ => Err(BufferError::OutOfRange {
                offset,
                len,
                capacity,
            }),
        }
    }

    // ------------------------------------------------------------------
    // Shared encode/decode
    // ------------------------------------------------------------------

    #[inline(always)]
    fn decode_at(&self, offset: usize, width: usize) -> u64 {
        decode_be(&self.data[offset..offset + width])
    }

    #[inline(always)]
    fn encode_at(&mut self, offset: usize, width: usize, value: u64) {
        encode_be(&mut self.data[offset..offset + width], value);
    }

    /// Simpan cursor lama, majukan, kembalikan posisi lama
    #[inline(always)]
    fn advance(&mut self, width: usize) -> usize {
        let at = self.offset;
        self.offset = at.wrapping_add(width);
        at
    }

    // ------------------------------------------------------------------
    // Absolute accessors
    //
    // # Panics
    // Semua accessor panic jika `offset + width` melewati capacity.
    // ------------------------------------------------------------------

    /// Baca `i8` big-endian di `offset`
    #[inline(always)]
    pub fn get_i8(&self, offset: usize) -> i8 {
        self.decode_at(offset, 1) as u8 as i8
    }

    /// Baca `i16` big-endian di `offset`
    #[inline(always)]
    pub fn get_i16(&self, offset: usize) -> i16 {
        self.decode_at(offset, 2) as u16 as i16
    }

    /// Baca `i32` big-endian di `offset`
    #[inline(always)]
    pub fn get_i32(&self, offset: usize) -> i32 {
        self.decode_at(offset, 4) as u32 as i32
    }

    /// Baca `i64` big-endian di `offset`
    #[inline(always)]
    pub fn get_i64(&self, offset: usize) -> i64 {
        self.decode_at(offset, 8) as i64
    }

    /// Baca `u8` di `offset`, reinterpretasi bit dari `get_i8`
    #[inline(always)]
    pub fn get_u8(&self, offset: usize) -> u8 {
        self.get_i8(offset) as u8
    }

    /// Baca `u16` di `offset`, reinterpretasi bit dari `get_i16`
    #[inline(always)]
    pub fn get_u16(&self, offset: usize) -> u16 {
        self.get_i16(offset) as u16
    }

    /// Baca `u32` di `offset`, reinterpretasi bit dari `get_i32`
    #[inline(always)]
    pub fn get_u32(&self, offset: usize) -> u32 {
        self.get_i32(offset) as u32
    }

    /// Baca `u64` di `offset`, reinterpretasi bit dari `get_i64`
    #[inline(always)]
    pub fn get_u64(&self, offset: usize) -> u64 {
        self.get_i64(offset) as u64
    }

    /// Tulis `i8` big-endian di `offset`
    #[inline(always)]
    pub fn put_i8(&mut self, offset: usize, value: i8) {
        self.encode_at(offset, 1, value as u64);
    }

    /// Tulis `i16` big-endian di `offset`
    #[inline(always)]
    pub fn put_i16(&mut self, offset: usize, value: i16) {
        self.encode_at(offset, 2, value as u64);
    }

    /// Tulis `i32` big-endian di `offset`
    #[inline(always)]
    pub fn put_i32(&mut self, offset: usize, value: i32) {
        self.encode_at(offset, 4, value as u64);
    }

    /// Tulis `i64` big-endian di `offset`
    #[inline(always)]
    pub fn put_i64(&mut self, offset: usize, value: i64) {
        self.encode_at(offset, 8, value as u64);
    }

    /// Tulis `u8` big-endian di `offset`
    #[inline(always)]
    pub fn put_u8(&mut self, offset: usize, value: u8) {
        self.encode_at(offset, 1, value as u64);
    }

    /// Tulis `u16` big-endian di `offset`
    #[inline(always)]
    pub fn put_u16(&mut self, offset: usize, value: u16) {
        self.encode_at(offset, 2, value as u64);
    }

    /// Tulis `u32` big-endian di `offset`
    #[inline(always)]
    pub fn put_u32(&mut self, offset: usize, value: u32) {
        self.encode_at(offset, 4, value as u64);
    }

    /// Tulis `u64` big-endian di `offset`
    #[inline(always)]
    pub fn put_u64(&mut self, offset: usize, value: u64) {
        self.encode_at(offset, 8, value);
    }

    /// Copy `length` bytes dari storage ke `out[..length]`
    ///
    /// # Panics
    /// Jika range storage melewati capacity atau `out` lebih pendek dari
    /// `length`.
    #[inline(always)]
    pub fn get_bytes(&self, offset: usize, out: &mut [u8], length: usize) {
        out[..length].copy_from_slice(&self.data[offset..offset + length]);
    }

    /// Copy `input[..length]` ke storage mulai dari `offset`
    ///
    /// # Panics
    /// Jika range storage melewati capacity atau `input` lebih pendek dari
    /// `length`.
    #[inline(always)]
    pub fn put_bytes(&mut self, offset: usize, input: &[u8], length: usize) {
        self.data[offset..offset + length].copy_from_slice(&input[..length]);
    }

    // ------------------------------------------------------------------
    // Cursor accessors
    //
    // Cursor maju SEBELUM akses. Kalau akses panic, cursor sudah bergeser.
    // ------------------------------------------------------------------

    /// Baca `i8` di cursor, cursor maju 1 byte
    #[inline(always)]
    pub fn read_i8(&mut self) -> i8 {
        let at = self.advance(1);
        self.get_i8(at)
    }

    /// Baca `i16` di cursor, cursor maju 2 bytes
    #[inline(always)]
    pub fn read_i16(&mut self) -> i16 {
        let at = self.advance(2);
        self.get_i16(at)
    }

    /// Baca `i32` di cursor, cursor maju 4 bytes
    #[inline(always)]
    pub fn read_i32(&mut self) -> i32 {
        let at = self.advance(4);
        self.get_i32(at)
    }

    /// Baca `i64` di cursor, cursor maju 8 bytes
    #[inline(always)]
    pub fn read_i64(&mut self) -> i64 {
        let at = self.advance(8);
        self.get_i64(at)
    }

    /// Baca `u8` di cursor, cursor maju 1 byte
    #[inline(always)]
    pub fn read_u8(&mut self) -> u8 {
        self.read_i8() as u8
    }

    /// Baca `u16` di cursor, cursor maju 2 bytes
    #[inline(always)]
    pub fn read_u16(&mut self) -> u16 {
        self.read_i16() as u16
    }

    /// Baca `u32` di cursor, cursor maju 4 bytes
    #[inline(always)]
    pub fn read_u32(&mut self) -> u32 {
        self.read_i32() as u32
    }

    /// Baca `u64` di cursor, cursor maju 8 bytes
    #[inline(always)]
    pub fn read_u64(&mut self) -> u64 {
        self.read_i64() as u64
    }

    /// Tulis `i8` di cursor, cursor maju 1 byte
    #[inline(always)]
    pub fn write_i8(&mut self, value: i8) {
        let at = self.advance(1);
        self.put_i8(at, value);
    }

    /// Tulis `i16` di cursor, cursor maju 2 bytes
    #[inline(always)]
    pub fn write_i16(&mut self, value: i16) {
        let at = self.advance(2);
        self.put_i16(at, value);
    }

    /// Tulis `i32` di cursor, cursor maju 4 bytes
    #[inline(always)]
    pub fn write_i32(&mut self, value: i32) {
        let at = self.advance(4);
        self.put_i32(at, value);
    }

    /// Tulis `i64` di cursor, cursor maju 8 bytes
    #[inline(always)]
    pub fn write_i64(&mut self, value: i64) {
        let at = self.advance(8);
        self.put_i64(at, value);
    }

    /// Tulis `u8` di cursor, cursor maju 1 byte
    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) {
        let at = self.advance(1);
        self.put_u8(at, value);
    }

    /// Tulis `u16` di cursor, cursor maju 2 bytes
    #[inline(always)]
    pub fn write_u16(&mut self, value: u16) {
        let at = self.advance(2);
        self.put_u16(at, value);
    }

    /// Tulis `u32` di cursor, cursor maju 4 bytes
    #[inline(always)]
    pub fn write_u32(&mut self, value: u32) {
        let at = self.advance(4);
        self.put_u32(at, value);
    }

    /// Tulis `u64` di cursor, cursor maju 8 bytes
    #[inline(always)]
    pub fn write_u64(&mut self, value: u64) {
        let at = self.advance(8);
        self.put_u64(at, value);
    }

    /// Cursor variant dari `get_bytes`, cursor maju `length`
    #[inline(always)]
    pub fn read_bytes(&mut self, out: &mut [u8], length: usize) {
        let at = self.advance(length);
        self.get_bytes(at, out, length);
    }

    /// Cursor variant dari `put_bytes`, cursor maju `length`
    #[inline(always)]
    pub fn write_bytes(&mut self, input: &[u8], length: usize) {
        let at = self.advance(length);
        self.put_bytes(at, input, length);
    }
}

/// Alokasi fallible yang di-zero oleh allocator (calloc-style)
fn alloc_zeroed_storage(capacity: usize) -> Option<Box<[u8]>> {
    if capacity == 0 {
        return Some(Box::default());
    }

    let layout = Layout::array::<u8>(capacity).ok()?;

    // SAFETY: layout.size() == capacity > 0
    let raw = unsafe { alloc::alloc_zeroed(layout) };
    if raw.is_null() {
        return None;
    }

    // SAFETY: `raw` berasal dari global allocator dengan layout `[u8; capacity]`
    // (align 1), sudah di-zero, dan ownership pindah ke Box. Drop Box<[u8]>
    // dealloc dengan layout yang sama.
    Some(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(raw, capacity)) })
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("capacity", &self.data.len())
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .finish()
    }
}
