//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the CPU from the memory backing it, and
//! `FlatMemory` provides the flat 64KB image the emulator runs against, with
//! bulk load/dump operations for program images.
//!
//! No business logic lives here: a 16-bit address always indexes a 65536-cell
//! array, so reads and writes cannot fail. The only fallible operation is
//! `load_image`, which rejects images that would run past the end of the
//! address space.

/// Memory bus trait for CPU byte reads and writes.
///
/// The 6502 has no bus error mechanism: reads and writes always succeed, so
/// neither method returns a `Result`.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads the byte at the given 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the given 16-bit address.
    fn write(&mut self, addr: u16, value: u8);
}

/// Error from [`FlatMemory::load_image`].
///
/// Raised when an image would overrun the top of the address space. The
/// alternative (silently wrapping, as naive implementations do) corrupts the
/// zero page without any indication, so overrun is a hard error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The image does not fit between `start` and 0xFFFF.
    ImageTooLarge {
        /// Requested load address.
        start: u16,
        /// Length of the rejected image in bytes.
        len: usize,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::ImageTooLarge { start, len } => write!(
                f,
                "image of {} bytes at 0x{:04X} overruns the 64KB address space",
                len, start
            ),
        }
    }
}

impl std::error::Error for LoadError {}

/// Flat 64KB memory: every address 0x0000-0xFFFF is writable RAM,
/// zero-initialized at construction.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.load_image(&[0xA9, 0x01], 0x0100).unwrap();
/// assert_eq!(mem.read(0x0100), 0xA9);
/// assert_eq!(mem.read(0x0101), 0x01);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new memory image with all 65536 cells zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `image` into memory starting at `start`.
    ///
    /// Returns [`LoadError::ImageTooLarge`] if the image would run past
    /// 0xFFFF; no bytes are written in that case.
    pub fn load_image(&mut self, image: &[u8], start: u16) -> Result<(), LoadError> {
        let start_idx = start as usize;
        if image.len() > self.data.len() - start_idx {
            return Err(LoadError::ImageTooLarge {
                start,
                len: image.len(),
            });
        }
        self.data[start_idx..start_idx + image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns the full memory contents in ascending address order,
    /// exactly 65536 bytes with no header.
    pub fn dump(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
