/// A binary occupancy bitmap with rows packed into `u64` words.
///
/// Bit `x % 64` of word `x / 64` in a row holds pixel `x`. Bits at or beyond
/// `width` in the last word of a row are always zero; every operation that
/// writes pixels preserves this so row words can be compared wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    words_per_row: usize,
    words: Vec<u64>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = (width as usize).div_ceil(64);
        Self {
            width,
            height,
            words_per_row,
            words: vec![0; words_per_row * height as usize],
        }
    }

    /// Build from a row-major predicate over pixels.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bm = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    bm.set(x, y);
                }
            }
        }
        bm
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width && y < self.height);
        let row = y as usize * self.words_per_row;
        self.words[row + x as usize / 64] >> (x % 64) & 1 == 1
    }

    pub fn set(&mut self, x: u32, y: u32) {
        debug_assert!(x < self.width && y < self.height);
        let row = y as usize * self.words_per_row;
        self.words[row + x as usize / 64] |= 1u64 << (x % 64);
    }

    pub fn row(&self, y: u32) -> &[u64] {
        let start = y as usize * self.words_per_row;
        &self.words[start..start + self.words_per_row]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [u64] {
        let start = y as usize * self.words_per_row;
        &mut self.words[start..start + self.words_per_row]
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// A new bitmap rotated 90 degrees clockwise: `(x, y)` maps to
    /// `(height - 1 - y, x)` in the result.
    pub fn rotate_cw(&self) -> Bitmap {
        let mut out = Bitmap::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    out.set(self.height - 1 - y, x);
                }
            }
        }
        out
    }
}

/// Read up to 64 bits of a packed row starting at absolute bit `offset`.
///
/// Crosses the word boundary when `offset` is not word-aligned; bits past the
/// end of the row read as zero.
pub(crate) fn read_bits(row: &[u64], offset: usize) -> u64 {
    let q = offset / 64;
    let r = offset % 64;
    if q >= row.len() {
        return 0;
    }
    let lo = row[q] >> r;
    if r == 0 || q + 1 >= row.len() {
        lo
    } else {
        lo | row[q + 1] << (64 - r)
    }
}

/// OR 64 bits into a packed row at absolute bit `offset`.
pub(crate) fn or_bits(row: &mut [u64], offset: usize, bits: u64) {
    let q = offset / 64;
    let r = offset % 64;
    if q < row.len() {
        row[q] |= bits << r;
    }
    if r != 0 && q + 1 < row.len() {
        row[q + 1] |= bits >> (64 - r);
    }
}
