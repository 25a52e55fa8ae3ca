//! Dense 2D image buffer with interleaved channels.

/// A `width × height × depth` image stored row-major with interleaved
/// channels (e.g. `RGBARGBA…`).
///
/// Pixel `(i, j)` addresses row `i` (top to bottom) and column `j` (left to
/// right); channel `k` selects the interleaved component.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    depth: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Image<T> {
    /// Create a zero-initialized (`T::default()`) image.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            data: vec![T::default(); width * height * depth],
        }
    }

    /// Create a single-channel image.
    pub fn grayscale(width: usize, height: usize) -> Self {
        Self::new(width, height, 1)
    }

    /// Create an image filled with `value` in every channel.
    pub fn filled(width: usize, height: usize, depth: usize, value: T) -> Self {
        Self {
            width,
            height,
            depth,
            data: vec![value; width * height * depth],
        }
    }
}

impl<T: Copy> Image<T> {
    #[inline]
    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        assert!(
            i < self.height && j < self.width && k < self.depth,
            "pixel ({i}, {j}, {k}) out of bounds for {}x{}x{} image",
            self.width,
            self.height,
            self.depth
        );
        (i * self.width + j) * self.depth + k
    }

    /// Read channel `k` of pixel `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= height`, `j >= width` or `k >= depth`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> T {
        self.data[self.offset(i, j, k)]
    }

    /// Read channel `k` of pixel `(i, j)`, or `None` when out of bounds.
    pub fn try_get(&self, i: usize, j: usize, k: usize) -> Option<T> {
        if i < self.height && j < self.width && k < self.depth {
            Some(self.data[(i * self.width + j) * self.depth + k])
        } else {
            None
        }
    }

    /// Write channel `k` of pixel `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        let idx = self.offset(i, j, k);
        self.data[idx] = value;
    }

    /// Write all channels of pixel `(i, j)` at once.
    ///
    /// # Panics
    ///
    /// Panics if the pixel is out of bounds or `values.len() != depth`.
    pub fn set_pixel(&mut self, i: usize, j: usize, values: &[T]) {
        assert_eq!(
            values.len(),
            self.depth,
            "pixel write of {} channels into a {}-channel image",
            values.len(),
            self.depth
        );
        let start = self.offset(i, j, 0);
        self.data[start..start + self.depth].copy_from_slice(values);
    }

    /// Write all channels of pixel `(i, j)`, passing each value through `f`.
    ///
    /// # Panics
    ///
    /// Panics if the pixel is out of bounds or `values.len() != depth`.
    pub fn set_pixel_with<U: Copy>(
        &mut self,
        i: usize,
        j: usize,
        values: &[U],
        mut f: impl FnMut(U) -> T,
    ) {
        assert_eq!(values.len(), self.depth);
        let start = self.offset(i, j, 0);
        for (dst, &src) in self.data[start..start + self.depth].iter_mut().zip(values) {
            *dst = f(src);
        }
    }

    /// Borrow the channels of pixel `(i, j)`.
    pub fn pixel(&self, i: usize, j: usize) -> &[T] {
        let start = self.offset(i, j, 0);
        &self.data[start..start + self.depth]
    }

    /// Apply `f` to every scalar in the image, in storage order.
    pub fn transform(&mut self, mut f: impl FnMut(T) -> T) {
        for value in &mut self.data {
            *value = f(*value);
        }
    }

    /// Fill every scalar with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of pixels (`width * height`).
    pub fn pixels(&self) -> usize {
        self.width * self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns `true` if the image holds no scalars.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw interleaved storage.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw interleaved storage.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Copy + PartialOrd> Image<T> {
    /// Largest scalar across all channels, or `None` for an empty image.
    pub fn max(&self) -> Option<T> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, v| if v > acc { v } else { acc }))
    }

    /// Smallest scalar across all channels, or `None` for an empty image.
    pub fn min(&self) -> Option<T> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, v| if v < acc { v } else { acc }))
    }
}

impl<T: bytemuck::Pod> Image<T> {
    /// Returns the storage as a byte slice for GPU texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

impl<'a, T> IntoIterator for &'a Image<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Image<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
