use num_traits::PrimInt;

/// `Vec<T>` that represents a 2D field
#[derive(Clone, Default)]
pub struct Field<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

/// The base implementation of `Field`
impl<T> Field<T> {
    /// Constructs a `height` by `width` field with `data`.
    /// Returns `None` if the size of `data` does not equal to `height * width`.
    pub fn with_vec(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        if data.len() == width * height {
            Some(Self {
                data,
                width,
                height,
            })
        } else {
            None
        }
    }

    /// Returns the width of the field.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the field.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a reference to an element.
    pub fn peek(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the index of a xy-coordinates representation in the field.
    pub fn index_at(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    /// Returns the elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the field and returns the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Field<T>
where
    T: Clone,
{
    /// Returns a copy of an element.
    pub fn get(&self, index: usize) -> Option<T> {
        self.peek(index).cloned()
    }
}

impl<T> Field<T>
where
    T: PrimInt,
{
    /// Returns the largest element, or `None` if the field is empty.
    pub fn max_element(&self) -> Option<T> {
        self.data.iter().copied().max()
    }
}
