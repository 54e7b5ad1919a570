use super::Vector;
use crate::{element::FloatElement, mask::Mask};

impl<T: FloatElement, const N: usize> Vector<T, N> {
    /// Magnitude of `self` with the sign of `reference`, lane by lane.
    pub fn copy_sign(self, reference: Self) -> Self {
        let mut data = self.data;
        for (x, s) in data.iter_mut().zip(reference.data) {
            *x = x.lane_copysign(s);
        }
        Self::from_array(data)
    }

    /// `floor(log2(|x|))` per lane. See [`FloatElement::lane_exponent`].
    pub fn exponent(self) -> Self {
        Self::from_array(self.data.map(T::lane_exponent))
    }

    pub fn is_nan(self) -> Mask<T, N> {
        Mask::from_array(self.data.map(T::lane_is_nan))
    }

    /// Sets every lane to a quiet NaN.
    pub fn set_qnan(&mut self) {
        *self = Self::splat(T::QNAN);
    }

    /// Sets the selected lanes to a quiet NaN.
    pub fn set_qnan_masked(&mut self, mask: Mask<T, N>) {
        self.masked(mask).set(Self::splat(T::QNAN));
    }
}
