use super::{IndexVector, Vector};
use crate::{element::Element, mask::Mask, memory::LoadStoreFlags};

#[inline(always)]
fn lane_offset(index: i32) -> usize {
    debug_assert!(index >= 0, "negative gather/scatter index {index}");
    index as usize
}

/// Loads, stores, gathers and scatters.
///
/// The slice based entry points are safe and panic on out-of-bounds access. The pointer
/// based ones perform no checks at all: the caller guarantees validity, as with any raw
/// memory access.
impl<T: Element, const N: usize> Vector<T, N> {
    /// Loads the first `N` elements of `mem`.
    ///
    /// # Panics
    ///
    /// Panics if `mem` holds fewer than `N` elements.
    pub fn load(mem: &[T], flags: LoadStoreFlags) -> Self {
        assert!(
            mem.len() >= N,
            "load of {N} lanes from a slice of {} elements",
            mem.len()
        );
        // SAFETY: at least N elements are readable.
        unsafe { Self::load_ptr(mem.as_ptr(), flags) }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reading `N` consecutive elements. With
    /// [`LoadStoreFlags::ALIGNED`] it must also be aligned to `MEMORY_ALIGNMENT`, which is
    /// only checked in debug builds.
    pub unsafe fn load_ptr(ptr: *const T, flags: LoadStoreFlags) -> Self {
        flags.debug_check(ptr, Self::MEMORY_ALIGNMENT);
        // SAFETY: guaranteed by the caller; the read does not rely on alignment.
        Self::from_array(unsafe { ptr.cast::<[T; N]>().read_unaligned() })
    }

    /// Stores every lane into the first `N` elements of `mem`.
    ///
    /// # Panics
    ///
    /// Panics if `mem` holds fewer than `N` elements.
    pub fn store(&self, mem: &mut [T], flags: LoadStoreFlags) {
        assert!(
            mem.len() >= N,
            "store of {N} lanes into a slice of {} elements",
            mem.len()
        );
        // SAFETY: at least N elements are writable.
        unsafe { self.store_ptr(mem.as_mut_ptr(), flags) }
    }

    /// Stores the selected lanes; the other elements of `mem` are left untouched.
    pub fn store_masked(&self, mem: &mut [T], mask: Mask<T, N>, flags: LoadStoreFlags) {
        assert!(
            mem.len() >= N,
            "store of {N} lanes into a slice of {} elements",
            mem.len()
        );
        flags.debug_check(mem.as_ptr(), Self::MEMORY_ALIGNMENT);
        for ((dst, &x), selected) in mem.iter_mut().zip(self.data.iter()).zip(mask.iter()) {
            if selected {
                *dst = x;
            }
        }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for writing `N` consecutive elements, and aligned as for
    /// [`Vector::load_ptr`] when `ALIGNED` is requested.
    pub unsafe fn store_ptr(&self, ptr: *mut T, flags: LoadStoreFlags) {
        flags.debug_check(ptr, Self::MEMORY_ALIGNMENT);
        // SAFETY: guaranteed by the caller.
        unsafe { ptr.cast::<[T; N]>().write_unaligned(self.data) }
    }

    /// Lane `i` reads `base[indexes[i]]`. With [`LoadStoreFlags::ALIGNED`] `base` must be
    /// aligned to the element alignment.
    ///
    /// # Panics
    ///
    /// Panics if an index is outside `base`.
    pub fn gather(base: &[T], indexes: IndexVector<N>, flags: LoadStoreFlags) -> Self {
        Self::gather_by(base, indexes, |&x| x, flags)
    }

    /// Reads `base[indexes[i]]` into the selected lanes only. Unselected indexes are never
    /// dereferenced and may be out of range.
    pub fn gather_masked(
        &mut self,
        base: &[T],
        indexes: IndexVector<N>,
        mask: Mask<T, N>,
        flags: LoadStoreFlags,
    ) {
        flags.debug_check(base.as_ptr(), align_of::<T>());
        for ((x, &index), selected) in self.data.iter_mut().zip(indexes.data.iter()).zip(mask.iter()) {
            if selected {
                *x = base[lane_offset(index)];
            }
        }
    }

    /// Lane `i` reads `selector(&container[indexes[i]])`, e.g. one field of a struct in an
    /// array of structs.
    pub fn gather_by<S, F: Fn(&S) -> T>(
        container: &[S],
        indexes: IndexVector<N>,
        selector: F,
        flags: LoadStoreFlags,
    ) -> Self {
        flags.debug_check(container.as_ptr(), align_of::<S>());
        Self::generate(|i| selector(&container[lane_offset(indexes.data[i])]))
    }

    /// # Safety
    ///
    /// `base.offset(indexes[i])` must be valid for reads for every lane.
    pub unsafe fn gather_unchecked(base: *const T, indexes: IndexVector<N>, flags: LoadStoreFlags) -> Self {
        flags.debug_check(base, align_of::<T>());
        // SAFETY: guaranteed by the caller.
        Self::generate(|i| unsafe { base.offset(indexes.data[i] as isize).read() })
    }

    /// Lane `i` is written to `base[indexes[i]]`. Lanes are written in increasing order, so
    /// the highest lane wins when indexes collide.
    ///
    /// # Panics
    ///
    /// Panics if an index is outside `base`.
    pub fn scatter(&self, base: &mut [T], indexes: IndexVector<N>, flags: LoadStoreFlags) {
        self.scatter_by(base, indexes, |x| x, flags);
    }

    /// Writes the selected lanes only. Unselected indexes are never dereferenced.
    pub fn scatter_masked(
        &self,
        base: &mut [T],
        indexes: IndexVector<N>,
        mask: Mask<T, N>,
        flags: LoadStoreFlags,
    ) {
        flags.debug_check(base.as_ptr(), align_of::<T>());
        for ((&x, &index), selected) in self.data.iter().zip(indexes.data.iter()).zip(mask.iter()) {
            if selected {
                base[lane_offset(index)] = x;
            }
        }
    }

    /// Lane `i` is written to `selector(&mut container[indexes[i]])`.
    pub fn scatter_by<S, F: Fn(&mut S) -> &mut T>(
        &self,
        container: &mut [S],
        indexes: IndexVector<N>,
        selector: F,
        flags: LoadStoreFlags,
    ) {
        flags.debug_check(container.as_ptr(), align_of::<S>());
        for (&x, &index) in self.data.iter().zip(indexes.data.iter()) {
            *selector(&mut container[lane_offset(index)]) = x;
        }
    }

    /// # Safety
    ///
    /// `base.offset(indexes[i])` must be valid for writes for every lane.
    pub unsafe fn scatter_unchecked(&self, base: *mut T, indexes: IndexVector<N>, flags: LoadStoreFlags) {
        flags.debug_check(base, align_of::<T>());
        for (&x, &index) in self.data.iter().zip(indexes.data.iter()) {
            // SAFETY: guaranteed by the caller.
            unsafe { base.offset(index as isize).write(x) };
        }
    }
}
