use bitflags::bitflags;

bitflags! {
    /// Alignment assumption and caching hint for loads, stores, gathers and scatters.
    ///
    /// * `ALIGNED` promises the address is a multiple of the access alignment: the
    ///   vector's `MEMORY_ALIGNMENT` for contiguous accesses, the element alignment for
    ///   gathers and scatters. The promise is checked with a debug assertion only.
    /// * `UNALIGNED` (no bit set) makes no promise. It is the default.
    /// * `STREAMING` hints that the data will not be reused soon. It never changes the
    ///   values read or written.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct LoadStoreFlags: u8 {
        const ALIGNED = 1 << 0;
        const STREAMING = 1 << 1;
    }
}

impl LoadStoreFlags {
    pub const UNALIGNED: Self = Self::empty();

    /// Debug-checks the alignment promise for `ptr`.
    #[inline(always)]
    pub(crate) fn debug_check<T>(self, ptr: *const T, alignment: usize) {
        debug_assert!(
            !self.contains(Self::ALIGNED) || (ptr as usize).is_multiple_of(alignment),
            "aligned memory access on an address that is not {alignment}-byte aligned"
        );
    }
}
