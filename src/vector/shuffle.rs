use super::Vector;
use crate::element::Element;

macro_rules! swizzles {
    ($($(#[$doc:meta])* $name:ident => [$a:literal, $b:literal, $c:literal, $d:literal];)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(self) -> Self {
            self.swizzle4([$a, $b, $c, $d])
        }
    )*};
}

/// Lane permutations.
///
/// The four-letter swizzles name the source lane of each output lane within a group of four,
/// `a` being the first: `cdab` turns `[x0, x1, x2, x3]` into `[x2, x3, x0, x1]`. Wider
/// vectors apply the pattern to every group of four lanes. A single lane is left as is, any
/// other width that is not a multiple of four fails to compile.
///
/// ```compile_fail
/// use lanevec::Vector;
/// let _ = Vector::<i32, 2>::zero().cdab();
/// ```
impl<T: Element, const N: usize> Vector<T, N> {
    #[inline(always)]
    fn swizzle4(self, pattern: [usize; 4]) -> Self {
        const {
            assert!(
                N == 1 || N % 4 == 0,
                "swizzles need a single lane or a multiple of four lanes"
            )
        };
        if N == 1 {
            return self;
        }
        Self::generate(|i| self.data[i - i % 4 + pattern[i % 4]])
    }

    swizzles! {
        abcd => [0, 1, 2, 3];
        /// Swaps the two halves of each group.
        cdab => [2, 3, 0, 1];
        /// Swaps neighbouring lanes.
        badc => [1, 0, 3, 2];
        aaaa => [0, 0, 0, 0];
        bbbb => [1, 1, 1, 1];
        cccc => [2, 2, 2, 2];
        dddd => [3, 3, 3, 3];
        bcad => [1, 2, 0, 3];
        bcda => [1, 2, 3, 0];
        dabc => [3, 0, 1, 2];
        acbd => [0, 2, 1, 3];
        dbca => [3, 1, 2, 0];
        /// Reverses each group.
        dcba => [3, 2, 1, 0];
    }

    /// Lane `i` takes lane `(i + amount) mod N`.
    pub fn rotated(self, amount: i32) -> Self {
        let shift = (amount as i64).rem_euclid(N as i64) as usize;
        Self::generate(|i| self.data[(i + shift) % N])
    }

    pub fn reversed(self) -> Self {
        let mut data = self.data;
        data.reverse();
        Self::from_array(data)
    }

    /// Lanes in ascending total order (`-0.0` before `0.0`, NaN last).
    pub fn sorted(self) -> Self {
        let mut data = self.data;
        data.sort_unstable_by(T::lane_cmp);
        Self::from_array(data)
    }

    /// Lane `i` takes lane `i + amount`; lanes read from outside the vector are zero.
    ///
    /// Any amount is accepted. `|amount| >= N` yields the zero vector.
    pub fn shifted(self, amount: i32) -> Self {
        self.shift_with(amount, |_| T::ZERO)
    }

    /// Lane `i` takes lane `i + amount`; lanes read past the end come from the start of
    /// `shift_in`, lanes read before the start come from the end of `shift_in`, as if the
    /// two vectors were laid out next to each other.
    ///
    /// `amount` must lie in `-N..=N`; this is checked in debug builds only.
    pub fn shifted_in(self, amount: i32, shift_in: Self) -> Self {
        debug_assert!(
            amount.unsigned_abs() as usize <= N,
            "shift amount {amount} out of range for {N} lanes"
        );
        self.shift_with(amount, |j| {
            let wrapped = if j < 0 { j + N as i64 } else { j - N as i64 };
            shift_in.data[wrapped as usize]
        })
    }

    #[inline(always)]
    fn shift_with(self, amount: i32, outside: impl Fn(i64) -> T) -> Self {
        Self::generate(|i| {
            let j = i as i64 + amount as i64;
            if (0..N as i64).contains(&j) {
                self.data[j as usize]
            } else {
                outside(j)
            }
        })
    }

    /// First half of the interleaving `[self0, other0, self1, other1, ..]`.
    pub fn interleave_low(self, other: Self) -> Self {
        Self::generate(|i| interleaved(&self, &other, i))
    }

    /// Second half of the interleaving `[self0, other0, self1, other1, ..]`.
    pub fn interleave_high(self, other: Self) -> Self {
        Self::generate(|i| interleaved(&self, &other, N + i))
    }
}

#[inline(always)]
fn interleaved<T: Element, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>, k: usize) -> T {
    if k % 2 == 0 { a.data[k / 2] } else { b.data[k / 2] }
}
