use std::{any::type_name, array};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
    rngs::StdRng,
};
use rand_distr::StandardNormal;

use super::ConformanceReport;
use crate::{
    conditional::{
        Assign, DivideAssign, PlusAssign, PostIncrement, PreDecrement, RemainderAssign,
        conditional_assign, conditional_update,
    },
    element::{CastElement, Element, IntElement},
    mask::Mask,
    memory::LoadStoreFlags,
    vector::{IndexVector, Vector},
};

/// One lane of the reference backend.
type Lane<T> = Vector<T, 1>;

const SPECIAL_FLOATS: [f32; 6] = [
    0.0,
    -0.0,
    f32::INFINITY,
    f32::NEG_INFINITY,
    f32::NAN,
    f32::MIN_POSITIVE / 4.0,
];

// NaN payloads are not compared, any NaN matches any NaN.
fn same_lane<T: Element>(a: T, b: T) -> bool {
    #[allow(clippy::eq_op)]
    let both_nan = a != a && b != b;
    a.to_bits_u64() == b.to_bits_u64() || both_nan
}

fn split<T: Element, const N: usize>(v: Vector<T, N>) -> [Lane<T>; N] {
    v.to_array().map(Vector::splat)
}

fn split_mask<T: Element, const N: usize>(m: Mask<T, N>) -> [Mask<T>; N] {
    m.to_array().map(Mask::splat)
}

fn zip_lanes<T: Element, U, const N: usize>(
    a: &[Lane<T>; N],
    b: &[Lane<T>; N],
    f: impl Fn(Lane<T>, Lane<T>) -> U,
) -> [U; N] {
    array::from_fn(|i| f(a[i], b[i]))
}

fn compare<T: Element, const N: usize>(
    report: &mut ConformanceReport,
    op: &str,
    wide: Vector<T, N>,
    reference: [Lane<T>; N],
) {
    let mismatches = wide
        .as_slice()
        .iter()
        .zip(reference.iter())
        .filter(|(w, r)| !same_lane(**w, r[0]))
        .count();
    report.record(op, N as u64, mismatches as u64);
}

fn compare_mask<T: Element, const N: usize>(
    report: &mut ConformanceReport,
    op: &str,
    wide: Mask<T, N>,
    reference: [Mask<T>; N],
) {
    let mismatches = (0..N).filter(|&i| wide.get(i) != reference[i].get(0)).count();
    report.record(op, N as u64, mismatches as u64);
}

fn compare_scalar<T: Element>(report: &mut ConformanceReport, op: &str, wide: T, reference: T) {
    report.record(op, 1, !same_lane(wide, reference) as u64);
}

fn compare_slices<T: Element>(report: &mut ConformanceReport, op: &str, wide: &[T], reference: &[T]) {
    let mismatches = wide
        .iter()
        .zip(reference)
        .filter(|(w, r)| !same_lane(**w, **r))
        .count();
    report.record(op, wide.len() as u64, mismatches as u64);
}

fn fold_reference<T: Element, const N: usize>(
    lanes: &[Lane<T>; N],
    f: impl Fn(Lane<T>, Lane<T>) -> Lane<T>,
) -> T {
    lanes[1..].iter().fold(lanes[0], |acc, &x| f(acc, x))[0]
}

fn fold_selected_reference<T: Element, const N: usize>(
    lanes: &[Lane<T>; N],
    masks: &[Mask<T>; N],
    f: impl Fn(Lane<T>, Lane<T>) -> Lane<T>,
) -> Option<T> {
    lanes
        .iter()
        .zip(masks)
        .filter(|(_, m)| m.is_full())
        .map(|(&lane, _)| lane)
        .reduce(f)
        .map(|lane| lane[0])
}

/// `acc` replaced by `x` when `x < acc` or `acc` is NaN.
fn lane_min<T: Element>(mut acc: Lane<T>, x: Lane<T>) -> Lane<T> {
    let take = x.simd_lt(acc) | acc.simd_ne(acc);
    conditional_assign::<Assign, T, 1>(&mut acc, &take, x);
    acc
}

fn lane_max<T: Element>(mut acc: Lane<T>, x: Lane<T>) -> Lane<T> {
    let take = x.simd_gt(acc) | acc.simd_ne(acc);
    conditional_assign::<Assign, T, 1>(&mut acc, &take, x);
    acc
}

fn random_floats<const N: usize>(rng: &mut StdRng) -> Vector<f32, N> {
    Vector::generate(|_| {
        if rng.random_ratio(1, 16) {
            SPECIAL_FLOATS[rng.random_range(0..SPECIAL_FLOATS.len())]
        } else {
            rng.sample::<f32, _>(StandardNormal) * 8.0
        }
    })
}

fn random_mask<T: Element, const N: usize>(rng: &mut StdRng) -> Mask<T, N> {
    Mask::from_array(array::from_fn(|_| rng.random_bool(0.5)))
}

/// Shared by the float and integer rounds.
fn reduction_checks<T: Element, const N: usize>(
    report: &mut ConformanceReport,
    prefix: &str,
    a: Vector<T, N>,
    mask: Mask<T, N>,
) {
    let la = split(a);
    let lm = split_mask(mask);
    let selected: [Lane<T>; N] = array::from_fn(|i| {
        let mut lane = la[i];
        lane.set_zero_inverted(lm[i]);
        lane
    });
    let selected_or_one: [Lane<T>; N] = array::from_fn(|i| {
        let mut lane = Lane::one();
        conditional_assign::<Assign, T, 1>(&mut lane, &lm[i], la[i]);
        lane
    });

    compare_scalar(report, &format!("{prefix} sum"), a.sum(), fold_reference(&la, |x, y| x + y));
    compare_scalar(report, &format!("{prefix} product"), a.product(), fold_reference(&la, |x, y| x * y));
    compare_scalar(report, &format!("{prefix} min"), a.min(), fold_reference(&la, lane_min));
    compare_scalar(report, &format!("{prefix} max"), a.max(), fold_reference(&la, lane_max));
    compare_scalar(
        report,
        &format!("{prefix} sum_masked"),
        a.sum_masked(mask),
        fold_reference(&selected, |x, y| x + y),
    );
    compare_scalar(
        report,
        &format!("{prefix} product_masked"),
        a.product_masked(mask),
        fold_reference(&selected_or_one, |x, y| x * y),
    );
    compare_scalar(
        report,
        &format!("{prefix} min_masked"),
        a.min_masked(mask),
        fold_selected_reference(&la, &lm, lane_min).unwrap_or(T::MAX_VALUE),
    );
    compare_scalar(
        report,
        &format!("{prefix} max_masked"),
        a.max_masked(mask),
        fold_selected_reference(&la, &lm, lane_max).unwrap_or(T::MIN_VALUE),
    );

    let mut running = la[0];
    let prefix_sums = array::from_fn(|i| {
        if i > 0 {
            running += la[i];
        }
        running
    });
    compare(report, &format!("{prefix} partial_sum"), a.partial_sum(), prefix_sums);
}

pub(super) fn float_round<const N: usize>(rng: &mut StdRng, report: &mut ConformanceReport) {
    let a = random_floats::<N>(rng);
    let b = random_floats::<N>(rng);
    let (la, lb) = (split(a), split(b));

    compare(report, "f32 add", a + b, zip_lanes(&la, &lb, |x, y| x + y));
    compare(report, "f32 sub", a - b, zip_lanes(&la, &lb, |x, y| x - y));
    compare(report, "f32 mul", a * b, zip_lanes(&la, &lb, |x, y| x * y));
    compare(report, "f32 div", a / b, zip_lanes(&la, &lb, |x, y| x / y));
    compare(report, "f32 rem", a % b, zip_lanes(&la, &lb, |x, y| x % y));
    compare(report, "f32 neg", -a, la.map(|x| -x));
    compare(report, "f32 copy_sign", a.copy_sign(b), zip_lanes(&la, &lb, Vector::copy_sign));
    compare(report, "f32 exponent", a.exponent(), la.map(Vector::exponent));

    compare_mask(report, "f32 simd_lt", a.simd_lt(b), zip_lanes(&la, &lb, Vector::simd_lt));
    compare_mask(report, "f32 simd_eq", a.simd_eq(b), zip_lanes(&la, &lb, Vector::simd_eq));
    compare_mask(report, "f32 is_nan", a.is_nan(), la.map(Vector::is_nan));
    compare_mask(report, "f32 is_negative", a.is_negative(), la.map(Vector::is_negative));

    compare(report, "f32 as i32", a.static_cast::<i32>(), la.map(|x| x.static_cast::<i32>()));
    compare(report, "f32 into f64", Vector::<f64, N>::from(a), la.map(Vector::<f64>::from));
    compare(
        report,
        "f32 reinterpret u32",
        a.reinterpret_cast::<u32>(),
        la.map(|x| x.reinterpret_cast::<u32>()),
    );

    let mask = a.simd_gt(b);
    reduction_checks(report, "f32", a, mask);

    let mut wide = a;
    conditional_assign::<PlusAssign, f32, N>(&mut wide, &mask, b);
    let lm = split_mask(mask);
    let reference = array::from_fn(|i| {
        let mut lane = la[i];
        conditional_assign::<PlusAssign, f32, 1>(&mut lane, &lm[i], lb[i]);
        lane
    });
    compare(report, "f32 conditional PlusAssign", wide, reference);
}

pub(super) fn int_round<T, const N: usize>(rng: &mut StdRng, report: &mut ConformanceReport)
where
    T: IntElement + CastElement<i8> + CastElement<f64>,
    u8: CastElement<T>,
    StandardUniform: Distribution<T>,
    Vector<i64, N>: From<Vector<T, N>>,
    Lane<i64>: From<Lane<T>>,
{
    let ty = type_name::<T>();
    let minus_one = T::ZERO.lane_sub(T::ONE);
    let a = Vector::<T, N>::random(rng);
    let b = Vector::<T, N>::generate(|_| match rng.random_range(0..8) {
        0 => T::ZERO,
        1 => minus_one,
        2 => CastElement::<T>::cast(rng.random_range(0..40u8)),
        _ => rng.random(),
    });
    let (la, lb) = (split(a), split(b));

    compare(report, &format!("{ty} add"), a + b, zip_lanes(&la, &lb, |x, y| x + y));
    compare(report, &format!("{ty} sub"), a - b, zip_lanes(&la, &lb, |x, y| x - y));
    compare(report, &format!("{ty} mul"), a * b, zip_lanes(&la, &lb, |x, y| x * y));
    compare(report, &format!("{ty} neg"), -a, la.map(|x| -x));
    compare(report, &format!("{ty} and"), a & b, zip_lanes(&la, &lb, |x, y| x & y));
    compare(report, &format!("{ty} or"), a | b, zip_lanes(&la, &lb, |x, y| x | y));
    compare(report, &format!("{ty} xor"), a ^ b, zip_lanes(&la, &lb, |x, y| x ^ y));
    compare(report, &format!("{ty} not"), !a, la.map(|x| !x));
    compare(report, &format!("{ty} shl"), a << b, zip_lanes(&la, &lb, |x, y| x << y));
    compare(report, &format!("{ty} shr"), a >> b, zip_lanes(&la, &lb, |x, y| x >> y));
    compare_mask(report, &format!("{ty} simd_le"), a.simd_le(b), zip_lanes(&la, &lb, Vector::simd_le));
    compare_mask(report, &format!("{ty} simd_ne"), a.simd_ne(b), zip_lanes(&la, &lb, Vector::simd_ne));

    // Division only where it is defined.
    let overflows = a.simd_eq(Vector::splat(T::MIN_VALUE)) & b.simd_eq(Vector::splat(minus_one));
    let divisible = b.simd_ne(Vector::zero()) & !overflows;
    let ld = split_mask(divisible);
    let mut quotient = a;
    quotient.masked(divisible).div(b);
    let reference = array::from_fn(|i| {
        let mut lane = la[i];
        conditional_assign::<DivideAssign, T, 1>(&mut lane, &ld[i], lb[i]);
        lane
    });
    compare(report, &format!("{ty} masked div"), quotient, reference);

    let mut remainder = a;
    conditional_assign::<RemainderAssign, T, N>(&mut remainder, &divisible, b);
    let reference = array::from_fn(|i| {
        let mut lane = la[i];
        lane.masked(ld[i]).rem(lb[i]);
        lane
    });
    compare(report, &format!("{ty} conditional rem"), remainder, reference);

    compare(report, &format!("{ty} as i8"), a.static_cast::<i8>(), la.map(|x| x.static_cast::<i8>()));
    compare(report, &format!("{ty} as f64"), a.static_cast::<f64>(), la.map(|x| x.static_cast::<f64>()));
    compare(report, &format!("{ty} into i64"), Vector::<i64, N>::from(a), la.map(Lane::<i64>::from));

    reduction_checks(report, ty, a, a.simd_lt(b));

    let mask = random_mask::<T, N>(rng);
    let lm = split_mask(mask);
    let mut wide = a;
    let wide_previous = conditional_update::<PostIncrement, T, N>(&mut wide, &mask);
    let mut lanes = la;
    let previous = array::from_fn(|i| conditional_update::<PostIncrement, T, 1>(&mut lanes[i], &lm[i]));
    compare(report, &format!("{ty} conditional PostIncrement"), wide, lanes);
    compare(report, &format!("{ty} conditional PostIncrement result"), wide_previous, previous);
    let wide_now = conditional_update::<PreDecrement, T, N>(&mut wide, &!mask);
    let now = array::from_fn(|i| conditional_update::<PreDecrement, T, 1>(&mut lanes[i], &!lm[i]));
    compare(report, &format!("{ty} conditional PreDecrement"), wide_now, now);

    shuffle_checks(rng, report, ty, a, b);
    pack_checks(rng, report, ty, a, b);
}

fn shuffle_checks<T: Element, const N: usize>(
    rng: &mut StdRng,
    report: &mut ConformanceReport,
    ty: &str,
    a: Vector<T, N>,
    b: Vector<T, N>,
) {
    let (la, lb) = (split(a), split(b));
    let n = N as i64;

    let amount = rng.random_range(-(N as i32)..=N as i32);
    let shifted = array::from_fn(|i| {
        let j = i as i64 + amount as i64;
        if (0..n).contains(&j) { la[j as usize] } else { Lane::zero() }
    });
    compare(report, &format!("{ty} shifted"), a.shifted(amount), shifted);

    let shifted_in = array::from_fn(|i| {
        let j = i as i64 + amount as i64;
        match j {
            j if j < 0 => lb[(j + n) as usize],
            j if j >= n => lb[(j - n) as usize],
            j => la[j as usize],
        }
    });
    compare(report, &format!("{ty} shifted_in"), a.shifted_in(amount, b), shifted_in);

    let rotation = rng.random_range(-3 * (N as i32)..=3 * N as i32);
    let rotated = array::from_fn(|i| la[(i as i64 + rotation as i64).rem_euclid(n) as usize]);
    compare(report, &format!("{ty} rotated"), a.rotated(rotation), rotated);

    let mut reversed = la;
    reversed.reverse();
    compare(report, &format!("{ty} reversed"), a.reversed(), reversed);

    let mut sorted = la;
    sorted.sort_by(|x, y| x[0].lane_cmp(&y[0]));
    compare(report, &format!("{ty} sorted"), a.sorted(), sorted);

    let interleaved: Vec<Lane<T>> = la.iter().zip(lb.iter()).flat_map(|(&x, &y)| [x, y]).collect();
    compare(
        report,
        &format!("{ty} interleave_low"),
        a.interleave_low(b),
        array::from_fn(|i| interleaved[i]),
    );
    compare(
        report,
        &format!("{ty} interleave_high"),
        a.interleave_high(b),
        array::from_fn(|i| interleaved[N + i]),
    );
}

fn pack_checks<T: Element, const N: usize>(
    rng: &mut StdRng,
    report: &mut ConformanceReport,
    ty: &str,
    a: Vector<T, N>,
    b: Vector<T, N>,
) {
    let m1 = random_mask::<T, N>(rng);
    let m2 = random_mask::<T, N>(rng);

    let (mut v, mut other, mut wide_m1, mut wide_m2) = (a, b, m1, m2);
    let full = v.pack(&mut wide_m1, &mut other, &mut wide_m2);

    let (mut lv, mut lother) = (split(a), split(b));
    let (mut lm1, mut lm2) = (split_mask(m1), split_mask(m2));
    let mut reference_full = true;
    for i in 0..N {
        reference_full &= lv[i].pack(&mut lm1[i], &mut lother[i], &mut lm2[i]);
    }

    compare(report, &format!("{ty} pack"), v, lv);
    compare_mask(report, &format!("{ty} pack mask1"), wide_m1, lm1);
    compare_mask(report, &format!("{ty} pack mask2"), wide_m2, lm2);
    report.record(&format!("{ty} pack result"), 1, (full != reference_full) as u64);
}

pub(super) fn memory_round<const N: usize>(rng: &mut StdRng, report: &mut ConformanceReport) {
    let len = 4 * N;
    let table: Vec<i32> = (0..len).map(|_| rng.random()).collect();
    let indexes = IndexVector::<N>::generate(|_| rng.random_range(0..len as i32));
    let values = Vector::<i32, N>::random(rng);
    let mask = random_mask::<i32, N>(rng);
    let (lv, lm) = (split(values), split_mask(mask));
    let lane_index = |i: usize| IndexVector::<1>::splat(indexes[i]);

    compare(
        report,
        "gather",
        Vector::gather(&table, indexes, LoadStoreFlags::UNALIGNED),
        array::from_fn(|i| Lane::gather(&table, lane_index(i), LoadStoreFlags::UNALIGNED)),
    );

    let mut wide = values;
    wide.gather_masked(&table, indexes, mask, LoadStoreFlags::UNALIGNED);
    let reference = array::from_fn(|i| {
        let mut lane = lv[i];
        lane.gather_masked(&table, lane_index(i), lm[i], LoadStoreFlags::UNALIGNED);
        lane
    });
    compare(report, "gather_masked", wide, reference);

    let mut wide_table = table.clone();
    let mut reference_table = table.clone();
    values.scatter(&mut wide_table, indexes, LoadStoreFlags::UNALIGNED);
    for (i, lane) in lv.iter().enumerate() {
        lane.scatter(&mut reference_table, lane_index(i), LoadStoreFlags::UNALIGNED);
    }
    compare_slices(report, "scatter", &wide_table, &reference_table);

    let mut wide_table = table.clone();
    let mut reference_table = table.clone();
    values.scatter_masked(&mut wide_table, indexes, mask, LoadStoreFlags::UNALIGNED);
    for (i, lane) in lv.iter().enumerate() {
        lane.scatter_masked(&mut reference_table, lane_index(i), lm[i], LoadStoreFlags::UNALIGNED);
    }
    compare_slices(report, "scatter_masked", &wide_table, &reference_table);

    let offset = rng.random_range(0..=len - N);
    compare(
        report,
        "load",
        Vector::<i32, N>::load(&table[offset..], LoadStoreFlags::UNALIGNED),
        array::from_fn(|i| Lane::load(&table[offset + i..], LoadStoreFlags::UNALIGNED)),
    );

    let mut wide_table = table.clone();
    let mut reference_table = table;
    values.store_masked(&mut wide_table[offset..], mask, LoadStoreFlags::UNALIGNED);
    for (i, lane) in lv.iter().enumerate() {
        lane.store_masked(&mut reference_table[offset + i..], lm[i], LoadStoreFlags::UNALIGNED);
    }
    compare_slices(report, "store_masked", &wide_table, &reference_table);
}
