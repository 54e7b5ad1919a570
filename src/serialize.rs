//! serde support.
//!
//! Vectors serialize as a tuple of their `N` lanes and masks as a tuple of `N` booleans, so
//! a `Vector<f32, 4>` reads `[1.0, 2.0, 3.0, 4.0]` in JSON. Deserializing checks the lane
//! count.

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
};

use crate::{element::Element, mask::Mask, vector::Vector};

fn serialize_lanes<S: Serializer, L: Serialize>(lanes: &[L], serializer: S) -> Result<S::Ok, S::Error> {
    let mut tuple = serializer.serialize_tuple(lanes.len())?;
    for lane in lanes {
        tuple.serialize_element(lane)?;
    }
    tuple.end()
}

struct LanesVisitor<L, const N: usize>(PhantomData<L>);

impl<'de, L: Deserialize<'de> + Copy + Default, const N: usize> Visitor<'de> for LanesVisitor<L, N> {
    type Value = [L; N];

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {N} lanes")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[L; N], A::Error> {
        let mut lanes = [L::default(); N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(<A::Error as de::Error>::invalid_length(N + 1, &self));
        }
        Ok(lanes)
    }
}

fn deserialize_lanes<'de, D, L, const N: usize>(deserializer: D) -> Result<[L; N], D::Error>
where
    D: Deserializer<'de>,
    L: Deserialize<'de> + Copy + Default,
{
    deserializer.deserialize_tuple(N, LanesVisitor::<L, N>(PhantomData))
}

impl<T: Element + Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_lanes(self.as_slice(), serializer)
    }
}

impl<'de, T: Element + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_lanes::<D, T, N>(deserializer).map(Vector::from_array)
    }
}

impl<T: Element, const N: usize> Serialize for Mask<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_lanes(&self.to_array(), serializer)
    }
}

impl<'de, T: Element, const N: usize> Deserialize<'de> for Mask<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_lanes::<D, bool, N>(deserializer).map(Mask::from_array)
    }
}
