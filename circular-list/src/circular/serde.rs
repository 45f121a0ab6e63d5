use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::CircularArrayList;

impl<T: Serialize> Serialize for CircularArrayList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct CircularArrayListVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for CircularArrayListVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = CircularArrayList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Don't trust the size hint of untrusted input any further than this
        const MAX_PREALLOCATE: usize = 4096;

        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(CircularArrayList::from_exact_iter(elements.into_iter()))
    }
}

impl<'de, T> Deserialize<'de> for CircularArrayList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(CircularArrayListVisitor(PhantomData))
    }
}
