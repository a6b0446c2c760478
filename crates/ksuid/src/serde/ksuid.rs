use serde::{Deserializer, Serializer};

pub mod as_native_ksuid {
    use super::*;
    use crate::KsuidId;
    use core::{fmt, marker::PhantomData};
    use serde::de::{Error, SeqAccess, Visitor};

    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: KsuidId,
        S: Serializer,
    {
        s.serialize_bytes(id.to_be_bytes().as_ref())
    }

    /// Accepts a byte string or a sequence of exactly `ID::SIZE` bytes.
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: KsuidId,
        D: Deserializer<'de>,
    {
        struct BytesVisitor<ID>(PhantomData<ID>);

        impl<'de, ID: KsuidId> Visitor<'de> for BytesVisitor<ID> {
            type Value = ID;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "{} big-endian bytes", ID::SIZE)
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: Error,
            {
                if v.len() != ID::SIZE {
                    return Err(E::invalid_length(v.len(), &self));
                }
                let mut bytes = ID::ByteArray::default();
                bytes.as_mut().copy_from_slice(v);
                Ok(ID::from_be_bytes(bytes))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut bytes = ID::ByteArray::default();
                for (i, byte) in bytes.as_mut().iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<u8>()?.is_some() {
                    return Err(A::Error::invalid_length(ID::SIZE + 1, &self));
                }
                Ok(ID::from_be_bytes(bytes))
            }
        }

        d.deserialize_bytes(BytesVisitor(PhantomData))
    }
}

pub mod as_base62_ksuid {
    use super::*;
    use crate::Base62KsuidExt;
    use core::{fmt, marker::PhantomData};

    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: Base62KsuidExt,
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: Base62KsuidExt,
        D: Deserializer<'de>,
    {
        struct Base62Visitor<ID>(PhantomData<ID>);

        impl<ID: Base62KsuidExt> serde::de::Visitor<'_> for Base62Visitor<ID> {
            type Value = ID;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a {}-character base62 string", ID::ENCODED_LEN)
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ID::decode(v).map_err(E::custom)
            }
        }

        d.deserialize_str(Base62Visitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ksuid, Ksuid128, U96, U128};
    use serde::{Deserialize, Serialize};
    use serde::de::value::{BytesDeserializer, Error as ValueError};

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct TextRow {
        #[serde(with = "as_base62_ksuid")]
        event_id: Ksuid,
    }

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct NativeRow {
        #[serde(with = "as_native_ksuid")]
        event_id: Ksuid128,
    }

    #[test]
    fn base62_ksuid_roundtrip() {
        let row = TextRow {
            event_id: Ksuid::from_parts(
                1_700_000_000,
                U96::from_parts(0x0123_4567, 0x89AB_CDEF_FEDC_BA98),
            ),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"0000035CaLwwkSXDvssKURDNoAi"}"#);
        let back: TextRow = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn base62_ksuid_rejects_bad_text() {
        for json in [
            r#"{"event_id":"0"}"#,
            r#"{"event_id":"0000035CaLwwkSXDvssKURDNo-i"}"#,
            r#"{"event_id":"zzzzzzzzzzzzzzzzzzzzzzzzzzz"}"#,
            r#"{"event_id":42}"#,
        ] {
            assert!(serde_json::from_str::<TextRow>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn native_ksuid_roundtrip() {
        let row = NativeRow {
            event_id: Ksuid128::from_parts(1, U128::from(2_u64)),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(
            json,
            r#"{"event_id":[0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2]}"#
        );
        let back: NativeRow = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn native_ksuid_rejects_wrong_length() {
        assert!(serde_json::from_str::<NativeRow>(r#"{"event_id":[0,1,2]}"#).is_err());
        let too_long = format!("{{\"event_id\":{:?}}}", [0_u8; 25]);
        assert!(serde_json::from_str::<NativeRow>(&too_long).is_err());
    }

    #[test]
    fn native_ksuid_from_byte_string() {
        let id = Ksuid::from_parts(9, U96::MAX);
        let bytes = id.to_bytes();
        let back: Ksuid =
            as_native_ksuid::deserialize(BytesDeserializer::<ValueError>::new(&bytes)).unwrap();
        assert_eq!(back, id);

        let short: Result<Ksuid, _> =
            as_native_ksuid::deserialize(BytesDeserializer::<ValueError>::new(&bytes[..19]));
        assert!(short.is_err());
    }
}
