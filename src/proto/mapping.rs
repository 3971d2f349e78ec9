// ============================================================================
// Wire Mapping Macros
// Declarative wire-message -> domain-model conversion
// ============================================================================
//
// `wire_model!` generates a `From<wire>` impl from a field list:
//
//     wire_model!(proto::Item => Item {
//         uid,                          // moved as is
//         kind = r#type: into,          // renamed, converted with Into
//         price: or_default,            // Option<wire> -> model, default when absent
//         created_at: timestamp,        // Option<DateTime> -> DateTime, epoch when absent
//         trades: each,                 // Vec<wire> -> Vec<model>
//     });
//
// `wire_enum!` declares an i32-backed enum with lossless conversions to and
// from the wire integer. Unknown values decode to the `#[default]` variant.

macro_rules! wire_model {
    (@field $wire:ident, $field:ident) => {
        $wire.$field
    };
    (@field $wire:ident, $field:ident, $src:ident) => {
        $wire.$src
    };
    (@convert $value:expr) => {
        $value
    };
    (@convert $value:expr, into) => {
        ::core::convert::Into::into($value)
    };
    (@convert $value:expr, or_default) => {
        ($value).map(::core::convert::Into::into).unwrap_or_default()
    };
    (@convert $value:expr, timestamp) => {
        ($value).unwrap_or(::chrono::DateTime::<::chrono::Utc>::UNIX_EPOCH)
    };
    (@convert $value:expr, each) => {
        ($value)
            .into_iter()
            .map(::core::convert::Into::into)
            .collect()
    };
    ($wire:ty => $model:ident {
        $($field:ident $(= $src:ident)? $(: $conv:ident)?),* $(,)?
    }) => {
        impl From<$wire> for $model {
            fn from(wire: $wire) -> Self {
                Self {
                    $(
                        $field: wire_model!(
                            @convert wire_model!(@field wire, $field $(, $src)?) $(, $conv)?
                        ),
                    )*
                }
            }
        }
    };
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(i32)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    _ => Self::default(),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value as i32
            }
        }
    };
}

pub(crate) use wire_enum;
pub(crate) use wire_model;

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    struct WireRow {
        id: String,
        r#type: i32,
        amount: Option<crate::proto::Quotation>,
        at: Option<DateTime<Utc>>,
        tags: Vec<crate::proto::Quotation>,
    }

    wire_enum! {
        enum Kind {
            #[default]
            Unknown = 0,
            First = 1,
            Second = 2,
        }
    }

    struct Row {
        id: String,
        kind: Kind,
        amount: crate::numeric::Quotation,
        at: DateTime<Utc>,
        tags: Vec<crate::numeric::Quotation>,
    }

    wire_model!(WireRow => Row {
        id,
        kind = r#type: into,
        amount: or_default,
        at: timestamp,
        tags: each,
    });

    #[test]
    fn test_wire_model_mapping() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let row = Row::from(WireRow {
            id: "op-1".to_string(),
            r#type: 2,
            amount: Some(crate::proto::Quotation {
                units: 3,
                nano: 5,
            }),
            at: Some(at),
            tags: vec![crate::proto::Quotation { units: 1, nano: 0 }],
        });

        assert_eq!(row.id, "op-1");
        assert_eq!(row.kind, Kind::Second);
        assert_eq!(row.amount, crate::numeric::Quotation::new(3, 5));
        assert_eq!(row.at, at);
        assert_eq!(row.tags, vec![crate::numeric::Quotation::new(1, 0)]);
    }

    #[test]
    fn test_wire_model_defaults_for_absent_fields() {
        let row = Row::from(WireRow {
            id: String::new(),
            r#type: 99,
            amount: None,
            at: None,
            tags: Vec::new(),
        });

        assert_eq!(row.kind, Kind::Unknown);
        assert!(row.amount.is_zero());
        assert_eq!(row.at, DateTime::<Utc>::UNIX_EPOCH);
        assert!(row.tags.is_empty());
    }

    #[test]
    fn test_wire_enum_round_trip() {
        assert_eq!(i32::from(Kind::First), 1);
        assert_eq!(Kind::from(1), Kind::First);
        assert_eq!(Kind::from(-4), Kind::Unknown);
    }
}
