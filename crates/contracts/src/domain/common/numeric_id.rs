/// Объявляет newtype-идентификатор поверх `u32`
///
/// Сериализуется прозрачно, как число, чтобы совпадать со схемой seed-данных.
#[macro_export]
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(value: u32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    numeric_id!(SampleId);

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SampleId::new(7)), "7");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let id: SampleId = serde_json::from_str("5").unwrap();
        assert_eq!(id, SampleId(5));
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    }
}
