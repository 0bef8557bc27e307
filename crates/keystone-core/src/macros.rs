/// Unwraps a successful [`Outcome`](crate::Outcome) or returns its failure
/// from the enclosing function.
///
/// The enclosing function must return an `Outcome<U>` for some `U`; the error
/// is moved across unchanged.
///
/// ```
/// use keystone_core::{Error, Outcome, try_outcome};
///
/// fn lookup(id: u32) -> Outcome<u32> {
///     match Error::new("Not Found", 404, "No such id.") {
///         Ok(error) if id == 0 => error.into(),
///         _ => Outcome::with_value(id * 10),
///     }
/// }
///
/// fn describe(id: u32) -> Outcome<String> {
///     let value = try_outcome!(lookup(id));
///     Outcome::with_value(format!("value {value}"))
/// }
///
/// assert_eq!(describe(2).into_value().as_deref(), Some("value 20"));
/// assert!(describe(0).is_failure());
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => return $crate::Outcome::Failure(error),
        }
    };
}

/// Declares a strongly-typed enumeration.
///
/// Generates a newtype over [`EnumerationBase`](crate::EnumerationBase), one
/// associated constant per entry, and the [`Enumeration`](crate::Enumeration)
/// impl listing those constants in declaration order. Equality, ordering and
/// hashing use the id and only compare instances of the same type. `Display`
/// prints the value, `FromStr` parses a value ignoring case, `TryFrom<i32>`
/// parses an id, and serde reads and writes the value.
///
/// A blank value or a negative id fails to compile.
///
/// ```
/// use keystone_core::{Enumeration, enumeration};
///
/// enumeration! {
///     pub struct Status {
///         ACTIVE = (1, "Active"),
///         INACTIVE = (2, "Inactive"),
///     }
/// }
///
/// assert_eq!(Status::from_value("active").unwrap(), Status::ACTIVE);
/// assert_eq!(Status::all().len(), 2);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$item_meta:meta])*
                $item:ident = ($id:literal, $value:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name($crate::EnumerationBase);

        impl $name {
            $(
                $(#[$item_meta])*
                pub const $item: Self = Self($crate::EnumerationBase::declare($id, $value));
            )+
        }

        impl $crate::Enumeration for $name {
            fn declared() -> ::std::vec::Vec<Self> {
                ::std::vec![$(Self::$item),+]
            }

            fn base(&self) -> &$crate::EnumerationBase {
                &self.0
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(&self.0, &other.0)
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.0, state);
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::Enumeration>::from_value(s)
            }
        }

        impl ::core::convert::TryFrom<i32> for $name {
            type Error = $crate::error::CoreError;

            fn try_from(id: i32) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::Enumeration>::from_id(id)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serializer::serialize_str(
                    serializer,
                    <Self as $crate::Enumeration>::value(self),
                )
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <Self as $crate::Enumeration>::from_value(&value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
