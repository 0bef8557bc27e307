//! Process-wide cache of enumeration instances.
//!
//! ## Summary
//! Keyed by the concrete type's [`TypeId`]. Each entry is populated at most
//! once from [`Enumeration::declared`] and never invalidated. Concurrent first
//! callers may each build the list, but only the first insert is kept and every
//! caller gets that same `Arc`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::model::enumeration::{CaseSensitivity, Enumeration};
use crate::util::text::{eq_ignore_case, require_non_negative, require_not_blank};

type Entry = Box<dyn Any + Send + Sync>;

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, Entry>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn lookup<T: Enumeration>() -> Option<Arc<[T]>> {
    let map = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    map.get(&TypeId::of::<T>())
        .and_then(|entry| entry.downcast_ref::<Arc<[T]>>())
        .cloned()
}

/// Every declared instance of `T`, in declaration order.
///
/// The first call for a given `T` populates the registry; later calls clone
/// the cached `Arc`.
#[must_use]
pub fn get_all<T: Enumeration>() -> Arc<[T]> {
    if let Some(all) = lookup::<T>() {
        return all;
    }

    let discovered: Arc<[T]> = T::declared().into();

    let mut map = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    let entry = map.entry(TypeId::of::<T>()).or_insert_with(|| {
        tracing::debug!(
            enumeration = std::any::type_name::<T>(),
            count = discovered.len(),
            "Populated enumeration registry"
        );
        Box::new(Arc::clone(&discovered))
    });

    entry
        .downcast_ref::<Arc<[T]>>()
        .cloned()
        .unwrap_or(discovered)
}

/// ## Summary
/// Finds the instance of `T` with the given id.
///
/// ## Errors
/// Returns `InvalidArgument` when `id` is negative and `NotFound` when no
/// instance carries it.
pub fn parse_id<T: Enumeration>(id: i32) -> CoreResult<T> {
    let id = require_non_negative("id", id)?;
    get_all::<T>()
        .iter()
        .find(|item| item.id() == id)
        .cloned()
        .ok_or_else(|| CoreError::NotFound(format!("{} not found with id {id}", short_name::<T>())))
}

/// ## Summary
/// Finds the first instance of `T` whose value matches under `sensitivity`.
///
/// ## Errors
/// Returns `InvalidArgument` when `value` is empty or whitespace and
/// `NotFound` when nothing matches.
pub fn parse_value<T: Enumeration>(value: &str, sensitivity: CaseSensitivity) -> CoreResult<T> {
    require_not_blank("value", value)?;
    get_all::<T>()
        .iter()
        .find(|item| match sensitivity {
            CaseSensitivity::Sensitive => item.value() == value,
            CaseSensitivity::Insensitive => eq_ignore_case(item.value(), value),
        })
        .cloned()
        .ok_or_else(|| {
            CoreError::NotFound(format!(
                "{} not found with value {value}",
                short_name::<T>()
            ))
        })
}

/// Last path segment of `T`'s name, without generic arguments.
fn short_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    let path = name.split('<').next().unwrap_or(name);
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::model::enumeration::EnumerationBase;

    static DECLARED_CALLS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Clone)]
    struct Counted(EnumerationBase);

    impl Enumeration for Counted {
        fn declared() -> Vec<Self> {
            DECLARED_CALLS.fetch_add(1, Ordering::SeqCst);
            vec![
                Self(EnumerationBase::declare(0, "Zero")),
                Self(EnumerationBase::declare(1, "One")),
            ]
        }

        fn base(&self) -> &EnumerationBase {
            &self.0
        }
    }

    #[derive(Debug, Clone)]
    struct Digit(EnumerationBase);

    impl Enumeration for Digit {
        fn declared() -> Vec<Self> {
            vec![
                Self(EnumerationBase::declare(0, "Zero")),
                Self(EnumerationBase::declare(1, "One")),
            ]
        }

        fn base(&self) -> &EnumerationBase {
            &self.0
        }
    }

    #[derive(Debug, Clone)]
    struct Empty(EnumerationBase);

    impl Enumeration for Empty {
        fn declared() -> Vec<Self> {
            Vec::new()
        }

        fn base(&self) -> &EnumerationBase {
            &self.0
        }
    }

    #[test_log::test]
    fn populates_once_per_type() {
        let first = get_all::<Counted>();
        let second = get_all::<Counted>();
        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(DECLARED_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn parse_by_id_and_value() {
        assert_eq!(parse_id::<Digit>(0).unwrap().value(), "Zero");
        assert_eq!(
            parse_value::<Digit>("one", CaseSensitivity::Insensitive)
                .unwrap()
                .id(),
            1
        );
    }

    #[test]
    fn not_found_names_the_type() {
        let err = parse_id::<Digit>(42).unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound("Digit not found with id 42".to_string())
        );
        let err = parse_value::<Digit>("Two", CaseSensitivity::Sensitive).unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound("Digit not found with value Two".to_string())
        );
    }

    #[test]
    fn short_name_drops_path_and_generics() {
        assert_eq!(short_name::<Digit>(), "Digit");
        assert_eq!(short_name::<Option<std::string::String>>(), "Option");
        assert_eq!(
            short_name::<std::collections::HashMap<u32, Vec<Digit>>>(),
            "HashMap"
        );
        assert_eq!(short_name::<u32>(), "u32");
    }

    #[test]
    fn empty_enumeration_finds_nothing() {
        assert!(get_all::<Empty>().is_empty());
        assert!(matches!(parse_id::<Empty>(0), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn validation_precedes_lookup() {
        assert!(matches!(
            parse_id::<Empty>(-3),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_value::<Empty>("\t", CaseSensitivity::Insensitive),
            Err(CoreError::InvalidArgument(_))
        ));
    }
}
