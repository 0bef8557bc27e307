//! Registry behaviour under concurrent first access.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use keystone_test::component::error::CoreError;
use keystone_test::component::{Enumeration, enumeration};

enumeration! {
    /// Only touched by `concurrent_first_access_sees_one_set`.
    pub struct Weekday {
        MONDAY = (1, "Monday"),
        TUESDAY = (2, "Tuesday"),
        WEDNESDAY = (3, "Wednesday"),
        THURSDAY = (4, "Thursday"),
        FRIDAY = (5, "Friday"),
        SATURDAY = (6, "Saturday"),
        SUNDAY = (7, "Sunday"),
    }
}

enumeration! {
    pub struct Status {
        ACTIVE = (1, "Active"),
        INACTIVE = (2, "Inactive"),
        PENDING = (3, "Pending"),
    }
}

enumeration! {
    /// Shares ids with `Status` on purpose.
    pub struct Shade {
        LIGHT = (1, "Light"),
        DARK = (2, "Dark"),
    }
}

#[test_log::test]
fn concurrent_first_access_sees_one_set() {
    const THREADS: usize = 32;

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                Weekday::all()
            })
        })
        .collect();

    let sets: Vec<Arc<[Weekday]>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let first = &sets[0];
    assert_eq!(first.len(), 7);
    let ids: HashSet<u32> = first.iter().map(Enumeration::id).collect();
    assert_eq!(ids, (1..=7).collect::<HashSet<u32>>());

    for set in &sets {
        assert!(Arc::ptr_eq(first, set));
    }
}

#[test]
fn documented_status_scenario() {
    let all = Status::all();
    assert_eq!(&*all, &[Status::ACTIVE, Status::INACTIVE, Status::PENDING]);
    assert_eq!(Status::from_id(1).unwrap(), Status::ACTIVE);
    assert_eq!(Status::from_value("active").unwrap(), Status::ACTIVE);
    assert!(matches!(Status::from_id(999), Err(CoreError::NotFound(_))));
    assert!(matches!(
        Status::from_id(-1),
        Err(CoreError::InvalidArgument(_))
    ));
    assert!(matches!(
        Status::from_value("archived"),
        Err(CoreError::NotFound(_))
    ));
}

#[test]
fn registries_are_kept_per_type() {
    assert_eq!(Status::all().len(), 3);
    assert_eq!(Shade::all().len(), 2);
    assert_eq!(Shade::from_id(1).unwrap(), Shade::LIGHT);
    assert_eq!(Status::from_id(1).unwrap(), Status::ACTIVE);
    assert_eq!(Shade::LIGHT.id(), Status::ACTIVE.id());
}
