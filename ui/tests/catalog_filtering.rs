//! Behaviour of the rooms filter and gallery lightbox against both the
//! embedded catalog and small hand-built ones.

use ui::catalog::{self, Room, RoomCategory, ViewType};
use ui::filter::{FilterState, GalleryFilter, PriceRange, Selection, SortOrder};
use ui::lightbox::Lightbox;

fn room(id: &str, category: RoomCategory, price: f64) -> Room {
    Room {
        id: id.into(),
        name_key: format!("room-{id}-name"),
        description_key: format!("room-{id}-description"),
        capacity: 2,
        size: 30.0,
        base_price: price,
        images: vec![format!("/images/rooms/{id}.jpg")],
        features: vec!["wifi".into()],
        view: ViewType::Garden,
        category,
        building: "Main Building".into(),
        connecting_rooms: false,
    }
}

fn ids(rooms: &[&Room]) -> Vec<String> {
    rooms.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn default_state_returns_whole_catalog_in_order() {
    let rooms = catalog::rooms().items();
    let all = FilterState::default().apply(rooms);
    assert_eq!(all.len(), rooms.len());
    assert!(all.iter().zip(rooms).all(|(a, b)| a.id == b.id));
}

#[test]
fn adding_a_predicate_never_grows_the_result() {
    let rooms = catalog::rooms().items();
    let steps: Vec<Box<dyn Fn(&mut FilterState)>> = vec![
        Box::new(|s| s.view = Selection::Only(ViewType::Sea)),
        Box::new(|s| s.min_capacity = Some(3)),
        Box::new(|s| s.building = Selection::Only("wing".into())),
        Box::new(|s| s.toggle_amenity("terrace")),
        Box::new(|s| s.price = PriceRange::new(300.0, 500.0)),
        Box::new(|s| s.category = Selection::Only(RoomCategory::Family)),
    ];

    let mut state = FilterState::default();
    let mut previous = state.apply(rooms);
    for step in steps {
        step(&mut state);
        let next = state.apply(rooms);
        assert!(next.len() <= previous.len());
        assert!(next.iter().all(|r| previous.iter().any(|p| p.id == r.id)));
        previous = next;
    }
}

#[test]
fn predicates_are_anded() {
    let rooms = vec![
        room("a", RoomCategory::Standard, 150.0),
        room("b", RoomCategory::Deluxe, 280.0),
        room("c", RoomCategory::Standard, 450.0),
    ];
    let state = FilterState {
        category: Selection::Only(RoomCategory::Standard),
        price: PriceRange::new(100.0, 200.0),
        ..FilterState::default()
    };
    assert_eq!(ids(&state.apply(&rooms)), ["a"]);
}

#[test]
fn same_state_gives_same_output() {
    let rooms = catalog::rooms().items();
    let state = FilterState {
        view: Selection::Only(ViewType::Sea),
        ..FilterState::default()
    };
    assert_eq!(ids(&state.apply(rooms)), ids(&state.apply(rooms)));
}

#[test]
fn empty_result_then_reset_restores_everything() {
    let rooms = catalog::rooms().items();
    let mut state = FilterState {
        price: PriceRange::new(1.0, 2.0),
        ..FilterState::default()
    };
    assert!(state.apply(rooms).is_empty());
    state.reset();
    assert_eq!(state.apply(rooms).len(), rooms.len());
}

#[test]
fn sorting_after_filtering_keeps_the_same_rooms() {
    let rooms = catalog::rooms().items();
    let state = FilterState {
        category: Selection::Only(RoomCategory::Suite),
        ..FilterState::default()
    };
    let filtered = state.apply(rooms);
    let mut sorted = filtered.clone();
    SortOrder::PriceDesc.apply(&mut sorted);

    let mut a = ids(&filtered);
    let mut b = ids(&sorted);
    a.sort();
    b.sort();
    assert_eq!(a, b);
    assert!(sorted.windows(2).all(|w| w[0].base_price >= w[1].base_price));
}

#[test]
fn lightbox_wraps_both_ways() {
    assert_eq!(Lightbox::Open(4).next(5), Lightbox::Open(0));
    assert_eq!(Lightbox::Open(0).previous(5), Lightbox::Open(4));
}

#[test]
fn lightbox_rescoped_when_gallery_shrinks() {
    let state = Lightbox::open(2, 6).rescope(3);
    assert!(matches!(state.index(), Some(i) if i < 3));
    assert_eq!(Lightbox::open(2, 6).rescope(0), Lightbox::Closed);
}

#[test]
fn lightbox_follows_filtered_gallery() {
    let images = catalog::gallery().items();
    let filter = GalleryFilter {
        category: Selection::Only(catalog::GalleryCategory::Spa),
    };
    let spa = filter.apply(images);
    assert!(!spa.is_empty());

    let last = images.len() - 1;
    let state = Lightbox::open(last, images.len()).rescope(spa.len());
    assert_eq!(state.index(), Some(spa.len() - 1));
}
