use super::*;

#[test]
fn new_rejects_zero_slides() {
    assert_eq!(Carousel::new(0), Err(WidgetError::EmptyCarousel));
}

#[test]
fn starts_at_first_slide() {
    let carousel = Carousel::new(3).expect("three slides");
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.transform(), "translateX(-0%)");
}

#[test]
fn next_wraps_back_to_start() {
    let mut carousel = Carousel::new(3).expect("three slides");
    assert_eq!(carousel.next(), 1);
    assert_eq!(carousel.next(), 2);
    assert_eq!(carousel.next(), 0);
}

#[test]
fn previous_from_start_goes_to_last() {
    let mut carousel = Carousel::new(3).expect("three slides");
    assert_eq!(carousel.previous(), 2);
    assert_eq!(carousel.transform(), "translateX(-200%)");
}

#[test]
fn single_slide_stays_put() {
    let mut carousel = Carousel::new(1).expect("one slide");
    assert_eq!(carousel.next(), 0);
    assert_eq!(carousel.previous(), 0);
}

#[test]
fn rapid_steps_keep_index_in_range() {
    let mut carousel = Carousel::new(4).expect("four slides");
    for _ in 0..37 {
        carousel.next();
        assert!(carousel.current_index() < carousel.slide_count());
    }
    assert_eq!(carousel.current_index(), 37 % 4);
    for _ in 0..10 {
        carousel.previous();
        assert!(carousel.current_index() < carousel.slide_count());
    }
    assert_eq!(carousel.offset_percent(), ((37 - 10) % 4) * 100);
}
