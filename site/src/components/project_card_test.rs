use super::*;
use crate::data::projects::PROJECTS;

#[test]
fn visible_tech_shows_all_chips_for_short_lists() {
    let tech = [Tech::WordPress, Tech::Php];
    let (shown, overflow) = visible_tech(&tech);
    assert_eq!(shown, &tech);
    assert_eq!(overflow, 0);
}

#[test]
fn visible_tech_caps_at_three_and_counts_the_rest() {
    let tech = [Tech::WordPress, Tech::WooCommerce, Tech::Elementor, Tech::Acf, Tech::Php];
    let (shown, overflow) = visible_tech(&tech);
    assert_eq!(shown.len(), 3);
    assert_eq!(overflow, 2);
}

#[test]
fn visible_tech_handles_empty_lists() {
    let (shown, overflow) = visible_tech(&[]);
    assert!(shown.is_empty());
    assert_eq!(overflow, 0);
}

#[test]
fn catalog_cards_never_overflow_by_more_than_one_chip() {
    // Every record in the catalog carries four tags, so the card renders
    // three chips plus a "+1 more" marker.
    for project in PROJECTS {
        let (shown, overflow) = visible_tech(project.tech);
        assert_eq!(shown.len(), 3, "project {}", project.id);
        assert_eq!(overflow, 1, "project {}", project.id);
    }
}
