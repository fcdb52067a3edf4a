use super::*;

#[test]
fn detail_routes_embed_the_id() {
    assert_eq!(why_us_detail("w1"), "/whyus/w1");
    assert_eq!(service_detail("s1"), "/serviceDetail/s1");
    assert_eq!(package_detail("p1"), "/package/p1");
}

#[test]
fn create_route_does_not_collide_with_detail_route() {
    assert_ne!(WHY_US_NEW, why_us_detail("w1"));
    assert!(WHY_US_NEW.starts_with("/whyus/"));
}
